use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("ppicalc version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
