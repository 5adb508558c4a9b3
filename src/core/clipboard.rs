// Clipboard access through the platform's copy utility
use std::io::Write;
use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus, Stdio};

use crate::error::{PpiError, Result};

/// Copy utilities in order of preference, with the arguments that make them
/// read stdin into the clipboard
const CANDIDATES: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("clip", &[]),
];

/// First copy utility found on PATH
fn find_copy_tool() -> Option<(PathBuf, &'static [&'static str])> {
    CANDIDATES.iter().find_map(|(name, args)| {
        which::which(name).ok().map(|path| {
            log::debug!("Using clipboard tool {:?}", path);
            (path, *args)
        })
    })
}

/// Write `text` to the child's stdin, close it and wait for the child. The
/// child is reaped even when the write fails.
fn feed_and_wait(child: &mut Child, text: &str) -> Result<ExitStatus> {
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()).map_err(PpiError::from),
        None => Err(PpiError::clipboard("failed to open clipboard tool stdin")),
    };

    let status = child.wait()?;
    written?;
    Ok(status)
}

/// Place `text` on the system clipboard
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let (tool, args) = find_copy_tool().ok_or_else(|| {
        PpiError::clipboard("no clipboard utility found (pbcopy, wl-copy, xclip, xsel, clip)")
    })?;

    let mut child = Command::new(&tool)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    let status = feed_and_wait(&mut child, text)?;
    if !status.success() {
        return Err(PpiError::clipboard(format!(
            "{} exited with {}",
            tool.display(),
            status
        )));
    }

    log::info!("Copied {} bytes to clipboard", text.len());
    Ok(())
}
