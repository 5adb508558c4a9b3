use crate::core::formulas::DerivedMetrics;
use crate::core::summary::PLACEHOLDER;

/// Format a number with a fixed count of decimal places (e.g. 91.79)
pub fn format_fixed(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

/// Format a number with digit grouping (e.g. 2,073,600)
///
/// Up to three fractional digits are kept, trailing zeros dropped.
pub fn format_grouped(value: f64, separator: char) -> String {
    let rendered = format!("{:.3}", value.abs());
    let (int_part, frac_part) = rendered
        .split_once('.')
        .unwrap_or((rendered.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(*digit);
    }

    let sign = if value < 0.0 && rendered.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };

    if frac_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac_part)
    }
}

/// The four output lines of an entry card: PPI, PPI², dot pitch, total pixels
pub fn format_metrics(metrics: Option<&DerivedMetrics>, separator: char) -> [String; 4] {
    match metrics {
        Some(m) => [
            format_fixed(m.ppi, 2),
            format_fixed(m.ppi2, 0),
            format_fixed(m.dot_pitch, 3),
            format_grouped(m.total_pixels, separator),
        ],
        None => [
            PLACEHOLDER.to_string(),
            PLACEHOLDER.to_string(),
            PLACEHOLDER.to_string(),
            PLACEHOLDER.to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_fixed(108.786, 2), "108.79");
        assert_eq!(format_fixed(0.2767, 3), "0.277");
        assert_eq!(format_fixed(8425.0, 0), "8425");
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(2_073_600.0, ','), "2,073,600");
        assert_eq!(format_grouped(999.0, ','), "999");
        assert_eq!(format_grouped(1000.0, '.'), "1.000");
        assert_eq!(format_grouped(1_049_088.0, ' '), "1 049 088");
        assert_eq!(format_grouped(1234.5, ','), "1,234.5");
        assert_eq!(format_grouped(0.0, ','), "0");
    }

    #[test]
    fn test_format_metrics_placeholder() {
        let lines = format_metrics(None, ',');
        assert!(lines.iter().all(|l| l == "-"));
    }
}
