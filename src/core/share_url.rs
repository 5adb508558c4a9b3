//! Encoding of monitor dimensions into the `monitors` query parameter.
//!
//! The value is a comma-separated list of `WIDTHxHEIGHTxDIAGONAL` triples, for
//! example `1920x1080x24,2560x1440x27`. Decoding is lenient: segments that do
//! not parse are skipped and the rest are kept.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use url::Url;

/// Query parameter carrying the encoded monitors
pub const PARAM: &str = "monitors";

const ENTRY_SEPARATOR: char = ',';
const FIELD_SEPARATOR: char = 'x';

/// Width, height and diagonal of one monitor as they appear in a share link
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawTriple {
    pub width: f64,
    pub height: f64,
    pub diagonal: f64,
}

impl RawTriple {
    pub const fn new(width: f64, height: f64, diagonal: f64) -> Self {
        Self {
            width,
            height,
            diagonal,
        }
    }
}

/// Why a single `WxHxD` segment was rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShareUrlError {
    #[error("expected 3 fields separated by 'x', found {0}")]
    WrongPartCount(usize),

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("'{0}' must be greater than zero")]
    NotPositive(String),
}

impl fmt::Display for RawTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}",
            self.width,
            self.height,
            self.diagonal,
            sep = FIELD_SEPARATOR
        )
    }
}

impl FromStr for RawTriple {
    type Err = ShareUrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(FIELD_SEPARATOR).collect();
        if parts.len() != 3 {
            return Err(ShareUrlError::WrongPartCount(parts.len()));
        }

        let width = parse_dimension(parts[0])?;
        let height = parse_dimension(parts[1])?;
        let diagonal = parse_dimension(parts[2])?;

        Ok(Self::new(width, height, diagonal))
    }
}

fn parse_dimension(part: &str) -> Result<f64, ShareUrlError> {
    let trimmed = part.trim();
    let value: f64 = trimmed
        .parse()
        .ok()
        .filter(|v: &f64| v.is_finite())
        .ok_or_else(|| ShareUrlError::NotANumber(trimmed.to_string()))?;

    if value <= 0.0 {
        return Err(ShareUrlError::NotPositive(trimmed.to_string()));
    }

    Ok(value)
}

/// Join triples into a parameter value. `None` when there is nothing to share.
pub fn encode_value(triples: &[RawTriple]) -> Option<String> {
    if triples.is_empty() {
        return None;
    }

    let segments: Vec<String> = triples.iter().map(ToString::to_string).collect();
    Some(segments.join(&ENTRY_SEPARATOR.to_string()))
}

/// Parse every valid segment of a parameter value, in order
pub fn decode_value(value: &str) -> Vec<RawTriple> {
    value
        .split(ENTRY_SEPARATOR)
        .filter_map(|segment| match segment.parse::<RawTriple>() {
            Ok(triple) => Some(triple),
            Err(e) => {
                log::debug!("Skipping share segment {:?}: {}", segment, e);
                None
            }
        })
        .collect()
}

/// Current value of the `monitors` parameter, if present
pub fn read_param(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == PARAM)
        .map(|(_, value)| value.into_owned())
}

/// Copy of `url` with the `monitors` parameter replaced, or removed when `value`
/// is `None`. Other query parameters keep their order.
pub fn write_param(url: &Url, value: Option<&str>) -> Url {
    let others: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut updated = url.clone();
    updated.set_query(None);

    if others.is_empty() && value.is_none() {
        return updated;
    }

    {
        let mut pairs = updated.query_pairs_mut();
        for (key, val) in &others {
            pairs.append_pair(key, val);
        }
        if let Some(value) = value {
            pairs.append_pair(PARAM, value);
        }
    }

    updated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_shortest_float_form() {
        assert_eq!(RawTriple::new(1920.0, 1080.0, 24.0).to_string(), "1920x1080x24");
        assert_eq!(RawTriple::new(1366.0, 768.0, 15.6).to_string(), "1366x768x15.6");
    }

    #[test]
    fn test_parse_valid_segment() {
        let triple: RawTriple = "2560x1440x27".parse().unwrap();
        assert_eq!(triple, RawTriple::new(2560.0, 1440.0, 27.0));
    }

    #[test]
    fn test_parse_rejects_bad_segments() {
        assert_eq!(
            "bad".parse::<RawTriple>(),
            Err(ShareUrlError::WrongPartCount(1))
        );
        assert_eq!(
            "1920x1080".parse::<RawTriple>(),
            Err(ShareUrlError::WrongPartCount(2))
        );
        assert_eq!(
            "1920xabcx24".parse::<RawTriple>(),
            Err(ShareUrlError::NotANumber("abc".to_string()))
        );
        assert_eq!(
            "1920x1080xinf".parse::<RawTriple>(),
            Err(ShareUrlError::NotANumber("inf".to_string()))
        );
        assert_eq!(
            "1920x0x24".parse::<RawTriple>(),
            Err(ShareUrlError::NotPositive("0".to_string()))
        );
    }

    #[test]
    fn test_decode_skips_malformed_segments() {
        let triples = decode_value("bad,1920x1080x24,,1x2");
        assert_eq!(triples, vec![RawTriple::new(1920.0, 1080.0, 24.0)]);
    }

    #[test]
    fn test_encode_empty_is_none() {
        assert_eq!(encode_value(&[]), None);
    }

    #[test]
    fn test_encode_then_decode_keeps_order() {
        let triples = vec![
            RawTriple::new(3440.0, 1440.0, 34.0),
            RawTriple::new(1920.0, 1080.0, 21.5),
        ];
        let value = encode_value(&triples).unwrap();
        assert_eq!(value, "3440x1440x34,1920x1080x21.5");
        assert_eq!(decode_value(&value), triples);
    }

    #[test]
    fn test_write_param_preserves_other_pairs() {
        let url = Url::parse("http://localhost/ppi/?theme=dark&monitors=1x1x1").unwrap();

        let updated = write_param(&url, Some("1920x1080x24"));
        assert_eq!(read_param(&updated).as_deref(), Some("1920x1080x24"));
        assert!(updated.query().unwrap().starts_with("theme=dark"));

        let cleared = write_param(&updated, None);
        assert_eq!(cleared.query(), Some("theme=dark"));
        assert_eq!(read_param(&cleared), None);
    }

    #[test]
    fn test_write_param_none_removes_query() {
        let url = Url::parse("http://localhost/ppi/?monitors=1x1x1").unwrap();
        let cleared = write_param(&url, None);
        assert_eq!(cleared.as_str(), "http://localhost/ppi/");
    }

    #[test]
    fn test_comma_is_percent_encoded_and_decoded() {
        let url = Url::parse("http://localhost/ppi/").unwrap();
        let updated = write_param(&url, Some("1920x1080x24,2560x1440x27"));
        assert_eq!(updated.query(), Some("monitors=1920x1080x24%2C2560x1440x27"));
        assert_eq!(
            read_param(&updated).as_deref(),
            Some("1920x1080x24,2560x1440x27")
        );
    }
}
