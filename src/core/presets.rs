// Common monitor presets offered as one-click entries

use super::share_url::RawTriple;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub label: &'static str,
    pub triple: RawTriple,
}

pub static PRESETS: [Preset; 10] = [
    preset("24\" 1080p", 1920.0, 1080.0, 24.0),
    preset("27\" 1440p", 2560.0, 1440.0, 27.0),
    preset("27\" 4K", 3840.0, 2160.0, 27.0),
    preset("32\" 4K", 3840.0, 2160.0, 32.0),
    preset("21.5\" 1080p", 1920.0, 1080.0, 21.5),
    preset("32\" 1440p", 2560.0, 1440.0, 32.0),
    preset("34\" UW 1440p", 3440.0, 1440.0, 34.0),
    preset("24\" 1920x1200", 1920.0, 1200.0, 24.0),
    preset("30\" 2560x1600", 2560.0, 1600.0, 30.0),
    preset("15.6\" Laptop", 1366.0, 768.0, 15.6),
];

const fn preset(label: &'static str, width: f64, height: f64, diagonal: f64) -> Preset {
    Preset {
        label,
        triple: RawTriple::new(width, height, diagonal),
    }
}

/// Look up a preset by label (case-insensitive) or by its `WxHxD` value
pub fn find_preset(query: &str) -> Option<&'static Preset> {
    let query = query.trim();
    PRESETS.iter().find(|p| {
        p.label.eq_ignore_ascii_case(query) || p.triple.to_string() == query
    })
}
