use serde::Serialize;

/// A ready-made story topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Preset {
    /// Short identifier used on the command line.
    pub key: &'static str,
    /// Display label.
    pub label: &'static str,
    /// Topic text sent to the model.
    pub topic: &'static str,
}

const PRESETS: [Preset; 4] = [
    Preset {
        key: "jungle",
        label: "Jungle",
        topic: "Jungle Adventure with friendly animals",
    },
    Preset {
        key: "trucks",
        label: "Trucks",
        topic: "Big Trucks and Construction Sites",
    },
    Preset {
        key: "space",
        label: "Space",
        topic: "Space Journey to the Moon",
    },
    Preset {
        key: "castles",
        label: "Castles",
        topic: "Magical Castles and Dragons",
    },
];

pub fn presets() -> &'static [Preset] {
    &PRESETS
}

/// Look up a preset by key, ignoring case.
pub fn find_preset(key: &str) -> Option<&'static Preset> {
    PRESETS
        .iter()
        .find(|preset| preset.key.eq_ignore_ascii_case(key.trim()))
}
