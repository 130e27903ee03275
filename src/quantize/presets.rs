//! Built-in twelve-tone scales.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Scale;

/// Named scale as semitone degrees above the root.
pub type ScaleDegrees = (&'static str, &'static [u8]);

/// Built-in scales, in display order.
pub const PRESETS: &[ScaleDegrees] = &[
    ("Chromatic", &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]),
    ("Major", &[0, 2, 4, 5, 7, 9, 11]),
    ("Natural Minor", &[0, 2, 3, 5, 7, 8, 10]),
    ("Harmonic Minor", &[0, 2, 3, 5, 7, 8, 11]),
    ("Major Pentatonic", &[0, 2, 4, 7, 9]),
    ("Minor Pentatonic", &[0, 3, 5, 7, 10]),
    ("Dorian", &[0, 2, 3, 5, 7, 9, 10]),
    ("Whole Tone", &[0, 2, 4, 6, 8, 10]),
    ("Blues", &[0, 3, 5, 6, 7, 10]),
];

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    Chromatic,
    #[default]
    Major,
    NaturalMinor,
    HarmonicMinor,
    MajorPentatonic,
    MinorPentatonic,
    Dorian,
    WholeTone,
    Blues,
}

impl Preset {
    pub const ALL: [Preset; 9] = [
        Preset::Chromatic,
        Preset::Major,
        Preset::NaturalMinor,
        Preset::HarmonicMinor,
        Preset::MajorPentatonic,
        Preset::MinorPentatonic,
        Preset::Dorian,
        Preset::WholeTone,
        Preset::Blues,
    ];

    fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        PRESETS[self.index()].0
    }

    pub fn degrees(self) -> &'static [u8] {
        PRESETS[self.index()].1
    }

    pub fn scale(self) -> Scale {
        let mut scale = Scale::from_semitones(self.degrees())
            .unwrap_or_else(|_| unreachable!("presets hold at most 12 degrees"));
        scale.sort();
        scale
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Case-insensitive lookup that ignores spaces, dashes and underscores.
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = normalize(name);
        Self::ALL.into_iter().find(|p| normalize(p.name()) == wanted)
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
