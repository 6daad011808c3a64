use serde::{Deserialize, Serialize};

/// The emotional tone of a single day of the journey.
///
/// Each day carries exactly one mood; day N maps to the Nth variant. Days
/// past the defined range fall back to `Acceptance`, the journey's closing
/// mood, rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Anticipation,
    Wonder,
    Doubt,
    Weariness,
    Despair,
    Hope,
    Acceptance,
}

impl Mood {
    /// All moods in day order.
    pub const ALL: [Mood; 7] = [
        Mood::Anticipation,
        Mood::Wonder,
        Mood::Doubt,
        Mood::Weariness,
        Mood::Despair,
        Mood::Hope,
        Mood::Acceptance,
    ];

    /// The mood for a 1-based day number. Out-of-range days (including 0)
    /// clamp to `Acceptance`.
    pub fn for_day(day: u8) -> Mood {
        match day {
            1 => Self::Anticipation,
            2 => Self::Wonder,
            3 => Self::Doubt,
            4 => Self::Weariness,
            5 => Self::Despair,
            6 => Self::Hope,
            _ => Self::Acceptance,
        }
    }

    /// Returns the tag string for this mood (e.g., "mood:doubt").
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Anticipation => "mood:anticipation",
            Self::Wonder => "mood:wonder",
            Self::Doubt => "mood:doubt",
            Self::Weariness => "mood:weariness",
            Self::Despair => "mood:despair",
            Self::Hope => "mood:hope",
            Self::Acceptance => "mood:acceptance",
        }
    }
}
