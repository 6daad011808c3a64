use serde::{Deserialize, Serialize};

/// One of the four ordered sub-divisions of a day.
///
/// Stages advance strictly in declaration order; past `Sunset` the journey
/// rolls over into the next day's `Sunrise`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stage {
    Sunrise,
    Noon,
    Evening,
    Sunset,
}

impl Stage {
    /// All stages in day order.
    pub const ALL: [Stage; 4] = [Stage::Sunrise, Stage::Noon, Stage::Evening, Stage::Sunset];

    /// The stage that follows this one within the same day, or `None` for
    /// `Sunset` (the day is over).
    pub fn next(&self) -> Option<Stage> {
        match self {
            Self::Sunrise => Some(Self::Noon),
            Self::Noon => Some(Self::Evening),
            Self::Evening => Some(Self::Sunset),
            Self::Sunset => None,
        }
    }

    /// Lowercase display name (e.g., "sunrise").
    pub fn title(&self) -> &'static str {
        match self {
            Self::Sunrise => "sunrise",
            Self::Noon => "noon",
            Self::Evening => "evening",
            Self::Sunset => "sunset",
        }
    }
}
