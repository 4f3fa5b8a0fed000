//! Impact scoring for activities.
//!
//! The score is derived from tier, leadership and weekly hours only. It is
//! recomputed on every save and never edited directly.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::Tier;

pub const LEADERSHIP_BONUS: i32 = 2;
pub const HOURS_BONUS: i32 = 1;
/// Weekly hours strictly above this earn [`HOURS_BONUS`].
pub const HOURS_BONUS_THRESHOLD: i32 = 10;

/// Computes the impact score. A missing tier contributes no base points.
pub fn impact_score(tier: Option<Tier>, is_leadership: bool, hours_per_week: i32) -> i32 {
    let mut score = tier.map_or(0, Tier::base_points);
    if is_leadership {
        score += LEADERSHIP_BONUS;
    }
    if hours_per_week > HOURS_BONUS_THRESHOLD {
        score += HOURS_BONUS;
    }
    score
}

/// Same as [`impact_score`] for a raw tier name; empty or unrecognized names score base 0.
pub fn impact_score_for_tier_name(tier: &str, is_leadership: bool, hours_per_week: i32) -> i32 {
    impact_score(tier.parse().ok(), is_leadership, hours_per_week)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ImpactLabel {
    Low,
    Medium,
    High,
    Exceptional,
}

impl ImpactLabel {
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s >= 7 => ImpactLabel::Exceptional,
            s if s >= 5 => ImpactLabel::High,
            s if s >= 3 => ImpactLabel::Medium,
            _ => ImpactLabel::Low,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ImpactLabel::Low => "Low",
            ImpactLabel::Medium => "Medium",
            ImpactLabel::High => "High",
            ImpactLabel::Exceptional => "Exceptional",
        }
    }
}

impl fmt::Display for ImpactLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
