use serde::{Deserialize, Serialize};

use crate::{
    domain::ActivityId,
    scoring::{impact_score_for_tier_name, ImpactLabel},
};

/// Request body for create and update: an activity without its identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityDraft {
    pub name: String,
    pub category: String,
    pub tier: String,
    pub description: String,
    pub hours_per_week: i32,
    pub is_leadership: bool,
    pub impact_score: i32,
}

impl ActivityDraft {
    /// Score these fields would earn if saved now, ignoring the stored value.
    pub fn recomputed_score(&self) -> i32 {
        impact_score_for_tier_name(&self.tier, self.is_leadership, self.hours_per_week)
    }
}

/// Canonical record as returned by the activity store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    #[serde(flatten)]
    pub draft: ActivityDraft,
}

impl Activity {
    pub fn name(&self) -> &str {
        &self.draft.name
    }

    pub fn impact_score(&self) -> i32 {
        self.draft.impact_score
    }

    pub fn impact_label(&self) -> ImpactLabel {
        ImpactLabel::from_score(self.draft.impact_score)
    }
}
