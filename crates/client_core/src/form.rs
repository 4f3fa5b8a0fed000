//! In-progress activity form and its edit-mode marker.

use shared::{
    domain::{
        ActivityId, Category, Tier, DESCRIPTION_MAX_CHARS, HOURS_PER_WEEK_MAX, HOURS_PER_WEEK_MIN,
        NAME_MAX_CHARS,
    },
    error::{FormField, ValidationError},
    protocol::{Activity, ActivityDraft},
    scoring::{impact_score, ImpactLabel},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityForm {
    name: String,
    category: Option<Category>,
    tier: Option<Tier>,
    description: String,
    hours_per_week: i32,
    is_leadership: bool,
    editing: Option<ActivityId>,
}

impl ActivityForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn tier(&self) -> Option<Tier> {
        self.tier
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn hours_per_week(&self) -> i32 {
        self.hours_per_week
    }

    pub fn is_leadership(&self) -> bool {
        self.is_leadership
    }

    /// Identifier of the record being edited; `None` while creating a new one.
    pub fn editing_id(&self) -> Option<ActivityId> {
        self.editing
    }

    /// Names longer than [`NAME_MAX_CHARS`] are truncated.
    pub fn set_name(&mut self, name: &str) {
        self.name = name.chars().take(NAME_MAX_CHARS).collect();
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        self.category = category;
    }

    pub fn set_tier(&mut self, tier: Option<Tier>) {
        self.tier = tier;
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = description.to_string();
    }

    pub fn set_hours_per_week(&mut self, hours: i32) {
        self.hours_per_week = hours;
    }

    pub fn set_leadership(&mut self, is_leadership: bool) {
        self.is_leadership = is_leadership;
    }

    /// Score the current fields would be saved with.
    pub fn preview_score(&self) -> i32 {
        impact_score(self.tier, self.is_leadership, self.hours_per_week)
    }

    pub fn preview_label(&self) -> ImpactLabel {
        ImpactLabel::from_score(self.preview_score())
    }

    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        if self.name.is_empty() {
            errors.push(ValidationError::Required(FormField::Name));
        }
        if self.category.is_none() {
            errors.push(ValidationError::Required(FormField::Category));
        }
        if self.tier.is_none() {
            errors.push(ValidationError::Required(FormField::Tier));
        }
        let description_len = self.description.chars().count();
        if description_len == 0 {
            errors.push(ValidationError::Required(FormField::Description));
        } else if description_len > DESCRIPTION_MAX_CHARS {
            errors.push(ValidationError::DescriptionTooLong {
                actual: description_len,
            });
        }
        if !(HOURS_PER_WEEK_MIN..=HOURS_PER_WEEK_MAX).contains(&self.hours_per_week) {
            errors.push(ValidationError::HoursOutOfRange {
                actual: self.hours_per_week,
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Builds the request body with a freshly computed impact score.
    pub fn to_draft(&self) -> Result<ActivityDraft, Vec<ValidationError>> {
        self.validate()?;
        Ok(ActivityDraft {
            name: self.name.clone(),
            category: self.category.map(Category::as_str).unwrap_or_default().to_string(),
            tier: self.tier.map(Tier::as_str).unwrap_or_default().to_string(),
            description: self.description.clone(),
            hours_per_week: self.hours_per_week,
            is_leadership: self.is_leadership,
            impact_score: self.preview_score(),
        })
    }

    /// Enters edit mode for `activity`. The stored score is not copied; it is
    /// recomputed on submit. Category or tier names that no longer parse are
    /// left unset.
    pub fn begin_edit(&mut self, activity: &Activity) {
        let draft = &activity.draft;
        self.editing = Some(activity.id);
        self.set_name(&draft.name);
        self.category = draft.category.parse().ok();
        self.tier = draft.tier.parse().ok();
        self.description = draft.description.clone();
        self.hours_per_week = draft.hours_per_week;
        self.is_leadership = draft.is_leadership;
    }

    /// Leaves edit mode and clears every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
