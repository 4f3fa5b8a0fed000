use super::*;

fn valid_form() -> ActivityForm {
    let mut form = ActivityForm::new();
    form.set_name("Debate Club");
    form.set_category(Some(Category::Academic));
    form.set_tier(Some(Tier::State));
    form.set_description("Captain of the varsity team");
    form.set_hours_per_week(5);
    form
}

fn stored_activity() -> Activity {
    Activity {
        id: ActivityId(42),
        draft: ActivityDraft {
            name: "Robotics".into(),
            category: "Academic".into(),
            tier: "National".into(),
            description: "Lead programmer".into(),
            hours_per_week: 15,
            is_leadership: true,
            impact_score: 0,
        },
    }
}

#[test]
fn empty_form_reports_every_missing_field() {
    let errors = ActivityForm::new().validate().expect_err("must be invalid");
    let fields: Vec<FormField> = errors.iter().map(ValidationError::field).collect();
    assert_eq!(
        fields,
        vec![
            FormField::Name,
            FormField::Category,
            FormField::Tier,
            FormField::Description,
        ]
    );
}

#[test]
fn rejects_each_missing_required_field() {
    let mut form = valid_form();
    form.set_name("");
    assert!(!form.is_valid());

    let mut form = valid_form();
    form.set_category(None);
    assert!(!form.is_valid());

    let mut form = valid_form();
    form.set_tier(None);
    assert!(!form.is_valid());

    let mut form = valid_form();
    form.set_description("");
    assert!(!form.is_valid());
}

#[test]
fn description_limit_is_inclusive() {
    let mut form = valid_form();
    form.set_description(&"a".repeat(150));
    assert!(form.is_valid());

    form.set_description(&"a".repeat(151));
    assert_eq!(
        form.validate(),
        Err(vec![ValidationError::DescriptionTooLong { actual: 151 }])
    );
}

#[test]
fn description_length_counts_characters_not_bytes() {
    let mut form = valid_form();
    form.set_description(&"é".repeat(150));
    assert!(form.is_valid());
}

#[test]
fn hours_bounds_are_inclusive() {
    let mut form = valid_form();
    for hours in [0, 40] {
        form.set_hours_per_week(hours);
        assert!(form.is_valid(), "{hours} hours should be accepted");
    }
    for hours in [-1, 41] {
        form.set_hours_per_week(hours);
        assert_eq!(
            form.validate(),
            Err(vec![ValidationError::HoursOutOfRange { actual: hours }])
        );
    }
}

#[test]
fn name_is_truncated_to_fifty_characters() {
    let mut form = ActivityForm::new();
    form.set_name(&"x".repeat(80));
    assert_eq!(form.name().chars().count(), NAME_MAX_CHARS);
}

#[test]
fn preview_tracks_current_fields() {
    let mut form = valid_form();
    assert_eq!(form.preview_score(), 3);
    assert_eq!(form.preview_label(), ImpactLabel::Medium);

    form.set_tier(Some(Tier::National));
    form.set_leadership(true);
    form.set_hours_per_week(15);
    assert_eq!(form.preview_score(), 7);
    assert_eq!(form.preview_label(), ImpactLabel::Exceptional);
}

#[test]
fn draft_carries_computed_score_and_canonical_names() {
    let mut form = valid_form();
    form.set_category(Some(Category::CommunityService));
    form.set_leadership(true);

    let draft = form.to_draft().expect("valid");
    assert_eq!(draft.category, "Community Service");
    assert_eq!(draft.tier, "State");
    assert_eq!(draft.impact_score, 5);
}

#[test]
fn invalid_form_produces_no_draft() {
    assert!(ActivityForm::new().to_draft().is_err());
}

#[test]
fn begin_edit_copies_fields_but_not_score() {
    let mut form = ActivityForm::new();
    let activity = stored_activity();
    form.begin_edit(&activity);

    assert_eq!(form.editing_id(), Some(ActivityId(42)));
    assert_eq!(form.name(), "Robotics");
    assert_eq!(form.category(), Some(Category::Academic));
    assert_eq!(form.tier(), Some(Tier::National));
    assert_eq!(form.description(), "Lead programmer");
    assert_eq!(form.hours_per_week(), 15);
    assert!(form.is_leadership());

    let draft = form.to_draft().expect("valid");
    assert_eq!(draft.impact_score, 7);
}

#[test]
fn begin_edit_truncates_overlong_stored_name() {
    let mut activity = stored_activity();
    activity.draft.name = "x".repeat(60);

    let mut form = ActivityForm::new();
    form.begin_edit(&activity);
    assert_eq!(form.name().chars().count(), NAME_MAX_CHARS);

    let draft = form.to_draft().expect("valid");
    assert!(draft.name.chars().count() <= NAME_MAX_CHARS);
}

#[test]
fn begin_edit_leaves_unknown_tier_unset() {
    let mut activity = stored_activity();
    activity.draft.tier = "Galactic".into();

    let mut form = ActivityForm::new();
    form.begin_edit(&activity);
    assert_eq!(form.tier(), None);
    assert_eq!(
        form.validate(),
        Err(vec![ValidationError::Required(FormField::Tier)])
    );
}

#[test]
fn reset_clears_fields_and_edit_marker() {
    let mut form = ActivityForm::new();
    form.begin_edit(&stored_activity());
    form.reset();
    assert_eq!(form, ActivityForm::default());
    assert_eq!(form.editing_id(), None);
}
