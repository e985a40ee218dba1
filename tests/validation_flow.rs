use tyovuoro::{
    validate, Config, DayOfWeek, ScheduleCollection, ScheduleEditor, Shift, ValidationError,
};

/// Build a typical pharmacy week through the editor: weekday pattern with
/// two counter shifts, plus a shorter Saturday pattern
fn pharmacy_week() -> ScheduleEditor {
    let mut editor = ScheduleEditor::for_new_employee(&Config::default());

    for day in [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
    ] {
        editor.toggle_day(0, day).unwrap();
    }
    editor
        .update_shift(0, 0, Shift::new("08:00", "14:00", Some("Morning counter".to_string())))
        .unwrap();
    let evening = editor.add_shift(0).unwrap();
    editor
        .update_shift(0, evening, Shift::new("14:00", "20:00", Some("Evening counter".to_string())))
        .unwrap();

    let saturday = editor.add_group();
    editor.toggle_day(saturday, DayOfWeek::Saturday).unwrap();
    editor
        .update_shift(saturday, 0, Shift::new("10:00", "14:00", Some("Weekend counter".to_string())))
        .unwrap();

    editor
}

/// A realistic week built through the editor validates cleanly and is
/// ready to submit
#[test]
fn test_pharmacy_week_is_valid() {
    let editor = pharmacy_week();
    assert!(editor.can_save());
    assert!(editor.errors().is_empty());

    let collection = editor.into_collection();
    assert_eq!(collection.len(), 2);
    assert!(validate(&collection).is_empty());
}

/// Breaking the week with an overlapping shift pinpoints the offending
/// shift, and fixing it clears the error
#[test]
fn test_overlap_is_pinpointed_and_fixable() {
    let mut editor = pharmacy_week();

    let extra = editor.add_shift(0).unwrap();
    editor
        .update_shift(0, extra, Shift::new("19:00", "21:00", None))
        .unwrap();

    assert!(!editor.can_save());
    let errors = editor.errors().to_vec();
    // The clash with the evening shift is reported once per day the
    // pattern covers, attributed to the added shift each time
    assert_eq!(errors.len(), 5);
    for error in &errors {
        assert_eq!(error.request_index, 0);
        assert_eq!(error.shift_index, extra as i32);
        assert!(error.message.starts_with("Overlaps with another shift on"));
    }

    editor
        .update_shift(0, extra, Shift::new("20:00", "21:00", None))
        .unwrap();
    assert!(editor.can_save());
}

/// Schedule data loaded from the backend is revalidated as-is, including
/// states the editor would never produce
#[test]
fn test_persisted_payload_roundtrip() {
    let payload = r#"[
        {
            "daysOfWeek": ["MONDAY", "WEDNESDAY"],
            "shifts": [
                { "startTime": "09:00", "endTime": "12:00", "description": "Counter" },
                { "startTime": "12:00", "endTime": "17:00", "description": null }
            ]
        },
        {
            "daysOfWeek": ["WEDNESDAY"],
            "shifts": [
                { "startTime": "16:00", "endTime": "19:00", "description": "Stock take" }
            ]
        }
    ]"#;

    let collection: ScheduleCollection = serde_json::from_str(payload).unwrap();

    // Both groups claim Wednesday, which the editor would have blocked at
    // toggle time; validation still reports the resulting overlap
    let errors = validate(&collection);
    assert_eq!(
        errors,
        vec![ValidationError::for_shift(
            1,
            0,
            "Overlaps with another shift on WEDNESDAY"
        )]
    );

    let editor = ScheduleEditor::new(collection);
    assert!(!editor.can_save());
}

/// The editor enforces day exclusivity at assignment time across the
/// whole collection
#[test]
fn test_day_exclusivity_across_groups() {
    let mut editor = pharmacy_week();
    let third = editor.add_group();

    // Every weekday belongs to the first group, Saturday to the second
    for day in [DayOfWeek::Monday, DayOfWeek::Friday, DayOfWeek::Saturday] {
        assert!(editor.toggle_day(third, day).is_err());
    }
    assert!(editor.toggle_day(third, DayOfWeek::Sunday).is_ok());
}
