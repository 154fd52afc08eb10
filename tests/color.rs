use linkgate::AppError;
use linkgate::model::{Color, FieldValue, MetaData};

const CANONICAL_INPUTS: &[&str] = &[
    "abc", "#abc", "abcd", "#abcd", "abcdef", "#abcdef", "abcdef12", "#abcdef12",
];

fn is_canonical(s: &str) -> bool {
    s.len() == 9 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[test]
fn test_every_accepted_form_normalizes_to_canonical() {
    for input in CANONICAL_INPUTS {
        let mut color = Color::new();
        color.set(input);

        assert!(is_canonical(color.get()), "{input} -> {}", color.get());
    }
}

#[test]
fn test_normalization_is_idempotent() {
    for input in CANONICAL_INPUTS {
        let mut once = Color::new();
        once.set(input);

        let mut twice = Color::new();
        twice.set(once.get());

        assert_eq!(once, twice);
    }
}

#[test]
fn test_unrecognized_lengths_panic() {
    for input in ["ab", "#", "#abcdefab1", "#abcdefabcdef"] {
        let result = std::panic::catch_unwind(|| {
            let mut color = Color::new();
            color.set(input);
        });
        assert!(result.is_err(), "{input:?} should panic");
    }
}

#[test]
fn test_try_set_reports_instead_of_panicking() {
    let mut color = Color::new();
    let err = color.try_set("#1").unwrap_err();

    assert_eq!(err.code(), "validation_error");
    assert_eq!(err.details()["length"], 2);
    assert!(color.is_empty());
}

#[test]
fn test_validate_empty() {
    let optional = MetaData::new("accent");
    let required = MetaData::parse("accent", "required");

    assert!(Color::new().validate(&optional).is_ok());

    let err = Color::new().validate(&required).unwrap_err();
    assert!(matches!(err, AppError::Required { ref field, .. } if field == "accent"));
}

#[test]
fn test_validate_stored_garbage() {
    let meta = MetaData::new("accent");

    for raw in ["#abc", "abcdef123", "#abcdefgg", "#ABCDEF12x"] {
        let err = Color::from_raw(raw).validate(&meta).unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }), "{raw}");
        assert_eq!(err.to_string(), format!("Invalid hex web-color: {raw}"));
    }

    assert!(Color::from_raw("#0a0b0c0d").validate(&meta).is_ok());
}

#[test]
fn test_rgba_decodes_non_empty_values() {
    let color: Color = "#01020304".parse().unwrap();
    let rgba = color.rgba();

    assert_eq!((rgba.r, rgba.g, rgba.b, rgba.a), (1, 2, 3, 4));
}
