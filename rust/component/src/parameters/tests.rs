use super::{InternalValue, TypeSpecificInfoRef};

static OVERSAMPLING: TypeSpecificInfoRef<'static, &'static str> = TypeSpecificInfoRef::Enum {
    default: 1,
    values: &["1x", "2x", "4x"],
};

static VOLUME: TypeSpecificInfoRef<'static, &'static str> = TypeSpecificInfoRef::Numeric {
    default: -12.0,
    valid_range: -40.0..=6.0,
    units: Some("dB"),
};

#[test]
fn defaults() {
    assert_eq!(OVERSAMPLING.default_value(), InternalValue::Enum(1));
    assert_eq!(VOLUME.default_value(), InternalValue::Numeric(-12.0));
}

#[test]
fn numeric_values_clamp_to_range() {
    assert_eq!(
        VOLUME.clamp(InternalValue::Numeric(20.0)),
        Some(InternalValue::Numeric(6.0))
    );
    assert_eq!(
        VOLUME.clamp(InternalValue::Numeric(-100.0)),
        Some(InternalValue::Numeric(-40.0))
    );
}

#[test]
fn nan_becomes_default() {
    assert_eq!(
        VOLUME.clamp(InternalValue::Numeric(f32::NAN)),
        Some(InternalValue::Numeric(-12.0))
    );
}

#[test]
fn enum_values_clamp_to_last() {
    assert_eq!(
        OVERSAMPLING.clamp(InternalValue::Enum(7)),
        Some(InternalValue::Enum(2))
    );
}

#[test]
fn mismatched_types_rejected() {
    assert_eq!(OVERSAMPLING.clamp(InternalValue::Numeric(1.0)), None);
    assert_eq!(VOLUME.clamp(InternalValue::Enum(1)), None);
}
