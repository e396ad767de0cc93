use nt303_component::parameters::TypeSpecificInfoRef;

use super::{default_encoders, default_knobs};
use crate::parameters::Param;

fn range(param: Param) -> (f32, f32) {
    match &param.info().type_specific {
        TypeSpecificInfoRef::Numeric { valid_range, .. } => {
            (*valid_range.start(), *valid_range.end())
        }
        TypeSpecificInfoRef::Enum { .. } => panic!("{param:?} is not numeric"),
    }
}

#[test]
fn knobs_span_their_parameters() {
    for knob in default_knobs() {
        for mapping in [knob.normal, knob.alt] {
            let (min, max) = range(mapping.param);
            let low = mapping.scaling.to_value(0.0);
            let high = mapping.scaling.to_value(1.0);
            assert!((low - min).abs() < 1e-3, "{:?}", mapping.param);
            assert!((high - max).abs() < 0.1, "{:?}", mapping.param);
        }
    }
}

#[test]
fn encoders_span_their_parameters() {
    for encoder in default_encoders() {
        assert_eq!(range(encoder.param), (encoder.min, encoder.max));
    }
}
