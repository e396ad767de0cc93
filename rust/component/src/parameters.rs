//! Code related to the _parameters_ of an algorithm.
//!
//! An algorithm has a number of _parameters_ that can be changed over time.
//! The values live in the host's parameter store, and change either from the
//! host's own menus or from the algorithm's custom control surface.
//!
//! Each parameter is one of the following types:
//!
//! - Numeric: A numeric value that can vary within a range of possible values.
//! - Enum: An value that can take one of a discrete set of named values.
//!
//! Components describe their parameters in [`crate::Component::parameter_infos`].
//! Whenever a stored value changes, the host calls
//! [`crate::algorithm::Algorithm::parameter_changed`] so the algorithm can push
//! the new value into its voice engine.
use std::ops::RangeInclusive;

pub mod store;

#[cfg(test)]
mod tests;

/// Contains information specific to a certain type of parameter.
///
/// Here the `S` represents the type of strings, this generally will be
/// `&'a str`.
///
/// # Examples
///
/// ```
/// # use nt303_component::parameters::{TypeSpecificInfoRef};
/// let enum_info = TypeSpecificInfoRef::Enum {
///    default: 0,
///    values: &["1x", "2x", "4x"],
/// };
///
/// let numeric_info: TypeSpecificInfoRef<'static, &'static str> = TypeSpecificInfoRef::Numeric {
///   default: 1000.0,
///   valid_range: 20.0..=20000.0,
///   units: Some("Hz"),
/// };
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum TypeSpecificInfoRef<'a, S> {
    /// Information specific to an enum parameter.
    Enum {
        /// Index of the default value.
        ///
        /// Note that this _must_ be less than the length of `values`.
        default: u32,

        /// A list of possible values for the parameter.
        ///
        /// Note that values _must_ contain at least 2 elements.
        values: &'a [S],
    },

    /// Information specific to a numeric parameter.
    Numeric {
        /// The default value of the parameter.
        ///
        /// This value _must_ be within the `valid_range`.
        default: f32,

        /// The valid range of the parameter.
        valid_range: RangeInclusive<f32>,

        /// The units of the parameter, e.g., "Hz".
        units: Option<&'a str>,
    },
}

impl<S> TypeSpecificInfoRef<'_, S> {
    /// The default value as an [`InternalValue`].
    #[must_use]
    pub fn default_value(&self) -> InternalValue {
        match self {
            TypeSpecificInfoRef::Enum { default, .. } => InternalValue::Enum(*default),
            TypeSpecificInfoRef::Numeric { default, .. } => InternalValue::Numeric(*default),
        }
    }

    /// Bring `value` into range for this parameter.
    ///
    /// Numeric values are clamped to `valid_range` and enum indices to the last
    /// value. A NaN numeric value becomes the default. Returns `None` if `value`
    /// has the wrong type.
    #[must_use]
    pub fn clamp(&self, value: InternalValue) -> Option<InternalValue> {
        match (self, value) {
            (TypeSpecificInfoRef::Numeric { default, .. }, InternalValue::Numeric(v))
                if v.is_nan() =>
            {
                Some(InternalValue::Numeric(*default))
            }
            (TypeSpecificInfoRef::Numeric { valid_range, .. }, InternalValue::Numeric(v)) => Some(
                InternalValue::Numeric(v.clamp(*valid_range.start(), *valid_range.end())),
            ),
            (TypeSpecificInfoRef::Enum { values, .. }, InternalValue::Enum(v)) => {
                let last = u32::try_from(values.len().saturating_sub(1)).unwrap_or(u32::MAX);
                Some(InternalValue::Enum(v.min(last)))
            }
            _ => None,
        }
    }
}

/// Information about a parameter.
///
/// This references data with lifetime `'a`.
/// Here the `S` represents the type of strings, this generally will be
/// `&'a str`.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoRef<'a, S> {
    /// The unique ID of the parameter.
    ///
    /// As the name implies, each parameter's id must be unique within
    /// the component's parameters.
    pub unique_id: &'a str,

    /// Human-readable title of the parameter.
    pub title: &'a str,

    /// A short title of the parameter, used on the overview display.
    pub short_title: &'a str,

    /// Information specific to the type of parameter.
    pub type_specific: TypeSpecificInfoRef<'a, S>,
}

/// [`InfoRef`] of static data
///
/// Parameter tables are almost always static data, in which case the type
/// parameters can seem noisy. This type alias is here for convenience!
///
/// # Examples
///
/// ```
/// # use nt303_component::parameters::{TypeSpecificInfoRef, StaticInfoRef};
/// let numeric_info = StaticInfoRef {
///   title: "Resonance",
///   short_title: "RES",
///   unique_id: "resonance",
///   type_specific: TypeSpecificInfoRef::Numeric {
///     default: 50.0,
///     valid_range: 0.0..=100.0,
///     units: Some("%"),
///   },
/// };
/// ```
pub type StaticInfoRef = InfoRef<'static, &'static str>;

/// A value of a parameter.
#[derive(Debug, Clone, PartialEq, Copy)]
pub enum InternalValue {
    /// A numeric value.
    Numeric(f32),

    /// The _index_ of an enum value.
    ///
    /// This refers to the index of the current value in the `values`
    /// array of the parameter.
    Enum(u32),
}

/// A named group of parameters shown together in the host's menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Title of the page.
    pub name: &'static str,

    /// Indices into the component's parameter table, in display order.
    pub params: &'static [usize],
}
