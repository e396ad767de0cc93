//! The host's parameter store.
//!
//! The store is the host-visible half of an algorithm: it holds the parameter
//! table and the current value of every parameter. Algorithms read it, the
//! host and the control surface write it.

use super::{InternalValue, StaticInfoRef};


/// Why a write into the store failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SetError {
    /// There is no parameter at that index.
    #[error("no parameter with that index")]
    NotFound,

    /// A numeric value was written to an enum parameter, or the reverse.
    #[error("value does not match the parameter's type")]
    WrongType,
}

/// Parameter values addressed by their index in the parameter table.
pub trait Store {
    /// The current value of parameter `index`, if there is one.
    fn get(&self, index: usize) -> Option<InternalValue>;

    /// Set a parameter value.
    ///
    /// Values outside the parameter's range are clamped into it. Returns whether the
    /// stored value changed.
    ///
    /// # Errors
    ///
    ///  - Returns `NotFound` if the no parameter with the given `index` is in the store.
    ///  - Returns `WrongType` if the parameter at `index` does not have a type that matches `value`.
    fn set(&mut self, index: usize, value: InternalValue) -> Result<bool, SetError>;
}

/// Current values for a static parameter table.
#[derive(Debug, Clone)]
pub struct Values {
    infos: &'static [StaticInfoRef],
    values: Vec<InternalValue>,
}

impl Values {
    /// Create a store holding the default value of every parameter.
    #[must_use]
    pub fn new(infos: &'static [StaticInfoRef]) -> Self {
        Self {
            infos,
            values: infos
                .iter()
                .map(|info| info.type_specific.default_value())
                .collect(),
        }
    }

    /// The parameter table this store holds values for.
    #[must_use]
    pub fn infos(&self) -> &'static [StaticInfoRef] {
        self.infos
    }

    /// The current value of a numeric parameter, or `None` for enum parameters.
    #[must_use]
    pub fn numeric(&self, index: usize) -> Option<f32> {
        match self.values.get(index) {
            Some(InternalValue::Numeric(v)) => Some(*v),
            _ => None,
        }
    }

    /// The current value of an enum parameter, or `None` for numeric parameters.
    #[must_use]
    pub fn enum_index(&self, index: usize) -> Option<u32> {
        match self.values.get(index) {
            Some(InternalValue::Enum(v)) => Some(*v),
            _ => None,
        }
    }
}

impl Store for Values {
    fn get(&self, index: usize) -> Option<InternalValue> {
        self.values.get(index).copied()
    }

    fn set(&mut self, index: usize, value: InternalValue) -> Result<bool, SetError> {
        let info = self.infos.get(index).ok_or(SetError::NotFound)?;
        let value = info.type_specific.clamp(value).ok_or(SetError::WrongType)?;
        let slot = &mut self.values[index];
        if *slot == value {
            return Ok(false);
        }
        *slot = value;
        Ok(true)
    }
}
