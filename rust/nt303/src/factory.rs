//! Instances of a component, living in a fixed-capacity pool.

use nt303_component::{Component, ProcessingEnvironment};
use nt303_pool::{Handle, Pool, PoolError};

#[cfg(test)]
mod tests;

/// How many instances a host can run at once unless it asks otherwise.
pub const DEFAULT_CAPACITY: usize = 8;

/// Up to `CAPACITY` live algorithm instances built by one component.
pub struct Instances<C: Component, const CAPACITY: usize = DEFAULT_CAPACITY> {
    component: C,
    pool: Pool<C::Algorithm, CAPACITY>,
}

impl<C: Component, const CAPACITY: usize> Instances<C, CAPACITY> {
    /// No instances yet.
    #[must_use]
    pub fn new(component: C) -> Self {
        Self {
            component,
            pool: Pool::new(),
        }
    }

    /// The component that builds the instances.
    #[must_use]
    pub fn component(&self) -> &C {
        &self.component
    }

    /// Number of live instances.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pool.len()
    }

    /// Whether there are no live instances.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    /// Construct an instance, or report that the pool is full.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Exhausted`] if every slot is in use.
    pub fn try_construct(&mut self, environment: &ProcessingEnvironment) -> Result<Handle, PoolError> {
        let handle = self.pool.insert(self.component.construct(environment))?;
        log::info!("constructed instance {handle:?}, {} of {CAPACITY} in use", self.pool.len());
        Ok(handle)
    }

    /// Construct an instance.
    ///
    /// # Panics
    ///
    /// Running out of instances is unrecoverable for a host, so this halts if
    /// the pool is full.
    pub fn construct(&mut self, environment: &ProcessingEnvironment) -> Handle {
        let handle = self
            .pool
            .insert_or_halt(self.component.construct(environment));
        log::info!("constructed instance {handle:?}, {} of {CAPACITY} in use", self.pool.len());
        handle
    }

    /// Destroy an instance, returning it. Its slot is reused by the next construction.
    pub fn destroy(&mut self, handle: Handle) -> Option<C::Algorithm> {
        let instance = self.pool.remove(handle)?;
        log::info!("destroyed instance {handle:?}");
        Some(instance)
    }

    /// The instance behind `handle`, unless it was destroyed.
    #[must_use]
    pub fn get(&self, handle: Handle) -> Option<&C::Algorithm> {
        self.pool.get(handle)
    }

    /// Mutable access to the instance behind `handle`, unless it was destroyed.
    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut C::Algorithm> {
        self.pool.get_mut(handle)
    }
}
