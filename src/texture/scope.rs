//! Temporary configuration overrides that restore on every exit path

use std::fmt;
use std::ops::{Deref, DerefMut};

/// Holds a value under an override and puts the original back on drop
///
/// Returning early with `?` or unwinding through the scope both restore the
/// original value.
pub struct ScopedOverride<'a, T> {
    target: &'a mut T,
    original: Option<T>,
}

impl<'a, T> ScopedOverride<'a, T> {
    /// Replace `*target` with `value` until the returned guard is dropped
    pub fn replace(target: &'a mut T, value: T) -> Self {
        let original = std::mem::replace(target, value);
        Self {
            target,
            original: Some(original),
        }
    }

    /// Value that will be restored
    pub fn original(&self) -> Option<&T> {
        self.original.as_ref()
    }

    /// Override `*target` with `transform(&original)`
    pub fn apply(target: &'a mut T, transform: impl FnOnce(&T) -> T) -> Self {
        let value = transform(&*target);
        Self::replace(target, value)
    }
}

impl<T> Deref for ScopedOverride<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.target
    }
}

impl<T> DerefMut for ScopedOverride<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.target
    }
}

impl<T> Drop for ScopedOverride<'_, T> {
    fn drop(&mut self) {
        if let Some(original) = self.original.take() {
            *self.target = original;
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ScopedOverride<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopedOverride")
            .field("current", &self.target)
            .field("original", &self.original)
            .finish()
    }
}
