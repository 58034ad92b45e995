//! A value of type `T`, or nothing.
//!
//! [`Optional`] keeps its value in place inside a [`MaybeUninit`] slot next to a
//! presence flag. The slot is initialized exactly when the flag is set, and the
//! held value is dropped exactly once: on [`Optional::reset`], on
//! [`Optional::assign`], when moved out, or when the container itself is dropped.

use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    mem::MaybeUninit,
};

use thiserror::Error;

/// Wrap `value` for hand-off into an [`Optional`]
#[must_use]
pub const fn present<T>(value: T) -> Present<T> {
    Present::new(value)
}
/// Marker for an empty [`Optional`]
#[must_use]
pub const fn absent() -> Absent {
    Absent
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Present<T> {
    value: T,
}
impl<T> Present<T> {
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self { value }
    }
    #[must_use]
    pub fn into_inner(self) -> T {
        self.value
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Absent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AccessError {
    #[error("read the value of an empty optional")]
    EmptyAccess,
}

pub struct Optional<T> {
    value: MaybeUninit<T>,
    present: bool,
}
impl<T> Optional<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            value: MaybeUninit::uninit(),
            present: false,
        }
    }
    const fn holding(value: T) -> Self {
        Self {
            value: MaybeUninit::new(value),
            present: true,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !self.present
    }
    #[must_use]
    pub const fn is_present(&self) -> bool {
        self.present
    }

    #[must_use]
    pub fn as_option(&self) -> Option<&T> {
        if !self.present {
            return None;
        }
        Some(unsafe { self.value.assume_init_ref() })
    }
    #[must_use]
    pub fn as_option_mut(&mut self) -> Option<&mut T> {
        if !self.present {
            return None;
        }
        Some(unsafe { self.value.assume_init_mut() })
    }

    pub fn get_ref(&self) -> Result<&T, AccessError> {
        self.as_option().ok_or_else(|| self.empty_access())
    }
    pub fn get_mut(&mut self) -> Result<&mut T, AccessError> {
        if !self.present {
            return Err(self.empty_access());
        }
        Ok(unsafe { self.value.assume_init_mut() })
    }

    /// Return a copy of the held value
    ///
    /// Reading an empty container is reported as [`AccessError::EmptyAccess`]
    /// rather than left undefined. Use [`Optional::get_or_else`] for a total read.
    pub fn get(&self) -> Result<T, AccessError>
    where
        T: Clone,
    {
        self.get_ref().cloned()
    }

    /// # Safety
    ///
    /// `self` must be present
    #[must_use]
    pub unsafe fn get_unchecked(&self) -> T
    where
        T: Clone,
    {
        debug_assert!(self.present);
        unsafe { self.value.assume_init_ref() }.clone()
    }

    #[must_use]
    pub fn get_or_else(&self, default: T) -> T
    where
        T: Clone,
    {
        match self.as_option() {
            Some(value) => value.clone(),
            None => default,
        }
    }

    /// Run `action` iff `self` is empty
    pub fn or_else(&self, action: impl FnOnce()) {
        if self.is_empty() {
            action();
        }
    }

    pub fn reset(&mut self) {
        if !self.present {
            return;
        }
        // Cleared before the drop runs; a panic in `T::drop` leaves the slot empty.
        self.present = false;
        unsafe { self.value.assume_init_drop() };
    }

    /// Drop the held value, if any, then take on the state of `value`
    pub fn assign(&mut self, value: impl Into<Optional<T>>) {
        self.reset();
        *self = value.into();
    }

    /// Move the held value into a new container and leave `self` empty
    #[must_use]
    pub fn take(&mut self) -> Self {
        match self.take_value() {
            Some(value) => Self::holding(value),
            None => Self::new(),
        }
    }
    /// Move-assign from `source`, leaving `source` empty
    pub fn move_from(&mut self, source: &mut Self) {
        self.assign(source.take());
    }

    #[must_use]
    pub fn into_option(mut self) -> Option<T> {
        self.take_value()
    }

    fn take_value(&mut self) -> Option<T> {
        if !self.present {
            return None;
        }
        self.present = false;
        Some(unsafe { self.value.assume_init_read() })
    }

    fn empty_access(&self) -> AccessError {
        tracing::debug!(
            value_type = core::any::type_name::<T>(),
            "read the value of an empty optional"
        );
        AccessError::EmptyAccess
    }
}
impl<T> Drop for Optional<T> {
    fn drop(&mut self) {
        self.reset();
    }
}
impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::new()
    }
}
impl<T: Clone> Clone for Optional<T> {
    fn clone(&self) -> Self {
        match self.as_option() {
            Some(value) => Self::holding(value.clone()),
            None => Self::new(),
        }
    }
    fn clone_from(&mut self, source: &Self) {
        if let (Some(dst), Some(src)) = (self.as_option_mut(), source.as_option()) {
            dst.clone_from(src);
            return;
        }
        *self = source.clone();
    }
}

// All-zero bytes leave the flag unset, which is a valid empty container.
unsafe impl<T> bytemuck::Zeroable for Optional<T> {}

impl<T, U> From<Present<U>> for Optional<T>
where
    U: Into<T>,
{
    fn from(value: Present<U>) -> Self {
        Self::holding(value.into_inner().into())
    }
}
impl<T> From<Absent> for Optional<T> {
    fn from(_: Absent) -> Self {
        Self::new()
    }
}
impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::holding(value),
            None => Self::new(),
        }
    }
}
impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_option() {
            Some(value) => f.debug_tuple("Present").field(value).finish(),
            None => f.write_str("Absent"),
        }
    }
}
impl<T: PartialEq> PartialEq for Optional<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_option() == other.as_option()
    }
}
impl<T: Eq> Eq for Optional<T> {}
/// Empty orders first
impl<T: PartialOrd> PartialOrd for Optional<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_option().partial_cmp(&other.as_option())
    }
}
impl<T: Ord> Ord for Optional<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_option().cmp(&other.as_option())
    }
}
impl<T: Hash> Hash for Optional<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_option().hash(state);
    }
}
