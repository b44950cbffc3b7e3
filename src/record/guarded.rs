//! Copy-in/copy-out ownership cell.
//!
//! [`Guarded`] owns a value that nobody else can reach. Callers can only put a
//! value in through a deep copy and only get one out as a deep copy, so the
//! guarded value is never aliased by a caller, even when `T` is itself a
//! shared handle such as [`AddressHandle`](crate::composite::AddressHandle).
//!
//! ```text
//!  caller value ──deep_copy──▶ Guarded ──deep_copy──▶ returned value
//!        │                        │                          │
//!   still mutable          never handed out           independent
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use super::DeepCopy;

/// An exclusively owned value exposed only through copies.
///
/// `Guarded` has no `Deref`, `DerefMut`, `AsMut` or borrowing accessor. The
/// only way in is [`Guarded::capture`] and the only way out is
/// [`Guarded::copy_out`].
///
/// # Examples
///
/// ```rust
/// use immutable_record::composite::Address;
/// use immutable_record::record::Guarded;
///
/// let mut address = Address::new("Main Street", "New York");
/// let guarded = Guarded::capture(&address);
///
/// address.set_street("Changed Street");
///
/// let mut first = guarded.copy_out();
/// first.set_city("Los Angeles");
///
/// assert_eq!(guarded.copy_out(), Address::new("Main Street", "New York"));
/// ```
///
/// A handle the caller still holds cannot be moved in:
///
/// ```compile_fail
/// use immutable_record::composite::{Address, AddressHandle};
/// use immutable_record::record::Guarded;
///
/// let handle = AddressHandle::new(Address::new("Main Street", "New York"));
/// let guarded = Guarded::new(handle.clone());
/// ```
pub struct Guarded<T: DeepCopy> {
    inner: T,
}

impl<T: DeepCopy> Guarded<T> {
    /// Takes ownership of a value built inside this crate that nothing else
    /// refers to.
    pub(crate) const fn new(value: T) -> Self {
        Self { inner: value }
    }

    /// Stores a deep copy of `value` (copy-in).
    ///
    /// The caller keeps `value` and may go on mutating it; the guarded copy is
    /// unaffected.
    #[must_use]
    pub fn capture(value: &T) -> Self {
        Self {
            inner: value.deep_copy(),
        }
    }

    /// Returns a fresh deep copy of the guarded value (copy-out).
    ///
    /// Every call allocates a new, independent instance.
    #[must_use]
    pub fn copy_out(&self) -> T {
        self.inner.deep_copy()
    }
}

impl<T: DeepCopy> Clone for Guarded<T> {
    fn clone(&self) -> Self {
        Self::capture(&self.inner)
    }
}

impl<T: DeepCopy> DeepCopy for Guarded<T> {
    fn deep_copy(&self) -> Self {
        Self::capture(&self.inner)
    }
}

impl<T: DeepCopy + PartialEq> PartialEq for Guarded<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: DeepCopy + Eq> Eq for Guarded<T> {}

impl<T: DeepCopy + Hash> Hash for Guarded<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}

impl<T: DeepCopy + fmt::Debug> fmt::Debug for Guarded<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Guarded").field(&self.inner).finish()
    }
}

impl<T: DeepCopy + fmt::Display> fmt::Display for Guarded<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, formatter)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: DeepCopy + serde::Serialize> serde::Serialize for Guarded<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.inner.serialize(serializer)
    }
}

// A deserialized value has no other owner, so it is moved in.
#[cfg(feature = "serde")]
impl<'de, T: DeepCopy + serde::Deserialize<'de>> serde::Deserialize<'de> for Guarded<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Self::new)
    }
}
