//! Immutable person over an immutable address.

use std::fmt;

use immutable_record_derive::Lenses;

use super::{FrozenAddress, ReferenceCounter};
use crate::optics::Lens;
use crate::record::{DeepCopy, Person};

/// A person whose address is itself immutable.
///
/// Unlike [`Person`], no copy is needed on the way in or out: the address
/// accessor returns a plain shared borrow, because nothing reachable through
/// a `FrozenAddress` can change.
///
/// Functional updates go through the derived lenses
/// (`id_lens`, `name_lens`, `address_lens`), which consume a value and return
/// a new one.
///
/// # Examples
///
/// ```rust
/// use immutable_record::frozen::{FrozenAddress, FrozenPerson};
/// use immutable_record::optics::Lens;
///
/// let person = FrozenPerson::new(25, "John", FrozenAddress::new("Main Street", "New York"));
///
/// let city = FrozenPerson::address_lens().compose(FrozenAddress::city_lens());
/// let moved = city.set(person.clone(), "Los Angeles".into());
///
/// assert_eq!(person.address().city(), "New York");
/// assert_eq!(moved.address().city(), "Los Angeles");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Lenses)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrozenPerson {
    id: i64,
    name: ReferenceCounter<str>,
    address: FrozenAddress,
}

impl FrozenPerson {
    /// Creates a person.
    #[must_use]
    pub fn new(id: i64, name: impl Into<ReferenceCounter<str>>, address: FrozenAddress) -> Self {
        Self {
            id,
            name: name.into(),
            address,
        }
    }

    /// Returns the identifier.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Returns the name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the address without copying it.
    #[must_use]
    pub const fn address(&self) -> &FrozenAddress {
        &self.address
    }

    /// Returns a copy with the name replaced; `self` is unchanged.
    #[must_use]
    pub fn with_name(&self, name: impl Into<ReferenceCounter<str>>) -> Self {
        Self::name_lens().set(self.clone(), name.into())
    }

    /// Returns a copy with the address replaced; `self` is unchanged.
    #[must_use]
    pub fn with_address(&self, address: FrozenAddress) -> Self {
        Self::address_lens().set(self.clone(), address)
    }

    /// Converts into a copy-in/copy-out [`Person`] with the same values.
    #[must_use]
    pub fn thaw(&self) -> Person {
        Person::new(self.id, self.name(), &self.address.thaw())
    }
}

impl From<&Person> for FrozenPerson {
    fn from(person: &Person) -> Self {
        Self::new(
            person.id(),
            person.name(),
            FrozenAddress::from(person.address()),
        )
    }
}

impl DeepCopy for FrozenPerson {
    fn deep_copy(&self) -> Self {
        self.clone()
    }
}

impl fmt::Display for FrozenPerson {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "Person [id={}, name={}, address={}]",
            self.id, self.name, self.address
        )
    }
}
