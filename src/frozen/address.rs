//! Immutable address.

use std::fmt;

use immutable_record_derive::Lenses;

use super::ReferenceCounter;
use crate::composite::Address;
use crate::optics::Lens;
use crate::record::DeepCopy;

/// An address that cannot change after construction.
///
/// The strings live behind [`ReferenceCounter`], so cloning shares them and
/// costs two reference-count increments. Sharing is safe because nothing can
/// mutate them.
///
/// # Examples
///
/// ```rust
/// use immutable_record::frozen::FrozenAddress;
///
/// let address = FrozenAddress::new("Main Street", "New York");
/// let moved = address.with_city("Los Angeles");
///
/// assert_eq!(address.city(), "New York");
/// assert_eq!(moved.city(), "Los Angeles");
/// assert_eq!(moved.street(), "Main Street");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Lenses)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrozenAddress {
    street: ReferenceCounter<str>,
    city: ReferenceCounter<str>,
}

impl FrozenAddress {
    /// Creates an address with the given street and city.
    #[must_use]
    pub fn new(
        street: impl Into<ReferenceCounter<str>>,
        city: impl Into<ReferenceCounter<str>>,
    ) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
        }
    }

    /// Returns the street.
    #[must_use]
    pub fn street(&self) -> &str {
        &self.street
    }

    /// Returns the city.
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Returns a copy with the street replaced; `self` is unchanged.
    #[must_use]
    pub fn with_street(&self, street: impl Into<ReferenceCounter<str>>) -> Self {
        Self::street_lens().set(self.clone(), street.into())
    }

    /// Returns a copy with the city replaced; `self` is unchanged.
    #[must_use]
    pub fn with_city(&self, city: impl Into<ReferenceCounter<str>>) -> Self {
        Self::city_lens().set(self.clone(), city.into())
    }

    /// Converts into a mutable [`Address`] with the same field values.
    #[must_use]
    pub fn thaw(&self) -> Address {
        Address::new(self.street(), self.city())
    }
}

impl From<&Address> for FrozenAddress {
    fn from(address: &Address) -> Self {
        Self::new(address.street(), address.city())
    }
}

impl From<Address> for FrozenAddress {
    fn from(address: Address) -> Self {
        Self::from(&address)
    }
}

/// Sharing immutable storage is already independent.
impl DeepCopy for FrozenAddress {
    fn deep_copy(&self) -> Self {
        self.clone()
    }
}

impl fmt::Display for FrozenAddress {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "Address [street={}, city={}]",
            self.street, self.city
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_clone_shares_storage() {
        let address = FrozenAddress::new("Bhosari", "Pune");
        let cloned = address.clone();
        assert!(ReferenceCounter::ptr_eq(&address.city, &cloned.city));
    }

    #[rstest]
    fn test_with_street_keeps_original() {
        let address = FrozenAddress::new("Main Street", "New York");
        let changed = address.with_street("Changed Street");
        assert_eq!(address.street(), "Main Street");
        assert_eq!(changed.street(), "Changed Street");
        assert!(ReferenceCounter::ptr_eq(&address.city, &changed.city));
    }

    #[rstest]
    fn test_thaw_and_freeze_preserve_fields() {
        let mutable = Address::new("Bhosari", "Pune");
        let frozen = FrozenAddress::from(&mutable);
        assert_eq!(frozen.thaw(), mutable);
    }

    #[rstest]
    fn test_thawed_copy_is_independent() {
        let frozen = FrozenAddress::new("Bhosari", "Pune");
        let mut thawed = frozen.thaw();
        thawed.set_city("Mumbai");
        assert_eq!(frozen.city(), "Pune");
    }

    #[rstest]
    fn test_display_matches_mutable_address() {
        let mutable = Address::new("Main Street", "New York");
        assert_eq!(
            FrozenAddress::from(&mutable).to_string(),
            mutable.to_string()
        );
    }
}
