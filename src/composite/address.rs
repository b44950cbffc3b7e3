//! The mutable composite value.

use std::fmt;

use crate::record::DeepCopy;

/// A plain mutable postal address.
///
/// Any holder of a `&mut Address` may change either field at any time; there
/// is no validation and no error condition.
///
/// # Examples
///
/// ```rust
/// use immutable_record::composite::Address;
///
/// let mut address = Address::new("Main Street", "New York");
/// address.set_street("Changed Street");
///
/// assert_eq!(address.street(), "Changed Street");
/// assert_eq!(address.to_string(), "Address [street=Changed Street, city=New York]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address {
    street: String,
    city: String,
}

impl Address {
    /// Creates an address with the given street and city.
    #[must_use]
    pub fn new(street: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
        }
    }

    /// Returns the current street.
    #[must_use]
    pub fn street(&self) -> &str {
        &self.street
    }

    /// Returns the current city.
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Replaces the street in place.
    pub fn set_street(&mut self, street: impl Into<String>) {
        self.street = street.into();
    }

    /// Replaces the city in place.
    pub fn set_city(&mut self, city: impl Into<String>) {
        self.city = city.into();
    }
}

/// Field-by-field copy into a freshly allocated instance.
impl DeepCopy for Address {
    fn deep_copy(&self) -> Self {
        Self::new(self.street.deep_copy(), self.city.deep_copy())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "Address [street={}, city={}]",
            self.street, self.city
        )
    }
}
