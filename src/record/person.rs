//! The immutable record.

use std::fmt;

use super::{DeepCopy, Guarded};
use crate::composite::{Address, AddressHandle};

/// An immutable person that owns a private copy of a mutable [`Address`].
///
/// All fields are fixed at construction:
///
/// - [`Person::new`] copies the supplied address in, so the caller's
///   `Address` stays independently mutable.
/// - [`Person::address`] copies the address out, so the returned value can be
///   mutated freely without reaching the record.
///
/// There are no setters and no `&mut self` methods.
///
/// # Examples
///
/// ```rust
/// use immutable_record::composite::Address;
/// use immutable_record::record::Person;
///
/// let mut address = Address::new("Main Street", "New York");
/// let person = Person::new(25, "John", &address);
///
/// address.set_street("Changed Street");
/// person.address().set_city("Los Angeles");
///
/// assert_eq!(person.address(), Address::new("Main Street", "New York"));
/// ```
///
/// The internal address is out of reach:
///
/// ```compile_fail
/// use immutable_record::composite::Address;
/// use immutable_record::record::Person;
///
/// let person = Person::new(1, "Rushikesh", &Address::new("Bhosari", "Pune"));
/// person.address.set_city("Mumbai");
/// ```
///
/// and no field can be reassigned, even through an owned binding:
///
/// ```compile_fail
/// use immutable_record::composite::Address;
/// use immutable_record::record::Person;
///
/// let mut person = Person::new(1, "Rushikesh", &Address::new("Bhosari", "Pune"));
/// person.name = String::from("Someone Else");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    id: i64,
    name: String,
    address: Guarded<Address>,
}

impl Person {
    /// Creates a person holding a deep copy of `address`.
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>, address: &Address) -> Self {
        Self {
            id,
            name: name.into(),
            address: Guarded::capture(address),
        }
    }

    /// Creates a person from the current state of a shared handle.
    ///
    /// Later writes through `handle`, or through any clone of it, are not
    /// observed by the person.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutable_record::composite::{Address, AddressHandle};
    /// use immutable_record::record::Person;
    ///
    /// let handle = AddressHandle::new(Address::new("Bhosari", "Pune"));
    /// let person = Person::from_handle(1, "Rushikesh", &handle);
    ///
    /// handle.clone().set_street("Changed Street");
    ///
    /// assert_eq!(person.address().street(), "Bhosari");
    /// ```
    #[must_use]
    pub fn from_handle(id: i64, name: impl Into<String>, handle: &AddressHandle) -> Self {
        Self {
            id,
            name: name.into(),
            address: Guarded::new(handle.snapshot()),
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

    /// Returns a fresh copy of the address.
    ///
    /// Each call returns a new instance with equal field values; mutating it
    /// never affects the person or any other copy.
    #[must_use]
    pub fn address(&self) -> Address {
        self.address.copy_out()
    }

    /// Returns a new handle around a fresh copy of the address.
    ///
    /// The handle is never [`AddressHandle::ptr_eq`] to any other handle.
    #[must_use]
    pub fn address_handle(&self) -> AddressHandle {
        AddressHandle::new(self.address.copy_out())
    }
}

impl DeepCopy for Person {
    fn deep_copy(&self) -> Self {
        Self {
            id: self.id,
            name: self.name.deep_copy(),
            address: self.address.deep_copy(),
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "Person [id={}, name={}, address={}]",
            self.id, self.name, self.address
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn address() -> Address {
        Address::new("Main Street", "New York")
    }

    #[rstest]
    fn test_new_copies_scalars(address: Address) {
        let person = Person::new(25, "John", &address);
        assert_eq!(person.id(), 25);
        assert_eq!(person.name(), "John");
        assert_eq!(person.address(), address);
    }

    #[rstest]
    fn test_construction_does_not_alias_source(mut address: Address) {
        let person = Person::new(25, "John", &address);
        address.set_street("Changed Street");
        assert_eq!(person.address().street(), "Main Street");
    }

    #[rstest]
    fn test_accessor_returns_fresh_copies(address: Address) {
        let person = Person::new(25, "John", &address);
        let mut first = person.address();
        let second = person.address();
        assert_eq!(first, second);

        first.set_city("Los Angeles");
        assert_eq!(second.city(), "New York");
        assert_eq!(person.address().city(), "New York");
    }

    #[rstest]
    fn test_from_handle_snapshots_state(address: Address) {
        let handle = AddressHandle::new(address);
        let person = Person::from_handle(25, "John", &handle);
        handle.set_city("Los Angeles");
        assert_eq!(person.address().city(), "New York");
    }

    #[rstest]
    fn test_address_handle_is_detached(address: Address) {
        let person = Person::new(25, "John", &address);
        let first = person.address_handle();
        let second = person.address_handle();
        assert!(!AddressHandle::ptr_eq(&first, &second));

        first.set_street("Changed Street");
        assert_eq!(second.snapshot().street(), "Main Street");
        assert_eq!(person.address().street(), "Main Street");
    }

    #[rstest]
    fn test_clone_is_equal(address: Address) {
        let person = Person::new(1, "Rushikesh", &address);
        assert_eq!(person.clone(), person);
        assert_eq!(person.deep_copy(), person);
    }

    #[rstest]
    fn test_display(address: Address) {
        let person = Person::new(25, "John", &address);
        assert_eq!(
            person.to_string(),
            "Person [id=25, name=John, address=Address [street=Main Street, city=New York]]"
        );
    }
}
