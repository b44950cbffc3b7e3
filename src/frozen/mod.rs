//! Immutable composites: the copy-free alternative to copy-in/copy-out.
//!
//! [`crate::record::Person`] stays immutable by copying its mutable
//! `Address` on every boundary crossing. When the composite is immutable
//! itself, there is nothing to protect and the copies disappear:
//!
//! - [`FrozenAddress`]: an address with no setters; `with_*` returns new values
//! - [`FrozenPerson`]: a person that lends its `FrozenAddress` by reference
//!
//! Cloning either type shares the underlying string storage (structural
//! sharing), and both derive `Lenses` for nested functional updates.
//!
//! # Examples
//!
//! ```rust
//! use immutable_record::composite::Address;
//! use immutable_record::frozen::{FrozenAddress, FrozenPerson};
//! use immutable_record::record::Person;
//!
//! let person = Person::new(25, "John", &Address::new("Main Street", "New York"));
//! let frozen = FrozenPerson::from(&person);
//!
//! let moved = frozen.with_address(frozen.address().with_city("Los Angeles"));
//!
//! assert_eq!(frozen.address().city(), "New York");
//! assert_eq!(moved.address().city(), "Los Angeles");
//! assert_eq!(moved.thaw().address().city(), "Los Angeles");
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer used for shared immutable storage.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc` and the frozen
/// types are `Send + Sync`.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`.
#[cfg(feature = "arc")]
pub type ReferenceCounter<T> = std::sync::Arc<T>;

/// Reference-counted smart pointer used for shared immutable storage.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc` and the frozen
/// types are `Send + Sync`.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`.
#[cfg(not(feature = "arc"))]
pub type ReferenceCounter<T> = std::rc::Rc<T>;

mod address;
mod person;

pub use address::FrozenAddress;
pub use person::FrozenPerson;

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(FrozenPerson: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(FrozenPerson: Send, Sync);

#[cfg(test)]
mod reference_counter_tests {
    use super::ReferenceCounter;
    use rstest::rstest;

    #[rstest]
    fn test_reference_counter_shares_str() {
        let text: ReferenceCounter<str> = ReferenceCounter::from("New York");
        let shared = ReferenceCounter::clone(&text);
        assert!(ReferenceCounter::ptr_eq(&text, &shared));
        assert_eq!(ReferenceCounter::strong_count(&text), 2);
    }
}
