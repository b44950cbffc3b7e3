//! # immutable-record
//!
//! Immutable records that embed mutable composite values, kept immutable by
//! value semantics at the boundary.
//!
//! ## Overview
//!
//! A record with no setters is not yet immutable if one of its fields is a
//! mutable value that someone else can still reach. This library shows and
//! enforces the two ways out:
//!
//! - **Copy-in, copy-out** ([`record`]): the record deep-copies the composite
//!   on construction and on every read, so the internal instance is never
//!   shared. [`record::Person`] over [`composite::Address`].
//! - **Immutable composite** ([`frozen`]): the composite itself cannot change,
//!   so it can be shared freely and the copies disappear.
//!
//! ## Feature Flags
//!
//! - `optics`: `Lens` trait with function-backed and composed lenses
//! - `derive`: `#[derive(DeepCopy)]` and `#[derive(Lenses)]`
//! - `frozen`: Immutable composites (`FrozenAddress`, `FrozenPerson`)
//! - `arc`: Use `Arc` instead of `Rc` inside frozen types (makes them `Send + Sync`)
//! - `serde`: Serialization support
//! - `full`: Enable all features except `arc`
//!
//! ## Example
//!
//! ```rust
//! use immutable_record::prelude::*;
//!
//! let mut address = Address::new("Main Street", "New York");
//! let person = Person::new(25, "John", &address);
//!
//! // Mutating the caller's address does not reach the person
//! address.set_street("Changed Street");
//!
//! // Mutating a returned copy does not reach the person either
//! let mut copy = person.address();
//! copy.set_city("Los Angeles");
//!
//! assert_eq!(
//!     person.to_string(),
//!     "Person [id=25, name=John, address=Address [street=Main Street, city=New York]]"
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

// Lets derive output written against `::immutable_record` resolve inside this crate.
#[cfg(feature = "derive")]
extern crate self as immutable_record;

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use immutable_record::prelude::*;
/// ```
pub mod prelude {
    pub use crate::composite::*;
    pub use crate::record::*;

    #[cfg(feature = "optics")]
    pub use crate::optics::*;

    #[cfg(feature = "frozen")]
    pub use crate::frozen::*;

    #[cfg(feature = "derive")]
    pub use immutable_record_derive::{DeepCopy, Lenses};
}

pub mod composite;

pub mod record;

#[cfg(feature = "optics")]
pub mod optics;

#[cfg(feature = "frozen")]
pub mod frozen;

#[cfg(feature = "derive")]
pub use immutable_record_derive::{DeepCopy, Lenses};
