//! Immutable records with copy-in/copy-out value semantics.
//!
//! A record that embeds a mutable value stays immutable only if nobody else
//! can reach that value. This module provides the pieces:
//!
//! - [`DeepCopy`]: copies that share no mutable state with their source
//! - [`Guarded`]: a cell that copies values in and out, never lending them
//! - [`Person`]: an immutable record embedding a mutable
//!   [`Address`](crate::composite::Address)
//!
//! # Copy-in, Copy-out
//!
//! ```rust
//! use immutable_record::composite::Address;
//! use immutable_record::record::Person;
//!
//! let mut original = Address::new("Main Street", "New York");
//! let person = Person::new(25, "John", &original);
//!
//! // Copy-in: the caller's address stays independent
//! original.set_street("Changed Street");
//!
//! // Copy-out: every read is a fresh instance
//! let mut read = person.address();
//! read.set_city("Los Angeles");
//!
//! assert_eq!(person.address(), Address::new("Main Street", "New York"));
//! ```
//!
//! # Sharing Across Threads
//!
//! Because the internal address is never lent out mutably, a `Person` can be
//! shared through `Arc` without any locking.
//!
//! ```rust
//! use std::sync::Arc;
//! use std::thread;
//! use immutable_record::composite::Address;
//! use immutable_record::record::Person;
//!
//! let person = Arc::new(Person::new(1, "Rushikesh", &Address::new("Bhosari", "Pune")));
//! let reader = Arc::clone(&person);
//! let city = thread::spawn(move || reader.address().city().to_owned())
//!     .join()
//!     .unwrap();
//! assert_eq!(city, "Pune");
//! ```

mod deep_copy;
mod guarded;
mod person;

pub use deep_copy::DeepCopy;
pub use guarded::Guarded;
pub use person::Person;

static_assertions::assert_impl_all!(Person: Send, Sync, Clone);
static_assertions::assert_impl_all!(Guarded<crate::composite::Address>: Send, Sync);
