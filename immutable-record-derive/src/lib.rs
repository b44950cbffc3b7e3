//! Derive macros for immutable-record.
//!
//! # Available Derive Macros
//!
//! - [`DeepCopy`]: Generates a field-by-field `DeepCopy` implementation
//! - [`Lenses`]: Generates lens constructors for struct fields
//!
//! # Example: DeepCopy
//!
//! ```rust,ignore
//! use immutable_record::composite::Address;
//! use immutable_record::record::DeepCopy;
//! use immutable_record_derive::DeepCopy;
//!
//! #[derive(Debug, PartialEq, DeepCopy)]
//! struct Employee {
//!     id: i64,
//!     home: Address,
//! }
//!
//! let employee = Employee { id: 1, home: Address::new("Bhosari", "Pune") };
//! let mut copy = employee.deep_copy();
//! copy.home.set_city("Mumbai");
//! assert_eq!(employee.home.city(), "Pune");
//! ```
//!
//! # Example: Lenses
//!
//! ```rust,ignore
//! use immutable_record::optics::Lens;
//! use immutable_record_derive::Lenses;
//!
//! #[derive(Clone, Lenses)]
//! struct Badge {
//!     id: i64,
//!     holder: String,
//! }
//!
//! // Generated methods:
//! // - Badge::id_lens() -> impl Lens<Badge, i64>
//! // - Badge::holder_lens() -> impl Lens<Badge, String>
//!
//! let badge = Badge { id: 25, holder: "John".to_string() };
//! assert_eq!(*Badge::id_lens().get(&badge), 25);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod deep_copy;
mod lenses;

use proc_macro::TokenStream;

/// Derive macro for `immutable_record::record::DeepCopy`.
///
/// The generated implementation rebuilds the struct, deep-copying every field
/// in declaration order. Named, tuple and unit structs are supported; every
/// field type must itself implement `DeepCopy`.
///
/// # Generated Code
///
/// ```rust,ignore
/// impl DeepCopy for Employee {
///     fn deep_copy(&self) -> Self {
///         Self {
///             id: DeepCopy::deep_copy(&self.id),
///             home: DeepCopy::deep_copy(&self.home),
///         }
///     }
/// }
/// ```
///
/// # Generics
///
/// Each type parameter `T` receives a `T: DeepCopy` bound.
///
/// # Errors
///
/// Enums and unions are rejected with a compile error.
#[proc_macro_derive(DeepCopy)]
pub fn derive_deep_copy(input: TokenStream) -> TokenStream {
    deep_copy::derive_deep_copy_impl(input)
}

/// Derive macro for generating Lens constructors for struct fields.
///
/// For each field `foo` of type `T`, generates:
///
/// ```rust,ignore
/// impl StructName {
///     pub fn foo_lens() -> impl Lens<StructName, T> + Clone { ... }
/// }
/// ```
///
/// The generated methods live in the struct's own module, so they can reach
/// private fields. This is how records with private fields offer functional
/// updates without exposing setters.
///
/// # Requirements
///
/// - The struct must have named fields
/// - The struct should implement `Clone` to compose lenses over it
#[proc_macro_derive(Lenses)]
pub fn derive_lenses(input: TokenStream) -> TokenStream {
    lenses::derive_lenses_impl(input)
}
