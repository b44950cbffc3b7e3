//! Optics for immutable data manipulation.
//!
//! Immutable records have no setters, so "changing" one means building a new
//! record with one field replaced. A [`Lens`] packages that get/replace pair
//! for a single field and composes with other lenses to reach nested fields.
//!
//! # Example
//!
//! ```
//! use immutable_record::optics::{FunctionLens, Lens};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Site { street: String, city: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Badge { holder: String, site: Site }
//!
//! let badge_site = FunctionLens::new(
//!     |badge: &Badge| &badge.site,
//!     |badge: Badge, site: Site| Badge { site, ..badge },
//! );
//! let site_street = FunctionLens::new(
//!     |site: &Site| &site.street,
//!     |site: Site, street: String| Site { street, ..site },
//! );
//! let badge_street = badge_site.compose(site_street);
//!
//! let badge = Badge {
//!     holder: "John".to_string(),
//!     site: Site {
//!         street: "Main Street".to_string(),
//!         city: "New York".to_string(),
//!     },
//! };
//!
//! let updated = badge_street.set(badge.clone(), "Changed Street".to_string());
//! assert_eq!(badge.site.street, "Main Street"); // Original unchanged
//! assert_eq!(updated.site.street, "Changed Street");
//! assert_eq!(updated.site.city, "New York");
//! ```
//!
//! Types with private fields expose lenses through `#[derive(Lenses)]`; see
//! [`crate::frozen`].
//!
//! # Lens Laws
//!
//! 1. **GetPut Law**: `lens.set(source, lens.get(&source).clone()) == source`
//! 2. **PutGet Law**: `lens.get(&lens.set(source, value)) == &value`
//! 3. **PutPut Law**: `lens.set(lens.set(source, v1), v2) == lens.set(source, v2)`

mod lens;

pub use lens::ComposedLens;
pub use lens::FunctionLens;
pub use lens::Lens;
