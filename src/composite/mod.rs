//! Mutable composite values.
//!
//! - [`Address`]: a plain mutable value with in-place setters
//! - [`AddressHandle`]: a shared, interior-mutable handle to one `Address`
//!
//! Neither type protects itself from mutation; that is the job of the
//! records in [`crate::record`] that embed them.

mod address;
mod handle;

pub use address::Address;
pub use handle::AddressHandle;
