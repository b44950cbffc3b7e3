//! Shared mutable handle to an [`Address`].
//!
//! A plain `Address` has exactly one owner, so Rust alone rules out the
//! "caller keeps a reference and mutates it later" hazard. `AddressHandle`
//! brings that hazard back on purpose: every clone of a handle refers to the
//! same instance, and a write through one clone is seen by all of them.
//! Records built from a handle must therefore copy its state in.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::Address;
use crate::record::DeepCopy;

/// A reference-counted, interior-mutable handle to one `Address` instance.
///
/// - `Clone` captures the reference: both handles see every write.
/// - [`DeepCopy`] allocates a new instance that shares nothing.
///
/// The handle is single-threaded; it is neither `Send` nor `Sync`.
///
/// # Examples
///
/// ```rust
/// use immutable_record::composite::{Address, AddressHandle};
/// use immutable_record::record::DeepCopy;
///
/// let handle = AddressHandle::new(Address::new("Bhosari", "Pune"));
/// let alias = handle.clone();
/// let copy = handle.deep_copy();
///
/// alias.set_city("Mumbai");
///
/// assert_eq!(handle.snapshot().city(), "Mumbai");
/// assert_eq!(copy.snapshot().city(), "Pune");
/// assert!(AddressHandle::ptr_eq(&handle, &alias));
/// assert!(!AddressHandle::ptr_eq(&handle, &copy));
/// ```
#[derive(Clone, Default)]
pub struct AddressHandle {
    shared: Rc<RefCell<Address>>,
}

impl AddressHandle {
    /// Wraps `address` in a new shared instance.
    #[must_use]
    pub fn new(address: Address) -> Self {
        Self {
            shared: Rc::new(RefCell::new(address)),
        }
    }

    /// Returns a value copy of the instance's current state.
    #[must_use]
    pub fn snapshot(&self) -> Address {
        self.shared.borrow().deep_copy()
    }

    /// Replaces the street of the shared instance.
    pub fn set_street(&self, street: impl Into<String>) {
        self.shared.borrow_mut().set_street(street);
    }

    /// Replaces the city of the shared instance.
    pub fn set_city(&self, city: impl Into<String>) {
        self.shared.borrow_mut().set_city(city);
    }

    /// Returns `true` when both handles refer to the same instance.
    #[must_use]
    pub fn ptr_eq(first: &Self, second: &Self) -> bool {
        Rc::ptr_eq(&first.shared, &second.shared)
    }
}

impl DeepCopy for AddressHandle {
    fn deep_copy(&self) -> Self {
        Self::new(self.snapshot())
    }
}

impl From<Address> for AddressHandle {
    fn from(address: Address) -> Self {
        Self::new(address)
    }
}

impl PartialEq for AddressHandle {
    fn eq(&self, other: &Self) -> bool {
        *self.shared.borrow() == *other.shared.borrow()
    }
}

impl Eq for AddressHandle {}

impl fmt::Debug for AddressHandle {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("AddressHandle")
            .field(&*self.shared.borrow())
            .finish()
    }
}

impl fmt::Display for AddressHandle {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.shared.borrow(), formatter)
    }
}

static_assertions::assert_not_impl_any!(AddressHandle: Send, Sync);
