//! Integration tests for `#[derive(DeepCopy)]`.

#![cfg(feature = "derive")]

use immutable_record::DeepCopy;
use immutable_record::composite::{Address, AddressHandle};
use immutable_record::record::{DeepCopy as _, Guarded};
use rstest::rstest;

// =============================================================================
// Test Structures
// =============================================================================

#[derive(Debug, PartialEq, DeepCopy)]
struct Employee {
    id: i64,
    home: Address,
    previous: Vec<Address>,
}

#[derive(Debug, PartialEq, DeepCopy)]
struct Contact(String, AddressHandle);

#[derive(Debug, PartialEq, DeepCopy)]
struct Holder<T> {
    value: Option<T>,
}

#[derive(Debug, PartialEq, DeepCopy)]
struct Marker;

fn employee() -> Employee {
    Employee {
        id: 1,
        home: Address::new("Bhosari", "Pune"),
        previous: vec![Address::new("Main Street", "New York")],
    }
}

// =============================================================================
// Tests
// =============================================================================

#[rstest]
fn test_named_struct_copy_is_equal_and_independent() {
    let original = employee();
    let mut copy = original.deep_copy();
    assert_eq!(copy, original);

    copy.home.set_city("Mumbai");
    copy.previous[0].set_street("Changed Street");

    assert_eq!(original, employee());
}

#[rstest]
fn test_tuple_struct_detaches_shared_handle() {
    let original = Contact(
        "Rushikesh".to_string(),
        AddressHandle::new(Address::new("Bhosari", "Pune")),
    );
    let copy = original.deep_copy();

    original.1.set_city("Mumbai");

    assert!(!AddressHandle::ptr_eq(&original.1, &copy.1));
    assert_eq!(copy.1.snapshot().city(), "Pune");
}

#[rstest]
fn test_generic_struct() {
    let original = Holder {
        value: Some(Address::new("Main Street", "New York")),
    };
    let mut copy = original.deep_copy();
    if let Some(address) = copy.value.as_mut() {
        address.set_city("Los Angeles");
    }

    assert_eq!(
        original.value.as_ref().map(Address::city),
        Some("New York")
    );
}

#[rstest]
fn test_unit_struct() {
    assert_eq!(Marker.deep_copy(), Marker);
}

#[rstest]
fn test_derived_type_works_inside_guarded() {
    let mut source = employee();
    let guarded = Guarded::capture(&source);

    source.home.set_street("Changed Street");

    assert_eq!(guarded.copy_out(), employee());
}
