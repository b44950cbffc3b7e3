//! `DeepCopy` - copies that share no mutable state with their source.
//!
//! `Clone` in Rust promises a duplicate, but not an independent one: cloning
//! an `Rc<RefCell<T>>` hands out a second owner of the same cell. `DeepCopy`
//! is the stronger promise that the copy-in/copy-out discipline relies on.
//!
//! # Laws
//!
//! For every value `a`:
//!
//! ## Equality
//!
//! ```text
//! a.deep_copy() == a
//! ```
//!
//! ## Independence
//!
//! Mutating `a.deep_copy()` by any means never changes the observable value
//! of `a`, and vice versa.
//!
//! # Examples
//!
//! ```rust
//! use immutable_record::record::DeepCopy;
//!
//! let names = vec![String::from("Main Street"), String::from("Oak Avenue")];
//! let mut copy = names.deep_copy();
//! copy[0].push_str(" North");
//!
//! assert_eq!(names[0], "Main Street");
//! assert_eq!(copy[0], "Main Street North");
//! ```

/// A type whose values can be duplicated without sharing mutable state.
///
/// # Laws
///
/// - **Equality**: `a.deep_copy() == a`
/// - **Independence**: no mutation of the copy is observable through the
///   source, and no mutation of the source is observable through the copy.
///
/// Implementations for composite types copy field by field, delegating to
/// each field's own `DeepCopy`. Use `#[derive(DeepCopy)]` (with the `derive`
/// feature) to generate that implementation.
///
/// # Examples
///
/// ```rust
/// use immutable_record::record::DeepCopy;
///
/// let street = String::from("Main Street");
/// let copy = street.deep_copy();
/// assert_eq!(street, copy);
/// assert_ne!(street.as_ptr(), copy.as_ptr());
/// ```
pub trait DeepCopy: Sized {
    /// Returns an independent copy of `self`.
    #[must_use]
    fn deep_copy(&self) -> Self;
}

// =============================================================================
// Primitive Implementations
// =============================================================================

macro_rules! impl_deep_copy_for_copy_types {
    ($($primitive:ty),* $(,)?) => {
        $(
            impl DeepCopy for $primitive {
                #[inline]
                fn deep_copy(&self) -> Self {
                    *self
                }
            }
        )*
    };
}

impl_deep_copy_for_copy_types!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, (),
);

// =============================================================================
// Owned Containers
// =============================================================================

impl DeepCopy for String {
    fn deep_copy(&self) -> Self {
        self.as_str().to_owned()
    }
}

impl<T: DeepCopy> DeepCopy for Option<T> {
    fn deep_copy(&self) -> Self {
        self.as_ref().map(DeepCopy::deep_copy)
    }
}

impl<T: DeepCopy> DeepCopy for Vec<T> {
    fn deep_copy(&self) -> Self {
        self.iter().map(DeepCopy::deep_copy).collect()
    }
}

/// Allocates a new box around a deep copy of the contents.
impl<T: DeepCopy> DeepCopy for Box<T> {
    fn deep_copy(&self) -> Self {
        Self::new(self.as_ref().deep_copy())
    }
}

impl<A: DeepCopy, B: DeepCopy> DeepCopy for (A, B) {
    fn deep_copy(&self) -> Self {
        (self.0.deep_copy(), self.1.deep_copy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0_i64)]
    #[case(-42_i64)]
    #[case(i64::MAX)]
    fn test_integer_deep_copy_is_equal(#[case] value: i64) {
        assert_eq!(value.deep_copy(), value);
    }

    #[rstest]
    fn test_string_deep_copy_allocates() {
        let original = String::from("New York");
        let copy = original.deep_copy();
        assert_eq!(original, copy);
        assert_ne!(original.as_ptr(), copy.as_ptr());
    }

    #[rstest]
    fn test_vec_deep_copy_is_independent() {
        let original = vec![String::from("a"), String::from("b")];
        let mut copy = original.deep_copy();
        copy[1].push('!');
        copy.push(String::from("c"));

        assert_eq!(original, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(copy, vec!["a".to_string(), "b!".to_string(), "c".to_string()]);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(String::from("Pune")))]
    fn test_option_deep_copy_is_equal(#[case] value: Option<String>) {
        assert_eq!(value.deep_copy(), value);
    }

    #[rstest]
    fn test_box_deep_copy_allocates() {
        let original = Box::new(7_u32);
        let copy = original.deep_copy();
        assert_eq!(*original, *copy);
        assert!(!std::ptr::eq(original.as_ref(), copy.as_ref()));
    }

    #[rstest]
    fn test_pair_deep_copy() {
        let original = (1_i32, String::from("Bhosari"));
        assert_eq!(original.deep_copy(), original);
    }
}
