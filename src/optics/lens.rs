//! Field lenses over immutable values.
//!
//! `set` takes the source by value and hands back the rebuilt one, so no
//! instance that a caller can still see is ever changed.

use std::marker::PhantomData;

/// A getter/replacer pair for one field `A` of a value `S`.
pub trait Lens<S, A> {
    /// Borrows the focused field.
    fn get<'a>(&self, source: &'a S) -> &'a A;

    /// Consumes `source` and returns it with the focused field replaced.
    fn set(&self, source: S, value: A) -> S;

    /// Chains `other` after this lens, focusing on a field of the field.
    ///
    /// # Example
    ///
    /// ```
    /// use immutable_record::optics::{FunctionLens, Lens};
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Site { street: String, city: String }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Office { name: String, site: Site }
    ///
    /// let office_site = FunctionLens::new(
    ///     |office: &Office| &office.site,
    ///     |office: Office, site: Site| Office { site, ..office },
    /// );
    /// let site_city = FunctionLens::new(
    ///     |site: &Site| &site.city,
    ///     |site: Site, city: String| Site { city, ..site },
    /// );
    /// let office_city = office_site.compose(site_city);
    ///
    /// let office = Office {
    ///     name: "Head Office".to_string(),
    ///     site: Site {
    ///         street: "Main Street".to_string(),
    ///         city: "New York".to_string(),
    ///     },
    /// };
    ///
    /// assert_eq!(office_city.get(&office), "New York");
    /// let moved = office_city.set(office.clone(), "Los Angeles".to_string());
    /// assert_eq!(moved.site.street, "Main Street");
    /// assert_eq!(office.site.city, "New York");
    /// ```
    fn compose<B, L>(self, other: L) -> ComposedLens<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedLens::new(self, other)
    }
}

/// A lens built from a getter closure and a rebuilding setter closure.
///
/// `#[derive(Lenses)]` generates one of these per named field.
pub struct FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    getter: G,
    setter: St,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, St> FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    /// Pairs `getter` with `setter`.
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> Lens<S, A> for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    fn get<'a>(&self, source: &'a S) -> &'a A {
        (self.getter)(source)
    }

    fn set(&self, source: S, value: A) -> S {
        (self.setter)(source, value)
    }
}

impl<S, A, G, St> Clone for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A + Clone,
    St: Fn(S, A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.getter.clone(), self.setter.clone())
    }
}

/// Two lenses chained through an intermediate value `A`.
///
/// Setting clones the intermediate value, replaces the inner field on the
/// clone and then replaces the intermediate value on the source.
pub struct ComposedLens<L1, L2, A> {
    outer: L1,
    inner: L2,
    _marker: PhantomData<A>,
}

impl<L1, L2, A> ComposedLens<L1, L2, A> {
    /// Chains `outer` with `inner`.
    #[must_use]
    pub const fn new(outer: L1, inner: L2) -> Self {
        Self {
            outer,
            inner,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L1, L2> Lens<S, B> for ComposedLens<L1, L2, A>
where
    L1: Lens<S, A>,
    L2: Lens<A, B>,
    A: Clone + 'static,
{
    fn get<'a>(&self, source: &'a S) -> &'a B {
        self.inner.get(self.outer.get(source))
    }

    fn set(&self, source: S, value: B) -> S {
        let rebuilt = self.inner.set(self.outer.get(&source).clone(), value);
        self.outer.set(source, rebuilt)
    }
}

impl<L1: Clone, L2: Clone, A> Clone for ComposedLens<L1, L2, A> {
    fn clone(&self) -> Self {
        Self::new(self.outer.clone(), self.inner.clone())
    }
}
