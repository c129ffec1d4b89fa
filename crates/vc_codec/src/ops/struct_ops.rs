use crate::Reflect;

/// A struct with named members.
///
/// Member names are the names used in documents, so a renamed field is
/// reached by its new name and a skipped field is not reachable at all.
///
/// # Examples
///
/// ```
/// use vc_codec::{derive::Tabular, ops::Struct};
///
/// #[derive(Tabular, Default)]
/// struct Foo {
///     a: u32,
///     #[tabular(skip)]
///     cache: u32,
/// }
///
/// let foo = Foo { a: 3, cache: 9 };
/// assert_eq!(foo.field("a").unwrap().downcast_ref::<u32>(), Some(&3));
/// assert!(foo.field("cache").is_none());
/// ```
pub trait Struct: Reflect {
    /// Returns a reference to the member named `name`.
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    /// Returns a mutable reference to the member named `name`.
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect>;
}
