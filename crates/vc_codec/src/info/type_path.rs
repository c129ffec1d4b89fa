use core::any::{Any, TypeId};
use core::fmt;

// -----------------------------------------------------------------------------
// TypePath

/// A static accessor to type paths and names.
///
/// - [`type_path`]: unique path of the type, including generics.
/// - [`type_name`]: path without the module, used in document type headers.
/// - [`type_ident`]: shortest name, without module path and generics.
/// - [`module_path`]: optional module path.
///
/// Names never start with `::`.
///
/// # Examples
///
/// ```
/// use vc_codec::info::TypePath;
///
/// struct Foo;
///
/// impl TypePath for Foo {
///     fn type_path() -> &'static str { "my_crate::foo::Foo" }
///     fn type_name() -> &'static str { "Foo" }
///     fn type_ident() -> &'static str { "Foo" }
///     fn module_path() -> Option<&'static str> { Some("my_crate::foo") }
/// }
///
/// assert_eq!(Foo::type_name(), "Foo");
/// ```
///
/// [`type_path`]: TypePath::type_path
/// [`type_name`]: TypePath::type_name
/// [`type_ident`]: TypePath::type_ident
/// [`module_path`]: TypePath::module_path
pub trait TypePath: 'static {
    /// Returns the fully qualified path of the type.
    fn type_path() -> &'static str;

    /// Returns the type path without the module prefix.
    fn type_name() -> &'static str;

    /// Returns the type name without module path and generics.
    fn type_ident() -> &'static str;

    /// Returns the module path, `None` for primitives.
    #[inline]
    fn module_path() -> Option<&'static str> {
        None
    }
}

/// Provide dynamic dispatch for types that implement [`TypePath`].
pub trait DynamicTypePath {
    /// See [`TypePath::type_path`].
    fn reflect_type_path(&self) -> &'static str;

    /// See [`TypePath::type_name`].
    fn reflect_type_name(&self) -> &'static str;
}

impl<T: TypePath> DynamicTypePath for T {
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        Self::type_path()
    }

    #[inline]
    fn reflect_type_name(&self) -> &'static str {
        Self::type_name()
    }
}

// -----------------------------------------------------------------------------
// Type

/// The identity of a type: its [`TypeId`] and [`TypePath`] accessors.
#[derive(Clone, Copy)]
pub struct Type {
    id: TypeId,
    type_path: fn() -> &'static str,
    type_name: fn() -> &'static str,
    type_ident: fn() -> &'static str,
    module_path: fn() -> Option<&'static str>,
}

impl Type {
    /// Creates a new [`Type`] from a type that implements [`TypePath`].
    #[inline]
    pub const fn of<T: TypePath>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            type_path: T::type_path,
            type_name: T::type_name,
            type_ident: T::type_ident,
            module_path: T::module_path,
        }
    }

    /// Returns the [`TypeId`] of the type.
    #[inline(always)]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Check if the given type matches this one.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        TypeId::of::<T>() == self.id
    }

    /// See [`TypePath::type_path`].
    #[inline]
    pub fn path(&self) -> &'static str {
        (self.type_path)()
    }

    /// See [`TypePath::type_name`].
    #[inline]
    pub fn name(&self) -> &'static str {
        (self.type_name)()
    }

    /// See [`TypePath::type_ident`].
    #[inline]
    pub fn ident(&self) -> &'static str {
        (self.type_ident)()
    }

    /// See [`TypePath::module_path`].
    #[inline]
    pub fn module_path(&self) -> Option<&'static str> {
        (self.module_path)()
    }

    /// Check if `definition` names the generic definition of this type,
    /// i.e. `module_path::type_ident`, ignoring generic arguments.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_codec::info::Type;
    /// use vc_codec::ops::KeyValue;
    ///
    /// let ty = Type::of::<KeyValue<i32, String>>();
    /// assert!(ty.is_definition("vc_codec::ops::KeyValue"));
    /// assert!(!ty.is_definition("vc_codec::ops::Key"));
    /// ```
    pub fn is_definition(&self, definition: &str) -> bool {
        let ident = self.ident();
        match self.module_path() {
            Some(module) => definition
                .strip_prefix(module)
                .and_then(|rest| rest.strip_prefix("::"))
                .is_some_and(|rest| rest == ident),
            None => definition == ident,
        }
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Type {}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
