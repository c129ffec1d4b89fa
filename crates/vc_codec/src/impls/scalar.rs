use alloc::string::String;
use core::fmt::Write;

use crate::Reflect;
use crate::grammar;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{ScalarInfo, ScalarKind, TypeInfo, TypePath, Typed};
use crate::ops::{ReflectMut, ReflectRef, Scalar, ScalarError};

macro_rules! impl_scalar_reflect {
    ($ty:ty, $name:expr, $kind:ident) => {
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                $name
            }

            #[inline]
            fn type_name() -> &'static str {
                $name
            }

            #[inline]
            fn type_ident() -> &'static str {
                $name
            }
        }

        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::Scalar(ScalarInfo::new::<Self>(ScalarKind::$kind)))
            }
        }

        impl Reflect for $ty {
            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::Scalar(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> ReflectMut<'_> {
                ReflectMut::Scalar(self)
            }
        }
    };
}

// -----------------------------------------------------------------------------
// Numbers

macro_rules! impl_number {
    ($kind:ident, $expected:literal: $($ty:ident)*) => {$(
        impl_scalar_reflect!($ty, stringify!($ty), $kind);

        impl Scalar for $ty {
            fn encode_text(&self, out: &mut String) {
                // Writing into a `String` cannot fail.
                let _ = write!(out, "{self}");
            }

            fn decode_text(&mut self, text: &str) -> Result<(), ScalarError> {
                *self = text
                    .parse()
                    .map_err(|_| ScalarError::invalid(text, $expected))?;
                Ok(())
            }
        }
    )*};
}

impl_number!(Integer, "integer": i8 i16 i32 i64 u8 u16 u32 u64);
impl_number!(Float, "floating point number": f32 f64);

// -----------------------------------------------------------------------------
// bool

impl_scalar_reflect!(bool, "bool", Bool);

impl Scalar for bool {
    fn encode_text(&self, out: &mut String) {
        out.push(if *self { '1' } else { '0' });
    }

    fn decode_text(&mut self, text: &str) -> Result<(), ScalarError> {
        *self = match text {
            "1" => true,
            "0" => false,
            _ => return Err(ScalarError::invalid(text, "boolean (`1` or `0`)")),
        };
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// String

impl TypePath for String {
    #[inline]
    fn type_path() -> &'static str {
        "alloc::string::String"
    }

    #[inline]
    fn type_name() -> &'static str {
        "String"
    }

    #[inline]
    fn type_ident() -> &'static str {
        "String"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("alloc::string")
    }
}

impl Typed for String {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Scalar(ScalarInfo::new::<Self>(ScalarKind::String)))
    }
}

impl Reflect for String {
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Scalar(self)
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Scalar(self)
    }
}

impl Scalar for String {
    #[inline]
    fn encode_text(&self, out: &mut String) {
        grammar::write_quoted(out, self);
    }

    fn decode_text(&mut self, text: &str) -> Result<(), ScalarError> {
        *self = grammar::read_quoted(text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::ops::{Scalar, ScalarError};

    fn encoded(value: &dyn Scalar) -> String {
        let mut out = String::new();
        value.encode_text(&mut out);
        out
    }

    #[test]
    fn numbers() {
        assert_eq!(encoded(&-42_i32), "-42");
        assert_eq!(encoded(&u64::MAX), "18446744073709551615");
        assert_eq!(encoded(&0.1_f32), "0.1");
        assert_eq!(encoded(&1.0_f64), "1");

        let mut value = 0_i16;
        value.decode_text("-7").unwrap();
        assert_eq!(value, -7);
        assert!(matches!(
            value.decode_text("7.5"),
            Err(ScalarError::Invalid { .. })
        ));

        let mut float = 0.0_f32;
        float.decode_text(&encoded(&1.0e-7_f32)).unwrap();
        assert_eq!(float, 1.0e-7);
    }

    #[test]
    fn booleans() {
        assert_eq!(encoded(&true), "1");
        assert_eq!(encoded(&false), "0");

        let mut value = true;
        value.decode_text("0").unwrap();
        assert!(!value);
        assert!(value.decode_text("true").is_err());
    }

    #[test]
    fn strings() {
        let text = String::from("a\tb\nc\\d");
        assert_eq!(encoded(&text), "\"a\\tb\\nc\\\\d\"");

        let mut value = String::from("old");
        value.decode_text("\"\"").unwrap();
        assert!(value.is_empty());
        assert!(matches!(
            value.decode_text("\"bad\\q\""),
            Err(ScalarError::UnknownEscape('q'))
        ));
    }
}
