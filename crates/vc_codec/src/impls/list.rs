use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::iter;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat};
use crate::info::{ListInfo, TypeInfo, TypePath, Typed};
use crate::ops::{LengthError, List, ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Vec, VecDeque and Box<[T]>

macro_rules! impl_growable_list {
    ($ty:ty, $module:literal, $ident:literal, $open:literal, $close:literal) => {
        impl<T: Typed> TypePath for $ty {
            fn type_path() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    concat(&[$module, "::", $open, T::type_path(), $close])
                })
            }

            fn type_name() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| concat(&[$open, T::type_name(), $close]))
            }

            #[inline]
            fn type_ident() -> &'static str {
                $ident
            }

            #[inline]
            fn module_path() -> Option<&'static str> {
                Some($module)
            }
        }

        impl<T: Typed + Reflect + Default> Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| TypeInfo::List(ListInfo::new::<Self, T>()))
            }
        }

        impl<T: Typed + Reflect + Default> Reflect for $ty {
            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::List(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> ReflectMut<'_> {
                ReflectMut::List(self)
            }
        }

        impl<T: Typed + Reflect + Default> List for $ty {
            #[inline]
            fn len(&self) -> usize {
                self[..].len()
            }

            #[inline]
            fn get(&self, index: usize) -> Option<&dyn Reflect> {
                self[..].get(index).map(|item| item as &dyn Reflect)
            }

            #[inline]
            fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
                self[..].get_mut(index).map(|item| item as &mut dyn Reflect)
            }

            fn reset(&mut self, len: usize) -> Result<(), LengthError> {
                *self = iter::repeat_with(T::default).take(len).collect();
                Ok(())
            }
        }
    };
}

impl_growable_list!(Vec<T>, "alloc::vec", "Vec", "Vec<", ">");
impl_growable_list!(Box<[T]>, "alloc::boxed", "Box", "Box<[", "]>");

// `VecDeque` is not contiguous, so it cannot share the slice-based accessors.

impl<T: Typed> TypePath for VecDeque<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            concat(&["alloc::collections::VecDeque<", T::type_path(), ">"])
        })
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["VecDeque<", T::type_name(), ">"]))
    }

    #[inline]
    fn type_ident() -> &'static str {
        "VecDeque"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("alloc::collections")
    }
}

impl<T: Typed + Reflect + Default> Typed for VecDeque<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::List(ListInfo::new::<Self, T>()))
    }
}

impl<T: Typed + Reflect + Default> Reflect for VecDeque<T> {
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::List(self)
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::List(self)
    }
}

impl<T: Typed + Reflect + Default> List for VecDeque<T> {
    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        VecDeque::get(self, index).map(|item| item as &dyn Reflect)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        VecDeque::get_mut(self, index).map(|item| item as &mut dyn Reflect)
    }

    fn reset(&mut self, len: usize) -> Result<(), LengthError> {
        self.clear();
        self.resize_with(len, T::default);
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// [T; N]

impl<T: Typed, const N: usize> TypePath for [T; N] {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            let len = N.to_string();
            concat(&["[", T::type_path(), "; ", &len, "]"])
        })
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            let len = N.to_string();
            concat(&["[", T::type_name(), "; ", &len, "]"])
        })
    }

    #[inline]
    fn type_ident() -> &'static str {
        "[T; N]"
    }
}

impl<T: Typed + Reflect + Default, const N: usize> Typed for [T; N] {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::List(ListInfo::fixed::<Self, T>(N)))
    }
}

impl<T: Typed + Reflect + Default, const N: usize> Reflect for [T; N] {
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::List(self)
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::List(self)
    }
}

impl<T: Typed + Reflect + Default, const N: usize> List for [T; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        self.as_slice().get(index).map(|item| item as &dyn Reflect)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        self.as_mut_slice()
            .get_mut(index)
            .map(|item| item as &mut dyn Reflect)
    }

    fn reset(&mut self, len: usize) -> Result<(), LengthError> {
        if len != N {
            return Err(LengthError {
                expected: N,
                found: len,
            });
        }
        self.iter_mut().for_each(|item| *item = T::default());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::VecDeque;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::info::{TypePath, Typed};
    use crate::ops::{LengthError, List};

    #[test]
    fn type_paths() {
        assert_eq!(<Vec<u8>>::type_path(), "alloc::vec::Vec<u8>");
        assert_eq!(<Vec<Vec<u8>>>::type_name(), "Vec<Vec<u8>>");
        assert_eq!(<[bool; 3]>::type_name(), "[bool; 3]");
        assert_eq!(<Box<[i32]>>::type_name(), "Box<[i32]>");
    }

    #[test]
    fn reset_growable() {
        let mut list = vec![1_u8, 2, 3];
        List::reset(&mut list, 2).unwrap();
        assert_eq!(list, [0, 0]);

        let mut deque = VecDeque::from([4_i64]);
        List::reset(&mut deque, 3).unwrap();
        assert_eq!(deque, [0, 0, 0]);
    }

    #[test]
    fn reset_array_requires_length() {
        let mut array = [7_u32; 4];
        assert_eq!(
            List::reset(&mut array, 5),
            Err(LengthError { expected: 4, found: 5 })
        );
        List::reset(&mut array, 4).unwrap();
        assert_eq!(array, [0; 4]);
        assert_eq!(<[u32; 4]>::type_info().as_list().unwrap().fixed_len(), Some(4));
    }

    #[test]
    fn iterate_items() {
        let list: Vec<i32> = vec![3, 4];
        let items: Vec<i32> = (&list as &dyn List)
            .iter()
            .filter_map(|item| item.downcast_ref::<i32>().copied())
            .collect();
        assert_eq!(items, [3, 4]);
    }
}
