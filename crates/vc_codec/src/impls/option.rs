use alloc::boxed::Box;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat};
use crate::info::{OptionInfo, TypeInfo, TypePath, Typed};
use crate::ops::{Optional, ReflectMut, ReflectRef};

impl<T: Typed> TypePath for Option<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["core::option::Option<", T::type_path(), ">"]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["Option<", T::type_name(), ">"]))
    }

    #[inline]
    fn type_ident() -> &'static str {
        "Option"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("core::option")
    }
}

impl<T: Typed + Reflect + Default> Typed for Option<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Optional(OptionInfo::new::<Self, T>()))
    }
}

impl<T: Typed + Reflect + Default> Reflect for Option<T> {
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Optional(self)
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Optional(self)
    }
}

impl<T: Typed + Reflect + Default> Optional for Option<T> {
    #[inline]
    fn get(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(|value| value as &dyn Reflect)
    }

    #[inline]
    fn get_mut(&mut self) -> Option<&mut dyn Reflect> {
        self.as_mut().map(|value| value as &mut dyn Reflect)
    }

    #[inline]
    fn clear(&mut self) {
        *self = None;
    }

    #[inline]
    fn insert_default(&mut self) -> &mut dyn Reflect {
        self.insert(T::default())
    }

    #[inline]
    fn placeholder(&self) -> Box<dyn Reflect> {
        Box::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use crate::info::{TypeKind, TypePath, Typed};
    use crate::ops::Optional;

    #[test]
    fn slot_operations() {
        let mut slot: Option<u8> = Some(3);
        assert_eq!(Optional::get(&slot).unwrap().downcast_ref::<u8>(), Some(&3));

        Optional::clear(&mut slot);
        assert!(slot.is_none());

        *slot.insert_default().downcast_mut::<u8>().unwrap() = 9;
        assert_eq!(slot, Some(9));
        assert_eq!(slot.placeholder().downcast_ref::<u8>(), Some(&0));
    }

    #[test]
    fn info() {
        let info = <Option<bool>>::type_info();
        assert_eq!(info.kind(), TypeKind::Optional);
        assert_eq!(<Option<bool>>::type_name(), "Option<bool>");
        assert_eq!(info.as_optional().unwrap().inner_info().kind(), TypeKind::Scalar);
    }
}
