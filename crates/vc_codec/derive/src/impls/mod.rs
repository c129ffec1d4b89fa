// -----------------------------------------------------------------------------
// Modules

mod match_tabular;

mod enum_kind;
mod struct_kind;

mod trait_reflect;
mod trait_type_path;
mod trait_typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use match_tabular::match_tabular_impls;

use enum_kind::impl_enum;
use struct_kind::impl_struct;
use trait_reflect::impl_trait_reflect;
use trait_type_path::impl_trait_type_path;
use trait_typed::impl_trait_typed;
