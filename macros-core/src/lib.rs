//! Procedural macros shared lib for drone-cmsis.
//!
//! See `drone-cmsis` documentation for details.

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod alias;
mod locate;
mod macros;

pub use self::{
    alias::canonicalize,
    locate::{
        base_key, field_keys, offset_key, register_key, FieldKeys, FieldValue, FieldValues,
        Peripheral, Target, BASE_SUFFIX, MSK_SUFFIX, OFFSET_SUFFIX, POS_SUFFIX,
    },
};
