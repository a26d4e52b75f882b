//! Converters and [`FlagValue`] impls for the primitive types.

use super::{ConverterRegistry, FlagValue};
use crate::ConvertError;

macro_rules! flag_values {
    ($($ty:ty),+ $(,)?) => {
        $( impl FlagValue for $ty {} )+
    };
}

flag_values!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, bool, String);

macro_rules! register_parsed {
    ($registry:expr, $variant:ident; $($ty:ty),+ $(,)?) => {
        $(
            $registry.register::<$ty, _>(|raw| {
                raw.parse::<$ty>().map_err(|source| ConvertError::$variant {
                    value: raw.to_owned(),
                    source,
                })
            });
        )+
    };
}

/// Parses the boolean spellings accepted on the command line.
pub(crate) fn parse_bool(raw: &str) -> Result<bool, ConvertError> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ConvertError::Bool {
            value: raw.to_owned(),
        }),
    }
}

pub(super) fn register_all(registry: &mut ConverterRegistry) {
    register_parsed!(registry, Int; i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
    register_parsed!(registry, Float; f32, f64);
    registry.register::<bool, _>(parse_bool);
    registry.register::<String, _>(|raw| Ok(raw.to_owned()));
}
