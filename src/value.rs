//! The numeric value kinds accepted by the renderer.

use bigdecimal::BigDecimal;

/// A numeric value to be rendered through a format string.
///
/// Integer values are converted losslessly to [`BigDecimal`] before
/// rendering, so every integer width formats exactly. `Double` keeps binary
/// floating-point semantics: it is rendered through the same correctly
/// rounded decimal conversion `printf` would use.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericValue {
    /// A signed integer
    Int64(i64),
    /// An unsigned integer
    Uint64(u64),
    /// A binary floating-point value
    Double(f64),
    /// An arbitrary-precision decimal value
    Decimal(BigDecimal),
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for NumericValue {
            fn from(v: $t) -> Self {
                NumericValue::Int64(v as i64)
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for NumericValue {
            fn from(v: $t) -> Self {
                NumericValue::Uint64(v as u64)
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl From<f32> for NumericValue {
    fn from(v: f32) -> Self {
        NumericValue::Double(v as f64)
    }
}

impl From<f64> for NumericValue {
    fn from(v: f64) -> Self {
        NumericValue::Double(v)
    }
}

impl From<BigDecimal> for NumericValue {
    fn from(v: BigDecimal) -> Self {
        NumericValue::Decimal(v)
    }
}
