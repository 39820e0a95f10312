use crate::{
    error::Error,
    payload::{Boxed, Number, Payload, RawView, literal},
    reader::{ValueReader, as_is},
    type_key::RawType,
};
use std::{marker::PhantomData, str::FromStr};

///
/// StringReader
///
/// Text is returned as-is; everything else is read as its literal text.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct StringReader;

impl ValueReader for StringReader {
    fn is_compatible(&self, target: RawType) -> bool {
        target.is::<String>()
    }

    fn read(&self, _target: RawType, value: &dyn Payload) -> Result<Boxed, Error> {
        Ok(Box::new(literal(value)))
    }
}

///
/// BoolReader
///
/// Numbers read as `!= 0`; any other literal is true only when it equals
/// `true` ignoring case.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct BoolReader;

impl ValueReader for BoolReader {
    fn is_compatible(&self, target: RawType) -> bool {
        target.is::<bool>()
    }

    fn read(&self, _target: RawType, value: &dyn Payload) -> Result<Boxed, Error> {
        let flag = match value.view() {
            RawView::Bool(flag) => flag,
            RawView::Number(number) => !number.is_zero(),
            _ => literal(value).eq_ignore_ascii_case("true"),
        };

        Ok(Box::new(flag))
    }
}

///
/// CharReader
///

#[derive(Clone, Copy, Debug, Default)]
pub struct CharReader;

impl ValueReader for CharReader {
    fn is_compatible(&self, target: RawType) -> bool {
        target.is::<char>()
    }

    fn read(&self, target: RawType, value: &dyn Payload) -> Result<Boxed, Error> {
        let ch = match value.view() {
            RawView::Char(ch) => ch,
            RawView::Number(number) => u32::try_from(number.as_u64())
                .ok()
                .and_then(char::from_u32)
                .ok_or_else(|| Error::malformed(target, number.to_string(), "not a code point"))?,
            _ => {
                let text = literal(value);
                text.chars()
                    .next()
                    .ok_or_else(|| Error::malformed(target, text.clone(), "empty literal"))?
            }
        };

        Ok(Box::new(ch))
    }
}

///
/// NumericTarget
///
/// Primitive numbers the `NumberReader` can produce.
///
/// Integer targets only accept numbers inside their range, so a number and
/// its literal text convert alike. Floats are truncated toward zero first.
///

pub trait NumericTarget: Payload + Copy + FromStr<Err: std::fmt::Display> {
    fn from_number(number: Number) -> Option<Self>;
}

macro_rules! impl_integer_target {
    ($($ty:ty),* $(,)?) => {
        $(
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_precision_loss,
                clippy::cast_sign_loss,
                clippy::unnecessary_fallible_conversions
            )]
            impl NumericTarget for $ty {
                fn from_number(number: Number) -> Option<Self> {
                    match number {
                        Number::Signed(v) => Self::try_from(v).ok(),
                        Number::Unsigned(v) => Self::try_from(v).ok(),
                        Number::Float(v) => {
                            let v = v.trunc();
                            let in_range = v >= Self::MIN as f64 && v <= Self::MAX as f64;

                            in_range.then_some(v as Self)
                        }
                    }
                }
            }
        )*
    };
}

impl_integer_target!(i8, i16, i32, i64, u8, u16, u32, u64);

#[allow(clippy::cast_possible_truncation)]
impl NumericTarget for f32 {
    fn from_number(number: Number) -> Option<Self> {
        Some(number.as_f64() as Self)
    }
}

impl NumericTarget for f64 {
    fn from_number(number: Number) -> Option<Self> {
        Some(number.as_f64())
    }
}

///
/// NumberReader
///
/// One reader per primitive target. Numbers outside the target range and
/// literals that do not parse are MalformedLiteral.
///

#[derive(Clone, Copy, Debug)]
pub struct NumberReader<T> {
    marker: PhantomData<fn() -> T>,
}

impl<T: NumericTarget> NumberReader<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<T: NumericTarget> Default for NumberReader<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: NumericTarget> ValueReader for NumberReader<T> {
    fn is_compatible(&self, target: RawType) -> bool {
        target.is::<T>()
    }

    fn read(&self, target: RawType, value: &dyn Payload) -> Result<Boxed, Error> {
        if let Some(same) = as_is(target, value) {
            return Ok(same);
        }

        let number = match value.view() {
            RawView::Number(number) => T::from_number(number)
                .ok_or_else(|| Error::malformed(target, number.to_string(), "out of range"))?,
            _ => parse_literal::<T>(target, value)?,
        };

        Ok(Box::new(number))
    }
}

/// Parse the literal text of `value` as `T`. Surrounding whitespace is not
/// stripped.
pub(crate) fn parse_literal<T>(target: RawType, value: &dyn Payload) -> Result<T, Error>
where
    T: FromStr<Err: std::fmt::Display>,
{
    let text = literal(value);

    text.parse::<T>()
        .map_err(|err| Error::malformed(target, text.clone(), err))
}
