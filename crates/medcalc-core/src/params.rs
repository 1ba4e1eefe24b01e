//! Raw parameter access.
//!
//! Calculators receive a flat JSON object of named parameters. [`Params`]
//! wraps that object and performs the per-field type and vocabulary checks.
//! Inclusive ranges declared on a field are checked as soon as that field is
//! read, so the first failing field in declaration order is the one reported;
//! cross-field rules are checked by each calculator once its typed input has
//! been built.

use std::ops::RangeInclusive;

use serde_json::{Map, Value};

use crate::error::CalcError;
use crate::math::ensure_range;

/// A closed vocabulary of wire tokens, e.g. `"yes"` / `"no"`.
///
/// Implemented by the [`choice!`](crate::choice) macro.
pub trait Choice: Sized + Copy + 'static {
    /// Accepted tokens in declaration order.
    const TOKENS: &'static [&'static str];

    fn from_token(token: &str) -> Option<Self>;

    fn token(self) -> &'static str;
}

/// Extract one typed field from the parameter object.
pub trait FromParam: Sized {
    fn from_param(params: &Params<'_>, name: &str) -> Result<Self, CalcError>;
}

/// Build a whole calculator input, field by field, failing on the first
/// invalid one. Implemented by the [`calculator_input!`](crate::calculator_input)
/// macro.
pub trait FromParams: Sized {
    fn from_params(params: &Params<'_>) -> Result<Self, CalcError>;
}

/// Borrowed view over a calculator's named parameters.
#[derive(Debug, Clone, Copy)]
pub struct Params<'a> {
    values: &'a Map<String, Value>,
}

impl<'a> Params<'a> {
    pub fn new(values: &'a Map<String, Value>) -> Self {
        Self { values }
    }

    /// A field counts as present unless absent or `null`.
    pub fn is_present(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    fn get(&self, name: &str) -> Option<&'a Value> {
        self.values.get(name).filter(|v| !v.is_null())
    }

    pub fn required(&self, name: &str) -> Result<&'a Value, CalcError> {
        self.get(name)
            .ok_or_else(|| CalcError::MissingField(name.to_string()))
    }

    pub fn number(&self, name: &str) -> Result<f64, CalcError> {
        let value = self.required(name)?;
        value.as_f64().ok_or_else(|| invalid_type(name, "a number"))
    }

    /// Integers only. A float with no fractional part (`3.0`) is accepted.
    pub fn integer(&self, name: &str) -> Result<i64, CalcError> {
        let value = self.required(name)?;
        if let Some(i) = value.as_i64() {
            return Ok(i);
        }
        match value.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(f as i64),
            _ => Err(invalid_type(name, "an integer")),
        }
    }

    pub fn boolean(&self, name: &str) -> Result<bool, CalcError> {
        let value = self.required(name)?;
        value.as_bool().ok_or_else(|| invalid_type(name, "a boolean"))
    }

    pub fn text(&self, name: &str) -> Result<&'a str, CalcError> {
        let value = self.required(name)?;
        value.as_str().ok_or_else(|| invalid_type(name, "a string"))
    }

    pub fn choice<T: Choice>(&self, name: &str) -> Result<T, CalcError> {
        let value = self.required(name)?;
        choice_item(name, value)
    }

    pub fn list(&self, name: &str) -> Result<&'a [Value], CalcError> {
        let value = self.required(name)?;
        value
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| invalid_type(name, "a list"))
    }
}

fn invalid_type(name: &str, expected: &str) -> CalcError {
    CalcError::InvalidType {
        field: name.to_string(),
        expected: expected.to_string(),
    }
}

impl FromParam for f64 {
    fn from_param(params: &Params<'_>, name: &str) -> Result<Self, CalcError> {
        params.number(name)
    }
}

impl FromParam for i64 {
    fn from_param(params: &Params<'_>, name: &str) -> Result<Self, CalcError> {
        params.integer(name)
    }
}

impl FromParam for bool {
    fn from_param(params: &Params<'_>, name: &str) -> Result<Self, CalcError> {
        params.boolean(name)
    }
}

impl FromParam for String {
    fn from_param(params: &Params<'_>, name: &str) -> Result<Self, CalcError> {
        params.text(name).map(str::to_string)
    }
}

impl<T: FromParam> FromParam for Option<T> {
    fn from_param(params: &Params<'_>, name: &str) -> Result<Self, CalcError> {
        if params.is_present(name) {
            T::from_param(params, name).map(Some)
        } else {
            Ok(None)
        }
    }
}

/// Inclusive bounds declared on a [`calculator_input!`](crate::calculator_input)
/// field. Absent optional fields always pass.
pub trait Bounded<T> {
    fn check_bounds(&self, field: &str, bounds: RangeInclusive<T>) -> Result<(), CalcError>;
}

macro_rules! bounded {
    ($($t:ty),*) => {
        $(
            impl Bounded<$t> for $t {
                fn check_bounds(&self, field: &str, bounds: RangeInclusive<$t>) -> Result<(), CalcError> {
                    ensure_range(field, *self, *bounds.start(), *bounds.end()).map(drop)
                }
            }

            impl Bounded<$t> for Option<$t> {
                fn check_bounds(&self, field: &str, bounds: RangeInclusive<$t>) -> Result<(), CalcError> {
                    match self {
                        Some(value) => value.check_bounds(field, bounds),
                        None => Ok(()),
                    }
                }
            }
        )*
    };
}

bounded!(f64, i64);

/// Element type accepted inside a list parameter.
pub trait ListItem: Sized {
    fn from_item(name: &str, item: &Value) -> Result<Self, CalcError>;
}

impl ListItem for f64 {
    fn from_item(name: &str, item: &Value) -> Result<Self, CalcError> {
        item.as_f64()
            .ok_or_else(|| invalid_type(name, "a list of numbers"))
    }
}

impl ListItem for String {
    fn from_item(name: &str, item: &Value) -> Result<Self, CalcError> {
        item.as_str()
            .map(str::to_string)
            .ok_or_else(|| invalid_type(name, "a list of strings"))
    }
}

impl<T: ListItem> FromParam for Vec<T> {
    fn from_param(params: &Params<'_>, name: &str) -> Result<Self, CalcError> {
        params
            .list(name)?
            .iter()
            .map(|item| T::from_item(name, item))
            .collect()
    }
}

/// List member lookup for [`Choice`] vocabularies.
pub fn choice_item<T: Choice>(name: &str, item: &Value) -> Result<T, CalcError> {
    item.as_str()
        .and_then(T::from_token)
        .ok_or_else(|| CalcError::InvalidChoice {
            field: name.to_string(),
            value: match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            },
            allowed: T::TOKENS.join(", "),
        })
}

/// Declare a closed vocabulary enum whose variants map one-to-one onto wire
/// tokens.
///
/// ```ignore
/// choice! {
///     /// Blood pressure at presentation.
///     pub enum BloodPressure {
///         Normal => "normal",
///         Elevated => "elevated",
///     }
/// }
/// ```
#[macro_export]
macro_rules! choice {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $token)] $variant ),+
        }

        impl $crate::params::Choice for $name {
            const TOKENS: &'static [&'static str] = &[$($token),+];

            fn from_token(token: &str) -> ::std::option::Option<Self> {
                match token {
                    $( $token => ::std::option::Option::Some(Self::$variant), )+
                    _ => ::std::option::Option::None,
                }
            }

            fn token(self) -> &'static str {
                match self {
                    $( Self::$variant => $token, )+
                }
            }
        }

        impl $crate::params::FromParam for $name {
            fn from_param(
                params: &$crate::params::Params<'_>,
                name: &str,
            ) -> ::std::result::Result<Self, $crate::error::CalcError> {
                params.choice(name)
            }
        }

        impl $crate::params::ListItem for $name {
            fn from_item(
                name: &str,
                item: &::serde_json::Value,
            ) -> ::std::result::Result<Self, $crate::error::CalcError> {
                $crate::params::choice_item(name, item)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::params::Choice::token(*self))
            }
        }
    };
}

/// Declare a calculator's typed input and its field-by-field extraction
/// from [`Params`], in declaration order.
///
/// A field may carry inclusive bounds after `=>`; they are checked right
/// after the field is read, before any later field is looked at.
///
/// ```ignore
/// calculator_input! {
///     pub struct Fib4Input {
///         pub age: i64 => 18..=120,
///         pub ast: f64 => 1.0..=10000.0,
///         pub note: Option<String>,
///     }
/// }
/// ```
#[macro_export]
macro_rules! calculator_input {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $( $(#[$fmeta:meta])* pub $field:ident : $ty:ty $(=> $bounds:expr)? ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            $( $(#[$fmeta])* pub $field: $ty ),*
        }

        impl $crate::params::FromParams for $name {
            fn from_params(
                params: &$crate::params::Params<'_>,
            ) -> ::std::result::Result<Self, $crate::error::CalcError> {
                $(
                    let $field = <$ty as $crate::params::FromParam>::from_param(params, stringify!($field))?;
                    $( $crate::params::Bounded::check_bounds(&$field, stringify!($field), $bounds)?; )?
                )*
                ::std::result::Result::Ok(Self { $( $field ),* })
            }
        }
    };
}
