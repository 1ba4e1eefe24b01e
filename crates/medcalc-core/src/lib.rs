//! medcalc-core
//!
//! The calculator execution contract shared by every score: parameter
//! extraction and validation, the error taxonomy, numeric helpers and the
//! uniform response payload. Pure data, no I/O.

pub mod error;
pub mod math;
pub mod params;
pub mod response;
pub mod vocab;

pub use error::CalcError;
pub use params::{Choice, FromParam, FromParams, Params};
pub use response::{CalculatorResponse, Interpretation, ScoreValue};
pub use vocab::{Sex, YesNo};

/// Result alias used by every calculator entry point.
pub type CalcResult<T = CalculatorResponse> = Result<T, CalcError>;
