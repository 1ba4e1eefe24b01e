//! medcalc-scores
//!
//! Clinical scoring calculators grouped by specialty, one module per score.
//! Every calculator exposes `calculate(&Input) -> CalcResult`; the
//! [`registry`] maps score identifiers to those entry points for dynamic
//! dispatch from a flat JSON parameter object.

pub mod anesthesiology;
pub mod cardiology;
pub mod dermatology;
pub mod emergency;
pub mod endocrinology;
pub mod gastroenterology;
pub mod general;
pub mod geriatrics;
pub mod gynecology;
pub mod hematology;
pub mod infectious_disease;
pub mod nephrology;
pub mod neurology;
pub mod oncology;
pub mod ophthalmology;
pub mod pediatrics;
pub mod psychiatry;
pub mod pulmonology;
pub mod registry;
pub mod rheumatology;

pub use registry::{ScoreInfo, Specialty};
