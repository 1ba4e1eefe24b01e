use serde::Serialize;
use serde_json::{Map, Value};

/// The primary output of a calculator: a point total, a continuous value or
/// a categorical label.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScoreValue {
    Integer(i64),
    Number(f64),
    Label(String),
}

impl ScoreValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ScoreValue::Integer(i) => Some(*i as f64),
            ScoreValue::Number(n) => Some(*n),
            ScoreValue::Label(_) => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ScoreValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_label(&self) -> Option<&str> {
        match self {
            ScoreValue::Label(s) => Some(s),
            _ => None,
        }
    }
}

impl From<i64> for ScoreValue {
    fn from(v: i64) -> Self {
        ScoreValue::Integer(v)
    }
}

impl From<i32> for ScoreValue {
    fn from(v: i32) -> Self {
        ScoreValue::Integer(v.into())
    }
}

impl From<u32> for ScoreValue {
    fn from(v: u32) -> Self {
        ScoreValue::Integer(v.into())
    }
}

impl From<usize> for ScoreValue {
    fn from(v: usize) -> Self {
        ScoreValue::Integer(v as i64)
    }
}

impl From<f64> for ScoreValue {
    fn from(v: f64) -> Self {
        ScoreValue::Number(v)
    }
}

impl From<&str> for ScoreValue {
    fn from(v: &str) -> Self {
        ScoreValue::Label(v.to_string())
    }
}

impl From<String> for ScoreValue {
    fn from(v: String) -> Self {
        ScoreValue::Label(v)
    }
}

/// Stage selected by an interpretation mapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpretation {
    pub stage: String,
    pub description: String,
    pub text: String,
}

impl Interpretation {
    pub fn new(
        stage: impl Into<String>,
        description: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            stage: stage.into(),
            description: description.into(),
            text: text.into(),
        }
    }
}

/// Uniform payload returned by every calculator.
///
/// Serializes to a flat object: the five contract keys followed by any
/// calculator-specific extras.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculatorResponse {
    pub result: ScoreValue,
    pub unit: String,
    pub interpretation: String,
    pub stage: String,
    pub stage_description: String,
    #[serde(flatten)]
    pub extras: Map<String, Value>,
}

impl CalculatorResponse {
    pub fn new(
        result: impl Into<ScoreValue>,
        unit: impl Into<String>,
        interpretation: Interpretation,
    ) -> Self {
        Self {
            result: result.into(),
            unit: unit.into(),
            interpretation: interpretation.text,
            stage: interpretation.stage,
            stage_description: interpretation.description,
            extras: Map::new(),
        }
    }

    /// Append a calculator-specific key.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.extras.insert(key.to_string(), value.into());
        self
    }

    pub fn extra(&self, key: &str) -> Option<&Value> {
        self.extras.get(key)
    }
}
