// Models for build parameters and the envelope used to start parameterized builds
// -------------------------------------------------------------------------------------------------

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::iter::FromIterator;
use strum_macros::EnumString;

/// The kinds of values Jenkins accepts for a build parameter
#[derive(Clone, Copy, Debug, EnumString, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum ParamType {
    String,
    Int,
    Bool,
}

impl fmt::Display for ParamType {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}", format!("{:?}", self).to_lowercase())
    }
}

/// A typed parameter value.
///
/// Used both for values recorded on a build and for values passed when starting one.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ParameterValue {
    Bool(bool),
    Int(i64),
    String(String),
}

impl ParameterValue {
    pub fn param_type(&self) -> ParamType {
        match self {
            ParameterValue::Bool(_) => ParamType::Bool,
            ParameterValue::Int(_) => ParamType::Int,
            ParameterValue::String(_) => ParamType::String,
        }
    }

    /// Guesses the type of a value given on the command line: `true`/`false` become booleans,
    /// whole numbers become integers and everything else stays a string.
    pub fn infer(input: &str) -> Self {
        if let Ok(flag) = input.parse::<bool>() {
            ParameterValue::Bool(flag)
        } else if let Ok(number) = input.parse::<i64>() {
            ParameterValue::Int(number)
        } else {
            ParameterValue::String(input.to_string())
        }
    }

    fn from_json(value: serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::String(s) => Some(ParameterValue::String(s)),
            serde_json::Value::Bool(b) => Some(ParameterValue::Bool(b)),
            serde_json::Value::Number(n) => n.as_i64().map(ParameterValue::Int),
            _ => None,
        }
    }
}

impl From<&str> for ParameterValue {
    fn from(value: &str) -> Self {
        ParameterValue::String(value.to_string())
    }
}

impl From<String> for ParameterValue {
    fn from(value: String) -> Self {
        ParameterValue::String(value)
    }
}

impl From<i64> for ParameterValue {
    fn from(value: i64) -> Self {
        ParameterValue::Int(value)
    }
}

impl From<i32> for ParameterValue {
    fn from(value: i32) -> Self {
        ParameterValue::Int(value.into())
    }
}

impl From<u32> for ParameterValue {
    fn from(value: u32) -> Self {
        ParameterValue::Int(value.into())
    }
}

impl From<bool> for ParameterValue {
    fn from(value: bool) -> Self {
        ParameterValue::Bool(value)
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParameterValue::Bool(b) => write!(formatter, "{}", b),
            ParameterValue::Int(i) => write!(formatter, "{}", i),
            ParameterValue::String(s) => write!(formatter, "{}", s),
        }
    }
}

/// Model for a single named build parameter.
///
/// `value` is `None` when Jenkins recorded something that is neither a string, a whole number
/// nor a boolean (e.g. `null` for password parameters or an object for file parameters).
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Parameter {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_parameter_value")]
    pub value: Option<ParameterValue>,
}

fn deserialize_parameter_value<'de, D>(deserializer: D) -> Result<Option<ParameterValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(ParameterValue::from_json(value))
}

/// Body that Jenkins expects in the `json` query parameter when starting a build
#[derive(Debug, Default, Serialize)]
pub struct StartParameters {
    pub parameter: Vec<Parameter>,
}

impl StartParameters {
    pub fn is_empty(&self) -> bool {
        self.parameter.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for StartParameters
where
    K: Into<String>,
    V: Into<ParameterValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        StartParameters {
            parameter: iter
                .into_iter()
                .map(|(name, value)| Parameter {
                    name: name.into(),
                    value: Some(value.into()),
                })
                .collect(),
        }
    }
}

// -------------------------------------------------------------------------------------------------
