//! Conversions, transformations and operations between CRSs

use super::{Crs, Identifier, ObjectMeta, Unit};

/// `METHOD["name"]` (`PROJECTION` in legacy text)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Method {
    pub name: String,
    pub ids: Vec<Identifier>,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ids: Vec::new(),
        }
    }
}

/// `PARAMETER["name",value,unit]`
///
/// Abridged transformations omit the unit; it is implied by the method.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameter {
    pub name: String,
    pub value: f64,
    pub unit: Option<Unit>,
    pub ids: Vec<Identifier>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: f64, unit: Option<Unit>) -> Self {
        Self {
            name: name.into(),
            value,
            unit,
            ids: Vec::new(),
        }
    }
}

/// `PARAMETERFILE["name","file"]`; the file is never opened.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterFile {
    pub name: String,
    pub file_name: String,
    pub ids: Vec<Identifier>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParameterValue {
    Value(Parameter),
    File(ParameterFile),
}

impl ParameterValue {
    pub fn name(&self) -> &str {
        match self {
            Self::Value(p) => &p.name,
            Self::File(p) => &p.name,
        }
    }

    pub fn as_value(&self) -> Option<&Parameter> {
        match self {
            Self::Value(p) => Some(p),
            Self::File(_) => None,
        }
    }
}

/// `CONVERSION[..]` and `DERIVINGCONVERSION[..]`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Conversion {
    pub name: String,
    pub method: Method,
    pub parameters: Vec<ParameterValue>,
    pub ids: Vec<Identifier>,
}

impl Conversion {
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters
            .iter()
            .filter_map(ParameterValue::as_value)
            .find(|p| p.name == name)
    }
}

/// `ABRIDGEDTRANSFORMATION[..]` inside a bound CRS
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbridgedTransformation {
    pub name: String,
    pub version: Option<String>,
    pub method: Method,
    pub parameters: Vec<ParameterValue>,
    pub ids: Vec<Identifier>,
    pub remark: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoordinateOperation {
    pub name: String,
    pub version: Option<String>,
    pub source: Box<Crs>,
    pub target: Box<Crs>,
    pub method: Method,
    pub parameters: Vec<ParameterValue>,
    pub interpolation: Option<Box<Crs>>,
    pub accuracy: Option<f64>,
    pub meta: ObjectMeta,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointMotionOperation {
    pub name: String,
    pub version: Option<String>,
    pub source: Box<Crs>,
    pub method: Method,
    pub parameters: Vec<ParameterValue>,
    pub accuracy: Option<f64>,
    pub meta: ObjectMeta,
}

/// One `STEP[..]` of a concatenated operation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OperationStep {
    Operation(CoordinateOperation),
    PointMotion(PointMotionOperation),
    Conversion(Conversion),
    DerivingConversion(Conversion),
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConcatenatedOperation {
    pub name: String,
    pub version: Option<String>,
    pub source: Box<Crs>,
    pub target: Box<Crs>,
    pub steps: Vec<OperationStep>,
    pub accuracy: Option<f64>,
    pub meta: ObjectMeta,
}
