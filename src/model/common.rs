//! Attributes shared by every node: identifiers, units, usages, remarks

use super::Extras;

/// Value of an identifier code or version
///
/// WKT allows either a number or quoted text; which one was read is kept so
/// the writer reproduces it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IdValue {
    Integer(i64),
    Number(f64),
    Text(String),
}

impl From<i64> for IdValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for IdValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// `ID["authority",code,version,CITATION[..],URI[..]]`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identifier {
    pub authority: String,
    pub code: IdValue,
    pub version: Option<IdValue>,
    pub citation: Option<String>,
    pub uri: Option<String>,
}

impl Identifier {
    pub fn new(authority: impl Into<String>, code: impl Into<IdValue>) -> Self {
        Self {
            authority: authority.into(),
            code: code.into(),
            version: None,
            citation: None,
            uri: None,
        }
    }
}

/// Which quantity a unit measures; selects the unit keyword on output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitKind {
    Angle,
    Length,
    Scale,
    Parametric,
    Time,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit {
    pub kind: UnitKind,
    pub name: String,
    /// Conversion factor to the SI base unit; time units may omit it
    pub factor: Option<f64>,
    pub ids: Vec<Identifier>,
}

impl Unit {
    pub fn new(kind: UnitKind, name: impl Into<String>, factor: f64) -> Self {
        Self {
            kind,
            name: name.into(),
            factor: Some(factor),
            ids: Vec::new(),
        }
    }

    pub fn metre() -> Self {
        Self::new(UnitKind::Length, "metre", 1.0)
    }

    pub fn degree() -> Self {
        Self::new(UnitKind::Angle, "degree", 0.0174532925199433)
    }

    pub fn arc_second() -> Self {
        Self::new(UnitKind::Angle, "arc-second", 4.84813681109536e-6)
    }

    pub fn parts_per_million() -> Self {
        Self::new(UnitKind::Scale, "parts per million", 1e-6)
    }
}

/// A date/time literal: either a bare token (`2017-01-01`) or quoted text
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeValue {
    Bare(String),
    Quoted(String),
}

impl TimeValue {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Bare(s) | Self::Quoted(s) => s,
        }
    }
}

/// `BBOX[south,west,north,east]`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerticalExtent {
    pub minimum: f64,
    pub maximum: f64,
    pub unit: Option<Unit>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemporalExtent {
    pub start: TimeValue,
    pub end: TimeValue,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extent {
    pub area: Option<String>,
    pub bbox: Option<BoundingBox>,
    pub vertical: Option<VerticalExtent>,
    pub temporal: Option<TemporalExtent>,
}

impl Extent {
    pub fn is_empty(&self) -> bool {
        self.area.is_none() && self.bbox.is_none() && self.vertical.is_none() && self.temporal.is_none()
    }
}

/// `USAGE[SCOPE[..],extent]`
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Usage {
    pub scope: Option<String>,
    pub extent: Extent,
}

/// The trailing attributes of every CRS and operation:
/// usages, identifiers, remark, and the legacy extras bag.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectMeta {
    pub usages: Vec<Usage>,
    pub ids: Vec<Identifier>,
    pub remark: Option<String>,
    pub extras: Extras,
}

impl ObjectMeta {
    pub fn with_ids(ids: Vec<Identifier>) -> Self {
        Self {
            ids,
            ..Self::default()
        }
    }
}
