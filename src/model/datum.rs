//! Reference frames, datum ensembles and their components

use super::{Identifier, TimeValue, Unit};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ellipsoid {
    pub name: String,
    pub semi_major_axis: f64,
    pub inverse_flattening: f64,
    pub unit: Option<Unit>,
    pub ids: Vec<Identifier>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrimeMeridian {
    pub name: String,
    pub longitude: f64,
    pub unit: Option<Unit>,
    pub ids: Vec<Identifier>,
}

/// `MODEL["name"]` inside `DYNAMIC`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeformationModel {
    pub name: String,
    pub ids: Vec<Identifier>,
}

/// `DYNAMIC[FRAMEEPOCH[..],MODEL[..]]`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dynamic {
    pub frame_epoch: f64,
    pub model: Option<DeformationModel>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeodeticReferenceFrame {
    pub name: String,
    pub ellipsoid: Ellipsoid,
    pub anchor: Option<String>,
    pub anchor_epoch: Option<f64>,
    pub ids: Vec<Identifier>,
    /// Written as a sibling `PRIMEM` after the closing `]` of the datum
    pub prime_meridian: Option<PrimeMeridian>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerticalReferenceFrame {
    pub name: String,
    pub anchor: Option<String>,
    pub anchor_epoch: Option<f64>,
    pub ids: Vec<Identifier>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineeringDatum {
    pub name: String,
    pub anchor: Option<String>,
    pub ids: Vec<Identifier>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParametricDatum {
    pub name: String,
    pub anchor: Option<String>,
    pub ids: Vec<Identifier>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemporalDatum {
    pub name: String,
    pub calendar: Option<String>,
    pub origin: Option<TimeValue>,
    pub ids: Vec<Identifier>,
}

/// The concrete frame is picked by the keyword that introduced it
/// (`DATUM`, `VDATUM`, `EDATUM`, `PDATUM`, `TDATUM` and their synonyms).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReferenceFrame {
    Geodetic(GeodeticReferenceFrame),
    Vertical(VerticalReferenceFrame),
    Engineering(EngineeringDatum),
    Parametric(ParametricDatum),
    Temporal(TemporalDatum),
}

impl ReferenceFrame {
    pub fn name(&self) -> &str {
        match self {
            Self::Geodetic(d) => &d.name,
            Self::Vertical(d) => &d.name,
            Self::Engineering(d) => &d.name,
            Self::Parametric(d) => &d.name,
            Self::Temporal(d) => &d.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnsembleMember {
    pub name: String,
    pub ids: Vec<Identifier>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeodeticEnsemble {
    pub name: String,
    pub members: Vec<EnsembleMember>,
    pub ellipsoid: Ellipsoid,
    pub accuracy: f64,
    pub ids: Vec<Identifier>,
    pub prime_meridian: Option<PrimeMeridian>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerticalEnsemble {
    pub name: String,
    pub members: Vec<EnsembleMember>,
    pub accuracy: f64,
    pub ids: Vec<Identifier>,
}

/// The flavour is inferred from content: a nested `ELLIPSOID` makes it geodetic.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DatumEnsemble {
    Geodetic(GeodeticEnsemble),
    Vertical(VerticalEnsemble),
}

impl DatumEnsemble {
    pub fn members(&self) -> &[EnsembleMember] {
        match self {
            Self::Geodetic(e) => &e.members,
            Self::Vertical(e) => &e.members,
        }
    }
}

/// A CRS anchors to exactly one of these
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DatumOrEnsemble {
    Frame(ReferenceFrame),
    Ensemble(DatumEnsemble),
}

impl DatumOrEnsemble {
    pub fn name(&self) -> &str {
        match self {
            Self::Frame(frame) => frame.name(),
            Self::Ensemble(DatumEnsemble::Geodetic(e)) => &e.name,
            Self::Ensemble(DatumEnsemble::Vertical(e)) => &e.name,
        }
    }

    /// The prime meridian following a geodetic frame or ensemble
    pub fn prime_meridian(&self) -> Option<&PrimeMeridian> {
        match self {
            Self::Frame(ReferenceFrame::Geodetic(d)) => d.prime_meridian.as_ref(),
            Self::Ensemble(DatumEnsemble::Geodetic(e)) => e.prime_meridian.as_ref(),
            _ => None,
        }
    }
}
