//! Coordinate reference systems

use super::{
    AbridgedTransformation, ConcatenatedOperation, Conversion, CoordinateOperation,
    CoordinateSystem, DatumOrEnsemble, Dynamic, Identifier, ObjectMeta, PointMotionOperation, Unit,
};

/// A CRS with a datum and a coordinate system of its own.
///
/// Used for geodetic, geographic, vertical, engineering, parametric and
/// temporal CRSs; the [`Crs`] variant says which.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SingleCrs {
    pub name: String,
    /// Only meaningful for geodetic, geographic and vertical CRSs
    pub dynamic: Option<Dynamic>,
    pub datum: DatumOrEnsemble,
    pub cs: CoordinateSystem,
    pub meta: ObjectMeta,
}

/// Keyword family of a base CRS (`BASEGEODCRS`, `BASEGEOGCRS`, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BaseCrsKind {
    Geodetic,
    Geographic,
    Vertical,
    Engineering,
    Parametric,
    Temporal,
}

/// A base CRS reduced to name, datum, optional unit and identifiers
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseDatumCrs {
    pub kind: BaseCrsKind,
    pub name: String,
    pub dynamic: Option<Dynamic>,
    pub datum: DatumOrEnsemble,
    pub unit: Option<Unit>,
    pub ids: Vec<Identifier>,
}

/// `BASEPROJCRS[..]` of a derived projected CRS
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseProjectedCrs {
    pub name: String,
    pub base: BaseDatumCrs,
    pub conversion: Conversion,
    pub ids: Vec<Identifier>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BaseCrs {
    Datum(BaseDatumCrs),
    Projected(Box<BaseProjectedCrs>),
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectedCrs {
    pub name: String,
    pub base: BaseDatumCrs,
    pub conversion: Conversion,
    pub cs: CoordinateSystem,
    pub meta: ObjectMeta,
}

/// Outer keyword of a derived CRS
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DerivedCrsKind {
    Geodetic,
    Geographic,
    Projected,
    Vertical,
    Engineering,
    Parametric,
    Temporal,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedCrs {
    pub kind: DerivedCrsKind,
    pub name: String,
    pub base: BaseCrs,
    pub conversion: Conversion,
    pub cs: CoordinateSystem,
    pub meta: ObjectMeta,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompoundCrs {
    pub name: String,
    pub components: Vec<Crs>,
    pub meta: ObjectMeta,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundCrs {
    pub source: Box<Crs>,
    pub target: Box<Crs>,
    pub transformation: AbridgedTransformation,
    pub meta: ObjectMeta,
}

/// `COORDINATEMETADATA[crs,EPOCH[..]]`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoordinateMetadata {
    pub crs: Box<Crs>,
    pub epoch: Option<f64>,
}

/// Any top-level WKT object this crate reads or writes
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Crs {
    Geodetic(SingleCrs),
    Geographic(SingleCrs),
    Projected(ProjectedCrs),
    Vertical(SingleCrs),
    Engineering(SingleCrs),
    Parametric(SingleCrs),
    Temporal(SingleCrs),
    Derived(DerivedCrs),
    Compound(CompoundCrs),
    Bound(BoundCrs),
    CoordinateMetadata(CoordinateMetadata),
    CoordinateOperation(CoordinateOperation),
    PointMotionOperation(PointMotionOperation),
    ConcatenatedOperation(ConcatenatedOperation),
}

/// Tag of a [`Crs`] variant, used by the typed entry points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CrsKind {
    Geodetic,
    Geographic,
    Projected,
    Vertical,
    Engineering,
    Parametric,
    Temporal,
    Derived,
    Compound,
    Bound,
    CoordinateMetadata,
    CoordinateOperation,
    PointMotionOperation,
    ConcatenatedOperation,
}

impl Crs {
    pub fn kind(&self) -> CrsKind {
        match self {
            Self::Geodetic(_) => CrsKind::Geodetic,
            Self::Geographic(_) => CrsKind::Geographic,
            Self::Projected(_) => CrsKind::Projected,
            Self::Vertical(_) => CrsKind::Vertical,
            Self::Engineering(_) => CrsKind::Engineering,
            Self::Parametric(_) => CrsKind::Parametric,
            Self::Temporal(_) => CrsKind::Temporal,
            Self::Derived(_) => CrsKind::Derived,
            Self::Compound(_) => CrsKind::Compound,
            Self::Bound(_) => CrsKind::Bound,
            Self::CoordinateMetadata(_) => CrsKind::CoordinateMetadata,
            Self::CoordinateOperation(_) => CrsKind::CoordinateOperation,
            Self::PointMotionOperation(_) => CrsKind::PointMotionOperation,
            Self::ConcatenatedOperation(_) => CrsKind::ConcatenatedOperation,
        }
    }

    /// Name of the node; bound CRSs and coordinate metadata report their source/inner CRS
    pub fn name(&self) -> &str {
        match self {
            Self::Geodetic(c)
            | Self::Geographic(c)
            | Self::Vertical(c)
            | Self::Engineering(c)
            | Self::Parametric(c)
            | Self::Temporal(c) => &c.name,
            Self::Projected(c) => &c.name,
            Self::Derived(c) => &c.name,
            Self::Compound(c) => &c.name,
            Self::Bound(c) => c.source.name(),
            Self::CoordinateMetadata(c) => c.crs.name(),
            Self::CoordinateOperation(c) => &c.name,
            Self::PointMotionOperation(c) => &c.name,
            Self::ConcatenatedOperation(c) => &c.name,
        }
    }

    /// Trailing usages/identifiers/remark/extras, where the node has them
    pub fn meta(&self) -> Option<&ObjectMeta> {
        match self {
            Self::Geodetic(c)
            | Self::Geographic(c)
            | Self::Vertical(c)
            | Self::Engineering(c)
            | Self::Parametric(c)
            | Self::Temporal(c) => Some(&c.meta),
            Self::Projected(c) => Some(&c.meta),
            Self::Derived(c) => Some(&c.meta),
            Self::Compound(c) => Some(&c.meta),
            Self::Bound(c) => Some(&c.meta),
            Self::CoordinateMetadata(_) => None,
            Self::CoordinateOperation(c) => Some(&c.meta),
            Self::PointMotionOperation(c) => Some(&c.meta),
            Self::ConcatenatedOperation(c) => Some(&c.meta),
        }
    }

    pub fn as_single(&self) -> Option<&SingleCrs> {
        match self {
            Self::Geodetic(c)
            | Self::Geographic(c)
            | Self::Vertical(c)
            | Self::Engineering(c)
            | Self::Parametric(c)
            | Self::Temporal(c) => Some(c),
            _ => None,
        }
    }
}
