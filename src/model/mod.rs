//! CRS object model
//!
//! Plain owned value graphs produced by the reader and consumed by the
//! writer. Nodes hold no references back into the input text, so a parsed
//! [`Crs`] can move freely across threads.

mod common;
mod crs;
mod cs;
mod datum;
mod extras;
mod operation;

pub use common::{
    BoundingBox, Extent, IdValue, Identifier, ObjectMeta, TemporalExtent, TimeValue, Unit,
    UnitKind, Usage, VerticalExtent,
};
pub use crs::{
    BaseCrs, BaseCrsKind, BaseDatumCrs, BaseProjectedCrs, BoundCrs, CompoundCrs,
    CoordinateMetadata, Crs, CrsKind, DerivedCrs, DerivedCrsKind, ProjectedCrs, SingleCrs,
};
pub use cs::{Axis, AxisDirection, CoordinateSystem, CsType, Meridian, RangeMeaning};
pub use datum::{
    DatumEnsemble, DatumOrEnsemble, DeformationModel, Dynamic, Ellipsoid, EngineeringDatum,
    EnsembleMember, GeodeticEnsemble, GeodeticReferenceFrame, ParametricDatum, PrimeMeridian,
    ReferenceFrame, TemporalDatum, VerticalEnsemble, VerticalReferenceFrame,
};
pub use extras::{Extras, decode_extras, encode_extras};
pub use operation::{
    AbridgedTransformation, ConcatenatedOperation, Conversion, CoordinateOperation, Method,
    OperationStep, Parameter, ParameterFile, ParameterValue, PointMotionOperation,
};
