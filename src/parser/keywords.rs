//! Keyword table
//!
//! Every keyword has a canonical spelling, written by the writer, and zero or
//! more synonyms accepted by the reader (WKT2 long forms and WKT1 names).
//! A spelling may belong to several keywords: the generic `UNIT` is shared by
//! the five unit keywords. Such ambiguity is resolved by the caller, which
//! knows which keywords are acceptable at its position and in which order of
//! preference.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;
use text_size::TextRange;

use super::errors::{ErrorKind, Result, SyntaxError};

macro_rules! keywords {
    ($($variant:ident => $canonical:literal $(| $synonym:literal)*),+ $(,)?) => {
        /// Abstract WKT keyword, independent of how it was spelled
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Keyword {
            $($variant),+
        }

        impl Keyword {
            pub const ALL: &'static [Keyword] = &[$(Keyword::$variant),+];

            /// Spelling emitted by the writer
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $canonical),+
                }
            }

            /// Other accepted spellings
            pub fn synonyms(&self) -> &'static [&'static str] {
                match self {
                    $(Self::$variant => &[$($synonym),*]),+
                }
            }
        }
    };
}

keywords! {
    // Top-level CRSs
    GeodCrs => "GEODCRS" | "GEODETICCRS",
    GeogCrs => "GEOGCRS" | "GEOGRAPHICCRS",
    ProjCrs => "PROJCRS" | "PROJECTEDCRS",
    VertCrs => "VERTCRS" | "VERTICALCRS",
    EngCrs => "ENGCRS" | "ENGINEERINGCRS",
    ParametricCrs => "PARAMETRICCRS",
    TimeCrs => "TIMECRS",
    DerivedProjCrs => "DERIVEDPROJCRS",
    CompoundCrs => "COMPOUNDCRS" | "COMPD CS",
    BoundCrs => "BOUNDCRS",
    CoordinateMetadata => "COORDINATEMETADATA",
    CoordinateOperation => "COORDINATEOPERATION",
    PointMotionOperation => "POINTMOTIONOPERATION",
    ConcatenatedOperation => "CONCATENATEDOPERATION",

    // Legacy CRSs
    GeogCs => "GEOGCS",
    GeocCs => "GEOCCS",
    ProjCs => "PROJCS",
    VertCs => "VERT_CS" | "VERTCS",
    LocalCs => "LOCAL_CS",

    // Operations
    SourceCrs => "SOURCECRS",
    TargetCrs => "TARGETCRS",
    InterpolationCrs => "INTERPOLATIONCRS",
    AbridgedTransformation => "ABRIDGEDTRANSFORMATION",
    Step => "STEP",
    OperationAccuracy => "OPERATIONACCURACY",
    Version => "VERSION",

    // Base CRSs
    BaseGeodCrs => "BASEGEODCRS",
    BaseGeogCrs => "BASEGEOGCRS",
    BaseProjCrs => "BASEPROJCRS",
    BaseVertCrs => "BASEVERTCRS",
    BaseEngCrs => "BASEENGCRS",
    BaseParamCrs => "BASEPARAMCRS",
    BaseTimeCrs => "BASETIMECRS",

    // Conversions
    DerivingConversion => "DERIVINGCONVERSION",
    Conversion => "CONVERSION",
    Method => "METHOD" | "PROJECTION",
    Parameter => "PARAMETER",
    ParameterFile => "PARAMETERFILE",

    // Datums
    Datum => "DATUM" | "TRF" | "GEODETICDATUM",
    VDatum => "VDATUM" | "VRF" | "VERTICALDATUM" | "VERT DATUM",
    EDatum => "EDATUM" | "ENGINEERINGDATUM" | "LOCAL DATUM",
    PDatum => "PDATUM" | "PARAMETRICDATUM",
    TDatum => "TDATUM" | "TIMEDATUM",
    Ensemble => "ENSEMBLE",
    Member => "MEMBER",
    EnsembleAccuracy => "ENSEMBLEACCURACY",
    Dynamic => "DYNAMIC",
    FrameEpoch => "FRAMEEPOCH",
    Model => "MODEL" | "VELOCITYGRID",
    Anchor => "ANCHOR",
    AnchorEpoch => "ANCHOREPOCH",
    Ellipsoid => "ELLIPSOID" | "SPHEROID",
    PrimeMeridian => "PRIMEM" | "PRIMEMERIDIAN",
    Calendar => "CALENDAR",
    TimeOrigin => "TIMEORIGIN",

    // Coordinate systems
    Cs => "CS",
    Axis => "AXIS",
    Order => "ORDER",
    Meridian => "MERIDIAN",
    Bearing => "BEARING",
    AxisMinValue => "AXISMINVALUE",
    AxisMaxValue => "AXISMAXVALUE",
    RangeMeaning => "RANGEMEANING",

    // Units
    AngleUnit => "ANGLEUNIT" | "UNIT",
    LengthUnit => "LENGTHUNIT" | "UNIT",
    ScaleUnit => "SCALEUNIT" | "UNIT",
    ParametricUnit => "PARAMETRICUNIT" | "UNIT",
    TimeUnit => "TIMEUNIT" | "UNIT" | "TEMPORALQUANTITY",

    // Metadata
    Id => "ID",
    Authority => "AUTHORITY",
    Citation => "CITATION",
    Uri => "URI",
    Usage => "USAGE",
    Scope => "SCOPE",
    Area => "AREA",
    BBox => "BBOX",
    VerticalExtent => "VERTICALEXTENT",
    TimeExtent => "TIMEEXTENT",
    Remark => "REMARK",
    Epoch => "EPOCH" | "COORDEPOCH",
    ToWgs84 => "TOWGS84",
    Extension => "EXTENSION",
}

/// Uppercase spelling → keywords, in table order
static INDEX: LazyLock<FxHashMap<String, Vec<Keyword>>> = LazyLock::new(|| {
    let mut index: FxHashMap<String, Vec<Keyword>> = FxHashMap::default();
    for &keyword in Keyword::ALL {
        let spellings = std::iter::once(keyword.as_str()).chain(keyword.synonyms().iter().copied());
        for spelling in spellings {
            let upper = spelling.to_ascii_uppercase();
            let underscored = upper.replace(' ', "_");
            for key in [upper, underscored] {
                let entry = index.entry(key).or_default();
                if !entry.contains(&keyword) {
                    entry.push(keyword);
                }
            }
        }
    }
    index
});

/// All keywords spelled `spelling`, case-insensitively. Empty when unknown.
pub fn resolve(spelling: &str) -> &'static [Keyword] {
    INDEX
        .get(&spelling.to_ascii_uppercase())
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Like [`resolve`] but an unknown spelling is an error located at `range`
pub fn resolve_required(spelling: &str, range: TextRange) -> Result<&'static [Keyword]> {
    let keywords = resolve(spelling);
    if keywords.is_empty() {
        return Err(SyntaxError::new(
            ErrorKind::UnknownKeywordSpelling,
            format!("unknown keyword '{spelling}'"),
            range,
        ));
    }
    Ok(keywords)
}

/// The first of `candidates` that `spelling` can stand for.
///
/// `candidates` is in order of preference, so `UNIT` inside an ellipsoidal
/// coordinate system resolves to [`Keyword::AngleUnit`] when that comes first.
pub fn select(spelling: &str, candidates: &[Keyword]) -> Option<Keyword> {
    let resolved = resolve(spelling);
    candidates.iter().copied().find(|k| resolved.contains(k))
}
