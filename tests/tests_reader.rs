//! Reader Tests - WKT2 CRSs and operations
//!
//! Each CRS family read into the object model, checked field by field.

mod helpers;

use helpers::*;
use rstest::rstest;
use wkt_crs::model::{
    AxisDirection, BaseCrs, BaseCrsKind, CsType, DatumEnsemble, DatumOrEnsemble, DerivedCrsKind,
    IdValue, Identifier, OperationStep, ReferenceFrame, TimeValue, UnitKind,
};
use wkt_crs::{Crs, CrsKind, ErrorKind, parse_with_options};

// ============================================================================
// Geodetic and geographic
// ============================================================================

#[test]
fn test_geographic_with_ensemble() {
    let crs = read_strict(WGS84_GEOGRAPHIC);
    let Crs::Geographic(single) = &crs else {
        panic!("expected a geographic CRS, got {:?}", crs.kind());
    };
    assert_eq!(single.name, "WGS 84");

    let DatumOrEnsemble::Ensemble(DatumEnsemble::Geodetic(ensemble)) = &single.datum else {
        panic!("expected a geodetic ensemble");
    };
    assert_eq!(ensemble.members.len(), 2);
    assert_eq!(ensemble.members[1].name, "World Geodetic System 1984 (G730)");
    assert_eq!(ensemble.ellipsoid.semi_major_axis, 6378137.0);
    assert_eq!(ensemble.accuracy, 2.0);
    assert_eq!(
        single.datum.prime_meridian().map(|pm| pm.name.as_str()),
        Some("Greenwich")
    );

    assert_eq!(single.cs.cs_type, CsType::Ellipsoidal);
    assert_eq!(single.cs.axes[0].name, "geodetic latitude");
    assert_eq!(single.cs.axes[0].abbreviation.as_deref(), Some("Lat"));
    assert_eq!(single.cs.axes[1].order, Some(2));
    assert_eq!(single.cs.unit.as_ref().map(|u| u.kind), Some(UnitKind::Angle));

    let usage = &single.meta.usages[0];
    assert_eq!(usage.scope.as_deref(), Some("Horizontal component of 3D system."));
    assert_eq!(usage.extent.bbox.map(|b| b.west), Some(-180.0));
    assert_eq!(single.meta.ids, vec![Identifier::new("EPSG", 4326)]);
}

#[test]
fn test_geodetic_keyword_synonyms() {
    let text = r#"GEODETICCRS["ITRF2014",
        TRF["International Terrestrial Reference Frame 2014",
            SPHEROID["GRS 1980",6378137,298.257222101]],
        CS[Cartesian,3],
            AXIS["(X)",geocentricX],
            AXIS["(Y)",geocentricY],
            AXIS["(Z)",geocentricZ],
            UNIT["metre",1.0]]"#;
    let crs = read_strict(text);
    assert_eq!(crs.kind(), CrsKind::Geodetic);
    let single = crs.as_single().unwrap();
    assert_eq!(single.cs.dimension, 3);
    assert_eq!(single.cs.axes[2].direction, AxisDirection::GeocentricZ);
    // A bare UNIT in a Cartesian system is a length
    assert_eq!(single.cs.unit.as_ref().map(|u| u.kind), Some(UnitKind::Length));
}

#[test]
fn test_dynamic_frame() {
    let text = r#"GEOGCRS["NAD83(CSRS)v6",
        DYNAMIC[FRAMEEPOCH[2010.0],MODEL["NAD83(CSRS)v6 velocity grid"]],
        DATUM["NAD83 Canadian Spatial Reference System v6",
            ELLIPSOID["GRS 1980",6378137,298.257222101,LENGTHUNIT["metre",1.0]],
            ANCHOR["Fixed to North America"]],
        CS[ellipsoidal,2],
            AXIS["latitude",north],
            AXIS["longitude",east],
            ANGLEUNIT["degree",0.0174532925199433]]"#;
    let crs = read_strict(text);
    let single = crs.as_single().unwrap();
    let dynamic = single.dynamic.as_ref().unwrap();
    assert_eq!(dynamic.frame_epoch, 2010.0);
    assert_eq!(
        dynamic.model.as_ref().map(|m| m.name.as_str()),
        Some("NAD83(CSRS)v6 velocity grid")
    );
    let DatumOrEnsemble::Frame(ReferenceFrame::Geodetic(frame)) = &single.datum else {
        panic!("expected a geodetic frame");
    };
    assert_eq!(frame.anchor.as_deref(), Some("Fixed to North America"));
}

#[rstest]
#[case::vertical_frame(
    r#"VERTCRS["h",VDATUM["d",ANCHOR["tide gauge"],ANCHOREPOCH[2002.0]],
        CS[vertical,1],AXIS["up",up],LENGTHUNIT["metre",1]]"#
)]
#[case::geodetic_frame(
    r#"GEOGCRS["g",DATUM["d",ELLIPSOID["GRS 1980",6378137,298.257222101],
        ANCHOR["tide gauge"],ANCHOREPOCH[2002.0]],
        CS[ellipsoidal,2],AXIS["lat",north],AXIS["lon",east],ANGLEUNIT["degree",0.0174532925199433]]"#
)]
fn test_anchor_epoch(#[case] text: &str) {
    let crs = read_strict(text);
    let (anchor, epoch) = match &crs.as_single().unwrap().datum {
        DatumOrEnsemble::Frame(ReferenceFrame::Vertical(frame)) => (&frame.anchor, frame.anchor_epoch),
        DatumOrEnsemble::Frame(ReferenceFrame::Geodetic(frame)) => (&frame.anchor, frame.anchor_epoch),
        other => panic!("unexpected datum {other:?}"),
    };
    assert_eq!(anchor.as_deref(), Some("tide gauge"));
    assert_eq!(epoch, Some(2002.0));
}

#[test]
fn test_vertical_ensemble() {
    let text = r#"VERTCRS["EVRS height",
        ENSEMBLE["European Vertical Reference System ensemble",
            MEMBER["EVRF2000"],
            MEMBER["EVRF2007",ID["EPSG",5215]],
            ENSEMBLEACCURACY[0.3]],
        CS[vertical,1],
            AXIS["gravity-related height (H)",up],
            LENGTHUNIT["metre",1]]"#;
    let crs = read_strict(text);
    assert_eq!(crs.kind(), CrsKind::Vertical);
    let DatumOrEnsemble::Ensemble(DatumEnsemble::Vertical(ensemble)) = &crs.as_single().unwrap().datum
    else {
        panic!("expected a vertical ensemble");
    };
    let members: Vec<_> = ensemble.members.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(members, ["EVRF2000", "EVRF2007"]);
    assert_eq!(ensemble.members[1].ids[0].code, IdValue::Integer(5215));
    assert_eq!(ensemble.accuracy, 0.3);
}

// ============================================================================
// Projected
// ============================================================================

#[test]
fn test_projected() {
    let projected = wkt_crs::parse_projected(UTM_31N, &strict()).unwrap();
    assert_eq!(projected.name, "WGS 84 / UTM zone 31N");
    assert_eq!(projected.base.kind, BaseCrsKind::Geographic);
    assert_eq!(projected.base.unit.as_ref().map(|u| u.kind), Some(UnitKind::Angle));
    assert_eq!(projected.conversion.method.name, "Transverse Mercator");
    assert_eq!(projected.conversion.method.ids[0].code, IdValue::Integer(9807));
    assert_eq!(projected.conversion.parameters.len(), 5);

    let scale = projected
        .conversion
        .parameter("Scale factor at natural origin")
        .unwrap();
    assert_eq!(scale.value, 0.9996);
    assert_eq!(scale.unit.as_ref().map(|u| u.kind), Some(UnitKind::Scale));

    assert_eq!(projected.cs.axes[0].name, "");
    assert_eq!(projected.cs.axes[0].abbreviation.as_deref(), Some("E"));
}

#[test]
fn test_axis_meridian() {
    let text = r#"PROJCRS["WGS 84 / UPS North (E,N)",
        BASEGEOGCRS["WGS 84",DATUM["World Geodetic System 1984",ELLIPSOID["WGS 84",6378137,298.257223563]]],
        CONVERSION["Universal Polar Stereographic North",
            METHOD["Polar Stereographic (variant A)"],
            PARAMETER["Latitude of natural origin",90,ANGLEUNIT["degree",0.0174532925199433]]],
        CS[Cartesian,2],
            AXIS["Easting (E)",south,MERIDIAN[90,ANGLEUNIT["degree",0.0174532925199433]],ORDER[1]],
            AXIS["Northing (N)",south,MERIDIAN[180,ANGLEUNIT["degree",0.0174532925199433]],ORDER[2]],
            LENGTHUNIT["metre",1]]"#;
    let projected = wkt_crs::parse_projected(text, &strict()).unwrap();
    let easting = &projected.cs.axes[0];
    assert_eq!(easting.direction, AxisDirection::South);
    let meridian = easting.meridian.as_ref().unwrap();
    assert_eq!(meridian.longitude, 90.0);
    assert_eq!(meridian.unit.kind, UnitKind::Angle);
    assert_eq!(easting.order, Some(1));
    assert_eq!(projected.cs.axes[1].meridian.as_ref().map(|m| m.longitude), Some(180.0));
}

const POLAR_SITE: &str = r#"ENGCRS["Polar site",EDATUM["site"],
    CS[polar,2],
        AXIS["distance (r)",awayFrom,LENGTHUNIT["metre",1]],
        AXIS["bearing (U)",clockwise,BEARING[234],ANGLEUNIT["degree",0.0174532925199433]]]"#;

#[test]
fn test_axis_bearing() {
    let crs = read_strict(POLAR_SITE);
    let axis = &crs.as_single().unwrap().cs.axes[1];
    assert_eq!(axis.direction, AxisDirection::Clockwise);
    assert_eq!(axis.bearing, Some(234.0));
    assert_eq!(axis.unit.as_ref().map(|u| u.kind), Some(UnitKind::Angle));
}

#[rstest]
#[case::strict(strict())]
#[case::lenient(lenient())]
fn test_axis_bearing_required(#[case] options: wkt_crs::ParseOptions) {
    let text = POLAR_SITE.replace(",BEARING[234]", "");
    assert_eq!(read_err(&text, &options).kind, ErrorKind::MissingKeyword);
}

#[rstest]
#[case("temporalCount")]
#[case("temporalMeasure")]
fn test_temporal_cs_reads_one_axis(#[case] cs_type: &str) {
    let text = format!(
        r#"TIMECRS["t",TDATUM["origin"],CS[{cs_type},1],
        AXIS["time",future],AXIS["extra",future],TIMEUNIT["day",86400]]"#
    );
    assert_eq!(read_err(&text, &strict()).kind, ErrorKind::UnexpectedToken);

    let parse = parse_with_options(&text, &lenient()).unwrap();
    let cs = &parse.crs.as_single().unwrap().cs;
    assert_eq!(cs.axes.len(), 1);
    assert_eq!(cs.axes[0].name, "time");
    assert_eq!(cs.unit.as_ref().map(|u| u.name.as_str()), Some("day"));
    assert_eq!(parse.diagnostics[0].kind, ErrorKind::UnexpectedToken);
}

// ============================================================================
// Vertical, engineering, parametric, temporal
// ============================================================================

#[test]
fn test_vertical() {
    let vertical = wkt_crs::parse_vertical(NAVD88, &strict()).unwrap();
    assert_eq!(vertical.datum.name(), "North American Vertical Datum 1988");
    assert_eq!(vertical.cs.axes[0].direction, AxisDirection::Up);
    assert_eq!(vertical.cs.axes[0].abbreviation.as_deref(), Some("H"));
}

#[test]
fn test_engineering_bare_extent_becomes_usage() {
    let engineering = wkt_crs::parse_engineering(SITE_GRID, &strict()).unwrap();
    let DatumOrEnsemble::Frame(ReferenceFrame::Engineering(datum)) = &engineering.datum else {
        panic!("expected an engineering datum");
    };
    assert_eq!(datum.anchor.as_deref(), Some("Peg in south corner"));
    assert_eq!(engineering.cs.axes[0].direction, AxisDirection::SouthWest);

    assert_eq!(engineering.meta.usages.len(), 1);
    let temporal = engineering.meta.usages[0].extent.temporal.as_ref().unwrap();
    assert_eq!(temporal.start, TimeValue::Quoted("date/time t1".to_string()));
}

#[test]
fn test_parametric() {
    let crs = read_strict(PRESSURE_LAYER);
    assert_eq!(crs.kind(), CrsKind::Parametric);
    let single = crs.as_single().unwrap();
    assert_eq!(single.cs.cs_type, CsType::Parametric);
    let unit = single.cs.unit.as_ref().unwrap();
    assert_eq!((unit.kind, unit.factor), (UnitKind::Parametric, Some(100.0)));
}

#[test]
fn test_temporal_origin_is_bare() {
    let crs = read_strict(GPS_TIME);
    assert_eq!(crs.kind(), CrsKind::Temporal);
    let single = crs.as_single().unwrap();
    let DatumOrEnsemble::Frame(ReferenceFrame::Temporal(datum)) = &single.datum else {
        panic!("expected a temporal datum");
    };
    assert_eq!(
        datum.origin,
        Some(TimeValue::Bare("1980-01-06T00:00:00.0Z".to_string()))
    );
    assert_eq!(single.cs.cs_type, CsType::TemporalCount);
    assert_eq!(single.cs.unit.as_ref().map(|u| u.kind), Some(UnitKind::Time));
}

// ============================================================================
// Derived, compound, bound, coordinate metadata
// ============================================================================

#[test]
fn test_derived_geographic() {
    let crs = read_strict(ATLANTIC_POLE);
    let Crs::Derived(derived) = &crs else {
        panic!("expected a derived CRS, got {:?}", crs.kind());
    };
    assert_eq!(derived.kind, DerivedCrsKind::Geographic);
    let BaseCrs::Datum(base) = &derived.base else {
        panic!("expected a datum-based base CRS");
    };
    assert_eq!(base.kind, BaseCrsKind::Geographic);
    assert_eq!(base.name, "WGS 84");
    assert_eq!(derived.conversion.name, "Atlantic pole");
    assert_eq!(
        derived.conversion.parameter("Longitude of rotated pole").map(|p| p.value),
        Some(-30.0)
    );
    assert_eq!(derived.meta.remark.as_deref(), Some("Rotated pole grid"));
}

#[rstest]
#[case::vertical(
    r#"VERTCRS["Derived height",
        BASEVERTCRS["NAVD88 height",VDATUM["North American Vertical Datum 1988"]],
        DERIVINGCONVERSION["Offset",METHOD["Vertical Offset"],
            PARAMETER["Vertical Offset",10,LENGTHUNIT["metre",1]]],
        CS[vertical,1],AXIS["height (h)",up],LENGTHUNIT["metre",1]]"#,
    DerivedCrsKind::Vertical,
    BaseCrsKind::Vertical
)]
#[case::engineering(
    r#"ENGCRS["Shifted site",
        BASEENGCRS["Site",EDATUM["P1"]],
        DERIVINGCONVERSION["Shift",METHOD["Affine"],PARAMETER["A0",5,LENGTHUNIT["metre",1]]],
        CS[Cartesian,2],AXIS["x",east],AXIS["y",north],LENGTHUNIT["metre",1]]"#,
    DerivedCrsKind::Engineering,
    BaseCrsKind::Engineering
)]
#[case::engineering_on_geodetic(
    r#"ENGCRS["Topocentric",
        BASEGEODCRS["WGS 84",DATUM["World Geodetic System 1984",ELLIPSOID["WGS 84",6378137,298.257223563]]],
        DERIVINGCONVERSION["Topocentric origin",METHOD["Geocentric/topocentric conversions"],
            PARAMETER["Geocentric X of topocentric origin",3771793.97,LENGTHUNIT["metre",1]]],
        CS[Cartesian,3],AXIS["x",east],AXIS["y",north],AXIS["z",up],LENGTHUNIT["metre",1]]"#,
    DerivedCrsKind::Engineering,
    BaseCrsKind::Geodetic
)]
#[case::parametric(
    r#"PARAMETRICCRS["Shifted pressure",
        BASEPARAMCRS["WMO standard atmosphere",PDATUM["Mean Sea Level"]],
        DERIVINGCONVERSION["Pressure offset",METHOD["Offset"],PARAMETER["Offset",5,SCALEUNIT["unity",1]]],
        CS[parametric,1],AXIS["pressure (hPa)",up],PARAMETRICUNIT["HectoPascal",100]]"#,
    DerivedCrsKind::Parametric,
    BaseCrsKind::Parametric
)]
#[case::temporal(
    r#"TIMECRS["GPS milliseconds",
        BASETIMECRS["GPS Time",TDATUM["Time origin",TIMEORIGIN[1980-01-06T00:00:00.0Z]],TIMEUNIT["day",86400]],
        DERIVINGCONVERSION["Scale",METHOD["Time scale"],PARAMETER["Factor",86400000,SCALEUNIT["unity",1]]],
        CS[temporalCount,1],AXIS["time",future],TIMEUNIT["millisecond",0.001]]"#,
    DerivedCrsKind::Temporal,
    BaseCrsKind::Temporal
)]
fn test_derived_families(
    #[case] text: &str,
    #[case] kind: DerivedCrsKind,
    #[case] base_kind: BaseCrsKind,
) {
    let crs = read_strict(text);
    let Crs::Derived(derived) = &crs else {
        panic!("expected a derived CRS, got {:?}", crs.kind());
    };
    assert_eq!(derived.kind, kind);
    let BaseCrs::Datum(base) = &derived.base else {
        panic!("expected a datum-based base CRS");
    };
    assert_eq!(base.kind, base_kind);
    assert_eq!(derived.conversion.parameters.len(), 1);
    assert_eq!(read_strict(&wkt_crs::write(&crs)), crs);
}

#[test]
fn test_derived_base_must_match_family() {
    let text = r#"VERTCRS["Derived height",
        BASEENGCRS["Site",EDATUM["P1"]],
        DERIVINGCONVERSION["Offset",METHOD["Vertical Offset"]],
        CS[vertical,1],AXIS["height (h)",up],LENGTHUNIT["metre",1]]"#;
    assert!(parse_with_options(text, &strict()).is_err());
}

#[test]
fn test_derived_projected() {
    let crs = read_strict(DERIVED_UTM);
    let Crs::Derived(derived) = &crs else {
        panic!("expected a derived CRS, got {:?}", crs.kind());
    };
    assert_eq!(derived.kind, DerivedCrsKind::Projected);
    let BaseCrs::Projected(base) = &derived.base else {
        panic!("expected a projected base CRS");
    };
    assert_eq!(base.name, "WGS 84 / UTM zone 31N");
    assert_eq!(base.base.kind, BaseCrsKind::Geographic);
    assert_eq!(base.conversion.method.name, "Transverse Mercator");
    assert_eq!(base.ids, vec![Identifier::new("EPSG", 32631)]);
    assert_eq!(derived.conversion.name, "Site shift");
    assert_eq!(derived.conversion.parameter("B0").map(|p| p.value), Some(-5700000.0));
    assert_eq!(derived.cs.axes[1].abbreviation.as_deref(), Some("y"));
}

#[test]
fn test_compound() {
    let text = format!(r#"COMPOUNDCRS["WGS 84 + NAVD88 height",{WGS84_SIMPLE},{NAVD88}]"#);
    let compound = wkt_crs::parse_compound(&text, &strict()).unwrap();
    let kinds: Vec<_> = compound.components.iter().map(Crs::kind).collect();
    assert_eq!(kinds, [CrsKind::Geographic, CrsKind::Vertical]);
    assert_eq!(compound.components[1], read(NAVD88));
}

#[test]
fn test_bound_keeps_source_and_target() {
    let text = format!(
        r#"BOUNDCRS[SOURCECRS[{NAD27_GEOGRAPHIC}],TARGETCRS[{WGS84_SIMPLE}],
        ABRIDGEDTRANSFORMATION["NAD27 to WGS 84 (1)",
            METHOD["Geocentric translations",ID["EPSG",9603]],
            PARAMETER["X-axis translation",-8],
            PARAMETER["Y-axis translation",160],
            PARAMETER["Z-axis translation",176]]]"#
    );
    let bound = wkt_crs::parse_bound(&text, &strict()).unwrap();
    assert_eq!(*bound.source, read(NAD27_GEOGRAPHIC));
    assert_eq!(*bound.target, read(WGS84_SIMPLE));
    let names: Vec<_> = bound
        .transformation
        .parameters
        .iter()
        .map(|p| p.name())
        .collect();
    assert_eq!(
        names,
        ["X-axis translation", "Y-axis translation", "Z-axis translation"]
    );
    assert!(bound.transformation.parameters[0].as_value().unwrap().unit.is_none());
}

#[test]
fn test_coordinate_metadata() {
    let text = format!("COORDINATEMETADATA[{WGS84_SIMPLE},EPOCH[2016.47]]");
    let Crs::CoordinateMetadata(metadata) = read_strict(&text) else {
        panic!("expected coordinate metadata");
    };
    assert_eq!(metadata.epoch, Some(2016.47));
    assert_eq!(metadata.crs.name(), "WGS 84");
}

// ============================================================================
// Operations
// ============================================================================

#[test]
fn test_coordinate_operation() {
    let text = format!(
        r#"COORDINATEOPERATION["NAD27 to WGS 84",VERSION["1"],
        SOURCECRS[{NAD27_GEOGRAPHIC}],
        TARGETCRS[{WGS84_SIMPLE}],
        METHOD["Geocentric translations"],
        PARAMETER["X-axis translation",-8,LENGTHUNIT["metre",1]],
        PARAMETERFILE["Geoid grid","g2012a.bin"],
        OPERATIONACCURACY[5],
        ID["EPSG",1173]]"#
    );
    let Crs::CoordinateOperation(op) = read_strict(&text) else {
        panic!("expected a coordinate operation");
    };
    assert_eq!(op.version.as_deref(), Some("1"));
    assert_eq!(op.source.name(), "NAD27");
    assert_eq!(op.target.name(), "WGS 84");
    assert_eq!(op.parameters.len(), 2);
    assert_eq!(op.parameters[1].name(), "Geoid grid");
    assert_eq!(op.accuracy, Some(5.0));
    assert_eq!(op.meta.ids[0].code, IdValue::Integer(1173));
}

#[test]
fn test_interpolation_crs() {
    let text = format!(
        r#"COORDINATEOPERATION["NAD27 to WGS 84 with heights",
        SOURCECRS[{NAD27_GEOGRAPHIC}],
        TARGETCRS[{WGS84_SIMPLE}],
        METHOD["Geocentric translations"],
        PARAMETER["X-axis translation",-8,LENGTHUNIT["metre",1]],
        INTERPOLATIONCRS[{NAVD88}],
        OPERATIONACCURACY[5]]"#
    );
    let crs = read_strict(&text);
    let Crs::CoordinateOperation(op) = &crs else {
        panic!("expected a coordinate operation");
    };
    let interpolation = op.interpolation.as_deref().unwrap();
    assert_eq!(*interpolation, read(NAVD88));
    assert_eq!(op.accuracy, Some(5.0));
    assert!(wkt_crs::write(&crs).contains(r#"INTERPOLATIONCRS[VERTCRS["NAVD88 height","#));
}

#[test]
fn test_concatenated_operation() {
    let step = |name: &str| {
        format!(
            r#"STEP[COORDINATEOPERATION["{name}",SOURCECRS[{NAD27_GEOGRAPHIC}],TARGETCRS[{WGS84_SIMPLE}],METHOD["Geocentric translations"]]]"#
        )
    };
    let text = format!(
        r#"CONCATENATEDOPERATION["Chain",SOURCECRS[{NAD27_GEOGRAPHIC}],TARGETCRS[{WGS84_SIMPLE}],{},{},
        STEP[CONVERSION["Identity",METHOD["Identity"]]]]"#,
        step("first"),
        step("second")
    );
    let Crs::ConcatenatedOperation(op) = read_strict(&text) else {
        panic!("expected a concatenated operation");
    };
    assert_eq!(op.steps.len(), 3);
    assert!(matches!(&op.steps[1], OperationStep::Operation(o) if o.name == "second"));
    assert!(matches!(&op.steps[2], OperationStep::Conversion(c) if c.name == "Identity"));
}

#[test]
fn test_point_motion_operation() {
    let text = format!(
        r#"POINTMOTIONOPERATION["Canada velocity grid",
        SOURCECRS[{NAD27_GEOGRAPHIC}],
        METHOD["Point motion by grid (Canada NTv2_Vel)"],
        PARAMETERFILE["Point motion velocity grid file","NAD83v70VG.gvb"],
        OPERATIONACCURACY[0.01]]"#
    );
    let Crs::PointMotionOperation(op) = read_strict(&text) else {
        panic!("expected a point motion operation");
    };
    assert_eq!(op.method.name, "Point motion by grid (Canada NTv2_Vel)");
    assert_eq!(op.accuracy, Some(0.01));
}

// ============================================================================
// Identifiers
// ============================================================================

#[rstest]
#[case(r#"ID["EPSG",5703]"#, IdValue::Integer(5703))]
#[case(r#"ID["EPSG","5703"]"#, IdValue::Text("5703".to_string()))]
#[case(r#"ID["IOGP",5703.5]"#, IdValue::Number(5703.5))]
#[case(r#"AUTHORITY["EPSG","5703"]"#, IdValue::Integer(5703))]
#[case(r#"AUTHORITY["ESRI","ABC1"]"#, IdValue::Text("ABC1".to_string()))]
fn test_identifier_code(#[case] id: &str, #[case] expected: IdValue) {
    let text = format!(
        r#"VERTCRS["h",VDATUM["d"],CS[vertical,1],AXIS["up",up],LENGTHUNIT["metre",1],{id}]"#
    );
    let crs = read_strict(&text);
    assert_eq!(crs.meta().unwrap().ids[0].code, expected);
}

#[test]
fn test_identifier_version_citation_uri() {
    let text = r#"VERTCRS["h",VDATUM["d"],CS[vertical,1],AXIS["up",up],LENGTHUNIT["metre",1],
        ID["EPSG",5703,"8.9",CITATION["IOGP"],URI["urn:ogc:def:crs:EPSG::5703"]]]"#;
    let crs = read_strict(text);
    let id = &crs.meta().unwrap().ids[0];
    assert_eq!(id.version, Some(IdValue::Text("8.9".to_string())));
    assert_eq!(id.citation.as_deref(), Some("IOGP"));
    assert_eq!(id.uri.as_deref(), Some("urn:ogc:def:crs:EPSG::5703"));
}
