//! Shared WKT fixtures and assertions for integration tests
#![allow(dead_code)]

use wkt_crs::{Crs, ParseOptions, SyntaxError, parse_with_options};

pub const WGS84_GEOGRAPHIC: &str = r#"GEOGCRS["WGS 84",
    ENSEMBLE["World Geodetic System 1984 ensemble",
        MEMBER["World Geodetic System 1984 (Transit)"],
        MEMBER["World Geodetic System 1984 (G730)"],
        ELLIPSOID["WGS 84",6378137,298.257223563,LENGTHUNIT["metre",1]],
        ENSEMBLEACCURACY[2.0]],
    PRIMEM["Greenwich",0,ANGLEUNIT["degree",0.0174532925199433]],
    CS[ellipsoidal,2],
        AXIS["geodetic latitude (Lat)",north,ORDER[1]],
        AXIS["geodetic longitude (Lon)",east,ORDER[2]],
        ANGLEUNIT["degree",0.0174532925199433],
    USAGE[SCOPE["Horizontal component of 3D system."],AREA["World."],BBOX[-90,-180,90,180]],
    ID["EPSG",4326]]"#;

pub const UTM_31N: &str = r#"PROJCRS["WGS 84 / UTM zone 31N",
    BASEGEOGCRS["WGS 84",
        DATUM["World Geodetic System 1984",
            ELLIPSOID["WGS 84",6378137,298.257223563,LENGTHUNIT["metre",1]]],
        PRIMEM["Greenwich",0,ANGLEUNIT["degree",0.0174532925199433]],
        ANGLEUNIT["degree",0.0174532925199433]],
    CONVERSION["UTM zone 31N",
        METHOD["Transverse Mercator",ID["EPSG",9807]],
        PARAMETER["Latitude of natural origin",0,ANGLEUNIT["degree",0.0174532925199433]],
        PARAMETER["Longitude of natural origin",3,ANGLEUNIT["degree",0.0174532925199433]],
        PARAMETER["Scale factor at natural origin",0.9996,SCALEUNIT["unity",1]],
        PARAMETER["False easting",500000,LENGTHUNIT["metre",1]],
        PARAMETER["False northing",0,LENGTHUNIT["metre",1]]],
    CS[Cartesian,2],
        AXIS["(E)",east,ORDER[1]],
        AXIS["(N)",north,ORDER[2]],
        LENGTHUNIT["metre",1],
    ID["EPSG",32631]]"#;

pub const NAVD88: &str = r#"VERTCRS["NAVD88 height",
    VDATUM["North American Vertical Datum 1988"],
    CS[vertical,1],
        AXIS["gravity-related height (H)",up],
        LENGTHUNIT["metre",1],
    ID["EPSG",5703]]"#;

pub const SITE_GRID: &str = r#"ENGCRS["A construction site CRS",
    EDATUM["P1",ANCHOR["Peg in south corner"]],
    CS[Cartesian,2],
        AXIS["site east",southWest,ORDER[1]],
        AXIS["site north",southEast,ORDER[2]],
        LENGTHUNIT["metre",1.0],
    TIMEEXTENT["date/time t1","date/time t2"]]"#;

pub const PRESSURE_LAYER: &str = r#"PARAMETRICCRS["WMO standard atmosphere layer 0",
    PDATUM["Mean Sea Level",ANCHOR["1013.25 hPa at 15°C"]],
    CS[parametric,1],
        AXIS["pressure (hPa)",up],
        PARAMETRICUNIT["HectoPascal",100.0]]"#;

pub const GPS_TIME: &str = r#"TIMECRS["GPS Time",
    TDATUM["Time origin",TIMEORIGIN[1980-01-06T00:00:00.0Z]],
    CS[temporalCount,1],
        AXIS["time",future],
        TIMEUNIT["day",86400.0]]"#;

pub const ATLANTIC_POLE: &str = r#"GEOGCRS["WMO Atlantic Pole",
    BASEGEOGCRS["WGS 84",
        DATUM["World Geodetic System 1984",
            ELLIPSOID["WGS 84",6378137,298.257223563,LENGTHUNIT["metre",1]]],
        PRIMEM["Greenwich",0,ANGLEUNIT["degree",0.0174532925199433]]],
    DERIVINGCONVERSION["Atlantic pole",
        METHOD["Pole rotation"],
        PARAMETER["Latitude of rotated pole",52,ANGLEUNIT["degree",0.0174532925199433]],
        PARAMETER["Longitude of rotated pole",-30,ANGLEUNIT["degree",0.0174532925199433]]],
    CS[ellipsoidal,2],
        AXIS["latitude",north],
        AXIS["longitude",east],
        ANGLEUNIT["degree",0.0174532925199433],
    REMARK["Rotated pole grid"]]"#;

pub const DERIVED_UTM: &str = r#"DERIVEDPROJCRS["Site grid on UTM 31N",
    BASEPROJCRS["WGS 84 / UTM zone 31N",
        BASEGEOGCRS["WGS 84",
            DATUM["World Geodetic System 1984",
                ELLIPSOID["WGS 84",6378137,298.257223563,LENGTHUNIT["metre",1]]]],
        CONVERSION["UTM zone 31N",
            METHOD["Transverse Mercator",ID["EPSG",9807]],
            PARAMETER["Longitude of natural origin",3,ANGLEUNIT["degree",0.0174532925199433]],
            PARAMETER["Scale factor at natural origin",0.9996,SCALEUNIT["unity",1]]],
        ID["EPSG",32631]],
    DERIVINGCONVERSION["Site shift",
        METHOD["Affine parametric transformation"],
        PARAMETER["A0",-500000,LENGTHUNIT["metre",1]],
        PARAMETER["B0",-5700000,LENGTHUNIT["metre",1]]],
    CS[Cartesian,2],
        AXIS["site x (x)",east,ORDER[1]],
        AXIS["site y (y)",north,ORDER[2]],
        LENGTHUNIT["metre",1]]"#;

pub const NAD27_GEOGRAPHIC: &str = r#"GEOGCRS["NAD27",
    DATUM["North American Datum 1927",
        ELLIPSOID["Clarke 1866",6378206.4,294.978698213898,LENGTHUNIT["metre",1]]],
    CS[ellipsoidal,2],
        AXIS["latitude",north],
        AXIS["longitude",east],
        ANGLEUNIT["degree",0.0174532925199433]]"#;

pub const WGS84_SIMPLE: &str = r#"GEOGCRS["WGS 84",
    DATUM["World Geodetic System 1984",
        ELLIPSOID["WGS 84",6378137,298.257223563,LENGTHUNIT["metre",1]]],
    CS[ellipsoidal,2],
        AXIS["latitude",north],
        AXIS["longitude",east],
        ANGLEUNIT["degree",0.0174532925199433]]"#;

/// Legacy WGS 84 with explicit axes and authority codes
pub const WGS84_GEOGCS: &str = r#"GEOGCS["WGS 84",
    DATUM["WGS_1984",
        SPHEROID["WGS 84",6378137,298.257223563,AUTHORITY["EPSG","7030"]],
        AUTHORITY["EPSG","6326"]],
    PRIMEM["Greenwich",0,AUTHORITY["EPSG","8901"]],
    UNIT["degree",0.0174532925199433,AUTHORITY["EPSG","9122"]],
    AXIS["Latitude",NORTH],
    AXIS["Longitude",EAST],
    AUTHORITY["EPSG","4326"]]"#;

/// The WKT2 spelling of [`WGS84_GEOGCS`]
pub const WGS84_GEOGCRS_EQUIVALENT: &str = r#"GEOGCRS["WGS 84",
    DATUM["WGS_1984",
        ELLIPSOID["WGS 84",6378137,298.257223563,ID["EPSG",7030]],
        ID["EPSG",6326]],
    PRIMEM["Greenwich",0,ID["EPSG",8901]],
    CS[ellipsoidal,2],
        AXIS["Latitude",north],
        AXIS["Longitude",east],
        ANGLEUNIT["degree",0.0174532925199433,ID["EPSG",9122]],
    ID["EPSG",4326]]"#;

pub const TEXAS_PROJCS: &str = r#"PROJCS["NAD27 / Texas South Central",
    GEOGCS["NAD27",
        DATUM["North_American_Datum_1927",
            SPHEROID["Clarke 1866",6378206.4,294.978698213898,AUTHORITY["EPSG","7008"]],
            TOWGS84[-3,142,183,0,0,0,0],
            AUTHORITY["EPSG","6267"]],
        PRIMEM["Greenwich",0],
        UNIT["degree",0.0174532925199433]],
    PROJECTION["Lambert_Conformal_Conic_2SP"],
    PARAMETER["standard_parallel_1",28.38333333333333],
    PARAMETER["standard_parallel_2",30.28333333333334],
    PARAMETER["latitude_of_origin",27.83333333333333],
    PARAMETER["central_meridian",-99],
    PARAMETER["false_easting",4321000],
    PARAMETER["false_northing",0],
    UNIT["US survey foot",0.304800609601219],
    AUTHORITY["EPSG","32140"]]"#;

pub const NGVD29_VERT_CS: &str = r#"VERT_CS["NGVD29",
    VERT_DATUM["National Geodetic Vertical Datum 1929",2005,AUTHORITY["EPSG","5102"]],
    UNIT["US survey foot",0.304800609601219],
    AXIS["Gravity-related height",UP],
    AUTHORITY["EPSG","7968"]]"#;

pub fn lenient() -> ParseOptions {
    ParseOptions::lenient()
}

pub fn strict() -> ParseOptions {
    ParseOptions::strict()
}

/// Parse leniently and fail the test with the error message otherwise
pub fn read(text: &str) -> Crs {
    match wkt_crs::parse(text) {
        Ok(crs) => crs,
        Err(err) => panic!("failed to read:\n{text}\n{err}"),
    }
}

/// Parse strictly and fail the test with the error message otherwise
pub fn read_strict(text: &str) -> Crs {
    match wkt_crs::parse_strict(text) {
        Ok(crs) => crs,
        Err(err) => panic!("failed to read strictly:\n{text}\n{err}"),
    }
}

/// Parse in `options` mode expecting a failure
pub fn read_err(text: &str, options: &ParseOptions) -> SyntaxError {
    match parse_with_options(text, options) {
        Ok(parse) => panic!("expected an error, got {:?}", parse.crs.kind()),
        Err(err) => err,
    }
}
