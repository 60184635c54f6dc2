//! Derived CRSs and the base CRSs nested in them

use super::*;

/// Base keywords accepted inside each derived CRS keyword
fn base_keywords(outer: Keyword) -> &'static [Keyword] {
    match outer {
        Keyword::GeodCrs | Keyword::GeogCrs => &[Keyword::BaseGeodCrs, Keyword::BaseGeogCrs],
        Keyword::VertCrs => &[Keyword::BaseVertCrs],
        Keyword::EngCrs => &[
            Keyword::BaseEngCrs,
            Keyword::BaseGeodCrs,
            Keyword::BaseGeogCrs,
            Keyword::BaseProjCrs,
        ],
        Keyword::ParametricCrs => &[Keyword::BaseParamCrs],
        Keyword::TimeCrs => &[Keyword::BaseTimeCrs],
        Keyword::DerivedProjCrs => &[Keyword::BaseProjCrs],
        _ => BASE_CRS_KEYWORDS,
    }
}

fn derived_kind(outer: Keyword) -> DerivedCrsKind {
    match outer {
        Keyword::GeodCrs => DerivedCrsKind::Geodetic,
        Keyword::GeogCrs => DerivedCrsKind::Geographic,
        Keyword::VertCrs => DerivedCrsKind::Vertical,
        Keyword::ParametricCrs => DerivedCrsKind::Parametric,
        Keyword::TimeCrs => DerivedCrsKind::Temporal,
        Keyword::DerivedProjCrs => DerivedCrsKind::Projected,
        _ => DerivedCrsKind::Engineering,
    }
}

/// Kind, datum keywords, dynamic permission and unit priority of a base CRS keyword
fn base_family(keyword: Keyword) -> (BaseCrsKind, &'static [Keyword], bool, &'static [Keyword]) {
    match keyword {
        Keyword::BaseGeodCrs => (BaseCrsKind::Geodetic, GEODETIC_DATUMS, true, ANGLE_FIRST),
        Keyword::BaseGeogCrs => (BaseCrsKind::Geographic, GEODETIC_DATUMS, true, ANGLE_FIRST),
        Keyword::BaseVertCrs => (BaseCrsKind::Vertical, VERTICAL_DATUMS, true, LENGTH_FIRST),
        Keyword::BaseEngCrs => (BaseCrsKind::Engineering, ENGINEERING_DATUMS, false, LENGTH_FIRST),
        Keyword::BaseParamCrs => (BaseCrsKind::Parametric, PARAMETRIC_DATUMS, false, PARAMETRIC_FIRST),
        _ => (BaseCrsKind::Temporal, TEMPORAL_DATUMS, false, TIME_ONLY),
    }
}

/// `BASEGEOGCRS["name",{DYNAMIC,}datum{,PRIMEM}{,unit}{,ID}*]` and the other
/// datum-based base CRSs
pub fn parse_base_datum_crs<P: WktParser>(p: &mut P, keyword: Keyword) -> Result<BaseDatumCrs> {
    let (kind, datums, dynamic_allowed, units) = base_family(keyword);
    p.open_element()?;
    let name = p.read_quoted()?;
    let dynamic = if dynamic_allowed {
        parse_optional_dynamic(p)?
    } else {
        None
    };
    let datum = parse_datum_of(p, datums)?;
    let unit = parse_optional_unit(p, units)?;
    let ids = parse_ids(p)?;
    p.close_element()?;
    Ok(BaseDatumCrs {
        kind,
        name,
        dynamic,
        datum,
        unit,
        ids,
    })
}

/// `BASEPROJCRS["name",BASEGEOGCRS[..],CONVERSION[..]{,ID}*]`
fn parse_base_projected<P: WktParser>(p: &mut P) -> Result<BaseProjectedCrs> {
    p.open_element()?;
    let name = p.read_quoted()?;
    let keyword = p.expect_keyword(&[Keyword::BaseGeogCrs, Keyword::BaseGeodCrs])?;
    let base = parse_base_datum_crs(p, keyword)?;
    p.expect_keyword(&[Keyword::Conversion])?;
    let conversion = parse_conversion(p)?;
    let ids = parse_ids(p)?;
    p.close_element()?;
    Ok(BaseProjectedCrs {
        name,
        base,
        conversion,
        ids,
    })
}

/// The rest of a derived CRS once its name has been read:
/// `BASE..CRS[..],DERIVINGCONVERSION[..],CS..,tail]`
pub fn parse_derived<P: WktParser>(p: &mut P, outer: Keyword, name: String) -> Result<DerivedCrs> {
    let keyword = p.expect_keyword(base_keywords(outer))?;
    let base = match keyword {
        Keyword::BaseProjCrs => BaseCrs::Projected(Box::new(parse_base_projected(p)?)),
        _ => BaseCrs::Datum(parse_base_datum_crs(p, keyword)?),
    };
    p.expect_keyword(&[Keyword::DerivingConversion])?;
    let conversion = parse_conversion(p)?;
    let cs = parse_coordinate_system(p)?;
    let meta = parse_object_tail(p)?;
    p.close_element()?;
    Ok(DerivedCrs {
        kind: derived_kind(outer),
        name,
        base,
        conversion,
        cs,
        meta,
    })
}

/// `DERIVEDPROJCRS["name",BASEPROJCRS[..],DERIVINGCONVERSION[..],CS..,tail]`
pub fn parse_derived_projected<P: WktParser>(p: &mut P) -> Result<DerivedCrs> {
    p.open_element()?;
    let name = p.read_quoted()?;
    parse_derived(p, Keyword::DerivedProjCrs, name)
}
