//! Legacy WKT1 dialect
//!
//! `GEOGCS`, `GEOCCS`, `PROJCS`, `VERT_CS` and `LOCAL_CS` are read into the
//! same model as their WKT2 counterparts. Child elements are accepted in any
//! order. Attributes without a WKT2 slot go to the extras bag.

use super::*;

const GEOGCS_ELEMENTS: &[Keyword] = &[
    Keyword::Datum,
    Keyword::PrimeMeridian,
    Keyword::AngleUnit,
    Keyword::LengthUnit,
    Keyword::ScaleUnit,
    Keyword::Axis,
    Keyword::Extension,
    Keyword::Authority,
    Keyword::Id,
];

const GEOCCS_ELEMENTS: &[Keyword] = &[
    Keyword::Datum,
    Keyword::PrimeMeridian,
    Keyword::LengthUnit,
    Keyword::AngleUnit,
    Keyword::ScaleUnit,
    Keyword::Axis,
    Keyword::Extension,
    Keyword::Authority,
    Keyword::Id,
];

const DATUM_ELEMENTS: &[Keyword] = &[
    Keyword::Ellipsoid,
    Keyword::ToWgs84,
    Keyword::Extension,
    Keyword::Authority,
    Keyword::Id,
];

const PROJCS_ELEMENTS: &[Keyword] = &[
    Keyword::GeogCs,
    Keyword::Method,
    Keyword::Parameter,
    Keyword::LengthUnit,
    Keyword::AngleUnit,
    Keyword::ScaleUnit,
    Keyword::Axis,
    Keyword::Extension,
    Keyword::Authority,
    Keyword::Id,
];

const VERT_CS_ELEMENTS: &[Keyword] = &[
    Keyword::VDatum,
    Keyword::LengthUnit,
    Keyword::AngleUnit,
    Keyword::ScaleUnit,
    Keyword::Axis,
    Keyword::Extension,
    Keyword::Authority,
    Keyword::Id,
];

const LOCAL_CS_ELEMENTS: &[Keyword] = &[
    Keyword::EDatum,
    Keyword::LengthUnit,
    Keyword::AngleUnit,
    Keyword::ScaleUnit,
    Keyword::Axis,
    Keyword::Extension,
    Keyword::Authority,
    Keyword::Id,
];

const LEGACY_DATUM_ELEMENTS: &[Keyword] = &[Keyword::Extension, Keyword::Authority, Keyword::Id];

/// `TOWGS84[dx,dy,dz{,rx,ry,rz,ds}]` as read
struct BursaWolf {
    values: Vec<f64>,
    text: Vec<String>,
}

impl BursaWolf {
    fn value(&self, i: usize) -> f64 {
        self.values.get(i).copied().unwrap_or(0.0)
    }

    fn is_zero(&self) -> bool {
        self.values.iter().all(|v| *v == 0.0)
    }

    /// Translation, rotation and scale parameters; only translations when
    /// the remaining terms are zero.
    fn to_parameters(&self) -> Vec<ParameterValue> {
        let translation = |name: &str, i| Parameter::new(name, self.value(i), Some(Unit::metre()));
        let mut parameters = vec![
            translation("X-axis translation", 0),
            translation("Y-axis translation", 1),
            translation("Z-axis translation", 2),
        ];
        if (3..7).any(|i| self.value(i) != 0.0) {
            let rotation = |name: &str, i| Parameter::new(name, self.value(i), Some(Unit::arc_second()));
            parameters.push(rotation("X-axis rotation", 3));
            parameters.push(rotation("Y-axis rotation", 4));
            parameters.push(rotation("Z-axis rotation", 5));
            parameters.push(Parameter::new(
                "Scale difference",
                self.value(6),
                Some(Unit::parts_per_million()),
            ));
        }
        parameters.into_iter().map(ParameterValue::Value).collect()
    }
}

/// Everything a `GEOGCS` or `GEOCCS` holds before it becomes a CRS or a base CRS
struct LegacyGeographic {
    name: String,
    datum: GeodeticReferenceFrame,
    towgs84: Option<BursaWolf>,
    unit: Option<Unit>,
    axes: Vec<Axis>,
    ids: Vec<Identifier>,
    extras: Extras,
}

// =============================================================================
// Shared pieces
// =============================================================================

/// `EXTENSION["key","value"]`
fn parse_extension<P: WktParser>(p: &mut P, extras: &mut Extras) -> Result<()> {
    p.open_element()?;
    let key = p.read_quoted()?;
    p.read_separator()?;
    let value = p.read_quoted()?;
    p.close_element()?;
    debug!(key = %key, "legacy extension kept in extras");
    extras.insert(key, value);
    Ok(())
}

fn parse_towgs84<P: WktParser>(p: &mut P) -> Result<BursaWolf> {
    p.open_element()?;
    let first = p.read_literal()?;
    let mut values = vec![literal_number(&first)?];
    let mut text = vec![first.text];
    while let Some(literal) = p.optional_value(TokenKind::Number)? {
        values.push(literal_number(&literal)?);
        text.push(literal.text);
    }
    p.close_element()?;
    Ok(BursaWolf { values, text })
}

/// `AXIS` elements were given or the legacy defaults apply
fn axes_or(axes: Vec<Axis>, defaults: &[(&str, AxisDirection)]) -> Vec<Axis> {
    if !axes.is_empty() {
        return axes;
    }
    defaults
        .iter()
        .map(|(name, direction)| Axis::new(*name, *direction))
        .collect()
}

fn missing<P: WktParser>(p: &P, what: &str) -> SyntaxError {
    SyntaxError::at_offset(ErrorKind::MissingKeyword, format!("expected {what}"), p.offset())
}

/// `"datum",type` of `VERT_DATUM` and `LOCAL_DATUM`, returning the name,
/// the type code as written, and the identifiers
fn parse_typed_datum<P: WktParser>(
    p: &mut P,
    extras: &mut Extras,
) -> Result<(String, Option<String>, Vec<Identifier>)> {
    p.open_element()?;
    let name = p.read_quoted()?;
    let datum_type = p.optional_value(TokenKind::Number)?.map(|l| l.text);
    let mut ids = Vec::new();
    while let Some(keyword) = p.next_keyword(LEGACY_DATUM_ELEMENTS)? {
        match keyword {
            Keyword::Extension => parse_extension(p, extras)?,
            _ => ids.push(parse_identifier(p, keyword)?),
        }
    }
    p.close_element()?;
    Ok((name, datum_type, ids))
}

// =============================================================================
// GEOGCS / GEOCCS
// =============================================================================

/// `DATUM["name",SPHEROID[..]{,TOWGS84[..]}{,AUTHORITY}]`
fn parse_legacy_datum<P: WktParser>(
    p: &mut P,
    extras: &mut Extras,
) -> Result<(GeodeticReferenceFrame, Option<BursaWolf>)> {
    p.open_element()?;
    let name = p.read_quoted()?;
    let mut ellipsoid = None;
    let mut towgs84 = None;
    let mut ids = Vec::new();
    while let Some(keyword) = p.next_keyword(DATUM_ELEMENTS)? {
        match keyword {
            Keyword::Ellipsoid => ellipsoid = Some(parse_ellipsoid(p)?),
            Keyword::ToWgs84 => towgs84 = Some(parse_towgs84(p)?),
            Keyword::Extension => parse_extension(p, extras)?,
            _ => ids.push(parse_identifier(p, keyword)?),
        }
    }
    let ellipsoid = ellipsoid.ok_or_else(|| missing(p, "SPHEROID"))?;
    p.close_element()?;
    let frame = GeodeticReferenceFrame {
        name,
        ellipsoid,
        anchor: None,
        anchor_epoch: None,
        ids,
        prime_meridian: None,
    };
    Ok((frame, towgs84))
}

fn parse_geographic_body<P: WktParser>(p: &mut P, keyword: Keyword) -> Result<LegacyGeographic> {
    let (elements, cs_type) = match keyword {
        Keyword::GeocCs => (GEOCCS_ELEMENTS, CsType::Cartesian),
        _ => (GEOGCS_ELEMENTS, CsType::Ellipsoidal),
    };
    p.open_element()?;
    let name = p.read_quoted()?;

    let mut datum = None;
    let mut towgs84 = None;
    let mut prime_meridian = None;
    let mut unit = None;
    let mut axes = Vec::new();
    let mut ids = Vec::new();
    let mut extras = Extras::new();
    while let Some(element) = p.next_keyword(elements)? {
        match element {
            Keyword::Datum => {
                let (frame, vector) = parse_legacy_datum(p, &mut extras)?;
                datum = Some(frame);
                towgs84 = vector;
            }
            Keyword::PrimeMeridian => prime_meridian = Some(parse_prime_meridian(p)?),
            Keyword::Axis => axes.push(parse_axis(p, cs_type, false)?),
            Keyword::Extension => parse_extension(p, &mut extras)?,
            Keyword::Authority | Keyword::Id => ids.push(parse_identifier(p, element)?),
            unit_keyword => unit = Some(parse_unit(p, unit_keyword)?),
        }
    }
    let mut datum = datum.ok_or_else(|| missing(p, "DATUM"))?;
    p.close_element()?;

    datum.prime_meridian = prime_meridian;
    Ok(LegacyGeographic {
        name,
        datum,
        towgs84,
        unit,
        axes,
        ids,
        extras,
    })
}

/// `GEOGCS[..]` as a geographic CRS or `GEOCCS[..]` as a geodetic one
pub fn parse_geographic<P: WktParser>(p: &mut P, keyword: Keyword) -> Result<Crs> {
    let legacy = parse_geographic_body(p, keyword)?;
    let mut extras = legacy.extras;
    if let Some(vector) = legacy.towgs84.filter(|v| !v.is_zero()) {
        debug!("legacy TOWGS84 kept in extras");
        extras.insert("TOWGS84", vector.text.join(","));
    }

    let geocentric = keyword == Keyword::GeocCs;
    let cs = if geocentric {
        let axes = axes_or(
            legacy.axes,
            &[
                ("Geocentric X", AxisDirection::GeocentricX),
                ("Geocentric Y", AxisDirection::GeocentricY),
                ("Geocentric Z", AxisDirection::GeocentricZ),
            ],
        );
        CoordinateSystem::new(CsType::Cartesian, axes, legacy.unit)
    } else {
        let axes = axes_or(
            legacy.axes,
            &[
                ("Longitude", AxisDirection::East),
                ("Latitude", AxisDirection::North),
            ],
        );
        CoordinateSystem::new(CsType::Ellipsoidal, axes, legacy.unit)
    };

    let single = SingleCrs {
        name: legacy.name,
        dynamic: None,
        datum: DatumOrEnsemble::Frame(ReferenceFrame::Geodetic(legacy.datum)),
        cs,
        meta: ObjectMeta {
            ids: legacy.ids,
            extras,
            ..ObjectMeta::default()
        },
    };
    Ok(if geocentric {
        Crs::Geodetic(single)
    } else {
        Crs::Geographic(single)
    })
}

// =============================================================================
// PROJCS
// =============================================================================

/// Name of the conversion: the `PROJCS` name when it already mentions the
/// method, otherwise `"<PROJCS name> / <method>"`.
pub fn conversion_name(projcs: &str, method: &str) -> String {
    let normalize = |s: &str| s.replace('_', " ").to_lowercase();
    if normalize(projcs).contains(&normalize(method)) {
        projcs.to_string()
    } else {
        debug!(projcs, method, "merging legacy projection name");
        format!("{projcs} / {method}")
    }
}

/// `PROJCS["name",GEOGCS[..],PROJECTION[..],PARAMETER*,UNIT,AXIS*,AUTHORITY]`
pub fn parse_projected<P: WktParser>(p: &mut P) -> Result<ProjectedCrs> {
    p.open_element()?;
    let name = p.read_quoted()?;

    let mut geographic = None;
    let mut method = None;
    let mut parameters = Vec::new();
    let mut unit = None;
    let mut axes = Vec::new();
    let mut ids = Vec::new();
    let mut extras = Extras::new();
    while let Some(element) = p.next_keyword(PROJCS_ELEMENTS)? {
        match element {
            Keyword::GeogCs => geographic = Some(parse_geographic_body(p, element)?),
            Keyword::Method => method = Some(parse_method(p)?),
            Keyword::Parameter => parameters.push(ParameterValue::Value(parse_parameter(p, false)?)),
            Keyword::Axis => axes.push(parse_axis(p, CsType::Cartesian, false)?),
            Keyword::Extension => parse_extension(p, &mut extras)?,
            Keyword::Authority | Keyword::Id => ids.push(parse_identifier(p, element)?),
            unit_keyword => unit = Some(parse_unit(p, unit_keyword)?),
        }
    }
    let geographic = geographic.ok_or_else(|| missing(p, "GEOGCS"))?;
    let method = method.ok_or_else(|| missing(p, "PROJECTION"))?;
    p.close_element()?;

    if let Some(vector) = geographic.towgs84.as_ref().filter(|v| !v.is_zero()) {
        debug!(terms = vector.values.len(), "legacy TOWGS84 converted to parameters");
        parameters.extend(vector.to_parameters());
    }
    for (key, value) in geographic.extras.iter() {
        extras.insert(key.as_str(), value.as_str());
    }

    let conversion = Conversion {
        name: conversion_name(&name, &method.name),
        method,
        parameters,
        ids: Vec::new(),
    };
    let base = BaseDatumCrs {
        kind: BaseCrsKind::Geographic,
        name: geographic.name,
        dynamic: None,
        datum: DatumOrEnsemble::Frame(ReferenceFrame::Geodetic(geographic.datum)),
        unit: geographic.unit,
        ids: geographic.ids,
    };
    let axes = axes_or(axes, &[("X", AxisDirection::East), ("Y", AxisDirection::North)]);

    Ok(ProjectedCrs {
        name,
        base,
        conversion,
        cs: CoordinateSystem::new(CsType::Cartesian, axes, unit),
        meta: ObjectMeta {
            ids,
            extras,
            ..ObjectMeta::default()
        },
    })
}

// =============================================================================
// VERT_CS / LOCAL_CS
// =============================================================================

/// `VERT_CS["name",VERT_DATUM["datum",type],UNIT,AXIS,AUTHORITY]`
pub fn parse_vertical<P: WktParser>(p: &mut P) -> Result<Crs> {
    p.open_element()?;
    let name = p.read_quoted()?;

    let mut datum = None;
    let mut unit = None;
    let mut axes = Vec::new();
    let mut ids = Vec::new();
    let mut extras = Extras::new();
    while let Some(element) = p.next_keyword(VERT_CS_ELEMENTS)? {
        match element {
            Keyword::VDatum => datum = Some(parse_typed_datum(p, &mut extras)?),
            Keyword::Axis => axes.push(parse_axis(p, CsType::Vertical, false)?),
            Keyword::Extension => parse_extension(p, &mut extras)?,
            Keyword::Authority | Keyword::Id => ids.push(parse_identifier(p, element)?),
            unit_keyword => unit = Some(parse_unit(p, unit_keyword)?),
        }
    }
    let (datum_name, datum_type, datum_ids) = datum.ok_or_else(|| missing(p, "VERT_DATUM"))?;
    p.close_element()?;

    if let Some(datum_type) = datum_type {
        debug!(datum_type = %datum_type, "legacy vertical datum type kept in extras");
        extras.insert("VERT_DATUM_TYPE", datum_type);
    }
    let frame = VerticalReferenceFrame {
        name: datum_name,
        anchor: None,
        anchor_epoch: None,
        ids: datum_ids,
    };
    let axes = axes_or(axes, &[("Gravity-related height", AxisDirection::Up)]);

    Ok(Crs::Vertical(SingleCrs {
        name,
        dynamic: None,
        datum: DatumOrEnsemble::Frame(ReferenceFrame::Vertical(frame)),
        cs: CoordinateSystem::new(CsType::Vertical, axes, unit),
        meta: ObjectMeta {
            ids,
            extras,
            ..ObjectMeta::default()
        },
    }))
}

/// `LOCAL_CS["name",LOCAL_DATUM["datum",type],UNIT,AXIS*,AUTHORITY]`
pub fn parse_engineering<P: WktParser>(p: &mut P) -> Result<Crs> {
    p.open_element()?;
    let name = p.read_quoted()?;

    let mut datum = None;
    let mut unit = None;
    let mut axes = Vec::new();
    let mut ids = Vec::new();
    let mut extras = Extras::new();
    while let Some(element) = p.next_keyword(LOCAL_CS_ELEMENTS)? {
        match element {
            Keyword::EDatum => datum = Some(parse_typed_datum(p, &mut extras)?),
            Keyword::Axis => axes.push(parse_axis(p, CsType::Cartesian, false)?),
            Keyword::Extension => parse_extension(p, &mut extras)?,
            Keyword::Authority | Keyword::Id => ids.push(parse_identifier(p, element)?),
            unit_keyword => unit = Some(parse_unit(p, unit_keyword)?),
        }
    }
    let (datum_name, datum_type, datum_ids) = datum.ok_or_else(|| missing(p, "LOCAL_DATUM"))?;
    p.close_element()?;

    if let Some(datum_type) = datum_type {
        debug!(datum_type = %datum_type, "legacy local datum type kept in extras");
        extras.insert("LOCAL_DATUM_TYPE", datum_type);
    }
    let datum = EngineeringDatum {
        name: datum_name,
        anchor: None,
        ids: datum_ids,
    };
    let axes = axes_or(axes, &[("X", AxisDirection::East), ("Y", AxisDirection::North)]);

    Ok(Crs::Engineering(SingleCrs {
        name,
        dynamic: None,
        datum: DatumOrEnsemble::Frame(ReferenceFrame::Engineering(datum)),
        cs: CoordinateSystem::new(CsType::Cartesian, axes, unit),
        meta: ObjectMeta {
            ids,
            extras,
            ..ObjectMeta::default()
        },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_name_kept_when_method_mentioned() {
        assert_eq!(
            conversion_name("NAD83 / Transverse Mercator", "Transverse_Mercator"),
            "NAD83 / Transverse Mercator"
        );
    }

    #[test]
    fn test_conversion_name_merged() {
        assert_eq!(
            conversion_name("WGS 84 / UTM zone 31N", "Transverse_Mercator"),
            "WGS 84 / UTM zone 31N / Transverse_Mercator"
        );
    }

    #[test]
    fn test_bursa_wolf_three_terms() {
        let vector = BursaWolf {
            values: vec![-87.0, -98.0, -121.0, 0.0, 0.0, 0.0, 0.0],
            text: Vec::new(),
        };
        let parameters = vector.to_parameters();
        assert_eq!(parameters.len(), 3);
        assert_eq!(parameters[0].name(), "X-axis translation");
    }

    #[test]
    fn test_bursa_wolf_seven_terms() {
        let vector = BursaWolf {
            values: vec![1.0, 2.0, 3.0, 0.0, 0.0, 0.554, 0.219],
            text: Vec::new(),
        };
        let parameters = vector.to_parameters();
        assert_eq!(parameters.len(), 7);
        let scale = parameters[6].as_value().unwrap();
        assert_eq!(scale.name, "Scale difference");
        assert_eq!(scale.unit, Some(Unit::parts_per_million()));
    }
}
