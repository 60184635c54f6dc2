//! Reference frames, datum ensembles, ellipsoids and prime meridians

use super::*;

pub const GEODETIC_DATUMS: &[Keyword] = &[Keyword::Datum, Keyword::Ensemble];
pub const VERTICAL_DATUMS: &[Keyword] = &[Keyword::VDatum, Keyword::Ensemble];
pub const ENGINEERING_DATUMS: &[Keyword] = &[Keyword::EDatum];
pub const PARAMETRIC_DATUMS: &[Keyword] = &[Keyword::PDatum];
pub const TEMPORAL_DATUMS: &[Keyword] = &[Keyword::TDatum];

/// `ELLIPSOID["name",a,rf{,LENGTHUNIT}{,ID}*]`
pub fn parse_ellipsoid<P: WktParser>(p: &mut P) -> Result<Ellipsoid> {
    p.open_element()?;
    let name = p.read_quoted()?;
    p.read_separator()?;
    let semi_major_axis = p.read_unsigned_number()?;
    p.read_separator()?;
    let inverse_flattening = p.read_unsigned_number()?;
    let unit = parse_optional_unit(p, LENGTH_ONLY)?;
    let ids = parse_ids(p)?;
    p.close_element()?;
    Ok(Ellipsoid {
        name,
        semi_major_axis,
        inverse_flattening,
        unit,
        ids,
    })
}

/// `PRIMEM["name",longitude{,ANGLEUNIT}{,ID}*]`
pub fn parse_prime_meridian<P: WktParser>(p: &mut P) -> Result<PrimeMeridian> {
    p.open_element()?;
    let name = p.read_quoted()?;
    p.read_separator()?;
    let longitude = p.read_number()?;
    let unit = parse_optional_unit(p, ANGLE_ONLY)?;
    let ids = parse_ids(p)?;
    p.close_element()?;
    Ok(PrimeMeridian {
        name,
        longitude,
        unit,
        ids,
    })
}

/// `DYNAMIC[FRAMEEPOCH[epoch]{,MODEL["name"{,ID}*]}]`
pub fn parse_dynamic<P: WktParser>(p: &mut P) -> Result<Dynamic> {
    p.open_element()?;
    p.read_keyword(&[Keyword::FrameEpoch])?;
    let frame_epoch = parse_number_element(p)?;
    let model = match p.next_keyword(&[Keyword::Model])? {
        Some(_) => {
            p.open_element()?;
            let name = p.read_quoted()?;
            let ids = parse_ids(p)?;
            p.close_element()?;
            Some(DeformationModel { name, ids })
        }
        None => None,
    };
    p.close_element()?;
    Ok(Dynamic { frame_epoch, model })
}

/// Optional `DYNAMIC` leading the datum of geodetic and vertical CRSs
pub fn parse_optional_dynamic<P: WktParser>(p: &mut P) -> Result<Option<Dynamic>> {
    match p.next_keyword(&[Keyword::Dynamic])? {
        Some(_) => parse_dynamic(p).map(Some),
        None => Ok(None),
    }
}

fn parse_anchor<P: WktParser>(p: &mut P) -> Result<Option<String>> {
    match p.next_keyword(&[Keyword::Anchor])? {
        Some(_) => parse_text_element(p).map(Some),
        None => Ok(None),
    }
}

fn parse_anchor_epoch<P: WktParser>(p: &mut P) -> Result<Option<f64>> {
    match p.next_keyword(&[Keyword::AnchorEpoch])? {
        Some(_) => parse_number_element(p).map(Some),
        None => Ok(None),
    }
}

// =============================================================================
// Reference frames
// =============================================================================

pub fn parse_geodetic_frame<P: WktParser>(p: &mut P) -> Result<GeodeticReferenceFrame> {
    p.open_element()?;
    let name = p.read_quoted()?;
    p.expect_keyword(&[Keyword::Ellipsoid])?;
    let ellipsoid = parse_ellipsoid(p)?;
    let anchor = parse_anchor(p)?;
    let anchor_epoch = parse_anchor_epoch(p)?;
    let ids = parse_ids(p)?;
    p.close_element()?;
    Ok(GeodeticReferenceFrame {
        name,
        ellipsoid,
        anchor,
        anchor_epoch,
        ids,
        prime_meridian: None,
    })
}

pub fn parse_vertical_frame<P: WktParser>(p: &mut P) -> Result<VerticalReferenceFrame> {
    p.open_element()?;
    let name = p.read_quoted()?;
    let anchor = parse_anchor(p)?;
    let anchor_epoch = parse_anchor_epoch(p)?;
    let ids = parse_ids(p)?;
    p.close_element()?;
    Ok(VerticalReferenceFrame {
        name,
        anchor,
        anchor_epoch,
        ids,
    })
}

fn parse_engineering_datum<P: WktParser>(p: &mut P) -> Result<EngineeringDatum> {
    p.open_element()?;
    let name = p.read_quoted()?;
    let anchor = parse_anchor(p)?;
    let ids = parse_ids(p)?;
    p.close_element()?;
    Ok(EngineeringDatum { name, anchor, ids })
}

fn parse_parametric_datum<P: WktParser>(p: &mut P) -> Result<ParametricDatum> {
    p.open_element()?;
    let name = p.read_quoted()?;
    let anchor = parse_anchor(p)?;
    let ids = parse_ids(p)?;
    p.close_element()?;
    Ok(ParametricDatum { name, anchor, ids })
}

/// `TDATUM["name"{,CALENDAR["c"]}{,TIMEORIGIN[t]}{,ID}*]`
fn parse_temporal_datum<P: WktParser>(p: &mut P) -> Result<TemporalDatum> {
    p.open_element()?;
    let name = p.read_quoted()?;
    let calendar = match p.next_keyword(&[Keyword::Calendar])? {
        Some(_) => Some(parse_text_element(p)?),
        None => None,
    };
    let origin = match p.next_keyword(&[Keyword::TimeOrigin])? {
        Some(_) => {
            p.open_element()?;
            let origin = parse_time_value(p)?;
            p.close_element()?;
            Some(origin)
        }
        None => None,
    };
    let ids = parse_ids(p)?;
    p.close_element()?;
    Ok(TemporalDatum {
        name,
        calendar,
        origin,
        ids,
    })
}

// =============================================================================
// Ensembles
// =============================================================================

/// `ENSEMBLE["name",MEMBER+,{ELLIPSOID,}ENSEMBLEACCURACY[x]{,ID}*]`
///
/// The ellipsoid may also follow the accuracy. Its presence makes the
/// ensemble geodetic.
pub fn parse_ensemble<P: WktParser>(p: &mut P) -> Result<DatumEnsemble> {
    p.open_element()?;
    let name = p.read_quoted()?;

    let mut members = Vec::new();
    p.expect_keyword(&[Keyword::Member])?;
    loop {
        p.open_element()?;
        let member_name = p.read_quoted()?;
        let ids = parse_ids(p)?;
        p.close_element()?;
        members.push(EnsembleMember {
            name: member_name,
            ids,
        });
        if p.next_keyword(&[Keyword::Member])?.is_none() {
            break;
        }
    }

    let mut ellipsoid = None;
    let mut accuracy = None;
    while let Some(keyword) = p.next_keyword(&[Keyword::Ellipsoid, Keyword::EnsembleAccuracy])? {
        let offset = p.offset();
        let duplicate = match keyword {
            Keyword::Ellipsoid => ellipsoid.replace(parse_ellipsoid(p)?).is_some(),
            _ => accuracy.replace(parse_number_element(p)?).is_some(),
        };
        if duplicate {
            p.report(SyntaxError::at_offset(
                ErrorKind::StructuralViolation,
                format!("repeated {} in ensemble", keyword.as_str()),
                offset,
            ))?;
        }
    }
    let Some(accuracy) = accuracy else {
        return Err(SyntaxError::at_offset(
            ErrorKind::MissingKeyword,
            "expected ENSEMBLEACCURACY",
            p.offset(),
        ));
    };

    let ids = parse_ids(p)?;
    p.close_element()?;

    Ok(match ellipsoid {
        Some(ellipsoid) => DatumEnsemble::Geodetic(GeodeticEnsemble {
            name,
            members,
            ellipsoid,
            accuracy,
            ids,
            prime_meridian: None,
        }),
        None => DatumEnsemble::Vertical(VerticalEnsemble {
            name,
            members,
            accuracy,
            ids,
        }),
    })
}

// =============================================================================
// Dispatch
// =============================================================================

/// Parse the datum or ensemble introduced by `keyword`
pub fn parse_datum<P: WktParser>(p: &mut P, keyword: Keyword) -> Result<DatumOrEnsemble> {
    let frame = match keyword {
        Keyword::Ensemble => return parse_ensemble(p).map(DatumOrEnsemble::Ensemble),
        Keyword::Datum => ReferenceFrame::Geodetic(parse_geodetic_frame(p)?),
        Keyword::VDatum => ReferenceFrame::Vertical(parse_vertical_frame(p)?),
        Keyword::EDatum => ReferenceFrame::Engineering(parse_engineering_datum(p)?),
        Keyword::PDatum => ReferenceFrame::Parametric(parse_parametric_datum(p)?),
        _ => ReferenceFrame::Temporal(parse_temporal_datum(p)?),
    };
    Ok(DatumOrEnsemble::Frame(frame))
}

/// Read the mandatory datum of a CRS family, then the `PRIMEM` that may
/// follow a geodetic one.
pub fn parse_datum_of<P: WktParser>(p: &mut P, family: &[Keyword]) -> Result<DatumOrEnsemble> {
    let keyword = p.expect_keyword(family)?;
    let mut datum = parse_datum(p, keyword)?;
    if family.contains(&Keyword::Datum) && p.next_keyword(&[Keyword::PrimeMeridian])?.is_some() {
        let prime_meridian = parse_prime_meridian(p)?;
        set_prime_meridian(&mut datum, prime_meridian);
    }
    Ok(datum)
}

/// Attach a prime meridian to a geodetic frame or ensemble; others have no slot
pub fn set_prime_meridian(datum: &mut DatumOrEnsemble, prime_meridian: PrimeMeridian) {
    match datum {
        DatumOrEnsemble::Frame(ReferenceFrame::Geodetic(frame)) => {
            frame.prime_meridian = Some(prime_meridian)
        }
        DatumOrEnsemble::Ensemble(DatumEnsemble::Geodetic(ensemble)) => {
            ensemble.prime_meridian = Some(prime_meridian)
        }
        _ => {}
    }
}
