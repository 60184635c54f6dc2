//! Top-level dispatch and the CRSs built from other CRSs

use super::compat;
use super::*;

/// Read the keyword of a CRS or operation and the element it opens
pub fn parse_crs<P: WktParser>(p: &mut P) -> Result<Crs> {
    let keyword = p.read_keyword(CRS_KEYWORDS)?;
    parse_crs_element(p, keyword)
}

/// Parse the element opened by `keyword`, one of [`CRS_KEYWORDS`]
pub fn parse_crs_element<P: WktParser>(p: &mut P, keyword: Keyword) -> Result<Crs> {
    debug!(keyword = keyword.as_str(), "reading element");
    match keyword {
        Keyword::GeodCrs
        | Keyword::GeogCrs
        | Keyword::VertCrs
        | Keyword::EngCrs
        | Keyword::ParametricCrs
        | Keyword::TimeCrs => parse_single_or_derived(p, keyword),
        Keyword::ProjCrs => parse_projected(p).map(Crs::Projected),
        Keyword::DerivedProjCrs => parse_derived_projected(p).map(Crs::Derived),
        Keyword::CompoundCrs => parse_compound(p).map(Crs::Compound),
        Keyword::BoundCrs => parse_bound(p).map(Crs::Bound),
        Keyword::CoordinateMetadata => parse_coordinate_metadata(p).map(Crs::CoordinateMetadata),
        Keyword::CoordinateOperation => {
            parse_coordinate_operation(p).map(Crs::CoordinateOperation)
        }
        Keyword::PointMotionOperation => {
            parse_point_motion_operation(p).map(Crs::PointMotionOperation)
        }
        Keyword::ConcatenatedOperation => {
            parse_concatenated_operation(p).map(Crs::ConcatenatedOperation)
        }
        Keyword::GeogCs | Keyword::GeocCs => compat::parse_geographic(p, keyword),
        Keyword::ProjCs => compat::parse_projected(p).map(Crs::Projected),
        Keyword::VertCs => compat::parse_vertical(p),
        Keyword::LocalCs => compat::parse_engineering(p),
        other => Err(SyntaxError::at_offset(
            ErrorKind::MissingKeyword,
            format!("expected a CRS but found {}", other.as_str()),
            p.offset(),
        )),
    }
}

/// `KEYWORD[crs]` wrappers such as `SOURCECRS` and `TARGETCRS`
pub fn parse_wrapped_crs<P: WktParser>(p: &mut P) -> Result<Crs> {
    p.open_element()?;
    let crs = parse_crs(p)?;
    p.close_element()?;
    Ok(crs)
}

// =============================================================================
// Single CRSs
// =============================================================================

/// Datum keywords, and whether `DYNAMIC` is allowed, for each single CRS keyword
fn family(keyword: Keyword) -> (&'static [Keyword], bool) {
    match keyword {
        Keyword::GeodCrs | Keyword::GeogCrs => (GEODETIC_DATUMS, true),
        Keyword::VertCrs => (VERTICAL_DATUMS, true),
        Keyword::EngCrs => (ENGINEERING_DATUMS, false),
        Keyword::ParametricCrs => (PARAMETRIC_DATUMS, false),
        _ => (TEMPORAL_DATUMS, false),
    }
}

fn parse_single_or_derived<P: WktParser>(p: &mut P, keyword: Keyword) -> Result<Crs> {
    p.open_element()?;
    let name = p.read_quoted()?;
    if p.is_keyword_next(BASE_CRS_KEYWORDS) {
        return parse_derived(p, keyword, name).map(Crs::Derived);
    }

    let (datums, dynamic_allowed) = family(keyword);
    let dynamic = if dynamic_allowed {
        parse_optional_dynamic(p)?
    } else {
        None
    };
    let datum = parse_datum_of(p, datums)?;
    let cs = parse_coordinate_system(p)?;
    let meta = parse_object_tail(p)?;
    p.close_element()?;

    let single = SingleCrs {
        name,
        dynamic,
        datum,
        cs,
        meta,
    };
    Ok(match keyword {
        Keyword::GeodCrs => Crs::Geodetic(single),
        Keyword::GeogCrs => Crs::Geographic(single),
        Keyword::VertCrs => Crs::Vertical(single),
        Keyword::EngCrs => Crs::Engineering(single),
        Keyword::ParametricCrs => Crs::Parametric(single),
        _ => Crs::Temporal(single),
    })
}

/// `PROJCRS["name",BASEGEOGCRS[..],CONVERSION[..],CS..,tail]`
fn parse_projected<P: WktParser>(p: &mut P) -> Result<ProjectedCrs> {
    p.open_element()?;
    let name = p.read_quoted()?;
    let keyword = p.expect_keyword(&[Keyword::BaseGeogCrs, Keyword::BaseGeodCrs])?;
    let base = parse_base_datum_crs(p, keyword)?;
    p.expect_keyword(&[Keyword::Conversion])?;
    let conversion = parse_conversion(p)?;
    let cs = parse_coordinate_system(p)?;
    let meta = parse_object_tail(p)?;
    p.close_element()?;
    Ok(ProjectedCrs {
        name,
        base,
        conversion,
        cs,
        meta,
    })
}

// =============================================================================
// Compound, bound and coordinate metadata
// =============================================================================

/// `COMPOUNDCRS["name",crs,crs+,tail]`
fn parse_compound<P: WktParser>(p: &mut P) -> Result<CompoundCrs> {
    let start = p.offset();
    p.open_element()?;
    let name = p.read_quoted()?;

    let mut components = Vec::new();
    let keyword = p.expect_keyword(CRS_KEYWORDS)?;
    components.push(parse_crs_element(p, keyword)?);
    while let Some(keyword) = p.next_keyword(CRS_KEYWORDS)? {
        components.push(parse_crs_element(p, keyword)?);
    }
    if components.len() < 2 {
        p.report(SyntaxError::at_offset(
            ErrorKind::StructuralViolation,
            format!(
                "compound CRS needs at least two components but has {}",
                components.len()
            ),
            start,
        ))?;
    }

    let meta = parse_object_tail(p)?;
    p.close_element()?;
    Ok(CompoundCrs {
        name,
        components,
        meta,
    })
}

/// `BOUNDCRS[SOURCECRS[crs],TARGETCRS[crs],ABRIDGEDTRANSFORMATION[..],tail]`
fn parse_bound<P: WktParser>(p: &mut P) -> Result<BoundCrs> {
    p.open_element()?;
    p.read_keyword(&[Keyword::SourceCrs])?;
    let source = parse_wrapped_crs(p)?;
    p.expect_keyword(&[Keyword::TargetCrs])?;
    let target = parse_wrapped_crs(p)?;
    p.expect_keyword(&[Keyword::AbridgedTransformation])?;
    let transformation = parse_abridged_transformation(p)?;
    let meta = parse_object_tail(p)?;
    p.close_element()?;
    Ok(BoundCrs {
        source: Box::new(source),
        target: Box::new(target),
        transformation,
        meta,
    })
}

/// `COORDINATEMETADATA[crs{,EPOCH[epoch]}]`
fn parse_coordinate_metadata<P: WktParser>(p: &mut P) -> Result<CoordinateMetadata> {
    p.open_element()?;
    let crs = parse_crs(p)?;
    let epoch = match p.next_keyword(&[Keyword::Epoch])? {
        Some(_) => Some(parse_number_element(p)?),
        None => None,
    };
    p.close_element()?;
    Ok(CoordinateMetadata {
        crs: Box::new(crs),
        epoch,
    })
}
