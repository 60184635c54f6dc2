//! Coordinate systems and axes

use std::sync::LazyLock;

use regex::Regex;

use super::*;

/// `name (abbrev)` with the abbreviation in a trailing parenthetical
static AXIS_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)\s*\(([^()]*)\)$").expect("valid axis name pattern"));

/// Unit keywords in order of preference for a coordinate system type
pub fn unit_priority(cs_type: CsType) -> &'static [Keyword] {
    match cs_type {
        CsType::Ellipsoidal | CsType::Spherical | CsType::Polar => ANGLE_FIRST,
        CsType::Parametric => PARAMETRIC_FIRST,
        CsType::TemporalCount | CsType::TemporalDateTime | CsType::TemporalMeasure => TIME_ONLY,
        _ => LENGTH_FIRST,
    }
}

/// `CS[type,dimension{,ID}*]`, its axes, and an optional unit for all axes
pub fn parse_coordinate_system<P: WktParser>(p: &mut P) -> Result<CoordinateSystem> {
    p.expect_keyword(&[Keyword::Cs])?;
    p.open_element()?;
    let word = p.read_word()?;
    let cs_type = CsType::from_wkt(&word.text).ok_or_else(|| {
        SyntaxError::new(
            ErrorKind::UnexpectedToken,
            format!("unknown coordinate system type '{}'", word.text),
            word.range,
        )
    })?;
    p.read_separator()?;
    let dimension_offset = p.offset();
    let dimension = p.read_u32()?;
    let ids = parse_ids(p)?;
    p.close_element()?;

    let mut axes = Vec::new();
    while p.next_keyword(&[Keyword::Axis])?.is_some() {
        axes.push(parse_axis(p, cs_type, true)?);
        if cs_type.is_single_axis_temporal() {
            break;
        }
    }
    if axes.len() != dimension as usize {
        p.report(SyntaxError::at_offset(
            ErrorKind::StructuralViolation,
            format!(
                "coordinate system declares {dimension} dimensions but has {} axes",
                axes.len()
            ),
            dimension_offset,
        ))?;
    }

    let unit = parse_optional_unit(p, unit_priority(cs_type))?;
    Ok(CoordinateSystem {
        cs_type,
        dimension,
        ids,
        axes,
        unit,
    })
}

/// Split `"name (abbrev)"` into its parts
pub fn split_axis_name(text: &str) -> (String, Option<String>) {
    match AXIS_NAME.captures(text) {
        Some(caps) => (caps[1].to_string(), Some(caps[2].to_string())),
        None => (text.to_string(), None),
    }
}

/// `AXIS["name (abbrev)",direction,...]`
///
/// `typed` is false for legacy coordinate systems, where a rotational
/// direction may come without its `BEARING`.
pub fn parse_axis<P: WktParser>(p: &mut P, cs_type: CsType, typed: bool) -> Result<Axis> {
    p.open_element()?;
    let (name, abbreviation) = split_axis_name(&p.read_quoted()?);
    p.read_separator()?;
    let word = p.read_word()?;
    let direction = AxisDirection::from_wkt_lenient(&word.text).ok_or_else(|| {
        SyntaxError::new(
            ErrorKind::UnexpectedToken,
            format!("unknown axis direction '{}'", word.text),
            word.range,
        )
    })?;

    let mut axis = Axis::new(name, direction);
    axis.abbreviation = abbreviation;

    if direction.allows_meridian() && p.next_keyword(&[Keyword::Meridian])?.is_some() {
        p.open_element()?;
        let longitude = p.read_number()?;
        let keyword = p.expect_keyword(ANGLE_ONLY)?;
        let unit = parse_unit(p, keyword)?;
        p.close_element()?;
        axis.meridian = Some(Meridian { longitude, unit });
    }

    if direction.requires_bearing() {
        let found = if typed {
            Some(p.expect_keyword(&[Keyword::Bearing])?)
        } else {
            p.next_keyword(&[Keyword::Bearing])?
        };
        if found.is_some() {
            axis.bearing = Some(parse_number_element(p)?);
        }
    }

    if p.next_keyword(&[Keyword::Order])?.is_some() {
        p.open_element()?;
        axis.order = Some(p.read_u32()?);
        p.close_element()?;
    }

    axis.unit = parse_optional_unit(p, unit_priority(cs_type))?;

    if p.next_keyword(&[Keyword::AxisMinValue])?.is_some() {
        axis.minimum_value = Some(parse_number_element(p)?);
    }
    if p.next_keyword(&[Keyword::AxisMaxValue])?.is_some() {
        axis.maximum_value = Some(parse_number_element(p)?);
    }
    if p.next_keyword(&[Keyword::RangeMeaning])?.is_some() {
        p.open_element()?;
        let word = p.read_word()?;
        let meaning = RangeMeaning::from_wkt(&word.text).ok_or_else(|| {
            SyntaxError::new(
                ErrorKind::UnexpectedToken,
                format!("unknown range meaning '{}'", word.text),
                word.range,
            )
        })?;
        p.close_element()?;
        axis.range_meaning = Some(meaning);
    }

    axis.ids = parse_ids(p)?;
    p.close_element()?;
    Ok(axis)
}
