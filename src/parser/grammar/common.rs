//! Identifiers, units, usages, extents and the trailing attributes of objects

use super::*;

const USAGE_ELEMENTS: &[Keyword] = &[
    Keyword::Scope,
    Keyword::Area,
    Keyword::BBox,
    Keyword::VerticalExtent,
    Keyword::TimeExtent,
];

const TAIL_USAGE_KEYWORDS: &[Keyword] = &[
    Keyword::Usage,
    Keyword::Scope,
    Keyword::Area,
    Keyword::BBox,
    Keyword::VerticalExtent,
    Keyword::TimeExtent,
];

// =============================================================================
// Identifiers
// =============================================================================

/// `ID["authority",code{,version}{,CITATION}{,URI}]` or legacy `AUTHORITY["authority","code"]`
pub fn parse_identifier<P: WktParser>(p: &mut P, keyword: Keyword) -> Result<Identifier> {
    p.open_element()?;
    let authority = p.read_quoted()?;
    p.read_separator()?;
    let legacy = keyword == Keyword::Authority;
    let code = id_value(p.read_literal()?, legacy)?;
    let mut id = Identifier::new(authority, code);

    if matches!(
        p.peek_after_separator(),
        Some(TokenKind::Number | TokenKind::Quoted)
    ) {
        p.read_separator()?;
        id.version = Some(id_value(p.read_literal()?, false)?);
    }
    if p.next_keyword(&[Keyword::Citation])?.is_some() {
        id.citation = Some(parse_text_element(p)?);
    }
    if p.next_keyword(&[Keyword::Uri])?.is_some() {
        id.uri = Some(parse_text_element(p)?);
    }
    p.close_element()?;
    Ok(id)
}

/// Zero or more `ID`/`AUTHORITY` elements
pub fn parse_ids<P: WktParser>(p: &mut P) -> Result<Vec<Identifier>> {
    let mut ids = Vec::new();
    while let Some(keyword) = p.next_keyword(ID_KEYWORDS)? {
        ids.push(parse_identifier(p, keyword)?);
    }
    Ok(ids)
}

/// Numbers without a fraction or exponent are integers; legacy quoted
/// codes made only of digits are integers too.
fn id_value(literal: Literal, legacy: bool) -> Result<IdValue> {
    match literal.kind {
        TokenKind::Number => {
            let integral = !literal.text.contains(['.', 'e', 'E']);
            match literal.text.parse::<i64>() {
                Ok(value) if integral => Ok(IdValue::Integer(value)),
                _ => literal_number(&literal).map(IdValue::Number),
            }
        }
        TokenKind::Quoted => {
            let digits = !literal.text.is_empty() && literal.text.bytes().all(|b| b.is_ascii_digit());
            match literal.text.parse::<i64>() {
                Ok(value) if legacy && digits => Ok(IdValue::Integer(value)),
                _ => Ok(IdValue::Text(literal.text)),
            }
        }
        _ => Err(SyntaxError::new(
            ErrorKind::UnexpectedToken,
            format!("expected an identifier code but found '{}'", literal.text),
            literal.range,
        )),
    }
}

/// `KEYWORD["text"]`
pub fn parse_text_element<P: WktParser>(p: &mut P) -> Result<String> {
    p.open_element()?;
    let text = p.read_quoted()?;
    p.close_element()?;
    Ok(text)
}

/// `KEYWORD[number]`
pub fn parse_number_element<P: WktParser>(p: &mut P) -> Result<f64> {
    p.open_element()?;
    let value = p.read_number()?;
    p.close_element()?;
    Ok(value)
}

// =============================================================================
// Units
// =============================================================================

pub fn unit_kind(keyword: Keyword) -> UnitKind {
    match keyword {
        Keyword::AngleUnit => UnitKind::Angle,
        Keyword::ScaleUnit => UnitKind::Scale,
        Keyword::ParametricUnit => UnitKind::Parametric,
        Keyword::TimeUnit => UnitKind::Time,
        _ => UnitKind::Length,
    }
}

/// `ANGLEUNIT["name",factor{,ID}*]` and friends; time units may omit the factor
pub fn parse_unit<P: WktParser>(p: &mut P, keyword: Keyword) -> Result<Unit> {
    p.open_element()?;
    let name = p.read_quoted()?;
    let factor = match p.optional_value(TokenKind::Number)? {
        Some(literal) => Some(literal_number(&literal)?),
        None => None,
    };
    let ids = parse_ids(p)?;
    p.close_element()?;
    Ok(Unit {
        kind: unit_kind(keyword),
        name,
        factor,
        ids,
    })
}

/// An optional unit element, its kind decided by `priority` for a bare `UNIT`
pub fn parse_optional_unit<P: WktParser>(p: &mut P, priority: &[Keyword]) -> Result<Option<Unit>> {
    match p.next_keyword(priority)? {
        Some(keyword) => parse_unit(p, keyword).map(Some),
        None => Ok(None),
    }
}

// =============================================================================
// Usages and extents
// =============================================================================

/// A date or date-time, bare or quoted
pub fn parse_time_value<P: WktParser>(p: &mut P) -> Result<TimeValue> {
    let literal = p.read_literal()?;
    Ok(match literal.kind {
        TokenKind::Quoted => TimeValue::Quoted(literal.text),
        _ => TimeValue::Bare(literal.text),
    })
}

/// `USAGE[SCOPE["s"]{,AREA}{,BBOX}{,VERTICALEXTENT}{,TIMEEXTENT}]`
pub fn parse_usage<P: WktParser>(p: &mut P) -> Result<Usage> {
    p.open_element()?;
    let mut usage = Usage::default();
    let first = p.read_keyword(USAGE_ELEMENTS)?;
    parse_usage_element(p, first, &mut usage)?;
    while let Some(keyword) = p.next_keyword(USAGE_ELEMENTS)? {
        parse_usage_element(p, keyword, &mut usage)?;
    }
    p.close_element()?;
    Ok(usage)
}

/// One scope or extent element, stored into `usage`
pub fn parse_usage_element<P: WktParser>(p: &mut P, keyword: Keyword, usage: &mut Usage) -> Result<()> {
    match keyword {
        Keyword::Scope => usage.scope = Some(parse_text_element(p)?),
        Keyword::Area => usage.extent.area = Some(parse_text_element(p)?),
        Keyword::BBox => usage.extent.bbox = Some(parse_bbox(p)?),
        Keyword::VerticalExtent => usage.extent.vertical = Some(parse_vertical_extent(p)?),
        _ => usage.extent.temporal = Some(parse_temporal_extent(p)?),
    }
    Ok(())
}

fn parse_bbox<P: WktParser>(p: &mut P) -> Result<BoundingBox> {
    p.open_element()?;
    let south = p.read_number()?;
    p.read_separator()?;
    let west = p.read_number()?;
    p.read_separator()?;
    let north = p.read_number()?;
    p.read_separator()?;
    let east = p.read_number()?;
    p.close_element()?;
    Ok(BoundingBox {
        south,
        west,
        north,
        east,
    })
}

fn parse_vertical_extent<P: WktParser>(p: &mut P) -> Result<VerticalExtent> {
    p.open_element()?;
    let minimum = p.read_number()?;
    p.read_separator()?;
    let maximum = p.read_number()?;
    let unit = parse_optional_unit(p, LENGTH_ONLY)?;
    p.close_element()?;
    Ok(VerticalExtent {
        minimum,
        maximum,
        unit,
    })
}

fn parse_temporal_extent<P: WktParser>(p: &mut P) -> Result<TemporalExtent> {
    p.open_element()?;
    let start = parse_time_value(p)?;
    p.read_separator()?;
    let end = parse_time_value(p)?;
    p.close_element()?;
    Ok(TemporalExtent { start, end })
}

// =============================================================================
// Object tail
// =============================================================================

/// `USAGE*`, `ID*`, `{REMARK}` closing every CRS and operation.
///
/// Bare 2015-style scope and extent elements are folded into one usage.
pub fn parse_object_tail<P: WktParser>(p: &mut P) -> Result<ObjectMeta> {
    let mut meta = ObjectMeta::default();
    let mut bare: Option<Usage> = None;
    while let Some(keyword) = p.next_keyword(TAIL_USAGE_KEYWORDS)? {
        if keyword == Keyword::Usage {
            meta.usages.push(parse_usage(p)?);
        } else {
            parse_usage_element(p, keyword, bare.get_or_insert_with(Usage::default))?;
        }
    }
    meta.usages.extend(bare);
    meta.ids = parse_ids(p)?;
    if p.next_keyword(&[Keyword::Remark])?.is_some() {
        let remark = parse_text_element(p)?;
        apply_remark(&mut meta, remark);
    }
    Ok(meta)
}

/// Store a remark, decoding it into the extras bag when it is an encoded list
pub fn apply_remark(meta: &mut ObjectMeta, remark: String) {
    match Extras::decode(&remark) {
        Ok(mut extras) if !extras.is_empty() => {
            meta.remark = extras.shift_remove("REMARK");
            meta.extras = extras;
        }
        _ => meta.remark = Some(remark),
    }
}
