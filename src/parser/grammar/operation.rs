//! Conversions and coordinate operations

use super::crs::parse_wrapped_crs;
use super::*;

const STEP_KEYWORDS: &[Keyword] = &[
    Keyword::CoordinateOperation,
    Keyword::PointMotionOperation,
    Keyword::Conversion,
    Keyword::DerivingConversion,
];

/// `METHOD["name"{,ID}*]`, also spelled `PROJECTION`
pub fn parse_method<P: WktParser>(p: &mut P) -> Result<Method> {
    p.open_element()?;
    let name = p.read_quoted()?;
    let ids = parse_ids(p)?;
    p.close_element()?;
    Ok(Method { name, ids })
}

/// `PARAMETER["name",value{,unit}{,ID}*]`
///
/// Abridged transformations imply their units, so `with_unit` is false there.
pub fn parse_parameter<P: WktParser>(p: &mut P, with_unit: bool) -> Result<Parameter> {
    p.open_element()?;
    let name = p.read_quoted()?;
    p.read_separator()?;
    let value = p.read_number()?;
    let unit = if with_unit {
        parse_optional_unit(p, ANY_UNIT)?
    } else {
        None
    };
    let ids = parse_ids(p)?;
    p.close_element()?;
    Ok(Parameter {
        name,
        value,
        unit,
        ids,
    })
}

/// `PARAMETERFILE["name","file"{,ID}*]`
fn parse_parameter_file<P: WktParser>(p: &mut P) -> Result<ParameterFile> {
    p.open_element()?;
    let name = p.read_quoted()?;
    p.read_separator()?;
    let file_name = p.read_quoted()?;
    let ids = parse_ids(p)?;
    p.close_element()?;
    Ok(ParameterFile {
        name,
        file_name,
        ids,
    })
}

pub fn parse_parameters<P: WktParser>(p: &mut P, with_unit: bool) -> Result<Vec<ParameterValue>> {
    let mut parameters = Vec::new();
    while let Some(keyword) = p.next_keyword(PARAMETER_KEYWORDS)? {
        let parameter = match keyword {
            Keyword::Parameter => ParameterValue::Value(parse_parameter(p, with_unit)?),
            _ => ParameterValue::File(parse_parameter_file(p)?),
        };
        parameters.push(parameter);
    }
    Ok(parameters)
}

/// `CONVERSION["name",METHOD[..],parameters*{,ID}*]`; same shape for `DERIVINGCONVERSION`
pub fn parse_conversion<P: WktParser>(p: &mut P) -> Result<Conversion> {
    p.open_element()?;
    let name = p.read_quoted()?;
    p.expect_keyword(&[Keyword::Method])?;
    let method = parse_method(p)?;
    let parameters = parse_parameters(p, true)?;
    let ids = parse_ids(p)?;
    p.close_element()?;
    Ok(Conversion {
        name,
        method,
        parameters,
        ids,
    })
}

fn parse_version<P: WktParser>(p: &mut P) -> Result<Option<String>> {
    match p.next_keyword(&[Keyword::Version])? {
        Some(_) => parse_text_element(p).map(Some),
        None => Ok(None),
    }
}

fn parse_accuracy<P: WktParser>(p: &mut P) -> Result<Option<f64>> {
    match p.next_keyword(&[Keyword::OperationAccuracy])? {
        Some(_) => parse_number_element(p).map(Some),
        None => Ok(None),
    }
}

/// `ABRIDGEDTRANSFORMATION["name"{,VERSION},METHOD[..],parameters*{,ID}*{,REMARK}]`
pub fn parse_abridged_transformation<P: WktParser>(p: &mut P) -> Result<AbridgedTransformation> {
    p.open_element()?;
    let name = p.read_quoted()?;
    let version = parse_version(p)?;
    p.expect_keyword(&[Keyword::Method])?;
    let method = parse_method(p)?;
    let parameters = parse_parameters(p, false)?;
    let ids = parse_ids(p)?;
    let remark = match p.next_keyword(&[Keyword::Remark])? {
        Some(_) => Some(parse_text_element(p)?),
        None => None,
    };
    p.close_element()?;
    Ok(AbridgedTransformation {
        name,
        version,
        method,
        parameters,
        ids,
        remark,
    })
}

/// `COORDINATEOPERATION["name"{,VERSION},SOURCECRS,TARGETCRS,METHOD,parameters*
/// {,INTERPOLATIONCRS}{,OPERATIONACCURACY},tail]`
pub fn parse_coordinate_operation<P: WktParser>(p: &mut P) -> Result<CoordinateOperation> {
    p.open_element()?;
    let name = p.read_quoted()?;
    let version = parse_version(p)?;
    p.expect_keyword(&[Keyword::SourceCrs])?;
    let source = parse_wrapped_crs(p)?;
    p.expect_keyword(&[Keyword::TargetCrs])?;
    let target = parse_wrapped_crs(p)?;
    p.expect_keyword(&[Keyword::Method])?;
    let method = parse_method(p)?;
    let parameters = parse_parameters(p, true)?;
    let interpolation = match p.next_keyword(&[Keyword::InterpolationCrs])? {
        Some(_) => Some(Box::new(parse_wrapped_crs(p)?)),
        None => None,
    };
    let accuracy = parse_accuracy(p)?;
    let meta = parse_object_tail(p)?;
    p.close_element()?;
    Ok(CoordinateOperation {
        name,
        version,
        source: Box::new(source),
        target: Box::new(target),
        method,
        parameters,
        interpolation,
        accuracy,
        meta,
    })
}

/// `POINTMOTIONOPERATION["name"{,VERSION},SOURCECRS,METHOD,parameters*{,OPERATIONACCURACY},tail]`
pub fn parse_point_motion_operation<P: WktParser>(p: &mut P) -> Result<PointMotionOperation> {
    p.open_element()?;
    let name = p.read_quoted()?;
    let version = parse_version(p)?;
    p.expect_keyword(&[Keyword::SourceCrs])?;
    let source = parse_wrapped_crs(p)?;
    p.expect_keyword(&[Keyword::Method])?;
    let method = parse_method(p)?;
    let parameters = parse_parameters(p, true)?;
    let accuracy = parse_accuracy(p)?;
    let meta = parse_object_tail(p)?;
    p.close_element()?;
    Ok(PointMotionOperation {
        name,
        version,
        source: Box::new(source),
        method,
        parameters,
        accuracy,
        meta,
    })
}

/// `CONCATENATEDOPERATION["name"{,VERSION},SOURCECRS,TARGETCRS,STEP+{,OPERATIONACCURACY},tail]`
pub fn parse_concatenated_operation<P: WktParser>(p: &mut P) -> Result<ConcatenatedOperation> {
    p.open_element()?;
    let name = p.read_quoted()?;
    let version = parse_version(p)?;
    p.expect_keyword(&[Keyword::SourceCrs])?;
    let source = parse_wrapped_crs(p)?;
    p.expect_keyword(&[Keyword::TargetCrs])?;
    let target = parse_wrapped_crs(p)?;

    let mut steps = Vec::new();
    p.expect_keyword(&[Keyword::Step])?;
    loop {
        steps.push(parse_step(p)?);
        if p.next_keyword(&[Keyword::Step])?.is_none() {
            break;
        }
    }

    let accuracy = parse_accuracy(p)?;
    let meta = parse_object_tail(p)?;
    p.close_element()?;
    Ok(ConcatenatedOperation {
        name,
        version,
        source: Box::new(source),
        target: Box::new(target),
        steps,
        accuracy,
        meta,
    })
}

/// `STEP[operation]` holding exactly one operation or conversion
fn parse_step<P: WktParser>(p: &mut P) -> Result<OperationStep> {
    p.open_element()?;
    let step = match p.read_keyword(STEP_KEYWORDS)? {
        Keyword::CoordinateOperation => OperationStep::Operation(parse_coordinate_operation(p)?),
        Keyword::PointMotionOperation => OperationStep::PointMotion(parse_point_motion_operation(p)?),
        Keyword::Conversion => OperationStep::Conversion(parse_conversion(p)?),
        _ => OperationStep::DerivingConversion(parse_conversion(p)?),
    };
    p.close_element()?;
    Ok(step)
}
