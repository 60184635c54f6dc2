//! Conversions and coordinate operations

use super::common::write_tail;
use super::{ToWkt, WktWriter};
use crate::model::{
    AbridgedTransformation, ConcatenatedOperation, Conversion, CoordinateOperation, Crs, Method,
    OperationStep, Parameter, ParameterFile, ParameterValue, PointMotionOperation,
};
use crate::parser::Keyword;

impl ToWkt for Method {
    fn write_wkt(&self, w: &mut WktWriter) {
        w.open(Keyword::Method);
        w.quoted(&self.name);
        w.write_all(&self.ids);
        w.close();
    }
}

impl ToWkt for Parameter {
    fn write_wkt(&self, w: &mut WktWriter) {
        w.open(Keyword::Parameter);
        w.quoted(&self.name);
        w.number(self.value);
        w.write_opt(self.unit.as_ref());
        w.write_all(&self.ids);
        w.close();
    }
}

impl ToWkt for ParameterFile {
    fn write_wkt(&self, w: &mut WktWriter) {
        w.open(Keyword::ParameterFile);
        w.quoted(&self.name);
        w.quoted(&self.file_name);
        w.write_all(&self.ids);
        w.close();
    }
}

impl ToWkt for ParameterValue {
    fn write_wkt(&self, w: &mut WktWriter) {
        match self {
            Self::Value(p) => w.write(p),
            Self::File(p) => w.write(p),
        }
    }
}

/// `CONVERSION[..]` or `DERIVINGCONVERSION[..]` depending on `keyword`
pub(super) fn write_conversion(w: &mut WktWriter, keyword: Keyword, conversion: &Conversion) {
    w.open(keyword);
    w.quoted(&conversion.name);
    w.write(&conversion.method);
    w.write_all(&conversion.parameters);
    w.write_all(&conversion.ids);
    w.close();
}

impl ToWkt for Conversion {
    fn write_wkt(&self, w: &mut WktWriter) {
        write_conversion(w, Keyword::Conversion, self);
    }
}

/// `SOURCECRS[crs]` and the other single-CRS wrappers
pub(super) fn write_wrapped(w: &mut WktWriter, keyword: Keyword, crs: &Crs) {
    w.open(keyword);
    w.write(crs);
    w.close();
}

fn write_version(w: &mut WktWriter, version: Option<&String>) {
    if let Some(version) = version {
        w.text_element(Keyword::Version, version);
    }
}

fn write_accuracy(w: &mut WktWriter, accuracy: Option<f64>) {
    if let Some(accuracy) = accuracy {
        w.number_element(Keyword::OperationAccuracy, accuracy);
    }
}

impl ToWkt for AbridgedTransformation {
    fn write_wkt(&self, w: &mut WktWriter) {
        w.open(Keyword::AbridgedTransformation);
        w.quoted(&self.name);
        write_version(w, self.version.as_ref());
        w.write(&self.method);
        w.write_all(&self.parameters);
        w.write_all(&self.ids);
        if let Some(remark) = &self.remark {
            w.text_element(Keyword::Remark, remark);
        }
        w.close();
    }
}

impl ToWkt for CoordinateOperation {
    fn write_wkt(&self, w: &mut WktWriter) {
        w.open(Keyword::CoordinateOperation);
        w.quoted(&self.name);
        write_version(w, self.version.as_ref());
        write_wrapped(w, Keyword::SourceCrs, &self.source);
        write_wrapped(w, Keyword::TargetCrs, &self.target);
        w.write(&self.method);
        w.write_all(&self.parameters);
        if let Some(interpolation) = &self.interpolation {
            write_wrapped(w, Keyword::InterpolationCrs, interpolation);
        }
        write_accuracy(w, self.accuracy);
        write_tail(w, &self.meta);
        w.close();
    }
}

impl ToWkt for PointMotionOperation {
    fn write_wkt(&self, w: &mut WktWriter) {
        w.open(Keyword::PointMotionOperation);
        w.quoted(&self.name);
        write_version(w, self.version.as_ref());
        write_wrapped(w, Keyword::SourceCrs, &self.source);
        w.write(&self.method);
        w.write_all(&self.parameters);
        write_accuracy(w, self.accuracy);
        write_tail(w, &self.meta);
        w.close();
    }
}

impl ToWkt for OperationStep {
    fn write_wkt(&self, w: &mut WktWriter) {
        w.open(Keyword::Step);
        match self {
            Self::Operation(op) => w.write(op),
            Self::PointMotion(op) => w.write(op),
            Self::Conversion(c) => write_conversion(w, Keyword::Conversion, c),
            Self::DerivingConversion(c) => write_conversion(w, Keyword::DerivingConversion, c),
        }
        w.close();
    }
}

impl ToWkt for ConcatenatedOperation {
    fn write_wkt(&self, w: &mut WktWriter) {
        w.open(Keyword::ConcatenatedOperation);
        w.quoted(&self.name);
        write_version(w, self.version.as_ref());
        write_wrapped(w, Keyword::SourceCrs, &self.source);
        write_wrapped(w, Keyword::TargetCrs, &self.target);
        w.write_all(&self.steps);
        write_accuracy(w, self.accuracy);
        write_tail(w, &self.meta);
        w.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Unit;

    #[test]
    fn test_conversion() {
        let conversion = Conversion {
            name: "UTM zone 31N".to_string(),
            method: Method::new("Transverse Mercator"),
            parameters: vec![
                ParameterValue::Value(Parameter::new(
                    "Scale factor at natural origin",
                    0.9996,
                    Some(Unit::new(crate::model::UnitKind::Scale, "unity", 1.0)),
                )),
                ParameterValue::Value(Parameter::new("False easting", 500000.0, Some(Unit::metre()))),
            ],
            ids: Vec::new(),
        };
        assert_eq!(
            conversion.to_wkt(),
            concat!(
                r#"CONVERSION["UTM zone 31N",METHOD["Transverse Mercator"],"#,
                r#"PARAMETER["Scale factor at natural origin",0.9996,SCALEUNIT["unity",1.0]],"#,
                r#"PARAMETER["False easting",500000.0,LENGTHUNIT["metre",1.0]]]"#
            )
        );
    }

    #[test]
    fn test_abridged_parameters_have_no_unit() {
        let transformation = AbridgedTransformation {
            name: "Transformation to WGS84".to_string(),
            version: None,
            method: Method::new("Geocentric translations"),
            parameters: vec![
                ParameterValue::Value(Parameter::new("X-axis translation", -87.0, None)),
                ParameterValue::File(ParameterFile {
                    name: "Latitude difference file".to_string(),
                    file_name: "conus".to_string(),
                    ids: Vec::new(),
                }),
            ],
            ids: Vec::new(),
            remark: None,
        };
        assert_eq!(
            transformation.to_wkt(),
            concat!(
                r#"ABRIDGEDTRANSFORMATION["Transformation to WGS84","#,
                r#"METHOD["Geocentric translations"],PARAMETER["X-axis translation",-87.0],"#,
                r#"PARAMETERFILE["Latitude difference file","conus"]]"#
            )
        );
    }
}
