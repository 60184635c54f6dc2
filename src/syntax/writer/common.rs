//! Identifiers, units, usages and the object tail

use super::{ToWkt, WktWriter};
use crate::model::{
    BoundingBox, Extras, IdValue, Identifier, ObjectMeta, TemporalExtent, TimeValue, Unit,
    UnitKind, Usage, VerticalExtent,
};
use crate::parser::Keyword;

impl ToWkt for IdValue {
    fn write_wkt(&self, w: &mut WktWriter) {
        match self {
            Self::Integer(value) => w.integer(*value),
            Self::Number(value) => w.number(*value),
            Self::Text(text) => w.quoted(text),
        }
    }
}

impl ToWkt for Identifier {
    fn write_wkt(&self, w: &mut WktWriter) {
        w.open(Keyword::Id);
        w.quoted(&self.authority);
        w.write(&self.code);
        w.write_opt(self.version.as_ref());
        if let Some(citation) = &self.citation {
            w.text_element(Keyword::Citation, citation);
        }
        if let Some(uri) = &self.uri {
            w.text_element(Keyword::Uri, uri);
        }
        w.close();
    }
}

pub(super) fn unit_keyword(kind: UnitKind) -> Keyword {
    match kind {
        UnitKind::Angle => Keyword::AngleUnit,
        UnitKind::Length => Keyword::LengthUnit,
        UnitKind::Scale => Keyword::ScaleUnit,
        UnitKind::Parametric => Keyword::ParametricUnit,
        UnitKind::Time => Keyword::TimeUnit,
    }
}

impl ToWkt for Unit {
    fn write_wkt(&self, w: &mut WktWriter) {
        w.open(unit_keyword(self.kind));
        w.quoted(&self.name);
        if let Some(factor) = self.factor {
            w.number(factor);
        }
        w.write_all(&self.ids);
        w.close();
    }
}

impl ToWkt for TimeValue {
    fn write_wkt(&self, w: &mut WktWriter) {
        match self {
            Self::Bare(text) => w.word(text),
            Self::Quoted(text) => w.quoted(text),
        }
    }
}

impl ToWkt for BoundingBox {
    fn write_wkt(&self, w: &mut WktWriter) {
        w.open(Keyword::BBox);
        w.number(self.south);
        w.number(self.west);
        w.number(self.north);
        w.number(self.east);
        w.close();
    }
}

impl ToWkt for VerticalExtent {
    fn write_wkt(&self, w: &mut WktWriter) {
        w.open(Keyword::VerticalExtent);
        w.number(self.minimum);
        w.number(self.maximum);
        w.write_opt(self.unit.as_ref());
        w.close();
    }
}

impl ToWkt for TemporalExtent {
    fn write_wkt(&self, w: &mut WktWriter) {
        w.open(Keyword::TimeExtent);
        w.write(&self.start);
        w.write(&self.end);
        w.close();
    }
}

impl ToWkt for Usage {
    fn write_wkt(&self, w: &mut WktWriter) {
        w.open(Keyword::Usage);
        if let Some(scope) = &self.scope {
            w.text_element(Keyword::Scope, scope);
        }
        if let Some(area) = &self.extent.area {
            w.text_element(Keyword::Area, area);
        }
        w.write_opt(self.extent.bbox.as_ref());
        w.write_opt(self.extent.vertical.as_ref());
        w.write_opt(self.extent.temporal.as_ref());
        w.close();
    }
}

/// `USAGE*`, `ID*`, `{REMARK}`.
///
/// A non-empty extras bag is carried in the remark as an encoded list, with
/// the plain remark (if any) stored under `REMARK` ahead of the extras.
pub(super) fn write_tail(w: &mut WktWriter, meta: &ObjectMeta) {
    w.write_all(&meta.usages);
    w.write_all(&meta.ids);
    if meta.extras.is_empty() {
        if let Some(remark) = &meta.remark {
            w.text_element(Keyword::Remark, remark);
        }
        return;
    }

    let bag: Extras = meta
        .remark
        .iter()
        .map(|remark| ("REMARK", remark.as_str()))
        .chain(meta.extras.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .collect();
    w.text_element(Keyword::Remark, &bag.encode());
}
