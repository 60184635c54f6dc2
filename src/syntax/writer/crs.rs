//! Coordinate reference systems

use super::common::write_tail;
use super::operation::{write_conversion, write_wrapped};
use super::{ToWkt, WktWriter};
use crate::model::{
    BaseCrs, BaseCrsKind, BaseDatumCrs, BaseProjectedCrs, BoundCrs, CompoundCrs,
    CoordinateMetadata, Crs, DerivedCrs, DerivedCrsKind, ProjectedCrs, SingleCrs,
};
use crate::parser::Keyword;

fn base_keyword(kind: BaseCrsKind) -> Keyword {
    match kind {
        BaseCrsKind::Geodetic => Keyword::BaseGeodCrs,
        BaseCrsKind::Geographic => Keyword::BaseGeogCrs,
        BaseCrsKind::Vertical => Keyword::BaseVertCrs,
        BaseCrsKind::Engineering => Keyword::BaseEngCrs,
        BaseCrsKind::Parametric => Keyword::BaseParamCrs,
        BaseCrsKind::Temporal => Keyword::BaseTimeCrs,
    }
}

fn derived_keyword(kind: DerivedCrsKind) -> Keyword {
    match kind {
        DerivedCrsKind::Geodetic => Keyword::GeodCrs,
        DerivedCrsKind::Geographic => Keyword::GeogCrs,
        DerivedCrsKind::Projected => Keyword::DerivedProjCrs,
        DerivedCrsKind::Vertical => Keyword::VertCrs,
        DerivedCrsKind::Engineering => Keyword::EngCrs,
        DerivedCrsKind::Parametric => Keyword::ParametricCrs,
        DerivedCrsKind::Temporal => Keyword::TimeCrs,
    }
}

fn write_single(w: &mut WktWriter, keyword: Keyword, crs: &SingleCrs) {
    w.open(keyword);
    w.quoted(&crs.name);
    w.write_opt(crs.dynamic.as_ref());
    w.write(&crs.datum);
    w.write(&crs.cs);
    write_tail(w, &crs.meta);
    w.close();
}

impl ToWkt for BaseDatumCrs {
    fn write_wkt(&self, w: &mut WktWriter) {
        w.open(base_keyword(self.kind));
        w.quoted(&self.name);
        w.write_opt(self.dynamic.as_ref());
        w.write(&self.datum);
        w.write_opt(self.unit.as_ref());
        w.write_all(&self.ids);
        w.close();
    }
}

impl ToWkt for BaseProjectedCrs {
    fn write_wkt(&self, w: &mut WktWriter) {
        w.open(Keyword::BaseProjCrs);
        w.quoted(&self.name);
        w.write(&self.base);
        w.write(&self.conversion);
        w.write_all(&self.ids);
        w.close();
    }
}

impl ToWkt for BaseCrs {
    fn write_wkt(&self, w: &mut WktWriter) {
        match self {
            Self::Datum(base) => w.write(base),
            Self::Projected(base) => w.write(base.as_ref()),
        }
    }
}

impl ToWkt for ProjectedCrs {
    fn write_wkt(&self, w: &mut WktWriter) {
        w.open(Keyword::ProjCrs);
        w.quoted(&self.name);
        w.write(&self.base);
        w.write(&self.conversion);
        w.write(&self.cs);
        write_tail(w, &self.meta);
        w.close();
    }
}

impl ToWkt for DerivedCrs {
    fn write_wkt(&self, w: &mut WktWriter) {
        w.open(derived_keyword(self.kind));
        w.quoted(&self.name);
        w.write(&self.base);
        write_conversion(w, Keyword::DerivingConversion, &self.conversion);
        w.write(&self.cs);
        write_tail(w, &self.meta);
        w.close();
    }
}

impl ToWkt for CompoundCrs {
    fn write_wkt(&self, w: &mut WktWriter) {
        w.open(Keyword::CompoundCrs);
        w.quoted(&self.name);
        w.write_all(&self.components);
        write_tail(w, &self.meta);
        w.close();
    }
}

impl ToWkt for BoundCrs {
    fn write_wkt(&self, w: &mut WktWriter) {
        w.open(Keyword::BoundCrs);
        write_wrapped(w, Keyword::SourceCrs, &self.source);
        write_wrapped(w, Keyword::TargetCrs, &self.target);
        w.write(&self.transformation);
        write_tail(w, &self.meta);
        w.close();
    }
}

impl ToWkt for CoordinateMetadata {
    fn write_wkt(&self, w: &mut WktWriter) {
        w.open(Keyword::CoordinateMetadata);
        w.write(self.crs.as_ref());
        if let Some(epoch) = self.epoch {
            w.number_element(Keyword::Epoch, epoch);
        }
        w.close();
    }
}

impl ToWkt for Crs {
    fn write_wkt(&self, w: &mut WktWriter) {
        match self {
            Self::Geodetic(c) => write_single(w, Keyword::GeodCrs, c),
            Self::Geographic(c) => write_single(w, Keyword::GeogCrs, c),
            Self::Vertical(c) => write_single(w, Keyword::VertCrs, c),
            Self::Engineering(c) => write_single(w, Keyword::EngCrs, c),
            Self::Parametric(c) => write_single(w, Keyword::ParametricCrs, c),
            Self::Temporal(c) => write_single(w, Keyword::TimeCrs, c),
            Self::Projected(c) => w.write(c),
            Self::Derived(c) => w.write(c),
            Self::Compound(c) => w.write(c),
            Self::Bound(c) => w.write(c),
            Self::CoordinateMetadata(c) => w.write(c),
            Self::CoordinateOperation(c) => w.write(c),
            Self::PointMotionOperation(c) => w.write(c),
            Self::ConcatenatedOperation(c) => w.write(c),
        }
    }
}
