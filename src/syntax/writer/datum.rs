//! Reference frames, ensembles and their components

use super::{ToWkt, WktWriter};
use crate::model::{
    DatumEnsemble, DatumOrEnsemble, DeformationModel, Dynamic, Ellipsoid, EngineeringDatum,
    EnsembleMember, GeodeticEnsemble, GeodeticReferenceFrame, ParametricDatum, PrimeMeridian,
    ReferenceFrame, TemporalDatum, VerticalEnsemble, VerticalReferenceFrame,
};
use crate::parser::Keyword;

impl ToWkt for Ellipsoid {
    fn write_wkt(&self, w: &mut WktWriter) {
        w.open(Keyword::Ellipsoid);
        w.quoted(&self.name);
        w.number(self.semi_major_axis);
        w.number(self.inverse_flattening);
        w.write_opt(self.unit.as_ref());
        w.write_all(&self.ids);
        w.close();
    }
}

impl ToWkt for PrimeMeridian {
    fn write_wkt(&self, w: &mut WktWriter) {
        w.open(Keyword::PrimeMeridian);
        w.quoted(&self.name);
        w.number(self.longitude);
        w.write_opt(self.unit.as_ref());
        w.write_all(&self.ids);
        w.close();
    }
}

impl ToWkt for DeformationModel {
    fn write_wkt(&self, w: &mut WktWriter) {
        w.open(Keyword::Model);
        w.quoted(&self.name);
        w.write_all(&self.ids);
        w.close();
    }
}

impl ToWkt for Dynamic {
    fn write_wkt(&self, w: &mut WktWriter) {
        w.open(Keyword::Dynamic);
        w.number_element(Keyword::FrameEpoch, self.frame_epoch);
        w.write_opt(self.model.as_ref());
        w.close();
    }
}

fn write_anchor(w: &mut WktWriter, anchor: Option<&String>, epoch: Option<f64>) {
    if let Some(anchor) = anchor {
        w.text_element(Keyword::Anchor, anchor);
    }
    if let Some(epoch) = epoch {
        w.number_element(Keyword::AnchorEpoch, epoch);
    }
}

impl ToWkt for GeodeticReferenceFrame {
    /// The datum element only; its prime meridian is a sibling written by
    /// [`DatumOrEnsemble`]
    fn write_wkt(&self, w: &mut WktWriter) {
        w.open(Keyword::Datum);
        w.quoted(&self.name);
        w.write(&self.ellipsoid);
        write_anchor(w, self.anchor.as_ref(), self.anchor_epoch);
        w.write_all(&self.ids);
        w.close();
    }
}

impl ToWkt for VerticalReferenceFrame {
    fn write_wkt(&self, w: &mut WktWriter) {
        w.open(Keyword::VDatum);
        w.quoted(&self.name);
        write_anchor(w, self.anchor.as_ref(), self.anchor_epoch);
        w.write_all(&self.ids);
        w.close();
    }
}

impl ToWkt for EngineeringDatum {
    fn write_wkt(&self, w: &mut WktWriter) {
        w.open(Keyword::EDatum);
        w.quoted(&self.name);
        write_anchor(w, self.anchor.as_ref(), None);
        w.write_all(&self.ids);
        w.close();
    }
}

impl ToWkt for ParametricDatum {
    fn write_wkt(&self, w: &mut WktWriter) {
        w.open(Keyword::PDatum);
        w.quoted(&self.name);
        write_anchor(w, self.anchor.as_ref(), None);
        w.write_all(&self.ids);
        w.close();
    }
}

impl ToWkt for TemporalDatum {
    fn write_wkt(&self, w: &mut WktWriter) {
        w.open(Keyword::TDatum);
        w.quoted(&self.name);
        if let Some(calendar) = &self.calendar {
            w.text_element(Keyword::Calendar, calendar);
        }
        if let Some(origin) = &self.origin {
            w.open(Keyword::TimeOrigin);
            w.write(origin);
            w.close();
        }
        w.write_all(&self.ids);
        w.close();
    }
}

impl ToWkt for ReferenceFrame {
    fn write_wkt(&self, w: &mut WktWriter) {
        match self {
            Self::Geodetic(d) => w.write(d),
            Self::Vertical(d) => w.write(d),
            Self::Engineering(d) => w.write(d),
            Self::Parametric(d) => w.write(d),
            Self::Temporal(d) => w.write(d),
        }
    }
}

impl ToWkt for EnsembleMember {
    fn write_wkt(&self, w: &mut WktWriter) {
        w.open(Keyword::Member);
        w.quoted(&self.name);
        w.write_all(&self.ids);
        w.close();
    }
}

impl ToWkt for GeodeticEnsemble {
    fn write_wkt(&self, w: &mut WktWriter) {
        w.open(Keyword::Ensemble);
        w.quoted(&self.name);
        w.write_all(&self.members);
        w.write(&self.ellipsoid);
        w.number_element(Keyword::EnsembleAccuracy, self.accuracy);
        w.write_all(&self.ids);
        w.close();
    }
}

impl ToWkt for VerticalEnsemble {
    fn write_wkt(&self, w: &mut WktWriter) {
        w.open(Keyword::Ensemble);
        w.quoted(&self.name);
        w.write_all(&self.members);
        w.number_element(Keyword::EnsembleAccuracy, self.accuracy);
        w.write_all(&self.ids);
        w.close();
    }
}

impl ToWkt for DatumOrEnsemble {
    /// The datum or ensemble, then its `PRIMEM` when it has one
    fn write_wkt(&self, w: &mut WktWriter) {
        match self {
            Self::Frame(frame) => w.write(frame),
            Self::Ensemble(DatumEnsemble::Geodetic(e)) => w.write(e),
            Self::Ensemble(DatumEnsemble::Vertical(e)) => w.write(e),
        }
        w.write_opt(self.prime_meridian());
    }
}
