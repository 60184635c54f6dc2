//! Coordinate systems and axes

use super::{ToWkt, WktWriter};
use crate::model::{Axis, CoordinateSystem, Meridian};
use crate::parser::Keyword;

impl ToWkt for Meridian {
    fn write_wkt(&self, w: &mut WktWriter) {
        w.open(Keyword::Meridian);
        w.number(self.longitude);
        w.write(&self.unit);
        w.close();
    }
}

impl ToWkt for Axis {
    fn write_wkt(&self, w: &mut WktWriter) {
        w.open(Keyword::Axis);
        w.quoted(&self.display_name());
        w.word(self.direction.as_wkt());
        w.write_opt(self.meridian.as_ref());
        if let Some(bearing) = self.bearing {
            w.number_element(Keyword::Bearing, bearing);
        }
        if let Some(order) = self.order {
            w.open(Keyword::Order);
            w.integer(i64::from(order));
            w.close();
        }
        w.write_opt(self.unit.as_ref());
        if let Some(min) = self.minimum_value {
            w.number_element(Keyword::AxisMinValue, min);
        }
        if let Some(max) = self.maximum_value {
            w.number_element(Keyword::AxisMaxValue, max);
        }
        if let Some(meaning) = self.range_meaning {
            w.open(Keyword::RangeMeaning);
            w.word(meaning.as_wkt());
            w.close();
        }
        w.write_all(&self.ids);
        w.close();
    }
}

impl ToWkt for CoordinateSystem {
    /// `CS[type,dimension]` followed by its axes and shared unit as siblings
    fn write_wkt(&self, w: &mut WktWriter) {
        w.open(Keyword::Cs);
        w.word(self.cs_type.as_wkt());
        w.integer(i64::from(self.dimension));
        w.write_all(&self.ids);
        w.close();
        w.write_all(&self.axes);
        w.write_opt(self.unit.as_ref());
    }
}
