//! Coordinate systems and axes

use super::{Identifier, Unit};

macro_rules! wkt_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Canonical WKT spelling
            pub fn as_wkt(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }

            /// Case-insensitive lookup of a WKT spelling
            pub fn from_wkt(text: &str) -> Option<Self> {
                $(if text.eq_ignore_ascii_case($text) {
                    return Some(Self::$variant);
                })+
                None
            }
        }
    };
}

wkt_enum! {
    /// `CS[type,dimension]`
    CsType {
        Affine => "affine",
        Cartesian => "Cartesian",
        Cylindrical => "cylindrical",
        Ellipsoidal => "ellipsoidal",
        Linear => "linear",
        Ordinal => "ordinal",
        Parametric => "parametric",
        Polar => "polar",
        Spherical => "spherical",
        TemporalCount => "temporalCount",
        TemporalDateTime => "temporalDateTime",
        TemporalMeasure => "temporalMeasure",
        Vertical => "vertical",
    }
}

impl CsType {
    /// Count and measure systems hold exactly one axis
    pub fn is_single_axis_temporal(&self) -> bool {
        matches!(self, Self::TemporalCount | Self::TemporalMeasure)
    }

    pub fn is_temporal(&self) -> bool {
        matches!(
            self,
            Self::TemporalCount | Self::TemporalDateTime | Self::TemporalMeasure
        )
    }
}

wkt_enum! {
    AxisDirection {
        North => "north",
        NorthNorthEast => "northNorthEast",
        NorthEast => "northEast",
        EastNorthEast => "eastNorthEast",
        East => "east",
        EastSouthEast => "eastSouthEast",
        SouthEast => "southEast",
        SouthSouthEast => "southSouthEast",
        South => "south",
        SouthSouthWest => "southSouthWest",
        SouthWest => "southWest",
        WestSouthWest => "westSouthWest",
        West => "west",
        WestNorthWest => "westNorthWest",
        NorthWest => "northWest",
        NorthNorthWest => "northNorthWest",
        GeocentricX => "geocentricX",
        GeocentricY => "geocentricY",
        GeocentricZ => "geocentricZ",
        Up => "up",
        Down => "down",
        Forward => "forward",
        Aft => "aft",
        Port => "port",
        Starboard => "starboard",
        Clockwise => "clockwise",
        CounterClockwise => "counterClockwise",
        ColumnPositive => "columnPositive",
        ColumnNegative => "columnNegative",
        RowPositive => "rowPositive",
        RowNegative => "rowNegative",
        DisplayRight => "displayRight",
        DisplayLeft => "displayLeft",
        DisplayUp => "displayUp",
        DisplayDown => "displayDown",
        Future => "future",
        Past => "past",
        Towards => "towards",
        AwayFrom => "awayFrom",
        Unspecified => "unspecified",
    }
}

impl AxisDirection {
    /// Read a direction, accepting the legacy `OTHER`
    pub fn from_wkt_lenient(text: &str) -> Option<Self> {
        if text.eq_ignore_ascii_case("other") {
            return Some(Self::Unspecified);
        }
        Self::from_wkt(text)
    }

    /// Directions that may carry a `MERIDIAN` clause
    pub fn allows_meridian(&self) -> bool {
        matches!(self, Self::North | Self::South)
    }

    /// Directions that require a `BEARING` clause in typed coordinate systems
    pub fn requires_bearing(&self) -> bool {
        matches!(self, Self::Clockwise | Self::CounterClockwise)
    }
}

wkt_enum! {
    RangeMeaning {
        Exact => "exact",
        Wraparound => "wraparound",
    }
}

/// `MERIDIAN[longitude,ANGLEUNIT[..]]`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Meridian {
    pub longitude: f64,
    pub unit: Unit,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Axis {
    pub name: String,
    pub abbreviation: Option<String>,
    pub direction: AxisDirection,
    pub meridian: Option<Meridian>,
    pub bearing: Option<f64>,
    pub order: Option<u32>,
    pub unit: Option<Unit>,
    pub minimum_value: Option<f64>,
    pub maximum_value: Option<f64>,
    pub range_meaning: Option<RangeMeaning>,
    pub ids: Vec<Identifier>,
}

impl Axis {
    pub fn new(name: impl Into<String>, direction: AxisDirection) -> Self {
        Self {
            name: name.into(),
            abbreviation: None,
            direction,
            meridian: None,
            bearing: None,
            order: None,
            unit: None,
            minimum_value: None,
            maximum_value: None,
            range_meaning: None,
            ids: Vec::new(),
        }
    }

    pub fn with_abbreviation(mut self, abbreviation: impl Into<String>) -> Self {
        self.abbreviation = Some(abbreviation.into());
        self
    }

    /// The quoted text of `AXIS`: `name (abbrev)`, `(abbrev)` or `name`
    pub fn display_name(&self) -> String {
        match (&self.abbreviation, self.name.is_empty()) {
            (Some(abbrev), true) => format!("({abbrev})"),
            (Some(abbrev), false) => format!("{} ({abbrev})", self.name),
            (None, _) => self.name.clone(),
        }
    }
}

/// `CS[type,dimension]` plus the axes and optional unit that follow it
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoordinateSystem {
    pub cs_type: CsType,
    pub dimension: u32,
    pub ids: Vec<Identifier>,
    pub axes: Vec<Axis>,
    pub unit: Option<Unit>,
}

impl CoordinateSystem {
    /// Build a system whose dimension matches its axes
    pub fn new(cs_type: CsType, axes: Vec<Axis>, unit: Option<Unit>) -> Self {
        Self {
            cs_type,
            dimension: axes.len() as u32,
            ids: Vec::new(),
            axes,
            unit,
        }
    }
}
