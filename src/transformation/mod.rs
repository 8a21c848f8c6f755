//! Boolean operations between polygons.

pub use self::polygon_boolean::{
    polygons_boolean, polygons_boolean_with_tolerances, BooleanOp, PolygonBooleanError,
    PolygonBooleanTolerances,
};

mod polygon_boolean;
