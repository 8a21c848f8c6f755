//! Shapes supported by polyclip2d.

pub use self::multi_polygon::MultiPolygon;
pub use self::polygon::{Polygon, PolygonError, WindingOrder};
pub use self::segment::{Segment, SegmentPointLocation};

mod multi_polygon;
mod polygon;
mod segment;
