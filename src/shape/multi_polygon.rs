//! Ordered collection of polygons produced by a boolean operation.

use crate::math::Real;
use crate::shape::Polygon;
use std::ops::Index;

/// An ordered collection of independently valid polygon rings.
///
/// This is the result type of the boolean operations: it may be empty
/// (e.g. the intersection of two disjoint polygons), and the order of its
/// rings carries no geometric meaning but is deterministic for a given
/// input. Rings are never deduplicated or merged after the fact.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
}

impl MultiPolygon {
    /// Creates an empty multi-polygon.
    pub fn new() -> Self {
        Self {
            polygons: Vec::new(),
        }
    }

    /// The number of rings in this multi-polygon.
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    /// Whether this multi-polygon contains no ring at all.
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// The rings of this multi-polygon.
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Iterates over the rings of this multi-polygon.
    pub fn iter(&self) -> std::slice::Iter<'_, Polygon> {
        self.polygons.iter()
    }

    /// The sum of the areas of every ring of this multi-polygon.
    pub fn area(&self) -> Real {
        self.polygons.iter().map(Polygon::area).sum()
    }
}

impl From<Vec<Polygon>> for MultiPolygon {
    fn from(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }
}

impl FromIterator<Polygon> for MultiPolygon {
    fn from_iter<I: IntoIterator<Item = Polygon>>(iter: I) -> Self {
        Self {
            polygons: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for MultiPolygon {
    type Output = Polygon;

    fn index(&self, i: usize) -> &Polygon {
        &self.polygons[i]
    }
}

impl IntoIterator for MultiPolygon {
    type Item = Polygon;
    type IntoIter = std::vec::IntoIter<Polygon>;

    fn into_iter(self) -> Self::IntoIter {
        self.polygons.into_iter()
    }
}

impl<'a> IntoIterator for &'a MultiPolygon {
    type Item = &'a Polygon;
    type IntoIter = std::slice::Iter<'a, Polygon>;

    fn into_iter(self) -> Self::IntoIter {
        self.polygons.iter()
    }
}
