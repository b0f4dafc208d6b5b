use crate::geometry::geo_enums::GeoRelation;
use crate::geometry::geo_traits::{CollidesWith, Contains};
use anyhow::Result;
use anyhow::ensure;
use std::fmt::{Display, Formatter};

/// Axis-aligned rectangle on the integer millimetre grid.
/// `(x, y)` is the bottom-left corner, `w` and `h` are strictly positive.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Copy)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn try_new(x: u32, y: u32, w: u32, h: u32) -> Result<Self> {
        ensure!(
            w > 0 && h > 0,
            "invalid rectangle, x: {x}, y: {y}, w: {w}, h: {h}"
        );
        ensure!(
            x.checked_add(w).is_some() && y.checked_add(h).is_some(),
            "rectangle exceeds the coordinate range, x: {x}, y: {y}, w: {w}, h: {h}"
        );
        Ok(Rect { x, y, w, h })
    }

    /// Builds the rectangle spanning `[x_min, x_max] x [y_min, y_max]`.
    /// Returns `None` if it would be degenerate (zero or negative width or height).
    pub fn from_extent(x_min: u32, y_min: u32, x_max: u32, y_max: u32) -> Option<Self> {
        match x_min < x_max && y_min < y_max {
            true => Some(Rect {
                x: x_min,
                y: y_min,
                w: x_max - x_min,
                h: y_max - y_min,
            }),
            false => None,
        }
    }

    #[inline(always)]
    pub fn x_max(&self) -> u32 {
        self.x + self.w
    }

    #[inline(always)]
    pub fn y_max(&self) -> u32 {
        self.y + self.h
    }

    pub fn area(&self) -> u64 {
        self.w as u64 * self.h as u64
    }

    /// Returns a copy of `self` grown by `dx` towards +x and `dy` towards +y.
    /// The anchor stays in place.
    pub fn grow(self, dx: u32, dy: u32) -> Self {
        Rect {
            w: self.w.saturating_add(dx),
            h: self.h.saturating_add(dy),
            ..self
        }
    }

    /// Returns the geometric relation between `self` and another [`Rect`].
    /// Optimized for `GeoRelation::Disjoint`
    #[inline(always)]
    pub fn relation_to(&self, other: &Rect) -> GeoRelation {
        if !self.collides_with(other) {
            return GeoRelation::Disjoint;
        }
        if self.contains(other) {
            return GeoRelation::Surrounding;
        }
        if other.contains(self) {
            return GeoRelation::Enclosed;
        }
        GeoRelation::Intersecting
    }

    /// Length of the overlap between the x-projections of `self` and `other`, 0 if they are disjoint.
    pub fn x_overlap(&self, other: &Rect) -> u32 {
        u32::min(self.x_max(), other.x_max()).saturating_sub(u32::max(self.x, other.x))
    }

    /// Length of the overlap between the y-projections of `self` and `other`, 0 if they are disjoint.
    pub fn y_overlap(&self, other: &Rect) -> u32 {
        u32::min(self.y_max(), other.y_max()).saturating_sub(u32::max(self.y, other.y))
    }
}

impl CollidesWith<Rect> for Rect {
    #[inline(always)]
    fn collides_with(&self, other: &Rect) -> bool {
        self.x < other.x_max()
            && other.x < self.x_max()
            && self.y < other.y_max()
            && other.y < self.y_max()
    }
}

impl Contains<Rect> for Rect {
    #[inline(always)]
    fn contains(&self, other: &Rect) -> bool {
        self.x <= other.x
            && self.y <= other.y
            && other.x_max() <= self.x_max()
            && other.y_max() <= self.y_max()
    }
}

impl Display for Rect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {}x{})", self.x, self.y, self.w, self.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: u32, y: u32, w: u32, h: u32) -> Rect {
        Rect::try_new(x, y, w, h).unwrap()
    }

    #[test]
    fn degenerate_rectangles_are_rejected() {
        assert!(Rect::try_new(0, 0, 0, 10).is_err());
        assert!(Rect::try_new(0, 0, 10, 0).is_err());
        assert!(Rect::try_new(u32::MAX, 0, 1, 1).is_err());
        assert!(Rect::from_extent(5, 5, 5, 10).is_none());
        assert_eq!(Rect::from_extent(1, 2, 4, 6), Some(r(1, 2, 3, 4)));
    }

    #[test]
    fn containment_is_closed() {
        let outer = r(0, 0, 100, 100);
        assert!(outer.contains(&outer));
        assert!(outer.contains(&r(0, 0, 100, 1)));
        assert!(outer.contains(&r(40, 40, 60, 60)));
        assert!(!outer.contains(&r(40, 40, 61, 60)));
        assert!(!r(1, 0, 99, 100).contains(&outer));
    }

    #[test]
    fn touching_edges_do_not_collide() {
        let a = r(0, 0, 50, 50);
        assert!(!a.collides_with(&r(50, 0, 10, 10)));
        assert!(!a.collides_with(&r(0, 50, 10, 10)));
        assert!(!a.collides_with(&r(50, 50, 10, 10)));
        assert!(a.collides_with(&r(49, 49, 10, 10)));
    }

    #[test]
    fn relations() {
        let a = r(0, 0, 10, 10);
        assert_eq!(a.relation_to(&r(2, 2, 3, 3)), GeoRelation::Surrounding);
        assert_eq!(r(2, 2, 3, 3).relation_to(&a), GeoRelation::Enclosed);
        assert_eq!(a.relation_to(&r(5, 5, 10, 10)), GeoRelation::Intersecting);
        assert_eq!(a.relation_to(&r(10, 0, 10, 10)), GeoRelation::Disjoint);
    }

    #[test]
    fn overlaps() {
        let a = r(0, 0, 10, 10);
        let b = r(6, 8, 10, 10);
        assert_eq!(a.x_overlap(&b), 4);
        assert_eq!(a.y_overlap(&b), 2);
        assert_eq!(a.x_overlap(&r(20, 0, 1, 1)), 0);
        assert_eq!(a.grow(3, 5), r(0, 0, 13, 15));
    }
}
