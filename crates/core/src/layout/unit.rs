use derive_more::{Add, Display, From, Into, Mul, Neg, Sub};
use serde::{Deserialize, Serialize};

/// A 2D point in screen space. See module-level docs in [crate::hex] for a
/// description of what screen space means.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    From,
    Into,
    Neg,
    Add,
    Sub,
    Mul,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", "self.x", "self.y")]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line (L2) distance between two points. This is plain
    /// geometry, it has nothing to do with how many hops apart two cells are.
    pub fn distance_to(self, other: Point2) -> f64 {
        let a: nalgebra::Point2<f64> = self.into();
        let b: nalgebra::Point2<f64> = other.into();
        nalgebra::distance(&a, &b)
    }
}

impl From<Point2> for nalgebra::Point2<f64> {
    fn from(other: Point2) -> Self {
        nalgebra::Point2::new(other.x, other.y)
    }
}

/// A 3D point in world space, for placing pieces in augmented reality. `y` is
/// the vertical axis; the board lies flat on a horizontal plane.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    From,
    Into,
    Neg,
    Add,
    Sub,
    Mul,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.x", "self.y", "self.z")]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Straight-line (L2) distance between two points
    pub fn distance_to(self, other: Point3) -> f64 {
        let a: nalgebra::Point3<f64> = self.into();
        let b: nalgebra::Point3<f64> = other.into();
        nalgebra::distance(&a, &b)
    }
}

impl From<Point3> for nalgebra::Point3<f64> {
    fn from(other: Point3) -> Self {
        nalgebra::Point3::new(other.x, other.y, other.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_distance_2d() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 4.0);
        assert_approx_eq!(a.distance_to(b), 5.0);
        assert_approx_eq!(a.distance_to(a), 0.0);
    }

    #[test]
    fn test_distance_3d() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(3.0, 5.0, 9.0);
        assert_approx_eq!(a.distance_to(b), 7.0);
    }

    #[test]
    fn test_distance_symmetry() {
        let points = [
            Point2::new(0.0, 0.0),
            Point2::new(-1.5, 0.866),
            Point2::new(12.25, -7.5),
            Point2::new(1e-9, 3.0),
        ];
        for a in &points {
            for b in &points {
                assert_eq!(a.distance_to(*b), b.distance_to(*a));
            }
        }

        let a = Point3::new(0.1, 0.0, -0.4);
        let b = Point3::new(-0.3, 0.0, 0.25);
        assert_eq!(a.distance_to(b), b.distance_to(a));
    }
}
