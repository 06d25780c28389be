//! Conversions between cell addresses and continuous rendering space. There
//! are two render targets, each with its own scale:
//!
//! - [BoardLayout] projects onto a 2D screen plane
//! - [WorldLayout] projects onto a flat horizontal plane in a 3D world
//!
//! Both use the same axial formula. Going from a cell to a point is exact;
//! going back the other way has to recover integers from floats, and the two
//! targets do that differently (see each type for details).

pub mod config;
pub mod unit;

use crate::{
    hex::CellAddress,
    layout::{
        config::{LayoutConfig, WorldLayoutConfig},
        unit::{Point2, Point3},
    },
};
use anyhow::Context;
use log::debug;
use validator::Validate;

/// sqrt(3). `f64::consts::SQRT_3` isn't stable yet.
const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Position of a cell's center on a grid of unit hexes (center-to-vertex
/// distance of 1), before any scaling or offset
fn axial_to_plane(cell: CellAddress) -> (f64, f64) {
    let q = f64::from(cell.q());
    let r = f64::from(cell.r());
    (1.5 * q, SQRT_3 / 2.0 * q + SQRT_3 * r)
}

/// Inverse of [axial_to_plane], giving fractional axial `(q, r)` for any
/// point on the unit grid
fn plane_to_axial(x: f64, y: f64) -> (f64, f64) {
    let q = (2.0 * x) / 3.0;
    let r = (y / SQRT_3) - q / 2.0;
    (q, r)
}

/// Any target that cells can be projected onto and recovered from
pub trait HexProjection {
    /// The kind of point this projection produces
    type Point: Copy;

    /// Get the point at the center of a cell
    fn to_point(&self, cell: CellAddress) -> Self::Point;

    /// Get the cell that a point falls in. Every point maps to some cell, so
    /// this can't fail.
    fn to_cell(&self, point: Self::Point) -> CellAddress;
}

/// A projection of the board onto a 2D screen plane. A layout is created
/// from a [LayoutConfig], which is validated up front so that every
/// conversion afterwards is infallible.
///
/// Config options cannot be changed after creating a layout, but layouts are
/// very cheap to create so if you need to change the config, just create a
/// new one.
#[derive(Clone, Debug, Default)]
pub struct BoardLayout {
    config: LayoutConfig,
}

impl BoardLayout {
    /// Initialize a new layout with the given options. Returns an error if
    /// the config is invalid.
    pub fn new(config: LayoutConfig) -> anyhow::Result<Self> {
        config.validate().context("invalid layout config")?;
        debug!("Created board layout with config {:?}", config);
        Ok(Self { config })
    }

    /// Get a reference to the config that this layout uses
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Convert a cell to the screen point at its center:
    ///
    /// ```text
    /// px = ox + sx * (1.5 * q)
    /// py = oy + sy * (sqrt(3)/2 * q + sqrt(3) * r)
    /// ```
    pub fn cell_to_screen(&self, cell: CellAddress) -> Point2 {
        let (x, y) = axial_to_plane(cell);
        Point2::new(
            self.config.offset_x + self.config.scale_x * x,
            self.config.offset_y + self.config.scale_y * y,
        )
    }

    /// Convert a screen point back to a cell. Fractional axial coordinates
    /// are **truncated toward zero**, so this only lands on the right cell
    /// when the point sits exactly on a cell center, or between the center
    /// and the origin on both axes. Points coming from the UI should already
    /// be snapped to a cell center.
    ///
    /// Points beyond the edge of the board land on the nearest edge cell.
    pub fn screen_to_cell(&self, point: Point2) -> CellAddress {
        let x = (point.x - self.config.offset_x) / self.config.scale_x;
        let y = (point.y - self.config.offset_y) / self.config.scale_y;
        let (q, r) = plane_to_axial(x, y);
        // `as` truncates toward zero (and saturates on overflow)
        CellAddress::saturating_xz(q as i32, r as i32)
    }

    /// Straight-line distance between the centers of two cells, in screen
    /// units
    pub fn cell_distance(&self, a: CellAddress, b: CellAddress) -> f64 {
        self.cell_to_screen(a).distance_to(self.cell_to_screen(b))
    }
}

impl HexProjection for BoardLayout {
    type Point = Point2;

    fn to_point(&self, cell: CellAddress) -> Point2 {
        self.cell_to_screen(cell)
    }

    fn to_cell(&self, point: Point2) -> CellAddress {
        self.screen_to_cell(point)
    }
}

/// A projection of the board onto a horizontal plane in a 3D world, for
/// augmented reality. The board lies flat at `y = 0`.
#[derive(Clone, Debug, Default)]
pub struct WorldLayout {
    config: WorldLayoutConfig,
}

impl WorldLayout {
    /// The world-space height of the board plane
    pub const PLANE_HEIGHT: f64 = 0.0;

    /// Initialize a new layout with the given options. Returns an error if
    /// the config is invalid.
    pub fn new(config: WorldLayoutConfig) -> anyhow::Result<Self> {
        config.validate().context("invalid world layout config")?;
        debug!("Created world layout with config {:?}", config);
        Ok(Self { config })
    }

    /// Get a reference to the config that this layout uses
    pub fn config(&self) -> &WorldLayoutConfig {
        &self.config
    }

    /// Convert a cell to the world point at its center. Same formula as
    /// [BoardLayout::cell_to_screen], laid out on the `x`/`z` plane.
    pub fn cell_to_world(&self, cell: CellAddress) -> Point3 {
        let (x, z) = axial_to_plane(cell);
        Point3::new(
            self.config.scale_x * x,
            Self::PLANE_HEIGHT,
            self.config.scale_z * z,
        )
    }

    /// Convert a world point back to a cell. The vertical component is
    /// ignored. Points here come from physical tracking and are never exact,
    /// so fractional axial coordinates are **rounded to the nearest integer**
    /// rather than truncated. Points beyond the edge of the board land on
    /// the nearest edge cell.
    pub fn world_to_cell(&self, point: Point3) -> CellAddress {
        let x = point.x / self.config.scale_x;
        let z = point.z / self.config.scale_z;
        let (q, r) = plane_to_axial(x, z);
        CellAddress::saturating_xz(q.round() as i32, r.round() as i32)
    }
}

impl HexProjection for WorldLayout {
    type Point = Point3;

    fn to_point(&self, cell: CellAddress) -> Point3 {
        self.cell_to_world(cell)
    }

    fn to_cell(&self, point: Point3) -> CellAddress {
        self.world_to_cell(point)
    }
}
