use serde::{Deserialize, Serialize};
use validator::Validate;

/// Configuration for projecting the board onto a 2D screen plane. These
/// options only affect where cells are drawn (and which cell a touch lands
/// on), they have no bearing on the board itself.
///
/// A cell's screen position is `offset + scale * axial_position`, where the
/// axial position of a cell is its center on a grid of unit-sized hexes. See
/// [BoardLayout](crate::BoardLayout) for the exact formula.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "bevy", derive(bevy_ecs::system::Resource))]
#[serde(default)]
pub struct LayoutConfig {
    /// Horizontal scale factor. With a scale of 1.0, the distance from the
    /// center of a cell to one of its vertices is one screen unit.
    #[validate(range(min = 0.001))]
    pub scale_x: f64,

    /// Vertical scale factor. Usually the same as `scale_x`, but it can be
    /// tuned separately to squash the board for a tilted-camera look.
    #[validate(range(min = 0.001))]
    pub scale_y: f64,

    /// Screen x of the center of the origin cell
    pub offset_x: f64,

    /// Screen y of the center of the origin cell
    pub offset_y: f64,
}

/// Configuration for projecting the board onto a horizontal plane in a 3D
/// world, for augmented reality. The board always lies flat at world `y = 0`,
/// relative to whatever anchor the AR session places it on.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "bevy", derive(bevy_ecs::system::Resource))]
#[serde(default)]
pub struct WorldLayoutConfig {
    /// Scale along the world x axis, in world units (meters for most AR
    /// frameworks) per unit hex
    #[validate(range(min = 0.001))]
    pub scale_x: f64,

    /// Scale along the world z axis. Defaults to the same value as `scale_x`
    /// so that cells come out as regular hexagons.
    #[validate(range(min = 0.001))]
    pub scale_z: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            scale_x: 1.0,
            scale_y: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl Default for WorldLayoutConfig {
    fn default() -> Self {
        // Roughly the size of a physical Hive tile
        let scale = 0.03;
        Self {
            scale_x: scale,
            scale_z: scale,
        }
    }
}
