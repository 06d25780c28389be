//! This module holds basic types and data structures related to the hexagon
//! grid that a Hive board is laid out on.
//!
//! ## Coordinate Systems
//!
//! There are two kinds of coordinates involved in placing a piece on the
//! board:
//!
//! ### Cell Coordinates
//!
//! Cell coordinates (AKA cube coordinates) address a single hex cell on the
//! board. The system is the [cube coordinate system defined by Amit
//! Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-cube).
//!
//! Each coordinate has three components (`x`, `y`, and `z`). **For any cell,
//! all three components are integers and `x + y + z = 0`.** The board itself
//! is two-dimensional (pieces stack vertically, but a stack still occupies a
//! single cell), and the third component only exists to make hex math
//! simpler.
//!
//! The `x` and `z` components double as the axial `q` and `r` coordinates.
//! Since the board is unbounded (a Hive grows in whatever direction players
//! place pieces), there is no notion of a board radius here.
//!
//! ### Screen/World Coordinates
//!
//! Cells get rendered into a continuous space: either a 2D screen plane, or a
//! 3D world for augmented reality, where the board lies flat on the
//! horizontal plane. The conversion between cell coordinates and these spaces
//! lives in [crate::layout]. Hexes are "flat topped", and screen `y` grows
//! downward, the way most 2D toolkits lay out their canvas:
//!
//! +-------------------+
//! |        -y         |
//! |         ^         |
//! |         |         |
//! | -x <----o----> +x |
//! |         |         |
//! |         v         |
//! |        +y         |
//! +-------------------+
//!
//! In this diagram `o` represents the cell `(0, 0, 0)`.

mod data_structure;
mod unit;

pub use self::{data_structure::*, unit::*};
