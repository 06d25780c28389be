//! Board geometry for a Hive client. This crate converts between hex cell
//! addresses and rendering coordinates (2D screen or 3D augmented reality),
//! and picks a sensible spot to show a piece that a player has lifted out of
//! their hand before they've chosen where to drop it.
//!
//! The rules of the game live elsewhere. Nothing in here decides whether a
//! move is legal; sets of legal cells are always handed in by the caller.
//!
//! ```
//! use hive_board::{CellAddress, CellSet, Occupancy, PlacementResolver};
//!
//! let occupancy: Occupancy =
//!     vec![CellAddress::ORIGIN, CellAddress::new_xz(1, 0)]
//!         .into_iter()
//!         .collect();
//! let legal: CellSet = vec![CellAddress::new_xz(-1, 0)].into_iter().collect();
//!
//! let resolver = PlacementResolver::default();
//! let staging = resolver.staging_position(&occupancy, &legal);
//! assert!(!occupancy.contains(staging));
//! // From here, hand the cell to the layout to figure out where to draw it
//! let point = resolver.layout().cell_to_screen(staging);
//! println!("{}", point);
//! ```
//!
//! See [LayoutConfig] and [WorldLayoutConfig] for details on how the
//! projections can be customized.

mod hex;
mod layout;
mod placement;

pub use crate::{
    hex::{
        perimeter, CellAddress, CellDirection, CellIndexSet, CellMap, CellSet,
        CellVector, Occupancy,
    },
    layout::{
        config::{LayoutConfig, WorldLayoutConfig},
        unit::{Point2, Point3},
        BoardLayout, HexProjection, WorldLayout,
    },
    placement::{
        fallback_position, frontier, outer_frontier, resolve_drop,
        PlacementResolver, Viewer,
    },
};
