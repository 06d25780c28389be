//! Collections keyed by [CellAddress], plus the occupancy view of a board.

use crate::hex::CellAddress;
use fnv::FnvBuildHasher;
use indexmap::IndexSet;
use std::collections::{HashMap, HashSet};

/// A set of cells
pub type CellSet = HashSet<CellAddress, FnvBuildHasher>;
/// A map of cells to some `T`
pub type CellMap<T> = HashMap<CellAddress, T, FnvBuildHasher>;
/// An ORDERED set of cells. This has some extra memory overhead, so we should
/// only use it when we actually need the ordering.
pub type CellIndexSet = IndexSet<CellAddress, FnvBuildHasher>;

/// Get the set of cells that are directly adjacent to at least one cell in
/// the given set, but NOT in the set themselves. The set has no notion of
/// board bounds (there are none), so every cell of the ring is included.
pub fn perimeter(cells: &CellSet) -> CellSet {
    let mut adjacents = CellSet::default();
    for cell in cells {
        adjacents.extend(cell.adjacents().filter(|adj| !cells.contains(adj)));
    }
    adjacents
}

/// The set of cells holding at least one piece. A cell may hold a whole stack
/// of pieces, but for the purposes of this crate a cell is either occupied or
/// it isn't.
///
/// This is a snapshot: it never observes changes to the board it was built
/// from. Rebuild it whenever the board changes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Occupancy {
    cells: CellSet,
}

impl Occupancy {
    /// Build an occupancy snapshot from a board of piece stacks. Only cells
    /// whose stack holds at least one piece count as occupied.
    pub fn from_stacks<T>(stacks: &CellMap<Vec<T>>) -> Self {
        stacks
            .iter()
            .filter(|(_, stack)| !stack.is_empty())
            .map(|(cell, _)| *cell)
            .collect()
    }

    /// A reference to the set of occupied cells
    pub fn cells(&self) -> &CellSet {
        &self.cells
    }

    pub fn contains(&self, cell: CellAddress) -> bool {
        self.cells.contains(&cell)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = CellAddress> + '_ {
        self.cells.iter().copied()
    }

    /// The smallest `x` among all occupied cells, i.e. how far the hive
    /// reaches to the left. `None` for an empty board.
    pub fn min_x(&self) -> Option<i16> {
        self.iter().map(|cell| cell.x()).min()
    }

    /// The ring of empty cells directly bordering the hive
    pub fn perimeter(&self) -> CellSet {
        perimeter(&self.cells)
    }
}

impl From<CellSet> for Occupancy {
    fn from(cells: CellSet) -> Self {
        Self { cells }
    }
}

impl FromIterator<CellAddress> for Occupancy {
    fn from_iter<I: IntoIterator<Item = CellAddress>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}
