//! Picking where to show a piece that has been lifted out of a player's hand
//! but not yet dropped on the board.
//!
//! The staging position sits two rings out from the hive, so the floating
//! piece never covers a piece already on the board, and as close as possible
//! to all the cells the piece could legally go. Everything here is a pure
//! function of its inputs: nothing is cached between calls, so callers just
//! call again whenever the board changes.
//!
//! This module never decides what's legal. The Legal Placement Set always
//! comes from the rules engine.

use crate::{
    hex::{perimeter, CellAddress, CellIndexSet, CellSet, Occupancy},
    layout::{BoardLayout, HexProjection},
};
use log::{debug, trace, warn};

/// Who is looking at the board. Only players ever pick up pieces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Viewer {
    /// The active player, along with the set of cells where they may place a
    /// new piece this turn
    Player { legal: CellSet },
    /// Someone watching the match
    Spectator,
}

/// The ring of empty cells directly bordering the hive
pub fn frontier(occupancy: &Occupancy) -> CellSet {
    occupancy.perimeter()
}

/// The next ring out: cells adjacent to `frontier` that are neither in
/// `frontier` nor occupied. Sorted by cell order, so iteration is
/// deterministic.
pub fn outer_frontier(
    occupancy: &Occupancy,
    frontier: &CellSet,
) -> CellIndexSet {
    let mut outer: CellIndexSet = perimeter(frontier)
        .into_iter()
        .filter(|cell| !occupancy.contains(*cell))
        .collect();
    outer.sort();
    outer
}

/// Staging position for when there's no outer frontier to pick from, which
/// only happens on an empty board: two columns to the left of the leftmost
/// piece (or of the origin), on the row closest to vertical center.
///
/// The row is `z = floor(-x / 2)`, and that floors for every column. When
/// the leftmost piece sits at `x >= 2`, `-x` is zero or negative, so odd
/// columns round down as well (`x = 1` gives `z = -1`, not `0`).
///
/// This is a best-effort placement. It's always a valid cell, but nothing
/// guarantees it's clear of every other piece on an odd-shaped hive. A hive
/// that reaches the left edge of the board gets a cell on that edge.
pub fn fallback_position(occupancy: &Occupancy) -> CellAddress {
    let x = occupancy.min_x().map_or(0, i32::from) - 2;
    // Round toward negative infinity, so odd columns land one row up
    let z = (-x).div_euclid(2);
    CellAddress::saturating_xz(x, z)
}

/// Get the cell that a dropped piece landed on, if it's somewhere the piece
/// may legally go. Returns `None` for drops anywhere else.
pub fn resolve_drop<P: HexProjection>(
    projection: &P,
    point: P::Point,
    legal: &CellSet,
) -> Option<CellAddress> {
    let cell = projection.to_cell(point);
    if legal.contains(&cell) {
        Some(cell)
    } else {
        debug!("Rejected drop on {}, not a legal placement", cell);
        None
    }
}

/// Chooses staging positions for pieces picked up from a player's hand.
/// Candidates are scored by screen distance, using the resolver's layout.
/// Distances only get compared to each other, so any uniform scale gives the
/// same answer; the default layout is fine unless the board is squashed.
#[derive(Clone, Debug, Default)]
pub struct PlacementResolver {
    layout: BoardLayout,
}

impl PlacementResolver {
    pub fn new(layout: BoardLayout) -> Self {
        Self { layout }
    }

    /// The layout used to score candidates
    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    /// Pick the staging position for a piece lifted from hand. Of the cells
    /// two rings out from the hive, this picks the one with the smallest
    /// total distance to every legal placement. Ties go to the first
    /// candidate in cell order.
    ///
    /// This never fails. With no legal placements every candidate scores the
    /// same, so the first candidate wins. With no candidates at all (empty
    /// board), this falls back to [fallback_position].
    pub fn staging_position(
        &self,
        occupancy: &Occupancy,
        legal: &CellSet,
    ) -> CellAddress {
        let frontier = frontier(occupancy);
        let candidates = outer_frontier(occupancy, &frontier);

        // Sum in a fixed order so float rounding can't depend on hashing
        let mut legal: Vec<CellAddress> = legal.iter().copied().collect();
        legal.sort_unstable();
        let targets: Vec<_> = legal
            .into_iter()
            .map(|cell| self.layout.cell_to_screen(cell))
            .collect();

        let best = candidates
            .iter()
            .map(|&candidate| {
                let point = self.layout.cell_to_screen(candidate);
                let score: f64 = targets
                    .iter()
                    .map(|target| point.distance_to(*target))
                    .sum();
                trace!("Staging candidate {} scored {}", candidate, score);
                (candidate, score)
            })
            // min_by keeps the first of equal elements
            .min_by(|(_, a), (_, b)| a.total_cmp(b));

        match best {
            Some((cell, score)) => {
                debug!(
                    "Staging at {} out of {} candidates (total distance {:.3})",
                    cell,
                    candidates.len(),
                    score
                );
                cell
            }
            None => {
                let cell = fallback_position(occupancy);
                if occupancy.is_empty() {
                    debug!("Empty board, staging at {}", cell);
                } else {
                    warn!(
                        "No outer frontier around {} occupied cells, \
                        staging at fallback {}",
                        occupancy.len(),
                        cell
                    );
                }
                cell
            }
        }
    }

    /// Pick the staging position for whoever is viewing the board.
    /// Spectators can't pick up pieces, so they never get one.
    pub fn staging_for(
        &self,
        viewer: &Viewer,
        occupancy: &Occupancy,
    ) -> Option<CellAddress> {
        match viewer {
            Viewer::Player { legal } => {
                Some(self.staging_position(occupancy, legal))
            }
            Viewer::Spectator => None,
        }
    }
}
