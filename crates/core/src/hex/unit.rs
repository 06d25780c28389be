//! This sub-module contains the basic unit types of the cube coordinate
//! system. See the parent module documentation for more info on the
//! coordinate system.

use anyhow::anyhow;
use derive_more::{Add, Display, Neg};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// The address of a single cell on the board. See module-level documentation
/// for a description of the coordinate system.
///
/// ## Implementation
///
/// Every cell falls on the plane `x + y + z = 0`, so this struct only stores
/// `x` and `y` and derives `z` as needed. That way the zero-sum invariant
/// holds for every value of this type by construction, rather than by
/// validation.
///
/// Ordering is lexicographic by `(x, y, z)`. Since `z` is a function of `x`
/// and `y`, comparing just the stored fields gives the same result.
///
/// The components are stored as `i16`s. A Hive board never grows past a few
/// dozen cells in any direction, so the addressable board is capped at a
/// hexagon of radius [CellAddress::MAX_COMPONENT] around the origin. Keeping
/// every component within half the `i16` range means deriving the third
/// component, or stepping to a neighbor, can never overflow.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.x()", "self.y()", "self.z()")]
#[serde(into = "RawCellAddress", try_from = "RawCellAddress")]
pub struct CellAddress {
    x: i16,
    y: i16,
}

impl CellAddress {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// The largest magnitude any single component can have. This is the
    /// radius of the addressable board.
    pub const MAX_COMPONENT: i16 = i16::MAX / 2;

    /// Construct a new cell from all three components. Returns an error if
    /// the components don't fall on the plane `x + y + z = 0`, or if any of
    /// them is beyond [Self::MAX_COMPONENT]. Use this at the boundary,
    /// wherever cells come from an outside source.
    pub fn new(x: i16, y: i16, z: i16) -> anyhow::Result<Self> {
        // Sum in i32 so a garbage input can't overflow
        if i32::from(x) + i32::from(y) + i32::from(z) != 0 {
            Err(anyhow!(
                "Invalid cell address ({}, {}, {}); must be on the plane \
                x+y+z=0",
                x,
                y,
                z
            ))
        } else if [x, y, z]
            .iter()
            .any(|c| c.unsigned_abs() > Self::MAX_COMPONENT.unsigned_abs())
        {
            Err(anyhow!(
                "Invalid cell address ({}, {}, {}); components must be \
                within ±{}",
                x,
                y,
                z,
                Self::MAX_COMPONENT
            ))
        } else {
            Ok(Self { x, y })
        }
    }

    /// Construct a new cell with the given x and y. Since x+y+z=0 for all
    /// cells, we can derive z from x & y. Components beyond the edge of the
    /// board are pulled back onto it.
    pub fn new_xy(x: i16, y: i16) -> Self {
        let x = i32::from(x);
        Self::saturating_xz(x, -x - i32::from(y))
    }

    /// Construct a new cell with the given x and z. Since x+y+z=0 for all
    /// cells, we can derive y from x & z. This is the natural constructor
    /// when coming from axial `(q, r)` coordinates. Components beyond the
    /// edge of the board are pulled back onto it.
    pub fn new_xz(x: i16, z: i16) -> Self {
        Self::saturating_xz(x.into(), z.into())
    }

    /// Construct a new cell with the given y and z. Since x+y+z=0 for all
    /// cells, we can derive x from y & z. Components beyond the edge of the
    /// board are pulled back onto it.
    pub fn new_yz(y: i16, z: i16) -> Self {
        let z = i32::from(z);
        Self::saturating_xz(-i32::from(y) - z, z)
    }

    /// Construct a cell from wide axial coordinates, saturating at the edge
    /// of the board. `x` is clamped first, then `z` is clamped to whatever
    /// range keeps the derived `y` on the board too, so the result is always
    /// a valid, zero-sum cell.
    pub(crate) fn saturating_xz(x: i32, z: i32) -> Self {
        let max = i32::from(Self::MAX_COMPONENT);
        let x = x.clamp(-max, max);
        // y = -x - z has to land in [-max, max] as well. With x in range
        // this window is never empty.
        let z = z.clamp((-max).max(-x - max), max.min(max - x));
        // Everything is within ±max now, which fits in an i16
        Self {
            x: x as i16,
            y: (-x - z) as i16,
        }
    }

    pub fn x(&self) -> i16 {
        self.x
    }

    pub fn y(&self) -> i16 {
        self.y
    }

    pub fn z(&self) -> i16 {
        -(self.x + self.y)
    }

    /// Axial `q` coordinate, which is the same as `x`
    pub fn q(&self) -> i16 {
        self.x()
    }

    /// Axial `r` coordinate, which is the same as `z`
    pub fn r(&self) -> i16 {
        self.z()
    }

    /// Translate this cell by a vector. Returns `None` if the result would
    /// fall off the edge of the board.
    pub fn checked_add(self, vector: CellVector) -> Option<CellAddress> {
        let x = i32::from(self.x) + i32::from(vector.x);
        let y = i32::from(self.y) + i32::from(vector.y);
        let max = i32::from(Self::MAX_COMPONENT);
        // Both operands are zero-sum, so the result is too
        if [x, y, -x - y].iter().all(|c| c.abs() <= max) {
            Some(Self {
                x: x as i16,
                y: y as i16,
            })
        } else {
            None
        }
    }

    /// Get the location of the cell adjacent to this one in the given
    /// direction, or `None` if this cell is on the edge of the board and
    /// the neighbor would be off of it
    pub fn adjacent(self, direction: CellDirection) -> Option<CellAddress> {
        self.checked_add(direction.to_vector())
    }

    /// Get an iterator of all the cells directly adjacent to this one. The
    /// iterator will contain exactly 6 values, unless this cell is on the
    /// edge of the board.
    pub fn adjacents(self) -> impl Iterator<Item = CellAddress> {
        CellDirection::iter().filter_map(move |dir| self.adjacent(dir))
    }

    /// Calculate the path distance between two cells, meaning the number of
    /// hops it takes to get from one to the other. 0 if the cells are equal,
    /// 1 if they are adjacent, 2 if there is 1 cell between them, etc. This
    /// knows nothing about which hops a piece is actually allowed to make.
    pub fn distance_to(self, other: CellAddress) -> usize {
        // https://www.redblobgames.com/grids/hexagons/#distances
        let dx = i32::from(self.x()) - i32::from(other.x());
        let dy = i32::from(self.y()) - i32::from(other.y());
        let dz = i32::from(self.z()) - i32::from(other.z());
        ((dx.abs() + dy.abs() + dz.abs()) / 2) as usize
    }
}

impl TryFrom<(i16, i16, i16)> for CellAddress {
    type Error = anyhow::Error;

    fn try_from((x, y, z): (i16, i16, i16)) -> Result<Self, Self::Error> {
        Self::new(x, y, z)
    }
}

/// Serialized form of [CellAddress]. All three components are written out so
/// that consumers don't need to know about the zero-sum trick, and all three
/// are validated on the way back in.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
#[serde(rename = "CellAddress")]
struct RawCellAddress {
    x: i16,
    y: i16,
    z: i16,
}

impl From<CellAddress> for RawCellAddress {
    fn from(cell: CellAddress) -> Self {
        Self {
            x: cell.x(),
            y: cell.y(),
            z: cell.z(),
        }
    }
}

impl TryFrom<RawCellAddress> for CellAddress {
    type Error = anyhow::Error;

    fn try_from(raw: RawCellAddress) -> Result<Self, Self::Error> {
        Self::new(raw.x, raw.y, raw.z)
    }
}

/// A translation between two cells. Like [CellAddress], `x + y + z = 0` for
/// every vector, so only `x` and `y` are stored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display, Add, Neg)]
#[display(fmt = "({}, {}, {})", "self.x", "self.y", "-(self.x + self.y)")]
pub struct CellVector {
    x: i16,
    y: i16,
}

impl CellVector {
    pub const fn new_xz(x: i16, z: i16) -> Self {
        Self { x, y: -x - z }
    }
}

/// The 6 directions in which cells line up side-to-side. Variants are
/// declared in clockwise order starting at north (screen up).
///
/// See this page for more info (we use "flat topped" cells):
/// https://www.redblobgames.com/grids/hexagons/#coordinates-cube
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CellDirection {
    N,
    NE,
    SE,
    S,
    SW,
    NW,
}

impl CellDirection {
    pub const CLOCKWISE: &'static [Self] =
        &[Self::N, Self::NE, Self::SE, Self::S, Self::SW, Self::NW];

    /// Get a vector offset that would move a cell one step in this direction
    pub fn to_vector(self) -> CellVector {
        match self {
            Self::N => CellVector::new_xz(0, -1),
            Self::NE => CellVector::new_xz(1, -1),
            Self::SE => CellVector::new_xz(1, 0),
            Self::S => CellVector::new_xz(0, 1),
            Self::SW => CellVector::new_xz(-1, 1),
            Self::NW => CellVector::new_xz(-1, 0),
        }
    }

    /// Get the direction pointing the opposite way from this one
    pub fn opposite(self) -> Self {
        let clockwise = Self::CLOCKWISE;
        clockwise[(self as usize + clockwise.len() / 2) % clockwise.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_test::{assert_de_tokens_error, assert_tokens, Token};
    use std::collections::HashSet;

    #[test]
    fn test_new_validation() {
        assert_eq!(
            CellAddress::new(1, -1, 0).unwrap(),
            CellAddress::new_xy(1, -1)
        );
        assert_eq!(
            CellAddress::new(2, -1, -1).unwrap(),
            CellAddress::new_xz(2, -1)
        );
        assert!(CellAddress::new(1, 1, 1).is_err());
        assert!(CellAddress::new(i16::MAX, i16::MAX, 0).is_err());
        // Zero-sum, but off the edge of the board
        assert!(CellAddress::new(i16::MIN + 1, i16::MAX, 0).is_err());
        let max = CellAddress::MAX_COMPONENT;
        assert!(CellAddress::new(max, -max, 0).is_ok());
        assert!(CellAddress::new(max + 1, -max - 1, 0).is_err());
        let valid: (i16, i16, i16) = (0, 1, -1);
        let invalid: (i16, i16, i16) = (0, 1, 0);
        assert!(CellAddress::try_from(valid).is_ok());
        assert!(CellAddress::try_from(invalid).is_err());
    }

    #[test]
    fn test_constructors_agree() {
        let cell = CellAddress::new(3, -5, 2).unwrap();
        assert_eq!(CellAddress::new_xy(3, -5), cell);
        assert_eq!(CellAddress::new_xz(3, 2), cell);
        assert_eq!(CellAddress::new_yz(-5, 2), cell);
        assert_eq!((cell.q(), cell.r()), (3, 2));
        assert_eq!(cell.to_string(), "(3, -5, 2)");
    }

    #[test]
    fn test_constructors_saturate() {
        let max = CellAddress::MAX_COMPONENT;
        assert_eq!(
            CellAddress::new_xz(i16::MAX, i16::MAX),
            CellAddress::new(max, -max, 0).unwrap()
        );
        for cell in [
            CellAddress::new_xy(i16::MIN, i16::MIN),
            CellAddress::new_xz(i16::MIN, i16::MAX),
            CellAddress::new_yz(i16::MAX, i16::MAX),
            CellAddress::saturating_xz(i32::MAX, i32::MIN),
            CellAddress::saturating_xz(-100_000, 3),
        ] {
            let sum: i32 = [cell.x(), cell.y(), cell.z()]
                .iter()
                .map(|&c| i32::from(c))
                .sum();
            assert_eq!(sum, 0, "{}", cell);
            assert!(
                [cell.x(), cell.y(), cell.z()]
                    .iter()
                    .all(|c| c.abs() <= max),
                "{}",
                cell
            );
        }
    }

    #[test]
    fn test_ordering() {
        let mut cells = vec![
            CellAddress::new_xy(1, -1),
            CellAddress::new_xy(-1, 2),
            CellAddress::new_xy(-1, 0),
            CellAddress::ORIGIN,
        ];
        cells.sort();
        assert_eq!(
            cells,
            vec![
                CellAddress::new_xy(-1, 0),
                CellAddress::new_xy(-1, 2),
                CellAddress::ORIGIN,
                CellAddress::new_xy(1, -1),
            ]
        );
    }

    #[test]
    fn test_adjacents() {
        let adjacents: HashSet<CellAddress> =
            CellAddress::ORIGIN.adjacents().collect();
        assert_eq!(adjacents.len(), 6);
        for adj in &adjacents {
            assert_eq!(adj.x() + adj.y() + adj.z(), 0);
            assert_eq!(CellAddress::ORIGIN.distance_to(*adj), 1);
            // Adjacency has to go both ways
            assert!(adj.adjacents().any(|a| a == CellAddress::ORIGIN));
        }
    }

    #[test]
    fn test_adjacents_board_edge() {
        let max = CellAddress::MAX_COMPONENT;
        let corner = CellAddress::new(max, -max, 0).unwrap();
        let adjacents: Vec<CellAddress> = corner.adjacents().collect();
        // NE, SE and S would all push a component past the edge
        assert_eq!(
            adjacents,
            vec![
                CellAddress::new(max, -max + 1, -1).unwrap(),
                CellAddress::new(max - 1, -max, 1).unwrap(),
                CellAddress::new(max - 1, -max + 1, 0).unwrap(),
            ]
        );
        assert_eq!(corner.adjacent(CellDirection::SE), None);
        for adj in adjacents {
            assert!(adj.adjacents().any(|a| a == corner));
        }
    }

    #[test]
    fn test_opposite() {
        let cell = CellAddress::new_xz(2, -1);
        for dir in CellDirection::iter() {
            assert_eq!(
                cell.adjacent(dir)
                    .and_then(|adj| adj.adjacent(dir.opposite())),
                Some(cell)
            );
            assert_eq!(dir.to_vector(), -dir.opposite().to_vector());
        }
        assert_eq!(CellDirection::N.opposite(), CellDirection::S);
        assert_eq!(CellDirection::SW.opposite(), CellDirection::NE);
    }

    #[test]
    fn test_distance_to() {
        let p0 = CellAddress::ORIGIN;
        let p1 = CellAddress::new_xy(-1, 1);
        let p2 = CellAddress::new_xy(2, -1);
        let p3 = CellAddress::new_xy(2, -3);

        assert_eq!(p0.distance_to(p0), 0);
        assert_eq!(p3.distance_to(p3), 0);

        assert_eq!(p0.distance_to(p1), 1);
        assert_eq!(p0.distance_to(p2), 2);
        assert_eq!(p0.distance_to(p3), 3);

        assert_eq!(p1.distance_to(p2), 3);
        assert_eq!(p1.distance_to(p3), 4);
        assert_eq!(p2.distance_to(p3), 2);
    }

    #[test]
    fn test_serde() {
        assert_tokens(
            &CellAddress::new_xz(2, -1),
            &[
                Token::Struct {
                    name: "CellAddress",
                    len: 3,
                },
                Token::Str("x"),
                Token::I16(2),
                Token::Str("y"),
                Token::I16(-1),
                Token::Str("z"),
                Token::I16(-1),
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn test_deserialize_rejects_malformed() {
        assert_de_tokens_error::<CellAddress>(
            &[
                Token::Struct {
                    name: "CellAddress",
                    len: 3,
                },
                Token::Str("x"),
                Token::I16(1),
                Token::Str("y"),
                Token::I16(1),
                Token::Str("z"),
                Token::I16(1),
                Token::StructEnd,
            ],
            "Invalid cell address (1, 1, 1); must be on the plane x+y+z=0",
        );
    }
}
