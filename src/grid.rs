//! Seat addressing for the row × aisle cabin grid
//!
//! The clustering core only sees flat point indices. Seats are numbered from
//! one in both directions and laid out row-major: row 1 aisle 1 is point 0,
//! row 1 aisle 2 is point 1, and so on.

use std::fmt;
use std::str::FromStr;

/// Rows in the standard cabin layout
pub const DEFAULT_ROWS: usize = 51;
/// Aisles (seats per row) in the standard cabin layout
pub const DEFAULT_AISLES: usize = 10;

/// Nine sample seeds spread across the standard cabin
pub const SAMPLE_SEEDS: [Seat; 9] = [
    Seat::new(7, 8),
    Seat::new(42, 3),
    Seat::new(1, 1),
    Seat::new(2, 9),
    Seat::new(13, 2),
    Seat::new(18, 9),
    Seat::new(33, 2),
    Seat::new(38, 9),
    Seat::new(51, 10),
];

/// One seat, addressed by 1-based row and aisle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Seat {
    pub row: usize,
    pub aisle: usize,
}

impl Seat {
    pub const fn new(row: usize, aisle: usize) -> Self {
        Self { row, aisle }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.aisle)
    }
}

impl FromStr for Seat {
    type Err = anyhow::Error;

    /// Parse `row:aisle`, e.g. `7:8`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, aisle) = s
            .split_once(':')
            .ok_or_else(|| anyhow::anyhow!("Seat must be in format 'row:aisle': {}", s))?;
        let row: usize = row
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid row value: {}", row))?;
        let aisle: usize = aisle
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid aisle value: {}", aisle))?;
        Ok(Seat::new(row, aisle))
    }
}

/// Dimensions of the seat grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatGrid {
    pub rows: usize,
    pub aisles: usize,
}

impl Default for SeatGrid {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_AISLES)
    }
}

impl SeatGrid {
    pub const fn new(rows: usize, aisles: usize) -> Self {
        Self { rows, aisles }
    }

    /// Number of seats in the grid
    pub fn len(&self) -> usize {
        self.rows * self.aisles
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Point index of a seat
    pub fn index(&self, seat: Seat) -> crate::Result<usize> {
        if !(1..=self.rows).contains(&seat.row) || !(1..=self.aisles).contains(&seat.aisle) {
            anyhow::bail!(
                "Seat {} is outside the {}x{} grid",
                seat,
                self.rows,
                self.aisles
            );
        }
        Ok((seat.row - 1) * self.aisles + (seat.aisle - 1))
    }

    /// Seat at a point index, if the index lies within the grid
    pub fn seat(&self, index: usize) -> Option<Seat> {
        (index < self.len()).then(|| Seat::new(index / self.aisles + 1, index % self.aisles + 1))
    }

    /// Translate seats into point indices, failing on the first seat outside the grid
    pub fn indices(&self, seats: &[Seat]) -> crate::Result<Vec<usize>> {
        seats.iter().map(|&seat| self.index(seat)).collect()
    }
}
