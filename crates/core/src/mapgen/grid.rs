//! Dense cell grid shared by the smoothing and walker passes.

use rand_chacha::rand_core::RngCore;
use xxhash_rust::xxh3::xxh3_64;

use crate::types::{Cell, MapGenError, Pos};

/// Row-major map grid with fixed dimensions for its lifetime.
///
/// Transformation passes clone the grid and write the clone, so a full
/// neighbor scan always observes one consistent prior state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn filled(width: usize, height: usize, cell: Cell) -> Self {
        Self { width, height, cells: vec![cell; width * height] }
    }

    /// Uniform 50/50 noise fill, the usual starting point for smoothing.
    pub fn random<R: RngCore>(width: usize, height: usize, rng: &mut R) -> Self {
        let cells = (0..width * height)
            .map(|_| if rng.next_u32() & 1 == 0 { Cell::Wall } else { Cell::Open })
            .collect();
        Self { width, height, cells }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    pub fn cell_at(&self, pos: Pos) -> Result<Cell, MapGenError> {
        self.index_of(pos).map(|index| self.cells[index])
    }

    pub fn set_cell(&mut self, pos: Pos, cell: Cell) -> Result<(), MapGenError> {
        let index = self.index_of(pos)?;
        self.cells[index] = cell;
        Ok(())
    }

    /// Reads a cell under the closed-boundary policy: off-grid positions
    /// behave as solid rock.
    pub fn cell_or_wall(&self, pos: Pos) -> Cell {
        if self.in_bounds(pos) {
            self.cells[(pos.y as usize) * self.width + (pos.x as usize)]
        } else {
            Cell::Wall
        }
    }

    /// Row-major cell view, for rendering and whole-grid assertions.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(8 + self.cells.len());
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        for cell in &self.cells {
            bytes.push(match cell {
                Cell::Wall => 0,
                Cell::Open => 1,
            });
        }
        bytes
    }

    /// Stable content hash for deterministic verification.
    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }

    fn index_of(&self, pos: Pos) -> Result<usize, MapGenError> {
        if !self.in_bounds(pos) {
            return Err(MapGenError::OutOfBounds { pos });
        }
        Ok((pos.y as usize) * self.width + (pos.x as usize))
    }
}
