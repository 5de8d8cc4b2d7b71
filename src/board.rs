use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::thread_rng;
use rand::Rng;
use std::fmt;

use crate::config::GameConfig;

// row, then column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point(pub usize, pub usize);

#[derive(Debug, Default)]
pub struct Cell {
    mine: bool,
    open: bool,
    flagged: bool,
    adjacent_mines: u8,
}

impl Cell {
    pub fn is_mine(&self) -> bool {
        self.mine
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_flagged(&self) -> bool {
        self.flagged
    }

    pub fn adjacent_mines(&self) -> u8 {
        self.adjacent_mines
    }

    fn set_mine(&mut self) {
        self.mine = true;
    }

    fn set_open(&mut self) {
        self.open = true;
    }

    fn toggle_flag(&mut self) {
        self.flagged = !self.flagged;
    }

    fn increment_adjacent_mines(&mut self) {
        self.adjacent_mines += 1;
    }

    fn to_str(&self) -> String {
        if self.flagged {
            String::from(" F")
        } else if !self.open {
            String::from(" .")
        } else if self.mine {
            String::from(" *")
        } else {
            format!("{:2}", self.adjacent_mines)
        }
    }
}

pub struct Board {
    size: usize,
    field: Vec<Vec<Cell>>,
    mine_count: usize,
    opened_count: usize,
}

impl Board {
    pub fn new(config: &GameConfig) -> Board {
        Board::with_rng(config, &mut thread_rng())
    }

    pub fn with_rng<R: Rng>(config: &GameConfig, rng: &mut R) -> Board {
        let mines = sample_points(config.size(), config.mine_count(), rng);
        Board::with_mines(config.size(), &mines)
    }

    pub fn with_mines(size: usize, mines: &[Point]) -> Board {
        let mut field = Vec::with_capacity(size);
        for _ in 0..size {
            let mut row = Vec::with_capacity(size);
            for _ in 0..size {
                row.push(Cell::default());
            }
            field.push(row);
        }
        let mut board = Board {
            size,
            field,
            mine_count: 0,
            opened_count: 0,
        };
        // duplicate points count once
        for point in mines {
            let cell = board.cell_mut(point);
            if !cell.is_mine() {
                cell.set_mine();
                board.mine_count += 1;
            }
        }
        board.compute_adjacency();
        board
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn mine_count(&self) -> usize {
        self.mine_count
    }

    pub fn opened_count(&self) -> usize {
        self.opened_count
    }

    pub fn contains(&self, point: &Point) -> bool {
        point.0 < self.size && point.1 < self.size
    }

    pub fn cell(&self, point: &Point) -> &Cell {
        &self.field[point.0][point.1]
    }

    fn cell_mut(&mut self, point: &Point) -> &mut Cell {
        &mut self.field[point.0][point.1]
    }

    pub fn points(&self) -> impl Iterator<Item = Point> {
        let size = self.size;
        (0..size).cartesian_product(0..size).map(|(x, y)| Point(x, y))
    }

    pub fn neighbor_points(&self, point: &Point) -> Vec<Point> {
        let mut offsets = Vec::with_capacity(8);
        for i in -1..2 {
            for j in -1..2 {
                if i != 0 || j != 0 {
                    offsets.push((i, j));
                }
            }
        }
        offsets
            .into_iter()
            .map(|(dx, dy)| (point.0 as i32 + dx, point.1 as i32 + dy))
            .filter(|&(x, y)| x >= 0 && x < self.size as i32 && y >= 0 && y < self.size as i32)
            .map(|(x, y)| Point(x as usize, y as usize))
            .collect()
    }

    fn compute_adjacency(&mut self) {
        let mined: Vec<Point> = self
            .points()
            .filter(|point| self.cell(point).is_mine())
            .collect();
        for point in mined {
            for neighbor in self.neighbor_points(&point) {
                self.cell_mut(&neighbor).increment_adjacent_mines();
            }
        }
    }

    // never called on a mine during play; the engine checks for one first
    pub fn open(&mut self, point: &Point) {
        // the open/flagged guard doubles as the visited set
        let mut pending = vec![*point];
        while let Some(point) = pending.pop() {
            let (skip, spreads) = {
                let cell = self.cell(&point);
                (cell.is_open() || cell.is_flagged(), cell.adjacent_mines() == 0)
            };
            if skip {
                continue;
            }
            self.cell_mut(&point).set_open();
            self.opened_count += 1;
            if spreads {
                pending.extend(self.neighbor_points(&point));
            }
        }
    }

    pub fn toggle_flag(&mut self, point: &Point) {
        let cell = self.cell_mut(point);
        if !cell.is_open() {
            cell.toggle_flag();
        }
    }

    pub fn is_won(&self) -> bool {
        self.opened_count == self.size * self.size - self.mine_count
    }

    // display only, opened_count is not maintained past a terminal state
    pub fn reveal_all(&mut self) {
        for row in self.field.iter_mut() {
            for cell in row.iter_mut() {
                cell.set_open();
            }
        }
    }
}

fn sample_points<R: Rng>(size: usize, count: usize, rng: &mut R) -> Vec<Point> {
    let mut indices: Vec<usize> = (0..size * size).collect();
    indices.shuffle(rng);
    indices
        .into_iter()
        .take(count)
        .map(|i| Point(i / size, i % size))
        .collect()
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = format!("  +{}", "--+".repeat(self.size));
        write!(f, "   ")?;
        for i in 0..self.size {
            write!(f, "{:2} ", i)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", separator)?;
        for (i, row) in self.field.iter().enumerate() {
            write!(f, "{:2}|", i)?;
            for cell in row {
                write!(f, "{}|", cell.to_str())?;
            }
            writeln!(f)?;
            writeln!(f, "{}", separator)?;
        }
        Ok(())
    }
}

#[cfg(test)]
use proptest::prelude::*;

#[cfg(test)]
mod cell_tests {
    use super::*;

    #[test]
    fn set_mine_is_idempotent() {
        let mut cell = Cell::default();
        cell.set_mine();
        cell.set_mine();
        assert!(cell.is_mine());
    }

    #[test]
    fn set_open_is_idempotent() {
        let mut cell = Cell::default();
        cell.set_open();
        cell.set_open();
        assert!(cell.is_open());
    }

    #[test]
    fn toggle_flag_flips_both_ways() {
        let mut cell = Cell::default();
        cell.toggle_flag();
        assert!(cell.is_flagged());
        cell.toggle_flag();
        assert!(!cell.is_flagged());
    }

    #[test]
    fn adjacency_accumulates_to_eight() {
        let mut cell = Cell::default();
        for expected in 1..=8u8 {
            cell.increment_adjacent_mines();
            assert_eq!(cell.adjacent_mines(), expected);
        }
    }
}
