//! Board module - the letters of one Schulte table
//!
//! Cells are stored row-major in a fixed-capacity array, so a board never
//! allocates regardless of its size.

use arrayvec::ArrayVec;
use rand::Rng;
use tracing::debug;

use crate::error::GameError;
use crate::rng::LetterBag;
use crate::types::{BoardSize, MAX_CELLS};

/// A square grid of letters, `size * size` cells long.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: BoardSize,
    letters: ArrayVec<char, MAX_CELLS>,
}

impl Board {
    /// Build a shuffled board from `alphabet`.
    ///
    /// When the board has no more cells than the alphabet has letters, the
    /// result is a random subset with no repeats. Otherwise the alphabet is
    /// repeated in independently shuffled passes and the last pass truncated,
    /// so every letter appears at least `cells / |alphabet|` times.
    pub fn generate<R: Rng + ?Sized>(
        alphabet: &[char],
        size: BoardSize,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let mut bag = LetterBag::new(alphabet, rng)?;
        let mut letters = ArrayVec::new();
        for _ in 0..size.cells() {
            letters.push(bag.draw(rng));
        }

        debug!(
            side = size.side(),
            alphabet_len = alphabet.len(),
            passes = bag.passes(),
            "generated board"
        );
        Ok(Self { size, letters })
    }

    /// Build a board from explicit letters.
    ///
    /// Returns `None` unless exactly `size.cells()` letters are given.
    pub fn from_letters(size: BoardSize, letters: &[char]) -> Option<Self> {
        if letters.len() != size.cells() {
            return None;
        }
        let letters = letters.iter().copied().collect();
        Some(Self { size, letters })
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<char> {
        self.letters.get(index).copied()
    }

    /// Letter at `(row, col)`.
    pub fn at(&self, row: u8, col: u8) -> Option<char> {
        let side = self.size.side();
        if row >= side || col >= side {
            return None;
        }
        self.get(Self::index_of(self.size, row, col))
    }

    /// Row-major index of `(row, col)` on a board of `size`.
    pub fn index_of(size: BoardSize, row: u8, col: u8) -> usize {
        (row as usize) * (size.side() as usize) + (col as usize)
    }

    /// `(row, col)` of a row-major index.
    pub fn position_of(size: BoardSize, index: usize) -> (u8, u8) {
        let side = size.side() as usize;
        ((index / side) as u8, (index % side) as u8)
    }

    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// How many cells hold `letter`.
    pub fn count(&self, letter: char) -> usize {
        self.letters.iter().filter(|&&c| c == letter).count()
    }

    /// Distinct letter values, in order of first appearance.
    pub fn distinct_letters(&self) -> ArrayVec<char, MAX_CELLS> {
        let mut out = ArrayVec::new();
        for &c in &self.letters {
            if !out.contains(&c) {
                out.push(c);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Alphabet;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn size(side: u8) -> BoardSize {
        BoardSize::from_side(side).unwrap()
    }

    #[test]
    fn from_letters_requires_exact_length() {
        assert!(Board::from_letters(size(3), &['A'; 8]).is_none());
        assert!(Board::from_letters(size(3), &['A'; 10]).is_none());
        let board = Board::from_letters(size(3), &['A'; 9]).unwrap();
        assert_eq!(board.len(), 9);
    }

    #[test]
    fn index_and_position_agree() {
        let s = size(4);
        for index in 0..s.cells() {
            let (row, col) = Board::position_of(s, index);
            assert_eq!(Board::index_of(s, row, col), index);
        }
        assert_eq!(Board::position_of(s, 5), (1, 1));
    }

    #[test]
    fn at_reads_row_major() {
        let letters = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I'];
        let board = Board::from_letters(size(3), &letters).unwrap();
        assert_eq!(board.at(0, 0), Some('A'));
        assert_eq!(board.at(1, 2), Some('F'));
        assert_eq!(board.at(2, 2), Some('I'));
        assert_eq!(board.at(3, 0), None);
    }

    #[test]
    fn distinct_letters_keeps_first_appearance_order() {
        let letters = ['B', 'A', 'B', 'C', 'A', 'C', 'D', 'D', 'B'];
        let board = Board::from_letters(size(3), &letters).unwrap();
        assert_eq!(board.distinct_letters().as_slice(), &['B', 'A', 'C', 'D']);
        assert_eq!(board.count('B'), 3);
        assert!(!board.contains('Z'));
    }

    #[test]
    fn generate_rejects_empty_alphabet() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            Board::generate(&[], size(3), &mut rng),
            Err(GameError::EmptyAlphabet)
        );
    }

    #[test]
    fn generate_fills_every_cell() {
        let mut rng = StdRng::seed_from_u64(3);
        for alphabet in Alphabet::ALL {
            for s in BoardSize::ALL {
                let board = Board::generate(alphabet.letters(), s, &mut rng).unwrap();
                assert_eq!(board.len(), s.cells());
                assert_eq!(board.size(), s);
            }
        }
    }
}
