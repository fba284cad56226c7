//! Target selection - which letter the player hunts for next.

use arrayvec::ArrayVec;
use rand::Rng;

use crate::board::Board;
use crate::types::MAX_CELLS;

/// Letter values already found in the current game.
///
/// Matching is by value: once a letter is found, every cell holding it
/// counts as found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FoundSet {
    letters: ArrayVec<char, MAX_CELLS>,
}

impl FoundSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `letter` as found. Returns false if it already was.
    pub fn insert(&mut self, letter: char) -> bool {
        if self.letters.contains(&letter) {
            return false;
        }
        // A board holds at most MAX_CELLS distinct values, so this never overflows.
        let _ = self.letters.try_push(letter);
        true
    }

    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn clear(&mut self) {
        self.letters.clear();
    }

    /// Found letters in the order they were found.
    pub fn as_slice(&self) -> &[char] {
        &self.letters
    }
}

/// Picks the next target from the unfound letters of a board.
pub struct TargetSelector;

impl TargetSelector {
    /// Pick a random cell whose letter is not yet found and return its letter.
    ///
    /// Every eligible cell is equally likely, so a value that appears on two
    /// cells is twice as likely as one that appears once. Returns `None` when
    /// every value on the board has been found, i.e. the game is complete.
    pub fn pick<R: Rng + ?Sized>(board: &Board, found: &FoundSet, rng: &mut R) -> Option<char> {
        let available = Self::remaining_cells(board, found);
        if available == 0 {
            return None;
        }

        let nth = rng.random_range(0..available);
        board
            .letters()
            .iter()
            .copied()
            .filter(|&c| !found.contains(c))
            .nth(nth)
    }

    /// Number of cells whose letter has not been found.
    pub fn remaining_cells(board: &Board, found: &FoundSet) -> usize {
        board
            .letters()
            .iter()
            .filter(|&&c| !found.contains(c))
            .count()
    }
}
