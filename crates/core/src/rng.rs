//! RNG module - bag-based letter drawing
//!
//! A [`LetterBag`] holds one shuffled copy of an alphabet and hands letters
//! out in order. When the bag runs dry it is refilled with a freshly shuffled
//! copy, so every letter is drawn once per pass before any letter repeats.
//!
//! Drawing `n <= |alphabet|` letters therefore yields a uniform random subset
//! without repetition, and drawing more yields whole shuffled passes of the
//! alphabet followed by a truncated final pass.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::GameError;

/// Shuffled, self-refilling bag of letters.
#[derive(Debug, Clone)]
pub struct LetterBag<'a> {
    /// Alphabet in its canonical order
    letters: &'a [char],
    /// Current shuffled pass
    bag: Vec<char>,
    /// Index into current pass
    bag_index: usize,
    /// Number of passes started so far
    passes: u32,
}

impl<'a> LetterBag<'a> {
    /// Create a bag over `letters`. Fails fast on an empty alphabet, which
    /// could never fill a board.
    pub fn new<R: Rng + ?Sized>(letters: &'a [char], rng: &mut R) -> Result<Self, GameError> {
        if letters.is_empty() {
            return Err(GameError::EmptyAlphabet);
        }

        let mut bag = Self {
            letters,
            bag: Vec::with_capacity(letters.len()),
            bag_index: 0,
            passes: 0,
        };
        bag.refill(rng);
        Ok(bag)
    }

    /// Start a new shuffled pass (Fisher-Yates via `SliceRandom::shuffle`).
    fn refill<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.bag.clear();
        self.bag.extend_from_slice(self.letters);
        self.bag.shuffle(rng);
        self.bag_index = 0;
        self.passes += 1;
    }

    /// Draw the next letter, refilling the bag first if it is exhausted.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> char {
        if self.bag_index >= self.bag.len() {
            self.refill(rng);
        }

        let letter = self.bag[self.bag_index];
        self.bag_index += 1;
        letter
    }

    /// Letters left in the current pass.
    pub fn remaining(&self) -> &[char] {
        &self.bag[self.bag_index..]
    }

    pub fn passes(&self) -> u32 {
        self.passes
    }
}
