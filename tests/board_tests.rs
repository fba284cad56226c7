//! Board tests - generation rules for every alphabet and size

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::SeedableRng;

use schulte_tui::core::{Board, GameError};
use schulte_tui::types::{Alphabet, BoardSize};

fn counts(board: &Board) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for &c in board.letters() {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

#[test]
fn test_board_has_exactly_side_squared_letters() {
    let mut rng = StdRng::seed_from_u64(1);
    for alphabet in Alphabet::ALL {
        for size in BoardSize::ALL {
            let board = Board::generate(alphabet.letters(), size, &mut rng).unwrap();
            assert_eq!(board.len(), size.cells());
            assert_eq!(board.size(), size);
            assert!(board.letters().iter().all(|c| alphabet.letters().contains(c)));
        }
    }
}

#[test]
fn test_small_board_has_no_repeats() {
    // 5x5 English: 25 cells from 26 letters.
    let mut rng = StdRng::seed_from_u64(7);
    let size = BoardSize::from_side(5).unwrap();
    for _ in 0..50 {
        let board = Board::generate(Alphabet::English.letters(), size, &mut rng).unwrap();
        assert_eq!(board.distinct_letters().len(), 25);
        assert!(board.letters().iter().all(|c| c.is_ascii_uppercase()));
    }
}

#[test]
fn test_large_board_covers_the_alphabet() {
    let mut rng = StdRng::seed_from_u64(42);
    let cases = [
        (Alphabet::English, 6),
        (Alphabet::English, 7),
        (Alphabet::Ukrainian, 6),
        (Alphabet::Ukrainian, 7),
    ];

    for (alphabet, side) in cases {
        let size = BoardSize::from_side(side).unwrap();
        let letters = alphabet.letters();
        if size.cells() <= letters.len() {
            continue;
        }
        let min = size.cells() / letters.len();

        for _ in 0..20 {
            let board = Board::generate(letters, size, &mut rng).unwrap();
            let counts = counts(&board);
            for c in letters {
                let n = counts.get(c).copied().unwrap_or(0);
                assert!(
                    n >= min,
                    "{:?} {}: letter {} appears {} times, expected at least {}",
                    alphabet,
                    size,
                    c,
                    n,
                    min
                );
            }
        }
    }
}

#[test]
fn test_large_board_is_not_alphabet_in_order() {
    let mut rng = StdRng::seed_from_u64(3);
    let size = BoardSize::from_side(7).unwrap();
    let letters = Alphabet::English.letters();
    let in_order: Vec<char> = letters.iter().cycle().take(size.cells()).copied().collect();

    let board = Board::generate(letters, size, &mut rng).unwrap();
    assert_ne!(board.letters(), in_order.as_slice());
}

#[test]
fn test_ukrainian_small_board_has_no_repeats() {
    let mut rng = StdRng::seed_from_u64(9);
    let size = BoardSize::from_side(5).unwrap();
    let board = Board::generate(Alphabet::Ukrainian.letters(), size, &mut rng).unwrap();
    assert_eq!(board.distinct_letters().len(), 25);
}

#[test]
fn test_empty_alphabet_fails_fast() {
    let mut rng = StdRng::seed_from_u64(0);
    let result = Board::generate(&[], BoardSize::default(), &mut rng);
    assert_eq!(result, Err(GameError::EmptyAlphabet));
}

#[test]
fn test_same_seed_same_board() {
    let size = BoardSize::from_side(6).unwrap();
    let a = Board::generate(Alphabet::English.letters(), size, &mut StdRng::seed_from_u64(5)).unwrap();
    let b = Board::generate(Alphabet::English.letters(), size, &mut StdRng::seed_from_u64(5)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_row_major_positions() {
    let size = BoardSize::from_side(4).unwrap();
    let letters: Vec<char> = "ABCDEFGHIJKLMNOP".chars().collect();
    let board = Board::from_letters(size, &letters).unwrap();

    assert_eq!(board.at(0, 0), Some('A'));
    assert_eq!(board.at(1, 2), Some('G'));
    assert_eq!(board.at(3, 3), Some('P'));
    assert_eq!(board.at(4, 0), None);
    assert_eq!(Board::index_of(size, 2, 1), 9);
    assert_eq!(Board::position_of(size, 9), (2, 1));
}

#[test]
fn test_from_letters_rejects_wrong_length() {
    let size = BoardSize::from_side(3).unwrap();
    assert!(Board::from_letters(size, &['A'; 8]).is_none());
    assert!(Board::from_letters(size, &['A'; 9]).is_some());
}
