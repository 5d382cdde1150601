//! Plugboard (Steckerbrett): disjoint letter swaps applied on entry and exit.

use std::str::FromStr;

use crate::error::EnigmaError;
use crate::utils::alphabet::{self, LETTER_COUNT};

/// Maximum number of cables: 26 letters in disjoint pairs.
pub const MAX_PAIRS: usize = LETTER_COUNT / 2;

/// Validated plugboard configuration.
///
/// Immutable once built. Lookups go through a 26-entry swap table so the
/// board is its own inverse by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    pairs: Vec<(char, char)>,
    mapping: [u8; LETTER_COUNT],
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::empty()
    }
}

impl Plugboard {
    /// A board with no cables: every letter maps to itself.
    pub fn empty() -> Self {
        Plugboard {
            pairs: Vec::new(),
            mapping: identity(),
        }
    }

    /// Builds a plugboard from letter pairs (case insensitive).
    ///
    /// # Errors
    /// - [`EnigmaError::TooManyPairs`] for more than 13 pairs.
    /// - [`EnigmaError::NotALetter`] if a pair contains a non-letter.
    /// - [`EnigmaError::SelfPair`] if a letter is paired with itself.
    /// - [`EnigmaError::LetterReused`] if a letter appears in two pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{EnigmaError, Plugboard};
    ///
    /// assert!(Plugboard::new(&[('A', 'B'), ('C', 'D')]).is_ok());
    /// assert_eq!(
    ///     Plugboard::new(&[('A', 'B'), ('B', 'C')]),
    ///     Err(EnigmaError::LetterReused('B'))
    /// );
    /// ```
    pub fn new(pairs: &[(char, char)]) -> Result<Self, EnigmaError> {
        if pairs.len() > MAX_PAIRS {
            return Err(EnigmaError::TooManyPairs(pairs.len()));
        }

        let mut mapping = identity();
        let mut used = [false; LETTER_COUNT];
        let mut normalized = Vec::with_capacity(pairs.len());

        for &(a, b) in pairs {
            let ia = alphabet::require_letter(a)?;
            let ib = alphabet::require_letter(b)?;
            if ia == ib {
                return Err(EnigmaError::SelfPair(alphabet::index_letter(ia)));
            }
            for i in [ia, ib] {
                if used[i as usize] {
                    return Err(EnigmaError::LetterReused(alphabet::index_letter(i)));
                }
                used[i as usize] = true;
            }
            mapping[ia as usize] = ib;
            mapping[ib as usize] = ia;
            normalized.push((alphabet::index_letter(ia), alphabet::index_letter(ib)));
        }

        Ok(Plugboard {
            pairs: normalized,
            mapping,
        })
    }

    /// Swaps a letter offset through the board.
    pub fn swap(&self, letter: u8) -> u8 {
        self.mapping[letter as usize]
    }

    /// The configured pairs, uppercased, in the order given.
    pub fn pairs(&self) -> &[(char, char)] {
        &self.pairs
    }
}

impl FromStr for Plugboard {
    type Err = EnigmaError;

    /// Parses whitespace separated two-letter tokens, e.g. `"AB cd EF"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut pairs = Vec::new();
        for token in s.split_whitespace() {
            let mut chars = token.chars();
            match (chars.next(), chars.next(), chars.next()) {
                (Some(a), Some(b), None) => pairs.push((a, b)),
                _ => return Err(EnigmaError::InvalidSetting(token.to_string())),
            }
        }
        Plugboard::new(&pairs)
    }
}

/// Maps `letter` through a set of swap pairs.
///
/// Returns the partner if `letter` is a member of a pair, otherwise the
/// letter itself. Applying it twice with the same pairs is the identity.
/// The pairs are scanned as given and not validated; use [`Plugboard`] for
/// a checked configuration.
///
/// # Examples
///
/// ```
/// use enigma::plugboard::plugboard_swap;
///
/// let pairs = [('A', 'B'), ('C', 'D')];
/// assert_eq!(plugboard_swap('B', &pairs), 'A');
/// assert_eq!(plugboard_swap('Z', &pairs), 'Z');
/// ```
pub fn plugboard_swap(letter: char, pairs: &[(char, char)]) -> char {
    for &(a, b) in pairs {
        if letter == a {
            return b;
        }
        if letter == b {
            return a;
        }
    }
    letter
}

fn identity() -> [u8; LETTER_COUNT] {
    let mut mapping = [0u8; LETTER_COUNT];
    for (i, slot) in mapping.iter_mut().enumerate() {
        *slot = i as u8;
    }
    mapping
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_is_identity() {
        let board = Plugboard::empty();
        for x in 0..LETTER_COUNT as u8 {
            assert_eq!(board.swap(x), x);
        }
        assert!(board.pairs().is_empty());
    }

    #[test]
    fn test_swap_both_directions() {
        let board = Plugboard::new(&[('A', 'Z'), ('m', 'q')]).unwrap();
        assert_eq!(board.swap(0), 25);
        assert_eq!(board.swap(25), 0);
        assert_eq!(board.swap(12), 16);
        assert_eq!(board.swap(16), 12);
        assert_eq!(board.swap(1), 1);
        assert_eq!(board.pairs(), &[('A', 'Z'), ('M', 'Q')]);
    }

    #[test]
    fn test_swap_is_involution() {
        let board: Plugboard = "AB CD EF GH IJ KL MN OP QR ST UV WX YZ".parse().unwrap();
        for x in 0..LETTER_COUNT as u8 {
            assert_ne!(board.swap(x), x);
            assert_eq!(board.swap(board.swap(x)), x);
        }
    }

    #[test]
    fn test_rejects_reused_letter() {
        assert_eq!(
            Plugboard::new(&[('A', 'B'), ('B', 'C')]),
            Err(EnigmaError::LetterReused('B'))
        );
        assert_eq!(
            Plugboard::new(&[('A', 'B'), ('c', 'a')]),
            Err(EnigmaError::LetterReused('A'))
        );
    }

    #[test]
    fn test_rejects_self_pair() {
        assert_eq!(
            Plugboard::new(&[('k', 'K')]),
            Err(EnigmaError::SelfPair('K'))
        );
    }

    #[test]
    fn test_rejects_non_letter() {
        assert_eq!(
            Plugboard::new(&[('A', '1')]),
            Err(EnigmaError::NotALetter('1'))
        );
    }

    #[test]
    fn test_rejects_fourteen_pairs() {
        let pairs = vec![('A', 'B'); 14];
        assert_eq!(Plugboard::new(&pairs), Err(EnigmaError::TooManyPairs(14)));
    }

    #[test]
    fn test_parse_rejects_malformed_tokens() {
        assert_eq!(
            "AB CDE".parse::<Plugboard>(),
            Err(EnigmaError::InvalidSetting("CDE".to_string()))
        );
        assert_eq!(
            "A".parse::<Plugboard>(),
            Err(EnigmaError::InvalidSetting("A".to_string()))
        );
        assert_eq!("".parse::<Plugboard>(), Ok(Plugboard::empty()));
    }

    #[test]
    fn test_free_function_matches_board() {
        let pairs = [('A', 'B'), ('C', 'D'), ('E', 'F')];
        let board = Plugboard::new(&pairs).unwrap();
        for x in 0..LETTER_COUNT as u8 {
            let c = alphabet::index_letter(x);
            assert_eq!(
                plugboard_swap(c, &pairs),
                alphabet::index_letter(board.swap(x))
            );
            assert_eq!(plugboard_swap(plugboard_swap(c, &pairs), &pairs), c);
        }
        assert_eq!(plugboard_swap('Q', &[]), 'Q');
    }
}
