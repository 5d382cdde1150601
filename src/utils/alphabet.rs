//! Alphabet indexing and modular arithmetic.
//!
//! The machine works internally on letter offsets `0..26` (`A = 0`,
//! `Z = 25`). These helpers convert between offsets and `char`s and provide
//! the true modulo every shift relies on.

use crate::error::EnigmaError;

/// The 26-letter alphabet wired into every component.
pub const ALPHABET: &[u8; LETTER_COUNT] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of contacts on every rotor, reflector and plugboard.
pub const LETTER_COUNT: usize = 26;

/// True modulo: the result always lies in `[0, modulus)`, also for negative
/// `value`, unlike the `%` remainder operator.
///
/// # Parameters
/// - `value`: The value to reduce, possibly negative.
/// - `modulus`: A positive modulus.
///
/// # Examples
///
/// ```
/// use enigma::utils::alphabet::modulo;
///
/// assert_eq!(modulo(-1, 26), 25);
/// assert_eq!(modulo(27, 26), 1);
/// ```
pub fn modulo(value: i32, modulus: i32) -> i32 {
    value.rem_euclid(modulus)
}

/// Returns the offset of an ASCII letter, case insensitive.
///
/// # Returns
/// `Some(0..=25)` for `a..=z` / `A..=Z`, `None` for anything else.
pub fn letter_index(letter: char) -> Option<u8> {
    if letter.is_ascii_alphabetic() {
        Some(letter.to_ascii_uppercase() as u8 - b'A')
    } else {
        None
    }
}

/// Like [`letter_index`] but reports non-letters as an error.
///
/// # Errors
/// Returns [`EnigmaError::NotALetter`] if `letter` is not in A-Z / a-z.
pub fn require_letter(letter: char) -> Result<u8, EnigmaError> {
    letter_index(letter).ok_or(EnigmaError::NotALetter(letter))
}

/// Returns the uppercase letter for an offset, wrapping modulo 26.
pub fn index_letter(index: u8) -> char {
    ALPHABET[index as usize % LETTER_COUNT] as char
}

/// Adds a signed shift to a letter offset, wrapping into `[0, 26)`.
pub(crate) fn shift(index: u8, by: i32) -> u8 {
    modulo(index as i32 + by, LETTER_COUNT as i32) as u8
}
