//! Reflector (Umkehrwalze): turns the signal back through the rotor stack.

use crate::utils::alphabet::LETTER_COUNT;
use crate::wiring::REFLECTOR_B;

/// A fixed involutive wiring with no fixed points.
///
/// Only reflector B is provided; it is shared read-only by every machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reflector {
    table: &'static [u8; LETTER_COUNT],
}

impl Reflector {
    /// Umkehrwalze B.
    pub const B: Reflector = Reflector {
        table: &REFLECTOR_B,
    };

    /// Maps a letter offset through the reflector.
    pub fn reflect(&self, letter: u8) -> u8 {
        self.table[letter as usize]
    }
}

impl Default for Reflector {
    fn default() -> Self {
        Reflector::B
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_letter_reflects_to_itself() {
        for x in 0..LETTER_COUNT as u8 {
            assert_ne!(Reflector::B.reflect(x), x);
        }
    }

    #[test]
    fn test_reflect_is_involution() {
        let r = Reflector::default();
        for x in 0..LETTER_COUNT as u8 {
            assert_eq!(r.reflect(r.reflect(x)), x);
        }
    }

    #[test]
    fn test_known_pairs() {
        // A <-> Y, E <-> Q, Z <-> T
        assert_eq!(Reflector::B.reflect(0), 24);
        assert_eq!(Reflector::B.reflect(4), 16);
        assert_eq!(Reflector::B.reflect(25), 19);
    }
}
