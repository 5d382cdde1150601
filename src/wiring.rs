//! Historical wiring tables for the M3 wheels and reflector B.
//!
//! All tables are built at compile time from the letter strings of the
//! wheel records, so there is no initialization order and nothing to
//! mutate. Each table maps a contact offset `0..26` to the
//! offset it is wired to.

use std::fmt;
use std::str::FromStr;

use crate::error::EnigmaError;
use crate::utils::alphabet::LETTER_COUNT;

/// The wheels issued with the three-rotor Army/Air Force machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotorKind {
    I,
    II,
    III,
    IV,
    V,
}

impl RotorKind {
    /// All wheels in wiring-table order.
    pub const ALL: [RotorKind; 5] = [
        RotorKind::I,
        RotorKind::II,
        RotorKind::III,
        RotorKind::IV,
        RotorKind::V,
    ];

    /// Index of this wheel in [`ROTORS`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Wiring record for this wheel.
    pub fn wiring(self) -> &'static RotorWiring {
        &ROTORS[self.index()]
    }
}

impl fmt::Display for RotorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RotorKind::I => "I",
            RotorKind::II => "II",
            RotorKind::III => "III",
            RotorKind::IV => "IV",
            RotorKind::V => "V",
        };
        f.write_str(name)
    }
}

impl FromStr for RotorKind {
    type Err = EnigmaError;

    /// Parses a roman numeral wheel name, case insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RotorKind::ALL
            .into_iter()
            .find(|kind| kind.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EnigmaError::InvalidSetting(s.to_string()))
    }
}

/// Wiring record of one physical wheel.
///
/// `forward` is the permutation seen by the signal travelling towards the
/// reflector; `backward` is its inverse, used on the return path.
#[derive(Debug, PartialEq, Eq)]
pub struct RotorWiring {
    pub kind: RotorKind,
    pub forward: [u8; LETTER_COUNT],
    pub backward: [u8; LETTER_COUNT],
    /// Visible letter offset at which this wheel carries its left neighbour.
    pub notch: u8,
}

impl RotorWiring {
    const fn new(kind: RotorKind, letters: &[u8; LETTER_COUNT], notch: u8) -> Self {
        let forward = table(letters);
        RotorWiring {
            kind,
            forward,
            backward: invert(&forward),
            notch: notch - b'A',
        }
    }
}

/// Wheels I-V, indexed by rotor selection number.
pub static ROTORS: [RotorWiring; 5] = [
    RotorWiring::new(RotorKind::I, b"EKMFLGDQVZNTOWYHXUSPAIBRCJ", b'Q'),
    RotorWiring::new(RotorKind::II, b"AJDKSIRUXBLHWTMCQGZNPYFVOE", b'E'),
    RotorWiring::new(RotorKind::III, b"BDFHJLCPRTXVZNYEAIUGOKQSMW", b'V'),
    RotorWiring::new(RotorKind::IV, b"ESOVPZJAYQUIRHXLNFTGKDCMWB", b'J'),
    RotorWiring::new(RotorKind::V, b"VZBRGITYUPSDNHLXAWMJQOFECK", b'Z'),
];

/// Reflector B (Umkehrwalze B).
pub const REFLECTOR_B: [u8; LETTER_COUNT] = table(b"YRUHQSLDPXNGOKMIEBFZCWVJAT");

/// Converts a row of wheel letters into contact offsets.
const fn table(letters: &[u8; LETTER_COUNT]) -> [u8; LETTER_COUNT] {
    let mut out = [0u8; LETTER_COUNT];
    let mut i = 0;
    while i < LETTER_COUNT {
        out[i] = letters[i] - b'A';
        i += 1;
    }
    out
}

const fn invert(map: &[u8; LETTER_COUNT]) -> [u8; LETTER_COUNT] {
    let mut out = [0u8; LETTER_COUNT];
    let mut i = 0;
    while i < LETTER_COUNT {
        out[map[i] as usize] = i as u8;
        i += 1;
    }
    out
}
