//! Error types for the Enigma library.
//!
//! Every variant describes an invalid machine configuration. Once an
//! [`Enigma`](crate::Enigma) has been built it cannot fail: all runtime
//! operations are total.

use thiserror::Error;

/// Errors produced while building or configuring an Enigma machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnigmaError {
    /// The rotor selection does not contain exactly three wheels.
    #[error("Expected {expected} rotors, got {found}")]
    RotorCount { expected: usize, found: usize },
    /// A rotor index does not name a wheel in the wiring table.
    #[error("Rotor index {index} is outside the wiring table (0..{available})")]
    UnknownRotor { index: usize, available: usize },
    /// The same physical wheel was selected twice.
    #[error("Rotor {0} is selected more than once")]
    DuplicateRotor(usize),
    /// The number of positions or ring settings does not match the rotor count.
    #[error("Expected {expected} {setting}, got {found}")]
    SettingCount {
        setting: &'static str,
        expected: usize,
        found: usize,
    },
    /// A rotor position (Grundstellung) is outside `[0, 25]`.
    #[error("Rotor position {0} is outside the range [0, 25]")]
    PositionOutOfRange(i32),
    /// A ring setting (Ringstellung) is outside `[0, 25]`.
    #[error("Ring setting {0} is outside the range [0, 25]")]
    RingSettingOutOfRange(i32),
    /// More plugboard pairs than the 13 cables a 26-letter board can hold.
    #[error("Plugboard has {0} pairs, at most 13 are allowed")]
    TooManyPairs(usize),
    /// A letter appears in more than one plugboard pair.
    #[error("Plugboard letter {0} appears in more than one pair")]
    LetterReused(char),
    /// A letter is plugged to itself.
    #[error("Plugboard letter {0} is paired with itself")]
    SelfPair(char),
    /// A character outside A-Z was used where a letter is required.
    #[error("'{0}' is not a letter A-Z")]
    NotALetter(char),
    /// A textual setting token could not be parsed.
    #[error("Invalid setting '{0}'")]
    InvalidSetting(String),
    /// A configuration document could not be decoded.
    #[error("Invalid configuration: {0}")]
    Config(String),
}
