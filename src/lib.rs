//! Three-rotor Enigma (M3) cipher engine.
//!
//! Reproduces the signal path of the Army/Air Force Enigma: plugboard,
//! three rotors, reflector B, and the rotor stepping mechanism including
//! the double step of the middle rotor. The machine is reciprocal: a
//! machine with the same settings both encrypts and decrypts.
//!
//! # Architecture
//!
//! ```text
//! alphabet    (letter offsets, true modulo)
//! wiring      (static tables: wheels I-V, notches, reflector B)
//!     ↓
//! Rotor       (wiring + ring setting + position; forward / backward / step)
//! Plugboard   (disjoint letter swaps, applied on entry and exit)
//! Reflector   (fixed involution without fixed points)
//!     ↓
//! Enigma      (rotors [left, middle, right]; step, then
//!              plugboard → R → M → L → reflector → L → M → R → plugboard)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt with two machines built from the same settings:
//!
//! ```
//! use enigma::Enigma;
//!
//! let pairs = [('A', 'B'), ('C', 'D'), ('E', 'F')];
//!
//! let mut encoder = Enigma::new(&[0, 1, 2], &[1, 4, 5], &[1, 4, 5], &pairs).unwrap();
//! let cipher = encoder.process("Hello World");
//! assert_eq!(cipher, "AOVCT BTSYW");
//!
//! let mut decoder = Enigma::new(&[0, 1, 2], &[1, 4, 5], &[1, 4, 5], &pairs).unwrap();
//! assert_eq!(decoder.process(&cipher), "HELLO WORLD");
//! ```
//!
//! Load a key sheet from TOML:
//!
//! ```
//! use enigma::MachineConfig;
//!
//! let config = MachineConfig::from_toml_str("rotors = [0, 1, 2]").unwrap();
//! let mut machine = config.build().unwrap();
//! assert_eq!(machine.process("AAAAA"), "BDZGL");
//! ```

#![deny(clippy::all)]

pub mod config;
pub mod error;
pub mod plugboard;
pub mod reflector;
pub mod rotor;
pub mod utils;
pub mod wiring;

mod enigma;

pub use config::MachineConfig;
pub use enigma::{Enigma, ROTOR_COUNT};
pub use error::EnigmaError;
pub use plugboard::Plugboard;
pub use reflector::Reflector;
pub use rotor::Rotor;
pub use wiring::RotorKind;
