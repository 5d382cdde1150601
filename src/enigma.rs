//! Enigma: the three-rotor controller and stepping state machine.
//!
//! Drives one character at a time through plugboard, rotors right to left,
//! reflector, rotors left to right, and the plugboard again. The rotors are
//! stepped before every letter.

use tracing::{debug, trace};

use crate::error::EnigmaError;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;
use crate::utils::alphabet;
use crate::wiring::ROTORS;

/// Number of rotors in the M3 scrambler.
pub const ROTOR_COUNT: usize = 3;

const LEFT: usize = 0;
const MIDDLE: usize = 1;
const RIGHT: usize = 2;

/// A three-rotor Enigma machine.
///
/// # Architecture
///
/// The rotors are held `[left, middle, right]`. The right rotor steps on
/// every letter; the positions behave as a base-26 odometer except for the
/// double step of the middle rotor. Wiring, reflector and plugboard are
/// immutable, so the three rotor positions are the machine's only state.
///
/// The machine is reciprocal: a fresh machine with the same settings turns
/// the cipher text back into the (uppercased) plain text. Because encrypting
/// advances the rotors, decryption needs its own freshly built machine.
///
/// A machine is mutated by every letter and is not meant to be shared
/// between threads; use one instance per message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enigma {
    rotors: [Rotor; ROTOR_COUNT],
    plugboard: Plugboard,
    reflector: Reflector,
}

impl Enigma {
    /// Builds a machine from rotor selections, positions, ring settings and
    /// plugboard pairs.
    ///
    /// # Parameters
    /// - `rotor_selection`: Three distinct indices into the wheel table,
    ///   left to right (`0` = I ... `4` = V).
    /// - `positions`: Three initial positions (Grundstellung), 0..=25.
    /// - `ring_settings`: Three ring settings (Ringstellung), 0..=25.
    /// - `plugboard_pairs`: Disjoint letter pairs, at most 13.
    ///
    /// # Errors
    /// Any invalid setting rejects the whole machine; see [`EnigmaError`].
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Enigma;
    ///
    /// let mut machine = Enigma::new(&[0, 1, 2], &[0, 0, 0], &[0, 0, 0], &[]).unwrap();
    /// assert_eq!(machine.process("attack at dawn"), "BSNGOE CM RTCB");
    /// ```
    ///
    /// ```
    /// use enigma::{Enigma, EnigmaError};
    ///
    /// let result = Enigma::new(&[0, 1, 2], &[0, 0, 0], &[0, 0, 0], &[('A', 'B'), ('B', 'C')]);
    /// assert_eq!(result.unwrap_err(), EnigmaError::LetterReused('B'));
    /// ```
    pub fn new(
        rotor_selection: &[usize],
        positions: &[i32],
        ring_settings: &[i32],
        plugboard_pairs: &[(char, char)],
    ) -> Result<Self, EnigmaError> {
        let plugboard = Plugboard::new(plugboard_pairs)?;
        Self::with_plugboard(rotor_selection, positions, ring_settings, plugboard)
    }

    /// Like [`new`](Self::new) with an already validated [`Plugboard`].
    ///
    /// # Errors
    /// Returns an error for a bad rotor selection, position or ring setting.
    pub fn with_plugboard(
        rotor_selection: &[usize],
        positions: &[i32],
        ring_settings: &[i32],
        plugboard: Plugboard,
    ) -> Result<Self, EnigmaError> {
        if rotor_selection.len() != ROTOR_COUNT {
            return Err(EnigmaError::RotorCount {
                expected: ROTOR_COUNT,
                found: rotor_selection.len(),
            });
        }
        check_count("positions", positions)?;
        check_count("ring settings", ring_settings)?;

        for (i, &index) in rotor_selection.iter().enumerate() {
            if index >= ROTORS.len() {
                return Err(EnigmaError::UnknownRotor {
                    index,
                    available: ROTORS.len(),
                });
            }
            if rotor_selection[..i].contains(&index) {
                return Err(EnigmaError::DuplicateRotor(index));
            }
        }

        let rotors = [
            Rotor::new(&ROTORS[rotor_selection[LEFT]], positions[LEFT], ring_settings[LEFT])?,
            Rotor::new(
                &ROTORS[rotor_selection[MIDDLE]],
                positions[MIDDLE],
                ring_settings[MIDDLE],
            )?,
            Rotor::new(&ROTORS[rotor_selection[RIGHT]], positions[RIGHT], ring_settings[RIGHT])?,
        ];

        let wheels: Vec<String> = rotors.iter().map(|r| r.kind().to_string()).collect();
        debug!(
            ?wheels,
            ?positions,
            ?ring_settings,
            plugboard_pairs = plugboard.pairs().len(),
            "enigma machine built"
        );

        Ok(Enigma {
            rotors,
            plugboard,
            reflector: Reflector::B,
        })
    }

    /// Encrypts (or decrypts) a message.
    ///
    /// The text is uppercased; every letter A-Z is replaced by
    /// [`encrypt_char`](Self::encrypt_char). All other characters are copied
    /// unchanged and do not move the rotors.
    pub fn process(&mut self, text: &str) -> String {
        text.chars().map(|c| self.encrypt_char(c)).collect()
    }

    /// Encrypts a single character, stepping the rotors first.
    ///
    /// Lowercase letters are treated as uppercase. A character outside A-Z
    /// is returned unchanged without stepping.
    pub fn encrypt_char(&mut self, letter: char) -> char {
        match alphabet::letter_index(letter) {
            Some(index) => alphabet::index_letter(self.encrypt_index(index)),
            None => letter,
        }
    }

    /// Current rotor positions, left to right.
    pub fn positions(&self) -> [u8; ROTOR_COUNT] {
        [
            self.rotors[LEFT].position(),
            self.rotors[MIDDLE].position(),
            self.rotors[RIGHT].position(),
        ]
    }

    /// Current rotor positions as the letters in the machine's windows,
    /// e.g. `"ADU"`.
    pub fn position_letters(&self) -> String {
        self.rotors
            .iter()
            .map(|r| alphabet::index_letter(r.position()))
            .collect()
    }

    /// The rotors, left to right.
    pub fn rotors(&self) -> &[Rotor; ROTOR_COUNT] {
        &self.rotors
    }

    /// The plugboard configuration.
    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    fn encrypt_index(&mut self, letter: u8) -> u8 {
        self.step_rotors();

        let mut signal = self.plugboard.swap(letter);
        for rotor in self.rotors.iter().rev() {
            signal = rotor.forward(signal);
        }
        signal = self.reflector.reflect(signal);
        for rotor in self.rotors.iter() {
            signal = rotor.backward(signal);
        }
        self.plugboard.swap(signal)
    }

    /// Advances the rotors for one key press.
    ///
    /// Both notches are read before anything moves. A middle rotor at its
    /// notch carries the left rotor and steps itself again (double step);
    /// otherwise a right rotor at its notch carries the middle one. The
    /// right rotor always steps.
    fn step_rotors(&mut self) {
        let middle_at_notch = self.rotors[MIDDLE].at_notch();
        let right_at_notch = self.rotors[RIGHT].at_notch();

        if middle_at_notch {
            self.rotors[LEFT].step();
            self.rotors[MIDDLE].step();
            trace!(positions = %self.position_letters(), "double step");
        } else if right_at_notch {
            self.rotors[MIDDLE].step();
            trace!(positions = %self.position_letters(), "middle rotor carried");
        }
        self.rotors[RIGHT].step();
    }
}

fn check_count(setting: &'static str, values: &[i32]) -> Result<(), EnigmaError> {
    if values.len() != ROTOR_COUNT {
        return Err(EnigmaError::SettingCount {
            setting,
            expected: ROTOR_COUNT,
            found: values.len(),
        });
    }
    Ok(())
}
