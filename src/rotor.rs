//! Rotor: one wheel of the scrambler.
//!
//! A rotor pairs an immutable wiring record with two offsets: the ring
//! setting (Ringstellung), fixed for the lifetime of the machine, and the
//! position (Grundstellung, then advanced by stepping). The wiring is fixed
//! to the rotor body, so the signal enters contact
//! `letter + position - ring_setting` and leaves shifted back by the same
//! amount.

use crate::error::EnigmaError;
use crate::utils::alphabet::{self, LETTER_COUNT};
use crate::wiring::{RotorKind, RotorWiring};

/// One wheel of the machine, parameterized by its wiring data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    wiring: &'static RotorWiring,
    ring_setting: u8,
    position: u8,
}

impl Rotor {
    /// Creates a rotor from a wiring record, an initial position and a ring
    /// setting.
    ///
    /// # Parameters
    /// - `wiring`: The wheel's wiring record, e.g. `RotorKind::I.wiring()`.
    /// - `position`: Initial position, 0..=25.
    /// - `ring_setting`: Ring setting, 0..=25.
    ///
    /// # Errors
    /// Returns [`EnigmaError::PositionOutOfRange`] or
    /// [`EnigmaError::RingSettingOutOfRange`] when a value is outside
    /// `[0, 25]`. Values are never clamped.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{Rotor, RotorKind};
    ///
    /// let rotor = Rotor::new(RotorKind::I.wiring(), 0, 0).unwrap();
    /// assert_eq!(rotor.forward(0), 4); // A -> E
    /// assert!(Rotor::new(RotorKind::I.wiring(), 26, 0).is_err());
    /// ```
    pub fn new(
        wiring: &'static RotorWiring,
        position: i32,
        ring_setting: i32,
    ) -> Result<Self, EnigmaError> {
        let position = to_offset(position).ok_or(EnigmaError::PositionOutOfRange(position))?;
        let ring_setting =
            to_offset(ring_setting).ok_or(EnigmaError::RingSettingOutOfRange(ring_setting))?;
        Ok(Rotor {
            wiring,
            ring_setting,
            position,
        })
    }

    /// Which historical wheel this rotor is.
    pub fn kind(&self) -> RotorKind {
        self.wiring.kind
    }

    /// Current position, 0..=25.
    pub fn position(&self) -> u8 {
        self.position
    }

    /// Ring setting, 0..=25.
    pub fn ring_setting(&self) -> u8 {
        self.ring_setting
    }

    /// Maps a letter offset on the way towards the reflector.
    pub fn forward(&self, letter: u8) -> u8 {
        let shift = self.offset();
        let contact = alphabet::shift(letter, shift);
        alphabet::shift(self.wiring.forward[contact as usize], -shift)
    }

    /// Maps a letter offset on the way back from the reflector.
    ///
    /// Inverse of [`forward`](Self::forward) for the same rotor state.
    pub fn backward(&self, letter: u8) -> u8 {
        let shift = self.offset();
        let contact = alphabet::shift(letter, shift);
        alphabet::shift(self.wiring.backward[contact as usize], -shift)
    }

    /// Advances the rotor by one position, wrapping Z to A.
    pub fn step(&mut self) {
        self.position = alphabet::shift(self.position, 1);
    }

    /// True when the visible letter is the notch letter, i.e. the next step
    /// of this rotor also carries the rotor to its left.
    pub fn at_notch(&self) -> bool {
        self.position == self.wiring.notch
    }

    fn offset(&self) -> i32 {
        self.position as i32 - self.ring_setting as i32
    }
}

fn to_offset(value: i32) -> Option<u8> {
    if (0..LETTER_COUNT as i32).contains(&value) {
        Some(value as u8)
    } else {
        None
    }
}
