//! Machine settings: serializable configuration and operator text formats.
//!
//! A [`MachineConfig`] is the daily key sheet for one machine: wheel order,
//! ring settings, start positions and plugboard cables. It can be read from
//! TOML and turned into a fresh [`Enigma`] as often as needed, which is how
//! the same settings are used once to encrypt and once to decrypt.
//!
//! ```toml
//! rotors = [0, 1, 2]
//! positions = [1, 4, 5]
//! ring_settings = [1, 4, 5]
//! plugboard = "AB CD EF"
//! ```

use serde::{Deserialize, Serialize};

use crate::enigma::{Enigma, ROTOR_COUNT};
use crate::error::EnigmaError;
use crate::plugboard::Plugboard;
use crate::utils::alphabet;
use crate::wiring::RotorKind;

/// Settings for one machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MachineConfig {
    /// Wheel indices left to right (`0` = I ... `4` = V).
    pub rotors: Vec<usize>,
    /// Start positions left to right.
    #[serde(default = "zero_settings")]
    pub positions: Vec<i32>,
    /// Ring settings left to right.
    #[serde(default = "zero_settings")]
    pub ring_settings: Vec<i32>,
    /// Plugboard cables as space separated letter pairs, e.g. `"AB CD"`.
    #[serde(default)]
    pub plugboard: String,
}

impl Default for MachineConfig {
    /// Wheels I-II-III at `AAA`, rings `AAA`, no cables.
    fn default() -> Self {
        MachineConfig {
            rotors: vec![0, 1, 2],
            positions: zero_settings(),
            ring_settings: zero_settings(),
            plugboard: String::new(),
        }
    }
}

impl MachineConfig {
    /// Decodes settings from a TOML document.
    ///
    /// # Errors
    /// Returns [`EnigmaError::Config`] if the document is malformed or has
    /// unknown keys. Setting values are checked later by
    /// [`build`](Self::build).
    pub fn from_toml_str(raw: &str) -> Result<Self, EnigmaError> {
        toml::from_str(raw).map_err(|e| EnigmaError::Config(e.to_string()))
    }

    /// Encodes the settings as a TOML document.
    ///
    /// # Errors
    /// Returns [`EnigmaError::Config`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, EnigmaError> {
        toml::to_string(self).map_err(|e| EnigmaError::Config(e.to_string()))
    }

    /// Builds a fresh machine from these settings.
    ///
    /// # Errors
    /// Any invalid setting is reported; nothing is clamped.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::MachineConfig;
    ///
    /// let config = MachineConfig::from_toml_str(
    ///     "rotors = [0, 1, 2]\npositions = [1, 4, 5]\nring_settings = [1, 4, 5]\nplugboard = \"AB CD EF\"",
    /// )
    /// .unwrap();
    ///
    /// let cipher = config.build().unwrap().process("HELLO WORLD");
    /// assert_eq!(config.build().unwrap().process(&cipher), "HELLO WORLD");
    /// ```
    pub fn build(&self) -> Result<Enigma, EnigmaError> {
        let plugboard: Plugboard = self.plugboard.parse()?;
        Enigma::with_plugboard(&self.rotors, &self.positions, &self.ring_settings, plugboard)
    }
}

/// Parses three rotor positions or ring settings.
///
/// Accepts whitespace separated integers (`"1 4 5"`), single letters
/// (`"B E F"`), or one run of letters as shown in the machine's windows
/// (`"BEF"`). Ranges are not checked here.
///
/// # Errors
/// Returns [`EnigmaError::InvalidSetting`] for a token that is neither.
///
/// # Examples
///
/// ```
/// use enigma::config::parse_settings;
///
/// assert_eq!(parse_settings("1 4 5").unwrap(), vec![1, 4, 5]);
/// assert_eq!(parse_settings("bef").unwrap(), vec![1, 4, 5]);
/// ```
pub fn parse_settings(raw: &str) -> Result<Vec<i32>, EnigmaError> {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    if let [word] = tokens.as_slice() {
        if word.len() > 1 && word.chars().all(|c| c.is_ascii_alphabetic()) {
            return word.chars().map(letter_setting).collect();
        }
    }
    tokens.into_iter().map(parse_setting_token).collect()
}

/// Parses a wheel order given as roman numerals (`"I II III"`) or as
/// indices (`"0 1 2"`).
///
/// # Errors
/// Returns [`EnigmaError::InvalidSetting`] for an unrecognized token.
pub fn parse_rotors(raw: &str) -> Result<Vec<usize>, EnigmaError> {
    raw.split_whitespace()
        .map(|token| match token.parse::<usize>() {
            Ok(index) => Ok(index),
            Err(_) => token.parse::<RotorKind>().map(RotorKind::index),
        })
        .collect()
}

fn parse_setting_token(token: &str) -> Result<i32, EnigmaError> {
    if let Ok(value) = token.parse::<i32>() {
        return Ok(value);
    }
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => letter_setting(c),
        _ => Err(EnigmaError::InvalidSetting(token.to_string())),
    }
}

fn letter_setting(c: char) -> Result<i32, EnigmaError> {
    alphabet::letter_index(c)
        .map(i32::from)
        .ok_or_else(|| EnigmaError::InvalidSetting(c.to_string()))
}

fn zero_settings() -> Vec<i32> {
    vec![0; ROTOR_COUNT]
}
