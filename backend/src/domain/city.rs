//! Normalised city names used as the weather cache key.

use std::fmt;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Minimum number of characters in a city name once trimmed.
pub const CITY_NAME_MIN_CHARS: usize = 2;

/// Validation errors raised for raw city input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CityNameValidationError {
    /// No city value was supplied.
    #[error("City name is required.")]
    Missing,
    /// The city value was not a single string, such as a repeated parameter.
    #[error("City name must be a string.")]
    NotAString,
    /// The value is blank once surrounding whitespace is removed.
    #[error("City name cannot be empty.")]
    Empty,
    /// The trimmed value is shorter than [`CITY_NAME_MIN_CHARS`].
    #[error("City name must be at least {min} characters long.")]
    TooShort { min: usize },
}

/// Trimmed, lower-cased city name.
///
/// This is the only key type accepted by weather store operations, so raw
/// user input never reaches persistence un-normalised.
///
/// # Examples
/// ```
/// use weather_backend::domain::CityName;
///
/// let city = CityName::new("  PARIS ").expect("valid city");
/// assert_eq!(city.as_str(), "paris");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CityName(String);

impl CityName {
    /// Validate and normalise a raw city string.
    pub fn new(raw: &str) -> Result<Self, CityNameValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CityNameValidationError::Empty);
        }
        if trimmed.chars().count() < CITY_NAME_MIN_CHARS {
            return Err(CityNameValidationError::TooShort {
                min: CITY_NAME_MIN_CHARS,
            });
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    /// Validate an optional raw value, treating absence as
    /// [`CityNameValidationError::Missing`].
    pub fn from_optional(raw: Option<&str>) -> Result<Self, CityNameValidationError> {
        raw.map_or(Err(CityNameValidationError::Missing), Self::new)
    }

    /// Borrow the normalised name.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CityName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    //! Validation and normalisation rules for city names.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(" Paris ")]
    #[case("paris")]
    #[case("PARIS")]
    #[case("\tPaRiS\n")]
    fn case_and_whitespace_variants_share_one_key(#[case] raw: &str) {
        let city = CityName::new(raw).expect("valid city");
        assert_eq!(city.as_str(), "paris");
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_input_is_rejected(#[case] raw: &str) {
        assert_eq!(CityName::new(raw), Err(CityNameValidationError::Empty));
    }

    #[rstest]
    #[case("a")]
    #[case("  b  ")]
    #[case("é")]
    fn single_character_input_is_rejected(#[case] raw: &str) {
        assert_eq!(
            CityName::new(raw),
            Err(CityNameValidationError::TooShort { min: 2 })
        );
    }

    #[rstest]
    fn multibyte_names_count_characters_not_bytes() {
        let city = CityName::new("Łó").expect("two characters is enough");
        assert_eq!(city.as_str(), "łó");
    }

    #[rstest]
    fn missing_input_is_rejected() {
        assert_eq!(
            CityName::from_optional(None),
            Err(CityNameValidationError::Missing)
        );
    }

    #[rstest]
    fn messages_match_client_contract() {
        assert_eq!(
            CityNameValidationError::TooShort { min: 2 }.to_string(),
            "City name must be at least 2 characters long."
        );
        assert_eq!(
            CityNameValidationError::Empty.to_string(),
            "City name cannot be empty."
        );
        assert_eq!(
            CityNameValidationError::NotAString.to_string(),
            "City name must be a string."
        );
    }

    #[rstest]
    fn serialises_as_plain_string() {
        let city = CityName::new("Oslo").expect("valid city");
        assert_eq!(
            serde_json::to_value(&city).expect("serialise"),
            serde_json::json!("oslo")
        );
    }
}
