//! Card numbers

use std::fmt;

use thiserror::Error;
use zeroize::Zeroize;

/// Number of digits in an accepted card number.
pub const CARD_NUMBER_LENGTH: usize = 16;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CardNumberError {
    #[error("card number must be {CARD_NUMBER_LENGTH} characters long")]
    InvalidLength,

    #[error("card number must contain only digits")]
    NonDigit,
}

/// A card number that has passed the shape check: exactly 16 ASCII digits.
pub struct CardNumber(String);

impl CardNumber {
    /// Validate the shape of a raw card number.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not exactly 16 ASCII digits.
    pub fn parse(raw: &str) -> Result<Self, CardNumberError> {
        if raw.len() != CARD_NUMBER_LENGTH {
            return Err(CardNumberError::InvalidLength);
        }

        if !raw.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(CardNumberError::NonDigit);
        }

        Ok(Self(raw.to_string()))
    }

    #[must_use]
    pub fn last_four(&self) -> String {
        self.0
            .get(CARD_NUMBER_LENGTH - 4..)
            .unwrap_or_default()
            .to_string()
    }

    #[must_use]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }
}

impl fmt::Debug for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CardNumber(************{})", self.last_four())
    }
}

impl Drop for CardNumber {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}
