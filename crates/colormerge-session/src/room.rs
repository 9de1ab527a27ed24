//! Room codes.

use std::fmt;

use rand::Rng;

const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Uppercase alphanumeric room code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(String);

impl RoomId {
    /// Normalizes user input: surrounding whitespace removed, uppercased.
    ///
    /// # Examples
    ///
    /// ```
    /// use colormerge_session::RoomId;
    ///
    /// assert_eq!(RoomId::parse(" ab12cd ").as_str(), "AB12CD");
    /// ```
    pub fn parse(code: &str) -> Self {
        Self(code.trim().to_ascii_uppercase())
    }

    /// Draws a random code of `len` characters.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Self {
        let code = (0..len)
            .map(|_| char::from(CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())]))
            .collect();
        Self(code)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
