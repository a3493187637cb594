use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 256-bit seed that makes board generation reproducible.
///
/// Seeds are written as 64 lowercase hex digits. Each random stream used by
/// the generator is derived from the seed and a purpose label with SHA-256,
/// so adding a stream never shifts the values of another.
///
/// # Examples
///
/// ```
/// use tilelink_generator::BoardSeed;
///
/// let text = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";
/// let seed: BoardSeed = text.parse()?;
/// assert_eq!(seed.to_string(), text);
/// # Ok::<(), tilelink_generator::SeedParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSeed([u8; 32]);

impl BoardSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::rng().random())
    }

    /// Returns the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns the random stream derived from this seed for `label`.
    ///
    /// The generator uses the `"board"` stream; other labels give independent
    /// streams for callers that need reproducible randomness of their own.
    #[must_use]
    pub fn rng(&self, label: &str) -> Pcg64 {
        let digest: [u8; 32] = Sha256::new()
            .chain_update(label.as_bytes())
            .chain_update(self.0)
            .finalize()
            .into();
        Pcg64::from_seed(digest)
    }
}

impl Display for BoardSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Errors returned when parsing a [`BoardSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    /// The text is not 64 characters long.
    #[display("seed must have 64 hex digits, got {len}")]
    InvalidLength {
        /// Number of characters found.
        len: usize,
    },
    /// A character is not a hex digit.
    #[display("invalid hex digit at position {index}")]
    InvalidDigit {
        /// Character position.
        index: usize,
    },
}

impl FromStr for BoardSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s.chars().collect::<Vec<_>>();
        if digits.len() != 64 {
            return Err(SeedParseError::InvalidLength { len: digits.len() });
        }
        let mut bytes = [0; 32];
        for (i, (byte, pair)) in bytes.iter_mut().zip(digits.chunks_exact(2)).enumerate() {
            let nibble = |offset: usize| {
                let index = 2 * i + offset;
                pair[offset]
                    .to_digit(16)
                    .and_then(|d| u8::try_from(d).ok())
                    .ok_or(SeedParseError::InvalidDigit { index })
            };
            *byte = (nibble(0)? << 4) | nibble(1)?;
        }
        Ok(Self(bytes))
    }
}
