use std::{fmt, str::FromStr};

use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// Error returned when parsing a [`LevelSeed`] from a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum LevelSeedError {
    /// The string is not 64 characters long.
    #[display("seed must be 64 hex digits, got {len} characters")]
    InvalidLength {
        /// Length of the rejected string in bytes.
        len: usize,
    },
    /// A character is not a hex digit.
    #[display("invalid hex digit at index {index}")]
    InvalidDigit {
        /// Byte index of the offending character.
        index: usize,
    },
}

/// A 256-bit seed that fully determines a generated level.
///
/// Seeds are written as 64 lowercase hex digits.
///
/// # Examples
///
/// ```
/// use shikaku_generator::LevelSeed;
///
/// let seed: LevelSeed = "00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff".parse()?;
/// assert_eq!(seed.as_bytes()[1], 0x11);
/// assert_eq!(seed.to_string().parse::<LevelSeed>()?, seed);
/// # Ok::<(), shikaku_generator::LevelSeedError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LevelSeed([u8; 32]);

impl LevelSeed {
    /// Draws a fresh seed from the thread-local RNG.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Derives the seed of the `index`-th level of a batch.
    #[must_use]
    pub fn child(&self, index: u64) -> Self {
        Self(self.digest(b"shikaku/batch", index))
    }

    /// Returns an RNG for one stage of generation.
    ///
    /// Different `domain` tags and `counter` values give independent streams, so
    /// retrying an attempt never replays the random choices of an earlier one.
    pub(crate) fn rng(&self, domain: &[u8], counter: u64) -> Pcg64 {
        Pcg64::from_seed(self.digest(domain, counter))
    }

    fn digest(&self, domain: &[u8], counter: u64) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(self.0);
        hasher.update(domain);
        hasher.update(counter.to_le_bytes());
        hasher.finalize().into()
    }
}

impl From<[u8; 32]> for LevelSeed {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for LevelSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for LevelSeed {
    type Err = LevelSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 64 {
            return Err(LevelSeedError::InvalidLength { len: s.len() });
        }
        let digit = |index: usize| {
            hex_value(s.as_bytes()[index]).ok_or(LevelSeedError::InvalidDigit { index })
        };
        let mut bytes = [0; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = (digit(2 * i)? << 4) | digit(2 * i + 1)?;
        }
        Ok(Self(bytes))
    }
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
