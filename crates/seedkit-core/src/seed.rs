//! BIP-39 seed derivation
//!
//! seed = PBKDF2-HMAC-SHA512(NFKD(phrase), "mnemonic" || NFKD(passphrase), 2048, 64)

use crate::normalize::{normalize_for_seed, normalize_passphrase};
use sha2::Sha512;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// PBKDF2 rounds fixed by BIP-39
pub const PBKDF2_ROUNDS: u32 = 2048;

/// Salt prefix fixed by BIP-39
pub const SALT_PREFIX: &str = "mnemonic";

/// Seed length in bytes
pub const SEED_LEN: usize = 64;

/// 64-byte BIP-39 seed, wiped on drop
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Seed([u8; SEED_LEN]);

impl Seed {
    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }
}

impl From<[u8; SEED_LEN]> for Seed {
    fn from(bytes: [u8; SEED_LEN]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed(<redacted>)")
    }
}

/// Derive the seed for `phrase` protected by `passphrase` (empty for none).
///
/// The phrase may use any whitespace or normalization form; it is normalized
/// before stretching, so equivalent spellings give the same seed.
pub fn to_seed(phrase: &str, passphrase: &str) -> Seed {
    let mut password = normalize_for_seed(phrase);
    let mut salt = format!("{}{}", SALT_PREFIX, normalize_passphrase(passphrase));

    let mut seed = [0u8; SEED_LEN];
    pbkdf2::pbkdf2_hmac::<Sha512>(password.as_bytes(), salt.as_bytes(), PBKDF2_ROUNDS, &mut seed);

    password.zeroize();
    salt.zeroize();
    let out = Seed(seed);
    seed.zeroize();
    out
}
