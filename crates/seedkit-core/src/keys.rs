//! BIP-32 master key derivation
//!
//! I = HMAC-SHA512(key = "Bitcoin seed", data = seed)
//! - IL (first 32 bytes): master private key, must satisfy 0 < IL < n
//! - IR (last 32 bytes): master chain code
//!
//! An out-of-range IL is reported as [`MnemonicError::InvalidMasterKey`];
//! the seed is never altered to retry.

use crate::mnemonic::Mnemonic;
use crate::seed::Seed;
use crate::xkey::{encode_xpriv, Network};
use crate::{MnemonicError, Result};
use bitcoin::hashes::{hmac, sha512, Hash, HashEngine};
use secp256k1::constants::CURVE_ORDER;
use secp256k1::SecretKey;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// HMAC key separating BIP-32 master derivation from other uses of the seed
pub const MASTER_HMAC_KEY: &[u8] = b"Bitcoin seed";

/// Depth-0 node of an HD tree
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct MasterKey {
    private_key: [u8; 32],
    chain_code: [u8; 32],
}

impl MasterKey {
    /// Derive the master key of `mnemonic` protected by `passphrase`
    pub fn from_mnemonic(mnemonic: &Mnemonic, passphrase: &str) -> Result<Self> {
        derive_master(mnemonic.to_seed(passphrase).as_bytes())
    }

    /// Big-endian secp256k1 scalar
    pub fn private_key(&self) -> &[u8; 32] {
        &self.private_key
    }

    pub fn chain_code(&self) -> &[u8; 32] {
        &self.chain_code
    }

    pub fn depth(&self) -> u8 {
        0
    }

    pub fn parent_fingerprint(&self) -> [u8; 4] {
        [0; 4]
    }

    pub fn child_number(&self) -> u32 {
        0
    }

    /// The private key as a `secp256k1` secret key
    pub fn secret_key(&self) -> Result<SecretKey> {
        SecretKey::from_slice(&self.private_key).map_err(|_| MnemonicError::InvalidMasterKey)
    }

    /// Base58check extended private key (`xprv…` / `tprv…`)
    pub fn to_xpriv(&self, network: Network) -> String {
        encode_xpriv(&self.private_key, &self.chain_code, network)
    }
}

impl fmt::Debug for MasterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MasterKey")
            .field("private_key", &"<redacted>")
            .field("chain_code", &"<redacted>")
            .finish()
    }
}

/// Whether a big-endian 32-byte integer lies in [1, n-1]
pub fn is_valid_scalar(scalar: &[u8; 32]) -> bool {
    scalar.iter().any(|&b| b != 0) && scalar[..] < CURVE_ORDER[..]
}

/// Derive the BIP-32 master key from a 64-byte seed
pub fn derive_master(seed: &[u8; 64]) -> Result<MasterKey> {
    let mut engine = hmac::HmacEngine::<sha512::Hash>::new(MASTER_HMAC_KEY);
    engine.input(seed);
    let mut i = hmac::Hmac::<sha512::Hash>::from_engine(engine).to_byte_array();

    let mut private_key = [0u8; 32];
    let mut chain_code = [0u8; 32];
    private_key.copy_from_slice(&i[..32]);
    chain_code.copy_from_slice(&i[32..]);
    i.zeroize();

    let key = MasterKey {
        private_key,
        chain_code,
    };
    private_key.zeroize();
    chain_code.zeroize();

    if !is_valid_scalar(&key.private_key) {
        return Err(MnemonicError::InvalidMasterKey);
    }
    Ok(key)
}

impl Seed {
    /// Derive the BIP-32 master key from this seed
    pub fn master_key(&self) -> Result<MasterKey> {
        derive_master(self.as_bytes())
    }
}
