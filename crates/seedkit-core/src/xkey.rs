//! Extended private key serialization
//!
//! 78-byte BIP-32 payload, base58check encoded:
//! [version (4)][depth (1)][parent fingerprint (4)][child number (4)]
//! [chain code (32)][0x00 || private key (33)]

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use zeroize::Zeroize;

/// Serialized length of an extended key before the checksum
pub const XKEY_PAYLOAD_LEN: usize = 78;

/// Network selector for extended key version bytes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Mainnet (`xprv`)
    #[default]
    Main,
    /// Testnet, signet and regtest (`tprv`)
    Test,
}

impl Network {
    /// Private-key version bytes
    pub fn xpriv_version(self) -> [u8; 4] {
        match self {
            Network::Main => [0x04, 0x88, 0xAD, 0xE4],
            Network::Test => [0x04, 0x35, 0x83, 0x94],
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Main => f.write_str("main"),
            Network::Test => f.write_str("test"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown network: {0}")]
pub struct UnknownNetwork(pub String);

impl FromStr for Network {
    type Err = UnknownNetwork;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "main" | "mainnet" | "bitcoin" => Ok(Network::Main),
            "test" | "testnet" | "testnet3" | "testnet4" | "signet" | "regtest" => {
                Ok(Network::Test)
            }
            _ => Err(UnknownNetwork(s.to_string())),
        }
    }
}

/// Encode a depth-0 extended private key
pub fn encode_xpriv(private_key: &[u8; 32], chain_code: &[u8; 32], network: Network) -> String {
    let mut payload = Vec::with_capacity(XKEY_PAYLOAD_LEN);
    payload.extend_from_slice(&network.xpriv_version());
    payload.push(0); // depth
    payload.extend_from_slice(&[0; 4]); // parent fingerprint
    payload.extend_from_slice(&[0; 4]); // child number
    payload.extend_from_slice(chain_code);
    payload.push(0);
    payload.extend_from_slice(private_key);
    debug_assert_eq!(payload.len(), XKEY_PAYLOAD_LEN);

    let encoded = bitcoin::base58::encode_check(&payload);
    payload.zeroize();
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitcoin::bip32::Xpriv;
    use bitcoin::NetworkKind;

    #[test]
    fn test_matches_bitcoin_encoder() {
        for fill in [0x01u8, 0x42, 0x7f] {
            let seed = [fill; 64];
            let reference = Xpriv::new_master(NetworkKind::Main, &seed).unwrap();
            let test_reference = Xpriv::new_master(NetworkKind::Test, &seed).unwrap();

            let key = reference.private_key.secret_bytes();
            let decoded = bitcoin::base58::decode_check(&reference.to_string()).unwrap();
            let mut chain_code = [0u8; 32];
            chain_code.copy_from_slice(&decoded[13..45]);

            assert_eq!(
                encode_xpriv(&key, &chain_code, Network::Main),
                reference.to_string()
            );
            assert_eq!(
                encode_xpriv(&key, &chain_code, Network::Test),
                test_reference.to_string()
            );
        }
    }

    #[test]
    fn test_prefixes() {
        let mut key = [0u8; 32];
        key[31] = 1;
        assert!(encode_xpriv(&key, &[0; 32], Network::Main).starts_with("xprv"));
        assert!(encode_xpriv(&key, &[0; 32], Network::Test).starts_with("tprv"));
    }

    #[test]
    fn test_layout() {
        let key = [0x11u8; 32];
        let chain_code = [0x22u8; 32];
        let decoded =
            bitcoin::base58::decode_check(&encode_xpriv(&key, &chain_code, Network::Main)).unwrap();
        assert_eq!(decoded.len(), XKEY_PAYLOAD_LEN);
        assert_eq!(&decoded[..4], &[0x04, 0x88, 0xAD, 0xE4]);
        assert_eq!(&decoded[4..13], &[0u8; 9]);
        assert_eq!(&decoded[13..45], &chain_code);
        assert_eq!(decoded[45], 0);
        assert_eq!(&decoded[46..], &key);
    }

    #[test]
    fn test_network_parsing() {
        assert_eq!("bitcoin".parse::<Network>().unwrap(), Network::Main);
        assert_eq!("Signet".parse::<Network>().unwrap(), Network::Test);
        assert!("litecoin".parse::<Network>().is_err());
    }
}
