//! Entropy <-> phrase codec
//!
//! BIP-39 layout:
//! - ENT: 128-256 bits of entropy, in 32-bit steps
//! - CS: first ENT/32 bits of SHA256(entropy)
//! - ENT || CS split into 11-bit word indices, MSB first
//!
//! | ENT | CS | words |
//! |-----|----|-------|
//! | 128 | 4  | 12    |
//! | 160 | 5  | 15    |
//! | 192 | 6  | 18    |
//! | 224 | 7  | 21    |
//! | 256 | 8  | 24    |

use crate::normalize::split_words;
use crate::wordlist::Wordlist;
use crate::{MnemonicError, Result};
use bitcoin::hashes::{sha256, Hash};

/// Bits encoded by each word
pub const BITS_PER_WORD: usize = 11;

/// Accepted entropy lengths in bytes
pub const ENTROPY_LENGTHS: [usize; 5] = [16, 20, 24, 28, 32];

/// Accepted phrase lengths in words
pub const WORD_COUNTS: [usize; 5] = [12, 15, 18, 21, 24];

/// Number of words produced by `entropy_len` bytes of entropy
pub fn word_count_for(entropy_len: usize) -> Result<usize> {
    check_entropy_len(entropy_len)?;
    let ent = entropy_len * 8;
    Ok((ent + ent / 32) / BITS_PER_WORD)
}

/// Number of entropy bytes carried by a phrase of `word_count` words
pub fn entropy_len_for(word_count: usize) -> Result<usize> {
    if !WORD_COUNTS.contains(&word_count) {
        return Err(MnemonicError::InvalidWordCount(word_count));
    }
    let total = word_count * BITS_PER_WORD;
    Ok((total - total / 33) / 8)
}

fn check_entropy_len(len: usize) -> Result<()> {
    if ENTROPY_LENGTHS.contains(&len) {
        Ok(())
    } else {
        Err(MnemonicError::InvalidEntropyLength(len))
    }
}

/// Push `num_bits` bits of a value to the bit vector (MSB first)
fn push_bits(bits: &mut Vec<bool>, value: u16, num_bits: usize) {
    for i in (0..num_bits).rev() {
        bits.push((value >> i) & 1 != 0);
    }
}

/// Read up to 16 bits (MSB first)
fn read_bits(bits: &[bool]) -> u16 {
    bits.iter().fold(0u16, |acc, &bit| (acc << 1) | bit as u16)
}

/// The first `ENT/32` bits of SHA256(entropy)
fn checksum_bits(entropy: &[u8]) -> Vec<bool> {
    let hash = sha256::Hash::hash(entropy).to_byte_array();
    let cs_len = entropy.len() * 8 / 32;
    let mut bits = Vec::with_capacity(8);
    push_bits(&mut bits, hash[0] as u16, 8);
    bits.truncate(cs_len);
    bits
}

/// Split checksummed entropy into 11-bit word indices
pub fn to_indices(entropy: &[u8]) -> Result<Vec<u16>> {
    check_entropy_len(entropy.len())?;

    let mut bits = Vec::with_capacity(entropy.len() * 8 + 8);
    for &byte in entropy {
        push_bits(&mut bits, byte as u16, 8);
    }
    bits.extend(checksum_bits(entropy));
    debug_assert_eq!(bits.len() % BITS_PER_WORD, 0);

    Ok(bits.chunks(BITS_PER_WORD).map(read_bits).collect())
}

/// Reassemble entropy from 11-bit word indices, verifying the checksum
pub fn from_indices(indices: &[u16]) -> Result<Vec<u8>> {
    let entropy_len = entropy_len_for(indices.len())?;

    let mut bits = Vec::with_capacity(indices.len() * BITS_PER_WORD);
    for &index in indices {
        if index as usize >= 1 << BITS_PER_WORD {
            return Err(MnemonicError::InvalidWord(format!("index {}", index)));
        }
        push_bits(&mut bits, index, BITS_PER_WORD);
    }

    let (entropy_bits, cs) = bits.split_at(entropy_len * 8);
    let entropy: Vec<u8> = entropy_bits
        .chunks(8)
        .map(|byte| read_bits(byte) as u8)
        .collect();

    if checksum_bits(&entropy) != cs {
        return Err(MnemonicError::ChecksumMismatch);
    }

    Ok(entropy)
}

/// Encode entropy as a phrase joined by the wordlist's separator
pub fn encode(entropy: &[u8], wordlist: &Wordlist) -> Result<String> {
    let separator = wordlist.language().separator().to_string();
    let words = to_indices(entropy)?
        .into_iter()
        .map(|i| {
            wordlist
                .word(i)
                .ok_or_else(|| MnemonicError::InvalidWord(format!("index {}", i)))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(words.join(&separator))
}

/// Decode a phrase (in any whitespace/normalization form) back to entropy
pub fn decode(phrase: &str, wordlist: &Wordlist) -> Result<Vec<u8>> {
    let words = split_words(phrase);
    entropy_len_for(words.len())?;

    let indices = words
        .iter()
        .map(|w| wordlist.index_of(w))
        .collect::<Result<Vec<_>>>()?;

    from_indices(&indices)
}
