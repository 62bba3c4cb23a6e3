//! The 64-bit perceptual hash value and its text/byte encodings.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Number of boolean features in every hash
pub const HASH_BITS: usize = 64;

/// Similarity threshold used by [`PHash::is_similar_default`]
pub const DEFAULT_THRESHOLD: f64 = 0.9;

/// The algorithm that produced a hash
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Average,
    Median,
    Difference,
    Wavelet,
    Perceptual,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Average,
        Algorithm::Median,
        Algorithm::Difference,
        Algorithm::Wavelet,
        Algorithm::Perceptual,
    ];

    /// Lowercase name used in the `"algorithm:hex"` form
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Average => "average",
            Algorithm::Median => "median",
            Algorithm::Difference => "difference",
            Algorithm::Wavelet => "wavelet",
            Algorithm::Perceptual => "perceptual",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Algorithm::ALL
            .iter()
            .copied()
            .find(|a| a.name() == s)
            .ok_or_else(|| Error::Format(format!("unknown algorithm name '{}'", s)))
    }
}

/// A perceptual hash: 64 bits tagged with the algorithm that produced them.
///
/// Comparison operations are only defined between hashes of the same
/// algorithm and return [`Error::Mismatch`] otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PHash {
    bits: u64,
    algorithm: Algorithm,
}

impl PHash {
    /// An all-zero hash, ready to have bits set during construction
    pub fn new(algorithm: Algorithm) -> Self {
        Self { bits: 0, algorithm }
    }

    pub fn from_bits(bits: u64, algorithm: Algorithm) -> Self {
        Self { bits, algorithm }
    }

    pub fn bits(&self) -> u64 {
        self.bits
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Set bit `index` (OR of `1 << index`)
    pub fn set_bit(&mut self, index: usize) -> Result<()> {
        if index >= HASH_BITS {
            return Err(Error::Index(index));
        }
        self.bits |= 1u64 << index;
        Ok(())
    }

    pub fn get_bit(&self, index: usize) -> Result<bool> {
        if index >= HASH_BITS {
            return Err(Error::Index(index));
        }
        Ok(self.bits & (1u64 << index) != 0)
    }

    /// Calculate the Hamming distance between two hashes of the same algorithm
    pub fn distance(&self, other: &PHash) -> Result<u32> {
        if self.algorithm != other.algorithm {
            return Err(Error::Mismatch {
                left: self.algorithm,
                right: other.algorithm,
            });
        }
        Ok((self.bits ^ other.bits).count_ones())
    }

    /// `1.0 - distance / 64`, in `[0.0, 1.0]`
    pub fn similarity(&self, other: &PHash) -> Result<f64> {
        let distance = self.distance(other)?;
        Ok(1.0 - distance as f64 / HASH_BITS as f64)
    }

    /// Check if two images are perceptually similar based on a threshold
    pub fn is_similar(&self, other: &PHash, threshold: f64) -> Result<bool> {
        Ok(self.similarity(other)? >= threshold)
    }

    pub fn is_similar_default(&self, other: &PHash) -> Result<bool> {
        self.is_similar(other, DEFAULT_THRESHOLD)
    }

    /// 16 lowercase, zero-padded hex digits
    pub fn to_hex(&self) -> String {
        format!("{:016x}", self.bits)
    }

    pub fn from_hex(hex: &str, algorithm: Algorithm) -> Result<Self> {
        if hex.len() != 16 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::Format(format!(
                "expected 16 hex digits, got '{}'",
                hex
            )));
        }
        let bits = u64::from_str_radix(hex, 16)
            .map_err(|e| Error::Format(format!("invalid hex '{}': {}", hex, e)))?;
        Ok(Self::from_bits(bits, algorithm))
    }

    /// Big-endian byte encoding; the algorithm travels separately
    pub fn to_bytes(&self) -> [u8; 8] {
        self.bits.to_be_bytes()
    }

    pub fn from_bytes(bytes: &[u8], algorithm: Algorithm) -> Result<Self> {
        let array: [u8; 8] = bytes.try_into().map_err(|_| {
            Error::Format(format!("expected 8 bytes, got {}", bytes.len()))
        })?;
        Ok(Self::from_bits(u64::from_be_bytes(array), algorithm))
    }
}

impl fmt::Display for PHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:016x}", self.algorithm, self.bits)
    }
}

impl FromStr for PHash {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (name, hex) = s
            .split_once(':')
            .ok_or_else(|| Error::Format(format!("missing ':' separator in '{}'", s)))?;
        let algorithm = name.parse::<Algorithm>()?;
        PHash::from_hex(hex, algorithm)
    }
}

impl Serialize for PHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
