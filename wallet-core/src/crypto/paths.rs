// wallet-core/src/crypto/paths.rs
//
// Derivation Paths Module - BIP-32 path model and Cosmos path builders
// BIP-44 (Purpose), SLIP-44 (Coin Types)

use crate::error::{CryptoError, WalletError, WalletResult};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// SLIP-44 COIN TYPES
// =============================================================================
/// SLIP-44 Registered Coin Types
/// Ref: https://github.com/satoshilabs/slips/blob/master/slip-0044.md
pub mod coin_type {
    pub const BITCOIN: u32 = 0;
    pub const ETHEREUM: u32 = 60;
    /// Cosmos Hub and most Cosmos SDK chains
    pub const COSMOS: u32 = 118;
    pub const TERRA: u32 = 330;
    pub const SECRET: u32 = 529;
}

/// Bit marking a hardened child index.
pub const HARDENED_BIT: u32 = 0x8000_0000;

// =============================================================================
// PATH SEGMENT
// =============================================================================
/// One level of an HD path: an index below 2^31 plus the hardened flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathSegment {
    index: u32,
    hardened: bool,
}

impl PathSegment {
    pub fn new(index: u32, hardened: bool) -> WalletResult<Self> {
        if index >= HARDENED_BIT {
            return Err(invalid_path(format!(
                "index {} overflows into the hardened bit",
                index
            )));
        }
        Ok(Self { index, hardened })
    }

    #[inline]
    pub fn index(&self) -> u32 {
        self.index
    }

    #[inline]
    pub fn is_hardened(&self) -> bool {
        self.hardened
    }

    /// BIP-32 child number (`index | 0x80000000` when hardened).
    #[inline]
    pub fn child_number(&self) -> u32 {
        if self.hardened {
            self.index | HARDENED_BIT
        } else {
            self.index
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hardened {
            write!(f, "{}'", self.index)
        } else {
            write!(f, "{}", self.index)
        }
    }
}

// =============================================================================
// HD PATH
// =============================================================================
/// A parsed derivation path such as `m/44'/118'/0'/0/0`.
///
/// Always holds at least one segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HdPath {
    segments: Vec<PathSegment>,
}

impl HdPath {
    /// Parse `m/...` notation. `'`, `h` and `H` mark hardened levels.
    pub fn parse(path: &str) -> WalletResult<Self> {
        let path = path.trim();
        if path.is_empty() {
            return Err(invalid_path("path is empty".to_string()));
        }

        let mut parts = path.split('/');
        if parts.next() != Some("m") {
            return Err(invalid_path(format!("'{}' must start with 'm/'", path)));
        }

        let segments = parts
            .map(|part| parse_segment(path, part))
            .collect::<WalletResult<Vec<_>>>()?;

        Self::from_segments(segments)
    }

    pub fn from_segments(segments: Vec<PathSegment>) -> WalletResult<Self> {
        if segments.is_empty() {
            return Err(invalid_path("path has no segments".to_string()));
        }
        Ok(Self { segments })
    }

    #[inline]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Append a non-hardened child index.
    pub fn child(&self, index: u32) -> WalletResult<Self> {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::new(index, false)?);
        Ok(Self { segments })
    }

    // =========================================================================
    // BUILDERS
    // =========================================================================

    /// `m/44'/118'/0'/0/{index}`
    pub fn cosmos(index: u32) -> WalletResult<Self> {
        Self::bip44(44, coin_type::COSMOS, 0, 0, index)
    }

    /// `m/{purpose}'/{coin_type}'/{account}'/{change}/{index}`
    pub fn bip44(
        purpose: u32,
        coin_type: u32,
        account: u32,
        change: u32,
        index: u32,
    ) -> WalletResult<Self> {
        Self::from_segments(vec![
            PathSegment::new(purpose, true)?,
            PathSegment::new(coin_type, true)?,
            PathSegment::new(account, true)?,
            PathSegment::new(change, false)?,
            PathSegment::new(index, false)?,
        ])
    }
}

impl Default for HdPath {
    /// `m/44'/118'/0'/0/0`
    fn default() -> Self {
        let segment = |index, hardened| PathSegment { index, hardened };
        Self {
            segments: vec![
                segment(44, true),
                segment(coin_type::COSMOS, true),
                segment(0, true),
                segment(0, false),
                segment(0, false),
            ],
        }
    }
}

impl FromStr for HdPath {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for HdPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("m")?;
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

impl serde::Serialize for HdPath {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for HdPath {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

fn parse_segment(path: &str, part: &str) -> WalletResult<PathSegment> {
    let (digits, hardened) = match part.strip_suffix(&['\'', 'h', 'H'][..]) {
        Some(rest) => (rest, true),
        None => (part, false),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid_path(format!(
            "segment '{}' of '{}' is not a number",
            part, path
        )));
    }

    let index = digits
        .parse::<u32>()
        .map_err(|_| invalid_path(format!("segment '{}' of '{}' overflows u32", part, path)))?;

    PathSegment::new(index, hardened)
}

fn invalid_path(msg: String) -> WalletError {
    WalletError::Crypto(CryptoError::InvalidPath(msg))
}

// =============================================================================
// TESTS
// =============================================================================
