//! Key Derivation Path Parsing
//!
//! Parses BIP-32 style path strings such as `m/44'/784'/0'/0'/0'` into
//! indices for the SLIP-0010 engine. The hardened bit is set only where the
//! path text marks a component as hardened (`'`, `h` or `H`).

use std::fmt;
use std::str::FromStr;

use crate::error::{SignerError, SignerResult};

/// Standard BIP purposes
pub mod bip_purposes {
    pub const BIP44: u32 = 44;
}

/// Coin types from SLIP-0044
pub mod coin_types {
    pub const SUI: u32 = 784;
}

/// Hardened offset for BIP-32 derivation
pub const HARDENED: u32 = 0x80000000;

/// Default Sui Ed25519 account path
pub const SUI_DERIVATION_PATH: &str = "m/44'/784'/0'/0'/0'";

/// Single component of a derivation path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivationComponent {
    pub index: u32,
    pub hardened: bool,
}

impl DerivationComponent {
    pub fn new(index: u32, hardened: bool) -> Self {
        Self { index, hardened }
    }

    /// Get the full index including hardened bit
    pub fn full_index(&self) -> u32 {
        if self.hardened {
            self.index | HARDENED
        } else {
            self.index
        }
    }
}

impl fmt::Display for DerivationComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hardened {
            write!(f, "{}'", self.index)
        } else {
            write!(f, "{}", self.index)
        }
    }
}

/// Parsed derivation path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivationPath {
    components: Vec<DerivationComponent>,
}

impl DerivationPath {
    pub fn new(components: Vec<DerivationComponent>) -> Self {
        Self { components }
    }

    /// The Sui path `m/44'/784'/{account}'/{change}'/{index}'`
    pub fn sui(account: u32, change: u32, index: u32) -> Self {
        Self::new(vec![
            DerivationComponent::new(bip_purposes::BIP44, true),
            DerivationComponent::new(coin_types::SUI, true),
            DerivationComponent::new(account, true),
            DerivationComponent::new(change, true),
            DerivationComponent::new(index, true),
        ])
    }

    pub fn depth(&self) -> usize {
        self.components.len()
    }

    /// SLIP-0010 ed25519 only defines hardened children
    pub fn is_fully_hardened(&self) -> bool {
        self.components.iter().all(|c| c.hardened)
    }

    /// Indices as handed to `derive_child`
    pub fn indices(&self) -> impl Iterator<Item = u32> + '_ {
        self.components.iter().map(DerivationComponent::full_index)
    }

    /// Reject paths with unhardened components
    pub fn require_hardened(self) -> SignerResult<Self> {
        match self.components.iter().find(|c| !c.hardened) {
            Some(c) => Err(SignerError::invalid_input(format!(
                "Path component {} is not hardened; ed25519 derivation requires hardened indices",
                c
            ))),
            None => Ok(self),
        }
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m")?;
        for component in &self.components {
            write!(f, "/{}", component)?;
        }
        Ok(())
    }
}

impl FromStr for DerivationPath {
    type Err = SignerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_path(s).map_err(SignerError::InvalidInput)
    }
}

/// Parse a derivation path string
fn parse_path(path: &str) -> Result<DerivationPath, String> {
    let trimmed = path.trim();

    if trimmed == "m" || trimmed == "M" {
        return Ok(DerivationPath::new(Vec::new()));
    }

    // Must start with m/
    if !trimmed.starts_with("m/") && !trimmed.starts_with("M/") {
        return Err("Derivation path must start with 'm/'".to_string());
    }

    let path_part = &trimmed[2..];
    if path_part.is_empty() {
        return Err("Empty derivation path".to_string());
    }

    let components = path_part
        .split('/')
        .map(parse_component)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(DerivationPath::new(components))
}

/// Parse a single path component
fn parse_component(s: &str) -> Result<DerivationComponent, String> {
    let trimmed = s.trim();

    if trimmed.is_empty() {
        return Err("Empty path component".to_string());
    }

    // Check for hardened indicator
    let (number_str, hardened) = match trimmed.strip_suffix(&['\'', 'h', 'H'][..]) {
        Some(rest) => (rest, true),
        None => (trimmed, false),
    };

    let index: u32 = number_str
        .parse()
        .map_err(|e| format!("Invalid path component '{}': {}", s, e))?;

    // Check for overflow (excluding hardened bit)
    if index >= HARDENED {
        return Err(format!("Path component {} exceeds maximum value", index));
    }

    Ok(DerivationComponent::new(index, hardened))
}
