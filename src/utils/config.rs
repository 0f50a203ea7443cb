//! Signer Configuration
//!
//! Settings for the command-line signer, loaded from a JSON file. Missing
//! fields take their defaults, so `{}` is a valid configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{SignerError, SignerResult};
use crate::signing::SignatureScheme;
use crate::wallet::{DerivationPath, SUI_DERIVATION_PATH};

use super::logging;

/// How binary outputs are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputEncoding {
    #[default]
    Base64,
    Hex,
}

impl OutputEncoding {
    pub fn encode(self, bytes: &[u8]) -> String {
        use base64::{engine::general_purpose::STANDARD, Engine};
        match self {
            Self::Base64 => STANDARD.encode(bytes),
            Self::Hex => hex::encode(bytes),
        }
    }
}

/// Signer settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SignerSettings {
    /// Scheme used when none is given on the command line
    pub scheme: SignatureScheme,
    /// Path used with `--mnemonic` when `--path` is absent
    pub derivation_path: String,
    /// Refuse paths with unhardened components
    pub require_hardened: bool,
    /// Emit debug log entries
    pub debug_logging: bool,
    /// Encoding of signatures in text output
    pub output_encoding: OutputEncoding,
}

impl Default for SignerSettings {
    fn default() -> Self {
        Self::standard()
    }
}

impl SignerSettings {
    /// Sui wallet defaults
    pub fn standard() -> Self {
        Self {
            scheme: SignatureScheme::Ed25519,
            derivation_path: SUI_DERIVATION_PATH.to_string(),
            require_hardened: true,
            debug_logging: false,
            output_encoding: OutputEncoding::Base64,
        }
    }

    pub fn from_json(json: &str) -> SignerResult<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> SignerResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            SignerError::invalid_input(format!("Cannot read config {}: {}", path.display(), e))
        })?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> SignerResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parsed default path, checked against `require_hardened`
    pub fn default_path(&self) -> SignerResult<DerivationPath> {
        self.check_path(self.derivation_path.parse()?)
    }

    /// Apply the hardened-only policy to a path
    pub fn check_path(&self, path: DerivationPath) -> SignerResult<DerivationPath> {
        if self.require_hardened {
            path.require_hardened()
        } else {
            Ok(path)
        }
    }

    /// Hard errors in the settings
    pub fn validate(&self) -> SignerResult<()> {
        self.default_path().map(|_| ())
    }

    /// Settings that are valid but likely a mistake
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if !self.scheme.is_implemented() {
            warnings.push(format!(
                "Default scheme '{}' has no signer; signing will fail",
                self.scheme
            ));
        }

        if !self.require_hardened {
            warnings.push(
                "Unhardened path components are allowed; ed25519 wallets expect hardened paths"
                    .to_string(),
            );
        }

        warnings
    }

    /// Apply process-wide side effects (logging)
    pub fn apply(&self) {
        logging::set_debug(self.debug_logging);
    }
}
