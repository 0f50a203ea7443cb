use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use zeroize::Zeroizing;

use sui_signer::crypto::curves::Ed25519KeyPair;
use sui_signer::signing::{self, EncodedSignature, SignatureScheme, SuiAddress};
use sui_signer::utils::logging;
use sui_signer::wallet::{self, DerivationPath, ExtendedKeyExport};
use sui_signer::{log_debug, log_warn, SignerError, SignerSettings};

#[derive(Parser)]
#[command(name = "sui-signer")]
#[command(about = "Offline Sui transaction signer and SLIP-0010 ed25519 key derivation")]
#[command(version)]
struct Cli {
    /// JSON settings file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print machine-readable JSON
    #[arg(long, global = true)]
    json: bool,
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sign raw transaction bytes
    Sign {
        #[command(flatten)]
        source: KeySource,
        /// Transaction bytes in hex
        #[arg(long, required_unless_present = "tx_base64")]
        tx: Option<String>,
        /// Transaction bytes in base64
        #[arg(long, conflicts_with = "tx")]
        tx_base64: Option<String>,
        /// Scheme name or flag (defaults to the configured scheme)
        #[arg(long)]
        scheme: Option<String>,
    },
    /// Derive an extended key along a path
    Derive {
        #[command(flatten)]
        source: SeedSource,
        #[arg(long)]
        path: Option<String>,
        #[arg(long)]
        allow_unhardened: bool,
    },
    /// Show the public key and Sui address of a key
    Address {
        #[command(flatten)]
        source: KeySource,
    },
    /// Check an encoded signature against transaction bytes
    Verify {
        /// Base64 encoded signature (97 bytes)
        #[arg(long)]
        signature: String,
        #[arg(long, required_unless_present = "tx_base64")]
        tx: Option<String>,
        #[arg(long, conflicts_with = "tx")]
        tx_base64: Option<String>,
    },
}

#[derive(Args)]
struct SeedSource {
    /// Master seed in hex (SLIP-0010 input)
    #[arg(long, conflicts_with = "mnemonic", required_unless_present = "mnemonic")]
    seed: Option<String>,
    /// BIP-39 mnemonic phrase
    #[arg(long)]
    mnemonic: Option<String>,
}

#[derive(Args)]
struct KeySource {
    /// 32-byte ed25519 private key seed in hex
    #[arg(long, conflicts_with_all = ["seed", "mnemonic", "path"])]
    key: Option<String>,
    #[arg(long, conflicts_with = "mnemonic")]
    seed: Option<String>,
    #[arg(long)]
    mnemonic: Option<String>,
    /// Derivation path (defaults to the configured path)
    #[arg(long)]
    path: Option<String>,
    #[arg(long)]
    allow_unhardened: bool,
}

#[derive(Serialize)]
struct SignOutput {
    scheme: SignatureScheme,
    signature: EncodedSignature,
    public_key: String,
    address: SuiAddress,
    digest: String,
}

#[derive(Serialize)]
struct DeriveOutput {
    path: String,
    #[serde(flatten)]
    extended_key: ExtendedKeyExport,
    public_key: String,
    address: SuiAddress,
}

#[derive(Serialize)]
struct AddressOutput {
    public_key: String,
    address: SuiAddress,
}

#[derive(Serialize)]
struct VerifyOutput {
    valid: bool,
    scheme: SignatureScheme,
    address: SuiAddress,
}

#[derive(Serialize)]
struct ErrorOutput {
    success: bool,
    code: Option<sui_signer::ErrorCode>,
    message: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.json;

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err.downcast_ref::<SignerError>().map(SignerError::code);
            if json {
                let out = ErrorOutput {
                    success: false,
                    code,
                    message: format!("{:#}", err),
                };
                match serde_json::to_string(&out) {
                    Ok(s) => println!("{}", s),
                    Err(_) => eprintln!("Error: {:#}", err),
                }
            } else {
                eprintln!("Error: {:#}", err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = load_settings(cli.config.as_ref())?;
    settings.apply();
    if cli.verbose {
        logging::enable_debug();
    }
    for warning in settings.warnings() {
        log_warn!("cli", "Config warning", detail = warning);
    }

    match cli.cmd {
        Command::Sign {
            source,
            tx,
            tx_base64,
            scheme,
        } => {
            let tx = decode_tx(tx.as_deref(), tx_base64.as_deref())?;
            let scheme = match scheme {
                Some(s) => s.parse::<SignatureScheme>()?,
                None => settings.scheme,
            };
            let key = resolve_key(&source, &settings)?;
            log_debug!("cli", "Signing", scheme = scheme.name(), tx_len = tx.len());

            let encoded = signing::sign(scheme, &key, &tx)?;
            let digest = signing::intent_digest(&tx)?;
            let address = SuiAddress::from_signature(&encoded)?;

            if cli.json {
                print_json(&SignOutput {
                    scheme,
                    signature: encoded,
                    public_key: hex::encode(encoded.public_key()),
                    address,
                    digest: hex::encode(digest),
                })?;
            } else {
                println!("{}", settings.output_encoding.encode(encoded.as_bytes()));
            }
        }
        Command::Derive {
            source,
            path,
            allow_unhardened,
        } => {
            let seed = resolve_seed(&source)?;
            let path = resolve_path(path.as_deref(), allow_unhardened, &settings)?;
            let node = wallet::derive_path(&seed[..], &path)?;
            let pair = Ed25519KeyPair::from_seed(node.key());
            let out = DeriveOutput {
                path: path.to_string(),
                extended_key: node.to_export(),
                public_key: hex::encode(pair.public_key()),
                address: SuiAddress::from_public_key(pair.public_key()),
            };

            if cli.json {
                print_json(&out)?;
            } else {
                println!("path:        {}", out.path);
                println!("private key: {}", hex::encode(node.key()));
                println!("chain code:  {}", hex::encode(node.chain_code()));
                println!("public key:  {}", out.public_key);
                println!("address:     {}", out.address);
            }
        }
        Command::Address { source } => {
            let key = resolve_key(&source, &settings)?;
            let pair = Ed25519KeyPair::from_seed(&key);
            let out = AddressOutput {
                public_key: hex::encode(pair.public_key()),
                address: SuiAddress::from_public_key(pair.public_key()),
            };

            if cli.json {
                print_json(&out)?;
            } else {
                println!("{}", out.address);
            }
        }
        Command::Verify {
            signature,
            tx,
            tx_base64,
        } => {
            let tx = decode_tx(tx.as_deref(), tx_base64.as_deref())?;
            let encoded = EncodedSignature::from_base64(&signature)?;
            let valid = signing::verify_ed25519(&encoded, &tx)?;
            let out = VerifyOutput {
                valid,
                scheme: encoded.scheme(),
                address: SuiAddress::from_signature(&encoded)?,
            };

            if cli.json {
                print_json(&out)?;
            } else {
                println!("{}", if valid { "valid" } else { "invalid" });
            }
        }
    }

    Ok(())
}

fn load_settings(path: Option<&PathBuf>) -> Result<SignerSettings> {
    match path {
        Some(path) => SignerSettings::load(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(SignerSettings::default()),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn strip_hex_prefix(s: &str) -> &str {
    let s = s.trim();
    s.strip_prefix("0x").unwrap_or(s)
}

fn decode_tx(hex_tx: Option<&str>, base64_tx: Option<&str>) -> Result<Vec<u8>> {
    match (hex_tx, base64_tx) {
        (Some(h), _) => hex::decode(strip_hex_prefix(h)).context("--tx is not valid hex"),
        (None, Some(b)) => STANDARD
            .decode(b.trim())
            .context("--tx-base64 is not valid base64"),
        (None, None) => Err(anyhow!("no transaction bytes given")),
    }
}

fn resolve_path(
    path: Option<&str>,
    allow_unhardened: bool,
    settings: &SignerSettings,
) -> Result<DerivationPath> {
    let path: DerivationPath = match path {
        Some(p) => p.parse()?,
        None => settings.derivation_path.parse()?,
    };
    if allow_unhardened {
        Ok(path)
    } else {
        Ok(settings.check_path(path)?)
    }
}

fn resolve_seed(source: &SeedSource) -> Result<Zeroizing<Vec<u8>>> {
    match (&source.seed, &source.mnemonic) {
        (Some(seed), _) => {
            let bytes = hex::decode(strip_hex_prefix(seed)).context("--seed is not valid hex")?;
            Ok(Zeroizing::new(bytes))
        }
        (None, Some(phrase)) => {
            let seed = wallet::seed_from_mnemonic(phrase)?;
            Ok(Zeroizing::new(seed.to_vec()))
        }
        (None, None) => Err(anyhow!("one of --seed or --mnemonic is required")),
    }
}

fn resolve_key(source: &KeySource, settings: &SignerSettings) -> Result<Zeroizing<[u8; 32]>> {
    if let Some(key_hex) = &source.key {
        let mut key = Zeroizing::new([0u8; 32]);
        hex::decode_to_slice(strip_hex_prefix(key_hex), &mut key[..])
            .context("--key must be 32 bytes of hex")?;
        return Ok(key);
    }

    let seed = resolve_seed(&SeedSource {
        seed: source.seed.clone(),
        mnemonic: source.mnemonic.clone(),
    })
    .context("a key source is required: --key, --seed or --mnemonic")?;
    let path = resolve_path(source.path.as_deref(), source.allow_unhardened, settings)?;
    let node = wallet::derive_path(&seed[..], &path)?;
    Ok(Zeroizing::new(*node.key()))
}
