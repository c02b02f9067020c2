//! cryptokit: command-line front end for crypto-engine

use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use crypto_engine::{DigestAlgorithm, Engine};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cryptokit")]
#[command(about = "Digests, password hashes and key pairs")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct PassphraseArg {
    /// Passphrase protecting the private key (empty means none)
    #[arg(long, env = "CRYPTOKIT_PASSPHRASE", hide_env_values = true)]
    passphrase: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a random hex token
    Token,

    /// Digest a short text payload
    Digest {
        #[arg(long, default_value = "sha256")]
        algorithm: String,
        payload: String,
    },

    /// Digest a file, or stdin when no path is given
    FileSum {
        #[arg(long, default_value = "sha256")]
        algorithm: String,
        path: Option<PathBuf>,
    },

    /// Argon2id hash; random payload when none is given
    Argon2 {
        #[arg(long)]
        length: Option<u32>,
        #[arg(long)]
        memory_cost: Option<u32>,
        payload: Option<String>,
    },

    /// Bcrypt hash; random payload when none is given
    Bcrypt {
        #[arg(long)]
        rounds: Option<u32>,
        payload: Option<String>,
    },

    /// Generate an RSA private key
    Genrsa {
        #[arg(long, default_value_t = 2048)]
        key_size: u32,
        #[command(flatten)]
        passphrase: PassphraseArg,
    },

    /// Generate an Ed25519 private key
    Gened25519 {
        #[command(flatten)]
        passphrase: PassphraseArg,
    },

    /// Print the public key for a private key PEM file (stdin when omitted)
    Pubkey {
        path: Option<PathBuf>,
        #[command(flatten)]
        passphrase: PassphraseArg,
    },
}

fn open_input(path: Option<&PathBuf>) -> Result<(Box<dyn Read>, u64)> {
    match path {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
            let size = file.metadata()?.len();
            Ok((Box::new(file), size))
        }
        // stdin has no declared size; the running count still enforces the cap
        None => Ok((Box::new(io::stdin().lock()), 0)),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let engine: Engine = Engine::default();

    match cli.command {
        Command::Token => println!("{}", engine.random_token()),

        Command::Digest { algorithm, payload } => {
            println!("{}", engine.digest_payload_named(&algorithm, &payload)?);
        }

        Command::FileSum { algorithm, path } => {
            let algorithm: DigestAlgorithm = algorithm.parse()?;
            let (reader, declared) = open_input(path.as_ref())?;
            let name = path
                .as_ref()
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "-".to_string());
            let report = engine.digest_file_named(&name, algorithm, reader, declared)?;
            info!(size = report.size, "digested {name}");
            println!("{}  {}", report.hash, name);
        }

        Command::Argon2 {
            length,
            memory_cost,
            payload,
        } => {
            let defaults = &engine.config().argon2;
            let hash = engine.argon2_hash(
                payload.as_deref(),
                length.unwrap_or(defaults.length),
                memory_cost.unwrap_or(defaults.memory_cost),
            )?;
            println!("{hash}");
        }

        Command::Bcrypt { rounds, payload } => {
            let rounds = rounds.unwrap_or(engine.config().bcrypt.rounds);
            println!("{}", engine.bcrypt_hash(payload.as_deref(), rounds)?);
        }

        Command::Genrsa {
            key_size,
            passphrase,
        } => {
            let pem = engine.generate_rsa_key(key_size, passphrase.passphrase.as_deref())?;
            print!("{pem}");
        }

        Command::Gened25519 { passphrase } => {
            print!("{}", engine.generate_ed25519_key(passphrase.passphrase.as_deref())?);
        }

        Command::Pubkey { path, passphrase } => {
            let (mut reader, _) = open_input(path.as_ref())?;
            let mut pem = String::new();
            reader
                .read_to_string(&mut pem)
                .context("private key must be UTF-8 PEM")?;
            let public = engine.derive_public_key(&pem, passphrase.passphrase.as_deref())?;
            print!("{public}");
        }
    }

    Ok(())
}
