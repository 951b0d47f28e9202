use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pwseal::cli::{handle_decrypt, handle_encrypt, DecryptArgs, EncryptArgs};
use pwseal::config::{SealPaths, Settings};
use pwseal::crypto::{KEY_LEN, NONCE_LEN, PBKDF2_ITERATIONS, SALT_LEN};

#[derive(Parser)]
#[command(
    name = "pwseal",
    version,
    about = "Password-based text encryption",
    long_about = "pwseal encrypts text under a password with AES-256-GCM and a \
                  PBKDF2-derived key, producing an envelope of three base64 \
                  fields (ciphertext, nonce, salt) that decrypts back with the \
                  same password."
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text into an envelope
    #[command(alias = "seal")]
    Encrypt(EncryptArgs),

    /// Decrypt an envelope back into text
    #[command(alias = "open")]
    Decrypt(DecryptArgs),

    /// Show current configuration and paths
    Config {
        /// Write a settings file with the defaults if none exists yet
        #[arg(long)]
        init: bool,
    },
}

fn init_logging(verbose: bool, settings: &Settings) {
    let filter = if verbose {
        EnvFilter::new("pwseal=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("pwseal={}", settings.log_level)))
    };

    // stdout carries envelopes and plaintext, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = SealPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    init_logging(cli.verbose, &settings);

    match cli.command {
        Commands::Encrypt(args) => handle_encrypt(&settings, args)?,
        Commands::Decrypt(args) => handle_decrypt(&settings, args)?,
        Commands::Config { init } => {
            if init {
                if paths.settings_file().exists() {
                    println!("Settings file already exists, leaving it unchanged.");
                } else {
                    settings.save(&paths)?;
                    println!("Wrote default settings.");
                }
                println!();
            }

            println!("pwseal Configuration");
            println!("====================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Schema version:   {}", settings.schema_version);
            println!("Envelope format:  {}", settings.envelope_format);
            println!("Log level:        {}", settings.log_level);
            println!("Confirm password: {}", settings.confirm_password);
            println!();
            println!("Cipher:           AES-256-GCM ({}-byte nonce)", NONCE_LEN);
            println!(
                "Key derivation:   PBKDF2-HMAC-SHA256, {} iterations, {}-byte salt, {}-byte key",
                PBKDF2_ITERATIONS, SALT_LEN, KEY_LEN
            );
        }
    }

    Ok(())
}
