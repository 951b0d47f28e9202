//! Encrypt and decrypt CLI commands
//!
//! The CLI is a thin caller of the library: it gathers a plaintext and a
//! password, prints the envelope as a JSON or YAML document, and reverses
//! the process.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use zeroize::Zeroizing;

use crate::config::{EnvelopeFormat, Settings};
use crate::crypto::{decrypt, encrypt, Envelope, Password};
use crate::error::{SealError, SealResult};

/// Environment variable consulted for the password when no flag names one
pub const PASSWORD_ENV: &str = "PWSEAL_PASSWORD";

/// Where the password comes from
#[derive(Args, Debug, Default)]
pub struct PasswordArgs {
    /// Read the password from this environment variable instead of prompting
    #[arg(long, value_name = "VAR")]
    pub password_env: Option<String>,
}

/// Arguments for `pwseal encrypt`
#[derive(Args, Debug)]
pub struct EncryptArgs {
    /// Text to encrypt (read from stdin when omitted)
    pub text: Option<String>,

    /// Write the envelope to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Envelope document format (json or yaml)
    #[arg(short, long)]
    pub format: Option<EnvelopeFormat>,

    #[command(flatten)]
    pub password: PasswordArgs,
}

/// Arguments for `pwseal decrypt`
#[derive(Args, Debug)]
pub struct DecryptArgs {
    /// Envelope document to decrypt (read from stdin when omitted)
    pub input: Option<PathBuf>,

    /// Envelope document format (json or yaml)
    #[arg(short, long)]
    pub format: Option<EnvelopeFormat>,

    #[command(flatten)]
    pub password: PasswordArgs,
}

/// Handle `pwseal encrypt`
pub fn handle_encrypt(settings: &Settings, args: EncryptArgs) -> SealResult<()> {
    let plaintext = match args.text {
        Some(text) => Zeroizing::new(text),
        None => read_stdin()?,
    };
    let password = resolve_password(&args.password, settings.confirm_password)?;

    let envelope = encrypt(&plaintext, &password)?;

    let format = args.format.unwrap_or(settings.envelope_format);
    let document = render_envelope(&envelope, format)?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, document).map_err(|e| {
                SealError::Io(format!("Failed to write {}: {}", path.display(), e))
            })?;
            tracing::info!(path = %path.display(), "envelope written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(document.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

/// Handle `pwseal decrypt`
pub fn handle_decrypt(settings: &Settings, args: DecryptArgs) -> SealResult<()> {
    let document = match &args.input {
        Some(path) => read_file(path)?,
        None => read_stdin()?,
    };

    let format = args.format.unwrap_or(settings.envelope_format);
    let envelope = parse_envelope(&document, format)?;

    let password = resolve_password(&args.password, false)?;
    let plaintext = Zeroizing::new(decrypt(&envelope, &password)?);

    let mut stdout = std::io::stdout().lock();
    write!(stdout, "{}", plaintext.as_str())?;
    stdout.flush()?;

    Ok(())
}

/// Serialize an envelope as a document
pub fn render_envelope(envelope: &Envelope, format: EnvelopeFormat) -> SealResult<String> {
    match format {
        EnvelopeFormat::Json => {
            let mut json = serde_json::to_string_pretty(envelope)?;
            json.push('\n');
            Ok(json)
        }
        EnvelopeFormat::Yaml => Ok(serde_yaml::to_string(envelope)?),
    }
}

/// Parse an envelope document
pub fn parse_envelope(document: &str, format: EnvelopeFormat) -> SealResult<Envelope> {
    match format {
        EnvelopeFormat::Json => Ok(serde_json::from_str(document)?),
        EnvelopeFormat::Yaml => Ok(serde_yaml::from_str(document)?),
    }
}

/// Resolve the password from the environment or an interactive prompt
fn resolve_password(args: &PasswordArgs, confirm: bool) -> SealResult<Password> {
    if let Some(var) = &args.password_env {
        return std::env::var(var).map(Password::from).map_err(|_| {
            SealError::Config(format!("Environment variable {} is not set", var))
        });
    }

    if let Ok(password) = std::env::var(PASSWORD_ENV) {
        return Ok(Password::from(password));
    }

    if confirm {
        prompt_new_password()
    } else {
        prompt_password("Password: ")
    }
}

/// Prompt for a new password with confirmation
fn prompt_new_password() -> SealResult<Password> {
    loop {
        let pass1 = prompt_password("Password: ")?;
        let pass2 = prompt_password("Confirm password: ")?;

        if pass1 != pass2 {
            eprintln!("Passwords do not match. Please try again.");
            continue;
        }

        return Ok(pass1);
    }
}

/// Prompt for a password (hidden input)
fn prompt_password(prompt: &str) -> SealResult<Password> {
    rpassword::prompt_password(prompt)
        .map(Password::from)
        .map_err(|e| SealError::Io(format!("Failed to read password: {}", e)))
}

fn read_stdin() -> SealResult<Zeroizing<String>> {
    let mut buf = Zeroizing::new(String::new());
    std::io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| SealError::Io(format!("Failed to read stdin: {}", e)))?;
    Ok(buf)
}

fn read_file(path: &Path) -> SealResult<Zeroizing<String>> {
    std::fs::read_to_string(path)
        .map(Zeroizing::new)
        .map_err(|e| SealError::Io(format!("Failed to read {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_envelope() -> Envelope {
        Envelope {
            ciphertext: "Y2lwaGVydGV4dA==".into(),
            nonce: "AAAAAAAAAAAAAAAA".into(),
            salt: "AAAAAAAAAAAAAAAAAAAAAA==".into(),
        }
    }

    #[test]
    fn test_json_document_round_trip() {
        let envelope = sample_envelope();
        let doc = render_envelope(&envelope, EnvelopeFormat::Json).unwrap();
        assert!(doc.ends_with('\n'));
        assert_eq!(parse_envelope(&doc, EnvelopeFormat::Json).unwrap(), envelope);
    }

    #[test]
    fn test_yaml_document_round_trip() {
        let envelope = sample_envelope();
        let doc = render_envelope(&envelope, EnvelopeFormat::Yaml).unwrap();
        assert!(doc.contains("nonce:"));
        assert_eq!(parse_envelope(&doc, EnvelopeFormat::Yaml).unwrap(), envelope);
    }

    #[test]
    fn test_yaml_accepts_iv_key() {
        let doc = "ciphertext: Y2lwaGVydGV4dA==\niv: AAAAAAAAAAAAAAAA\nsalt: AAAAAAAAAAAAAAAAAAAAAA==\n";
        let envelope = parse_envelope(doc, EnvelopeFormat::Yaml).unwrap();
        assert_eq!(envelope, sample_envelope());
    }

    #[test]
    fn test_incomplete_document_rejected() {
        let err = parse_envelope(r#"{"ciphertext":"AA=="}"#, EnvelopeFormat::Json).unwrap_err();
        assert!(matches!(err, SealError::Json(_)));
    }

    #[test]
    fn test_password_from_named_env_var() {
        std::env::set_var("PWSEAL_TEST_NAMED_PASSWORD", "from-env");
        let args = PasswordArgs {
            password_env: Some("PWSEAL_TEST_NAMED_PASSWORD".into()),
        };
        let password = resolve_password(&args, true).unwrap();
        std::env::remove_var("PWSEAL_TEST_NAMED_PASSWORD");
        assert_eq!(password.as_str(), "from-env");
    }

    #[test]
    fn test_missing_named_env_var_is_config_error() {
        let args = PasswordArgs {
            password_env: Some("PWSEAL_TEST_DEFINITELY_UNSET".into()),
        };
        let err = resolve_password(&args, false).unwrap_err();
        assert!(matches!(err, SealError::Config(_)));
    }
}
