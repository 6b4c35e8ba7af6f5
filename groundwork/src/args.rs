use std::path::PathBuf;

use clap::{Parser, Subcommand};
use groundwork_codec::Alphabet;

/// Groundwork helpers
#[derive(Debug, Parser)]
#[command(name = "groundwork", about = "Validate fields, encode text and map status codes to errors")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, global = true, env = "GROUNDWORK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the configured log filter
    #[arg(long, global = true, env = "GROUNDWORK_LOG")]
    pub log_filter: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate fields against the configured rules
    Validate {
        /// Fields as `name=value`; configured fields not given here are absent
        #[arg(value_parser = parse_field, required = true)]
        fields: Vec<(String, String)>,
    },

    /// Encode text as base64
    Encode {
        /// Alphabet to use instead of the configured one
        #[arg(short, long)]
        alphabet: Option<Alphabet>,

        /// Text to encode
        text: String,
    },

    /// Print the error a status code maps to
    Status {
        /// HTTP status code
        code: u16,

        /// Message for the error
        message: Option<String>,
    },
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected `name=value`, got `{raw}`"))?;

    if name.is_empty() {
        return Err(format!("missing field name in `{raw}`"));
    }

    Ok((name.to_owned(), value.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_fields() {
        let args = Args::try_parse_from(["groundwork", "validate", "email=a@b.com", "note=x=y", "empty="]).unwrap();

        let Command::Validate { fields } = args.command else {
            panic!("expected validate command");
        };
        assert_eq!(
            fields,
            [
                ("email".to_owned(), "a@b.com".to_owned()),
                ("note".to_owned(), "x=y".to_owned()),
                ("empty".to_owned(), String::new()),
            ]
        );
    }

    #[test]
    fn malformed_fields_are_rejected() {
        assert!(Args::try_parse_from(["groundwork", "validate", "email"]).is_err());
        assert!(Args::try_parse_from(["groundwork", "validate", "=value"]).is_err());
        assert!(Args::try_parse_from(["groundwork", "validate"]).is_err());
    }

    #[test]
    fn encode_alphabet_by_name() {
        let args = Args::try_parse_from(["groundwork", "encode", "-a", "yui", "hello"]).unwrap();
        let Command::Encode { alphabet, text } = args.command else {
            panic!("expected encode command");
        };
        assert_eq!(alphabet, Some(Alphabet::Yui));
        assert_eq!(text, "hello");

        assert!(Args::try_parse_from(["groundwork", "encode", "-a", "rot13", "hello"]).is_err());
    }

    #[test]
    fn config_from_environment() {
        temp_env::with_var("GROUNDWORK_CONFIG", Some("/etc/groundwork.toml"), || {
            let args = Args::try_parse_from(["groundwork", "status", "404"]).unwrap();
            assert_eq!(args.config, Some(PathBuf::from("/etc/groundwork.toml")));
        });

        temp_env::with_var_unset("GROUNDWORK_CONFIG", || {
            let args = Args::try_parse_from(["groundwork", "status", "404", "gone"]).unwrap();
            assert!(args.config.is_none());
            assert!(matches!(args.command, Command::Status { code: 404, message: Some(_) }));
        });
    }
}
