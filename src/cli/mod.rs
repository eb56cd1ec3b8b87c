pub mod completions;
pub mod generate;
pub mod init;
pub mod validate;

use clap::{Parser, Subcommand};

use crate::error::{ResgenError, Result};
use crate::namespace::AccessLevel;

/// resgen - Strongly typed resource accessor generator
#[derive(Parser, Debug)]
#[command(name = "resgen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate accessor source files
    Generate(generate::GenerateArgs),

    /// Check resources for naming conflicts without writing anything
    Validate(validate::ValidateArgs),

    /// Initialize a resgen project (generates resgen.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Parse an `--access-level` value.
pub(crate) fn parse_access_level(value: &str) -> Result<AccessLevel> {
    AccessLevel::from_name(value).ok_or_else(|| ResgenError::Config {
        message: format!("Unknown access level '{}'", value),
        help: Some("Use `public` or `internal`".to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_flags() {
        let cli = Cli::parse_from([
            "resgen",
            "generate",
            "App",
            "--access-level",
            "public",
            "--check",
        ]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.path, std::path::PathBuf::from("App"));
        assert_eq!(args.access_level.as_deref(), Some("public"));
        assert!(args.check);
        assert!(!args.stdout);
    }

    #[test]
    fn test_parse_access_level() {
        assert_eq!(parse_access_level("public").unwrap(), AccessLevel::Public);
        assert!(parse_access_level("open").is_err());
    }
}
