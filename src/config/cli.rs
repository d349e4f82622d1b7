use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_positive_number, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "wordkit")]
#[command(about = "Small text utilities: shuffling, palindromes, formatting")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit results as JSON")]
    pub json: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Randomly permute the characters of TEXT
    Shuffle {
        text: String,

        #[arg(long, default_value = "1", help = "Number of shuffles to produce")]
        count: usize,

        #[arg(long, help = "Seed the RNG for a reproducible permutation")]
        seed: Option<u64>,
    },

    /// Check whether TEXT reads the same forward and backward
    Palindrome { text: String },

    /// Build a page title from a base title and an optional page part
    Title {
        #[arg(long, default_value = "Sample App")]
        base: String,

        #[arg(long)]
        page: Option<String>,
    },

    /// Format a display email address from user attributes
    Email {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,
    },
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match &self.command {
            Command::Shuffle { count, .. } => validate_positive_number("count", *count, 1),
            Command::Title { base, .. } => validate_non_empty_string("base", base),
            Command::Palindrome { .. } | Command::Email { .. } => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_zero_count() {
        let config = CliConfig::parse_from(["wordkit", "shuffle", "abc", "--count", "0"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_base_title() {
        let config = CliConfig::parse_from(["wordkit", "title", "--base", "  "]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        let config = CliConfig::parse_from(["wordkit", "shuffle", "abc"]);
        assert!(config.validate().is_ok());

        let config = CliConfig::parse_from(["wordkit", "title", "--page", "Home"]);
        assert!(config.validate().is_ok());
    }
}
