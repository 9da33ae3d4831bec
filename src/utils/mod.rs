//! Utility module for vidplayer
//!
//! This module provides common utilities used throughout the application:
//! - Error handling with custom error types
//! - Configuration management
//! - Small text helpers shared by the catalog and the console

pub mod config;
pub mod error;

// Re-export commonly used items
pub use config::{Config, ConsoleConfig, GeneralConfig, LibraryConfig, PlayerConfig};
pub use error::{CommandError, Result, VidPlayerError};

/// Initialize the application configuration
///
/// # Arguments
///
/// * `explicit` - Config file requested on the command line, if any
///
/// # Returns
///
/// Returns the loaded configuration or an error if loading fails
pub fn load_config(explicit: Option<&std::path::Path>) -> Result<Config> {
    Config::load(explicit)
}

/// Case-insensitive substring test
///
/// Both sides are lowercased with full Unicode case mapping, so "CATS"
/// contains "cat" and "Ärger" contains "ä".
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Case-insensitive equality using the same folding as `contains_ignore_case`
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Amazing Cats", "cat"));
        assert!(contains_ignore_case("Amazing Cats", "AMAZING"));
        assert!(contains_ignore_case("#animal", "#ANI"));
        assert!(!contains_ignore_case("Funny Dogs", "cat"));
        assert!(contains_ignore_case("anything", ""));
    }

    #[test]
    fn test_eq_ignore_case() {
        assert!(eq_ignore_case("My List", "my list"));
        assert!(eq_ignore_case("ÄPFEL", "äpfel"));
        assert!(!eq_ignore_case("My List", "My List "));
    }
}
