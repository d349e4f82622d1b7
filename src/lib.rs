pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::{CliConfig, Command};

pub use crate::core::text::{is_palindrome, reverse, shuffle, shuffle_with, TextExt};
pub use crate::core::title::page_title;
pub use crate::domain::model::User;
pub use crate::utils::error::{Result, WordkitError};
