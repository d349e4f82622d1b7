pub mod text;
pub mod title;

pub use crate::utils::error::Result;
