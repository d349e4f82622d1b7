use serde::{Deserialize, Serialize};

/// Toy user record built from a partial attribute set. Either field may be
/// absent; formatting handles the missing cases explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl User {
    pub fn new(name: Option<String>, email: Option<String>) -> Self {
        Self { name, email }
    }

    /// Returns `Name <email>` when both fields are set, `None` otherwise.
    /// A missing field is an explicit `None`, never an empty string.
    pub fn formatted_email(&self) -> Option<String> {
        match (&self.name, &self.email) {
            (Some(name), Some(email)) => Some(format!("{} <{}>", name, email)),
            _ => None,
        }
    }
}
