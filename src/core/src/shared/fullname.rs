use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullName {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub alias: Option<String>,
}

impl FullName {
    pub fn new(first_name: String, last_name: String) -> Self {
        FullName {
            first_name,
            last_name,
            alias: None,
        }
    }

    pub fn with_alias(first_name: String, last_name: String, alias: String) -> Self {
        FullName {
            first_name,
            last_name,
            alias: Some(alias),
        }
    }

    /// Name used in commentary: the alias when the player has one.
    pub fn display_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.last_name)
    }
}

impl Display for FullName {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match &self.alias {
            Some(alias) => write!(f, "{} \"{}\" {}", self.first_name, alias, self.last_name),
            None => write!(f, "{} {}", self.first_name, self.last_name),
        }
    }
}
