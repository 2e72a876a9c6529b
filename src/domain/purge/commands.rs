use serde::Serialize;
use std::fmt;

// ============================================================================
// Purge Commands - Represent intent to invalidate cached content
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum Command {
    PurgeNextecomProduct(PurgeNextecomProductCommand),
    PurgeCmsPage(PurgeCmsPageCommand),
}

impl Command {
    pub fn message_type(&self) -> &'static str {
        match self {
            Command::PurgeNextecomProduct(_) => "PurgeNextecomProductCommand",
            Command::PurgeCmsPage(_) => "PurgeCmsPageCommand",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::PurgeNextecomProduct(c) => fmt::Display::fmt(c, f),
            Command::PurgeCmsPage(c) => fmt::Display::fmt(c, f),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurgeNextecomProductCommand {
    pub product_id: String,
    pub operating_chain: String,
}

impl PurgeNextecomProductCommand {
    pub fn new(product_id: impl Into<String>, operating_chain: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            operating_chain: operating_chain.into(),
        }
    }
}

impl fmt::Display for PurgeNextecomProductCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PurgeNextecomProductCommand {{ productId = {}, operatingChain = {} }}",
            self.product_id, self.operating_chain
        )
    }
}

impl From<PurgeNextecomProductCommand> for Command {
    fn from(command: PurgeNextecomProductCommand) -> Self {
        Command::PurgeNextecomProduct(command)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurgeCmsPageCommand {
    pub url: String,
}

impl PurgeCmsPageCommand {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl fmt::Display for PurgeCmsPageCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PurgeCmsPageCommand {{ url = {} }}", self.url)
    }
}

impl From<PurgeCmsPageCommand> for Command {
    fn from(command: PurgeCmsPageCommand) -> Self {
        Command::PurgeCmsPage(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_rendering() {
        let command = Command::from(PurgeNextecomProductCommand::new("x", "y"));
        assert_eq!(
            command.to_string(),
            "PurgeNextecomProductCommand { productId = x, operatingChain = y }"
        );
        assert_eq!(
            Command::from(PurgeCmsPageCommand::new("sku")).to_string(),
            "PurgeCmsPageCommand { url = sku }"
        );
    }

    #[test]
    fn test_message_type_names() {
        assert_eq!(
            Command::from(PurgeNextecomProductCommand::new("x", "y")).message_type(),
            "PurgeNextecomProductCommand"
        );
        assert_eq!(
            Command::from(PurgeCmsPageCommand::new("u")).message_type(),
            "PurgeCmsPageCommand"
        );
    }
}
