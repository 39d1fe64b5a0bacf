//! Declarative registry configuration.
//!
//! A registry can be described in TOML and built at startup:
//!
//! ```toml
//! builtins = true
//!
//! [[commands]]
//! pattern = "X*"
//! kind = "private"
//! syntax = "wildcard"
//!
//! [[commands]]
//! pattern = "KNOCK"
//! kind = "invite"
//! ```
//!
//! Rules are registered in file order after the built-ins, so a rule for a
//! built-in token replaces the built-in binding.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::kind::MessageKind;
use crate::registry::{Registry, Syntax};

/// Registry configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Register the built-in commands first (default: true).
    #[serde(default = "default_builtins")]
    pub builtins: bool,
    /// Extra command bindings, registered in order.
    #[serde(default)]
    pub commands: Vec<CommandRule>,
}

/// A single pattern-to-kind binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRule {
    /// Command pattern, interpreted according to `syntax`.
    pub pattern: String,
    /// Message kind created for matching commands.
    pub kind: MessageKind,
    /// Pattern syntax (default: exact).
    #[serde(default)]
    pub syntax: Syntax,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            builtins: default_builtins(),
            commands: Vec::new(),
        }
    }
}

fn default_builtins() -> bool {
    true
}

impl RegistryConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Load a configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Build a registry from this configuration.
    pub fn build(&self) -> Registry {
        let registry = if self.builtins {
            Registry::with_builtins()
        } else {
            Registry::new()
        };
        for rule in &self.commands {
            registry.register_kind(&rule.pattern, rule.kind, rule.syntax);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registers_builtins() {
        let config = RegistryConfig::default();
        assert!(config.builtins);
        assert!(config.commands.is_empty());
        assert_eq!(
            config.build().instantiate("PRIVMSG").kind(),
            MessageKind::Private
        );
    }

    #[test]
    fn empty_document_uses_defaults() {
        let config = RegistryConfig::from_toml_str("").unwrap();
        assert_eq!(config, RegistryConfig::default());
    }

    #[test]
    fn rules_override_builtins() {
        let config = RegistryConfig::from_toml_str(
            r#"
            [[commands]]
            pattern = "NICK"
            kind = "custom"
            "#,
        )
        .unwrap();
        assert_eq!(config.commands[0].syntax, Syntax::Exact);

        let registry = config.build();
        let msg = registry.instantiate("NICK");
        assert_eq!(msg.kind(), MessageKind::Custom);
        assert_eq!(msg.command(), "NICK");
    }

    #[test]
    fn without_builtins_only_rules_apply() {
        let config = RegistryConfig::from_toml_str(
            r#"
            builtins = false

            [[commands]]
            pattern = "^K.*"
            kind = "kick"
            syntax = "regexp"
            "#,
        );
        // Anchors are added by the registry; a leading `^` is still valid.
        let registry = config.unwrap().build();
        assert_eq!(registry.instantiate("KNOCK").kind(), MessageKind::Kick);
        assert_eq!(registry.instantiate("JOIN").kind(), MessageKind::Custom);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let err = RegistryConfig::from_toml_str(
            r#"
            [[commands]]
            pattern = "X"
            kind = "bogus"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }
}
