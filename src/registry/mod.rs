//! Command registry and dispatcher.
//!
//! A [`Registry`] maps command patterns to variant constructors. Patterns
//! live in three independent tables, one per [`Syntax`], and a command
//! token is resolved against them in a fixed order:
//!
//! 1. **Exact**: case-insensitive string equality.
//! 2. **Wildcard**: glob patterns (`*`, `?`, `[...]`), in registration order.
//! 3. **RegExp**: anchored regular expressions, in registration order.
//!
//! Within the Wildcard and RegExp tables the first registered pattern that
//! matches wins. When nothing matches, a three-digit token becomes a
//! [`Numeric`](crate::Numeric) and anything else a [`Custom`](crate::Custom)
//! message. Dispatch itself never fails.
//!
//! # Example
//!
//! ```
//! use irc_message::{MessageKind, Registry, Syntax};
//!
//! let registry = Registry::with_builtins();
//! registry.register_kind("X*", MessageKind::Private, Syntax::Wildcard);
//!
//! let msg = registry.create("XMSG", "nick!u@h", ["#rust", "hi"]);
//! assert_eq!(msg.kind(), MessageKind::Private);
//!
//! let msg = registry.create("001", "server", ["nick", "Welcome"]);
//! assert_eq!(msg.kind(), MessageKind::Numeric);
//! ```

mod table;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use glob::Pattern;
use parking_lot::RwLock;
use regex::Regex;
use tracing::{debug, trace, warn};

use self::table::PatternTable;
use crate::error::MessageParseError;
use crate::kind::MessageKind;
use crate::line::RawLine;
use crate::message::variants::is_numeric_token;
use crate::message::{Body, Message, Variant};

/// Factory producing a default, un-initialized body.
pub type Constructor = Arc<dyn Fn() -> Body + Send + Sync>;

/// How a registered pattern is matched against a command token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Syntax {
    /// Case-insensitive string equality.
    #[default]
    Exact,
    /// Glob pattern over the whole token.
    Wildcard,
    /// Regular expression over the whole token.
    #[cfg_attr(feature = "serde", serde(alias = "regex"))]
    RegExp,
}

/// Command registry and dispatcher.
///
/// Each table is guarded by its own lock, so lookups run concurrently and
/// only registration takes a write lock. Share one registry between
/// threads with an [`Arc`].
pub struct Registry {
    exact: RwLock<HashMap<String, Constructor>>,
    wildcard: RwLock<PatternTable<Pattern, Constructor>>,
    regexp: RwLock<PatternTable<Regex, Constructor>>,
}

impl Registry {
    /// Create an empty registry.
    ///
    /// Every command falls back to `Numeric` or `Custom` until something is
    /// registered.
    pub fn new() -> Self {
        Self {
            exact: RwLock::new(HashMap::new()),
            wildcard: RwLock::new(PatternTable::new()),
            regexp: RwLock::new(PatternTable::new()),
        }
    }

    /// Create a registry with every built-in command registered by its
    /// canonical token.
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        registry.register_builtins();
        registry
    }

    /// Register every built-in kind that has a canonical command token.
    pub fn register_builtins(&self) {
        for kind in MessageKind::ALL {
            if let Some(command) = kind.command() {
                self.register_kind(command, kind, Syntax::Exact);
            }
        }
    }

    /// Register `constructor` for `pattern`.
    ///
    /// Registering the same pattern again under the same syntax replaces
    /// the previous constructor. Exact and Wildcard patterns are the same
    /// when they differ only in ASCII case. A Wildcard or RegExp pattern that does not
    /// compile is kept but never matches.
    pub fn register_command<F>(&self, pattern: &str, constructor: F, syntax: Syntax)
    where
        F: Fn() -> Body + Send + Sync + 'static,
    {
        let constructor: Constructor = Arc::new(constructor);
        let error = match syntax {
            Syntax::Exact => {
                self.exact
                    .write()
                    .insert(pattern.to_ascii_uppercase(), constructor);
                None
            }
            Syntax::Wildcard => self.wildcard.write().insert(pattern, constructor),
            Syntax::RegExp => self.regexp.write().insert(pattern, constructor),
        };

        match error {
            Some(error) => warn!(
                pattern,
                ?syntax,
                %error,
                "Registered pattern does not compile and will never match"
            ),
            None => debug!(pattern, ?syntax, "Registered command"),
        }
    }

    /// Register a variant type for `pattern`.
    pub fn register<T: Variant + 'static>(&self, pattern: &str, syntax: Syntax) {
        self.register_command(pattern, || T::default().into(), syntax);
    }

    /// Register the variant of `kind` for `pattern`.
    pub fn register_kind(&self, pattern: &str, kind: MessageKind, syntax: Syntax) {
        self.register_command(pattern, move || Body::new(kind), syntax);
    }

    /// Remove `pattern` from all three tables.
    ///
    /// Exact and Wildcard patterns are compared ignoring ASCII case, like
    /// their matching. RegExp patterns must be given exactly as registered,
    /// since case changes their meaning (`\w` and `\W`). Removing a pattern
    /// that was never registered does nothing.
    pub fn unregister_command(&self, pattern: &str) {
        let exact = self
            .exact
            .write()
            .remove(&pattern.to_ascii_uppercase())
            .is_some();
        let wildcard = self.wildcard.write().remove(pattern);
        let regexp = self.regexp.write().remove(pattern);

        if exact || wildcard || regexp {
            debug!(pattern, "Unregistered command");
        }
    }

    /// Whether `command` resolves to a registered pattern.
    pub fn is_registered(&self, command: &str) -> bool {
        self.lookup(&command.to_ascii_uppercase()).is_some()
    }

    /// Number of registered patterns across all tables.
    pub fn len(&self) -> usize {
        self.exact.read().len() + self.wildcard.read().len() + self.regexp.read().len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Wildcard patterns in evaluation order.
    pub fn wildcard_patterns(&self) -> Vec<String> {
        self.wildcard.read().patterns().map(str::to_owned).collect()
    }

    /// RegExp patterns in evaluation order.
    pub fn regexp_patterns(&self) -> Vec<String> {
        self.regexp.read().patterns().map(str::to_owned).collect()
    }

    /// Create a default, un-initialized message for `command`.
    ///
    /// Typed messages carry the upper-cased command token; `Custom`
    /// messages keep it verbatim.
    pub fn instantiate(&self, command: &str) -> Message {
        let normalized = command.to_ascii_uppercase();
        // `syntax` is `None` when the token fell back to Numeric or Custom.
        let (body, syntax) = match self.lookup(&normalized) {
            Some((syntax, constructor)) => (constructor(), Some(syntax)),
            None if is_numeric_token(command) => (Body::new(MessageKind::Numeric), None),
            None => (Body::new(MessageKind::Custom), None),
        };
        trace!(command, kind = %body.kind(), ?syntax, "Resolved command");

        let token = if body.kind() == MessageKind::Custom {
            command.to_owned()
        } else {
            normalized
        };
        Message::from_body(token, body)
    }

    /// Create a message for `command` and fill it from wire data.
    ///
    /// A structural problem found while decoding does not abort dispatch;
    /// it is available through [`Message::error`].
    pub fn create<I, S>(&self, command: &str, prefix: &str, parameters: I) -> Message
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let parameters: Vec<String> = parameters.into_iter().map(Into::into).collect();
        let mut msg = self.instantiate(command);
        if let Err(error) = msg.init_from(prefix, &parameters) {
            debug!(command, %error, "Attached parse error to message");
        }
        msg
    }

    /// Split a raw line and dispatch it.
    ///
    /// Only a line that cannot be split at all is an error; problems in
    /// the parameters are attached to the returned message.
    pub fn parse_line(&self, line: &str) -> Result<Message, MessageParseError> {
        let raw = RawLine::parse(line)?;
        Ok(self.create(raw.command, raw.prefix, raw.params.iter().copied()))
    }

    fn lookup(&self, command: &str) -> Option<(Syntax, Constructor)> {
        if let Some(constructor) = self.exact.read().get(command) {
            return Some((Syntax::Exact, Arc::clone(constructor)));
        }
        if let Some(constructor) = self.wildcard.read().find(command) {
            return Some((Syntax::Wildcard, constructor));
        }
        self.regexp
            .read()
            .find(command)
            .map(|constructor| (Syntax::RegExp, constructor))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut exact: Vec<String> = self.exact.read().keys().cloned().collect();
        exact.sort();
        f.debug_struct("Registry")
            .field("exact", &exact)
            .field("wildcard", &self.wildcard_patterns())
            .field("regexp", &self.regexp_patterns())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::variants::{Custom, Join, Numeric, Ping};

    #[test]
    fn test_builtins_cover_every_token() {
        let registry = Registry::with_builtins();
        for kind in MessageKind::ALL {
            if let Some(command) = kind.command() {
                assert_eq!(registry.instantiate(command).kind(), kind, "{}", command);
            }
        }
        assert_eq!(registry.len(), 22);
    }

    #[test]
    fn test_exact_is_case_insensitive() {
        let registry = Registry::with_builtins();
        let msg = registry.instantiate("join");
        assert_eq!(msg.kind(), MessageKind::Join);
        assert_eq!(msg.command(), "JOIN");
    }

    #[test]
    fn test_exact_beats_patterns() {
        let registry = Registry::new();
        registry.register_kind("PING", MessageKind::Pong, Syntax::RegExp);
        registry.register_kind("P*", MessageKind::Join, Syntax::Wildcard);
        registry.register::<Ping>("PING", Syntax::Exact);
        assert_eq!(registry.instantiate("PING").kind(), MessageKind::Ping);
        assert_eq!(registry.instantiate("PART").kind(), MessageKind::Join);
    }

    #[test]
    fn test_wildcard_beats_regexp() {
        let registry = Registry::new();
        registry.register_kind("X.*", MessageKind::Nick, Syntax::RegExp);
        registry.register_kind("X*", MessageKind::Quit, Syntax::Wildcard);
        assert_eq!(registry.instantiate("XYZ").kind(), MessageKind::Quit);
    }

    #[test]
    fn test_fallbacks() {
        let registry = Registry::new();

        let msg = registry.create("001", "server", ["nick", "Welcome"]);
        assert_eq!(msg.variant::<Numeric>().map(Numeric::code), Some(1));
        assert!(msg.error().is_none());

        let msg = registry.create("FooBar", "", ["a"]);
        assert_eq!(msg.command(), "FooBar");
        assert_eq!(msg.variant::<Custom>().map(Custom::command), Some("FooBar"));
    }

    #[test]
    fn test_registered_numeric_with_bad_token_keeps_error() {
        let registry = Registry::new();
        registry.register_kind("NUM*", MessageKind::Numeric, Syntax::Wildcard);
        let msg = registry.create("NUMX", "", ["a"]);
        assert_eq!(msg.kind(), MessageKind::Numeric);
        assert_eq!(
            msg.error(),
            Some(&MessageParseError::InvalidNumeric("NUMX".to_string()))
        );
    }

    #[test]
    fn test_unregister_removes_from_every_table() {
        let registry = Registry::new();
        registry.register::<Join>("J", Syntax::Exact);
        registry.register::<Join>("J", Syntax::Wildcard);
        registry.register::<Join>("J", Syntax::RegExp);
        assert_eq!(registry.len(), 3);

        registry.unregister_command("J");
        assert!(registry.is_empty());
        assert_eq!(registry.instantiate("J").kind(), MessageKind::Custom);

        // Unknown patterns are ignored.
        registry.unregister_command("NOPE");
    }

    #[test]
    fn test_parse_line() {
        let registry = Registry::with_builtins();
        let msg = registry
            .parse_line(":nick!u@h JOIN #rust :secret key\r\n")
            .unwrap();
        assert_eq!(msg.prefix(), "nick!u@h");
        let join = msg.variant::<Join>().unwrap();
        assert_eq!(join.key(), "secret key");

        assert_eq!(
            registry.parse_line("\r\n").unwrap_err(),
            MessageParseError::EmptyMessage
        );
    }

    #[test]
    fn test_debug_lists_patterns() {
        let registry = Registry::new();
        registry.register_kind("a*", MessageKind::Away, Syntax::Wildcard);
        let debug = format!("{:?}", registry);
        assert!(debug.contains("a*"));
    }

    #[test]
    fn test_unregister_wildcard_ignores_case() {
        let registry = Registry::new();
        registry.register_kind("priv*", MessageKind::Private, Syntax::Wildcard);
        registry.unregister_command("PRIV*");
        assert!(registry.is_empty());
        assert_eq!(registry.instantiate("PRIVMSG").kind(), MessageKind::Custom);
    }
}
