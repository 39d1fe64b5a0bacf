//! Miscellaneous messages: `PING`, `PONG`, `ERROR`, numerics, `AWAY` and
//! custom commands.

use std::borrow::Cow;

use crate::error::MessageParseError;
use crate::kind::MessageKind;
use crate::message::body::{body_access, Encoded, Trailing, Variant};
use crate::message::util::arg;

/// `PING <target>`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ping {
    target: String,
}

impl Ping {
    /// Create a `PING` message.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }

    /// The server or token to ping.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Set the target.
    pub fn set_target(&mut self, target: impl Into<String>) {
        self.target = target.into();
    }
}

impl Variant for Ping {
    const KIND: MessageKind = MessageKind::Ping;

    fn init_from(&mut self, _command: &str, params: &[String]) -> Result<(), MessageParseError> {
        self.target = arg(params, 0);
        Ok(())
    }

    fn encode(&self) -> Encoded<'_> {
        Encoded::new("PING", Trailing::Auto).param(self.target.as_str())
    }

    body_access!(Ping);
}

/// `PONG <target>`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pong {
    target: String,
}

impl Pong {
    /// Create a `PONG` message.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }

    /// The server or token being answered.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Set the target.
    pub fn set_target(&mut self, target: impl Into<String>) {
        self.target = target.into();
    }
}

impl Variant for Pong {
    const KIND: MessageKind = MessageKind::Pong;

    fn init_from(&mut self, _command: &str, params: &[String]) -> Result<(), MessageParseError> {
        self.target = arg(params, 0);
        Ok(())
    }

    fn encode(&self) -> Encoded<'_> {
        Encoded::new("PONG", Trailing::Auto).param(self.target.as_str())
    }

    body_access!(Pong);
}

/// `ERROR :<text>`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Error {
    error: String,
}

impl Error {
    /// Create an `ERROR` message.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    /// The error text.
    pub fn error(&self) -> &str {
        &self.error
    }

    /// Set the error text.
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error = error.into();
    }
}

impl Variant for Error {
    const KIND: MessageKind = MessageKind::Error;

    fn init_from(&mut self, _command: &str, params: &[String]) -> Result<(), MessageParseError> {
        self.error = arg(params, 0);
        Ok(())
    }

    fn encode(&self) -> Encoded<'_> {
        Encoded::new("ERROR", Trailing::Freeform).param(self.error.as_str())
    }

    body_access!(Error);
}

/// Check whether a command token is a three-digit numeric reply.
#[inline]
pub fn is_numeric_token(command: &str) -> bool {
    command.len() == 3 && command.bytes().all(|b| b.is_ascii_digit())
}

/// A three-digit server reply such as `001` or `433`.
///
/// The reply code comes from the command token; the parameters are kept
/// as received.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Numeric {
    code: u32,
    params: Vec<String>,
}

impl Numeric {
    /// Create a numeric reply.
    pub fn new<I, S>(code: u32, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            code,
            params: params.into_iter().map(Into::into).collect(),
        }
    }

    /// The reply code.
    pub fn code(&self) -> u32 {
        self.code
    }

    /// Set the reply code.
    pub fn set_code(&mut self, code: u32) {
        self.code = code;
    }

    /// The reply parameters.
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Set the reply parameters.
    pub fn set_params(&mut self, params: Vec<String>) {
        self.params = params;
    }
}

impl Variant for Numeric {
    const KIND: MessageKind = MessageKind::Numeric;

    fn init_from(&mut self, command: &str, params: &[String]) -> Result<(), MessageParseError> {
        self.params = params.to_vec();
        if !is_numeric_token(command) {
            return Err(MessageParseError::InvalidNumeric(command.to_owned()));
        }
        self.code = command
            .parse()
            .map_err(|_| MessageParseError::InvalidNumeric(command.to_owned()))?;
        Ok(())
    }

    fn encode(&self) -> Encoded<'_> {
        Encoded::new(format!("{:03}", self.code), Trailing::Auto)
            .params(self.params.iter().map(String::as_str))
    }

    body_access!(Numeric);
}

/// `AWAY [:<text>]`
///
/// Without text this clears the away status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Away {
    message: String,
}

impl Away {
    /// Create an `AWAY` message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The away text, empty when returning.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Set the away text.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }
}

impl Variant for Away {
    const KIND: MessageKind = MessageKind::Away;

    fn init_from(&mut self, _command: &str, params: &[String]) -> Result<(), MessageParseError> {
        self.message = arg(params, 0);
        Ok(())
    }

    fn encode(&self) -> Encoded<'_> {
        Encoded::new("AWAY", Trailing::Freeform).param_if(&self.message)
    }

    body_access!(Away);
}

/// Any command without a typed representation.
///
/// The command token is kept verbatim and the parameters are not
/// decomposed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Custom {
    command: String,
    params: Vec<String>,
}

impl Custom {
    /// Create a custom command.
    pub fn new<I, S>(command: impl Into<String>, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            command: command.into(),
            params: params.into_iter().map(Into::into).collect(),
        }
    }

    /// The raw command token.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Set the command token.
    pub fn set_command(&mut self, command: impl Into<String>) {
        self.command = command.into();
    }

    /// The parameters.
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Set the parameters.
    pub fn set_params(&mut self, params: Vec<String>) {
        self.params = params;
    }
}

impl Variant for Custom {
    const KIND: MessageKind = MessageKind::Custom;

    fn init_from(&mut self, command: &str, params: &[String]) -> Result<(), MessageParseError> {
        self.command = command.to_owned();
        self.params = params.to_vec();
        Ok(())
    }

    fn encode(&self) -> Encoded<'_> {
        Encoded::new(Cow::Borrowed(self.command.as_str()), Trailing::Auto)
            .params(self.params.iter().map(String::as_str))
    }

    body_access!(Custom);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_token() {
        assert!(is_numeric_token("001"));
        assert!(is_numeric_token("433"));
        assert!(!is_numeric_token("01"));
        assert!(!is_numeric_token("0001"));
        assert!(!is_numeric_token("4a4"));
        assert!(!is_numeric_token("١٢٣"));
    }

    #[test]
    fn test_numeric_code() {
        let mut numeric = Numeric::default();
        numeric
            .init_from("001", &["nick".to_string(), "Welcome".to_string()])
            .unwrap();
        assert_eq!(numeric.code(), 1);
        assert_eq!(numeric.params(), &["nick", "Welcome"]);
        assert_eq!(numeric.encode().command, "001");
    }

    #[test]
    fn test_numeric_rejects_non_digits() {
        let mut numeric = Numeric::default();
        let err = numeric.init_from("FOO", &["x".to_string()]).unwrap_err();
        assert_eq!(err, MessageParseError::InvalidNumeric("FOO".to_string()));
        // Parameters are still kept for a best-effort result.
        assert_eq!(numeric.params(), &["x"]);
        assert_eq!(numeric.code(), 0);
    }

    #[test]
    fn test_custom_keeps_token_verbatim() {
        let mut custom = Custom::default();
        custom
            .init_from("xMyCmd", &["a".to_string(), "b c".to_string()])
            .unwrap();
        assert_eq!(custom.command(), "xMyCmd");
        assert_eq!(custom.params(), &["a", "b c"]);
    }
}
