//! Connection registration: `PASS`, `NICK`, `USER`, `OPER`, `QUIT`.

use crate::error::MessageParseError;
use crate::kind::MessageKind;
use crate::message::body::{body_access, Encoded, Trailing, Variant};
use crate::message::shapes::PasswordShape;
use crate::message::util::{arg, args_from};

/// `PASS <password>`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Password {
    creds: PasswordShape,
}

impl Password {
    /// Create a `PASS` message.
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            creds: PasswordShape {
                password: password.into(),
            },
        }
    }

    /// The connection password.
    pub fn password(&self) -> &str {
        &self.creds.password
    }

    /// Set the connection password.
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.creds.password = password.into();
    }
}

impl Variant for Password {
    const KIND: MessageKind = MessageKind::Password;

    fn init_from(&mut self, _command: &str, params: &[String]) -> Result<(), MessageParseError> {
        self.creds = PasswordShape::parse(params);
        Ok(())
    }

    fn encode(&self) -> Encoded<'_> {
        Encoded::new("PASS", Trailing::Auto).param(self.password())
    }

    body_access!(Password);
}

/// `NICK <nickname>`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Nick {
    nick: String,
}

impl Nick {
    /// Create a `NICK` message.
    pub fn new(nick: impl Into<String>) -> Self {
        Self { nick: nick.into() }
    }

    /// The nickname.
    pub fn nick(&self) -> &str {
        &self.nick
    }

    /// Set the nickname.
    pub fn set_nick(&mut self, nick: impl Into<String>) {
        self.nick = nick.into();
    }
}

impl Variant for Nick {
    const KIND: MessageKind = MessageKind::Nick;

    fn init_from(&mut self, _command: &str, params: &[String]) -> Result<(), MessageParseError> {
        self.nick = arg(params, 0);
        Ok(())
    }

    fn encode(&self) -> Encoded<'_> {
        Encoded::new("NICK", Trailing::Auto).param(self.nick.as_str())
    }

    body_access!(Nick);
}

/// `USER <username> <mode> <unused> :<realname>`
///
/// An empty username cannot be sent as a middle parameter: such a message
/// is written as `USER :` and the realname is dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct User {
    username: String,
    realname: String,
}

impl User {
    /// Create a `USER` message.
    pub fn new(username: impl Into<String>, realname: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            realname: realname.into(),
        }
    }

    /// The username (ident).
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Set the username.
    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    /// The real name.
    pub fn realname(&self) -> &str {
        &self.realname
    }

    /// Set the real name.
    pub fn set_realname(&mut self, realname: impl Into<String>) {
        self.realname = realname.into();
    }
}

impl Variant for User {
    const KIND: MessageKind = MessageKind::User;

    fn init_from(&mut self, _command: &str, params: &[String]) -> Result<(), MessageParseError> {
        self.username = arg(params, 0);
        self.realname = arg(params, 3);
        Ok(())
    }

    fn encode(&self) -> Encoded<'_> {
        Encoded::new("USER", Trailing::Freeform)
            .param(self.username.as_str())
            .param("0")
            .param("*")
            .param(self.realname.as_str())
    }

    body_access!(User);
}

/// `OPER <user> <password>`
///
/// Parsed as a leading user followed by the same password field `PASS` uses.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Operator {
    user: String,
    creds: PasswordShape,
}

impl Operator {
    /// Create an `OPER` message.
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            creds: PasswordShape {
                password: password.into(),
            },
        }
    }

    /// The operator name.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Set the operator name.
    pub fn set_user(&mut self, user: impl Into<String>) {
        self.user = user.into();
    }

    /// The operator password.
    pub fn password(&self) -> &str {
        &self.creds.password
    }

    /// Set the operator password.
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.creds.password = password.into();
    }
}

impl Variant for Operator {
    const KIND: MessageKind = MessageKind::Operator;

    fn init_from(&mut self, _command: &str, params: &[String]) -> Result<(), MessageParseError> {
        self.user = arg(params, 0);
        self.creds = PasswordShape::parse(args_from(params, 1));
        Ok(())
    }

    fn encode(&self) -> Encoded<'_> {
        Encoded::new("OPER", Trailing::Auto)
            .param(self.user.as_str())
            .param(self.password())
    }

    body_access!(Operator);
}

/// `QUIT [:<reason>]`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Quit {
    reason: String,
}

impl Quit {
    /// Create a `QUIT` message without a reason.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a `QUIT` message with a reason.
    pub fn with_reason(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// The quit reason, empty when none was given.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Set the quit reason.
    pub fn set_reason(&mut self, reason: impl Into<String>) {
        self.reason = reason.into();
    }
}

impl Variant for Quit {
    const KIND: MessageKind = MessageKind::Quit;

    fn init_from(&mut self, _command: &str, params: &[String]) -> Result<(), MessageParseError> {
        self.reason = arg(params, 0);
        Ok(())
    }

    fn encode(&self) -> Encoded<'_> {
        Encoded::new("QUIT", Trailing::Freeform).param_if(&self.reason)
    }

    body_access!(Quit);
}
