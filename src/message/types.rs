use super::body::{Body, Variant};
use crate::error::MessageParseError;
use crate::kind::MessageKind;

/// An IRC message.
///
/// Holds the raw wire view (prefix, command token, parameters) next to the
/// typed [`Body`] decoded from it. The [`kind`](Self::kind) is always the
/// kind of the body.
///
/// # Example
///
/// ```
/// use irc_message::{Join, Message, MessageKind};
///
/// let msg = Message::from(Join::new("#rust").with_key("secret key"));
/// assert_eq!(msg.kind(), MessageKind::Join);
/// assert_eq!(msg.to_string(), "JOIN #rust :secret key");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Message {
    prefix: String,
    command: String,
    parameters: Vec<String>,
    body: Body,
    error: Option<MessageParseError>,
}

impl Message {
    /// Create an empty message of kind [`MessageKind::Unknown`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an un-initialized message for `command` holding `body`.
    pub fn from_body(command: impl Into<String>, body: Body) -> Self {
        Self {
            command: command.into(),
            body,
            ..Self::default()
        }
    }

    /// Fill the message from wire data.
    ///
    /// Stores the prefix and parameters and lets the body decode its typed
    /// fields. A structural problem is returned and also kept in
    /// [`error`](Self::error); the fields decoded so far remain available.
    pub fn init_from<S: AsRef<str>>(
        &mut self,
        prefix: &str,
        parameters: &[S],
    ) -> Result<(), MessageParseError> {
        self.prefix = prefix.to_owned();
        self.parameters = parameters.iter().map(|p| p.as_ref().to_owned()).collect();
        let result = self.body.init_from(&self.command, &self.parameters);
        self.error = result.as_ref().err().cloned();
        result
    }

    /// The kind of this message.
    pub fn kind(&self) -> MessageKind {
        self.body.kind()
    }

    /// The sender, empty when the line carried no prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Set the sender.
    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
    }

    /// The command token.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Set the command token.
    pub fn set_command(&mut self, command: impl Into<String>) {
        self.command = command.into();
    }

    /// The positional parameters as received.
    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    /// Set the positional parameters.
    pub fn set_parameters(&mut self, parameters: Vec<String>) {
        self.parameters = parameters;
    }

    /// The typed content.
    pub fn body(&self) -> &Body {
        &self.body
    }

    /// The structural error hit while decoding, if any.
    pub fn error(&self) -> Option<&MessageParseError> {
        self.error.as_ref()
    }

    /// Borrow the typed variant, if this message holds a `T`.
    ///
    /// ```
    /// use irc_message::{Kick, Message};
    ///
    /// let msg = Message::from(Kick::new("#c", "bob"));
    /// assert_eq!(msg.variant::<Kick>().map(Kick::user), Some("bob"));
    /// ```
    pub fn variant<T: Variant>(&self) -> Option<&T> {
        T::from_body(&self.body)
    }

    /// Mutably borrow the typed variant, if this message holds a `T`.
    pub fn variant_mut<T: Variant>(&mut self) -> Option<&mut T> {
        T::from_body_mut(&mut self.body)
    }

    /// Take the typed content out of the message.
    pub fn into_body(self) -> Body {
        self.body
    }
}

impl<T: Variant> From<T> for Message {
    fn from(variant: T) -> Self {
        let (command, parameters) = {
            let enc = variant.encode();
            (enc.command.to_string(), enc.to_params())
        };
        Self {
            prefix: String::new(),
            command,
            parameters,
            body: variant.into(),
            error: None,
        }
    }
}
