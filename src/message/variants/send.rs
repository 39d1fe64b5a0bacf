//! Sending messages: `PRIVMSG` and `NOTICE`.

use crate::ctcp;
use crate::error::MessageParseError;
use crate::kind::MessageKind;
use crate::message::body::{body_access, Encoded, Trailing, Variant};
use crate::message::shapes::SendShape;

fn shape(target: impl Into<String>, message: impl Into<String>) -> SendShape {
    SendShape {
        target: target.into(),
        message: message.into(),
    }
}

/// `PRIVMSG <target> :<text>`
///
/// A CTCP `ACTION` body sets [`is_action`](Self::is_action) and any other
/// CTCP-framed body sets [`is_request`](Self::is_request). In both cases
/// [`message`](Self::message) holds the unframed text; the `ACTION` token
/// is stripped as well.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Private {
    send: SendShape,
    action: bool,
    request: bool,
}

impl Private {
    /// Create a plain `PRIVMSG`.
    pub fn new(target: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            send: shape(target, message),
            action: false,
            request: false,
        }
    }

    /// Create a CTCP `ACTION` (`/me`).
    pub fn action(target: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            action: true,
            ..Self::new(target, message)
        }
    }

    /// Create a CTCP request such as `VERSION`.
    pub fn request(target: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            request: true,
            ..Self::new(target, message)
        }
    }

    /// Nickname or channel the message is sent to.
    pub fn target(&self) -> &str {
        &self.send.target
    }

    /// Set the target.
    pub fn set_target(&mut self, target: impl Into<String>) {
        self.send.target = target.into();
    }

    /// The message text.
    pub fn message(&self) -> &str {
        &self.send.message
    }

    /// Set the message text.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.send.message = message.into();
    }

    /// Whether this is a CTCP `ACTION`.
    pub fn is_action(&self) -> bool {
        self.action
    }

    /// Mark as a CTCP `ACTION`.
    pub fn set_action(&mut self, action: bool) {
        self.action = action;
    }

    /// Whether this is a CTCP request other than `ACTION`.
    pub fn is_request(&self) -> bool {
        self.request
    }

    /// Mark as a CTCP request.
    pub fn set_request(&mut self, request: bool) {
        self.request = request;
    }
}

impl Variant for Private {
    const KIND: MessageKind = MessageKind::Private;

    fn init_from(&mut self, _command: &str, params: &[String]) -> Result<(), MessageParseError> {
        self.send = SendShape::parse(params);
        self.action = false;
        self.request = false;

        if let Some(inner) = ctcp::unframe(&self.send.message) {
            let text = match ctcp::action_text(inner) {
                Some(text) => {
                    self.action = true;
                    text
                }
                None => {
                    self.request = true;
                    inner
                }
            };
            self.send.message = text.to_owned();
        }
        Ok(())
    }

    fn encode(&self) -> Encoded<'_> {
        let enc = Encoded::new("PRIVMSG", Trailing::Freeform).param(self.target());
        if self.action {
            let mut body = String::with_capacity(ctcp::ACTION_TOKEN.len() + self.message().len());
            body.push_str(ctcp::ACTION_TOKEN);
            body.push_str(self.message());
            enc.param(ctcp::frame(&body))
        } else if self.request {
            enc.param(ctcp::frame(self.message()))
        } else {
            enc.param(self.message())
        }
    }

    body_access!(Private);
}

/// `NOTICE <target> :<text>`
///
/// A CTCP-framed body is a reply to an earlier CTCP request: it sets
/// [`is_reply`](Self::is_reply) and [`message`](Self::message) holds the
/// unframed text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Notice {
    send: SendShape,
    reply: bool,
}

impl Notice {
    /// Create a plain `NOTICE`.
    pub fn new(target: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            send: shape(target, message),
            reply: false,
        }
    }

    /// Create a CTCP reply.
    pub fn reply(target: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            send: shape(target, message),
            reply: true,
        }
    }

    /// Nickname or channel the notice is sent to.
    pub fn target(&self) -> &str {
        &self.send.target
    }

    /// Set the target.
    pub fn set_target(&mut self, target: impl Into<String>) {
        self.send.target = target.into();
    }

    /// The notice text.
    pub fn message(&self) -> &str {
        &self.send.message
    }

    /// Set the notice text.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.send.message = message.into();
    }

    /// Whether this is a CTCP reply.
    pub fn is_reply(&self) -> bool {
        self.reply
    }

    /// Mark as a CTCP reply.
    pub fn set_reply(&mut self, reply: bool) {
        self.reply = reply;
    }
}

impl Variant for Notice {
    const KIND: MessageKind = MessageKind::Notice;

    fn init_from(&mut self, _command: &str, params: &[String]) -> Result<(), MessageParseError> {
        self.send = SendShape::parse(params);
        self.reply = false;

        if let Some(inner) = ctcp::unframe(&self.send.message) {
            self.reply = true;
            self.send.message = inner.to_owned();
        }
        Ok(())
    }

    fn encode(&self) -> Encoded<'_> {
        let enc = Encoded::new("NOTICE", Trailing::Freeform).param(self.target());
        if self.reply {
            enc.param(ctcp::frame(self.message()))
        } else {
            enc.param(self.message())
        }
    }

    body_access!(Notice);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_private(body: &str) -> Private {
        let mut msg = Private::default();
        msg.init_from("PRIVMSG", &["#c".to_string(), body.to_string()])
            .unwrap();
        msg
    }

    #[test]
    fn test_private_action() {
        let msg = parse_private("\x01ACTION waves\x01");
        assert!(msg.is_action());
        assert!(!msg.is_request());
        assert_eq!(msg.message(), "waves");
    }

    #[test]
    fn test_private_request() {
        let msg = parse_private("\x01VERSION\x01");
        assert!(msg.is_request());
        assert!(!msg.is_action());
        assert_eq!(msg.message(), "VERSION");
    }

    #[test]
    fn test_private_plain_text() {
        let msg = parse_private("hello there");
        assert!(!msg.is_action());
        assert!(!msg.is_request());
        assert_eq!(msg.message(), "hello there");
    }

    #[test]
    fn test_private_reinit_clears_flags() {
        let mut msg = parse_private("\x01ACTION waves\x01");
        msg.init_from("PRIVMSG", &["#c".to_string(), "plain".to_string()])
            .unwrap();
        assert!(!msg.is_action());
    }

    #[test]
    fn test_notice_reply() {
        let mut notice = Notice::default();
        notice
            .init_from(
                "NOTICE",
                &["me".to_string(), "\x01VERSION client 1.0\x01".to_string()],
            )
            .unwrap();
        assert!(notice.is_reply());
        assert_eq!(notice.message(), "VERSION client 1.0");
        assert_eq!(notice.encode().params[1], "\x01VERSION client 1.0\x01");
    }

    #[test]
    fn test_private_action_encode() {
        let action = Private::action("#c", "dances");
        assert_eq!(action.encode().params[1], "\x01ACTION dances\x01");
    }
}
