use std::fmt::{self, Display, Formatter};

use super::body::{Body, Encoded, Trailing};
use super::types::Message;
use super::util::IrcSink;

impl Display for Encoded<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_to(f).map(|_| ())
    }
}

impl Display for Body {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.encode() {
            Some(enc) => enc.fmt(f),
            None => Ok(()),
        }
    }
}

impl Message {
    /// The outbound wire form, without prefix.
    ///
    /// An [`Unknown`](crate::MessageKind::Unknown) message has no typed
    /// content and falls back to its raw command and parameters.
    pub(crate) fn write_to<S: IrcSink + ?Sized>(&self, sink: &mut S) -> Result<usize, S::Error> {
        match self.body().encode() {
            Some(enc) => enc.write_to(sink),
            None => Encoded::new(self.command(), Trailing::Auto)
                .params(self.parameters().iter().map(String::as_str))
                .write_to(sink),
        }
    }
}

/// Formats the message as a command line without prefix or line terminator.
impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_to(f).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use crate::message::{Body, Message};
    use crate::MessageKind;

    #[test]
    fn test_unknown_uses_raw_view() {
        let mut msg = Message::from_body("FOO", Body::Unknown);
        msg.init_from("", &["a", "b c"]).unwrap();
        assert_eq!(msg.kind(), MessageKind::Unknown);
        assert_eq!(msg.to_string(), "FOO a :b c");
    }

    #[test]
    fn test_empty_message_formats_empty() {
        assert_eq!(Message::new().to_string(), "");
        assert_eq!(Body::Unknown.to_string(), "");
    }
}
