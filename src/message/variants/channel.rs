//! Channel operations: `JOIN`, `PART`, `TOPIC`, `NAMES`, `LIST`, `INVITE`, `KICK`.

use crate::error::MessageParseError;
use crate::kind::MessageKind;
use crate::message::body::{body_access, Encoded, Trailing, Variant};
use crate::message::shapes::ChannelShape;
use crate::message::util::arg;

fn shape(channel: impl Into<String>) -> ChannelShape {
    ChannelShape {
        channel: channel.into(),
    }
}

/// `JOIN <channel> [<key>]`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Join {
    chan: ChannelShape,
    key: String,
}

impl Join {
    /// Create a `JOIN` message.
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            chan: shape(channel),
            key: String::new(),
        }
    }

    /// Set the channel key.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// The channel being joined.
    pub fn channel(&self) -> &str {
        &self.chan.channel
    }

    /// Set the channel.
    pub fn set_channel(&mut self, channel: impl Into<String>) {
        self.chan.channel = channel.into();
    }

    /// The channel key, empty when none.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Set the channel key.
    pub fn set_key(&mut self, key: impl Into<String>) {
        self.key = key.into();
    }
}

impl Variant for Join {
    const KIND: MessageKind = MessageKind::Join;

    fn init_from(&mut self, _command: &str, params: &[String]) -> Result<(), MessageParseError> {
        self.chan = ChannelShape::parse(params);
        self.key = arg(params, 1);
        Ok(())
    }

    fn encode(&self) -> Encoded<'_> {
        Encoded::new("JOIN", Trailing::Auto)
            .param(self.channel())
            .param_if(&self.key)
    }

    body_access!(Join);
}

/// `PART <channel> [:<reason>]`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Part {
    chan: ChannelShape,
    reason: String,
}

impl Part {
    /// Create a `PART` message.
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            chan: shape(channel),
            reason: String::new(),
        }
    }

    /// Set the part reason.
    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    /// The channel being left.
    pub fn channel(&self) -> &str {
        &self.chan.channel
    }

    /// Set the channel.
    pub fn set_channel(&mut self, channel: impl Into<String>) {
        self.chan.channel = channel.into();
    }

    /// The part reason, empty when none.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Set the part reason.
    pub fn set_reason(&mut self, reason: impl Into<String>) {
        self.reason = reason.into();
    }
}

impl Variant for Part {
    const KIND: MessageKind = MessageKind::Part;

    fn init_from(&mut self, _command: &str, params: &[String]) -> Result<(), MessageParseError> {
        self.chan = ChannelShape::parse(params);
        self.reason = arg(params, 1);
        Ok(())
    }

    fn encode(&self) -> Encoded<'_> {
        if self.reason.is_empty() {
            return Encoded::new("PART", Trailing::Auto).param(self.channel());
        }
        Encoded::new("PART", Trailing::Freeform)
            .param(self.channel())
            .param(self.reason.as_str())
    }

    body_access!(Part);
}

/// `TOPIC <channel> [:<topic>]`
///
/// Without a topic this is a query for the current topic. An empty topic
/// is indistinguishable from no topic, so a received `TOPIC #c :` (clear
/// the topic) is written back as the query `TOPIC #c`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Topic {
    chan: ChannelShape,
    topic: String,
}

impl Topic {
    /// Create a `TOPIC` query.
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            chan: shape(channel),
            topic: String::new(),
        }
    }

    /// Set the new topic.
    #[must_use]
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = topic.into();
        self
    }

    /// The channel.
    pub fn channel(&self) -> &str {
        &self.chan.channel
    }

    /// Set the channel.
    pub fn set_channel(&mut self, channel: impl Into<String>) {
        self.chan.channel = channel.into();
    }

    /// The topic, empty for a query.
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Set the topic.
    pub fn set_topic(&mut self, topic: impl Into<String>) {
        self.topic = topic.into();
    }
}

impl Variant for Topic {
    const KIND: MessageKind = MessageKind::Topic;

    fn init_from(&mut self, _command: &str, params: &[String]) -> Result<(), MessageParseError> {
        self.chan = ChannelShape::parse(params);
        self.topic = arg(params, 1);
        Ok(())
    }

    fn encode(&self) -> Encoded<'_> {
        if self.topic.is_empty() {
            return Encoded::new("TOPIC", Trailing::Auto).param(self.channel());
        }
        Encoded::new("TOPIC", Trailing::Freeform)
            .param(self.channel())
            .param(self.topic.as_str())
    }

    body_access!(Topic);
}

/// `NAMES [<channel>]`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Names {
    chan: ChannelShape,
}

impl Names {
    /// Create a `NAMES` message for a channel.
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            chan: shape(channel),
        }
    }

    /// The channel, empty for all visible channels.
    pub fn channel(&self) -> &str {
        &self.chan.channel
    }

    /// Set the channel.
    pub fn set_channel(&mut self, channel: impl Into<String>) {
        self.chan.channel = channel.into();
    }
}

impl Variant for Names {
    const KIND: MessageKind = MessageKind::Names;

    fn init_from(&mut self, _command: &str, params: &[String]) -> Result<(), MessageParseError> {
        self.chan = ChannelShape::parse(params);
        Ok(())
    }

    fn encode(&self) -> Encoded<'_> {
        Encoded::new("NAMES", Trailing::Auto).param_if(self.channel())
    }

    body_access!(Names);
}

/// `LIST [<channel> [<server>]]`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct List {
    chan: ChannelShape,
    server: String,
}

impl List {
    /// Create a `LIST` message for a channel.
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            chan: shape(channel),
            server: String::new(),
        }
    }

    /// Forward the request to a server.
    #[must_use]
    pub fn with_server(mut self, server: impl Into<String>) -> Self {
        self.server = server.into();
        self
    }

    /// The channel, empty for all channels.
    pub fn channel(&self) -> &str {
        &self.chan.channel
    }

    /// Set the channel.
    pub fn set_channel(&mut self, channel: impl Into<String>) {
        self.chan.channel = channel.into();
    }

    /// The target server, empty when none.
    pub fn server(&self) -> &str {
        &self.server
    }

    /// Set the target server.
    pub fn set_server(&mut self, server: impl Into<String>) {
        self.server = server.into();
    }
}

impl Variant for List {
    const KIND: MessageKind = MessageKind::List;

    fn init_from(&mut self, _command: &str, params: &[String]) -> Result<(), MessageParseError> {
        self.chan = ChannelShape::parse(params);
        self.server = arg(params, 1);
        Ok(())
    }

    fn encode(&self) -> Encoded<'_> {
        // The server is positional after the channel and cannot stand alone.
        if self.channel().is_empty() {
            return Encoded::new("LIST", Trailing::Auto);
        }
        Encoded::new("LIST", Trailing::Auto)
            .param(self.channel())
            .param_if(&self.server)
    }

    body_access!(List);
}

/// `INVITE <user> <channel>`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Invite {
    chan: ChannelShape,
    user: String,
}

impl Invite {
    /// Create an `INVITE` message.
    pub fn new(user: impl Into<String>, channel: impl Into<String>) -> Self {
        Self {
            chan: shape(channel),
            user: user.into(),
        }
    }

    /// The channel.
    pub fn channel(&self) -> &str {
        &self.chan.channel
    }

    /// Set the channel.
    pub fn set_channel(&mut self, channel: impl Into<String>) {
        self.chan.channel = channel.into();
    }

    /// The invited user.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Set the invited user.
    pub fn set_user(&mut self, user: impl Into<String>) {
        self.user = user.into();
    }
}

impl Variant for Invite {
    const KIND: MessageKind = MessageKind::Invite;

    fn init_from(&mut self, _command: &str, params: &[String]) -> Result<(), MessageParseError> {
        self.user = arg(params, 0);
        self.chan = ChannelShape::parse_at(params, 1);
        Ok(())
    }

    fn encode(&self) -> Encoded<'_> {
        Encoded::new("INVITE", Trailing::Auto)
            .param(self.user.as_str())
            .param(self.channel())
    }

    body_access!(Invite);
}

/// `KICK <channel> <user> [:<reason>]`
///
/// With an empty user the line ends there as `KICK <channel> :` and the
/// reason is dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Kick {
    chan: ChannelShape,
    user: String,
    reason: String,
}

impl Kick {
    /// Create a `KICK` message.
    pub fn new(channel: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            chan: shape(channel),
            user: user.into(),
            reason: String::new(),
        }
    }

    /// Set the kick reason.
    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    /// The channel.
    pub fn channel(&self) -> &str {
        &self.chan.channel
    }

    /// Set the channel.
    pub fn set_channel(&mut self, channel: impl Into<String>) {
        self.chan.channel = channel.into();
    }

    /// The kicked user.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Set the kicked user.
    pub fn set_user(&mut self, user: impl Into<String>) {
        self.user = user.into();
    }

    /// The kick reason, empty when none.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Set the kick reason.
    pub fn set_reason(&mut self, reason: impl Into<String>) {
        self.reason = reason.into();
    }
}

impl Variant for Kick {
    const KIND: MessageKind = MessageKind::Kick;

    fn init_from(&mut self, _command: &str, params: &[String]) -> Result<(), MessageParseError> {
        self.chan = ChannelShape::parse(params);
        self.user = arg(params, 1);
        self.reason = arg(params, 2);
        Ok(())
    }

    fn encode(&self) -> Encoded<'_> {
        if self.reason.is_empty() {
            return Encoded::new("KICK", Trailing::Auto)
                .param(self.channel())
                .param(self.user.as_str());
        }
        Encoded::new("KICK", Trailing::Freeform)
            .param(self.channel())
            .param(self.user.as_str())
            .param(self.reason.as_str())
    }

    body_access!(Kick);
}
