//! Field groups shared by a family of variants.
//!
//! A variant embeds the shape by value and calls its `parse` explicitly from
//! its own `init_from`.

use super::util::arg;

/// A password, shared by `PASS` and `OPER`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PasswordShape {
    /// The password.
    pub password: String,
}

impl PasswordShape {
    /// Parse from parameters where the password comes first.
    pub fn parse(params: &[String]) -> Self {
        Self {
            password: arg(params, 0),
        }
    }
}

/// A channel name, shared by the channel operations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChannelShape {
    /// The channel name.
    pub channel: String,
}

impl ChannelShape {
    /// Parse from parameters where the channel comes first.
    pub fn parse(params: &[String]) -> Self {
        Self::parse_at(params, 0)
    }

    /// Parse the channel at position `idx`.
    pub fn parse_at(params: &[String], idx: usize) -> Self {
        Self {
            channel: arg(params, idx),
        }
    }
}

/// Target and text, shared by `PRIVMSG` and `NOTICE`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SendShape {
    /// Nickname or channel the text is sent to.
    pub target: String,
    /// The text.
    pub message: String,
}

impl SendShape {
    /// Parse `<target> <text>`.
    pub fn parse(params: &[String]) -> Self {
        Self {
            target: arg(params, 0),
            message: arg(params, 1),
        }
    }
}

/// The queried user or mask, shared by `WHO`, `WHOIS` and `WHOWAS`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryShape {
    /// The nickname or mask being queried.
    pub user: String,
}

impl QueryShape {
    /// Parse from parameters where the user comes first.
    pub fn parse(params: &[String]) -> Self {
        Self::parse_at(params, 0)
    }

    /// Parse the user at position `idx`.
    pub fn parse_at(params: &[String], idx: usize) -> Self {
        Self {
            user: arg(params, idx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_shapes_default_when_absent() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(PasswordShape::parse(&empty), PasswordShape::default());
        assert_eq!(ChannelShape::parse(&empty), ChannelShape::default());
        assert_eq!(SendShape::parse(&empty), SendShape::default());
        assert_eq!(QueryShape::parse(&empty), QueryShape::default());
    }

    #[test]
    fn test_shapes_parse_positions() {
        let p = params(&["nick", "#chan"]);
        assert_eq!(ChannelShape::parse_at(&p, 1).channel, "#chan");
        assert_eq!(QueryShape::parse(&p).user, "nick");

        let send = SendShape::parse(&params(&["#rust", "hello world"]));
        assert_eq!(send.target, "#rust");
        assert_eq!(send.message, "hello world");
    }
}
