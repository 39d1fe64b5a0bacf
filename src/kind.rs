//! Message kind discriminant.

use std::fmt;

/// The kind of a [`Message`](crate::Message).
///
/// One value per built-in variant, plus [`Unknown`](Self::Unknown) for a
/// message that has not been initialized and [`Custom`](Self::Custom) for
/// commands without a typed representation. The numeric values are stable
/// and grouped by family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[repr(u8)]
pub enum MessageKind {
    /// Not yet initialized.
    #[default]
    Unknown = 0,

    // === Connection registration ===
    /// `PASS`
    Password = 1,
    /// `NICK`
    Nick = 2,
    /// `USER`
    User = 3,
    /// `OPER`
    Operator = 4,
    /// `QUIT`
    Quit = 5,

    // === Channel operations ===
    /// `JOIN`
    Join = 10,
    /// `PART`
    Part = 11,
    /// `TOPIC`
    Topic = 12,
    /// `NAMES`
    Names = 13,
    /// `LIST`
    List = 14,
    /// `INVITE`
    Invite = 15,
    /// `KICK`
    Kick = 16,

    // === Mode operations ===
    /// `MODE`
    Mode = 20,

    // === Sending messages ===
    /// `PRIVMSG`
    Private = 30,
    /// `NOTICE`
    Notice = 31,

    // === User-based queries ===
    /// `WHO`
    Who = 40,
    /// `WHOIS`
    Whois = 41,
    /// `WHOWAS`
    Whowas = 42,

    // === Miscellaneous ===
    /// `PING`
    Ping = 50,
    /// `PONG`
    Pong = 51,
    /// `ERROR`
    Error = 52,
    /// Three-digit server reply.
    Numeric = 53,
    /// `AWAY`
    Away = 54,

    /// Any command without a typed representation.
    Custom = 100,
}

impl MessageKind {
    /// Every kind, in discriminant order.
    pub const ALL: [MessageKind; 25] = [
        Self::Unknown,
        Self::Password,
        Self::Nick,
        Self::User,
        Self::Operator,
        Self::Quit,
        Self::Join,
        Self::Part,
        Self::Topic,
        Self::Names,
        Self::List,
        Self::Invite,
        Self::Kick,
        Self::Mode,
        Self::Private,
        Self::Notice,
        Self::Who,
        Self::Whois,
        Self::Whowas,
        Self::Ping,
        Self::Pong,
        Self::Error,
        Self::Numeric,
        Self::Away,
        Self::Custom,
    ];

    /// The stable numeric value of this kind.
    #[inline]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// The canonical wire command for this kind.
    ///
    /// Returns `None` for kinds that are not bound to a single command token
    /// (`Unknown`, `Numeric` and `Custom`).
    pub const fn command(self) -> Option<&'static str> {
        match self {
            Self::Password => Some("PASS"),
            Self::Nick => Some("NICK"),
            Self::User => Some("USER"),
            Self::Operator => Some("OPER"),
            Self::Quit => Some("QUIT"),
            Self::Join => Some("JOIN"),
            Self::Part => Some("PART"),
            Self::Topic => Some("TOPIC"),
            Self::Names => Some("NAMES"),
            Self::List => Some("LIST"),
            Self::Invite => Some("INVITE"),
            Self::Kick => Some("KICK"),
            Self::Mode => Some("MODE"),
            Self::Private => Some("PRIVMSG"),
            Self::Notice => Some("NOTICE"),
            Self::Who => Some("WHO"),
            Self::Whois => Some("WHOIS"),
            Self::Whowas => Some("WHOWAS"),
            Self::Ping => Some("PING"),
            Self::Pong => Some("PONG"),
            Self::Error => Some("ERROR"),
            Self::Away => Some("AWAY"),
            Self::Unknown | Self::Numeric | Self::Custom => None,
        }
    }

    /// Lowercase name of this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Password => "password",
            Self::Nick => "nick",
            Self::User => "user",
            Self::Operator => "operator",
            Self::Quit => "quit",
            Self::Join => "join",
            Self::Part => "part",
            Self::Topic => "topic",
            Self::Names => "names",
            Self::List => "list",
            Self::Invite => "invite",
            Self::Kick => "kick",
            Self::Mode => "mode",
            Self::Private => "private",
            Self::Notice => "notice",
            Self::Who => "who",
            Self::Whois => "whois",
            Self::Whowas => "whowas",
            Self::Ping => "ping",
            Self::Pong => "pong",
            Self::Error => "error",
            Self::Numeric => "numeric",
            Self::Away => "away",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
