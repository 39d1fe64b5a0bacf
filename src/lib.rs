//! # irc-message
//!
//! Typed IRC messages with an extensible command registry.
//!
//! ## Features
//!
//! - One typed variant per IRC command, decoded from wire parameters
//! - Serialization back to the wire form via `Display` or [`IrcEncode`]
//! - A [`Registry`] resolving command tokens by exact name, glob or regex
//! - `Numeric` and `Custom` fallbacks so dispatch never fails
//! - Optional TOML registry configuration (`serde` feature)

#![deny(clippy::all)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! ## Quick Start
//!
//! ### Parsing
//!
//! ```rust
//! use irc_message::{MessageKind, Private, Registry};
//!
//! let registry = Registry::with_builtins();
//! let msg = registry
//!     .parse_line(":nick!user@host PRIVMSG #rust :\x01ACTION waves\x01\r\n")
//!     .expect("valid line");
//!
//! assert_eq!(msg.kind(), MessageKind::Private);
//! let privmsg = msg.variant::<Private>().unwrap();
//! assert!(privmsg.is_action());
//! assert_eq!(privmsg.message(), "waves");
//! ```
//!
//! ### Building
//!
//! ```rust
//! use irc_message::{IrcEncode, Kick, Message};
//!
//! let msg = Message::from(Kick::new("#rust", "troll").with_reason("bye"));
//! assert_eq!(msg.to_string(), "KICK #rust troll :bye");
//! assert_eq!(msg.to_bytes(), b"KICK #rust troll :bye\r\n");
//! ```
//!
//! ### Custom commands
//!
//! ```rust
//! use irc_message::{MessageKind, Registry, Syntax};
//!
//! let registry = Registry::with_builtins();
//! registry.register_kind("KNOCK", MessageKind::Invite, Syntax::Exact);
//!
//! let msg = registry.create("KNOCK", "", ["bob", "#rust"]);
//! assert_eq!(msg.kind(), MessageKind::Invite);
//! ```

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
pub mod config;
pub mod ctcp;
pub mod encode;
pub mod error;
pub mod kind;
pub mod line;
pub mod message;
pub mod registry;

#[cfg(feature = "serde")]
pub use self::config::{CommandRule, RegistryConfig};
pub use self::encode::IrcEncode;
#[cfg(feature = "serde")]
pub use self::error::ConfigError;
pub use self::error::MessageParseError;
pub use self::kind::MessageKind;
pub use self::line::RawLine;
pub use self::message::variants::{
    is_numeric_token, Away, Custom, Invite, Join, Kick, List, Mode, Names, Nick, Notice, Numeric,
    Operator, Part, Password, Ping, Pong, Private, Quit, Topic, User, Who, Whois, Whowas,
};
pub use self::message::{Body, Encoded, Message, Trailing, Variant};
pub use self::registry::{Constructor, Registry, Syntax};
