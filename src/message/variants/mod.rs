//! Concrete message variants, grouped by family.

mod channel;
mod misc;
mod mode;
mod query;
mod registration;
mod send;

pub use channel::{Invite, Join, Kick, List, Names, Part, Topic};
pub use misc::{is_numeric_token, Away, Custom, Error, Numeric, Ping, Pong};
pub use mode::Mode;
pub use query::{Who, Whois, Whowas};
pub use registration::{Nick, Operator, Password, Quit, User};
pub use send::{Notice, Private};
