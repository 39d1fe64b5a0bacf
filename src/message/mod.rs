//! IRC message types, parsing and serialization.

mod body;
mod serialize;
pub mod shapes;
mod types;
pub(crate) mod util;
pub mod variants;

pub use self::body::{Body, Encoded, Trailing, Variant};
pub use self::types::Message;
pub use self::util::needs_colon_prefix;
