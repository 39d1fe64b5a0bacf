//! User-based queries: `WHO`, `WHOIS`, `WHOWAS`.

use crate::error::MessageParseError;
use crate::kind::MessageKind;
use crate::message::body::{body_access, Encoded, Trailing, Variant};
use crate::message::shapes::QueryShape;

macro_rules! query_variant {
    ($(#[$meta:meta])* $name:ident, $cmd:literal) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, Eq)]
        pub struct $name {
            query: QueryShape,
        }

        impl $name {
            #[doc = concat!("Create a `", $cmd, "` query.")]
            pub fn new(user: impl Into<String>) -> Self {
                Self {
                    query: QueryShape { user: user.into() },
                }
            }

            /// The queried nickname or mask.
            pub fn user(&self) -> &str {
                &self.query.user
            }

            /// Set the queried nickname or mask.
            pub fn set_user(&mut self, user: impl Into<String>) {
                self.query.user = user.into();
            }
        }
    };
}

query_variant!(
    /// `WHO <mask>`
    Who,
    "WHO"
);
query_variant!(
    /// `WHOIS [<server>] <nickname>`
    ///
    /// When a server is given the nickname is the second parameter.
    Whois,
    "WHOIS"
);
query_variant!(
    /// `WHOWAS <nickname> [<count> [<server>]]`
    Whowas,
    "WHOWAS"
);

impl Variant for Who {
    const KIND: MessageKind = MessageKind::Who;

    fn init_from(&mut self, _command: &str, params: &[String]) -> Result<(), MessageParseError> {
        self.query = QueryShape::parse(params);
        Ok(())
    }

    fn encode(&self) -> Encoded<'_> {
        Encoded::new("WHO", Trailing::Auto).param_if(self.user())
    }

    body_access!(Who);
}

impl Variant for Whois {
    const KIND: MessageKind = MessageKind::Whois;

    fn init_from(&mut self, _command: &str, params: &[String]) -> Result<(), MessageParseError> {
        let idx = if params.len() > 1 { 1 } else { 0 };
        self.query = QueryShape::parse_at(params, idx);
        Ok(())
    }

    fn encode(&self) -> Encoded<'_> {
        Encoded::new("WHOIS", Trailing::Auto).param(self.user())
    }

    body_access!(Whois);
}

impl Variant for Whowas {
    const KIND: MessageKind = MessageKind::Whowas;

    fn init_from(&mut self, _command: &str, params: &[String]) -> Result<(), MessageParseError> {
        self.query = QueryShape::parse(params);
        Ok(())
    }

    fn encode(&self) -> Encoded<'_> {
        Encoded::new("WHOWAS", Trailing::Auto).param(self.user())
    }

    body_access!(Whowas);
}
