//! The closed set of message variants.

use std::borrow::Cow;

use smallvec::SmallVec;

use super::util::{write_cmd, write_cmd_freeform, IrcSink};
use super::variants::*;
use crate::error::MessageParseError;
use crate::kind::MessageKind;

/// A concrete, typed IRC message variant.
///
/// Implementors fill their fields from wire parameters in
/// [`init_from`](Self::init_from) and describe their outbound form in
/// [`encode`](Self::encode).
pub trait Variant: Default + Into<Body> {
    /// The kind every instance of this variant reports.
    const KIND: MessageKind;

    /// Fill fields from wire data.
    ///
    /// Missing trailing parameters are replaced by the field default. Only a
    /// structural problem, such as a numeric token that is not three digits,
    /// is reported as an error.
    fn init_from(&mut self, command: &str, params: &[String]) -> Result<(), MessageParseError>;

    /// Describe the outbound wire form of this variant.
    fn encode(&self) -> Encoded<'_>;

    /// Borrow this variant out of a body, if the body holds one.
    fn from_body(body: &Body) -> Option<&Self>;

    /// Mutably borrow this variant out of a body, if the body holds one.
    fn from_body_mut(body: &mut Body) -> Option<&mut Self>;
}

/// How the final parameter of an [`Encoded`] line is written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trailing {
    /// Colon-prefix only when the parameter is empty, contains a space or
    /// starts with `:`.
    Auto,
    /// Free-form text: always colon-prefixed.
    Freeform,
}

/// The outbound wire form of a message: a command and its parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Encoded<'a> {
    /// The command token.
    pub command: Cow<'a, str>,
    /// Positional parameters, the last one being the trailing parameter.
    pub params: SmallVec<[Cow<'a, str>; 4]>,
    /// Trailing parameter rule.
    pub trailing: Trailing,
}

impl<'a> Encoded<'a> {
    /// Start an encoded line for `command` with no parameters.
    pub fn new(command: impl Into<Cow<'a, str>>, trailing: Trailing) -> Self {
        Self {
            command: command.into(),
            params: SmallVec::new(),
            trailing,
        }
    }

    /// Append a parameter.
    #[must_use]
    pub fn param(mut self, param: impl Into<Cow<'a, str>>) -> Self {
        self.params.push(param.into());
        self
    }

    /// Append a parameter only when it is non-empty.
    #[must_use]
    pub fn param_if(self, param: &'a str) -> Self {
        if param.is_empty() {
            self
        } else {
            self.param(param)
        }
    }

    /// Append every parameter in order.
    #[must_use]
    pub fn params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'a, str>>,
    {
        self.params.extend(params.into_iter().map(Into::into));
        self
    }

    /// Owned copies of the parameters.
    pub fn to_params(&self) -> Vec<String> {
        self.params.iter().map(|p| p.to_string()).collect()
    }

    pub(crate) fn write_to<S: IrcSink + ?Sized>(&self, sink: &mut S) -> Result<usize, S::Error> {
        let params: SmallVec<[&str; 4]> = self.params.iter().map(|p| p.as_ref()).collect();
        match self.trailing {
            Trailing::Auto => write_cmd(sink, &self.command, &params),
            Trailing::Freeform => write_cmd_freeform(sink, &self.command, &params),
        }
    }
}

macro_rules! define_body {
    ($($variant:ident),+ $(,)?) => {
        /// The typed content of a [`Message`](crate::Message).
        ///
        /// Exactly one variant per [`MessageKind`]; the kind of a body is
        /// always the kind of the variant it holds.
        #[derive(Clone, Debug, Default, PartialEq, Eq)]
        pub enum Body {
            /// No typed content.
            #[default]
            Unknown,
            $(
                #[doc = concat!("A [`", stringify!($variant), "`] message.")]
                $variant($variant),
            )+
        }

        impl Body {
            /// Default, un-initialized body for `kind`.
            pub fn new(kind: MessageKind) -> Self {
                match kind {
                    MessageKind::Unknown => Body::Unknown,
                    $(MessageKind::$variant => Body::$variant($variant::default()),)+
                }
            }

            /// The kind of the held variant.
            pub fn kind(&self) -> MessageKind {
                match self {
                    Body::Unknown => MessageKind::Unknown,
                    $(Body::$variant(_) => <$variant as Variant>::KIND,)+
                }
            }

            /// Fill the held variant from wire data.
            pub fn init_from(
                &mut self,
                command: &str,
                params: &[String],
            ) -> Result<(), MessageParseError> {
                match self {
                    Body::Unknown => Ok(()),
                    $(Body::$variant(v) => v.init_from(command, params),)+
                }
            }

            /// Outbound wire form, `None` for [`Body::Unknown`].
            pub fn encode(&self) -> Option<Encoded<'_>> {
                match self {
                    Body::Unknown => None,
                    $(Body::$variant(v) => Some(v.encode()),)+
                }
            }
        }

        $(
            impl From<$variant> for Body {
                fn from(v: $variant) -> Self {
                    Body::$variant(v)
                }
            }
        )+
    };
}

define_body!(
    Password, Nick, User, Operator, Quit, Join, Part, Topic, Names, List, Invite, Kick, Mode,
    Private, Notice, Who, Whois, Whowas, Ping, Pong, Error, Numeric, Away, Custom,
);

/// Implements the body accessors of [`Variant`] for a variant type.
macro_rules! body_access {
    ($variant:ident) => {
        fn from_body(body: &$crate::message::Body) -> Option<&Self> {
            match body {
                $crate::message::Body::$variant(v) => Some(v),
                _ => None,
            }
        }

        fn from_body_mut(body: &mut $crate::message::Body) -> Option<&mut Self> {
            match body {
                $crate::message::Body::$variant(v) => Some(v),
                _ => None,
            }
        }
    };
}
pub(crate) use body_access;
