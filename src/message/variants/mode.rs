//! `MODE`

use crate::error::MessageParseError;
use crate::kind::MessageKind;
use crate::message::body::{body_access, Encoded, Trailing, Variant};
use crate::message::util::arg;

/// `MODE <target> [<mode> [<argument> [<mask>]]]`
///
/// The mode string is kept as a whole; splitting it into individual flags
/// is left to the caller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Mode {
    target: String,
    mode: String,
    argument: String,
    mask: String,
}

impl Mode {
    /// Create a `MODE` query for a target.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            ..Self::default()
        }
    }

    /// Set the mode string.
    #[must_use]
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    /// Set the mode argument.
    #[must_use]
    pub fn with_argument(mut self, argument: impl Into<String>) -> Self {
        self.argument = argument.into();
        self
    }

    /// Set the mask.
    #[must_use]
    pub fn with_mask(mut self, mask: impl Into<String>) -> Self {
        self.mask = mask.into();
        self
    }

    /// Channel or nickname whose modes are changed.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Set the target.
    pub fn set_target(&mut self, target: impl Into<String>) {
        self.target = target.into();
    }

    /// The mode string, e.g. `+o` or `-l+k`.
    pub fn mode(&self) -> &str {
        &self.mode
    }

    /// Set the mode string.
    pub fn set_mode(&mut self, mode: impl Into<String>) {
        self.mode = mode.into();
    }

    /// The first mode argument.
    pub fn argument(&self) -> &str {
        &self.argument
    }

    /// Set the first mode argument.
    pub fn set_argument(&mut self, argument: impl Into<String>) {
        self.argument = argument.into();
    }

    /// The mask.
    pub fn mask(&self) -> &str {
        &self.mask
    }

    /// Set the mask.
    pub fn set_mask(&mut self, mask: impl Into<String>) {
        self.mask = mask.into();
    }
}

impl Variant for Mode {
    const KIND: MessageKind = MessageKind::Mode;

    fn init_from(&mut self, _command: &str, params: &[String]) -> Result<(), MessageParseError> {
        self.target = arg(params, 0);
        self.mode = arg(params, 1);
        self.argument = arg(params, 2);
        self.mask = arg(params, 3);
        Ok(())
    }

    fn encode(&self) -> Encoded<'_> {
        // Optional fields end at the first unset one.
        let optional = [
            self.mode.as_str(),
            self.argument.as_str(),
            self.mask.as_str(),
        ];
        Encoded::new("MODE", Trailing::Auto)
            .param(self.target.as_str())
            .params(optional.into_iter().take_while(|f| !f.is_empty()))
    }

    body_access!(Mode);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_mode_fields_fill_left_to_right() {
        let mut mode = Mode::default();
        mode.init_from("MODE", &params(&["#chan", "+b", "nick!*@*"]))
            .unwrap();
        assert_eq!(mode.target(), "#chan");
        assert_eq!(mode.mode(), "+b");
        assert_eq!(mode.argument(), "nick!*@*");
        assert_eq!(mode.mask(), "");
    }

    #[test]
    fn test_mode_encode_keeps_set_fields() {
        let mode = Mode::new("#chan").with_mode("+o").with_argument("bob");
        assert_eq!(mode.encode().to_params(), vec!["#chan", "+o", "bob"]);

        let mode = Mode::new("nick");
        assert_eq!(mode.encode().to_params(), vec!["nick"]);
    }

    #[test]
    fn test_mode_encode_stops_at_first_unset_field() {
        let mode = Mode::new("#c").with_argument("x");
        assert_eq!(mode.encode().to_params(), vec!["#c"]);

        let mode = Mode::new("#c").with_mode("+b").with_mask("*!*@*");
        assert_eq!(mode.encode().to_params(), vec!["#c", "+b"]);
    }
}
