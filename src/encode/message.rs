//! Encoding implementation for messages.

use std::io::{self, Write};

use super::IrcEncode;
use crate::message::util::IoWriteSink;
use crate::message::Message;

impl IrcEncode for Message {
    fn encode<W: Write>(&self, w: &mut W) -> io::Result<usize> {
        let mut written = 0;

        // Prefix
        if !self.prefix().is_empty() {
            w.write_all(b":")?;
            w.write_all(self.prefix().as_bytes())?;
            w.write_all(b" ")?;
            written += self.prefix().len() + 2;
        }

        // Command line
        written += self.write_to(&mut IoWriteSink(&mut *w))?;

        // CRLF
        w.write_all(b"\r\n")?;
        written += 2;

        Ok(written)
    }
}
