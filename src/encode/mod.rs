//! Encoding messages as wire lines.
//!
//! This module provides the [`IrcEncode`] trait for writing messages directly
//! to byte buffers without an intermediate `String`.
//!
//! Unlike `Display`, which yields the bare command line, encoding produces a
//! complete wire line: the prefix (when set), the command line and a
//! trailing CRLF.
//!
//! # Example
//!
//! ```
//! use irc_message::encode::IrcEncode;
//! use irc_message::{Message, Private};
//!
//! let msg = Message::from(Private::new("#channel", "Hello!"));
//! let mut buf = Vec::new();
//! msg.encode(&mut buf).unwrap();
//!
//! assert_eq!(&buf, b"PRIVMSG #channel :Hello!\r\n");
//! ```

use std::io::{self, Write};

mod message;

/// A trait for encoding IRC protocol elements directly to a byte stream.
pub trait IrcEncode {
    /// Encode this value to the given writer.
    ///
    /// Returns the number of bytes written on success.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the write fails, or an
    /// [`InvalidInput`](io::ErrorKind::InvalidInput) error if a parameter
    /// contains CR, LF or NUL.
    fn encode<W: Write>(&self, writer: &mut W) -> io::Result<usize>;

    /// Encode this value to a new `Vec<u8>`.
    ///
    /// Errors are not reported: if a parameter contains CR, LF or NUL the
    /// buffer holds only the part written before it, without the CRLF.
    /// Use [`encode`](Self::encode) to detect this.
    #[must_use]
    fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(512); // IRC max line length
        let _ = self.encode(&mut buf);
        buf
    }
}
