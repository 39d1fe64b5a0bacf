use std::fmt;
use std::io;

/// A trait for abstracting over `fmt::Formatter` and `io::Write`.
/// This allows sharing serialization logic between `Display` and `IrcEncode`.
pub trait IrcSink {
    type Error;
    fn write_str(&mut self, s: &str) -> Result<usize, Self::Error>;
    fn write_char(&mut self, c: char) -> Result<usize, Self::Error>;
    /// Reject a parameter that would break the line apart.
    fn check_param(&self, param: &str) -> Result<(), Self::Error>;
}

// `Display` cannot report a useful error, so parameters are written as given.
impl<'a> IrcSink for fmt::Formatter<'a> {
    type Error = fmt::Error;

    fn write_str(&mut self, s: &str) -> Result<usize, Self::Error> {
        fmt::Write::write_str(self, s).map(|_| 0)
    }

    fn write_char(&mut self, c: char) -> Result<usize, Self::Error> {
        fmt::Write::write_char(self, c).map(|_| 0)
    }

    fn check_param(&self, _param: &str) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Wrapper to adapt `io::Write` to `IrcSink`.
pub struct IoWriteSink<'a, W: ?Sized>(pub &'a mut W);

impl<'a, W: io::Write + ?Sized> IrcSink for IoWriteSink<'a, W> {
    type Error = io::Error;

    fn write_str(&mut self, s: &str) -> Result<usize, Self::Error> {
        self.0.write_all(s.as_bytes()).map(|_| s.len())
    }

    fn write_char(&mut self, c: char) -> Result<usize, Self::Error> {
        let mut buf = [0u8; 4];
        let s = c.encode_utf8(&mut buf);
        self.0.write_all(s.as_bytes()).map(|_| s.len())
    }

    fn check_param(&self, param: &str) -> Result<(), Self::Error> {
        if has_line_break(param) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "parameter contains invalid control characters",
            ));
        }
        Ok(())
    }
}

/// Check if a string needs colon-prefixing as a trailing IRC argument.
pub fn needs_colon_prefix(s: &str) -> bool {
    s.is_empty() || s.contains(' ') || s.starts_with(':')
}

/// CR, LF and NUL can never appear inside a parameter.
pub fn has_line_break(s: &str) -> bool {
    s.bytes().any(|b| b == b'\r' || b == b'\n' || b == 0)
}

/// Write a command with arguments directly to a sink.
/// The last argument is treated as trailing and gets a `:` prefix if needed.
///
/// A middle argument that cannot stand unprefixed (empty, containing a
/// space or starting with `:`) is written as the trailing argument and the
/// arguments after it are dropped.
pub fn write_cmd<S: IrcSink + ?Sized>(
    sink: &mut S,
    cmd: &str,
    args: &[&str],
) -> Result<usize, S::Error> {
    let Some((trailing, middle)) = args.split_last() else {
        return sink.write_str(cmd);
    };

    let mut count = sink.write_str(cmd)?;
    for param in middle {
        if needs_colon_prefix(param) {
            return Ok(count + write_last(sink, param)?);
        }
        sink.check_param(param)?;
        count += sink.write_char(' ')?;
        count += sink.write_str(param)?;
    }

    sink.check_param(trailing)?;
    count += sink.write_char(' ')?;
    if needs_colon_prefix(trailing) {
        count += sink.write_char(':')?;
    }
    count += sink.write_str(trailing)?;
    Ok(count)
}

/// Write a command with a freeform (always colon-prefixed) trailing argument.
///
/// Middle arguments follow the same rule as in [`write_cmd`].
pub fn write_cmd_freeform<S: IrcSink + ?Sized>(
    sink: &mut S,
    cmd: &str,
    args: &[&str],
) -> Result<usize, S::Error> {
    let Some((suffix, middle)) = args.split_last() else {
        return sink.write_str(cmd);
    };

    let mut count = sink.write_str(cmd)?;
    for arg in middle {
        if needs_colon_prefix(arg) {
            return Ok(count + write_last(sink, arg)?);
        }
        sink.check_param(arg)?;
        count += sink.write_char(' ')?;
        count += sink.write_str(arg)?;
    }
    Ok(count + write_last(sink, suffix)?)
}

/// Write ` :<param>`, ending the line.
fn write_last<S: IrcSink + ?Sized>(sink: &mut S, param: &str) -> Result<usize, S::Error> {
    sink.check_param(param)?;
    Ok(sink.write_str(" :")? + sink.write_str(param)?)
}

/// Get an owned parameter at `idx`, or the empty string when absent.
#[inline]
pub(crate) fn arg(params: &[String], idx: usize) -> String {
    params.get(idx).cloned().unwrap_or_default()
}

/// Parameters from `idx` onwards, empty when out of range.
#[inline]
pub(crate) fn args_from(params: &[String], idx: usize) -> &[String] {
    params.get(idx..).unwrap_or(&[])
}
