use std::io::{self, BufRead, Write};

use passy::{HmacTrace, PassyDigest, Radix, render, to_hex};

use crate::error::Error;

/// Reads the secret from the first line of `reader`, without its line ending.
pub fn read_secret<R: BufRead>(mut reader: R) -> Result<String, Error> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(Error::MissingSecret);
    }

    let trimmed = line.strip_suffix('\n').unwrap_or(&line);
    let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
    Ok(trimmed.to_string())
}

/// Password on the first line, fragment on the second.
pub fn write_digest<W: Write>(mut out: W, digest: &PassyDigest) -> io::Result<()> {
    writeln!(out, "{}", digest.password())?;
    writeln!(out, "{}", digest.fragment())
}

/// Dumps every HMAC intermediate, one labelled byte sequence per line.
pub fn write_trace<W: Write>(mut out: W, trace: &HmacTrace, radix: Radix) -> io::Result<()> {
    writeln!(out, "key:  ")?;
    writeln!(out, "{}", render(&trace.key, radix))?;
    writeln!(out, "data: ")?;
    writeln!(out, "{}", render(&trace.message, radix))?;
    writeln!(out, "ipad: ")?;
    writeln!(out, "{}", render(&trace.ipad, radix))?;
    writeln!(out, "opad: ")?;
    writeln!(out, "{}", render(&trace.opad, radix))?;
    writeln!(out)?;
    writeln!(out, "hash(ipad + data)")?;
    writeln!(out, "{}", to_hex(&trace.inner))?;
    writeln!(out)?;
    writeln!(out, "hash(opad + hash(ipad + data))")?;
    writeln!(out, "{}", to_hex(&trace.outer))
}
