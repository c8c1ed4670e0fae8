use std::io::{self, Write};

/// Writes the response text followed by a single newline, then flushes.
pub fn write_body<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    out.write_all(text.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}
