use std::io::Write;

/// Write a response body verbatim, followed by a newline.
pub fn write_body<W: Write>(out: &mut W, body: &[u8]) -> std::io::Result<()> {
    out.write_all(body)?;
    out.write_all(b"\n")?;
    out.flush()
}
