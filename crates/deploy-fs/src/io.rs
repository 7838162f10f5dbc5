//! Read-only I/O helpers

use crate::{Error, NormalizedPath, Result};
use encoding_rs::{Encoding, UTF_8, UTF_16BE, UTF_16LE};
use std::fs;

/// Read text content from a file.
///
/// The encoding is taken from the byte order mark, else from the
/// `encoding` of an XML declaration, else UTF-8. Visual Studio writes a
/// byte order mark at the top of most project and config files, and older
/// ASP.NET sites keep `web.config` in UTF-16 or a Windows code page.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    let bytes = fs::read(&native_path).map_err(|e| Error::io(&native_path, e))?;
    decode(&bytes).map_err(|encoding| Error::Decode {
        path: native_path,
        encoding,
    })
}

/// Read raw bytes from a file.
pub fn read_bytes(path: &NormalizedPath) -> Result<Vec<u8>> {
    let native_path = path.to_native();
    fs::read(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Decode `bytes` without the byte order mark. On failure returns the name
/// of the encoding that was tried.
fn decode(bytes: &[u8]) -> std::result::Result<String, &'static str> {
    let (encoding, body) = match Encoding::for_bom(bytes) {
        Some((encoding, bom_length)) => (encoding, &bytes[bom_length..]),
        None => (sniff(bytes), bytes),
    };

    let (text, had_errors) = encoding.decode_without_bom_handling(body);
    if had_errors {
        return Err(encoding.name());
    }
    Ok(text.into_owned())
}

/// Encoding of text without a byte order mark.
fn sniff(bytes: &[u8]) -> &'static Encoding {
    match bytes {
        [b'<', 0, b'?', 0, ..] => return UTF_16LE,
        [0, b'<', 0, b'?', ..] => return UTF_16BE,
        _ => {}
    }

    match declared_encoding(bytes).and_then(Encoding::for_label) {
        // A declaration readable as ASCII cannot really be UTF-16.
        Some(encoding) if encoding == UTF_16LE || encoding == UTF_16BE => UTF_8,
        Some(encoding) => encoding,
        None => UTF_8,
    }
}

/// The `encoding="..."` label of a leading `<?xml ...?>` declaration.
fn declared_encoding(bytes: &[u8]) -> Option<&[u8]> {
    let declaration = bytes.strip_prefix(b"<?xml")?;
    let end = declaration.windows(2).position(|w| w == b"?>")?;
    let declaration = &declaration[..end];

    let at = declaration
        .windows(b"encoding".len())
        .position(|w| w == b"encoding")?;
    let rest = declaration[at + b"encoding".len()..].trim_ascii_start();
    let rest = rest.strip_prefix(b"=")?.trim_ascii_start();
    let (&quote, rest) = rest.split_first()?;
    if quote != b'"' && quote != b'\'' {
        return None;
    }
    let close = rest.iter().position(|&b| b == quote)?;
    Some(&rest[..close])
}
