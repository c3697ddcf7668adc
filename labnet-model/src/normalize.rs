//! Streaming namespace stripper for device replies.
//!
//! NETCONF replies qualify every element with a module namespace and
//! sometimes declare extra prefixes on the way down. Decoding is much
//! simpler against plain local names, so the parser first runs replies
//! through [`strip_namespaces`], which rewrites the token stream without
//! ever building a tree.

use std::borrow::Cow;

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::QName;
use quick_xml::{Reader, Writer};
use thiserror::Error;

/// Errors raised while normalizing reply XML.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// Input XML could not be decoded or tokenized.
    #[error("failed to parse XML: {0}")]
    Xml(#[from] quick_xml::Error),
    /// Input bytes were not valid UTF-8 for tag/attribute/text extraction.
    #[error("invalid UTF-8 while normalizing XML: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    /// Failed to decode an escaped text or attribute value.
    #[error("failed to decode XML text: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),
    /// Failed to write normalized output.
    #[error("failed to write normalized XML: {0}")]
    Io(#[from] std::io::Error),
    /// Structural issue in the document.
    #[error("malformed XML: {0}")]
    Malformed(String),
}

/// Strip namespace declarations and prefixes from `input`, and scrub
/// comment-style noise from text content.
///
/// - Start/empty elements keep only their local name; `xmlns` and
///   `xmlns:*` attributes are dropped, other attributes keep only their
///   local name.
/// - End elements keep only their local name, staying paired with their
///   start element.
/// - Text containing `#` is cleaned by [`clean_text`] rules; other text
///   passes through unchanged.
/// - All other token kinds pass through unchanged.
///
/// The transform is idempotent. Non-well-formed markup fails with
/// [`NormalizeError`]; there is no recovery.
pub fn strip_namespaces(input: &str) -> Result<String, NormalizeError> {
    let mut reader = Reader::from_str(input);
    reader.config_mut().trim_text(false);
    let mut writer = Writer::new(Vec::new());
    let mut depth = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                depth += 1;
                writer.write_event(Event::Start(strip_element(&reader, &e)?))?;
            }
            Event::Empty(e) => {
                writer.write_event(Event::Empty(strip_element(&reader, &e)?))?;
            }
            Event::End(e) => {
                if depth == 0 {
                    return Err(NormalizeError::Malformed(
                        "encountered closing tag without open tag".to_string(),
                    ));
                }
                depth -= 1;
                let local = local_str(e.name())?.to_string();
                writer.write_event(Event::End(BytesEnd::new(local)))?;
            }
            Event::Text(e) => {
                let text = e.unescape()?;
                let clean = clean_text(&text);
                writer.write_event(Event::Text(BytesText::new(&clean)))?;
            }
            Event::Eof => break,
            other => writer.write_event(other)?,
        }
    }

    if depth != 0 {
        return Err(NormalizeError::Malformed(
            "unclosed element(s) at end of document".to_string(),
        ));
    }

    let bytes = writer.into_inner();
    String::from_utf8(bytes).map_err(|e| NormalizeError::Utf8(e.utf8_error()))
}

fn strip_element(
    reader: &Reader<&[u8]>,
    e: &BytesStart<'_>,
) -> Result<BytesStart<'static>, NormalizeError> {
    let local = local_str(e.name())?.to_string();
    let mut out = BytesStart::new(local);

    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        if is_xmlns_declaration(attr.key) {
            continue;
        }
        let key = local_str(attr.key)?.to_string();
        let value = attr.decode_and_unescape_value(reader.decoder())?;
        out.push_attribute((key.as_str(), value.as_ref()));
    }

    Ok(out)
}

fn is_xmlns_declaration(key: QName<'_>) -> bool {
    key.as_ref() == b"xmlns" || key.prefix().is_some_and(|p| p.as_ref() == b"xmlns")
}

fn local_str(name: QName<'_>) -> Result<&str, NormalizeError> {
    Ok(std::str::from_utf8(name.local_name().into_inner())?)
}

/// Scrub comment-style annotations from text content.
///
/// Some devices echo human-readable `#` comments inside otherwise
/// machine-readable fields (pre-provisioned identifiers, for example).
/// Lines whose trimmed content starts with `#` are dropped entirely; lines
/// with an embedded `#` are truncated at the first `#` with trailing
/// whitespace removed. Surviving lines are rejoined with newlines in their
/// original order. Text without `#` is returned as-is.
fn clean_text(text: &str) -> Cow<'_, str> {
    if !text.contains('#') {
        return Cow::Borrowed(text);
    }

    let mut kept = Vec::new();
    for line in text.split('\n') {
        if line.trim().starts_with('#') {
            continue;
        }
        match line.find('#') {
            Some(idx) => kept.push(line[..idx].trim_end()),
            None => kept.push(line),
        }
    }
    Cow::Owned(kept.join("\n"))
}
