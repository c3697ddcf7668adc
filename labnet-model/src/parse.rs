//! Reply decoding back into the [`Config`] model.
//!
//! The same decoding logic serves two reply shapes: get-config style
//! replies already rooted at `<config>`, and generic get/get-data replies
//! rooted at a `<data>` envelope (or any other single element) whose inner
//! content is what matters. [`parse_config`] normalizes first, then picks a
//! decode path off the root element name.

use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;

use crate::model::Config;
use crate::normalize::{strip_namespaces, NormalizeError};

/// Errors raised while decoding a reply into [`Config`].
#[derive(Debug, Error)]
pub enum ParseError {
    /// The reply was not well-formed markup.
    #[error("failed to normalize reply XML: {0}")]
    Normalize(#[from] NormalizeError),
    /// The envelope root could not be read.
    #[error("failed to read reply envelope: {0}")]
    Envelope(#[from] quick_xml::Error),
    /// Invalid UTF-8 in the envelope root name.
    #[error("invalid UTF-8 in reply: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    /// The reply contained no root element.
    #[error("reply has no root element")]
    NoRoot,
    /// The config body could not be decoded into the model.
    #[error("failed to decode config body: {0}")]
    Decode(#[from] quick_xml::de::DeError),
}

/// Decode a raw reply payload into a [`Config`].
///
/// Two phases, no retries beyond them:
///
/// 1. Strip namespaces (and comment noise) from the raw input.
/// 2. If the normalized document is rooted at `<config>`, decode it
///    directly. Otherwise treat it as a generic envelope: take the root's
///    inner markup verbatim, wrap it in a synthetic `<config>` root and
///    decode that.
///
/// Failure is all-or-nothing: a failed decode never yields a partially
/// populated model.
pub fn parse_config(raw: &str) -> Result<Config, ParseError> {
    let clean = strip_namespaces(raw)?;
    let root = read_root(&clean)?;

    if root.name == "config" {
        return Ok(quick_xml::de::from_str(&clean)?);
    }

    // Generic envelope such as <data>: only the inner content matters.
    let wrapped = format!("<config>{}</config>", root.inner.trim());
    Ok(quick_xml::de::from_str(&wrapped)?)
}

struct RootElement {
    name: String,
    inner: String,
}

/// Read the root element name and its verbatim inner markup.
fn read_root(xml: &str) -> Result<RootElement, ParseError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = std::str::from_utf8(e.name().as_ref())?.to_string();
                let end = e.to_end().into_owned();
                let inner = reader.read_text(end.name())?.into_owned();
                return Ok(RootElement { name, inner });
            }
            Event::Empty(e) => {
                let name = std::str::from_utf8(e.name().as_ref())?.to_string();
                return Ok(RootElement {
                    name,
                    inner: String::new(),
                });
            }
            Event::Eof => return Err(ParseError::NoRoot),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::read_root;

    #[test]
    fn read_root_returns_name_and_inner_markup() {
        let root = read_root("<data><vlans><vlan><id>10</id></vlan></vlans></data>")
            .expect("read_root");
        assert_eq!(root.name, "data");
        assert_eq!(root.inner, "<vlans><vlan><id>10</id></vlan></vlans>");
    }

    #[test]
    fn read_root_handles_empty_envelope() {
        let root = read_root("<data/>").expect("read_root");
        assert_eq!(root.name, "data");
        assert!(root.inner.is_empty());
    }

    #[test]
    fn read_root_rejects_empty_input() {
        assert!(read_root("").is_err());
    }
}
