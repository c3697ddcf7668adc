//! Decoding of raw `<rpc-reply>` envelopes.
//!
//! Replies arrive namespace-qualified and sometimes prefixed, so matching
//! happens on local names. The `<data>` element is captured verbatim, its
//! own tags included, so downstream decoding sees the envelope it has to
//! unwrap; `<rpc-error>` children are decoded into the fixed [`RpcError`]
//! structure.

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::QName;
use quick_xml::Reader;
use serde::Serialize;
use thiserror::Error;

/// Reply from one RPC exchange.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RpcReply {
    /// Correlation identifier echoed by the endpoint.
    pub message_id: Option<String>,
    /// Whether the reply carried an `<ok/>` marker.
    pub ok: bool,
    /// The `<data>` element captured verbatim, tags included, if any.
    pub data: String,
    /// Structured errors from `<rpc-error>` elements.
    pub errors: Vec<RpcError>,
    /// The raw reply text as received.
    pub raw: String,
}

/// Fixed error-detail structure for `<rpc-error>` contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RpcError {
    pub error_type: Option<String>,
    pub error_tag: Option<String>,
    pub severity: Option<String>,
    pub message: Option<String>,
    pub path: Option<String>,
}

/// Errors raised while decoding a reply envelope.
#[derive(Debug, Error)]
pub enum ReplyError {
    #[error("failed to parse reply XML: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("invalid UTF-8 in reply: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("failed to decode reply text: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),
    #[error("malformed reply: {0}")]
    Malformed(String),
}

/// Check whether `raw` is rooted at an `<rpc-reply>` element.
pub fn is_rpc_reply(raw: &str) -> bool {
    let mut reader = Reader::from_str(raw);
    reader.config_mut().trim_text(true);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                return e.name().local_name().as_ref() == b"rpc-reply";
            }
            Ok(Event::Eof) | Err(_) => return false,
            Ok(_) => {}
        }
    }
}

/// Decode a raw `<rpc-reply>` document into an [`RpcReply`].
pub fn parse_reply(raw: &str) -> Result<RpcReply, ReplyError> {
    let mut reader = Reader::from_str(raw);
    reader.config_mut().trim_text(false);

    let mut reply = RpcReply {
        raw: raw.to_string(),
        ..RpcReply::default()
    };

    // Locate the rpc-reply root and pick up its message-id.
    loop {
        match reader.read_event()? {
            Event::Start(e) if is_local(&e, b"rpc-reply") => {
                reply.message_id = message_id(&reader, &e)?;
                break;
            }
            Event::Empty(e) if is_local(&e, b"rpc-reply") => {
                reply.message_id = message_id(&reader, &e)?;
                return Ok(reply);
            }
            Event::Start(_) | Event::Empty(_) => {
                return Err(ReplyError::Malformed(
                    "root element is not <rpc-reply>".to_string(),
                ));
            }
            Event::Eof => {
                return Err(ReplyError::Malformed("no root element found".to_string()));
            }
            _ => {}
        }
    }

    // Walk the reply body.
    loop {
        match reader.read_event()? {
            Event::Start(e) if is_local(&e, b"data") => {
                // Keep the element's own tags: the config decoder unwraps
                // exactly one envelope level, and <data> is that level.
                let start = std::str::from_utf8(&e)?.to_string();
                let end = e.to_end().into_owned();
                let end_name = std::str::from_utf8(end.name().as_ref())?.to_string();
                let inner = reader.read_text(end.name())?;
                reply.data = format!("<{start}>{inner}</{end_name}>");
            }
            Event::Empty(e) if is_local(&e, b"data") => {
                reply.data = format!("<{}/>", std::str::from_utf8(&e)?);
            }
            Event::Start(e) if is_local(&e, b"rpc-error") => {
                let error = read_rpc_error(&mut reader)?;
                reply.errors.push(error);
            }
            Event::Start(e) if is_local(&e, b"ok") => {
                reply.ok = true;
                reader.read_to_end(e.name())?;
            }
            Event::Empty(e) if is_local(&e, b"ok") => reply.ok = true,
            Event::Start(e) => {
                // Unknown sibling; skip its subtree.
                reader.read_to_end(e.name())?;
            }
            Event::End(_) => break,
            Event::Eof => {
                return Err(ReplyError::Malformed(
                    "unclosed <rpc-reply> element".to_string(),
                ));
            }
            _ => {}
        }
    }

    Ok(reply)
}

fn read_rpc_error(reader: &mut Reader<&[u8]>) -> Result<RpcError, ReplyError> {
    let mut error = RpcError::default();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let end = e.to_end().into_owned();
                let text = reader.read_text(end.name())?;
                let text = quick_xml::escape::unescape(&text)?.trim().to_string();
                let value = if text.is_empty() { None } else { Some(text) };
                match e.name().local_name().as_ref() {
                    b"error-type" => error.error_type = value,
                    b"error-tag" => error.error_tag = value,
                    b"error-severity" => error.severity = value,
                    b"error-message" => error.message = value,
                    b"error-path" => error.path = value,
                    _ => {}
                }
            }
            Event::End(_) => return Ok(error),
            Event::Eof => {
                return Err(ReplyError::Malformed(
                    "unclosed <rpc-error> element".to_string(),
                ));
            }
            _ => {}
        }
    }
}

fn is_local(e: &BytesStart<'_>, name: &[u8]) -> bool {
    e.name().local_name().as_ref() == name
}

fn message_id(
    reader: &Reader<&[u8]>,
    e: &BytesStart<'_>,
) -> Result<Option<String>, ReplyError> {
    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        if local_name(attr.key) == b"message-id" {
            let value = attr.decode_and_unescape_value(reader.decoder())?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

fn local_name(name: QName<'_>) -> &[u8] {
    name.local_name().into_inner()
}

#[cfg(test)]
mod tests {
    use super::{is_rpc_reply, parse_reply};

    #[test]
    fn decodes_data_reply_with_message_id() {
        let raw = r#"<rpc-reply xmlns="urn:ietf:params:xml:ns:netconf:base:1.0" message-id="101">
  <data>
    <vlans xmlns="http://example.com/ns/lab-net-device"><vlan><id>10</id></vlan></vlans>
  </data>
</rpc-reply>"#;

        let reply = parse_reply(raw).expect("parse reply");
        assert_eq!(reply.message_id.as_deref(), Some("101"));
        assert!(reply.errors.is_empty());
        assert!(reply.data.starts_with("<data>"));
        assert!(reply.data.ends_with("</data>"));
        assert!(reply.data.contains("<vlan><id>10</id></vlan>"));
        assert_eq!(reply.raw, raw);
    }

    #[test]
    fn data_capture_keeps_prefixed_envelope_tags() {
        let raw = r#"<nc:rpc-reply xmlns:nc="urn:ietf:params:xml:ns:netconf:base:1.0" message-id="5">
  <nc:data><vrfs xmlns="http://example.com/ns/lab-net-device"/></nc:data>
</nc:rpc-reply>"#;

        let reply = parse_reply(raw).expect("parse reply");
        assert!(reply.data.starts_with("<nc:data>"));
        assert!(reply.data.ends_with("</nc:data>"));
    }

    #[test]
    fn empty_data_element_is_kept() {
        let raw = r#"<rpc-reply message-id="3"><data/></rpc-reply>"#;
        let reply = parse_reply(raw).expect("parse reply");
        assert_eq!(reply.data, "<data/>");
    }

    #[test]
    fn decodes_ok_reply() {
        let raw = r#"<nc:rpc-reply xmlns:nc="urn:ietf:params:xml:ns:netconf:base:1.0" message-id="7"><nc:ok/></nc:rpc-reply>"#;
        let reply = parse_reply(raw).expect("parse reply");
        assert!(reply.ok);
        assert!(reply.data.is_empty());
    }

    #[test]
    fn decodes_structured_errors() {
        let raw = r#"<rpc-reply message-id="2">
  <rpc-error>
    <error-type>application</error-type>
    <error-tag>invalid-value</error-tag>
    <error-severity>error</error-severity>
    <error-path>/config/vlans</error-path>
    <error-message>An unexpected namespace is present</error-message>
  </rpc-error>
</rpc-reply>"#;

        let reply = parse_reply(raw).expect("parse reply");
        assert_eq!(reply.errors.len(), 1);
        let error = &reply.errors[0];
        assert_eq!(error.error_type.as_deref(), Some("application"));
        assert_eq!(error.error_tag.as_deref(), Some("invalid-value"));
        assert_eq!(error.severity.as_deref(), Some("error"));
        assert_eq!(error.path.as_deref(), Some("/config/vlans"));
        assert_eq!(
            error.message.as_deref(),
            Some("An unexpected namespace is present")
        );
    }

    #[test]
    fn rejects_non_reply_root() {
        assert!(parse_reply("<data/>").is_err());
        assert!(!is_rpc_reply("<data><vlans/></data>"));
    }

    #[test]
    fn detects_prefixed_reply_root() {
        assert!(is_rpc_reply("<nc:rpc-reply xmlns:nc=\"urn:nc\"></nc:rpc-reply>"));
    }

    #[test]
    fn truncated_reply_fails() {
        assert!(parse_reply("<rpc-reply><data>").is_err());
    }
}
