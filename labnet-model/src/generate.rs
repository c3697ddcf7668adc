//! Edit-config document generation.
//!
//! The target endpoint resolves each YANG module by the namespace on the
//! top-level child elements, not by a namespace on the `<config>` root, so
//! the root is deliberately namespace-free and every present container is
//! stamped with its module namespace just before serialization. A wrong or
//! stray namespace is rejected at the protocol level, which makes the
//! stamping rules here load-bearing.

use quick_xml::events::Event;
use quick_xml::{Reader, Writer};
use serde::Serialize;
use thiserror::Error;

use crate::model::{Config, NS_DEVICE, NS_IDENTITIES, NS_PURPOSE, NS_QOS};

/// Errors raised while serializing a [`Config`] to XML.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The structured-to-text encoding failed.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] quick_xml::de::DeError),
    /// Re-reading the serialized document failed.
    #[error("failed to re-read serialized config: {0}")]
    Xml(#[from] quick_xml::Error),
    /// Failed to write the indented output.
    #[error("failed to write config document: {0}")]
    Io(#[from] std::io::Error),
    /// The serialized document was not valid UTF-8.
    #[error("invalid UTF-8 in config document: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Serialize `config` into the `<config>` document body of an edit-config
/// request.
///
/// The input is never mutated: namespace stamping happens on an internal
/// annotated copy, so the same [`Config`] value can safely be reused across
/// calls and threads. Absent containers are omitted entirely; present
/// containers appear with their module namespace even when empty. Output is
/// deterministic: structurally equal inputs produce byte-identical text.
pub fn generate_edit_config(config: &Config) -> Result<String, GenerateError> {
    let mut annotated = config.clone();
    stamp_namespaces(&mut annotated);

    let mut compact = String::new();
    annotated.serialize(quick_xml::se::Serializer::new(&mut compact))?;
    indent_document(&compact)
}

/// Re-emit `compact` with 2-space indentation, keeping element text flush
/// with its tags.
///
/// The serde serializer's own indent mode puts character data on its own
/// padded line, which would ship leaf values with surrounding whitespace.
/// The event writer only breaks lines between tags, so `<purpose>` and
/// every other leaf keep their value inline.
fn indent_document(compact: &str) -> Result<String, GenerateError> {
    let mut reader = Reader::from_str(compact);
    reader.config_mut().trim_text(false);
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    loop {
        match reader.read_event()? {
            Event::Eof => break,
            event => writer.write_event(event)?,
        }
    }

    let bytes = writer.into_inner();
    String::from_utf8(bytes).map_err(|e| GenerateError::Utf8(e.utf8_error()))
}

/// Stamp module namespaces onto every present container.
///
/// Base-module containers get [`NS_DEVICE`]; the qos container gets
/// [`NS_QOS`]; `<interfaces>` additionally declares [`NS_IDENTITIES`] for
/// prefixed identity values, and each interface's purpose and qos
/// sub-elements get their augmentation namespaces. Absent containers are
/// left untouched.
fn stamp_namespaces(config: &mut Config) {
    if let Some(vlans) = &mut config.vlans {
        vlans.xmlns = Some(NS_DEVICE.to_string());
    }
    if let Some(vrfs) = &mut config.vrfs {
        vrfs.xmlns = Some(NS_DEVICE.to_string());
    }
    if let Some(qos) = &mut config.qos {
        qos.xmlns = Some(NS_QOS.to_string());
    }
    if let Some(interfaces) = &mut config.interfaces {
        interfaces.xmlns = Some(NS_DEVICE.to_string());
        interfaces.xmlns_identities = Some(NS_IDENTITIES.to_string());
        for interface in &mut interfaces.interface {
            if let Some(purpose) = &mut interface.purpose {
                purpose.xmlns = Some(NS_PURPOSE.to_string());
            }
            if let Some(qos) = &mut interface.qos {
                qos.xmlns = Some(NS_QOS.to_string());
            }
        }
    }
    if let Some(routing) = &mut config.routing {
        routing.xmlns = Some(NS_DEVICE.to_string());
    }
    if let Some(bgp) = &mut config.bgp {
        bgp.xmlns = Some(NS_DEVICE.to_string());
    }
    if let Some(system) = &mut config.system {
        system.xmlns = Some(NS_DEVICE.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::stamp_namespaces;
    use crate::model::{Config, Interface, Interfaces, Purpose, NS_IDENTITIES, NS_PURPOSE};

    #[test]
    fn absent_containers_stay_untouched() {
        let mut config = Config::default();
        stamp_namespaces(&mut config);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn purpose_and_identities_carriers_are_stamped() {
        let mut config = Config {
            interfaces: Some(Interfaces {
                interface: vec![Interface {
                    name: "GigabitEthernet0/0".to_string(),
                    purpose: Some(Purpose::new("lndi:uplink")),
                    ..Interface::default()
                }],
                ..Interfaces::default()
            }),
            ..Config::default()
        };

        stamp_namespaces(&mut config);

        let interfaces = config.interfaces.expect("interfaces");
        assert_eq!(interfaces.xmlns_identities.as_deref(), Some(NS_IDENTITIES));
        let purpose = interfaces.interface[0].purpose.as_ref().expect("purpose");
        assert_eq!(purpose.xmlns.as_deref(), Some(NS_PURPOSE));
    }
}
