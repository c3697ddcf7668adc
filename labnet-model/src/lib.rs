//! Typed model and XML mapping for the lab-net-device YANG modules.
//!
//! The crate covers the bidirectional path between an in-memory device
//! configuration model and the XML payloads exchanged with a NETCONF
//! endpoint:
//!
//! - [`model`] — typed containers for each configuration domain (VLANs,
//!   VRFs, QoS, interfaces, routing, BGP, system users), every container
//!   and every optional leaf presence-tracked.
//! - [`generate`] — serialize a set of containers into an edit-config
//!   `<config>` document with module-correct namespace placement.
//! - [`normalize`] — streaming token transform that strips namespaces and
//!   scrubs comment-style noise from device replies.
//! - [`parse`] — decode a (possibly differently-rooted) reply back into the
//!   model, tolerating both `<config>` and generic `<data>` shapes.
//!
//! Session handling, RPC framing and request templates live with the
//! caller; this crate only maps between model values and document text.

pub mod generate;
pub mod model;
pub mod normalize;
pub mod parse;

pub use generate::{generate_edit_config, GenerateError};
pub use model::Config;
pub use normalize::{strip_namespaces, NormalizeError};
pub use parse::{parse_config, ParseError};
