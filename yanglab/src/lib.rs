//! Caller-side glue around the `labnet-model` core.
//!
//! The core maps between model values and XML text; everything that talks
//! to (or stands in for) a NETCONF endpoint lives here:
//!
//! - [`client`] — the protocol-client collaborator contract: transport
//!   trait, RPC wrapper guard, structured error forwarding, host
//!   normalization.
//! - [`reply`] — stream-decoding of raw `<rpc-reply>` envelopes into the
//!   collaborator's reply type.
//! - [`request`] — edit-config / get / get-config / get-data request
//!   bodies with module-qualified subtree filters.
//! - [`demo`] — the demo configuration exercised by the CLI.
//! - [`report`] — terminal rendering of parsed configurations.

pub mod client;
pub mod demo;
pub mod reply;
pub mod report;
pub mod request;
