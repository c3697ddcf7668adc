//! Protocol-client collaborator contract.
//!
//! The core never performs network exchange itself; it produces and
//! consumes the "data text" portion of RPCs. This module owns the seam: a
//! [`Transport`] implementation carries a raw RPC body (no outer `<rpc>`
//! envelope, framing and correlation are the transport's business) and
//! returns an [`RpcReply`]. [`Client`] adds the caller-side guards:
//! rejecting bodies that smuggle their own `<rpc>` wrapper and converting a
//! reply that carries structured errors into a typed failure.

use thiserror::Error;

use crate::reply::{RpcError, RpcReply};

/// Errors surfaced by [`Client::exec`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// The body already carried an `<rpc>` wrapper; the transport adds its
    /// own envelope.
    #[error("rpc must not include an <rpc> wrapper")]
    RpcWrapper,
    /// The transport failed to complete the exchange.
    #[error("transport failure: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// The device answered with one or more `<rpc-error>` elements.
    #[error("rpc reported errors:\n{}", format_rpc_errors(&reply.errors))]
    Rpc { reply: RpcReply },
}

/// One round of RPC exchange against a management endpoint.
///
/// Implementations own session establishment, authentication, framing and
/// message-id correlation. Tests use in-memory fakes.
pub trait Transport {
    fn exec(&mut self, rpc: &str) -> Result<RpcReply, Box<dyn std::error::Error + Send + Sync>>;
}

/// Guarded wrapper around a [`Transport`].
pub struct Client<T: Transport> {
    transport: T,
}

impl<T: Transport> Client<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Execute a raw RPC body and forward structured device errors.
    pub fn exec(&mut self, rpc: &str) -> Result<RpcReply, ClientError> {
        let trimmed = rpc.trim_start();
        if trimmed.starts_with("<rpc>") || trimmed.starts_with("<rpc ") {
            return Err(ClientError::RpcWrapper);
        }

        let reply = self
            .transport
            .exec(rpc)
            .map_err(ClientError::Transport)?;
        if !reply.errors.is_empty() {
            return Err(ClientError::Rpc { reply });
        }
        Ok(reply)
    }
}

/// Render structured RPC errors one per line, numbered.
pub fn format_rpc_errors(errors: &[RpcError]) -> String {
    let lines: Vec<String> = errors
        .iter()
        .enumerate()
        .map(|(i, e)| {
            format!(
                "{}) type={} tag={} severity={} message={:?} path={:?}",
                i + 1,
                e.error_type.as_deref().unwrap_or(""),
                e.error_tag.as_deref().unwrap_or(""),
                e.severity.as_deref().unwrap_or(""),
                e.message.as_deref().unwrap_or(""),
                e.path.as_deref().unwrap_or(""),
            )
        })
        .collect();
    lines.join("\n")
}

/// Normalize a host string to `host:port`, applying `default_port` when no
/// port is present and bracketing bare IPv6 literals.
pub fn ensure_port(host: &str, default_port: u16) -> String {
    let host = host.trim().trim_end_matches(':');
    if host.is_empty() {
        return String::new();
    }
    if host.parse::<std::net::Ipv6Addr>().is_ok() {
        return format!("[{host}]:{default_port}");
    }
    if let Some(bracketed) = host.strip_prefix('[') {
        if bracketed.contains("]:") {
            return host.to_string();
        }
        return format!("{host}:{default_port}");
    }
    if host.contains(':') {
        return host.to_string();
    }
    format!("{host}:{default_port}")
}
