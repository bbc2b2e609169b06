pub mod tcp;
pub mod udp;

use async_trait::async_trait;
use dnscheck_domain::dns_server::ServerTransport;
use dnscheck_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,
    pub protocol_used: &'static str,
}

#[async_trait]
pub trait DnsTransport: Send + Sync {
    /// Sends one message and waits for one reply. Running out of `timeout`
    /// is `DomainError::QueryTimeout`.
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;
}

pub enum Transport {
    Udp(udp::UdpTransport),
    Tcp(tcp::TcpTransport),
}

impl Transport {
    pub async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        match self {
            Self::Udp(t) => DnsTransport::send(t, message_bytes, timeout).await,
            Self::Tcp(t) => DnsTransport::send(t, message_bytes, timeout).await,
        }
    }

    pub fn protocol_name(&self) -> &'static str {
        match self {
            Self::Udp(_) => "UDP",
            Self::Tcp(_) => "TCP",
        }
    }
}

pub fn create_transport(kind: ServerTransport, addr: SocketAddr) -> Transport {
    match kind {
        ServerTransport::Udp => Transport::Udp(udp::UdpTransport::new(addr)),
        ServerTransport::Tcp => Transport::Tcp(tcp::TcpTransport::new(addr)),
    }
}

pub(crate) fn transport_error(server: SocketAddr, reason: impl std::fmt::Display) -> DomainError {
    DomainError::TransportError {
        server: server.to_string(),
        reason: reason.to_string(),
    }
}
