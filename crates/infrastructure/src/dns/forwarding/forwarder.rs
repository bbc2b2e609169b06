use super::message_builder::MessageBuilder;
use super::response_parser::{DnsResponse, ResponseParser};
use crate::dns::transport::{create_transport, tcp::TcpTransport, DnsTransport};
use dnscheck_domain::dns_server::ServerTransport;
use dnscheck_domain::{DomainError, RecordType, ServerEntry};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_millis(2000);

/// Sends single questions to explicitly chosen servers.
pub struct DnsForwarder {
    timeout: Duration,
}

impl Default for DnsForwarder {
    fn default() -> Self {
        Self::new(DEFAULT_QUERY_TIMEOUT)
    }
}

impl DnsForwarder {
    /// `timeout` applies to each attempt; a truncated UDP reply gets a
    /// second attempt over TCP.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub async fn query(
        &self,
        server: &ServerEntry,
        domain: &str,
        record_type: RecordType,
    ) -> Result<DnsResponse, DomainError> {
        let server_addr = server.socket_addr()?;
        let (id, request) = MessageBuilder::build_query(domain, record_type)?;

        let transport = create_transport(server.transport(), server_addr);
        let reply = transport.send(&request, self.timeout).await?;
        let mut response = ResponseParser::parse(&reply.bytes, record_type)?;

        if response.truncated && server.transport() == ServerTransport::Udp {
            debug!(server = %server_addr, domain = %domain, "Truncated UDP response, retrying over TCP");
            let reply = TcpTransport::new(server_addr)
                .send(&request, self.timeout)
                .await?;
            response = ResponseParser::parse(&reply.bytes, record_type)?;
        }

        if response.id != id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "Response id {} does not match query id {}",
                response.id, id
            )));
        }

        Ok(response)
    }
}
