use async_trait::async_trait;
use dnscheck_application::ports::DnsLookupPort;
use dnscheck_domain::{DomainError, RecordType, ServerEntry};
use hickory_proto::op::ResponseCode;
use std::time::Duration;
use tracing::{debug, instrument};

use super::forwarding::DnsForwarder;

/// Stub lookups against one configured server at a time.
pub struct WireDnsLookup {
    forwarder: DnsForwarder,
}

impl WireDnsLookup {
    pub fn new(query_timeout: Duration) -> Self {
        Self {
            forwarder: DnsForwarder::new(query_timeout),
        }
    }
}

#[async_trait]
impl DnsLookupPort for WireDnsLookup {
    #[instrument(skip(self, server), fields(server = %server))]
    async fn lookup(
        &self,
        server: &ServerEntry,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<String>, DomainError> {
        let response = self.forwarder.query(server, domain, record_type).await?;

        if response.is_nxdomain() {
            return Err(DomainError::NxDomain);
        }
        if response.rcode != ResponseCode::NoError {
            return Err(DomainError::InvalidDnsResponse(format!(
                "server returned {}",
                response.rcode
            )));
        }

        if response.is_nodata() {
            debug!("Lookup answered with no records");
        } else {
            debug!(answers = response.answers.len(), "Lookup answered");
        }
        Ok(response.answers)
    }
}
