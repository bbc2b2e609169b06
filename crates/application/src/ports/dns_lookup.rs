use async_trait::async_trait;
use dnscheck_domain::{DomainError, RecordType, ServerEntry};

/// Asks exactly one server one question; never recurses on its own.
#[async_trait]
pub trait DnsLookupPort: Send + Sync {
    /// Answer values in presentation form: dotted quads for `A`, target
    /// names for `CNAME`. An empty list means the server answered NOERROR
    /// without records of that type.
    ///
    /// Errors are `NxDomain`, `QueryTimeout`, `InvalidServerAddress` or any
    /// transport/protocol failure.
    async fn lookup(
        &self,
        server: &ServerEntry,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<String>, DomainError>;
}
