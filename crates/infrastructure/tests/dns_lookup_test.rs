use dnscheck_application::ports::DnsLookupPort;
use dnscheck_domain::{DomainError, RecordType, ServerEntry};
use dnscheck_infrastructure::dns::WireDnsLookup;
use std::net::Ipv4Addr;
use std::time::Duration;

mod helpers;
use helpers::{MockBehavior, MockDnsServer};

fn entry(server: &MockDnsServer) -> ServerEntry {
    ServerEntry::parse(&format!("{} # mock", server.addr()))
}

fn lookup() -> WireDnsLookup {
    WireDnsLookup::new(Duration::from_millis(300))
}

#[tokio::test]
async fn test_a_answers() {
    let server = MockDnsServer::start(MockBehavior::Answer(vec![
        Ipv4Addr::new(93, 184, 216, 34),
        Ipv4Addr::new(93, 184, 216, 35),
    ]))
    .await
    .unwrap();

    let answers = lookup()
        .lookup(&entry(&server), "example.com", RecordType::A)
        .await
        .unwrap();

    assert_eq!(answers, vec!["93.184.216.34", "93.184.216.35"]);
}

#[tokio::test]
async fn test_nodata_is_empty_answer() {
    let server = MockDnsServer::start(MockBehavior::Answer(vec![Ipv4Addr::new(1, 2, 3, 4)]))
        .await
        .unwrap();

    let answers = lookup()
        .lookup(&entry(&server), "example.com", RecordType::CNAME)
        .await
        .unwrap();

    assert!(answers.is_empty());
}

#[tokio::test]
async fn test_nxdomain() {
    let server = MockDnsServer::start(MockBehavior::NxDomain).await.unwrap();

    let err = lookup()
        .lookup(&entry(&server), "missing.example", RecordType::A)
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::NxDomain));
}

#[tokio::test]
async fn test_servfail_is_reported() {
    let server = MockDnsServer::start(MockBehavior::ServFail).await.unwrap();

    let err = lookup()
        .lookup(&entry(&server), "example.com", RecordType::A)
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::InvalidDnsResponse(_)));
}

#[tokio::test]
async fn test_silent_server_times_out() {
    let server = MockDnsServer::start(MockBehavior::Silent).await.unwrap();

    let err = WireDnsLookup::new(Duration::from_millis(100))
        .lookup(&entry(&server), "example.com", RecordType::A)
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::QueryTimeout));
}

#[tokio::test]
async fn test_truncated_udp_retries_over_tcp() {
    let server = MockDnsServer::start(MockBehavior::Truncated(vec![Ipv4Addr::new(10, 0, 0, 1)]))
        .await
        .unwrap();

    let answers = lookup()
        .lookup(&entry(&server), "big.example", RecordType::A)
        .await
        .unwrap();

    assert_eq!(answers, vec!["10.0.0.1"]);
}

#[tokio::test]
async fn test_tcp_prefix_uses_tcp() {
    let server = MockDnsServer::start(MockBehavior::Answer(vec![Ipv4Addr::new(10, 0, 0, 2)]))
        .await
        .unwrap();
    let tcp_entry = ServerEntry::parse(&format!("tcp://{}", server.addr()));

    let answers = lookup()
        .lookup(&tcp_entry, "example.com", RecordType::A)
        .await
        .unwrap();

    assert_eq!(answers, vec!["10.0.0.2"]);
}

#[tokio::test]
async fn test_invalid_server_address() {
    let err = lookup()
        .lookup(&ServerEntry::parse("dns.google"), "example.com", RecordType::A)
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::InvalidServerAddress(_)));
}
