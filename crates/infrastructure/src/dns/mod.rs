pub mod forwarding;
pub mod lookup;
pub mod transport;

pub use forwarding::{DnsForwarder, DnsResponse, MessageBuilder, ResponseParser};
pub use lookup::WireDnsLookup;
