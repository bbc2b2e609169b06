use crate::DomainError;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

pub const DEFAULT_DNS_PORT: u16 = 53;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServerTransport {
    Udp,
    Tcp,
}

/// One configured server line: `[udp://|tcp://]address[:port] [# label]`.
///
/// The untouched line is the identifier results are keyed by, so two lines
/// pointing at the same address with different labels stay distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServerEntry {
    line: String,
    address: String,
    label: Option<String>,
}

impl ServerEntry {
    pub fn parse(line: &str) -> Self {
        let (address, label) = match line.split_once('#') {
            Some((address, label)) => {
                let label = label.trim();
                (address.trim(), (!label.is_empty()).then(|| label.to_string()))
            }
            None => (line.trim(), None),
        };

        Self {
            line: line.to_string(),
            address: address.to_string(),
            label,
        }
    }

    /// Identifier used as the key in a server response mapping.
    pub fn id(&self) -> &str {
        &self.line
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn is_blank(&self) -> bool {
        self.address.is_empty()
    }

    /// Label when present, otherwise the bare address.
    pub fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.address)
    }

    pub fn transport(&self) -> ServerTransport {
        if self.address.starts_with("tcp://") {
            ServerTransport::Tcp
        } else {
            ServerTransport::Udp
        }
    }

    /// Socket address to send queries to; port 53 unless one is given.
    pub fn socket_addr(&self) -> Result<SocketAddr, DomainError> {
        let raw = self
            .address
            .strip_prefix("udp://")
            .or_else(|| self.address.strip_prefix("tcp://"))
            .unwrap_or(&self.address);

        if let Ok(addr) = raw.parse::<SocketAddr>() {
            return Ok(addr);
        }
        if let Ok(ip) = raw.parse::<IpAddr>() {
            return Ok(SocketAddr::new(ip, DEFAULT_DNS_PORT));
        }
        if let Some(inner) = raw.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
            if let Ok(ip) = inner.parse::<IpAddr>() {
                return Ok(SocketAddr::new(ip, DEFAULT_DNS_PORT));
            }
        }

        Err(DomainError::InvalidServerAddress(self.address.clone()))
    }
}

impl fmt::Display for ServerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.line)
    }
}
