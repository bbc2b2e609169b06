//! Ports and use cases of the dnscheck backend.
pub mod ports;
pub mod services;
pub mod use_cases;
