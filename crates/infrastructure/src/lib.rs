//! Adapters behind the dnscheck application ports: wire-format DNS lookups,
//! the SQLite history store and the TOML-backed server list.
pub mod database;
pub mod dns;
pub mod repositories;
