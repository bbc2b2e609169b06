#![allow(dead_code)]
#![allow(unused_imports)]

mod dns_server_mock;

pub use dns_server_mock::{MockBehavior, MockDnsServer};

use sqlx::SqlitePool;

pub async fn create_test_db() -> SqlitePool {
    dnscheck_infrastructure::database::create_pool("sqlite::memory:", 1)
        .await
        .unwrap()
}
