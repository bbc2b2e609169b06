pub mod dns_config;
pub mod history;
pub mod lookup;

use tracing::info;

pub async fn health_check() -> &'static str {
    info!("Health check requested");
    "OK"
}
