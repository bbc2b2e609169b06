pub mod get_dns_config;
pub mod save_dns_config;

pub use get_dns_config::GetDnsConfigUseCase;
pub use save_dns_config::SaveDnsConfigUseCase;
