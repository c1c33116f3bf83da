use std::net::{IpAddr, Ipv4Addr};

pub const DEFAULT_BACKEND_PORT: u16 = 5001;
pub const DEFAULT_FRONTEND_PORT: u16 = 3000;
pub const DEFAULT_API_URL: &str = "http://localhost:5001";
pub const API_URL_ENV: &str = "API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub address: IpAddr,
    pub port: u16,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_BACKEND_PORT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    pub address: IpAddr,
    pub port: u16,
    /// Origin of the backend, without a trailing slash.
    pub api_url: String,
}

impl FrontendConfig {
    /// Explicit flag wins, then `API_URL`, then the local default.
    pub fn resolve(port: Option<u16>, api_url: Option<String>) -> Self {
        let env_url = std::env::var(API_URL_ENV).ok();
        Self {
            address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: port.unwrap_or(DEFAULT_FRONTEND_PORT),
            api_url: pick_api_url(api_url, env_url),
        }
    }
}

fn pick_api_url(flag: Option<String>, env: Option<String>) -> String {
    let url = [flag, env]
        .into_iter()
        .flatten()
        .map(|u| u.trim().to_string())
        .find(|u| !u.is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    url.trim_end_matches('/').to_string()
}
