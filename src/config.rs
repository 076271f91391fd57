use std::rc::Rc;

use lazy_static::lazy_static;
use log::{debug, info};
use regex::Regex;
use yew::prelude::*;

/// URL of the deployed backend. Updated at deployment time; never derived
/// from the environment.
pub const PRODUCTION_API_BASE: &str = "https://theatre-ticketing-api.onrender.com";

/// Port the backend listens on during development and on-LAN testing.
pub const BACKEND_PORT: u16 = 8000;

lazy_static! {
    // 172.16.0.0/12 (second octet 16-31). Prefix match only, no full IPv4
    // validation: a hostname like "192.168.evil.com" is still treated as
    // private. That matches how the shipped detection always behaved.
    static ref PRIVATE_172: Regex = Regex::new(r"^172\.(1[6-9]|2\d|3[01])\.").unwrap();
}

/// Where the page is being served from, judged by hostname alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostClass {
    /// Local development, or no hostname at all (e.g. a file:// page).
    Localhost,
    /// An RFC 1918 private address, e.g. a phone hitting a dev machine
    /// over the LAN.
    PrivateNetwork,
    /// Anything else: real domains and non-private IPs.
    Public,
}

impl HostClass {
    /// Classifies a hostname. The checks are not mutually exclusive by
    /// construction, so they run in a fixed order and the first match wins.
    /// Total over all strings: anything unrecognised falls through to
    /// `Public`, which points at the deployed backend.
    pub fn of(hostname: &str) -> Self {
        if hostname == "localhost" || hostname == "127.0.0.1" || hostname.is_empty() {
            HostClass::Localhost
        } else if hostname.starts_with("192.168.")
            || hostname.starts_with("10.")
            || PRIVATE_172.is_match(hostname)
        {
            HostClass::PrivateNetwork
        } else {
            HostClass::Public
        }
    }
}

/// API base URL for a given hostname.
///
/// On a private-network host the backend is assumed to run on the same
/// machine that serves the page, so the hostname is kept verbatim and only
/// the port changes.
pub fn api_base_for(hostname: &str) -> String {
    match HostClass::of(hostname) {
        HostClass::Localhost => format!("http://localhost:{}", BACKEND_PORT),
        HostClass::PrivateNetwork => format!("http://{}:{}", hostname, BACKEND_PORT),
        HostClass::Public => PRODUCTION_API_BASE.to_string(),
    }
}

/// Frontend configuration, fixed for the lifetime of the page.
///
/// Built once at startup and handed to consumers either through
/// [`ConfigProvider`] or the process-wide [`api_base`] accessor. Not
/// mutated after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    api_base: String,
}

impl AppConfig {
    /// Builds a config for an explicit hostname. Pure; used by tests and
    /// non-browser callers.
    pub fn from_hostname(hostname: &str) -> Self {
        Self {
            api_base: api_base_for(hostname),
        }
    }

    /// Reads the current page's hostname and derives the config from it.
    ///
    /// A missing window or an unreadable hostname degrades to the empty
    /// hostname, which selects the localhost backend. There is no failure
    /// path.
    pub fn detect() -> Self {
        let hostname = web_sys::window()
            .and_then(|w| w.location().hostname().ok())
            .unwrap_or_default();
        let class = HostClass::of(&hostname);
        debug!("host {:?} classified as {:?}", hostname, class);
        let config = Self::from_hostname(&hostname);
        info!("using backend at {}", config.api_base);
        config
    }

    /// Scheme + host + port that all API requests should be directed to.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

lazy_static! {
    static ref APP_CONFIG: AppConfig = AppConfig::detect();
}

/// Process-wide API base: detected on first access, read-only afterwards.
pub fn api_base() -> &'static str {
    APP_CONFIG.api_base()
}

pub type ConfigContext = Rc<AppConfig>;

#[derive(Properties, PartialEq)]
pub struct ConfigProviderProps {
    pub children: Children,
}

/// Detects the configuration once on mount and provides it to the
/// component tree, so components depend on an explicit value instead of
/// the ambient global.
#[function_component(ConfigProvider)]
pub fn config_provider(props: &ConfigProviderProps) -> Html {
    let config = use_memo((), |_| AppConfig::detect());

    html! {
        <ContextProvider<ConfigContext> context={config}>
            { props.children.clone() }
        </ContextProvider<ConfigContext>>
    }
}

#[hook]
pub fn use_config() -> ConfigContext {
    use_context::<ConfigContext>().expect("Config context not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn localhost_hostnames_use_local_backend() {
        for hostname in ["localhost", "127.0.0.1", ""] {
            assert_eq!(HostClass::of(hostname), HostClass::Localhost);
            assert_eq!(api_base_for(hostname), "http://localhost:8000");
        }
    }

    #[test]
    fn private_ranges_keep_hostname_and_port() {
        for hostname in ["192.168.1.42", "10.0.0.5", "172.16.0.1", "172.31.255.254"] {
            assert_eq!(HostClass::of(hostname), HostClass::PrivateNetwork);
            assert_eq!(api_base_for(hostname), format!("http://{}:8000", hostname));
        }
    }

    #[test]
    fn full_172_second_octet_range() {
        for octet in 16..=31 {
            let hostname = format!("172.{}.0.9", octet);
            assert_eq!(HostClass::of(&hostname), HostClass::PrivateNetwork);
        }
    }

    #[test]
    fn non_private_172_falls_through_to_production() {
        for hostname in ["172.32.0.5", "172.15.0.5", "172.160.0.1"] {
            assert_eq!(HostClass::of(hostname), HostClass::Public);
            assert_eq!(api_base_for(hostname), PRODUCTION_API_BASE);
        }
    }

    #[test]
    fn public_hostnames_use_production_backend() {
        for hostname in ["example.com", "mckl-theatre.onrender.com", "8.8.8.8", "LOCALHOST"] {
            assert_eq!(HostClass::of(hostname), HostClass::Public);
            assert_eq!(api_base_for(hostname), PRODUCTION_API_BASE);
        }
    }

    #[test]
    fn prefix_match_is_deliberately_loose() {
        // Not a valid IPv4 address, but the prefix rule claims it anyway.
        assert_eq!(HostClass::of("192.168.evil.com"), HostClass::PrivateNetwork);
        assert_eq!(
            api_base_for("192.168.evil.com"),
            "http://192.168.evil.com:8000"
        );
    }

    #[test]
    fn classification_is_idempotent() {
        for hostname in ["localhost", "10.1.2.3", "example.com"] {
            assert_eq!(api_base_for(hostname), api_base_for(hostname));
        }
    }

    #[test]
    fn config_object_matches_pure_derivation() {
        let config = AppConfig::from_hostname("192.168.0.10");
        assert_eq!(config.api_base(), "http://192.168.0.10:8000");
        assert_eq!(config, AppConfig::from_hostname("192.168.0.10"));
    }
}
