//! 页面配置
//!
//! 覆盖值来自 `<meta name="barrest:NAME" content="...">` 标签，例如
//! `<meta name="barrest:GATEWAY_URL" content="https://gw.example.com">`。

use barrest_shell::config::{ConfigSource, ShellConfig};
use tracing::info;

const META_PREFIX: &str = "barrest:";

/// 浏览器外壳的健康轮询间隔
const SHELL_HEALTH_INTERVAL_MS: u64 = 30_000;

pub struct MetaConfig;

impl ConfigSource for MetaConfig {
    fn var(&self, name: &str) -> Option<String> {
        let document = web_sys::window()?.document()?;
        let selector = format!("meta[name=\"{}{}\"]", META_PREFIX, name);
        document.query_selector(&selector).ok()??.get_attribute("content")
    }
}

/// 按主机名选择网关，然后应用 `<meta>` 覆盖
pub fn load_config() -> ShellConfig {
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();

    let mut config = ShellConfig::for_hostname(&hostname);
    config.health.interval_ms = SHELL_HEALTH_INTERVAL_MS;
    config.apply_overrides(&MetaConfig);

    info!(%hostname, gateway = %config.gateway_url, "configuration loaded");
    config
}
