use std::{collections::HashMap, fs, net::SocketAddr};

use anyhow::Context;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct Settings {
    pub server_bind: String,
    pub cors_allow_origin: String,
    pub max_sessions: usize,
    pub max_body_bytes: usize,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "0.0.0.0:8000".into(),
            cors_allow_origin: "*".into(),
            max_sessions: 32,
            max_body_bytes: 16 * 1024,
            log_filter: "info".into(),
        }
    }
}

impl Settings {
    /// Replaces the port of `server_bind`, keeping its host.
    pub fn override_port(&mut self, port: u16) -> anyhow::Result<()> {
        let mut addr = self.bind_addr()?;
        addr.set_port(port);
        self.server_bind = addr.to_string();
        Ok(())
    }

    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        self.server_bind
            .parse()
            .with_context(|| format!("invalid bind address '{}'", self.server_bind))
    }
}

pub fn load_settings() -> Settings {
    let file = fs::read_to_string("server.toml").ok();
    settings_from_sources(file.as_deref(), |key| std::env::var(key).ok())
}

/// Layers defaults, then the flat `server.toml` table, then environment
/// variables. Later `APP__*` names win over the plain ones.
pub fn settings_from_sources(
    file: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> Settings {
    let mut settings = Settings::default();

    if let Some(raw) = file {
        match toml::from_str::<HashMap<String, toml::Value>>(raw) {
            Ok(file_cfg) => apply_file(&mut settings, &file_cfg),
            Err(error) => warn!(%error, "ignoring unreadable server.toml"),
        }
    }

    if let Some(v) = env("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Some(v) = env("APP__BIND_ADDR") {
        settings.server_bind = v;
    }

    if let Some(v) = env("APP__CORS_ALLOW_ORIGIN") {
        settings.cors_allow_origin = v;
    }

    if let Some(parsed) = env("APP__MAX_SESSIONS").and_then(|v| v.parse().ok()) {
        settings.max_sessions = parsed;
    }

    if let Some(parsed) = env("APP__MAX_BODY_BYTES").and_then(|v| v.parse().ok()) {
        settings.max_body_bytes = parsed;
    }

    if let Some(v) = env("APP__LOG_FILTER") {
        settings.log_filter = v;
    }

    settings
}

fn apply_file(settings: &mut Settings, file_cfg: &HashMap<String, toml::Value>) {
    if let Some(v) = file_text(file_cfg, "bind_addr") {
        settings.server_bind = v;
    }
    if let Some(v) = file_text(file_cfg, "cors_allow_origin") {
        settings.cors_allow_origin = v;
    }
    if let Some(parsed) = file_text(file_cfg, "max_sessions").and_then(|v| v.parse().ok()) {
        settings.max_sessions = parsed;
    }
    if let Some(parsed) = file_text(file_cfg, "max_body_bytes").and_then(|v| v.parse().ok()) {
        settings.max_body_bytes = parsed;
    }
    if let Some(v) = file_text(file_cfg, "log_filter") {
        settings.log_filter = v;
    }
}

fn file_text(file_cfg: &HashMap<String, toml::Value>, key: &str) -> Option<String> {
    match file_cfg.get(key)? {
        toml::Value::String(text) => Some(text.clone()),
        toml::Value::Integer(number) => Some(number.to_string()),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
