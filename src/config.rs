//! Configuration lookup.
//!
//! Values are looked up through a [`ConfigSource`] every time they are needed, so a
//! misconfiguration surfaces on the call that needs the value. Lookups that need several keys
//! report every missing key at once.

use std::collections::BTreeMap;
use std::net::SocketAddr;

use base64::Engine;

use crate::domain::{AccountId, ApplicationId, Password, Username, ValidationError};

pub const USERNAME_KEY: &str = "BANDWIDTH_USERNAME";
pub const PASSWORD_KEY: &str = "BANDWIDTH_PASSWORD";
pub const ACCOUNT_ID_KEY: &str = "BANDWIDTH_ACCOUNT_ID";
pub const APPLICATION_ID_KEY: &str = "BANDWIDTH_APPLICATION_ID";
pub const BIND_ADDR_KEY: &str = "BWTN_BIND_ADDR";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Something that can answer "what is the value of `key`?".
pub trait ConfigSource: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
}

/// Reads the process environment on every lookup.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSource;

impl ConfigSource for EnvSource {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Fixed in-memory values.
#[derive(Debug, Clone, Default)]
pub struct MapSource(BTreeMap<String, String>);

impl MapSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapSource {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl ConfigSource for MapSource {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error(
        "missing Bandwidth configuration; set the following environment variables: {}",
        keys.join(", ")
    )]
    Missing { keys: Vec<&'static str> },

    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Basic-auth credentials and the account every endpoint is scoped to.
#[derive(Debug, Clone)]
pub struct Credentials {
    username: Username,
    password: Password,
    account_id: AccountId,
}

impl Credentials {
    pub fn new(username: Username, password: Password, account_id: AccountId) -> Self {
        Self {
            username,
            password,
            account_id,
        }
    }

    /// Load `BANDWIDTH_USERNAME`, `BANDWIDTH_PASSWORD` and `BANDWIDTH_ACCOUNT_ID`.
    pub fn load(source: &dyn ConfigSource) -> Result<Self, ConfigError> {
        let mut lookup = Lookup::new(source);
        let credentials = Self::lookup(&mut lookup);
        lookup.finish(credentials)
    }

    /// Load the credentials together with `BANDWIDTH_APPLICATION_ID`.
    pub fn load_with_application_id(
        source: &dyn ConfigSource,
    ) -> Result<(Self, ApplicationId), ConfigError> {
        let mut lookup = Lookup::new(source);
        let credentials = Self::lookup(&mut lookup);
        let application_id = lookup.take(APPLICATION_ID_KEY, ApplicationId::new);
        lookup.finish(credentials.zip(application_id))
    }

    fn lookup(lookup: &mut Lookup<'_>) -> Option<Self> {
        let username = lookup.take(USERNAME_KEY, Username::new);
        let password = lookup.take(PASSWORD_KEY, Password::new);
        let account_id = lookup.take(ACCOUNT_ID_KEY, AccountId::new);
        Some(Self::new(username?, password?, account_id?))
    }

    pub fn account_id(&self) -> &AccountId {
        &self.account_id
    }

    /// `Authorization` header value: `Basic base64(username:password)`.
    pub fn basic_authorization(&self) -> String {
        let pair = format!("{}:{}", self.username.as_str(), self.password.as_str());
        format!(
            "Basic {}",
            base64::engine::general_purpose::STANDARD.encode(pair)
        )
    }
}

struct Lookup<'a> {
    source: &'a dyn ConfigSource,
    missing: Vec<&'static str>,
}

impl<'a> Lookup<'a> {
    fn new(source: &'a dyn ConfigSource) -> Self {
        Self {
            source,
            missing: Vec::new(),
        }
    }

    fn take<T>(
        &mut self,
        key: &'static str,
        parse: impl FnOnce(String) -> Result<T, ValidationError>,
    ) -> Option<T> {
        let value = self.source.get(key).and_then(|raw| parse(raw).ok());
        if value.is_none() {
            self.missing.push(key);
        }
        value
    }

    fn finish<T>(self, value: Option<T>) -> Result<T, ConfigError> {
        match value {
            Some(value) if self.missing.is_empty() => Ok(value),
            _ => Err(ConfigError::Missing { keys: self.missing }),
        }
    }
}

/// Whether each Bandwidth key holds a value the gateway would accept. Values themselves are
/// never exposed.
pub fn presence(source: &dyn ConfigSource) -> Vec<(&'static str, bool)> {
    let mut lookup = Lookup::new(source);
    let username = lookup.take(USERNAME_KEY, Username::new);
    let password = lookup.take(PASSWORD_KEY, Password::new);
    let account_id = lookup.take(ACCOUNT_ID_KEY, AccountId::new);
    let application_id = lookup.take(APPLICATION_ID_KEY, ApplicationId::new);
    vec![
        (USERNAME_KEY, username.is_some()),
        (PASSWORD_KEY, password.is_some()),
        (ACCOUNT_ID_KEY, account_id.is_some()),
        (APPLICATION_ID_KEY, application_id.is_some()),
    ]
}

/// Settings of the proxy binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    pub fn load(source: &dyn ConfigSource) -> Result<Self, ConfigError> {
        let raw = source
            .get(BIND_ADDR_KEY)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
        let bind_addr = raw.trim().parse().map_err(|_| ConfigError::Invalid {
            key: BIND_ADDR_KEY,
            value: raw.clone(),
        })?;
        Ok(Self { bind_addr })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_source() -> MapSource {
        MapSource::new()
            .with(USERNAME_KEY, "user")
            .with(PASSWORD_KEY, "pass")
            .with(ACCOUNT_ID_KEY, "5005456")
    }

    #[test]
    fn basic_authorization_encodes_user_and_password() {
        let credentials = Credentials::load(&full_source()).unwrap();
        let header = credentials.basic_authorization();
        assert_eq!(header, "Basic dXNlcjpwYXNz");

        let encoded = header.strip_prefix("Basic ").unwrap();
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .unwrap();
        assert_eq!(decoded, b"user:pass");
    }

    #[test]
    fn load_lists_exactly_the_missing_keys() {
        let source = MapSource::new().with(PASSWORD_KEY, "pass");
        assert_eq!(
            Credentials::load(&source).unwrap_err(),
            ConfigError::Missing {
                keys: vec![USERNAME_KEY, ACCOUNT_ID_KEY]
            }
        );

        for key in [USERNAME_KEY, PASSWORD_KEY, ACCOUNT_ID_KEY] {
            let source: MapSource = [
                (USERNAME_KEY, "user"),
                (PASSWORD_KEY, "pass"),
                (ACCOUNT_ID_KEY, "5005456"),
            ]
            .into_iter()
            .filter(|(k, _)| *k != key)
            .collect();
            assert_eq!(
                Credentials::load(&source).unwrap_err(),
                ConfigError::Missing { keys: vec![key] }
            );
        }
    }

    #[test]
    fn blank_values_count_as_missing() {
        let source = full_source()
            .with(USERNAME_KEY, "   ")
            .with(PASSWORD_KEY, "");
        let err = Credentials::load(&source).unwrap_err();
        assert_eq!(
            err.to_string(),
            "missing Bandwidth configuration; set the following environment variables: BANDWIDTH_USERNAME, BANDWIDTH_PASSWORD"
        );
    }

    #[test]
    fn application_id_is_reported_with_credentials() {
        let source = MapSource::new().with(USERNAME_KEY, "user");
        assert_eq!(
            Credentials::load_with_application_id(&source).unwrap_err(),
            ConfigError::Missing {
                keys: vec![PASSWORD_KEY, ACCOUNT_ID_KEY, APPLICATION_ID_KEY]
            }
        );

        let source = full_source().with(APPLICATION_ID_KEY, "app-1");
        let (credentials, app) = Credentials::load_with_application_id(&source).unwrap();
        assert_eq!(credentials.account_id().as_str(), "5005456");
        assert_eq!(app.as_str(), "app-1");
    }

    #[test]
    fn presence_never_exposes_values() {
        let presence = presence(&full_source().with(APPLICATION_ID_KEY, " "));
        assert_eq!(
            presence,
            vec![
                (USERNAME_KEY, true),
                (PASSWORD_KEY, true),
                (ACCOUNT_ID_KEY, true),
                (APPLICATION_ID_KEY, false),
            ]
        );
    }

    #[test]
    fn presence_follows_the_credential_rules() {
        let source = full_source()
            .with(PASSWORD_KEY, " ")
            .with(USERNAME_KEY, " ");
        assert!(Credentials::load(&source.clone().with(USERNAME_KEY, "user")).is_ok());

        let presence = presence(&source);
        assert_eq!(presence[0], (USERNAME_KEY, false));
        assert_eq!(presence[1], (PASSWORD_KEY, true));
    }

    #[test]
    fn server_config_defaults_and_rejects_garbage() {
        let config = ServerConfig::load(&MapSource::new()).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:3000".parse().unwrap());

        let source = MapSource::new().with(BIND_ADDR_KEY, "127.0.0.1:8080");
        let config = ServerConfig::load(&source).unwrap();
        assert_eq!(config.bind_addr.port(), 8080);

        assert!(matches!(
            ServerConfig::load(&MapSource::new().with(BIND_ADDR_KEY, "nope")),
            Err(ConfigError::Invalid {
                key: BIND_ADDR_KEY,
                ..
            })
        ));
    }
}
