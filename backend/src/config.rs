//! Environment-driven application settings.
//!
//! All variables are read once at startup through [`mockable::Env`] so the
//! parsing rules can be tested without touching the process environment.
//! Missing or invalid required settings are fatal.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use mockable::{DefaultEnv, Env};
use url::Url;

const OPENWEATHER_API_KEY_ENV: &str = "OPENWEATHER_API_KEY";
const OPENWEATHER_BASE_URL_ENV: &str = "OPENWEATHER_BASE_URL";
const OPENWEATHER_TIMEOUT_ENV: &str = "OPENWEATHER_TIMEOUT_SECS";
const DATABASE_URL_ENV: &str = "DATABASE_URL";
const DATABASE_MAX_CONNECTIONS_ENV: &str = "DATABASE_MAX_CONNECTIONS";
const PORT_ENV: &str = "PORT";
const BIND_HOST_ENV: &str = "BIND_HOST";

const DEFAULT_OPENWEATHER_TIMEOUT_SECS: u64 = 10;
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_BIND_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Errors raised while reading settings from the environment.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is missing or blank.
    #[error("missing required environment variable: {name}")]
    MissingEnv { name: &'static str },
    /// A variable is present but contains an invalid value.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// External weather provider settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenWeatherSettings {
    pub api_key: String,
    pub base_url: Url,
    pub timeout: Duration,
}

/// Weather store settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
}

/// Complete application settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    pub openweather: OpenWeatherSettings,
    pub database: DatabaseSettings,
    pub bind_addr: SocketAddr,
}

impl AppSettings {
    /// Read and validate every setting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mockable::MockEnv;
    /// use weather_backend::config::AppSettings;
    ///
    /// let mut env = MockEnv::new();
    /// env.expect_string().returning(|name| match name {
    ///     "OPENWEATHER_API_KEY" => Some("secret".to_owned()),
    ///     "OPENWEATHER_BASE_URL" => {
    ///         Some("https://api.openweathermap.org/data/2.5/weather".to_owned())
    ///     }
    ///     "DATABASE_URL" => Some("postgres://weather@localhost/weather".to_owned()),
    ///     _ => None,
    /// });
    ///
    /// let settings = AppSettings::from_env(&env).expect("valid settings");
    /// assert_eq!(settings.bind_addr.port(), 3000);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] naming the first missing or invalid variable.
    pub fn from_env<E: Env>(env: &E) -> Result<Self, ConfigError> {
        let openweather = OpenWeatherSettings {
            api_key: required(env, OPENWEATHER_API_KEY_ENV)?,
            base_url: base_url_from_env(env)?,
            timeout: Duration::from_secs(parsed_or(
                env,
                OPENWEATHER_TIMEOUT_ENV,
                DEFAULT_OPENWEATHER_TIMEOUT_SECS,
                "a positive number of seconds",
            )?),
        };
        let database = DatabaseSettings {
            url: required(env, DATABASE_URL_ENV)?,
            max_connections: parsed_or(
                env,
                DATABASE_MAX_CONNECTIONS_ENV,
                DEFAULT_DATABASE_MAX_CONNECTIONS,
                "a positive integer",
            )?,
        };
        let port = parsed_or(env, PORT_ENV, DEFAULT_PORT, "a TCP port (1-65535)")?;
        let host = optional(env, BIND_HOST_ENV)
            .map(|value| {
                IpAddr::from_str(&value).map_err(|_| ConfigError::InvalidEnv {
                    name: BIND_HOST_ENV,
                    value,
                    expected: "an IPv4 or IPv6 address",
                })
            })
            .transpose()?
            .unwrap_or(DEFAULT_BIND_HOST);

        Ok(Self {
            openweather,
            database,
            bind_addr: SocketAddr::new(host, port),
        })
    }

    /// Read settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] naming the first missing or invalid variable.
    pub fn from_process_env() -> Result<Self, ConfigError> {
        Self::from_env(&DefaultEnv::new())
    }
}

fn optional<E: Env>(env: &E, name: &'static str) -> Option<String> {
    env.string(name)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn required<E: Env>(env: &E, name: &'static str) -> Result<String, ConfigError> {
    optional(env, name).ok_or(ConfigError::MissingEnv { name })
}

fn base_url_from_env<E: Env>(env: &E) -> Result<Url, ConfigError> {
    let value = required(env, OPENWEATHER_BASE_URL_ENV)?;
    match Url::parse(&value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(url),
        _ => Err(ConfigError::InvalidEnv {
            name: OPENWEATHER_BASE_URL_ENV,
            value,
            expected: "an absolute http(s) URL",
        }),
    }
}

/// Parse a strictly positive number, falling back to `default` when unset.
fn parsed_or<E, T>(
    env: &E,
    name: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError>
where
    E: Env,
    T: FromStr + PartialOrd + Default,
{
    let Some(value) = optional(env, name) else {
        return Ok(default);
    };
    match value.parse::<T>() {
        Ok(parsed) if parsed > T::default() => Ok(parsed),
        _ => Err(ConfigError::InvalidEnv {
            name,
            value,
            expected,
        }),
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for environment settings parsing.

    use std::collections::HashMap;

    use mockable::MockEnv;
    use rstest::{fixture, rstest};

    use super::*;

    fn mock_env(vars: HashMap<String, String>) -> MockEnv {
        let mut env = MockEnv::new();
        env.expect_string()
            .times(0..)
            .returning(move |key| vars.get(key).cloned());
        env
    }

    #[fixture]
    fn required_vars() -> HashMap<String, String> {
        HashMap::from([
            (OPENWEATHER_API_KEY_ENV.to_owned(), "secret".to_owned()),
            (
                OPENWEATHER_BASE_URL_ENV.to_owned(),
                "https://api.openweathermap.org/data/2.5/weather".to_owned(),
            ),
            (
                DATABASE_URL_ENV.to_owned(),
                "postgres://weather@localhost/weather".to_owned(),
            ),
        ])
    }

    #[rstest]
    fn defaults_apply_when_optional_values_are_unset(required_vars: HashMap<String, String>) {
        let settings = AppSettings::from_env(&mock_env(required_vars)).expect("valid settings");

        assert_eq!(settings.openweather.api_key, "secret");
        assert_eq!(settings.openweather.timeout, Duration::from_secs(10));
        assert_eq!(settings.database.max_connections, 10);
        assert_eq!(
            settings.bind_addr,
            SocketAddr::from(([0, 0, 0, 0], 3000))
        );
    }

    #[rstest]
    fn explicit_values_override_defaults(mut required_vars: HashMap<String, String>) {
        required_vars.insert(OPENWEATHER_TIMEOUT_ENV.to_owned(), "3".to_owned());
        required_vars.insert(DATABASE_MAX_CONNECTIONS_ENV.to_owned(), "4".to_owned());
        required_vars.insert(PORT_ENV.to_owned(), "8080".to_owned());
        required_vars.insert(BIND_HOST_ENV.to_owned(), "127.0.0.1".to_owned());

        let settings = AppSettings::from_env(&mock_env(required_vars)).expect("valid settings");

        assert_eq!(settings.openweather.timeout, Duration::from_secs(3));
        assert_eq!(settings.database.max_connections, 4);
        assert_eq!(
            settings.bind_addr,
            SocketAddr::from(([127, 0, 0, 1], 8080))
        );
    }

    #[rstest]
    #[case(OPENWEATHER_API_KEY_ENV)]
    #[case(OPENWEATHER_BASE_URL_ENV)]
    #[case(DATABASE_URL_ENV)]
    fn missing_required_values_are_fatal(
        mut required_vars: HashMap<String, String>,
        #[case] name: &'static str,
    ) {
        required_vars.remove(name);
        let err = AppSettings::from_env(&mock_env(required_vars)).expect_err("missing value");
        assert_eq!(err, ConfigError::MissingEnv { name });
    }

    #[rstest]
    fn blank_api_key_counts_as_missing(mut required_vars: HashMap<String, String>) {
        required_vars.insert(OPENWEATHER_API_KEY_ENV.to_owned(), "   ".to_owned());
        let err = AppSettings::from_env(&mock_env(required_vars)).expect_err("blank key");
        assert_eq!(
            err,
            ConfigError::MissingEnv {
                name: OPENWEATHER_API_KEY_ENV
            }
        );
    }

    #[rstest]
    #[case(OPENWEATHER_BASE_URL_ENV, "not a url")]
    #[case(OPENWEATHER_BASE_URL_ENV, "ftp://example.com/weather")]
    #[case(OPENWEATHER_TIMEOUT_ENV, "0")]
    #[case(OPENWEATHER_TIMEOUT_ENV, "soon")]
    #[case(DATABASE_MAX_CONNECTIONS_ENV, "-1")]
    #[case(PORT_ENV, "70000")]
    #[case(PORT_ENV, "0")]
    #[case(BIND_HOST_ENV, "localhost")]
    fn invalid_values_name_the_variable(
        mut required_vars: HashMap<String, String>,
        #[case] name: &'static str,
        #[case] value: &str,
    ) {
        required_vars.insert(name.to_owned(), value.to_owned());
        let err = AppSettings::from_env(&mock_env(required_vars)).expect_err("invalid value");
        assert!(
            matches!(err, ConfigError::InvalidEnv { name: reported, .. } if reported == name),
            "expected InvalidEnv for {name}, got {err:?}"
        );
    }

    #[rstest]
    fn process_env_reader_sees_process_variables() {
        let vars: HashMap<String, String> = std::env::vars().collect();
        let expected = AppSettings::from_env(&mock_env(vars));

        assert_eq!(AppSettings::from_process_env(), expected);
    }
}
