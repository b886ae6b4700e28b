// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use error::Error;
use std::fmt;
use std::time::Duration;
use url::Url;

pub(crate) const SEATGEEK_API_BASE: &str = "https://api.seatgeek.com/2";
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub(crate) const USER_AGENT: &str = concat!("seatgeek-rs/", env!("CARGO_PKG_VERSION"));

/// Client id/secret pair required by the upstream API on every call.
#[derive(Clone)]
pub struct Credentials {
  pub(crate) client_id: String,
  pub(crate) client_secret: String,
}

impl Credentials {
  pub fn new(
    client_id: impl Into<String>,
    client_secret: impl Into<String>,
  ) -> Result<Self, Error> {
    let client_id = client_id.into();
    let client_secret = client_secret.into();

    if client_id.trim().is_empty() {
      return Err(Error::ConfigError("Client ID cannot be empty".into()));
    }
    if client_secret.trim().is_empty() {
      return Err(Error::ConfigError("Client secret cannot be empty".into()));
    }

    Ok(Self {
      client_id,
      client_secret,
    })
  }
}

// The secret must never reach logs or panic output.
impl fmt::Debug for Credentials {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Credentials")
      .field("client_id", &self.client_id)
      .field("client_secret", &"<redacted>")
      .finish()
  }
}

#[derive(Debug, Clone)]
pub(crate) struct SeatGeekConfig {
  pub(crate) credentials: Credentials,
  pub(crate) base_url: Url,
  pub(crate) timeout: Duration,
}

impl SeatGeekConfig {
  pub(crate) fn new(credentials: Credentials, base_url: &str) -> Result<Self, Error> {
    let base_url = Url::parse(base_url)
      .map_err(|e| Error::ConfigError(format!("Invalid base URL '{}': {}", base_url, e)))?;

    Ok(Self {
      credentials,
      base_url,
      timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn blank_credentials_are_rejected() {
    assert!(Credentials::new("", "secret").is_err());
    assert!(Credentials::new("id", "   ").is_err());
    assert!(Credentials::new("id", "secret").is_ok());
  }

  #[test]
  fn debug_output_redacts_the_secret() {
    let credentials = Credentials::new("my-id", "my-secret").unwrap();
    let output = format!("{:?}", credentials);
    assert!(output.contains("my-id"));
    assert!(!output.contains("my-secret"));
  }
}
