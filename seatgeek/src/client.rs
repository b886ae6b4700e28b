// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  config::{Credentials, SeatGeekConfig, SEATGEEK_API_BASE, USER_AGENT},
  query::{Endpoint, Filter},
};
use chrono::{DateTime, Utc};
use error::Error;
use serde_json::Value;
use std::net::IpAddr;
use tokio::time::timeout;
use tracing::{debug, error, instrument};
use url::Url;

/// Client for the SeatGeek API: events, performers and venues, each
/// listable as-is or narrowed by a single filter. Responses are returned
/// as raw JSON; the upstream shape is the caller's concern.
#[derive(Debug, Clone)]
pub struct SeatGeekClient {
  client: reqwest::Client,
  config: SeatGeekConfig,
}

impl SeatGeekClient {
  pub fn new(credentials: Credentials) -> Result<Self, Error> {
    Self::with_config(SeatGeekConfig::new(credentials, SEATGEEK_API_BASE)?)
  }

  #[cfg(test)]
  pub fn with_base_url(credentials: Credentials, base_url: &str) -> Result<Self, Error> {
    Self::with_config(SeatGeekConfig::new(credentials, base_url)?)
  }

  fn with_config(config: SeatGeekConfig) -> Result<Self, Error> {
    let client = reqwest::Client::builder()
      .timeout(config.timeout)
      .user_agent(USER_AGENT)
      .build()
      .map_err(Error::HttpError)?;

    Ok(Self { client, config })
  }

  pub async fn all_events(&self) -> Result<Value, Error> {
    self.fetch(Endpoint::Events, None).await
  }

  pub async fn event_by_id(&self, id: u64) -> Result<Value, Error> {
    self.fetch(Endpoint::Events, Some(Filter::Id(id))).await
  }

  pub async fn events_by_city(&self, city: &str) -> Result<Value, Error> {
    self.fetch(Endpoint::Events, Some(city_filter(city)?)).await
  }

  pub async fn events_by_date(&self, datetime_utc: DateTime<Utc>) -> Result<Value, Error> {
    self
      .fetch(Endpoint::Events, Some(Filter::DatetimeUtc(datetime_utc)))
      .await
  }

  pub async fn events_by_location(
    &self,
    ip: IpAddr,
    range: Option<&str>,
  ) -> Result<Value, Error> {
    self
      .fetch(Endpoint::Events, Some(geoip_filter(ip, range)))
      .await
  }

  pub async fn all_performers(&self) -> Result<Value, Error> {
    self.fetch(Endpoint::Performers, None).await
  }

  pub async fn performer_by_id(&self, id: u64) -> Result<Value, Error> {
    self.fetch(Endpoint::Performers, Some(Filter::Id(id))).await
  }

  pub async fn performers_by_city(&self, city: &str) -> Result<Value, Error> {
    self
      .fetch(Endpoint::Performers, Some(city_filter(city)?))
      .await
  }

  pub async fn performers_by_date(&self, datetime_utc: DateTime<Utc>) -> Result<Value, Error> {
    self
      .fetch(Endpoint::Performers, Some(Filter::DatetimeUtc(datetime_utc)))
      .await
  }

  pub async fn performers_by_location(
    &self,
    ip: IpAddr,
    range: Option<&str>,
  ) -> Result<Value, Error> {
    self
      .fetch(Endpoint::Performers, Some(geoip_filter(ip, range)))
      .await
  }

  pub async fn all_venues(&self) -> Result<Value, Error> {
    self.fetch(Endpoint::Venues, None).await
  }

  pub async fn venue_by_id(&self, id: u64) -> Result<Value, Error> {
    self.fetch(Endpoint::Venues, Some(Filter::Id(id))).await
  }

  pub async fn venues_by_city(&self, city: &str) -> Result<Value, Error> {
    self.fetch(Endpoint::Venues, Some(city_filter(city)?)).await
  }

  pub async fn venues_by_date(&self, datetime_utc: DateTime<Utc>) -> Result<Value, Error> {
    self
      .fetch(Endpoint::Venues, Some(Filter::DatetimeUtc(datetime_utc)))
      .await
  }

  pub async fn venues_by_location(
    &self,
    ip: IpAddr,
    range: Option<&str>,
  ) -> Result<Value, Error> {
    self
      .fetch(Endpoint::Venues, Some(geoip_filter(ip, range)))
      .await
  }

  #[instrument(skip(self))]
  async fn fetch(&self, endpoint: Endpoint, filter: Option<Filter>) -> Result<Value, Error> {
    let url = self.build_url(endpoint, filter.as_ref())?;
    debug!("GET {}", redacted(&url));

    let response = timeout(self.config.timeout, self.client.get(url).send())
      .await
      .map_err(|_| Error::TimeoutError)??;

    let status = response.status();
    if !status.is_success() {
      error!("API request failed with status: {}", status);
      return Err(Error::Status(status));
    }

    response
      .json()
      .await
      .map_err(|e| Error::ParseError(format!("Failed to deserialize response: {}", e)))
  }

  fn build_url(&self, endpoint: Endpoint, filter: Option<&Filter>) -> Result<Url, Error> {
    let mut url = self.config.base_url.clone();

    {
      let mut segments = url
        .path_segments_mut()
        .map_err(|_| Error::ConfigError("Base URL cannot be a base".into()))?;
      segments.pop_if_empty().push(endpoint.as_str());
      if let Some(segment) = filter.and_then(|f| f.path_segment()) {
        segments.push(&segment);
      }
    }

    {
      let mut pairs = url.query_pairs_mut();
      if let Some(filter) = filter {
        for (key, value) in filter.query_pairs() {
          pairs.append_pair(key, &value);
        }
      }
      pairs.append_pair("client_id", &self.config.credentials.client_id);
      pairs.append_pair("client_secret", &self.config.credentials.client_secret);
    }

    Ok(url)
  }
}

fn city_filter(city: &str) -> Result<Filter, Error> {
  if city.trim().is_empty() {
    return Err(Error::InvalidCity("City name cannot be empty".into()));
  }
  Ok(Filter::City(city.to_string()))
}

fn geoip_filter(ip: IpAddr, range: Option<&str>) -> Filter {
  Filter::Geoip {
    ip,
    range: range.map(str::to_string),
  }
}

fn redacted(url: &Url) -> Url {
  let mut safe = url.clone();
  let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

  safe.query_pairs_mut().clear().extend_pairs(
    pairs.iter().map(|(key, value)| {
      let value = if key == "client_secret" {
        "REDACTED"
      } else {
        value.as_str()
      };
      (key.as_str(), value)
    }),
  );

  safe
}
