// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use chrono::{DateTime, Utc};
use std::fmt;
use std::net::IpAddr;

pub(crate) const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
  Events,
  Performers,
  Venues,
}

impl Endpoint {
  pub(crate) fn as_str(&self) -> &'static str {
    match self {
      Endpoint::Events => "events",
      Endpoint::Performers => "performers",
      Endpoint::Venues => "venues",
    }
  }
}

impl fmt::Display for Endpoint {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Optional narrowing applied to a resource query. A request carries at
/// most one filter; combinations are not representable.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
  Id(u64),
  City(String),
  DatetimeUtc(DateTime<Utc>),
  Geoip { ip: IpAddr, range: Option<String> },
}

impl Filter {
  /// Identifiers select a single resource and travel in the path,
  /// not the query string.
  pub(crate) fn path_segment(&self) -> Option<String> {
    match self {
      Filter::Id(id) => Some(id.to_string()),
      _ => None,
    }
  }

  /// Query pairs contributed by this filter, in wire order.
  pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
    match self {
      Filter::Id(_) => Vec::new(),
      Filter::City(city) => vec![("city", city.clone())],
      Filter::DatetimeUtc(datetime_utc) => vec![(
        "datetime_utc",
        datetime_utc.format(DATETIME_FORMAT).to_string(),
      )],
      Filter::Geoip { ip, range } => {
        let mut pairs = vec![("geoip", ip.to_string())];
        if let Some(range) = range {
          pairs.push(("range", range.clone()));
        }
        pairs
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;
  use std::net::Ipv4Addr;

  #[test]
  fn endpoints_map_to_resource_segments() {
    assert_eq!(Endpoint::Events.to_string(), "events");
    assert_eq!(Endpoint::Performers.to_string(), "performers");
    assert_eq!(Endpoint::Venues.to_string(), "venues");
  }

  #[test]
  fn id_contributes_a_path_segment_and_no_query_pairs() {
    let filter = Filter::Id(6205386);
    assert_eq!(filter.path_segment(), Some("6205386".to_string()));
    assert!(filter.query_pairs().is_empty());
  }

  #[test]
  fn datetime_uses_the_upstream_wire_format() {
    let datetime_utc = Utc.with_ymd_and_hms(2025, 3, 14, 19, 30, 0).unwrap();
    let pairs = Filter::DatetimeUtc(datetime_utc).query_pairs();
    assert_eq!(
      pairs,
      vec![("datetime_utc", "2025-03-14T19:30:00".to_string())]
    );
  }

  #[test]
  fn geoip_range_is_optional() {
    let ip = IpAddr::V4(Ipv4Addr::new(203, 0, 113, 7));
    let without = Filter::Geoip { ip, range: None };
    assert_eq!(without.query_pairs(), vec![("geoip", "203.0.113.7".to_string())]);

    let with = Filter::Geoip {
      ip,
      range: Some("30mi".to_string()),
    };
    assert_eq!(
      with.query_pairs(),
      vec![
        ("geoip", "203.0.113.7".to_string()),
        ("range", "30mi".to_string())
      ]
    );
  }
}
