// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use anyhow::{bail, Context, Result};
use seatgeek::{Credentials, SeatGeekClient};
use std::env;
use tracing::info;

#[cfg(debug_assertions)]
fn setup_logging() {
  tracing_subscriber::fmt()
    .with_file(true)
    .with_line_number(true)
    .with_thread_ids(true)
    .init();
}

#[cfg(not(debug_assertions))]
fn setup_logging() {
  tracing_subscriber::fmt().init();
}

#[tokio::main]
async fn main() -> Result<()> {
  #[cfg(debug_assertions)]
  base::dotenv::load()?;
  setup_logging();

  let credentials = Credentials::new(
    env::var("SEATGEEK_CLIENT_ID").context("Missing SEATGEEK_CLIENT_ID")?,
    env::var("SEATGEEK_CLIENT_SECRET").context("Missing SEATGEEK_CLIENT_SECRET")?,
  )?;
  let client = SeatGeekClient::new(credentials)?;

  let resource = env::args().nth(1).unwrap_or_else(|| "events".to_string());
  info!("Fetching {}", resource);

  let listing = match resource.as_str() {
    "events" => client.all_events().await?,
    "performers" => client.all_performers().await?,
    "venues" => client.all_venues().await?,
    other => bail!(
      "Unknown resource: {} (expected events, performers or venues)",
      other
    ),
  };

  println!("{}", serde_json::to_string_pretty(&listing)?);
  Ok(())
}
