// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
  #[error("API request failed: {0}")]
  Status(StatusCode),
  #[error("HTTP error: {0}")]
  HttpError(#[from] reqwest::Error),
  #[error("Failed to parse response: {0}")]
  ParseError(String),
  #[error("Configuration error: {0}")]
  ConfigError(String),
  #[error("IO error: {0}")]
  IoError(#[from] std::io::Error),
  #[error("Invalid city name: {0}")]
  InvalidCity(String),
  #[error("Timeout error")]
  TimeoutError,
  #[error("Path not found: {}", .0.display())]
  PathNotFound(PathBuf),
  #[error("{0}")]
  Err(String),
}

impl Error {
  /// Status code of the upstream response, if this error carries one.
  pub fn status(&self) -> Option<StatusCode> {
    match self {
      Error::Status(code) => Some(*code),
      Error::HttpError(e) => e.status(),
      _ => None,
    }
  }
}
