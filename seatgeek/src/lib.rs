// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
pub mod client;
pub mod config;
pub mod query;

pub use client::SeatGeekClient;
pub use config::Credentials;
pub use error::Error;
pub use query::{Endpoint, Filter};
