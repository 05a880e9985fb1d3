//! Yandex.Practicum homework review API adapter.
//!
//! Implements [`HomeworkSource`](crate::port::HomeworkSource) on top of the
//! `homework_statuses` endpoint, which answers `GET ?from_date=<unix secs>`
//! with the homeworks updated since that moment.

pub mod client;
pub mod dto;
pub mod settings;

pub use client::PraktikumClient;
pub use settings::ApiConfig;
