//! Application services — the use-case layer.

pub mod datetime_service;

pub use datetime_service::DateTimeService;
