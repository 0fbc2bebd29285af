#![forbid(unsafe_code)]

pub mod app_services;
pub mod chorus;
pub mod content_service;
pub mod error;
pub mod quiz_timer;

pub use app_services::{AppConfig, AppServices};
pub use chorus::ChorusPicker;
pub use content_service::{BUNDLED_CONTENT, ContentSource, load_content, parse_content};
pub use error::{AppServicesError, ContentError};
pub use quiz_timer::{DEFAULT_QUIZ_DELAY, QuizTimer};
