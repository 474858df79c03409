//! Shared domain types and configuration for FinThesis.
//!
//! Holds the ingested [`Document`], the [`StructuredThesis`] payload, the
//! [`CategoryTable`] taxonomy the thesis scorer ranks against, and the
//! environment-driven [`AppConfig`].

pub mod app_config;
pub mod categories;
pub mod config;
pub mod document;
pub mod error;
pub mod thesis;

pub use app_config::{
    AppConfig, DEFAULT_LOG_LEVEL, DEFAULT_MAX_SENTENCES, DEFAULT_MIN_SENTENCE_WORDS,
    DEFAULT_OVERLAP_THRESHOLD, DEFAULT_TOP_N,
};
pub use categories::{
    load_category_table, CategoryEntry, CategoryGroup, CategoryGroupKind, CategoryTable,
};
pub use config::{load_app_config, load_app_config_from_env, validate_overlap_threshold};
pub use document::Document;
pub use error::ConfigError;
pub use thesis::StructuredThesis;
