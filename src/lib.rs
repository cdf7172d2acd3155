pub mod config;
pub mod error;
pub mod feed;
pub mod fetch;
pub mod metrics;
pub mod output;
pub mod parser;
