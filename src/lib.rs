pub mod archiver;
pub mod catalog;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod parser;
pub mod settings;
pub mod synthesizer;
pub mod telemetry;

#[cfg(test)]
mod test_support;
