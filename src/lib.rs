pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod service;
pub mod store;

pub use error::RosterError;
pub use logger::in_memory::InMemoryActivityLog;
pub use service::RosterService;
pub use store::csv_file::CsvFileStore;

#[cfg(test)]
mod tests;
