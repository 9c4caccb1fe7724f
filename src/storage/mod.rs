// storage/mod.rs
// Database access for the exporter

pub mod catalog;
pub mod connection;
#[cfg(test)]
pub mod test_helpers;

// Re-export commonly used items
pub use catalog::list_tables;
pub use connection::open_connection;
