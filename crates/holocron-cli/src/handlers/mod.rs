//! Command handlers.
//!
//! Handlers follow the pattern `pub async fn execute(...) -> Result<()>`
//! (or sync when no I/O is awaited): parse CLI input, call into the library
//! crates, format output for the terminal.

pub mod import_customers;
pub mod serve;
