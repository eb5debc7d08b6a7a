//! Ledger entry data structures and tabular loading

mod data;
pub mod loader;

pub use data::Entry;
pub use loader::{load_entries, load_entries_from_reader};
