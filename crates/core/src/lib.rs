//! Domain types and pure transform rules shared by the storage and HTTP
//! layers. Nothing in this crate performs I/O.

pub mod choices;
pub mod error;
pub mod forms;
pub mod listing;
pub mod schedule;
pub mod search;
pub mod types;
