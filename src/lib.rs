//! A small retail-banking ledger where a central registry owns validated
//! accounts and applies every balance change atomically.

pub mod app;
pub mod domain;
pub mod engine;
pub mod io;
pub mod prelude;
pub mod registry;
pub mod storage;
pub mod streaming;
