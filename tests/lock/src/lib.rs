//! Shared helpers for the lock tests: an explicit weighted graph problem, an
//! endless implicit chain and grid utilities used as an independent oracle.

pub mod endless_chain;
