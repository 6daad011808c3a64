//! Journey Engine — a seven-day narrative progression for games.
//!
//! Models a short linear journey: seven days, each split into four ordered
//! stages (sunrise, noon, evening, sunset). Every stage transition emits one
//! atmospheric text line, selected from mood-keyed pools, into an append-only
//! log that a display layer renders.

pub mod core;
pub mod schema;
