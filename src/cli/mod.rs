//! Command implementations behind the `curconv` subcommands

pub mod convert;
pub mod rates;
pub mod setup;
pub mod ui;
