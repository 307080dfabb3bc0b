//! Things that only run on the server (reading the config, setting up logging, reacting to
//! signals)
pub mod config;
pub mod logging;
pub mod signal_handler;
