pub mod config;
pub mod error;
pub mod intake;
pub mod qualification;
pub mod telemetry;
