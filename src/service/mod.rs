pub mod audit;
pub mod log_channel;
pub mod snapshot;
