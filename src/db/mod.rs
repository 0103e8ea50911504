pub mod initialize;
pub mod log;
pub mod migrate;
pub mod stats;
pub mod store;
