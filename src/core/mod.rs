pub mod backup;
pub mod log;
pub mod session;
pub mod summary;
