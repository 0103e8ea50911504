pub mod backup;
pub mod session;
pub mod stake;
