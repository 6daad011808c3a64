pub mod log;
pub mod mood;
pub mod stage;
