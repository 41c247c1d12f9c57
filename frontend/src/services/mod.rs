pub mod logging;
pub mod scheduler;
