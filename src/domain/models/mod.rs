mod generation;
mod log_entry;

pub use generation::*;
pub use log_entry::*;
