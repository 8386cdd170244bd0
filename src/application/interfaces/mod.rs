mod generation_client;
mod interaction_store;

pub use generation_client::*;
pub use interaction_store::*;
