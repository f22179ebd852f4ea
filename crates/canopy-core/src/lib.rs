pub mod config;
pub mod constants;
pub mod layout;
pub mod state;
pub mod store;

pub use config::*;
pub use constants::*;
pub use layout::*;
pub use state::*;
pub use store::*;
