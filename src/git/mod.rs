pub mod blame;
pub mod command;
pub mod config;

pub use blame::{get_blame, parse_blame, YOU};
pub use config::current_user;
