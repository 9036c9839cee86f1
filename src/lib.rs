//! Interactive gitmoji commit wizard: pick files, an emoji, a scope and a
//! title, and get a commit with a well-formed message.

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod services;

pub use app::App;
pub use cli::Cli;
pub use config::Config;
pub use error::{Error, Result};
