pub mod app;
pub mod cli;
pub mod logging;
pub mod presentation;
pub mod terminal;

pub use app::{run_interactive, run_once};
pub use cli::Cli;
