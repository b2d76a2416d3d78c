pub mod runner;

pub use runner::{run_eval_mode, run_interactive_mode};
