//! UI utilities for terminal interaction
//!
//! This module provides the IO stream abstraction, interactive prompts
//! and progress spinners.

mod io;
mod prompt;
mod spinner;

pub use io::{IoStreams, SharedBuffer};
pub use prompt::{DialoguerPrompter, Prompter};
pub use spinner::{clear_spinner, create_spinner};
