//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod process;
pub mod utils;

// Re-export main command functions
pub use process::{collect_inputs, execute_process, validate_args, ProcessArgs};
pub use utils::{display_smells, display_version};
