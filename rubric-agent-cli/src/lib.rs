//! rubric-agent-cli library: reusable run logic for the `rubric-agent` binary.
//!
//! Reads config from .env / environment, builds the grading pipeline and runs it
//! once, returns the final state.
//!
//! ## Usage
//!
//! ```rust,no_run,ignore
//! let state = rubric_agent_cli::run("6학년 환경 논제 글쓰기 루브릭").await?;
//! println!("{}", rubric_agent_cli::format_state(&state));
//! ```

mod config;
mod input;
mod run;

pub use config::{Error, RunConfig, RunOptions};
pub use input::resolve_input;
pub use rubric_agent::RubricState;
pub use run::{
    format_json, format_state, render_output, run, run_and_render, run_with_config,
    run_with_options,
};

#[cfg(test)]
mod tests;
