//! Run entry points: run with default config, run_with_config, run_with_options,
//! or run_and_render for the binary.
//!
//! Re-exports [`run`], [`run_with_config`], [`run_with_options`], [`run_and_render`]
//! and output helpers.

pub use crate::config::Error;

mod output;
mod run_pipeline;

use std::sync::Arc;

use rubric_agent::{ChatOpenAI, PipelineLlms, RubricState};

use crate::config::{RunConfig, RunOptions};

pub use output::{format_json, format_state, render_output};
pub(crate) use run_pipeline::run_pipeline;

/// Run the pipeline with default config (from .env), returns final state.
///
/// Loads `.env` internally, then calls `run_with_config`.
pub async fn run(teacher_input: &str) -> Result<RubricState, Error> {
    dotenv::dotenv().ok();
    let config = RunConfig::from_env()?;
    run_with_config(&config, teacher_input).await
}

fn config_with_options(options: &RunOptions) -> Result<RunConfig, Error> {
    dotenv::dotenv().ok();
    let mut config = RunConfig::from_env()?;
    config.apply_options(options);
    Ok(config)
}

/// Run with config from env and optional overrides (e.g. from CLI flags).
pub async fn run_with_options(
    teacher_input: &str,
    options: &RunOptions,
) -> Result<RubricState, Error> {
    let config = config_with_options(options)?;
    run_with_config(&config, teacher_input).await
}

/// Like [`run_with_options`], then renders the final state per `RunOptions::json`.
pub async fn run_and_render(teacher_input: &str, options: &RunOptions) -> Result<String, Error> {
    let config = config_with_options(options)?;
    let state = run_with_config(&config, teacher_input).await?;
    render_output(&config, &state)
}

/// Run with an explicit config against the configured OpenAI-compatible backend.
pub async fn run_with_config(config: &RunConfig, teacher_input: &str) -> Result<RubricState, Error> {
    let llm = Arc::new(ChatOpenAI::from_config(&config.service));
    run_pipeline(config, PipelineLlms::shared(llm), teacher_input).await
}
