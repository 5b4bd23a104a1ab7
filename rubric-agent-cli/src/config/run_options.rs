//! Optional overrides for a run (CLI args or programmatic).
//!
//! Used by [`RunConfig::apply_options`](super::RunConfig::apply_options) and
//! [`run_with_options`](crate::run_with_options).

/// Optional overrides: thread id, step budget, model and output switches.
///
/// All fields are optional; only set fields override the base config (from env).
#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    pub thread_id: Option<String>,
    /// Override STEP_BUDGET.
    pub step_budget: Option<usize>,
    /// Override OPENAI_MODEL.
    pub model: Option<String>,
    pub json: bool,
    pub stream: bool,
    pub verbose: bool,
}
