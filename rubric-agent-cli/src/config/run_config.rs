//! Run config: service config from env plus CLI-only switches.
//!
//! Interacts with [`RunOptions`](super::RunOptions), [`run_with_config`](crate::run) and
//! rubric-agent's `RubricConfig`, `ChatOpenAI`.

use rubric_agent::RubricConfig;

use super::RunOptions;

/// Error type used for config loading and runs.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Run config: env-derived [`RubricConfig`] plus per-invocation switches.
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Model, API base/key, temperature, step budget, log file.
    pub service: RubricConfig,
    /// Thread id the checkpoints of this run are saved under.
    pub thread_id: Option<String>,
    /// Print the final state as pretty JSON instead of headed sections.
    pub json: bool,
    /// Print a progress line to stderr as each node completes.
    pub stream: bool,
    /// Attach node logging and lower the log filter to debug.
    pub verbose: bool,
}

impl RunConfig {
    /// Fill config from env vars (and .env). Requires `dotenv::dotenv().ok()` or load inside `run()`.
    ///
    /// `OPENAI_API_KEY` required; everything else has defaults (see `RubricConfig::from_env`).
    pub fn from_env() -> Result<Self, Error> {
        let service = RubricConfig::from_env()?;
        if service.openai_api_key.is_none() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "OPENAI_API_KEY is not set; please configure it in .env",
            )
            .into());
        }
        Ok(Self::from_service(service))
    }

    /// Wraps an already loaded service config with default CLI switches.
    pub fn from_service(service: RubricConfig) -> Self {
        Self {
            service,
            thread_id: None,
            json: false,
            stream: false,
            verbose: false,
        }
    }

    /// Apply optional overrides from `RunOptions` to this config.
    ///
    /// Only set fields in `options` override; boolean switches are turned on, never off.
    pub fn apply_options(&mut self, options: &RunOptions) {
        if let Some(tid) = &options.thread_id {
            self.thread_id = Some(tid.clone());
        }
        if let Some(budget) = options.step_budget {
            self.service.step_budget = budget;
        }
        if let Some(model) = &options.model {
            self.service.openai_model = model.clone();
        }
        if options.json {
            self.json = true;
        }
        if options.stream {
            self.stream = true;
        }
        if options.verbose {
            self.verbose = true;
        }
    }
}
