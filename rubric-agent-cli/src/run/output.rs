//! Rendering the final state for the terminal.

use rubric_agent::RubricState;

use crate::config::RunConfig;

use super::Error;

/// Headed markdown sections for every non-empty output field.
pub fn format_state(state: &RubricState) -> String {
    [
        ("Rubric", &state.rubric),
        ("Evaluation", &state.evaluation),
        ("Feedback", &state.feedback),
        ("Report", &state.report),
    ]
    .iter()
    .filter(|(_, body)| !body.trim().is_empty())
    .map(|(title, body)| format!("## {}\n\n{}\n", title, body.trim()))
    .collect::<Vec<_>>()
    .join("\n")
}

/// Final state as pretty JSON.
pub fn format_json(state: &RubricState) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(state)?)
}

/// Final state rendered the way `config` asks: JSON with `json`, headed sections otherwise.
pub fn render_output(config: &RunConfig, state: &RubricState) -> Result<String, Error> {
    if config.json {
        format_json(state)
    } else {
        Ok(format_state(state))
    }
}
