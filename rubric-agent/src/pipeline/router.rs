//! Evaluation router: decides whether the submission gets graded.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::AgentError;
use crate::graph::Router;
use crate::llm::LlmClient;
use crate::message::Message;

use super::json::parse_llm_json;
use super::prompts::{evaluation_router_user_message, EVALUATION_ROUTER_SYSTEM_PROMPT};
use super::schema::route_query_schema;
use super::state::RubricState;
use super::{EVALUATE, EVALUATION_ROUTER, SKIP};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum BinaryScore {
    Yes,
    No,
}

#[derive(Debug, Deserialize)]
struct RouteQuery {
    binary_score: BinaryScore,
}

/// Routes to `"evaluate"` only when the parsed input has a non-blank submission
/// and the classifier answers yes; otherwise `"skip"`.
///
/// Without a submission the classifier is never called.
pub struct EvaluationRouter {
    classifier: Arc<dyn LlmClient>,
}

impl EvaluationRouter {
    pub fn new(classifier: Arc<dyn LlmClient>) -> Self {
        Self { classifier }
    }
}

#[async_trait]
impl Router<RubricState> for EvaluationRouter {
    fn id(&self) -> &str {
        EVALUATION_ROUTER
    }

    async fn route(&self, state: &RubricState) -> Result<String, AgentError> {
        let Some(input) = state.parsed_input() else {
            return Ok(SKIP.to_string());
        };
        if input.submission().is_none() {
            tracing::debug!("no student submission, skipping evaluation");
            return Ok(SKIP.to_string());
        }

        let input_json = serde_json::to_string(input)
            .map_err(|e| AgentError::Generation(format!("serialize teacher input: {}", e)))?;
        let response = self
            .classifier
            .invoke_structured(
                &[
                    Message::system(EVALUATION_ROUTER_SYSTEM_PROMPT),
                    Message::user(evaluation_router_user_message(&input_json)),
                ],
                &route_query_schema(),
            )
            .await?;
        let query: RouteQuery = parse_llm_json(EVALUATION_ROUTER, &response.content)?;
        let label = match query.binary_score {
            BinaryScore::Yes => EVALUATE,
            BinaryScore::No => SKIP,
        };
        Ok(label.to_string())
    }
}
