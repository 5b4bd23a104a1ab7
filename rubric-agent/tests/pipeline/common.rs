//! Stub generation clients for pipeline tests.

use std::sync::Arc;

use rubric_agent::{MockLlm, PipelineLlms};

pub const TEACHER_INPUT: &str =
    "6학년 환경 논제 글쓰기 평가 루브릭을 만들고, 다음 학생 글을 평가해 주세요: 플라스틱 사용을 줄여야 한다.";

pub const SUBMISSION: &str = "플라스틱 사용을 줄여야 한다.";

/// Parser reply for the environment-essay request, with or without a submission.
pub fn parser_reply(submission: Option<&str>) -> String {
    serde_json::json!({
        "grade_level": 6,
        "topic": "환경 논제 글쓰기",
        "objective": "논설문 작성 능력 평가",
        "name": "민지",
        "student_submission": submission,
    })
    .to_string()
}

/// One mock per step so tests can count calls individually.
pub struct Stubs {
    pub parser: Arc<MockLlm>,
    pub rubric: Arc<MockLlm>,
    pub classifier: Arc<MockLlm>,
    pub evaluation: Arc<MockLlm>,
    pub feedback: Arc<MockLlm>,
    pub report: Arc<MockLlm>,
}

impl Stubs {
    /// Stubs answering RUBRIC_X / EVAL_Y / FEEDBACK_Z / REPORT_W; classifier says `score`.
    pub fn new(submission: Option<&str>, score: &str) -> Self {
        Self {
            parser: Arc::new(MockLlm::new(parser_reply(submission))),
            rubric: Arc::new(MockLlm::new("RUBRIC_X")),
            classifier: Arc::new(MockLlm::new(format!(r#"{{"binary_score":"{}"}}"#, score))),
            evaluation: Arc::new(MockLlm::new("EVAL_Y")),
            feedback: Arc::new(MockLlm::new("FEEDBACK_Z")),
            report: Arc::new(MockLlm::new("REPORT_W")),
        }
    }

    pub fn llms(&self) -> PipelineLlms {
        PipelineLlms {
            parser: self.parser.clone(),
            rubric: self.rubric.clone(),
            classifier: self.classifier.clone(),
            evaluation: self.evaluation.clone(),
            feedback: self.feedback.clone(),
            report: self.report.clone(),
        }
    }
}
