//! Pipeline state: the record threaded through every grading step.

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::graph::GraphState;

/// Structured fields extracted from the teacher's free-form request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedInput {
    /// School grade level. Accepts a number or a numeric string.
    #[serde(deserialize_with = "grade_level_from_number_or_text")]
    pub grade_level: i64,
    /// Detailed task, e.g. essay writing or graph interpretation.
    pub topic: String,
    /// Assessment purpose.
    pub objective: String,
    /// Student name, when the request names one.
    #[serde(default)]
    pub name: Option<String>,
    /// Submitted work, when the request includes one.
    #[serde(default)]
    pub student_submission: Option<String>,
}

impl ParsedInput {
    /// The submission if present and not blank.
    pub fn submission(&self) -> Option<&str> {
        self.student_submission
            .as_deref()
            .filter(|s| !s.trim().is_empty())
    }

    pub fn name_or_blank(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

fn grade_level_from_number_or_text<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Grade {
        Int(i64),
        Float(f64),
        Text(String),
    }

    match Grade::deserialize(deserializer)? {
        Grade::Int(n) => Ok(n),
        Grade::Float(f) if f.fract() == 0.0 => Ok(f as i64),
        Grade::Float(f) => Err(de::Error::custom(format!("grade_level {} is not a whole number", f))),
        Grade::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("grade_level {:?} is not a number", s))),
    }
}

/// Teacher input: the raw request until the parser runs, the parsed fields after.
///
/// Serialized untagged: a JSON string when raw, an object when parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TeacherInput {
    Raw(String),
    Parsed(ParsedInput),
}

impl Default for TeacherInput {
    fn default() -> Self {
        TeacherInput::Raw(String::new())
    }
}

/// State for the grading graph. Fields are filled in pipeline order; an empty
/// string means "not produced yet".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RubricState {
    pub teacher_input: TeacherInput,
    pub rubric: String,
    pub evaluation: String,
    pub feedback: String,
    pub report: String,
}

impl RubricState {
    /// Initial state for a run: only the raw request is set.
    pub fn new(teacher_input: impl Into<String>) -> Self {
        Self {
            teacher_input: TeacherInput::Raw(teacher_input.into()),
            ..Default::default()
        }
    }

    /// Parsed input, once the parser step has run.
    pub fn parsed_input(&self) -> Option<&ParsedInput> {
        match &self.teacher_input {
            TeacherInput::Parsed(p) => Some(p),
            TeacherInput::Raw(_) => None,
        }
    }
}

/// Partial update returned by a pipeline node. `None` fields leave the state untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RubricUpdate {
    pub teacher_input: Option<TeacherInput>,
    pub rubric: Option<String>,
    pub evaluation: Option<String>,
    pub feedback: Option<String>,
    pub report: Option<String>,
}

impl GraphState for RubricState {
    type Update = RubricUpdate;

    fn merge(&mut self, update: RubricUpdate) {
        if let Some(v) = update.teacher_input {
            self.teacher_input = v;
        }
        if let Some(v) = update.rubric {
            self.rubric = v;
        }
        if let Some(v) = update.evaluation {
            self.evaluation = v;
        }
        if let Some(v) = update.feedback {
            self.feedback = v;
        }
        if let Some(v) = update.report {
            self.report = v;
        }
    }
}
