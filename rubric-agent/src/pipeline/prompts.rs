//! System prompts and user-message templates for each generation step.
//!
//! Markdown outputs are requested in Korean and as tables, matching how teachers
//! read the results.

use super::state::ParsedInput;

pub const INPUT_PARSER_SYSTEM_PROMPT: &str = r#"You are a helpful assistant that parses the input from the teacher and returns a structured output.
Reply with a single JSON object and nothing else, using exactly these keys:
{"grade_level": <integer school grade level>,
 "topic": "<detailed task, e.g. essay writing, graph interpretation>",
 "objective": "<assessment purpose>",
 "name": "<student name, or null if not given>",
 "student_submission": "<the submitted assignment verbatim, or null if none>"}"#;

pub const RUBRIC_SYSTEM_PROMPT: &str = r#"You are an expert in educational assessment and rubric design in Korean.
Your role is to design rubrics for evaluating assignments in elementary, middle, and high schools.

Rules:
1. You must reflect the provided topic, objective and grade level.
2. The rubric must consist of 3 ~ 6 criteria.
3. Avoid vague or speculative expressions such as "worked hard" or "tried their best."
4. Provide simple evidence_anchors (observation points) to guide teachers on what to look for in student work.
5. Do not make assumptions about student background or personal information.
6. Use language that is age-appropriate for the student's grade level, and free of bias or discriminatory expressions.
7. Keep the rubric in Korean and make it in a table format for better readability."#;

pub const EVALUATION_ROUTER_SYSTEM_PROMPT: &str = r#"Your task is to decide whether a student's evaluation is required.
- If the teacher input contains a student submission, answer "yes".
- If there is no student submission, answer "no".
- If there is a student submission but the teacher does not request an evaluation, answer "no".
Reply with a single JSON object and nothing else: {"binary_score": "yes"} or {"binary_score": "no"}."#;

pub const EVALUATION_SYSTEM_PROMPT: &str = r#"You are an expert in educational assessment and rubric design in Korean.
You are given a rubric and a student's submission.
You need to evaluate the student's submission based on the provided rubric.
You need to evaluate each item in the rubric.
You shouldn't use any other information than the rubric and the student's submission.
Keep the evaluation in Korean and make it in a table format for better readability."#;

pub const FEEDBACK_SYSTEM_PROMPT: &str = r#"You are an expert in educational feedback in Korean.
You are given a student's submission, rubric and an evaluation.
You need to generate a feedback for the student's submission based on the provided rubric and evaluation.
You shouldn't use any other information than the rubric, evaluation and the student's submission.
Keep the feedback in Korean and make it in a table format for better readability."#;

pub const REPORT_SYSTEM_PROMPT: &str = r#"You are an expert in educational reporting in Korean.
You are given a rubric, an evaluation, and feedback.
Your task is to generate a comprehensive report for the student's submission.

Rules:
1. Use only the provided rubric, evaluation, and feedback. Do not invent or assume additional information.
2. The report must be written in Korean.
3. Present the report in a clear table format for readability.
- Include one row per rubric criterion, showing: [Criterion Name | Level & Score | Evidence | Feedback Summary].
- Add a final row/section for [Total Score & Overall Feedback].
4. After the table, provide two short summaries:
- For the teacher: concise, objective analysis of performance.
- For the student: encouraging and specific guidance (Glow, Grow, Next Steps).
5. Keep language age-appropriate and free from bias or speculation."#;

pub fn rubric_user_message(input: &ParsedInput) -> String {
    format!(
        "Generate a detailed rubric in markdown format for the following information:\n\
         topic: {}\n\
         objective: {}\n\
         grade Level: {}\n\
         Provide criteria, levels, and sample answers.",
        input.topic, input.objective, input.grade_level
    )
}

pub fn evaluation_router_user_message(input_json: &str) -> String {
    format!("Here is the teacher's input: {}", input_json)
}

pub fn evaluation_user_message(rubric: &str, input: &ParsedInput, submission: &str) -> String {
    format!(
        "Generate a evaluation in markdown format for the following information:\n\
         rubric: {}\n\
         name: {}\n\
         grade level: {}\n\
         student submission: {}\n\
         Provide criteria, levels, and sample answers.",
        rubric,
        input.name_or_blank(),
        input.grade_level,
        submission
    )
}

pub fn feedback_user_message(rubric: &str, evaluation: &str) -> String {
    format!(
        "Generate a feedback in markdown format for the following information:\n\
         rubric: {}\n\
         evaluation: {}\n",
        rubric, evaluation
    )
}

pub fn report_user_message(input: &ParsedInput, rubric: &str, evaluation: &str, feedback: &str) -> String {
    format!(
        "Generate a report in markdown format for the following information:\n\
         name: {}\n\
         grade level: {}\n\
         rubric: {}\n\
         evaluation: {}\n\
         feedback: {}\n",
        input.name_or_blank(),
        input.grade_level,
        rubric,
        evaluation,
        feedback
    )
}
