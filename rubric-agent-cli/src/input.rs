//! Resolves the teacher input from `-m`, `-f` or positional words.

use super::Error;

/// Picks the teacher input: `message` wins, then the contents of `file`, then
/// `rest` joined with spaces. Blank input is an error.
pub fn resolve_input(
    message: Option<&str>,
    file: Option<&str>,
    rest: &[String],
) -> Result<String, Error> {
    let input = if let Some(m) = message {
        m.to_string()
    } else if let Some(path) = file {
        std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read teacher input from {}: {}", path, e))?
    } else {
        rest.join(" ")
    };
    let input = input.trim().to_string();
    if input.is_empty() {
        return Err("teacher input is empty; pass -m TEXT, -f FILE or TEXT...".into());
    }
    Ok(input)
}
