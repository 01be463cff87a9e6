//! model::prompt
//!
//! Prompt construction for structure requests.

/// Build the prompt asking the service for a complete project structure.
///
/// The snippet and description are embedded verbatim. The instructions pin
/// the exact response shape; the minimum file set mirrors what the pipeline
/// publishes (frontend entry, backend entry, dependency manifest, README).
pub fn structure_prompt(code_snippet: &str, description: &str) -> String {
    format!(
        "You are generating a complete project repository.\n\
         \n\
         Project description:\n\
         {description}\n\
         \n\
         Code snippet:\n\
         {code_snippet}\n\
         \n\
         Respond with ONLY a valid JSON document of exactly this shape, with \
         no surrounding prose and no markdown fences:\n\
         {{\"files\": [{{\"path\": \"relative/path\", \"content\": \"full file content\"}}]}}\n\
         \n\
         Requirements:\n\
         - Include at minimum: a frontend entry file, a backend entry file, \
         a dependency manifest, and a README.md summarizing the description \
         and snippet above.\n\
         - Place the given code snippet inside the file matching its \
         apparent language.\n\
         - Every path must be relative; every content value must be the \
         complete file text."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_inputs_verbatim() {
        let prompt = structure_prompt("print('x')", "a tiny printer");
        assert!(prompt.contains("print('x')"));
        assert!(prompt.contains("a tiny printer"));
    }

    #[test]
    fn pins_response_shape() {
        let prompt = structure_prompt("", "");
        assert!(prompt.contains(r#"{"files": [{"path""#));
        assert!(prompt.contains("README.md"));
        assert!(prompt.contains("no markdown fences"));
    }
}
