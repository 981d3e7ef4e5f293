const MAX_FIELD_CHARS: usize = 200;

pub struct InputSanitizer;

fn unprintable_to_space(c: char) -> char {
    if c.is_control() {
        ' '
    } else {
        c
    }
}

impl InputSanitizer {
    /// Replaces control characters in a tool name with spaces. Names reach
    /// the prompt at full length.
    pub fn clean_tool_name(name: &str) -> String {
        name.chars()
            .map(unprintable_to_space)
            .collect::<String>()
            .trim()
            .to_string()
    }

    /// Cleans every entry in place. Blank entries are already gone by the
    /// time tools get here, so nothing is dropped.
    pub fn clean_tools(tools: Vec<String>) -> Vec<String> {
        tools.iter().map(|tool| Self::clean_tool_name(tool)).collect()
    }

    /// Single-line company fields (name, email): control characters become
    /// spaces, length is capped.
    pub fn clean_field(value: &str) -> String {
        value
            .chars()
            .map(unprintable_to_space)
            .take(MAX_FIELD_CHARS)
            .collect::<String>()
            .trim()
            .to_string()
    }
}
