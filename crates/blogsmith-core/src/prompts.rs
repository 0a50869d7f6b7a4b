//! Prompt templates sent to the generation provider.

/// Instructions wrapped around the user's topic.
pub const BLOG_POST: &str = "Write a comprehensive but concise blog post about: {{topic}}

Structure:
- Engaging introduction
- 2-3 main points with subheadings
- Practical examples
- Conclusion

Use markdown formatting with ## headings. Keep it under 500 words.";

/// Replace `{{key}}` placeholders in a template string.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        result = result.replace(&format!("{{{{{}}}}}", key), value);
    }
    result
}

/// The full prompt for a blog post about `topic`.
pub fn blog_post(topic: &str) -> String {
    render(BLOG_POST, &[("topic", topic)])
}
