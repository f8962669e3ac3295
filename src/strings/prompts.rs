use crate::strings::logs;

/// A builder for rendering prompts with context.
pub struct PromptRenderer<'a> {
    template: &'a str,
    replacements: Vec<(&'a str, String)>,
}

impl<'a> PromptRenderer<'a> {
    pub fn new(template: &'a str) -> Self {
        Self {
            template,
            replacements: Vec::new(),
        }
    }

    pub fn set(mut self, key: &'a str, value: impl Into<String>) -> Self {
        self.replacements.push((key, value.into()));
        self
    }

    pub fn render(self) -> String {
        let mut result = self.template.to_string();
        for (key, value) in self.replacements {
            result = result.replace(key, &value);
        }

        for placeholder in unreplaced_placeholders(&result) {
            tracing::error!("{}", logs::unreplaced_placeholder(placeholder));
        }

        result
    }
}

/// Every `{{KEY}}` still present in `text`, in order of appearance.
fn unreplaced_placeholders(text: &str) -> Vec<&str> {
    let mut found = Vec::new();
    let mut rest = text;
    while let Some(start) = rest.find("{{")
        && let Some(len) = rest[start..].find("}}")
    {
        found.push(&rest[start..start + len + 2]);
        rest = &rest[start + len + 2..];
    }
    found
}

pub const MENU_GUIDELINES_TEMPLATE: &str = include_str!("../../prompts/menu_guidelines.md");
pub const RED_FLAGS_TEMPLATE: &str = include_str!("../../prompts/red_flags.md");
pub const DAILY_ANALYSIS_TEMPLATE: &str = include_str!("../../prompts/daily_analysis.md");
pub const WEEKLY_PLANNING_TEMPLATE: &str = include_str!("../../prompts/weekly_planning.md");

fn render_guidance(template: &str) -> String {
    PromptRenderer::new(template)
        .set("{{MENU_GUIDELINES}}", MENU_GUIDELINES_TEMPLATE.trim_end())
        .set("{{RED_FLAGS}}", RED_FLAGS_TEMPLATE.trim_end())
        .render()
        .trim_end()
        .to_string()
}

/// Instructions for picking today's best option.
pub fn daily_analysis_instructions() -> String {
    render_guidance(DAILY_ANALYSIS_TEMPLATE)
}

/// Instructions for planning the work week.
pub fn weekly_planning_instructions() -> String {
    render_guidance(WEEKLY_PLANNING_TEMPLATE)
}

/// Prompt body: date context followed by guidance, no live menu data.
pub fn guidance_prompt(date_context: &str, instructions: &str) -> String {
    format!("{date_context}\n\n{instructions}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_renderer_basic() {
        let renderer = PromptRenderer::new("Hello {{NAME}}").set("{{NAME}}", "World");
        assert_eq!(renderer.render(), "Hello World");
    }

    #[test]
    fn test_prompt_renderer_missing_key() {
        // Logs an error but leaves the text alone.
        let renderer = PromptRenderer::new("Hello {{MISSING}}");
        assert_eq!(renderer.render(), "Hello {{MISSING}}");
    }

    #[test]
    fn test_unreplaced_placeholders_are_listed() {
        let text = "{{MENU_GUIDELINES}} and {{RED_FLAGS}}, but not {single}";
        assert_eq!(
            unreplaced_placeholders(text),
            vec!["{{MENU_GUIDELINES}}", "{{RED_FLAGS}}"]
        );
        assert!(unreplaced_placeholders("plain text {{ unterminated").is_empty());
        assert_eq!(
            logs::unreplaced_placeholder("{{RED_FLAGS}}"),
            "Unreplaced prompt placeholder {{RED_FLAGS}}"
        );
    }

    #[test]
    fn test_daily_instructions_are_fully_rendered() {
        let text = daily_analysis_instructions();
        assert!(text.starts_with("# AI-Powered Menu Analysis"));
        assert!(text.contains("### Health Priority (Most Important)"));
        assert!(text.contains("### Red Flags to Identify"));
        assert!(text.contains("**(VL) Vähälaktoosinen** = Low-lactose"));
        assert!(!text.contains("{{"));
        assert!(text.ends_with("the perfect option you'll skip!"));
    }

    #[test]
    fn test_weekly_instructions_are_fully_rendered() {
        let text = weekly_planning_instructions();
        assert!(text.starts_with("# AI-Powered Weekly Menu Planning"));
        assert!(text.contains("### Weekly Strategy"));
        assert!(text.contains("### Dietary Restriction Codes"));
        assert!(text.contains("- Deep-fried items (paistettu)"));
        assert!(!text.contains("{{"));
        assert!(text.ends_with("you'll actually eat and enjoy!"));
    }

    #[test]
    fn test_guidance_prompt_layout() {
        let prompt = guidance_prompt("Current date: today", "# Guide");
        assert_eq!(prompt, "Current date: today\n\n# Guide");
    }
}
