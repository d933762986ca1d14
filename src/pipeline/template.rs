/// An immutable prompt template with one named placeholder.
///
/// The placeholder is written `{variable}` in the template text and is
/// bound at construction time. Each stage's template has exactly one
/// free variable, satisfied by the prior stage's output.
#[derive(Debug, Clone, Copy)]
pub struct PromptTemplate {
    text: &'static str,
    variable: &'static str,
}

impl PromptTemplate {
    /// Create a template over `variable`.
    ///
    /// Panics if `text` does not contain the `{variable}` placeholder
    /// exactly once. Templates are fixed at compile time, so a missing
    /// or repeated placeholder is a programming error, not a runtime
    /// condition; rendering such a template would silently drop the
    /// prior stage's output.
    pub fn new(text: &'static str, variable: &'static str) -> Self {
        let template = PromptTemplate { text, variable };
        assert_eq!(
            template.placeholder_count(),
            1,
            "template must contain {{{}}} exactly once",
            variable
        );
        template
    }

    /// Name of the template's input variable
    pub fn variable(&self) -> &'static str {
        self.variable
    }

    /// Fill the placeholder with `value` and return the rendered prompt
    pub fn render(&self, value: &str) -> String {
        self.text.replace(&self.placeholder(), value)
    }

    /// Number of times the placeholder occurs in the template text.
    /// Well-formed templates have exactly one occurrence.
    pub fn placeholder_count(&self) -> usize {
        self.text.matches(&self.placeholder()).count()
    }

    fn placeholder(&self) -> String {
        format!("{{{}}}", self.variable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_value_verbatim() {
        let template = PromptTemplate::new("Create a shopping list for: {meal}.", "meal");
        let rendered = template.render("Chicken and rice");
        assert_eq!(rendered, "Create a shopping list for: Chicken and rice.");
    }

    #[test]
    fn test_render_forwards_arbitrary_text_unescaped() {
        let template = PromptTemplate::new("Ingredients: {ingredients}", "ingredients");
        let rendered = template.render("eggs, \"flour\", {milk}");
        assert!(rendered.contains("eggs, \"flour\", {milk}"));
    }

    #[test]
    #[should_panic(expected = "exactly once")]
    fn test_new_rejects_missing_placeholder() {
        PromptTemplate::new("no placeholder here", "meal");
    }

    #[test]
    #[should_panic(expected = "exactly once")]
    fn test_new_rejects_repeated_placeholder() {
        PromptTemplate::new("{list} and {list}", "list");
    }

    #[test]
    fn test_variable_name() {
        let template = PromptTemplate::new("{ingredients}", "ingredients");
        assert_eq!(template.variable(), "ingredients");
    }
}
