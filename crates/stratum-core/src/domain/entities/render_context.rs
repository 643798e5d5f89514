use std::collections::HashMap;

/// Flat data record handed to the templating collaborator.
///
/// ## Variable Naming Convention
///
/// All variables are `SCREAMING_SNAKE_CASE` and referenced in templates as
/// `{{VARIABLE}}`.
///
/// | Variable | Example |
/// |----------|---------|
/// | `PACKAGE` | "com.acme" |
/// | `MODULE` | "sales" |
/// | `MODULE_PACKAGE` | "com.acme.sales" |
/// | `NAME` | "OrderItem" |
/// | `NAME_CAMEL` | "orderItem" |
/// | `RESOURCE_PATH` | "order-items" |
/// | `ID_TYPE` | "UUID" / "Long" |
/// | `ID_STRATEGY` | "GenerationType.UUID" |
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Replace every `{{VARIABLE}}` placeholder.
    ///
    /// - `{{UNKNOWN}}` → remains as literal `{{UNKNOWN}}` (no error)
    /// - a line that becomes blank only because its placeholders were empty
    ///   is dropped, so optional imports and annotations leave no gaps
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        for line in template.split_inclusive('\n') {
            let mut rendered = line.to_string();
            for (key, value) in &self.variables {
                let placeholder = format!("{{{{{key}}}}}");
                rendered = rendered.replace(&placeholder, value);
            }
            let became_blank = !line.trim().is_empty() && rendered.trim().is_empty();
            if !became_blank {
                out.push_str(&rendered);
            }
        }
        out
    }
}
