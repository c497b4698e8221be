//! String template rendering.
//!
//! Plain `{{key}}` substitution over a map of values, where each value is
//! either a literal or a deferred computation evaluated with the caller's
//! positional arguments before substitution. Templates carrying logic-block
//! tags (`{%`) are handed to a full template compiler instead.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Marker that switches rendering from plain substitution to the compiler.
const LOGIC_MARKER: &str = "{%";

/// A template variable: a literal string, or a computation deferred until
/// render time and fed the positional arguments passed to [`render`].
pub enum TemplateValue {
    Literal(String),
    Deferred(Box<dyn Fn(&[String]) -> String>),
}

impl TemplateValue {
    pub fn deferred<F>(compute: F) -> Self
    where
        F: Fn(&[String]) -> String + 'static,
    {
        TemplateValue::Deferred(Box::new(compute))
    }

    fn evaluate(&self, args: &[String]) -> String {
        match self {
            TemplateValue::Literal(value) => value.clone(),
            TemplateValue::Deferred(compute) => compute(args),
        }
    }
}

impl From<&str> for TemplateValue {
    fn from(value: &str) -> Self {
        TemplateValue::Literal(value.to_string())
    }
}

impl From<String> for TemplateValue {
    fn from(value: String) -> Self {
        TemplateValue::Literal(value)
    }
}

/// Render a template against the given variables.
///
/// Deferred values are evaluated eagerly, before any substitution happens.
/// Plain templates get `{{key}}` replacement; templates containing `{%` are
/// compiled with full logic support, and compiler failures surface as
/// `template.render_failed`.
pub fn render(
    template: &str,
    vars: &HashMap<String, TemplateValue>,
    args: &[String],
) -> Result<String> {
    let evaluated: HashMap<String, String> = vars
        .iter()
        .map(|(key, value)| (key.clone(), value.evaluate(args)))
        .collect();

    if template.contains(LOGIC_MARKER) {
        return render_logic(template, &evaluated);
    }

    let mut result = template.to_string();
    for (key, value) in &evaluated {
        let placeholder = format!("{{{{{}}}}}", key);
        result = result.replace(&placeholder, value);
    }

    Ok(result)
}

fn render_logic(template: &str, vars: &HashMap<String, String>) -> Result<String> {
    let mut context = tera::Context::new();
    for (key, value) in vars {
        context.insert(key, value);
    }

    tera::Tera::one_off(template, &context, false)
        .map_err(|e| Error::template_render_failed(e.to_string()))
}

/// Check whether a template references the given key.
pub fn is_present(template: &str, key: &str) -> bool {
    let placeholder = format!("{{{{{}}}}}", key);
    template.contains(&placeholder)
}
