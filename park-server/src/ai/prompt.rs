//! Prompt templates
//!
//! Two placeholder forms are understood:
//! - `{{{field}}}` inserts the value of `field` verbatim
//! - `{{media url=field}}` embeds the data URI in `field` as an inline media part

use serde_json::Value;
use shared::models::DataUri;

use super::error::FlowError;
use super::provider::PromptPart;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptTemplate {
    pub name: &'static str,
    pub template: &'static str,
}

impl PromptTemplate {
    pub const fn new(name: &'static str, template: &'static str) -> Self {
        Self { name, template }
    }

    /// Render against a JSON object of camelCase fields
    pub fn render(&self, vars: &Value) -> Result<Vec<PromptPart>, FlowError> {
        let mut parts = Vec::new();
        let mut text = String::new();
        let mut rest = self.template;

        while let Some(start) = rest.find("{{") {
            text.push_str(&rest[..start]);
            let tail = &rest[start..];

            if let Some(inner) = tail.strip_prefix("{{{") {
                let end = inner
                    .find("}}}")
                    .ok_or_else(|| self.error("unterminated '{{{' placeholder"))?;
                text.push_str(&self.lookup_text(vars, inner[..end].trim())?);
                rest = &inner[end + 3..];
                continue;
            }

            let inner = &tail[2..];
            let end = inner
                .find("}}")
                .ok_or_else(|| self.error("unterminated '{{' placeholder"))?;
            let tag = inner[..end].trim();
            let field = tag
                .strip_prefix("media")
                .map(str::trim_start)
                .and_then(|t| t.strip_prefix("url="))
                .map(str::trim)
                .ok_or_else(|| self.error(&format!("unknown tag '{{{{{tag}}}}}'")))?;

            let uri = self.lookup_str(vars, field)?;
            let media = DataUri::parse(uri)
                .map_err(|e| self.error(&format!("field '{field}': {e}")))?;
            if !text.is_empty() {
                parts.push(PromptPart::Text(std::mem::take(&mut text)));
            }
            parts.push(PromptPart::Media {
                mime_type: media.mime_type,
                data: media.data,
            });
            rest = &inner[end + 2..];
        }

        text.push_str(rest);
        if !text.is_empty() {
            parts.push(PromptPart::Text(text));
        }
        Ok(parts)
    }

    fn lookup_str<'a>(&self, vars: &'a Value, field: &str) -> Result<&'a str, FlowError> {
        vars.get(field)
            .and_then(Value::as_str)
            .ok_or_else(|| self.error(&format!("missing string field '{field}'")))
    }

    fn lookup_text(&self, vars: &Value, field: &str) -> Result<String, FlowError> {
        match vars.get(field) {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(Value::Number(n)) => Ok(n.to_string()),
            Some(Value::Bool(b)) => Ok(b.to_string()),
            _ => Err(self.error(&format!("missing field '{field}'"))),
        }
    }

    fn error(&self, msg: &str) -> FlowError {
        FlowError::Prompt(format!("{}: {msg}", self.name))
    }
}
