pub mod formatter;

use crate::format::Format;
use compact_str::CompactString;

/// A payload bound to the format it renders as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Renderer {
    Text(CompactString),
    Html(CompactString),
    Json(CompactString),
}

impl Renderer {
    pub fn new(format: Format, payload: impl Into<CompactString>) -> Self {
        let payload = payload.into();
        match format {
            Format::Text => Renderer::Text(payload),
            Format::Html => Renderer::Html(payload),
            Format::Json => Renderer::Json(payload),
        }
    }

    pub fn format(&self) -> Format {
        match self {
            Renderer::Text(_) => Format::Text,
            Renderer::Html(_) => Format::Html,
            Renderer::Json(_) => Format::Json,
        }
    }

    pub fn payload(&self) -> &str {
        match self {
            Renderer::Text(payload) | Renderer::Html(payload) | Renderer::Json(payload) => {
                payload.as_str()
            }
        }
    }

    /// Renders the payload. The HTML closing tag is written as `<html/>` and
    /// JSON payloads are inserted without escaping.
    pub fn render(&self) -> String {
        match self {
            Renderer::Text(payload) => payload.to_string(),
            Renderer::Html(payload) => format!("<html>{payload}<html/>"),
            Renderer::Json(payload) => format!("{{ \"data\": \"{payload}\"}}"),
        }
    }
}

impl std::fmt::Display for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}
