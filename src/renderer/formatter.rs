use super::Renderer;
use crate::chain::{ResolveError, ResolveErrorKind};

pub trait RendererFormatter {
    fn format(&self, renderer: &Renderer) -> String;
    fn format_error(&self, error: &ResolveError) -> String;
}

pub struct DebugFormatter;

impl RendererFormatter for DebugFormatter {
    fn format(&self, renderer: &Renderer) -> String {
        format!("{renderer:?}")
    }

    fn format_error(&self, error: &ResolveError) -> String {
        format!("{error:?}")
    }
}

pub struct BasicFormatter;

impl RendererFormatter for BasicFormatter {
    fn format(&self, renderer: &Renderer) -> String {
        renderer.render()
    }

    fn format_error(&self, error: &ResolveError) -> String {
        match error.kind {
            ResolveErrorKind::UnsupportedFormat(format) => {
                format!("Format is not supported: {format}")
            }
        }
    }
}
