use crate::chain::{Chain, ResolveError};
use crate::format::Format;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WriteError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error("Failed to write rendered output: {0}")]
    Io(#[from] std::io::Error),
}

/// Opens `path` for appending, creating it if it does not exist yet.
pub fn open_append(path: impl AsRef<Path>) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Resolves `format` on `chain` and appends the rendering to `out` with no
/// separator or trailing newline.
pub fn write_as<W: Write>(out: &mut W, chain: Chain, format: Format) -> Result<(), WriteError> {
    let renderer = chain.resolve(format)?;
    let rendered = renderer.render();
    out.write_all(rendered.as_bytes())?;
    tracing::info!(%format, bytes = rendered.len(), "appended rendering");
    Ok(())
}

pub fn write_as_html<W: Write>(out: &mut W, chain: Chain) -> Result<(), WriteError> {
    write_as(out, chain, Format::Html)
}

pub fn write_as_json<W: Write>(out: &mut W, chain: Chain) -> Result<(), WriteError> {
    write_as(out, chain, Format::Json)
}

pub fn write_as_text<W: Write>(out: &mut W, chain: Chain) -> Result<(), WriteError> {
    write_as(out, chain, Format::Text)
}
