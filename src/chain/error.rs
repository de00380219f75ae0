use crate::format::Format;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveErrorKind {
    #[error("Format is not supported: {0}")]
    UnsupportedFormat(Format),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{kind}")]
pub struct ResolveError {
    #[source]
    pub kind: ResolveErrorKind,
    /// Number of nodes that declined the request before the chain ran out.
    pub visited: usize,
}
