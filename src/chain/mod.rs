mod builder;
mod error;

pub use builder::build_chain;
pub use error::{ResolveError, ResolveErrorKind};

use crate::format::Format;
use crate::renderer::Renderer;
use compact_str::CompactString;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeRef(u32);

/// A link in the chain. It claims exactly one format and otherwise hands the
/// request to `next`.
#[derive(Debug, Clone)]
pub struct FormatNode {
    pub format: Format,
    pub payload: CompactString,
    pub next: Option<NodeRef>,
}

impl FormatNode {
    pub fn new(format: Format, payload: impl Into<CompactString>, next: Option<NodeRef>) -> Self {
        Self {
            format,
            payload: payload.into(),
            next,
        }
    }

    pub fn claims(&self, format: Format) -> bool {
        self.format == format
    }
}

#[derive(Debug, Clone, Default)]
pub struct IncompleteChain {
    nodes: Vec<FormatNode>,
}

impl IncompleteChain {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn push(&mut self, node: FormatNode) -> NodeRef {
        self.nodes.push(node);
        NodeRef(self.nodes.len() as u32 - 1)
    }

    pub fn get_node(&self, node: &NodeRef) -> Option<&FormatNode> {
        self.nodes.get(node.0 as usize)
    }
}

/// A finished chain. Every link points at a node pushed before it, so walking
/// from the head always terminates.
#[derive(Debug, Clone)]
pub struct Chain {
    nodes: Vec<FormatNode>,
    head: NodeRef,
}

impl Chain {
    pub fn new(chain: IncompleteChain, head: NodeRef) -> Option<Self> {
        if !(0..chain.nodes.len()).contains(&(head.0 as usize)) {
            return None;
        }
        let links_backwards = chain
            .nodes
            .iter()
            .enumerate()
            .all(|(index, node)| node.next.map_or(true, |next| (next.0 as usize) < index));
        if !links_backwards {
            return None;
        }
        Some(Self {
            nodes: chain.nodes,
            head,
        })
    }

    pub fn get_head(&self) -> &FormatNode {
        &self.nodes[self.head.0 as usize]
    }

    /// Formats claimed along the chain, head first.
    pub fn formats(&self) -> Vec<Format> {
        self.walk().map(|index| self.nodes[index].format).collect()
    }

    /// Number of nodes reachable from the head.
    pub fn len(&self) -> usize {
        self.walk().count()
    }

    fn walk(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(Some(self.head.0 as usize), |&index| {
            self.nodes[index].next.map(|next| next.0 as usize)
        })
    }

    /// Hands `format` down the chain. The first node claiming it produces the
    /// renderer and the rest of the chain is dropped unvisited.
    pub fn resolve(self, format: Format) -> Result<Renderer, ResolveError> {
        let mut visited = 0;
        let mut current = Some(self.head.0 as usize);
        while let Some(index) = current {
            let node = &self.nodes[index];
            if node.claims(format) {
                tracing::debug!(%format, visited, "node claimed format");
                let mut nodes = self.nodes;
                let node = nodes.swap_remove(index);
                return Ok(Renderer::new(node.format, node.payload));
            }
            tracing::debug!(node = %node.format, requested = %format, "delegating to next node");
            visited += 1;
            current = node.next.map(|next| next.0 as usize);
        }
        tracing::debug!(%format, visited, "chain exhausted");
        Err(ResolveError {
            kind: ResolveErrorKind::UnsupportedFormat(format),
            visited,
        })
    }
}
