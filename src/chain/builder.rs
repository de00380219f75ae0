use super::{Chain, FormatNode, IncompleteChain};
use crate::format::Format;

/// Builds the HTML -> Text -> JSON chain, each node holding its own copy of
/// `payload`. The tail is pushed first so links always point backwards.
pub fn build_chain(payload: &str) -> Chain {
    let mut chain = IncompleteChain::new();
    let json = chain.push(FormatNode::new(Format::Json, payload, None));
    let text = chain.push(FormatNode::new(Format::Text, payload, Some(json)));
    let html = chain.push(FormatNode::new(Format::Html, payload, Some(text)));
    Chain {
        nodes: chain.nodes,
        head: html,
    }
}
