use proptest::prelude::*;

use format_chain::chain::{
    build_chain, Chain, FormatNode, IncompleteChain, ResolveError, ResolveErrorKind,
};
use format_chain::format::Format;
use format_chain::renderer::Renderer;

fn check(payload: &str, format: Format, expected: &str) {
    let renderer = build_chain(payload)
        .resolve(format)
        .expect("Every built chain claims all formats.");
    assert_eq!(renderer.render(), expected, "Failed to resolve {format}");
}

#[test]
fn smoke_test() {
    check("Test text", Format::Text, "Test text");
}

#[test]
fn resolves_html() {
    check("Test text", Format::Html, "<html>Test text<html/>");
}

#[test]
fn resolves_json() {
    check("Test text", Format::Json, "{ \"data\": \"Test text\"}");
}

#[test]
fn json_payload_is_not_escaped() {
    check("a\"b", Format::Json, "{ \"data\": \"a\"b\"}");
}

#[test]
fn built_chain_is_html_text_json() {
    let chain = build_chain("payload");
    assert_eq!(chain.formats(), vec![Format::Html, Format::Text, Format::Json]);
    assert_eq!(chain.len(), 3);
    assert_eq!(chain.get_head().format, Format::Html);
    assert_eq!(chain.get_head().payload, "payload");
}

#[test]
fn partial_chain_rejects_missing_format() {
    let mut incomplete = IncompleteChain::new();
    let json = incomplete.push(FormatNode::new(Format::Json, "data", None));
    let text = incomplete.push(FormatNode::new(Format::Text, "data", Some(json)));
    assert_eq!(incomplete.get_node(&text).map(|node| node.next), Some(Some(json)));
    let chain = Chain::new(incomplete, text).expect("Links point backwards.");

    let error = chain.resolve(Format::Html).unwrap_err();
    assert_eq!(
        error,
        ResolveError {
            kind: ResolveErrorKind::UnsupportedFormat(Format::Html),
            visited: 2,
        }
    );
    assert_eq!(error.to_string(), "Format is not supported: html");
}

#[test]
fn first_match_wins() {
    let mut incomplete = IncompleteChain::new();
    let tail = incomplete.push(FormatNode::new(Format::Text, "second", None));
    let head = incomplete.push(FormatNode::new(Format::Text, "first", Some(tail)));
    let chain = Chain::new(incomplete, head).expect("Links point backwards.");

    let renderer = chain.resolve(Format::Text).unwrap();
    assert_eq!(renderer, Renderer::Text("first".into()));
}

#[test]
fn head_outside_chain_is_rejected() {
    let mut incomplete = IncompleteChain::new();
    let node = incomplete.push(FormatNode::new(Format::Text, "data", None));
    assert!(Chain::new(IncompleteChain::new(), node).is_none());
}

#[test]
fn forward_links_are_rejected() {
    let mut other = IncompleteChain::new();
    other.push(FormatNode::new(Format::Json, "data", None));
    let dangling = other.push(FormatNode::new(Format::Json, "data", None));

    let mut incomplete = IncompleteChain::new();
    let head = incomplete.push(FormatNode::new(Format::Text, "data", Some(dangling)));
    assert!(Chain::new(incomplete, head).is_none());
}

#[test]
fn self_link_is_rejected() {
    let mut incomplete = IncompleteChain::new();
    let head = incomplete.push(FormatNode::new(Format::Text, "data", None));
    let mut looping = IncompleteChain::new();
    looping.push(FormatNode::new(Format::Text, "data", Some(head)));
    assert!(Chain::new(looping, head).is_none());
}

fn format_strategy() -> impl Strategy<Value = Format> {
    prop_oneof![Just(Format::Text), Just(Format::Html), Just(Format::Json)]
}

proptest! {
    #[test]
    fn built_chain_claims_every_format(format in format_strategy(), payload in ".*") {
        let renderer = build_chain(&payload).resolve(format);
        prop_assert!(renderer.is_ok());
        let renderer = renderer.unwrap();
        prop_assert_eq!(renderer.format(), format);
        prop_assert_eq!(renderer.payload(), payload.as_str());
    }

    #[test]
    fn single_node_chain_rejects_other_formats(claimed in format_strategy(), requested in format_strategy()) {
        let mut incomplete = IncompleteChain::new();
        let head = incomplete.push(FormatNode::new(claimed, "data", None));
        let chain = Chain::new(incomplete, head).unwrap();
        let result = chain.resolve(requested);
        if claimed == requested {
            prop_assert!(result.is_ok());
        } else {
            let error = result.unwrap_err();
            prop_assert_eq!(error.kind, ResolveErrorKind::UnsupportedFormat(requested));
            prop_assert_eq!(error.visited, 1);
        }
    }
}
