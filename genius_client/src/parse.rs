//! Extract lyric text from a song page's HTML.

use anyhow::Result;
use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, ParseOpts};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Parses a lyrics page and returns the lyric text it carries.
///
/// Lyric text lives in elements marked with a `data-lyrics-container`
/// attribute; `<br>` elements inside them separate lines and consecutive
/// containers separate verse blocks. Returns an empty string when the page
/// has no such container.
pub fn parse_lyric_html(html: &str) -> Result<String> {
    let dom = parse_document(RcDom::default(), ParseOpts::default())
        .from_utf8()
        .read_from(&mut html.as_bytes())?;

    let mut lyric = String::new();
    collect_lyric(&dom.document, &mut lyric, false);
    Ok(lyric.trim().to_string())
}

fn is_lyric_container(node: &Handle) -> bool {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs.borrow().iter().any(|attr| {
            &*attr.name.local == "data-lyrics-container" && &*attr.value == "true"
        }),
        _ => false,
    }
}

fn collect_lyric(node: &Handle, lyric: &mut String, mut inside_container: bool) {
    match &node.data {
        NodeData::Element { name, .. } => {
            if inside_container && &*name.local == "br" {
                lyric.push('\n');
            }
            if !inside_container && is_lyric_container(node) {
                if !lyric.is_empty() {
                    lyric.push('\n');
                }
                inside_container = true;
            }
        }
        NodeData::Text { contents } => {
            if inside_container {
                lyric.push_str(&contents.borrow());
            }
        }
        _ => {}
    }

    for child in node.children.borrow().iter() {
        collect_lyric(child, lyric, inside_container);
    }
}
