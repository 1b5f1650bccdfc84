use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use crate::node::{Document, ListVariant, Node, Phase};

/// Parse markdown text into a traversable document.
///
/// The pulldown-cmark event stream is reshaped into the enter/exit form
/// the renderer consumes: the whole stream is wrapped in a document
/// node, Start/End tags become enter/exit pairs, and leaf events become
/// single enter visits. Code-block and raw-HTML literals stay attached
/// to their (ignored) nodes instead of surfacing as text children.
pub fn parse(markdown: &str) -> Document {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_FOOTNOTES);
    let parser = Parser::new_ext(markdown, options);

    let mut doc = Document::default();
    let mut state = ParseState::default();

    doc.push(Node::Document, Phase::Enter);
    for event in parser {
        process_event(event, &mut state, &mut doc);
    }
    doc.push(Node::Document, Phase::Exit);

    doc
}

#[derive(Default)]
struct ParseState {
    // Open link destinations, innermost last; exit visits replay the URL.
    link_stack: Vec<String>,
    in_code_block: bool,
}

fn process_event(event: Event, state: &mut ParseState, doc: &mut Document) {
    match event {
        Event::Start(tag) => start_tag(tag, state, doc),
        Event::End(tag) => end_tag(tag, state, doc),

        Event::Text(text) => {
            // Code-block content is the node's own literal, not a child.
            if !state.in_code_block {
                doc.push(Node::Text(text.into_string()), Phase::Enter);
            }
        }
        Event::Code(code) => doc.push(Node::Code(code.into_string()), Phase::Enter),

        // Raw HTML block content belongs to the html-block node.
        Event::Html(_) => {}
        Event::InlineHtml(_) => doc.push(Node::HtmlInline, Phase::Enter),

        Event::SoftBreak => doc.push(Node::Softbreak, Phase::Enter),
        Event::HardBreak => doc.push(Node::Linebreak, Phase::Enter),
        Event::Rule => doc.push(Node::ThematicBreak, Phase::Enter),
        Event::FootnoteReference(_) => doc.push(Node::FootnoteRef, Phase::Enter),

        other => unreachable!("parser emitted an event outside the enabled option set: {other:?}"),
    }
}

fn start_tag(tag: Tag, state: &mut ParseState, doc: &mut Document) {
    let node = match tag {
        Tag::Paragraph => Node::Paragraph,
        Tag::Heading { level, .. } => Node::Heading(heading_level_to_u8(level)),
        Tag::BlockQuote(_) => Node::BlockQuote,
        Tag::CodeBlock(_) => {
            state.in_code_block = true;
            Node::CodeBlock
        }
        Tag::HtmlBlock => Node::HtmlBlock,
        Tag::List(first_index) => Node::List(if first_index.is_some() {
            ListVariant::Ordered
        } else {
            ListVariant::Bullet
        }),
        Tag::Item => Node::Item,
        Tag::Emphasis => Node::Emph,
        Tag::Strong => Node::Strong,
        Tag::Link { dest_url, .. } => {
            let url = dest_url.into_string();
            state.link_stack.push(url.clone());
            Node::Link(url)
        }
        Tag::Image { .. } => Node::Image,
        Tag::FootnoteDefinition(_) => Node::FootnoteDef,
        other => unreachable!("parser emitted a tag outside the enabled option set: {other:?}"),
    };
    doc.push(node, Phase::Enter);
}

fn end_tag(tag: TagEnd, state: &mut ParseState, doc: &mut Document) {
    let node = match tag {
        TagEnd::Paragraph => Node::Paragraph,
        TagEnd::Heading(level) => Node::Heading(heading_level_to_u8(level)),
        TagEnd::BlockQuote(_) => Node::BlockQuote,
        TagEnd::CodeBlock => {
            state.in_code_block = false;
            Node::CodeBlock
        }
        TagEnd::HtmlBlock => Node::HtmlBlock,
        TagEnd::List(ordered) => Node::List(if ordered {
            ListVariant::Ordered
        } else {
            ListVariant::Bullet
        }),
        TagEnd::Item => Node::Item,
        TagEnd::Emphasis => Node::Emph,
        TagEnd::Strong => Node::Strong,
        TagEnd::Link => Node::Link(state.link_stack.pop().unwrap_or_default()),
        TagEnd::Image => Node::Image,
        TagEnd::FootnoteDefinition => Node::FootnoteDef,
        other => unreachable!("parser emitted a tag outside the enabled option set: {other:?}"),
    };
    doc.push(node, Phase::Exit);
}

fn heading_level_to_u8(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
