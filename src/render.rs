use std::collections::HashMap;

use crate::command::RenderCommand;
use crate::config::Config;
use crate::node::{Document, Events, ListVariant, Node, Phase};
use crate::roman::int_to_roman;
use crate::style::Style;

/// Walk a document and produce its render commands lazily, in document
/// order.
///
/// Each call starts from a fresh traversal context, so rendering the
/// same document twice produces the same command sequence. The walk is
/// single-pass: nested list numbering, emphasis, and heading context
/// are reconstructed from the flat enter/exit stream alone.
pub fn render<'a>(doc: &'a Document, config: &'a Config) -> RenderCommands<'a> {
    RenderCommands {
        events: doc.events(),
        config,
        ctx: Context::default(),
    }
}

/// Lazy command stream over one document traversal.
pub struct RenderCommands<'a> {
    events: Events<'a>,
    config: &'a Config,
    ctx: Context,
}

impl Iterator for RenderCommands<'_> {
    type Item = RenderCommand;

    fn next(&mut self) -> Option<RenderCommand> {
        loop {
            let (node, phase) = self.events.next()?;
            if let Some(command) = self.ctx.process(node, phase, self.config) {
                return Some(command);
            }
        }
    }
}

/// Formatting state carried across one traversal.
#[derive(Default)]
struct Context {
    heading_level: u8,
    list_nesting: u32,
    bullet_depth: u32,
    ordered_depth: u32,
    ordered_counters: HashMap<u32, u32>,
    is_ordered_active: bool,
    bold: bool,
    italic: bool,
    link_active: bool,
    pending_url: String,
}

impl Context {
    fn process(&mut self, node: &Node, phase: Phase, config: &Config) -> Option<RenderCommand> {
        let entering = phase == Phase::Enter;
        match node {
            Node::Document => {
                if entering {
                    *self = Self::default();
                }
                None
            }
            Node::List(variant) => self.process_list(*variant, entering),
            Node::Item => {
                if entering {
                    if self.is_ordered_active {
                        *self
                            .ordered_counters
                            .entry(self.ordered_depth)
                            .or_insert(0) += 1;
                    }
                    Some(default_text("\n"))
                } else {
                    None
                }
            }
            Node::Heading(level) => {
                self.heading_level = if entering { *level } else { 0 };
                None
            }
            Node::ThematicBreak => Some(default_text(&config.rule.glyph.repeat(config.rule.width))),
            Node::Paragraph => {
                // No extra spacing between list items.
                if entering && self.list_nesting == 0 {
                    Some(default_text("\n"))
                } else {
                    None
                }
            }
            Node::Text(literal) => Some(self.text_command(literal, config)),
            Node::Linebreak => Some(default_text("\n")),
            Node::Softbreak => Some(default_text(" ")),
            Node::Strong => {
                self.bold = entering;
                None
            }
            Node::Emph => {
                self.italic = entering;
                None
            }
            Node::Link(url) => {
                self.link_active = entering;
                if entering {
                    self.pending_url = url.clone();
                }
                None
            }
            // Deliberate pass-throughs: visited, no output, state
            // untouched.
            Node::BlockQuote
            | Node::CodeBlock
            | Node::HtmlBlock
            | Node::CustomBlock
            | Node::Code(_)
            | Node::HtmlInline
            | Node::CustomInline
            | Node::Image
            | Node::FootnoteRef
            | Node::FootnoteDef => None,
        }
    }

    fn process_list(&mut self, variant: ListVariant, entering: bool) -> Option<RenderCommand> {
        let mut command = None;
        if entering {
            self.list_nesting += 1;
            match variant {
                ListVariant::Bullet => self.bullet_depth += 1,
                ListVariant::Ordered => {
                    self.ordered_depth += 1;
                    // A fresh counter for this depth, starting over.
                    self.ordered_counters.insert(self.ordered_depth, 0);
                }
            }
        } else {
            if self.list_nesting == 1 {
                // Closing newline for the outermost list.
                command = Some(default_text("\n"));
            }
            match variant {
                ListVariant::Bullet => self.bullet_depth = self.bullet_depth.saturating_sub(1),
                ListVariant::Ordered => self.ordered_depth = self.ordered_depth.saturating_sub(1),
            }
            self.list_nesting = self.list_nesting.saturating_sub(1);
        }

        if self.list_nesting == 0 {
            self.bullet_depth = 0;
            self.ordered_depth = 0;
            self.is_ordered_active = false;
        } else {
            self.is_ordered_active = self.ordered_depth > 0 && self.bullet_depth == 0;
        }
        command
    }

    fn text_command(&mut self, literal: &str, config: &Config) -> RenderCommand {
        let mut text = String::new();

        // List marker prefix. Bullets win when both variants are open.
        if self.bullet_depth > 0 {
            for _ in 0..self.bullet_depth {
                text.push('\t');
            }
            text.push_str(&config.list.bullet);
            text.push(' ');
        } else if self.ordered_depth > 0 {
            let count = self
                .ordered_counters
                .get(&self.ordered_depth)
                .copied()
                .unwrap_or(0);
            for _ in 0..self.ordered_depth {
                text.push('\t');
            }
            if self.ordered_depth % 2 == 0 {
                text.push_str(&int_to_roman(count));
                text.push(' ');
            } else {
                text.push_str(&count.to_string());
                text.push_str(". ");
            }
        }
        text.push_str(literal);

        if self.heading_level > 0 {
            return heading_text(self.heading_level, &text);
        }
        let style = match (self.bold, self.italic) {
            (true, true) => Style::BoldItalic,
            (true, false) => Style::Bold,
            (false, true) => Style::Italic,
            (false, false) => {
                if self.link_active {
                    return RenderCommand::InsertLink {
                        text,
                        url: std::mem::take(&mut self.pending_url),
                    };
                }
                Style::Default
            }
        };
        RenderCommand::InsertStyledText { style, text }
    }
}

fn default_text(text: &str) -> RenderCommand {
    RenderCommand::InsertStyledText {
        style: Style::Default,
        text: text.to_string(),
    }
}

/// A heading-styled run. Headings carry their surrounding blank lines
/// inside the run itself.
pub(crate) fn heading_text(level: u8, text: &str) -> RenderCommand {
    RenderCommand::InsertStyledText {
        style: Style::heading(level),
        text: format!("\n{text}\n"),
    }
}
