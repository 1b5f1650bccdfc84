mod buffer;
mod command;
mod config;
mod node;
mod parser;
mod queue;
mod render;
mod roman;
mod style;
mod view;

pub use buffer::{LinkSpan, StyledRun, TextBuffer};
pub use command::RenderCommand;
pub use config::Config;
pub use node::{Document, Events, ListVariant, Node, Phase};
pub use queue::{RenderQueue, Submitter};
pub use render::{RenderCommands, render};
pub use roman::int_to_roman;
pub use style::{FontSpec, Slant, Style, StyleTable, Weight};
pub use view::{NavigateFn, PageHandle, PageView};

/// Parse markdown text into a traversable document.
pub fn parse(markdown: &str) -> Document {
    parser::parse(markdown)
}

/// Render markdown to its command stream using the built-in config.
pub fn markdown_to_commands(markdown: &str) -> Vec<RenderCommand> {
    let doc = parse(markdown);
    let config = Config::compiled_default();
    render(&doc, &config).collect()
}

/// Render markdown all the way into a display buffer.
pub fn markdown_to_buffer(markdown: &str, config: &Config) -> TextBuffer {
    let doc = parse(markdown);
    let mut buffer = TextBuffer::new();
    for command in render(&doc, config) {
        buffer.apply(command);
    }
    buffer
}
