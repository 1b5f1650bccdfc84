use crate::buffer::TextBuffer;
use crate::command::RenderCommand;
use crate::config::Config;
use crate::node::Document;
use crate::queue::{RenderQueue, Submitter};
use crate::render::{heading_text, render};
use crate::style::{Style, StyleTable};

const START_PAGE_TITLE: &str = "Welcome to the Decentralized Web (DWeb)";
const START_PAGE_URL: &str = "ipfs://QmQzhn6hEfbYdCfwzYFsSt3eWpubVKA1dNqsgUwci5vHwq";

/// Callback invoked with the destination URL of an activated link.
pub type NavigateFn = Box<dyn Fn(&str) + Send>;

/// Producer-side handle to a [`PageView`]: renders documents and the
/// canned pages into the queue from any thread. The page is always
/// cleared first, so a superseded render can never interleave with the
/// new one.
#[derive(Clone)]
pub struct PageHandle {
    submitter: Submitter,
    config: Config,
}

impl PageHandle {
    /// Clear the page, then render `doc` into the queue.
    pub fn process_document(&self, doc: &Document) {
        self.submitter.submit(RenderCommand::Clear);
        let mut submitted = 0usize;
        for command in render(doc, &self.config) {
            self.submitter.submit(command);
            submitted += 1;
        }
        log::debug!("submitted {submitted} commands for document");
    }

    /// Clear the page.
    pub fn clear(&self) {
        self.submitter.submit(RenderCommand::Clear);
    }

    /// Clear the page and show a title heading with detail text under
    /// it.
    pub fn show_message(&self, title: &str, detail: &str) {
        self.clear();
        self.submitter.submit(heading_text(1, title));
        self.submitter.submit(RenderCommand::InsertStyledText {
            style: Style::Default,
            text: detail.to_string(),
        });
    }

    /// Clear the page and show the built-in welcome page.
    pub fn show_start_page(&self) {
        self.clear();
        self.submitter.submit(heading_text(1, START_PAGE_TITLE));
        self.submitter.submit(RenderCommand::InsertStyledText {
            style: Style::Default,
            text: "See also the: ".to_string(),
        });
        self.submitter.submit(RenderCommand::InsertLink {
            text: "Example page on IPFS".to_string(),
            url: START_PAGE_URL.to_string(),
        });
    }
}

/// The page widget: owns the display buffer, the command queue, the
/// style table, and the navigation callback. Stays on the thread that
/// drains it; worker threads talk to it through [`PageHandle`].
pub struct PageView {
    queue: RenderQueue,
    buffer: TextBuffer,
    styles: StyleTable,
    config: Config,
    on_navigate: Option<NavigateFn>,
}

impl PageView {
    pub fn new(config: Config) -> Self {
        Self {
            queue: RenderQueue::new(),
            buffer: TextBuffer::new(),
            styles: StyleTable::from_config(&config),
            config,
            on_navigate: None,
        }
    }

    /// A producer handle for worker threads.
    pub fn handle(&self) -> PageHandle {
        PageHandle {
            submitter: self.queue.submitter(),
            config: self.config.clone(),
        }
    }

    /// Register the callback fired when a link is activated.
    pub fn on_navigate(&mut self, callback: impl Fn(&str) + Send + 'static) {
        self.on_navigate = Some(Box::new(callback));
    }

    /// Drain and execute all queued commands. Buffer-owning thread
    /// only.
    pub fn run_pending(&mut self) -> usize {
        self.queue.run_pending(&mut self.buffer)
    }

    /// Hit-test a buffer offset and fire the navigation callback if a
    /// link is under it. A miss is not an error and does nothing.
    pub fn activate(&self, offset: usize) {
        if let Some(url) = self.buffer.link_at(offset) {
            if let Some(callback) = &self.on_navigate {
                callback(url);
            }
        }
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn styles(&self) -> &StyleTable {
        &self.styles
    }

    // Same-thread conveniences mirroring the handle.

    /// Clear the page, then render `doc` into the queue.
    pub fn process_document(&self, doc: &Document) {
        self.handle().process_document(doc);
    }

    /// Clear the page.
    pub fn clear(&self) {
        self.handle().clear();
    }

    /// Clear the page and show a title heading with detail text.
    pub fn show_message(&self, title: &str, detail: &str) {
        self.handle().show_message(title, detail);
    }

    /// Clear the page and show the built-in welcome page.
    pub fn show_start_page(&self) {
        self.handle().show_start_page();
    }
}
