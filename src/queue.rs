//! Cross-thread hand-off of render commands.
//!
//! Rendering happens wherever fetch and parse happen to run; the
//! display buffer may only be touched by the thread that owns it.
//! [`Submitter`] is the producer half: cloneable, sendable, and never
//! blocking. The consumer half lives in [`RenderQueue`], whose
//! `run_pending` drains everything submitted so far in submission
//! order, applies it to the buffer, and returns without waiting for
//! new submissions.

use std::sync::mpsc;

use crate::buffer::TextBuffer;
use crate::command::RenderCommand;

/// Order-preserving command queue owned by the buffer-owning thread.
///
/// Holding the receiver makes the queue itself non-shareable, so the
/// drain side stays pinned to whichever thread owns the value.
pub struct RenderQueue {
    tx: mpsc::Sender<RenderCommand>,
    rx: mpsc::Receiver<RenderCommand>,
}

impl RenderQueue {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }

    /// A producer handle usable from any thread.
    pub fn submitter(&self) -> Submitter {
        Submitter {
            tx: self.tx.clone(),
        }
    }

    /// Execute every command submitted so far against `buffer`, in
    /// submission order, and return how many ran. Never waits for new
    /// submissions.
    pub fn run_pending(&self, buffer: &mut TextBuffer) -> usize {
        let mut executed = 0;
        while let Ok(command) = self.rx.try_recv() {
            buffer.apply(command);
            executed += 1;
        }
        if executed > 0 {
            log::debug!("executed {executed} render commands");
        }
        executed
    }
}

impl Default for RenderQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloneable producer half of a [`RenderQueue`].
#[derive(Clone)]
pub struct Submitter {
    tx: mpsc::Sender<RenderCommand>,
}

impl Submitter {
    /// Enqueue a command for the consumer thread. Never blocks; if the
    /// consumer is gone the command is dropped.
    pub fn submit(&self, command: RenderCommand) {
        if self.tx.send(command).is_err() {
            log::warn!("render queue consumer is gone; discarding command");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RenderQueue;
    use crate::buffer::TextBuffer;
    use crate::command::RenderCommand;
    use crate::style::Style;
    use std::thread;

    fn text(value: impl Into<String>) -> RenderCommand {
        RenderCommand::InsertStyledText {
            style: Style::Default,
            text: value.into(),
        }
    }

    #[test]
    fn preserves_cross_thread_submission_order() {
        let queue = RenderQueue::new();
        let submitter = queue.submitter();

        let producer = thread::spawn(move || {
            for i in 0..100 {
                submitter.submit(text(i.to_string()));
            }
        });
        producer.join().unwrap();

        let mut buffer = TextBuffer::new();
        assert_eq!(queue.run_pending(&mut buffer), 100);
        let texts: Vec<_> = buffer.runs().iter().map(|run| run.text.clone()).collect();
        let expected: Vec<_> = (0..100).map(|i| i.to_string()).collect();
        assert_eq!(texts, expected);
    }

    #[test]
    fn run_pending_returns_without_waiting_when_empty() {
        let queue = RenderQueue::new();
        let mut buffer = TextBuffer::new();
        assert_eq!(queue.run_pending(&mut buffer), 0);
    }

    #[test]
    fn clear_executes_in_submission_order() {
        let queue = RenderQueue::new();
        let submitter = queue.submitter();
        submitter.submit(text("stale"));
        submitter.submit(RenderCommand::Clear);
        submitter.submit(text("fresh"));

        let mut buffer = TextBuffer::new();
        queue.run_pending(&mut buffer);
        assert_eq!(buffer.text(), "fresh");
    }

    #[test]
    fn multiple_submitters_interleave_without_loss() {
        let queue = RenderQueue::new();
        let a = queue.submitter();
        let b = queue.submitter();

        let ta = thread::spawn(move || {
            for _ in 0..50 {
                a.submit(text("a"));
            }
        });
        let tb = thread::spawn(move || {
            for _ in 0..50 {
                b.submit(text("b"));
            }
        });
        ta.join().unwrap();
        tb.join().unwrap();

        let mut buffer = TextBuffer::new();
        assert_eq!(queue.run_pending(&mut buffer), 100);
    }

    #[test]
    fn submit_after_consumer_dropped_is_ignored() {
        let queue = RenderQueue::new();
        let submitter = queue.submitter();
        drop(queue);
        submitter.submit(text("nobody listening"));
    }
}
