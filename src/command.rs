use crate::style::Style;

/// An instruction for the display buffer, produced by the renderer on
/// whatever thread runs the traversal and executed on the thread that
/// owns the buffer. Immutable once created; submission order is
/// execution order.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Append a run of text in the named style.
    InsertStyledText { style: Style, text: String },
    /// Append link text and record a navigable span for it.
    InsertLink { text: String, url: String },
    /// Empty the buffer and drop every recorded link span.
    Clear,
}
