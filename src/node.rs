/// Which side of a node a traversal visit is on.
///
/// Container nodes are visited twice, once entering and once exiting
/// after their children; leaf nodes are visited once, as `Enter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Enter,
    Exit,
}

/// List marker variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListVariant {
    Bullet,
    Ordered,
}

/// A node of the parsed document tree.
///
/// Kind-specific attributes ride along in the variant: heading level,
/// list variant, literal text, link destination.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Document,
    BlockQuote,
    List(ListVariant),
    Item,
    Heading(u8),
    CodeBlock,
    HtmlBlock,
    CustomBlock,
    ThematicBreak,
    Paragraph,
    Text(String),
    Linebreak,
    Softbreak,
    Code(String),
    HtmlInline,
    CustomInline,
    Strong,
    Emph,
    Link(String),
    Image,
    FootnoteRef,
    FootnoteDef,
}

/// A parsed document: the flat enter/exit event stream of its tree, in
/// document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    events: Vec<(Node, Phase)>,
}

impl Document {
    /// Build a document directly from an event stream.
    ///
    /// The stream must be the depth-first enter/exit order of a tree;
    /// [`crate::parse`] produces one from markdown text.
    pub fn from_events(events: Vec<(Node, Phase)>) -> Self {
        Self { events }
    }

    pub(crate) fn push(&mut self, node: Node, phase: Phase) {
        self.events.push((node, phase));
    }

    /// Iterate the enter/exit events in document order.
    pub fn events(&self) -> Events<'_> {
        Events {
            inner: self.events.iter(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Forward-only iterator over a document's enter/exit events.
pub struct Events<'a> {
    inner: std::slice::Iter<'a, (Node, Phase)>,
}

impl<'a> Iterator for Events<'a> {
    type Item = (&'a Node, Phase);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(node, phase)| (node, *phase))
    }
}
