use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::types::{Align, Direction, Edges, Justify, Size, Style, TextAlign};

static ELEMENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Anonymous ids are unique per process; widgets that need stable ids for
/// hit-testing set them explicitly.
fn anonymous_id(kind: &str) -> String {
    format!("{kind}-{}", ELEMENT_SEQ.fetch_add(1, Ordering::Relaxed))
}

/// A node in the declarative view tree.
///
/// Widgets build a fresh tree every frame; the host lays it out, paints it
/// into a [`Buffer`](crate::Buffer) and hit-tests clicks against it by `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub id: String,
    pub content: Content,

    pub width: Size,
    pub height: Size,
    pub padding: Edges,

    // Flex container
    pub direction: Direction,
    pub gap: u16,
    pub justify: Justify,
    pub align: Align,

    pub style: Style,
    pub text_align: TextAlign,

    pub clickable: bool,
    /// Disabled elements are painted but never hit-tested.
    pub disabled: bool,
}

macro_rules! setters {
    ($($(#[$doc:meta])* $name:ident: $ty:ty),* $(,)?) => {
        $(
            $(#[$doc])*
            pub fn $name(self, $name: $ty) -> Self {
                Self { $name, ..self }
            }
        )*
    };
}

impl Element {
    fn with_content(kind: &str, direction: Direction, content: Content) -> Self {
        Self {
            id: anonymous_id(kind),
            content,
            width: Size::Auto,
            height: Size::Auto,
            padding: Edges::default(),
            direction,
            gap: 0,
            justify: Justify::Start,
            align: Align::Start,
            style: Style::new(),
            text_align: TextAlign::Left,
            clickable: false,
            disabled: false,
        }
    }

    /// Empty node, useful as a spacer or a click target.
    pub fn box_() -> Self {
        Self::with_content("box", Direction::Column, Content::None)
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::with_content("text", Direction::Column, Content::Text(content.into()))
    }

    pub fn col() -> Self {
        Self::with_content("col", Direction::Column, Content::Children(Vec::new()))
    }

    pub fn row() -> Self {
        Self::with_content("row", Direction::Row, Content::Children(Vec::new()))
    }

    pub fn id(self, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..self
        }
    }

    /// Append a child; a text or empty node becomes a container.
    pub fn child(mut self, child: Element) -> Self {
        if let Content::Children(children) = &mut self.content {
            children.push(child);
        } else {
            self.content = Content::Children(vec![child]);
        }
        self
    }

    pub fn children(mut self, more: impl IntoIterator<Item = Element>) -> Self {
        if let Content::Children(children) = &mut self.content {
            children.extend(more);
            self
        } else {
            self.content = Content::Children(more.into_iter().collect());
            self
        }
    }

    setters! {
        width: Size,
        height: Size,
        padding: Edges,
        direction: Direction,
        gap: u16,
        justify: Justify,
        align: Align,
        style: Style,
        text_align: TextAlign,
        /// Makes the element a hit-test target.
        clickable: bool,
        disabled: bool,
    }

    /// Space between the outer rect and the content: padding plus border.
    pub fn insets(&self) -> Edges {
        self.padding.grow(self.style.border.thickness())
    }
}
