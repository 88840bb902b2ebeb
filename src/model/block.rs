//! Page body content, reduced to what the markdown renderer reads.

use super::RichText;

/// One block of page content with its (already fetched) children.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub id: String,
    pub has_children: bool,
    pub kind: BlockKind,
    pub children: Vec<Block>,
}

impl Block {
    pub fn new(id: impl Into<String>, kind: BlockKind) -> Self {
        Self {
            id: id.into(),
            has_children: false,
            kind,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<Block>) -> Self {
        self.has_children = !children.is_empty();
        self.children = children;
        self
    }

    /// Whether the fetcher should descend into this block.
    ///
    /// Child pages and databases are separate documents; only their titles
    /// belong to the parent page.
    pub fn wants_children(&self) -> bool {
        self.has_children
            && !matches!(
                self.kind,
                BlockKind::ChildPage { .. } | BlockKind::ChildDatabase { .. }
            )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    File,
    Pdf,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BlockKind {
    Paragraph(Vec<RichText>),
    Heading {
        level: u8,
        text: Vec<RichText>,
    },
    BulletedListItem(Vec<RichText>),
    NumberedListItem(Vec<RichText>),
    ToDo {
        text: Vec<RichText>,
        checked: bool,
    },
    Toggle(Vec<RichText>),
    Quote(Vec<RichText>),
    Callout {
        icon: Option<String>,
        text: Vec<RichText>,
    },
    Code {
        language: String,
        text: Vec<RichText>,
        caption: Vec<RichText>,
    },
    Equation(String),
    Divider,
    Media {
        kind: MediaKind,
        url: String,
        caption: Vec<RichText>,
    },
    Bookmark {
        url: String,
        caption: Vec<RichText>,
    },
    Embed(String),
    LinkPreview(String),
    Table {
        has_column_header: bool,
    },
    TableRow(Vec<Vec<RichText>>),
    ColumnList,
    Column,
    /// Content shared from another block; only its children carry text.
    SyncedBlock,
    Template(Vec<RichText>),
    ChildPage(String),
    ChildDatabase(String),
    /// A block type the renderer has no markdown form for.
    Unsupported(String),
}

impl BlockKind {
    pub fn is_list_item(&self) -> bool {
        matches!(
            self,
            BlockKind::BulletedListItem(_) | BlockKind::NumberedListItem(_) | BlockKind::ToDo { .. }
        )
    }
}
