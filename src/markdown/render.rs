// src/markdown/render.rs
//! Block tree to markdown.
//!
//! Sibling blocks are separated by a blank line, except runs of list items
//! which stay on consecutive lines. Rendered blocks carry no trailing newline.

use super::rich_text::rich_text_to_markdown;
use crate::constants::CHARS_PER_BLOCK_ESTIMATE;
use crate::error::AppError;
use crate::model::{Block, BlockKind, MediaKind, RichText};
use std::fmt::Write;

/// State threaded from one sibling to the next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatContext {
    /// Numbered items already emitted in the current run.
    list_number: usize,
}

impl FormatContext {
    pub fn current_list_number(&self) -> usize {
        self.list_number + 1
    }

    /// Context for the next sibling. Any block other than a numbered item
    /// ends the run and restarts numbering.
    fn after(self, block: &Block) -> Self {
        match block.kind {
            BlockKind::NumberedListItem(_) => Self {
                list_number: self.list_number + 1,
            },
            _ => Self::default(),
        }
    }
}

/// The result of rendering a single block: content plus the context for the
/// next sibling.
#[derive(Debug, Clone)]
pub struct BlockRenderResult {
    pub content: String,
    pub context: FormatContext,
}

pub trait BlockRenderer {
    fn render_block(
        &self,
        block: &Block,
        context: FormatContext,
    ) -> Result<BlockRenderResult, AppError>;

    /// Renders siblings in order and joins them. Blocks that render to
    /// nothing leave no gap.
    fn render_children(&self, blocks: &[Block]) -> Result<String, AppError> {
        let mut output = String::with_capacity(blocks.len() * CHARS_PER_BLOCK_ESTIMATE);
        let mut context = FormatContext::default();
        let mut previous: Option<&Block> = None;

        for block in blocks {
            let result = self.render_block(block, context)?;
            context = result.context;
            if result.content.is_empty() {
                continue;
            }
            if let Some(prev) = previous {
                let tight = prev.kind.is_list_item() && block.kind.is_list_item();
                output.push_str(if tight { "\n" } else { "\n\n" });
            }
            output.push_str(&result.content);
            previous = Some(block);
        }

        Ok(output)
    }
}

/// Renders a page's top-level blocks to a markdown document.
pub fn render_blocks(blocks: &[Block]) -> Result<String, AppError> {
    MarkdownBlockRenderer.render_children(blocks)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownBlockRenderer;

impl BlockRenderer for MarkdownBlockRenderer {
    fn render_block(
        &self,
        block: &Block,
        context: FormatContext,
    ) -> Result<BlockRenderResult, AppError> {
        let content = match &block.kind {
            BlockKind::Paragraph(text) => {
                self.with_children(rich_text_to_markdown(text), &block.children)?
            }
            BlockKind::Heading { level, text } => {
                let heading = rich_text_to_markdown(text);
                let head = if heading.trim().is_empty() {
                    String::new()
                } else {
                    format!("{} {}", "#".repeat(*level as usize), heading)
                };
                self.with_children(head, &block.children)?
            }
            BlockKind::BulletedListItem(text) => {
                self.list_item(format!("- {}", rich_text_to_markdown(text)), &block.children, "  ")?
            }
            BlockKind::NumberedListItem(text) => {
                let head = format!("{}. {}", context.current_list_number(), rich_text_to_markdown(text));
                self.list_item(head, &block.children, "   ")?
            }
            BlockKind::ToDo { text, checked } => {
                let checkbox = if *checked { "[x]" } else { "[ ]" };
                let head = format!("- {} {}", checkbox, rich_text_to_markdown(text));
                self.list_item(head, &block.children, "  ")?
            }
            BlockKind::Toggle(text) => {
                self.list_item(format!("▸ {}", rich_text_to_markdown(text)), &block.children, "  ")?
            }
            BlockKind::Quote(text) => {
                let body = self.with_children(rich_text_to_markdown(text), &block.children)?;
                quote_lines(&body)
            }
            BlockKind::Callout { icon, text } => {
                let head = match icon {
                    Some(emoji) => format!("{} {}", emoji, rich_text_to_markdown(text)),
                    None => rich_text_to_markdown(text),
                };
                quote_lines(&self.with_children(head, &block.children)?)
            }
            BlockKind::Code {
                language,
                text,
                caption,
            } => format_code_block(language, text, caption)?,
            BlockKind::Equation(expression) => format!("$$\n{}\n$$", expression),
            BlockKind::Divider => "---".to_string(),
            BlockKind::Media { kind, url, caption } => format_media(*kind, url, caption),
            BlockKind::Bookmark { url, caption } => {
                let label = if caption.is_empty() {
                    url.clone()
                } else {
                    rich_text_to_markdown(caption)
                };
                format!("[{}]({})", label, url)
            }
            BlockKind::Embed(url) | BlockKind::LinkPreview(url) => format!("[{}]({})", url, url),
            BlockKind::Table { has_column_header } => {
                format_table(&block.children, *has_column_header)
            }
            BlockKind::TableRow(cells) => format_table_row(cells),
            BlockKind::ColumnList | BlockKind::Column | BlockKind::SyncedBlock => {
                self.render_children(&block.children)?
            }
            BlockKind::Template(text) => {
                self.with_children(rich_text_to_markdown(text), &block.children)?
            }
            BlockKind::ChildPage(title) => format!("📄 {}", title),
            BlockKind::ChildDatabase(title) => format!("🗄️ {}", title),
            BlockKind::Unsupported(block_type) => {
                log::debug!("Skipping unsupported block type '{}'", block_type);
                String::new()
            }
        };

        Ok(BlockRenderResult {
            content,
            context: context.after(block),
        })
    }
}

impl MarkdownBlockRenderer {
    /// Text followed by its children as a separate paragraph run.
    fn with_children(&self, head: String, children: &[Block]) -> Result<String, AppError> {
        let child_md = self.render_children(children)?;
        Ok(match (head.is_empty(), child_md.is_empty()) {
            (_, true) => head,
            (true, false) => child_md,
            (false, false) => format!("{}\n\n{}", head, child_md),
        })
    }

    /// A list line with its children nested beneath it.
    fn list_item(&self, head: String, children: &[Block], indent: &str) -> Result<String, AppError> {
        let head = head.trim_end().to_string();
        if children.is_empty() {
            return Ok(head);
        }
        let child_md = self.render_children(children)?;
        if child_md.is_empty() {
            return Ok(head);
        }
        Ok(format!("{}\n{}", head, indent_block_content(&child_md, indent)))
    }
}

/// Indents each non-empty line of `text` by `indent`, preserving blank lines.
fn indent_block_content(text: &str, indent: &str) -> String {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                line.to_string()
            } else {
                format!("{}{}", indent, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn quote_lines(text: &str) -> String {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                ">".to_string()
            } else {
                format!("> {}", line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_code_block(
    language: &str,
    text: &[RichText],
    caption: &[RichText],
) -> Result<String, AppError> {
    let mut result = String::new();
    write!(
        result,
        "```{}\n{}\n```",
        language,
        RichText::concat_plain(text)
    )?;
    if !caption.is_empty() {
        write!(result, "\n*{}*", rich_text_to_markdown(caption))?;
    }
    Ok(result)
}

fn format_media(kind: MediaKind, url: &str, caption: &[RichText]) -> String {
    if url.is_empty() {
        return String::new();
    }
    let caption = rich_text_to_markdown(caption);
    match kind {
        MediaKind::Image => format!("![{}]({})", caption, url),
        other => {
            let label = if caption.is_empty() {
                match other {
                    MediaKind::Video => "Video",
                    MediaKind::Pdf => "PDF",
                    _ => "File",
                }
                .to_string()
            } else {
                caption
            };
            format!("[{}]({})", label, url)
        }
    }
}

fn format_table(rows: &[Block], has_column_header: bool) -> String {
    let cells: Vec<&Vec<Vec<RichText>>> = rows
        .iter()
        .filter_map(|row| match &row.kind {
            BlockKind::TableRow(cells) => Some(cells),
            _ => None,
        })
        .collect();
    let Some(width) = cells.iter().map(|row| row.len()).max() else {
        return String::new();
    };

    let mut lines = Vec::with_capacity(cells.len() + 2);
    let mut body = cells.iter();
    if has_column_header {
        if let Some(header) = body.next() {
            lines.push(format_table_row(header));
        }
    } else {
        lines.push(format!("|{}", " |".repeat(width)));
    }
    lines.push(format!("|{}", " --- |".repeat(width)));
    lines.extend(body.map(|row| format_table_row(row)));

    lines.join("\n")
}

fn format_table_row(cells: &[Vec<RichText>]) -> String {
    let mut row = String::from("|");
    for cell in cells {
        row.push(' ');
        row.push_str(&rich_text_to_markdown(cell).replace('|', "\\|"));
        row.push_str(" |");
    }
    row
}
