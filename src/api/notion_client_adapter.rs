// src/api/notion_client_adapter.rs
//! Converts notion-client block types to the domain block model.
//!
//! notion-client validates the wire format; this layer keeps only what the
//! markdown renderer reads. Conversion is total: shapes the renderer has no
//! use for become [`BlockKind::Unsupported`].

use crate::model::{Annotations, Block, BlockKind, MediaKind, RichText};
use notion_client::objects::block::{Block as NcBlock, BlockType};

/// Convert one raw block object from a children listing.
///
/// Block types notion-client cannot decode (new or unmodelled ones such as
/// `audio`) keep their id and children flag and become
/// [`BlockKind::Unsupported`], so one unknown block never costs the page.
pub fn convert_raw_block(raw: serde_json::Value) -> Block {
    match serde_json::from_value::<NcBlock>(raw.clone()) {
        Ok(block) => convert_block(block),
        Err(e) => {
            let field = |name: &str| raw.get(name).and_then(|v| v.as_str()).unwrap_or_default();
            let block_type = field("type").to_string();
            log::warn!(
                "Block {} of type '{}' could not be decoded: {}",
                field("id"),
                block_type,
                e
            );
            Block {
                id: field("id").to_string(),
                has_children: raw
                    .get("has_children")
                    .and_then(|v| v.as_bool())
                    .unwrap_or(false),
                kind: BlockKind::Unsupported(block_type),
                children: Vec::new(),
            }
        }
    }
}

/// Convert a notion-client block to a domain [`Block`] without children.
pub fn convert_block(notion_block: NcBlock) -> Block {
    let id = notion_block.id.clone().unwrap_or_default();
    let has_children = notion_block.has_children.unwrap_or(false);

    let kind = match notion_block.block_type {
        BlockType::Paragraph { paragraph } => {
            BlockKind::Paragraph(convert_rich_text_array(paragraph.rich_text))
        }

        BlockType::Heading1 { heading_1 } => BlockKind::Heading {
            level: 1,
            text: convert_rich_text_array(heading_1.rich_text),
        },

        BlockType::Heading2 { heading_2 } => BlockKind::Heading {
            level: 2,
            text: convert_rich_text_array(heading_2.rich_text),
        },

        BlockType::Heading3 { heading_3 } => BlockKind::Heading {
            level: 3,
            text: convert_rich_text_array(heading_3.rich_text),
        },

        BlockType::BulletedListItem { bulleted_list_item } => {
            BlockKind::BulletedListItem(convert_rich_text_array(bulleted_list_item.rich_text))
        }

        BlockType::NumberedListItem { numbered_list_item } => {
            BlockKind::NumberedListItem(convert_rich_text_array(numbered_list_item.rich_text))
        }

        BlockType::ToDo { to_do } => BlockKind::ToDo {
            text: convert_rich_text_array(to_do.rich_text),
            checked: to_do.checked.unwrap_or(false),
        },

        BlockType::Toggle { toggle } => BlockKind::Toggle(convert_rich_text_array(toggle.rich_text)),

        BlockType::Quote { quote } => BlockKind::Quote(convert_rich_text_array(quote.rich_text)),

        BlockType::Callout { callout } => BlockKind::Callout {
            icon: callout.icon.and_then(convert_icon),
            text: convert_rich_text_array(callout.rich_text),
        },

        BlockType::Code { code } => BlockKind::Code {
            language: format!("{:?}", code.language).to_lowercase(),
            text: convert_rich_text_array(code.rich_text),
            caption: convert_rich_text_array(code.caption),
        },

        BlockType::Equation { equation } => BlockKind::Equation(equation.expression),

        BlockType::Divider { .. } => BlockKind::Divider,

        BlockType::Image { image } => BlockKind::Media {
            kind: MediaKind::Image,
            url: file_url(image.file_type),
            caption: Vec::new(),
        },

        BlockType::Video { video } => BlockKind::Media {
            kind: MediaKind::Video,
            url: file_url(video.file_type),
            caption: Vec::new(),
        },

        BlockType::File { file } => BlockKind::Media {
            kind: MediaKind::File,
            url: file_url(file.file_type),
            caption: convert_rich_text_array(file.caption),
        },

        BlockType::Pdf { pdf } => BlockKind::Media {
            kind: MediaKind::Pdf,
            url: file_url(pdf.file_type),
            caption: convert_rich_text_array(pdf.caption),
        },

        BlockType::Bookmark { bookmark } => BlockKind::Bookmark {
            url: bookmark.url,
            caption: convert_rich_text_array(bookmark.caption),
        },

        BlockType::Embed { embed } => BlockKind::Embed(embed.url),

        BlockType::LinkPreview { link_preview } => BlockKind::LinkPreview(link_preview.url),

        BlockType::Table { table } => BlockKind::Table {
            has_column_header: table.has_column_header,
        },

        BlockType::TableRow { table_row } => BlockKind::TableRow(
            table_row
                .cells
                .into_iter()
                .map(convert_rich_text_array)
                .collect(),
        ),

        BlockType::ColumnList { .. } => BlockKind::ColumnList,

        BlockType::Column { .. } => BlockKind::Column,

        BlockType::SyncedBlock { .. } => BlockKind::SyncedBlock,

        BlockType::Template { template } => {
            BlockKind::Template(convert_rich_text_array(template.rich_text))
        }

        BlockType::ChildPage { child_page } => BlockKind::ChildPage(child_page.title),

        BlockType::ChildDatabase { child_database } => {
            BlockKind::ChildDatabase(child_database.title)
        }

        other => {
            let block_type = format!("{:?}", other);
            let name = block_type
                .split(|c: char| !c.is_alphanumeric())
                .next()
                .unwrap_or_default()
                .to_string();
            log::debug!("Block type '{}' has no markdown form", name);
            BlockKind::Unsupported(name)
        }
    };

    Block {
        id,
        has_children,
        kind,
        children: Vec::new(),
    }
}

fn convert_rich_text_array(
    rich_texts: Vec<notion_client::objects::rich_text::RichText>,
) -> Vec<RichText> {
    rich_texts.into_iter().filter_map(convert_rich_text).collect()
}

fn convert_rich_text(rich_text: notion_client::objects::rich_text::RichText) -> Option<RichText> {
    use notion_client::objects::rich_text::RichText as NcRichText;

    match rich_text {
        NcRichText::Text {
            text,
            annotations,
            plain_text,
            href,
        } => Some(RichText {
            href: href.or_else(|| text.link.map(|link| link.url)),
            plain_text: plain_text.unwrap_or(text.content),
            annotations: annotations.map(convert_annotations).unwrap_or_default(),
        }),

        NcRichText::Mention {
            annotations,
            plain_text,
            href,
            ..
        } => Some(RichText {
            plain_text,
            href,
            annotations: convert_annotations(annotations),
        }),

        NcRichText::Equation {
            annotations,
            plain_text,
            href,
            ..
        } => Some(RichText {
            plain_text,
            href,
            annotations: convert_annotations(annotations),
        }),

        _ => {
            log::debug!("Skipping unsupported rich text fragment");
            None
        }
    }
}

fn convert_annotations(annotations: notion_client::objects::rich_text::Annotations) -> Annotations {
    Annotations {
        bold: annotations.bold,
        italic: annotations.italic,
        strikethrough: annotations.strikethrough,
        underline: annotations.underline,
        code: annotations.code,
    }
}

fn file_url(file: notion_client::objects::file::File) -> String {
    use notion_client::objects::file::File as NcFile;

    match file {
        NcFile::External { external } => external.url,
        NcFile::File { file } => file.url,
    }
}

/// Emoji icons render inline; hosted icon images are dropped.
fn convert_icon(icon: notion_client::objects::block::Icon) -> Option<String> {
    use notion_client::objects::block::Icon as NcIcon;

    match icon {
        NcIcon::Emoji(notion_client::objects::emoji::Emoji::Emoji { emoji }) => Some(emoji),
        NcIcon::File(_) => None,
    }
}
