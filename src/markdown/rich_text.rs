// src/markdown/rich_text.rs
//! Rich text fragments to inline markdown.

use crate::model::{Annotations, RichText};

/// Renders fragments in order, applying each fragment's styling.
pub fn rich_text_to_markdown(fragments: &[RichText]) -> String {
    fragments.iter().map(fragment_to_markdown).collect()
}

fn fragment_to_markdown(fragment: &RichText) -> String {
    let text = fragment.plain_text.as_str();
    let core = text.trim();
    if core.is_empty() || (fragment.annotations.is_plain() && fragment.href.is_none()) {
        return text.to_string();
    }

    // Markers must hug the text, so surrounding whitespace stays outside.
    let leading = &text[..text.len() - text.trim_start().len()];
    let trailing = &text[text.trim_end().len()..];

    let styled = apply_styles(core, &fragment.annotations, fragment.href.as_deref());
    format!("{}{}{}", leading, styled, trailing)
}

/// Code first, since other markers inside backticks would render literally.
fn apply_styles(content: &str, annotations: &Annotations, link: Option<&str>) -> String {
    let mut result = content.to_string();

    if annotations.code {
        result = format!("`{}`", result);
    }
    if annotations.strikethrough {
        result = format!("~~{}~~", result);
    }
    if annotations.bold {
        result = format!("**{}**", result);
    }
    if annotations.italic {
        result = format!("*{}*", result);
    }
    if let Some(url) = link {
        result = format!("[{}]({})", result, url);
    }

    result
}
