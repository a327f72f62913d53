//! Markdown parser: flat text into an ordered block sequence
//!
//! A single left-to-right pass over the input lines with a strictly
//! monotonic cursor. Checkpoint markers, inline image references and
//! bare URLs are matched on the raw line before any HTML stripping,
//! because stripping would corrupt the markers themselves.

use crate::ids::{Clock, IdProvider, SystemClock, UuidIds};
use crate::types::{Block, BlockContent, NoteContent, DEFAULT_CODE_LANGUAGE};
use regex::Regex;
use std::sync::LazyLock;

/// Checkpoint marker embedded in exported text, e.g.
/// `<!-- CHECKPOINT_MARKER:abc-123 -->`. Matched anywhere in the line.
static CHECKPOINT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"CHECKPOINT_MARKER:([A-Za-z0-9_-]+)").expect("valid regex"));

/// Inline image reference `![description](url)`.
static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").expect("valid regex"));

/// HTML tags (including comments without an inner `>`).
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

/// Strip HTML tags and decode entities from one line.
fn clean_line(line: &str) -> String {
    let stripped = TAG_RE.replace_all(line, "");
    // Non-breaking spaces become plain spaces rather than U+00A0.
    let stripped = stripped.replace("&nbsp;", " ");
    html_escape::decode_html_entities(&stripped).to_string()
}

/// Line-oriented parser producing [`NoteContent`] from flat text.
pub struct MarkdownParser {
    ids: Box<dyn IdProvider>,
    clock: Box<dyn Clock>,
}

impl MarkdownParser {
    pub fn new() -> Self {
        Self {
            ids: Box::new(UuidIds),
            clock: Box::new(SystemClock),
        }
    }

    /// Use a caller-supplied id provider.
    pub fn with_ids(mut self, ids: Box<dyn IdProvider>) -> Self {
        self.ids = ids;
        self
    }

    /// Use a caller-supplied clock.
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Parse flat text into an ordered block sequence. Total: empty or
    /// unparseable input yields an empty document, never an error.
    pub fn parse(&self, text: &str) -> NoteContent {
        let mut blocks: Vec<Block> = Vec::new();
        let lines: Vec<&str> = text.lines().collect();
        let mut i = 0;

        while i < lines.len() {
            let raw = lines[i];

            // Raw-line rules first; see module docs for why.
            if let Some(caps) = CHECKPOINT_RE.captures(raw) {
                self.push(
                    &mut blocks,
                    BlockContent::Checkpoint {
                        checkpoint_id: caps[1].to_string(),
                    },
                );
                i += 1;
                continue;
            }

            if let Some(caps) = IMAGE_RE.captures(raw) {
                let description = (!caps[1].is_empty()).then(|| caps[1].to_string());
                self.push(
                    &mut blocks,
                    BlockContent::Image {
                        url: caps[2].to_string(),
                        description,
                    },
                );
                i += 1;
                continue;
            }

            // Bare URL lines re-import previously exported image lines.
            // Deliberately kept even though it can claim a link-only
            // paragraph; exports depend on it.
            let bare = raw.trim();
            if bare.starts_with("http://") || bare.starts_with("https://") {
                self.push(
                    &mut blocks,
                    BlockContent::Image {
                        url: bare.to_string(),
                        description: None,
                    },
                );
                i += 1;
                continue;
            }

            let cleaned = clean_line(raw);
            let line = cleaned.trim();
            if line.is_empty() {
                // Blank lines separate blocks; they are never emitted.
                i += 1;
                continue;
            }

            if let Some(fence_rest) = line.strip_prefix("```") {
                let tag = fence_rest.trim();
                let language = if tag.is_empty() {
                    DEFAULT_CODE_LANGUAGE.to_string()
                } else {
                    tag.to_string()
                };

                // Collect raw lines verbatim until the closing fence.
                let mut body: Vec<&str> = Vec::new();
                i += 1;
                while i < lines.len() && !lines[i].trim_start().starts_with("```") {
                    body.push(lines[i]);
                    i += 1;
                }
                // Step over the closing fence if the input wasn't truncated.
                i += 1;

                self.push(
                    &mut blocks,
                    BlockContent::Code {
                        code: body.join("\n"),
                        language,
                    },
                );
                continue;
            }

            let content = if let Some(rest) = line.strip_prefix("# ") {
                BlockContent::heading(rest, 1)
            } else if let Some(rest) = line.strip_prefix("## ") {
                BlockContent::heading(rest, 2)
            } else if let Some(rest) = line.strip_prefix("### ") {
                BlockContent::heading(rest, 3)
            } else if let Some(rest) = line.strip_prefix("> ") {
                BlockContent::quote(rest)
            } else {
                BlockContent::text(line)
            };
            self.push(&mut blocks, content);
            i += 1;
        }

        tracing::trace!(blocks = blocks.len(), "parsed markdown document");
        NoteContent::with_blocks(blocks)
    }

    /// Append a block; `order` is the 0-based emission index.
    fn push(&self, blocks: &mut Vec<Block>, content: BlockContent) {
        let order = blocks.len() as f64;
        blocks.push(Block::new(
            content,
            order,
            self.ids.as_ref(),
            self.clock.as_ref(),
        ));
    }
}

impl Default for MarkdownParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse flat text with the default id provider and clock.
pub fn parse_markdown(text: &str) -> NoteContent {
    MarkdownParser::new().parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BlockKind;

    fn kinds(note: &NoteContent) -> Vec<BlockKind> {
        note.blocks.iter().map(|b| b.kind).collect()
    }

    #[test]
    fn empty_input_yields_empty_document() {
        let note = parse_markdown("");
        assert!(note.blocks.is_empty());
        assert_eq!(note.version, "1.0");

        let note = parse_markdown("\n\n   \n");
        assert!(note.blocks.is_empty());
    }

    #[test]
    fn orders_are_gapless_from_zero() {
        let note = parse_markdown("# a\n\nb\n\n> c");
        let orders: Vec<f64> = note.blocks.iter().map(|b| b.order).collect();
        assert_eq!(orders, [0.0, 1.0, 2.0]);
    }

    #[test]
    fn heading_levels_one_to_three() {
        let note = parse_markdown("# one\n## two\n### three\n#### four");
        assert_eq!(
            note.blocks[0].content,
            BlockContent::heading("one", 1)
        );
        assert_eq!(
            note.blocks[1].content,
            BlockContent::heading("two", 2)
        );
        assert_eq!(
            note.blocks[2].content,
            BlockContent::heading("three", 3)
        );
        // Deeper levels have no rule and fall through to paragraphs.
        assert_eq!(
            note.blocks[3].content,
            BlockContent::text("#### four")
        );
    }

    #[test]
    fn quote_lines_become_quotes() {
        let note = parse_markdown("> wise words");
        assert_eq!(note.blocks[0].content, BlockContent::quote("wise words"));
    }

    #[test]
    fn code_fence_scenario() {
        let note = parse_markdown("intro line\n```js\nlet a = 1;\n```\noutro line");
        assert_eq!(note.blocks.len(), 3);
        assert_eq!(note.blocks[0].content, BlockContent::text("intro line"));
        assert_eq!(
            note.blocks[1].content,
            BlockContent::code("let a = 1;", "js")
        );
        assert_eq!(note.blocks[2].content, BlockContent::text("outro line"));
        let orders: Vec<f64> = note.blocks.iter().map(|b| b.order).collect();
        assert_eq!(orders, [0.0, 1.0, 2.0]);
    }

    #[test]
    fn code_fence_without_language_gets_placeholder() {
        let note = parse_markdown("```\nx\n```");
        assert_eq!(note.blocks[0].content, BlockContent::code("x", "plain"));
    }

    #[test]
    fn code_fence_keeps_raw_lines_verbatim() {
        let note = parse_markdown("```html\n<b>&amp;</b>\n\n# not a heading\n```");
        assert_eq!(
            note.blocks[0].content,
            BlockContent::code("<b>&amp;</b>\n\n# not a heading", "html")
        );
    }

    #[test]
    fn unterminated_fence_consumes_to_end() {
        let note = parse_markdown("```rs\nlet a = 1;\nlet b = 2;");
        assert_eq!(note.blocks.len(), 1);
        assert_eq!(
            note.blocks[0].content,
            BlockContent::code("let a = 1;\nlet b = 2;", "rs")
        );
    }

    #[test]
    fn checkpoint_marker_extracted_anywhere_in_line() {
        let note = parse_markdown("some text CHECKPOINT_MARKER:abc-123 trailing");
        assert_eq!(note.blocks.len(), 1);
        assert_eq!(
            note.blocks[0].content,
            BlockContent::Checkpoint {
                checkpoint_id: "abc-123".to_string()
            }
        );
    }

    #[test]
    fn checkpoint_comment_survives_tag_stripping() {
        let note = parse_markdown("<!-- CHECKPOINT_MARKER:cp-7 -->");
        assert_eq!(
            note.blocks[0].content,
            BlockContent::Checkpoint {
                checkpoint_id: "cp-7".to_string()
            }
        );
    }

    #[test]
    fn inline_image_reference() {
        let note = parse_markdown("![a caption](https://b.png)");
        assert_eq!(
            note.blocks[0].content,
            BlockContent::image("https://b.png", Some("a caption".to_string()))
        );
    }

    #[test]
    fn bare_url_and_standard_image_mix() {
        let note = parse_markdown("https://a.png\n![cap](https://b.png)");
        assert_eq!(kinds(&note), [BlockKind::Image, BlockKind::Image]);
        assert_eq!(
            note.blocks[0].content,
            BlockContent::image("https://a.png", None)
        );
        assert_eq!(
            note.blocks[1].content,
            BlockContent::image("https://b.png", Some("cap".to_string()))
        );
    }

    #[test]
    fn html_is_stripped_and_entities_decoded() {
        let note = parse_markdown("<p>a &lt;b&gt; c&nbsp;d &amp; e</p>");
        assert_eq!(note.blocks[0].content, BlockContent::text("a <b> c d & e"));
    }

    #[test]
    fn line_of_only_tags_is_skipped() {
        let note = parse_markdown("<div></div>\nreal text");
        assert_eq!(note.blocks.len(), 1);
        assert_eq!(note.blocks[0].content, BlockContent::text("real text"));
    }

    #[test]
    fn heading_inside_html_still_parses() {
        let note = parse_markdown("<h1># Title</h1>");
        assert_eq!(note.blocks[0].content, BlockContent::heading("Title", 1));
    }
}
