//! Line based tokenizer and block passes.

/// Opening and closing marker of a fenced code block.
const FENCE: &str = "```";

/// Heading depth supported by the dialect (`#` through `####`).
const MAX_HEADING_LEVEL: usize = 4;

/// Call-out flavour of a `> ` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalloutKind {
    /// `> **Title**rest` renders a titled note box.
    Note { title: String },
    /// `> ⚠️ text` renders a warning box with a fixed title.
    Warning,
    /// `> 💡 text` renders a tip box with a fixed title.
    Tip,
}

/// Marker that introduced a list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListMarker {
    /// `* item`
    Bullet,
    /// `12. item`, keeping the digits so they stay in the rendered text.
    Ordered(String),
}

/// Single list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub marker: ListMarker,
    pub text: String,
}

impl ListItem {
    /// Returns the item text as displayed, with the ordinal kept for
    /// ordered items.
    pub fn display_text(&self) -> String {
        match &self.marker {
            ListMarker::Bullet => self.text.clone(),
            ListMarker::Ordered(number) => format!("{}. {}", number, self.text),
        }
    }
}

/// Block level element of a document.
///
/// `Text`, `ListItem` and `Blank` only exist between passes: the paragraph
/// pass turns `Text` into `Paragraph`, reconciliation drops `Blank`, and
/// list coalescing folds runs of `ListItem` into a single `List`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph { text: String },
    CodeBlock { lang: Option<String>, code: String },
    Callout { kind: CalloutKind, body: String },
    Quote { text: String },
    ListItem(ListItem),
    List(Vec<ListItem>),
    Text { text: String },
    Blank,
}

impl Block {
    /// Returns true for fenced blocks tagged `swift`.
    pub fn is_swift_code(&self) -> bool {
        matches!(self, Block::CodeBlock { lang: Some(lang), .. } if lang.eq_ignore_ascii_case("swift"))
    }
}

/// Parses source text into renderable blocks.
///
/// Runs the tokenizer followed by the paragraph, reconciliation and list
/// coalescing passes, in that order.
///
/// # Arguments
///
/// * `source`: Markdown subset text, any content accepted
///
/// # Returns
///
/// Blocks ready for rendering; never contains `Text`, `Blank` or a bare
/// `ListItem`
pub fn parse_blocks(source: &str) -> Vec<Block> {
    let blocks = tokenize(source);
    let blocks = wrap_paragraphs(blocks);
    let blocks = reconcile(blocks);
    coalesce_lists(blocks)
}

/// Splits source text into raw line blocks.
///
/// Fenced code blocks are recognised first and consume every line up to
/// their closing fence. A fence without a closing line is not a code
/// block: its opening line is kept as text and the following lines are
/// tokenized normally, so no content is lost.
pub fn tokenize(source: &str) -> Vec<Block> {
    let lines: Vec<&str> = source.lines().collect();
    let closes = next_fence_closes(&lines);
    let mut blocks = Vec::new();
    let mut index = 0;

    while index < lines.len() {
        let line = lines[index];

        if let Some(lang) = fence_open(line)
            && let Some(close) = closes[index + 1]
        {
            blocks.push(Block::CodeBlock {
                lang,
                code: lines[index + 1..close].join("\n"),
            });
            index = close + 1;
            continue;
        }

        blocks.push(classify_line(line));
        index += 1;
    }

    blocks
}

/// Wraps every remaining prose line in a paragraph.
fn wrap_paragraphs(blocks: Vec<Block>) -> Vec<Block> {
    blocks
        .into_iter()
        .map(|block| match block {
            Block::Text { text } => Block::Paragraph { text },
            other => other,
        })
        .collect()
}

/// Removes blank separators left between block elements.
fn reconcile(blocks: Vec<Block>) -> Vec<Block> {
    blocks
        .into_iter()
        .filter(|block| *block != Block::Blank)
        .collect()
}

/// Folds adjacent list items into one list.
fn coalesce_lists(blocks: Vec<Block>) -> Vec<Block> {
    let mut result: Vec<Block> = Vec::with_capacity(blocks.len());

    for block in blocks {
        match block {
            Block::ListItem(item) => match result.last_mut() {
                Some(Block::List(items)) => items.push(item),
                _ => result.push(Block::List(vec![item])),
            },
            Block::List(mut items) => match result.last_mut() {
                Some(Block::List(existing)) => existing.append(&mut items),
                _ => result.push(Block::List(items)),
            },
            other => result.push(other),
        }
    }

    result
}

/// Returns the info string of an opening fence, `Some(None)` for a bare
/// fence, or `None` when the line does not open a fence.
fn fence_open(line: &str) -> Option<Option<String>> {
    let info = line.strip_prefix(FENCE)?.trim();

    // Backticks after the opener mean an inline span such as ```x```
    if info.contains('`') {
        return None;
    }

    if info.is_empty() {
        Some(None)
    } else {
        Some(Some(info.to_string()))
    }
}

/// For every line index, the first closing fence at or after it.
///
/// Has one extra trailing slot so `index + 1` is always in range.
fn next_fence_closes(lines: &[&str]) -> Vec<Option<usize>> {
    let mut closes = vec![None; lines.len() + 1];
    for index in (0..lines.len()).rev() {
        closes[index] = if lines[index].trim_end() == FENCE {
            Some(index)
        } else {
            closes[index + 1]
        };
    }
    closes
}

fn classify_line(line: &str) -> Block {
    if line.trim().is_empty() {
        return Block::Blank;
    }

    if let Some(heading) = parse_heading(line) {
        return heading;
    }

    if let Some(rest) = line.strip_prefix("> ") {
        return parse_callout(rest);
    }

    if let Some(item) = parse_list_item(line) {
        return Block::ListItem(item);
    }

    Block::Text {
        text: line.to_string(),
    }
}

fn parse_heading(line: &str) -> Option<Block> {
    let level = line.bytes().take_while(|&b| b == b'#').count();
    if level == 0 || level > MAX_HEADING_LEVEL {
        return None;
    }

    let text = line[level..].strip_prefix(' ')?;
    Some(Block::Heading {
        level: level as u8,
        text: text.to_string(),
    })
}

/// Classifies the content of a `> ` line.
///
/// Titled notes win over warnings, warnings over tips, and anything else
/// is a plain quote.
fn parse_callout(rest: &str) -> Block {
    if let Some(after) = rest.strip_prefix("**")
        && let Some(end) = after.find("**")
    {
        return Block::Callout {
            kind: CalloutKind::Note {
                title: after[..end].to_string(),
            },
            body: after[end + 2..].to_string(),
        };
    }

    let warning = rest
        .strip_prefix("\u{26A0}\u{FE0F} ")
        .or_else(|| rest.strip_prefix("\u{26A0} "));
    if let Some(body) = warning {
        return Block::Callout {
            kind: CalloutKind::Warning,
            body: body.to_string(),
        };
    }

    if let Some(body) = rest.strip_prefix("\u{1F4A1} ") {
        return Block::Callout {
            kind: CalloutKind::Tip,
            body: body.to_string(),
        };
    }

    Block::Quote {
        text: rest.to_string(),
    }
}

fn parse_list_item(line: &str) -> Option<ListItem> {
    if let Some(text) = line.strip_prefix("* ") {
        return Some(ListItem {
            marker: ListMarker::Bullet,
            text: text.to_string(),
        });
    }

    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let text = line[digits..].strip_prefix(". ")?;
    Some(ListItem {
        marker: ListMarker::Ordered(line[..digits].to_string()),
        text: text.to_string(),
    })
}
