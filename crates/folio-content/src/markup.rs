//! Restricted inline markup for project descriptions.
//!
//! A description is plain text that may embed links written as
//! `<a href="https://…">text</a>`. Nothing else is markup: any other
//! tag-like sequence is rejected when the description is parsed, so a
//! [`Description`] can be rendered with its links intact and with no way to
//! inject other elements.
//!
//! ```rust
//! use folio_content::markup::{Description, Inline};
//!
//! let desc = Description::parse("A <a href='https://x.test'>tool</a>.").unwrap();
//! assert_eq!(desc.plain_text(), "A tool.");
//! assert_eq!(desc.links().count(), 1);
//! assert!(Description::parse("<script>alert(1)</script>").is_err());
//! ```

use std::fmt;
use std::sync::LazyLock;

use folio_core::{Error, Result};
use regex::{Captures, Regex};

static ANCHOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<a\s+href\s*=\s*(?:"([^"]*)"|'([^']*)')\s*>(.*?)</a\s*>"#)
        .expect("Invalid anchor regex")
});

static TAG_LIKE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[A-Za-z/!?]").expect("Invalid tag regex"));

static ENTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(amp|lt|gt|quot|apos|#39);").expect("Invalid entity regex"));

static HTTP_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i)https?://[^\s/?#]+[^\s]*$").expect("Invalid URL regex")
});

/// One piece of a description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Inline {
    /// Literal text, already entity-decoded.
    Text(String),
    /// A hyperlink.
    Link {
        /// Absolute `http`/`https` target
        href: String,
        /// Visible link text
        text: String,
    },
}

/// A validated description: text runs and links, in source order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Description {
    source: String,
    inlines: Vec<Inline>,
}

impl Description {
    /// Parse description markup.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the text is empty, contains a tag other
    /// than a plain `<a href>` link, nests markup inside a link, or links to
    /// something other than an absolute `http`/`https` URL.
    pub fn parse(source: &str) -> Result<Self> {
        if source.trim().is_empty() {
            return Err(Error::validation_field("description", "must not be empty"));
        }

        let mut inlines = Vec::new();
        let mut cursor = 0;

        for caps in ANCHOR_RE.captures_iter(source) {
            let Some(whole) = caps.get(0) else { continue };
            push_text(&mut inlines, &source[cursor..whole.start()])?;
            inlines.push(parse_anchor(&caps)?);
            cursor = whole.end();
        }
        push_text(&mut inlines, &source[cursor..])?;

        Ok(Self {
            source: source.to_string(),
            inlines,
        })
    }

    /// The markup as originally written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Text runs and links, in order.
    pub fn inlines(&self) -> &[Inline] {
        &self.inlines
    }

    /// Visible text, with links reduced to their text.
    pub fn plain_text(&self) -> String {
        self.inlines
            .iter()
            .map(|inline| match inline {
                Inline::Text(text) => text.as_str(),
                Inline::Link { text, .. } => text.as_str(),
            })
            .collect()
    }

    /// Links contained in the description as `(href, text)` pairs.
    pub fn links(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inlines.iter().filter_map(|inline| match inline {
            Inline::Link { href, text } => Some((href.as_str(), text.as_str())),
            Inline::Text(_) => None,
        })
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Returns `true` for absolute `http://` or `https://` URLs with a host.
pub fn is_http_url(value: &str) -> bool {
    HTTP_URL_RE.is_match(value)
}

/// Decode the five basic HTML entities. Other `&` sequences are kept as is.
pub fn decode_entities(text: &str) -> String {
    ENTITY_RE
        .replace_all(text, |caps: &Captures<'_>| match &caps[1] {
            "amp" => "&",
            "lt" => "<",
            "gt" => ">",
            "quot" => "\"",
            _ => "'",
        })
        .into_owned()
}

fn push_text(inlines: &mut Vec<Inline>, raw: &str) -> Result<()> {
    if raw.is_empty() {
        return Ok(());
    }
    if let Some(tag) = TAG_LIKE_RE.find(raw) {
        return Err(Error::validation_field(
            "description",
            format!(
                "unsupported markup at '{}': only <a href> links are allowed",
                snippet(&raw[tag.start()..])
            ),
        ));
    }
    inlines.push(Inline::Text(decode_entities(raw)));
    Ok(())
}

fn parse_anchor(caps: &Captures<'_>) -> Result<Inline> {
    let href = caps
        .get(1)
        .or_else(|| caps.get(2))
        .map(|m| decode_entities(m.as_str().trim()))
        .unwrap_or_default();
    let raw_text = caps.get(3).map_or("", |m| m.as_str());

    if !is_http_url(&href) {
        return Err(Error::validation_field(
            "description",
            format!("link target '{href}' is not an absolute http(s) URL"),
        ));
    }
    if TAG_LIKE_RE.is_match(raw_text) {
        return Err(Error::validation_field(
            "description",
            format!("markup inside link to '{href}' is not allowed"),
        ));
    }
    let text = decode_entities(raw_text);
    if text.trim().is_empty() {
        return Err(Error::validation_field(
            "description",
            format!("link to '{href}' has no text"),
        ));
    }

    Ok(Inline::Link { href, text })
}

fn snippet(text: &str) -> String {
    text.chars().take(24).collect()
}

// ============================================================================
// Tests
// ============================================================================
