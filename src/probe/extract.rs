// src/probe/extract.rs

//! Profile page extraction.
//!
//! The helpers here are deliberately naive: they scan tags with a regex and
//! match on class names, which is enough for the handful of elements a
//! profile page exposes. Anything missing degrades to an empty field.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::types::StatusSnapshot;

const IN_GAME_HEADER_CLASS: &str = "profile_in_game_header";
const IN_GAME_MARKER: &str = "In-Game";
const RECENT_GAMES_CLASS: &str = "recent_games";
const GAME_INFO_CLASS: &str = "game_info";
const GAME_NAME_CLASS: &str = "game_name";
const GAME_CAPSULE_CLASS: &str = "game_info_cap";

const VOID_ELEMENTS: &[&str] = &["area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "wbr"];

static OPEN_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<([a-zA-Z][a-zA-Z0-9]*)\b([^>]*)>").expect("open tag pattern is valid")
});

static ANY_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(/?)([a-zA-Z][a-zA-Z0-9]*)\b[^>]*?(/?)>").expect("tag pattern is valid")
});

static ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([a-zA-Z_:][-a-zA-Z0-9_:.]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#)
        .expect("attribute pattern is valid")
});

/// Parse a profile page into a [`StatusSnapshot`].
///
/// - `active` is set when any in-game header mentions `In-Game`.
/// - `label`, `link` and `icon` come from the first game entry under any
///   recent games list that carries a name, and only when `active` is set.
pub fn extract_status(html: &str) -> StatusSnapshot {
    let whole = 0..html.len();

    let active = find_all(html, whole.clone(), |el| el.has_class(IN_GAME_HEADER_CLASS))
        .any(|header| inner_text(html, &header).contains(IN_GAME_MARKER));

    let mut snapshot = StatusSnapshot {
        reachable: true,
        active,
        ..StatusSnapshot::default()
    };

    if !active {
        return snapshot;
    }

    let recent: Vec<_> = find_all(html, whole.clone(), |el| el.has_class(RECENT_GAMES_CLASS))
        .map(|list| list.content(html))
        .collect();

    // Entries without a name are overwritten by the next one.
    let entries = find_all(html, whole, |el| el.has_class(GAME_INFO_CLASS))
        .filter(|info| recent.iter().any(|r| r.contains(&info.open_end)));
    for info in entries {
        fill_game(html, &info, &mut snapshot);
        if !snapshot.label.is_empty() {
            break;
        }
    }

    snapshot
}

/// Read name, link and icon out of one `game_info` entry.
///
/// The name and link anchors must be direct children of their containers;
/// the capsule image may sit at any depth.
fn fill_game(html: &str, info: &Element<'_>, snapshot: &mut StatusSnapshot) {
    let scope = info.content(html);

    snapshot.label = find_element(html, scope.clone(), |el| el.has_class(GAME_NAME_CLASS))
        .and_then(|name| children(html, &name).into_iter().find(|el| el.name == "a"))
        .map(|anchor| inner_text(html, &anchor))
        .unwrap_or_default();

    let capsule = find_element(html, scope, |el| el.has_class(GAME_CAPSULE_CLASS));
    snapshot.link = capsule
        .as_ref()
        .and_then(|cap| children(html, cap).into_iter().find(|el| el.name == "a"))
        .and_then(|anchor| anchor.attr("href"))
        .unwrap_or_default();
    snapshot.icon = capsule
        .and_then(|cap| find_element(html, cap.content(html), |el| el.name == "img"))
        .and_then(|image| image.attr("src"))
        .unwrap_or_default();
}

/// An opening tag located in the page.
#[derive(Debug)]
struct Element<'a> {
    /// Lowercased tag name.
    name: String,
    /// Raw attribute text between the tag name and `>`.
    attrs: &'a str,
    /// Byte offset just past the opening tag's `>`.
    open_end: usize,
}

impl Element<'_> {
    fn attr(&self, name: &str) -> Option<String> {
        ATTR_RE
            .captures_iter(self.attrs)
            .find(|caps| caps[1].eq_ignore_ascii_case(name))
            .map(|caps| decode_entities(attr_value(&caps)))
    }

    fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.name.as_str()) || self.attrs.trim_end().ends_with('/')
    }

    /// Byte range of everything between this tag and its matching close tag.
    ///
    /// Unclosed elements run to the end of the document.
    fn content(&self, html: &str) -> std::ops::Range<usize> {
        if self.is_void() {
            return self.open_end..self.open_end;
        }

        let mut depth = 1usize;
        for caps in ANY_TAG_RE.captures_iter(&html[self.open_end..]) {
            if !caps[2].eq_ignore_ascii_case(&self.name) {
                continue;
            }
            let closing = !caps[1].is_empty();
            let self_closing = !caps[3].is_empty();
            if closing {
                depth -= 1;
                if depth == 0 {
                    let start = caps.get(0).map_or(0, |m| m.start());
                    return self.open_end..self.open_end + start;
                }
            } else if !self_closing {
                depth += 1;
            }
        }

        self.open_end..html.len()
    }
}

fn attr_value<'t>(caps: &Captures<'t>) -> &'t str {
    caps.get(2)
        .or_else(|| caps.get(3))
        .or_else(|| caps.get(4))
        .map_or("", |m| m.as_str())
}

/// Every opening tag within `scope` satisfying `pred`, in document order.
fn find_all<'a, P>(
    html: &'a str,
    scope: std::ops::Range<usize>,
    pred: P,
) -> impl Iterator<Item = Element<'a>>
where
    P: Fn(&Element<'a>) -> bool,
{
    let offset = scope.start;
    OPEN_TAG_RE.captures_iter(&html[scope]).filter_map(move |caps| {
        let whole = caps.get(0)?;
        let attrs = caps.get(2)?;
        let element = Element {
            name: caps[1].to_ascii_lowercase(),
            attrs: &html[offset + attrs.start()..offset + attrs.end()],
            open_end: offset + whole.end(),
        };
        pred(&element).then_some(element)
    })
}

/// First opening tag within `scope` satisfying `pred`.
fn find_element<'a>(
    html: &'a str,
    scope: std::ops::Range<usize>,
    pred: impl Fn(&Element<'a>) -> bool,
) -> Option<Element<'a>> {
    find_all(html, scope, pred).next()
}

/// Direct children of `parent`, skipping over each child's own content.
fn children<'a>(html: &'a str, parent: &Element<'a>) -> Vec<Element<'a>> {
    let scope = parent.content(html);
    let mut out = Vec::new();
    let mut pos = scope.start;
    while pos < scope.end {
        let Some(child) = find_element(html, pos..scope.end, |_| true) else {
            break;
        };
        pos = child.content(html).end.max(child.open_end);
        out.push(child);
    }
    out
}

/// Visible text inside an element, tags stripped and whitespace collapsed.
fn inner_text(html: &str, element: &Element<'_>) -> String {
    let inner = &html[element.content(html)];
    normalize_ws(&decode_entities(&strip_tags(inner)))
}

fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/// Decode the handful of entities profile pages actually use.
fn decode_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#039;", "'")
        .replace("&amp;", "&")
}

fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
