//! Heuristic segmentation of Vietnamese definition text.
//!
//! Anh-Việt dictionary sources are inconsistent about how they mark
//! part-of-speech boundaries, so segmentation layers several strategies:
//!
//! 1. [`split_pos_sections`] - partition a definition into spans, one per
//!    part-of-speech marker
//! 2. [`split_meanings`] - split a span on sense-delimiter punctuation
//! 3. [`split_meaning_examples`] - peel example phrases off a sense
//! 4. [`split_example_pair`] - split an example into its bilingual halves
//!
//! The marker-family priority order in [`split_pos_sections`] is a fixed
//! observable contract: a laxer family never contributes matches when a
//! stricter one has already matched, and reordering the families would
//! change which spans existing dictionaries produce.

use std::sync::OnceLock;

use regex::Regex;

use super::models::Pos;

/// The ten Vietnamese part-of-speech names recognized in definitions,
/// as a regex alternation.
const POS_NAMES: &str =
    "danh từ|tính từ|động từ|trạng từ|giới từ|liên từ|đại từ|thán từ|từ hạn định|mạo từ";

/// Marker tokens that introduce example phrases inside a sense segment,
/// tried in this order; the first token contained in the segment wins.
const EXAMPLE_MARKERS: &[&str] = &[": ", " => ", "Ex: ", "VD: ", "e.g. ", "Ex. "];

static POS_FAMILIES: OnceLock<Vec<Regex>> = OnceLock::new();
static BARE_POS_PATTERN: OnceLock<Regex> = OnceLock::new();
static EXAMPLE_PAIR_PATTERN: OnceLock<Regex> = OnceLock::new();
static PRON_PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();

/// Marker-pattern families in priority order. Each family wraps the same ten
/// part-of-speech names in one delimiter style.
fn pos_families() -> &'static [Regex] {
    POS_FAMILIES.get_or_init(|| {
        [
            format!(r"\*({POS_NAMES})\*"),
            format!(r"@({POS_NAMES})@"),
            format!(r"<({POS_NAMES})>"),
            format!(r"\[({POS_NAMES})\]"),
            format!(r"\(({POS_NAMES})\)"),
            format!(r"^({POS_NAMES})[,:\s]"),
        ]
        .iter()
        .map(|p| Regex::new(p).expect("Invalid part-of-speech marker pattern"))
        .collect()
    })
}

fn bare_pos_regex() -> &'static Regex {
    BARE_POS_PATTERN.get_or_init(|| {
        Regex::new(&format!("({POS_NAMES})")).expect("Invalid bare part-of-speech pattern")
    })
}

fn example_pair_regex() -> &'static Regex {
    EXAMPLE_PAIR_PATTERN.get_or_init(|| {
        Regex::new(r"\s+-\s+|\s*:\s*|\s*=\s*|\s*→\s*")
            .expect("Invalid example separator pattern")
    })
}

/// Pronunciation span patterns, tried in order: `/…/`, `[…]`,
/// `pronunciation: …`.
fn pron_patterns() -> &'static [Regex] {
    PRON_PATTERNS.get_or_init(|| {
        [r"/([^/]+)/", r"\[([^\]]+)\]", r"pronunciation: (.+)"]
            .iter()
            .map(|p| Regex::new(p).expect("Invalid pronunciation pattern"))
            .collect()
    })
}

/// Extract a pronunciation from raw definition text, if one is marked.
///
/// The first pattern that matches decides; a match whose captured span trims
/// to nothing yields `None`.
pub fn extract_pronunciation(text: &str) -> Option<String> {
    for re in pron_patterns() {
        if let Some(caps) = re.captures(text) {
            let pron = caps[1].trim();
            return (!pron.is_empty()).then(|| pron.to_string());
        }
    }
    None
}

/// Remove every pronunciation-style span from the text.
fn strip_pronunciations(text: &str) -> String {
    let mut out = text.to_string();
    for re in pron_patterns() {
        out = re.replace_all(&out, "").into_owned();
    }
    out
}

/// Partition a cleaned definition into part-of-speech-tagged spans.
///
/// Families from [`pos_families`] are tried in order; the first family with
/// at least one match wins outright and its matches partition the text (each
/// span runs from the end of its marker to the start of the next marker, or
/// to the end of the string). Matches from losing families are never merged
/// in.
///
/// When no family matches anywhere, pronunciation spans are removed and the
/// text is searched for a bare occurrence of any part-of-speech name:
/// everything after the first such name becomes one span of that
/// part-of-speech. Failing that too, the whole text is one `Unknown` span.
pub fn split_pos_sections(text: &str) -> Vec<(Pos, String)> {
    for family in pos_families() {
        let matches: Vec<_> = family.captures_iter(text).collect();
        if matches.is_empty() {
            continue;
        }

        let mut sections = Vec::with_capacity(matches.len());
        for (i, caps) in matches.iter().enumerate() {
            let pos = Pos::from_vietnamese(&caps[1]);
            let start = caps.get(0).map(|m| m.end()).unwrap_or(0);
            let end = matches
                .get(i + 1)
                .and_then(|next| next.get(0))
                .map(|m| m.start())
                .unwrap_or(text.len());
            sections.push((pos, text[start..end].to_string()));
        }
        return sections;
    }

    // No marker family anywhere. Pronunciation spans would confuse the bare
    // name search (they share the bracket syntax), so drop them first.
    let rest = strip_pronunciations(text);
    if let Some(caps) = bare_pos_regex().captures(&rest) {
        let pos = Pos::from_vietnamese(&caps[1]);
        let tail = caps
            .get(0)
            .map(|m| rest[m.end()..].trim().to_string())
            .unwrap_or_default();
        return vec![(pos, tail)];
    }

    vec![(Pos::Unknown, rest.trim().to_string())]
}

/// Split a part-of-speech span into individual sense segments, trimmed and
/// non-empty.
///
/// Delimiters are `;`, `◦`, `•`, `·`, `※`, and commas that are not inside
/// parentheses. A comma counts as inside parentheses when a `)` follows it
/// with no intervening `(` - the convention the source data was written
/// against, kept here with an explicit scan since the regex crate has no
/// lookahead.
pub fn split_meanings(span: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut start = 0;

    for (idx, ch) in span.char_indices() {
        let split_here = match ch {
            ';' | '◦' | '•' | '·' | '※' => true,
            ',' => !comma_inside_parens(&span[idx + ch.len_utf8()..]),
            _ => false,
        };
        if split_here {
            segments.push(&span[start..idx]);
            start = idx + ch.len_utf8();
        }
    }
    segments.push(&span[start..]);

    segments
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn comma_inside_parens(tail: &str) -> bool {
    for ch in tail.chars() {
        match ch {
            '(' => return false,
            ')' => return true,
            _ => {}
        }
    }
    false
}

/// Split one sense segment into its pure meaning and example phrases.
///
/// The first marker from [`EXAMPLE_MARKERS`] contained in the segment splits
/// it once; the tail is then broken on `;` or `|` into individual phrases.
/// Without a marker the whole segment is the meaning. The returned meaning
/// may be empty (marker at the very start); callers drop such definitions
/// but still process the examples.
pub fn split_meaning_examples(segment: &str) -> (String, Vec<String>) {
    for marker in EXAMPLE_MARKERS {
        if let Some((head, tail)) = segment.split_once(marker) {
            let examples = tail
                .split([';', '|'])
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            return (head.trim().to_string(), examples);
        }
    }
    (segment.trim().to_string(), Vec::new())
}

/// Split an example phrase into `(source_text, target_text)` halves.
///
/// Candidate separators - a spaced hyphen, a colon, an equals sign, or an
/// arrow (the latter three optionally spaced) - compete in a single
/// alternation; the leftmost occurrence wins and only the first split is
/// taken. With no separator the whole phrase is the source text and the
/// target is empty.
pub fn split_example_pair(phrase: &str) -> (String, String) {
    let mut parts = example_pair_regex().splitn(phrase, 2);
    let text = parts.next().unwrap_or("").trim().to_string();
    let text_vi = parts.next().map(|s| s.trim().to_string()).unwrap_or_default();
    (text, text_vi)
}
