//! Stem and inflection field rewriting.
//!
//! Lexeme and paradigm files describe morphs in tagged field lines:
//!
//! ```text
//!  stem: аба/ һара.|һара.
//! -flex: -нууд|-нүүд
//! ```
//!
//! [`simplify`] walks the text line by line, and on every field line splits
//! the payload into variant tokens and passes each token through
//! [`add_diacriticless`]. Separators are copied verbatim.

use crate::core::diacritics::add_diacriticless;

/// Kind of tagged field line.
///
/// Stem payloads join variants with `|` and `/`; flex payloads only with
/// `/`, so `|` stays inside a flex token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Stem,
    Flex,
}

impl FieldKind {
    /// Literal tag that starts the payload.
    pub const fn tag(self) -> &'static str {
        match self {
            FieldKind::Stem => " stem:",
            FieldKind::Flex => "-flex:",
        }
    }

    /// Characters that separate variant tokens in this kind of payload.
    pub const fn separators(self) -> &'static [char] {
        match self {
            FieldKind::Stem => &[' ', '|', '/'],
            FieldKind::Flex => &[' ', '/'],
        }
    }

    #[inline]
    pub fn is_separator(self, c: char) -> bool {
        self.separators().contains(&c)
    }
}

/// A piece of a field payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Token(&'a str),
    Separator(&'a str),
}

/// Splits a payload into alternating runs of tokens and separators.
///
/// Concatenating the segments gives back the payload.
pub fn segments(payload: &str, kind: FieldKind) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut in_token: Option<bool> = None;

    for (i, c) in payload.char_indices() {
        let is_token = !kind.is_separator(c);
        match in_token {
            Some(prev) if prev == is_token => {}
            Some(prev) => {
                out.push(segment(&payload[start..i], prev));
                start = i;
                in_token = Some(is_token);
            }
            None => in_token = Some(is_token),
        }
    }
    if let Some(prev) = in_token {
        out.push(segment(&payload[start..], prev));
    }
    out
}

fn segment(text: &str, is_token: bool) -> Segment<'_> {
    if is_token {
        Segment::Token(text)
    } else {
        Segment::Separator(text)
    }
}

/// Variant tokens of a payload, without separators.
pub fn tokens(payload: &str, kind: FieldKind) -> Vec<&str> {
    payload
        .split(|c: char| kind.is_separator(c))
        .filter(|t| !t.is_empty())
        .collect()
}

/// Rewrites every token of a payload, keeping separators as they are.
pub fn rewrite_payload(payload: &str, kind: FieldKind) -> String {
    let mut out = String::with_capacity(payload.len() + payload.len() / 2);
    for seg in segments(payload, kind) {
        match seg {
            Segment::Token(token) => out.push_str(&add_diacriticless(token)),
            Segment::Separator(sep) => out.push_str(sep),
        }
    }
    out
}

/// Applies the field rule to the first `kind` tag of a line body.
///
/// `body` must not contain the line terminator. Returns `None` when the tag
/// is absent or the payload is empty.
pub fn rewrite_field(body: &str, kind: FieldKind) -> Option<String> {
    let tag = kind.tag();
    let at = body.find(tag)?;
    let payload_start = at + tag.len();
    let payload = &body[payload_start..];
    if payload.is_empty() {
        return None;
    }

    let mut out = String::with_capacity(body.len() + payload.len());
    out.push_str(&body[..payload_start]);
    out.push_str(&rewrite_payload(payload, kind));
    Some(out)
}

/// Rewrites a single line without its terminator.
///
/// The stem rule runs first, the flex rule then runs over its result.
pub fn simplify_line(body: &str) -> String {
    let stem = rewrite_field(body, FieldKind::Stem);
    let current = stem.as_deref().unwrap_or(body);
    match rewrite_field(current, FieldKind::Flex) {
        Some(flex) => flex,
        None => current.to_string(),
    }
}

/// Adds diacriticless variants for all stems and inflections in a text.
///
/// Lines that are not stem or flex fields are copied unchanged, as are the
/// `\n`, `\r\n` and bare `\r` terminators.
///
/// # Example
///
/// ```
/// use bua_prep::simplify;
///
/// let text = "-lexeme\n lex: һара\n stem: аба/ һара\n";
/// assert_eq!(
///     simplify(text),
///     "-lexeme\n lex: һара\n stem: аба/ һара//hара\n"
/// );
/// ```
pub fn simplify(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    for (body, terminator) in lines(text) {
        out.push_str(&simplify_line(body));
        out.push_str(terminator);
    }
    out
}

/// Splits text into `(body, terminator)` pairs.
///
/// `\r\n`, `\n` and a bare `\r` all end a line. The last line may have an
/// empty terminator.
fn lines(text: &str) -> impl Iterator<Item = (&str, &str)> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(at) = rest.find(['\r', '\n']) else {
            let line = (rest, "");
            rest = "";
            return Some(line);
        };
        let end = if rest[at..].starts_with("\r\n") { at + 2 } else { at + 1 };
        let line = (&rest[..at], &rest[at..end]);
        rest = &rest[end..];
        Some(line)
    })
}
