//! Boundary-driven tokenizer.
//!
//! Splits a name into maximal runs of non-boundary characters and records
//! what sat between each pair of runs, so the caller can rebuild the name
//! with the same (or normalized) word boundaries.
//!
//! Scanning happens in two passes. [`token_spans`] walks the text once and
//! records span offsets only; [`split_tokens`] then slices tokens and gaps
//! out of the original text. Leading and trailing boundary runs have no
//! token on one side and are dropped.

use std::borrow::Cow;

use smallvec::SmallVec;
use tracing::trace;

use crate::join::join_with_separators;
use crate::span::TokenSpan;

/// How the text between two tokens is rendered as a separator.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum SeparatorStyle {
    /// Keep the gap exactly as it appears in the input.
    Verbatim,
    /// Replace the gap with one `_` per character, whatever its UTF-8 width.
    #[default]
    Underscore,
}

impl SeparatorStyle {
    /// Render one gap of the scanned text.
    #[inline]
    pub fn render<'a>(self, gap: &'a str) -> Cow<'a, str> {
        match self {
            SeparatorStyle::Verbatim => Cow::Borrowed(gap),
            SeparatorStyle::Underscore => Cow::Owned("_".repeat(gap.chars().count())),
        }
    }
}

/// `true` keeps multi-byte separators as-is, `false` flattens them to underscores.
impl From<bool> for SeparatorStyle {
    fn from(preserve_multi_byte_separators: bool) -> Self {
        if preserve_multi_byte_separators {
            SeparatorStyle::Verbatim
        } else {
            SeparatorStyle::Underscore
        }
    }
}

/// Tokens of a scanned name with the separators found between them.
///
/// `separators()[i]` sits between `tokens()[i]` and `tokens()[i + 1]`, so
/// there is one separator fewer than tokens (none at all when the name had
/// no tokens).
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Split<'a> {
    tokens: Vec<&'a str>,
    separators: Vec<Cow<'a, str>>,
}

impl<'a> Split<'a> {
    #[inline]
    pub fn tokens(&self) -> &[&'a str] {
        &self.tokens
    }

    #[inline]
    pub fn separators(&self) -> &[Cow<'a, str>] {
        &self.separators
    }

    /// Number of tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// `true` when the input was empty or made only of boundary characters.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn into_parts(self) -> (Vec<&'a str>, Vec<Cow<'a, str>>) {
        (self.tokens, self.separators)
    }

    /// Copy tokens and separators out of the scanned text.
    pub fn to_owned_parts(&self) -> (Vec<String>, Vec<String>) {
        (
            self.tokens.iter().map(|t| (*t).to_owned()).collect(),
            self.separators.iter().map(|s| s.clone().into_owned()).collect(),
        )
    }

    /// Join the tokens back with their separators.
    ///
    /// With [`SeparatorStyle::Verbatim`] this reproduces the input minus any
    /// leading or trailing boundary run.
    pub fn rejoin(&self, default_separator: &str) -> String {
        join_with_separators(&self.tokens, &self.separators, default_separator)
    }
}

/// Find the byte span of every token in `text`.
///
/// `is_boundary` is called once per `char`, in order. Consecutive boundary
/// characters form a single gap; no empty spans are produced.
pub fn token_spans<F>(text: &str, mut is_boundary: F) -> SmallVec<[TokenSpan; 32]>
where
    F: FnMut(char) -> bool,
{
    let mut spans = SmallVec::new();
    // Start of the token being scanned, if inside one.
    let mut start: Option<usize> = None;

    for (pos, c) in text.char_indices() {
        if is_boundary(c) {
            if let Some(token_start) = start.take() {
                spans.push(TokenSpan::new(token_start, pos));
            }
        } else if start.is_none() {
            start = Some(pos);
        }
    }

    // Last token may run to end of input.
    if let Some(token_start) = start {
        spans.push(TokenSpan::new(token_start, text.len()));
    }

    spans
}

/// Split `text` into tokens and the separators between them.
///
/// Input with no tokens (empty, or boundary characters only) yields an
/// empty [`Split`].
pub fn split_tokens<F>(text: &str, is_boundary: F, style: SeparatorStyle) -> Split<'_>
where
    F: FnMut(char) -> bool,
{
    let spans = token_spans(text, is_boundary);

    let tokens: Vec<&str> = spans.iter().map(|span| &text[span.to_range()]).collect();
    let separators: Vec<Cow<'_, str>> = spans
        .windows(2)
        .map(|pair| style.render(&text[pair[0].gap_to(pair[1])]))
        .collect();

    trace!(
        input_len = text.len(),
        tokens = tokens.len(),
        ?style,
        "split tokens"
    );

    Split { tokens, separators }
}

/// Owned form of [`split_tokens`] keyed by the boolean separator flag.
///
/// `preserve_multi_byte_separators` selects [`SeparatorStyle::Verbatim`]
/// when `true` and [`SeparatorStyle::Underscore`] when `false`.
pub fn tokens_and_separators<F>(
    text: &str,
    is_boundary: F,
    preserve_multi_byte_separators: bool,
) -> (Vec<String>, Vec<String>)
where
    F: FnMut(char) -> bool,
{
    split_tokens(text, is_boundary, preserve_multi_byte_separators.into()).to_owned_parts()
}

#[cfg(test)]
mod tests;
