use super::*;
use pretty_assertions::assert_eq;

fn is_dash(c: char) -> bool {
    c == '-'
}

fn is_not_alnum(c: char) -> bool {
    !c.is_ascii_alphanumeric()
}

// === Span pass ===

#[test]
fn spans_cover_maximal_runs() {
    let spans = token_spans("foo--bar", is_dash);
    assert_eq!(spans.as_slice(), [TokenSpan::new(0, 3), TokenSpan::new(5, 8)]);
}

#[test]
fn spans_skip_leading_and_trailing_boundaries() {
    let spans = token_spans("--foo-", is_dash);
    assert_eq!(spans.as_slice(), [TokenSpan::new(2, 5)]);
}

#[test]
fn spans_use_byte_offsets_for_multi_byte_chars() {
    // 'é' is two bytes, so "wörld" starts at byte 7
    let spans = token_spans("héllo wörld", |c| c == ' ');
    assert_eq!(spans.as_slice(), [TokenSpan::new(0, 6), TokenSpan::new(7, 13)]);
}

#[test]
fn predicate_sees_each_char_once_in_order() {
    let mut seen = Vec::new();
    let _ = token_spans("a.é", |c| {
        seen.push(c);
        c == '.'
    });
    assert_eq!(seen, ['a', '.', 'é']);
}

// === Verbatim separators ===

#[test]
fn verbatim_keeps_gap_text() {
    let split = split_tokens("foo--bar", is_dash, SeparatorStyle::Verbatim);
    assert_eq!(split.tokens(), ["foo", "bar"]);
    assert_eq!(split.separators(), ["--"]);
}

#[test]
fn verbatim_keeps_mixed_gaps() {
    let split = split_tokens(
        "http.server/request_count",
        is_not_alnum,
        SeparatorStyle::Verbatim,
    );
    assert_eq!(split.tokens(), ["http", "server", "request", "count"]);
    assert_eq!(split.separators(), [".", "/", "_"]);
}

#[test]
fn verbatim_separators_borrow_input() {
    let split = split_tokens("a::b", |c| c == ':', SeparatorStyle::Verbatim);
    assert!(matches!(split.separators()[0], Cow::Borrowed("::")));
}

#[test]
fn verbatim_keeps_multi_byte_gap() {
    let split = split_tokens("a→→b", |c| c == '→', SeparatorStyle::Verbatim);
    assert_eq!(split.separators(), ["→→"]);
}

// === Underscore separators ===

#[test]
fn underscore_replaces_each_char() {
    let split = split_tokens("foo--bar", is_dash, SeparatorStyle::Underscore);
    assert_eq!(split.tokens(), ["foo", "bar"]);
    assert_eq!(split.separators(), ["__"]);
}

#[test]
fn underscore_counts_chars_not_bytes() {
    // each arrow is three bytes
    let split = split_tokens("a→→b", |c| c == '→', SeparatorStyle::Underscore);
    assert_eq!(split.tokens(), ["a", "b"]);
    assert_eq!(split.separators(), ["__"]);
}

#[test]
fn underscore_around_multi_byte_tokens() {
    let split = split_tokens("héllo wörld", |c| c == ' ', SeparatorStyle::Underscore);
    assert_eq!(split.tokens(), ["héllo", "wörld"]);
    assert_eq!(split.separators(), ["_"]);
}

#[test]
fn underscore_is_default_style() {
    assert_eq!(SeparatorStyle::default(), SeparatorStyle::Underscore);
}

// === Edges ===

#[test]
fn single_token_has_no_separators() {
    let split = split_tokens("requests", is_dash, SeparatorStyle::Verbatim);
    assert_eq!(split.tokens(), ["requests"]);
    assert!(split.separators().is_empty());
}

#[test]
fn leading_and_trailing_runs_are_dropped() {
    let split = split_tokens("__foo__bar__", |c| c == '_', SeparatorStyle::Verbatim);
    assert_eq!(split.tokens(), ["foo", "bar"]);
    assert_eq!(split.separators(), ["__"]);
}

#[test]
fn empty_input_has_no_tokens() {
    let split = split_tokens("", is_dash, SeparatorStyle::Verbatim);
    assert!(split.is_empty());
    assert!(split.separators().is_empty());
}

#[test]
fn boundary_only_input_has_no_tokens() {
    let split = split_tokens("----", is_dash, SeparatorStyle::Underscore);
    assert!(split.is_empty());
    assert_eq!(split.len(), 0);
    assert!(split.separators().is_empty());
}

#[test]
fn separators_track_token_count() {
    let split = split_tokens("a-b--c---d", is_dash, SeparatorStyle::Verbatim);
    assert_eq!(split.len(), 4);
    assert_eq!(split.separators().len(), split.len() - 1);
}

// === Split helpers ===

#[test]
fn rejoin_round_trips_verbatim() {
    let text = "k8s.pod//cpu→usage";
    let split = split_tokens(text, is_not_alnum, SeparatorStyle::Verbatim);
    assert_eq!(split.rejoin("_"), text);
}

#[test]
fn rejoin_underscore_normalizes() {
    let split = split_tokens(
        "k8s.pod//cpu→usage",
        is_not_alnum,
        SeparatorStyle::Underscore,
    );
    assert_eq!(split.rejoin("_"), "k8s_pod__cpu_usage");
}

#[test]
fn into_parts_returns_both_lists() {
    let (tokens, separators) =
        split_tokens("x.y", |c| c == '.', SeparatorStyle::Verbatim).into_parts();
    assert_eq!(tokens, ["x", "y"]);
    assert_eq!(separators, ["."]);
}

#[test]
fn style_from_bool() {
    assert_eq!(SeparatorStyle::from(true), SeparatorStyle::Verbatim);
    assert_eq!(SeparatorStyle::from(false), SeparatorStyle::Underscore);
}

#[test]
fn owned_form_matches_flag() {
    let (tokens, separators) = tokens_and_separators("foo--bar", is_dash, true);
    assert_eq!(tokens, ["foo", "bar"]);
    assert_eq!(separators, ["--"]);

    let (_, separators) = tokens_and_separators("foo--bar", is_dash, false);
    assert_eq!(separators, ["__"]);
}

#[test]
fn owned_form_handles_zero_tokens() {
    let (tokens, separators) = tokens_and_separators("   ", char::is_whitespace, false);
    assert!(tokens.is_empty());
    assert!(separators.is_empty());
}
