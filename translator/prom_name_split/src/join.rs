//! Joining fragments with per-gap separators.

use tracing::trace;

/// Separator for gap `gap`, or `default_separator` past the end of `separators`.
#[inline]
fn separator_at<'s, T: AsRef<str>>(
    separators: &'s [T],
    gap: usize,
    default_separator: &'s str,
) -> &'s str {
    separators
        .get(gap)
        .map_or(default_separator, AsRef::<str>::as_ref)
}

/// Exact byte length of [`join_with_separators`] for the same arguments.
pub fn joined_len<S, T>(elements: &[S], separators: &[T], default_separator: &str) -> usize
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    let elements_len: usize = elements.iter().map(|e| e.as_ref().len()).sum();
    let gaps = elements.len().saturating_sub(1);
    let separators_len: usize = (0..gaps)
        .map(|gap| separator_at(separators, gap, default_separator).len())
        .sum();
    elements_len + separators_len
}

/// Concatenate `elements`, placing `separators[i]` between element `i` and `i + 1`.
///
/// Gaps past the end of `separators` get `default_separator`; extra
/// separators are ignored. A single element is returned as-is and an empty
/// slice gives an empty string.
pub fn join_with_separators<S, T>(
    elements: &[S],
    separators: &[T],
    default_separator: &str,
) -> String
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    let (first, rest) = match elements {
        [] => return String::new(),
        [only] => return only.as_ref().to_owned(),
        [first, rest @ ..] => (first, rest),
    };

    let mut joined = String::with_capacity(joined_len(elements, separators, default_separator));
    joined.push_str(first.as_ref());
    for (gap, element) in rest.iter().enumerate() {
        joined.push_str(separator_at(separators, gap, default_separator));
        joined.push_str(element.as_ref());
    }

    trace!(
        elements = elements.len(),
        separators = separators.len(),
        defaulted = rest.len().saturating_sub(separators.len()),
        "joined"
    );

    joined
}
