/// Look up the key already holding a given value
use crate::config::MatchMode;
use crate::store::Entry;

/// Case-insensitive, whitespace-trimmed form used on both sides of a comparison.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Key (text before the first `=`, prefix included) of the first entry holding `value`.
///
/// `Suffix` matches any line that ends with `=` plus the value; `Exact` compares
/// the whole text after the first `=`. Scanning stops at the first hit, so with
/// duplicate values the earliest line wins.
pub fn find_key<'a, I>(entries: I, value: &str, mode: MatchMode) -> Option<&'a str>
where
    I: IntoIterator<Item = Entry<'a>>,
{
    let needle = normalize(value);
    let suffix = format!("={needle}");

    let found = entries.into_iter().find(|entry| match mode {
        MatchMode::Suffix => normalize(entry.line()).ends_with(&suffix),
        MatchMode::Exact => entry.value().is_some_and(|v| normalize(v) == needle),
    });

    match found {
        Some(entry) => {
            log::debug!("value {:?} already stored under {}", value, entry.key());
            Some(entry.key())
        }
        None => {
            log::debug!("no entry holds value {:?}", value);
            None
        }
    }
}
