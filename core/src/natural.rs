/// Human-friendly ordering: `item2` sorts before `item10`
///
/// Text is cut into alternating runs of non-digits and ASCII digits, always
/// starting with a (possibly empty) text run. Digit runs compare as integers of
/// any length, text runs by code point, run by run from the left.
use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").expect("valid digit run regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Run<'a> {
    Text(&'a str),
    Number(&'a str),
}

fn runs(text: &str) -> Vec<Run<'_>> {
    let mut out = Vec::new();
    let mut last = 0;

    for m in DIGIT_RUN.find_iter(text) {
        out.push(Run::Text(&text[last..m.start()]));
        out.push(Run::Number(m.as_str()));
        last = m.end();
    }
    out.push(Run::Text(&text[last..]));

    out
}

/// Compare two digit strings by numeric value without parsing into a fixed width.
fn cmp_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn cmp_run(a: &Run<'_>, b: &Run<'_>) -> Ordering {
    match (a, b) {
        (Run::Number(x), Run::Number(y)) => cmp_digits(x, y),
        (Run::Text(x), Run::Text(y)) => x.cmp(y),
        // Positions alternate identically in both sequences
        (Run::Text(_), Run::Number(_)) => Ordering::Less,
        (Run::Number(_), Run::Text(_)) => Ordering::Greater,
    }
}

pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let left = runs(a);
    let right = runs(b);

    for (x, y) in left.iter().zip(right.iter()) {
        let ord = cmp_run(x, y);
        if ord != Ordering::Equal {
            return ord;
        }
    }

    left.len().cmp(&right.len())
}

/// Stable: lines that compare equal keep their relative order.
pub fn sort_naturally<S: AsRef<str>>(lines: &mut [S]) {
    lines.sort_by(|a, b| natural_cmp(a.as_ref(), b.as_ref()));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(input: &[&str]) -> Vec<String> {
        let mut lines: Vec<String> = input.iter().map(|s| s.to_string()).collect();
        sort_naturally(&mut lines);
        lines
    }

    #[test]
    fn numbers_compare_as_integers() {
        assert_eq!(
            sorted(&["ui.ed.item2=a", "ui.ed.item10=b", "ui.ed.item1=c"]),
            vec!["ui.ed.item1=c", "ui.ed.item2=a", "ui.ed.item10=b"]
        );
    }

    #[test]
    fn text_runs_compare_by_code_point() {
        // Uppercase sorts before lowercase, as with plain string comparison
        assert_eq!(natural_cmp("Zebra", "apple"), Ordering::Less);
        assert_eq!(natural_cmp("ui.ed.a", "ui.ed.b"), Ordering::Less);
        assert_eq!(natural_cmp("ui.ed.b=1", "ui.ed.b"), Ordering::Greater);
    }

    #[test]
    fn leading_digit_sorts_after_empty_text_run() {
        // "7up" -> ["", 7, "up"], "a" -> ["a"]; "" < "a"
        assert_eq!(natural_cmp("7up", "a"), Ordering::Less);
        assert_eq!(natural_cmp("10", "9"), Ordering::Greater);
    }

    #[test]
    fn leading_zeros_are_numerically_equal() {
        assert_eq!(natural_cmp("a07", "a7"), Ordering::Equal);
        assert_eq!(natural_cmp("a007b", "a7c"), Ordering::Less);
    }

    #[test]
    fn huge_numbers_do_not_overflow() {
        let big = "k123456789012345678901234567890";
        let bigger = "k1234567890123456789012345678901";
        assert_eq!(natural_cmp(big, bigger), Ordering::Less);
    }

    #[test]
    fn sort_is_stable_for_equal_lines() {
        assert_eq!(sorted(&["x07", "x7", "x007"]), vec!["x07", "x7", "x007"]);
    }

    #[test]
    fn sorting_sorted_input_is_identity() {
        let once = sorted(&["b2", "a10", "a9", "b10", "a", "ui.ed.z1"]);
        let twice = {
            let refs: Vec<&str> = once.iter().map(String::as_str).collect();
            sorted(&refs)
        };
        assert_eq!(once, twice);
        assert_eq!(once, vec!["a", "a9", "a10", "b2", "b10", "ui.ed.z1"]);
    }

    #[test]
    fn runs_alternate_starting_with_text() {
        assert_eq!(
            runs("ab12cd"),
            vec![Run::Text("ab"), Run::Number("12"), Run::Text("cd")]
        );
        assert_eq!(runs("12"), vec![Run::Text(""), Run::Number("12"), Run::Text("")]);
    }
}
