//! Quoted-field masking so naive separator splitting stays safe.
//!
//! A raw line may contain double-quoted fields with embedded separators.
//! Before splitting, every `"..."` span is lifted into a per-row
//! [`QuotedFieldStore`] and replaced by a positional placeholder token;
//! after dispatch the placeholder is swapped back for the original text,
//! quotes included. Multi-line quoted fields and escaped quotes inside a
//! quoted field are out of scope.

/// Leading text of a placeholder token.
const PLACEHOLDER_PREFIX: &str = "quotedString(";
/// Trailing character of a placeholder token.
const PLACEHOLDER_SUFFIX: char = ')';

/// Ordered store of raw quoted substrings, scoped to exactly one row.
///
/// Slot `N` is referenced by the `quotedString(N)` token spliced into
/// the masked line.
#[derive(Debug, Default)]
pub struct QuotedFieldStore {
    fields: Vec<String>,
}

impl QuotedFieldStore {
    fn push(&mut self, raw: String) -> usize {
        self.fields.push(raw);
        self.fields.len() - 1
    }

    /// Returns the stored quoted text (quotes included) for a slot.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Replaces every quoted span in `line` with a placeholder token.
///
/// Spans are extracted left to right; each one becomes the next slot of
/// the returned store. The scan repeats until no quoted span remains, so
/// any number of quoted fields per line is supported. A dangling quote
/// with no closing partner is left in place as literal text.
///
/// # Examples
///
/// ```
/// use rowfix_core::quote::mask;
///
/// let (masked, store) = mask("a,\"b,c\",d");
/// assert_eq!(masked, "a,quotedString(0),d");
/// assert_eq!(store.get(0), Some("\"b,c\""));
/// ```
pub fn mask(line: &str) -> (String, QuotedFieldStore) {
    let mut store = QuotedFieldStore::default();
    let mut masked = line.to_string();
    while let Some((start, end)) = next_quoted_span(&masked) {
        let index = store.push(masked[start..=end].to_string());
        masked.replace_range(start..=end, &placeholder(index));
    }
    (masked, store)
}

/// Restores a field that is exactly one placeholder token.
///
/// Anything else — partial matches, non-numeric indices, or an index the
/// store never issued — is returned unchanged.
pub fn unmask<'a>(field: &'a str, store: &'a QuotedFieldStore) -> &'a str {
    placeholder_index(field)
        .and_then(|index| store.get(index))
        .unwrap_or(field)
}

/// Byte range of the first maximal `"[^"]*"` span, if any.
fn next_quoted_span(line: &str) -> Option<(usize, usize)> {
    let open = line.find('"')?;
    let close = line[open + 1..].find('"')? + open + 1;
    Some((open, close))
}

fn placeholder(index: usize) -> String {
    format!("{PLACEHOLDER_PREFIX}{index}{PLACEHOLDER_SUFFIX}")
}

/// Parses the slot index when the whole field matches the token shape.
fn placeholder_index(field: &str) -> Option<usize> {
    let digits = field
        .strip_prefix(PLACEHOLDER_PREFIX)?
        .strip_suffix(PLACEHOLDER_SUFFIX)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
