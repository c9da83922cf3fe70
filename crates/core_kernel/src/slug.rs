//! Slug derivation
//!
//! A slug is the lowercase, URL-safe token stored next to an author's or an
//! opposition's display name. Derivation is deterministic:
//!
//! 1. parts are joined with a single space and lowercased;
//! 2. common Latin diacritics are folded (`é` → `e`, `ß` → `ss`) and `&`
//!    is spelled out as `and`;
//! 3. runs of whitespace and separator punctuation become one `-`;
//! 4. any other character that is not a letter or digit is dropped;
//! 5. repeated `-` collapse and leading/trailing `-` are trimmed.

use once_cell::sync::Lazy;
use regex::Regex;

static SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\-_/\\.,:;|+~]+").expect("valid separator regex"));
static DISALLOWED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{L}\p{N}-]+").expect("valid disallowed-char regex"));
static DASH_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"-{2,}").expect("valid dash regex"));

/// Derives the slug of a single display string
///
/// ```rust
/// use core_kernel::slugify;
///
/// assert_eq!(slugify("Jean-Paul Sartre"), "jean-paul-sartre");
/// assert_eq!(slugify("  Søren   Kierkegaard! "), "soren-kierkegaard");
/// ```
pub fn slugify(text: &str) -> String {
    let folded: String = text.to_lowercase().chars().fold(String::new(), |mut acc, c| {
        match transliterate(c) {
            Some(replacement) => acc.push_str(replacement),
            None => acc.push(c),
        }
        acc
    });

    let dashed = SEPARATOR_RE.replace_all(&folded, "-");
    let stripped = DISALLOWED_RE.replace_all(&dashed, "");
    let collapsed = DASH_RUN_RE.replace_all(&stripped, "-");
    collapsed.trim_matches('-').to_string()
}

/// Derives one slug from several display strings joined by a space
///
/// Used for oppositions, whose slug is built from both authors' names in role
/// order.
pub fn slugify_parts<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = parts
        .into_iter()
        .map(|part| part.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(" ");
    slugify(&joined)
}

fn transliterate(c: char) -> Option<&'static str> {
    let folded = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' => "a",
        'æ' => "ae",
        'ç' | 'ć' | 'č' => "c",
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ę' => "e",
        'ì' | 'í' | 'î' | 'ï' | 'ī' => "i",
        'ł' => "l",
        'ñ' | 'ń' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' => "o",
        'œ' => "oe",
        'ś' | 'š' => "s",
        'ß' => "ss",
        'ù' | 'ú' | 'û' | 'ü' | 'ū' => "u",
        'ý' | 'ÿ' => "y",
        'ź' | 'ż' | 'ž' => "z",
        '&' => "and",
        _ => return None,
    };
    Some(folded)
}
