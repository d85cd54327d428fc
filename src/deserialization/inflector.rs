//! English inflection helpers for relationship and type names.
//!
//! Only the two transformations deserialization needs are provided:
//! [`singularize`] (`authors` → `author`) and [`classify`]
//! (`blog-posts` → `BlogPost`).
//!
//! The rule table covers common English plurals. Latin and Greek plurals
//! outside it fall through to the trailing-`s` rule, so `bases` becomes
//! `base` (not `basis`) and `cacti` stays `cacti`. Names like these need an
//! explicit relationship name on the server side.

use heck::ToUpperCamelCase;

/// Words whose singular and plural forms are identical.
const UNCOUNTABLES: &[&str] = &[
    "equipment",
    "information",
    "rice",
    "money",
    "species",
    "series",
    "fish",
    "sheep",
    "jeans",
    "police",
    "news",
];

/// Whole-word plural → singular pairs.
const IRREGULARS: &[(&str, &str)] = &[
    ("people", "person"),
    ("men", "man"),
    ("children", "child"),
    ("sexes", "sex"),
    ("moves", "move"),
    ("zombies", "zombie"),
    ("oxen", "ox"),
    ("mice", "mouse"),
    ("lice", "louse"),
    ("axes", "axis"),
];

/// Suffix rewrites; the first matching suffix wins.
const SUFFIX_RULES: &[(&str, &str)] = &[
    ("databases", "database"),
    ("quizzes", "quiz"),
    ("matrices", "matrix"),
    ("vertices", "vertex"),
    ("indices", "index"),
    ("aliases", "alias"),
    ("alias", "alias"),
    ("statuses", "status"),
    ("status", "status"),
    ("octopi", "octopus"),
    ("octopus", "octopus"),
    ("viri", "virus"),
    ("virus", "virus"),
    ("crises", "crisis"),
    ("crisis", "crisis"),
    ("testes", "testis"),
    ("testis", "testis"),
    ("shoes", "shoe"),
    ("buses", "bus"),
    ("bus", "bus"),
    ("movies", "movie"),
    ("tives", "tive"),
    ("hives", "hive"),
    ("analyses", "analysis"),
    ("analysis", "analysis"),
    ("diagnoses", "diagnosis"),
    ("parentheses", "parenthesis"),
    ("prognoses", "prognosis"),
    ("synopses", "synopsis"),
    ("theses", "thesis"),
    ("oes", "o"),
    ("xes", "x"),
    ("ches", "ch"),
    ("sses", "ss"),
    ("shes", "sh"),
];

/// Returns the singular form of an English plural.
///
/// Compound names separated by `_` or `-` only have their last word
/// singularized.
///
/// # Example
///
/// ```rust
/// use jsonapi_model::deserialization::singularize;
///
/// assert_eq!(singularize("authors"), "author");
/// assert_eq!(singularize("categories"), "category");
/// assert_eq!(singularize("blog_posts"), "blog_post");
/// assert_eq!(singularize("people"), "person");
/// ```
#[must_use]
pub fn singularize(word: &str) -> String {
    let split_at = word.rfind(['_', '-']).map_or(0, |i| i + 1);
    let (head, tail) = word.split_at(split_at);
    format!("{head}{}", singularize_word(tail))
}

/// Converts a (possibly plural, dasherized or namespaced) wire type into a
/// class-style name.
///
/// # Example
///
/// ```rust
/// use jsonapi_model::deserialization::classify;
///
/// assert_eq!(classify("user"), "User");
/// assert_eq!(classify("users"), "User");
/// assert_eq!(classify("blog-posts"), "BlogPost");
/// ```
#[must_use]
pub fn classify(type_name: &str) -> String {
    let base = type_name.rsplit('.').next().unwrap_or(type_name);
    singularize(base).to_upper_camel_case()
}

fn singularize_word(word: &str) -> String {
    let lower = word.to_lowercase();

    if lower.is_empty() || UNCOUNTABLES.contains(&lower.as_str()) {
        return word.to_string();
    }

    if let Some((_, singular)) = IRREGULARS.iter().find(|(plural, _)| *plural == lower) {
        return match_leading_case(word, singular);
    }

    for (suffix, replacement) in SUFFIX_RULES {
        if lower.ends_with(suffix) {
            return replace_suffix(word, suffix.len(), replacement);
        }
    }

    if let Some(stem) = lower.strip_suffix("ies") {
        let consonant_before = stem
            .chars()
            .last()
            .is_some_and(|c| !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y'));
        if consonant_before || stem.ends_with("qu") {
            return replace_suffix(word, 3, "y");
        }
    }

    if let Some(stem) = lower.strip_suffix("ves") {
        match stem.chars().last() {
            Some('l' | 'r') => return replace_suffix(word, 3, "f"),
            Some(c) if c != 'f' => return replace_suffix(word, 3, "fe"),
            _ => {}
        }
    }

    if lower.ends_with("ss") {
        return word.to_string();
    }

    if lower.ends_with("ta") || lower.ends_with("ia") {
        return replace_suffix(word, 1, "um");
    }

    if lower.ends_with('s') {
        return replace_suffix(word, 1, "");
    }

    word.to_string()
}

fn replace_suffix(word: &str, suffix_len: usize, replacement: &str) -> String {
    let keep = word.len().saturating_sub(suffix_len);
    if !word.is_char_boundary(keep) {
        return word.to_string();
    }
    format!("{}{replacement}", &word[..keep])
}

fn match_leading_case(original: &str, replacement: &str) -> String {
    if original.chars().next().is_some_and(char::is_uppercase) {
        let mut chars = replacement.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        })
    } else {
        replacement.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singularize_regular_plurals() {
        assert_eq!(singularize("authors"), "author");
        assert_eq!(singularize("notes"), "note");
        assert_eq!(singularize("comments"), "comment");
    }

    #[test]
    fn test_singularize_keeps_singulars() {
        assert_eq!(singularize("author"), "author");
        assert_eq!(singularize("address"), "address");
        assert_eq!(singularize("status"), "status");
    }

    #[test]
    fn test_singularize_suffix_rules() {
        assert_eq!(singularize("categories"), "category");
        assert_eq!(singularize("boxes"), "box");
        assert_eq!(singularize("matches"), "match");
        assert_eq!(singularize("wolves"), "wolf");
        assert_eq!(singularize("knives"), "knife");
        assert_eq!(singularize("statuses"), "status");
        assert_eq!(singularize("data"), "datum");
        assert_eq!(singularize("heroes"), "hero");
    }

    #[test]
    fn test_singularize_irregular_and_uncountable() {
        assert_eq!(singularize("people"), "person");
        assert_eq!(singularize("People"), "Person");
        assert_eq!(singularize("children"), "child");
        assert_eq!(singularize("sheep"), "sheep");
        assert_eq!(singularize("series"), "series");
    }

    #[test]
    fn test_singularize_compound_names_touch_last_word_only() {
        assert_eq!(singularize("blog_posts"), "blog_post");
        assert_eq!(singularize("news-items"), "news-item");
        assert_eq!(singularize("key_people"), "key_person");
    }

    #[test]
    fn test_singularize_unlisted_classical_plurals() {
        assert_eq!(singularize("bases"), "base");
        assert_eq!(singularize("cacti"), "cacti");
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("user"), "User");
        assert_eq!(classify("users"), "User");
        assert_eq!(classify("blog-posts"), "BlogPost");
        assert_eq!(classify("line_items"), "LineItem");
        assert_eq!(classify("schema.categories"), "Category");
        assert_eq!(classify(""), "");
    }
}
