//! Naming variants derived from the domain word.
//!
//! These are single-word heuristics, not an inflection dictionary:
//! irregular plurals ("person") and words that are already plural are
//! passed through the same rules as everything else.

/// Upper-cases the first character and lower-cases the rest.
///
/// An empty string is returned unchanged.
pub fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}

/// English plural heuristic.
///
/// * trailing `y` becomes `ies`
/// * trailing `s`, `sh` or `ch` gets `es`
/// * anything else gets `s`
pub fn pluralize(word: &str) -> String {
    if let Some(stem) = word.strip_suffix('y') {
        format!("{stem}ies")
    } else if word.ends_with('s') || word.ends_with("sh") || word.ends_with("ch") {
        format!("{word}es")
    } else {
        format!("{word}s")
    }
}

/// Case fold used for the lower-case naming variants.
pub fn lower(word: &str) -> String {
    word.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_multibyte_first_char() {
        assert_eq!(title_case("élan"), "Élan");
        assert_eq!(title_case("x"), "X");
    }

    #[test]
    fn test_pluralize_is_not_a_dictionary() {
        assert_eq!(pluralize("person"), "persons");
        assert_eq!(pluralize("day"), "daies");
        assert_eq!(pluralize("orders"), "orderses");
    }
}
