//! Surname search over the carousel slides.

/// Lowercase and keep only Latin/Cyrillic letters, ASCII digits, whitespace
/// and hyphens, then trim.
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .filter(|&c| is_searchable(c))
        .collect::<String>()
        .trim()
        .to_string()
}

fn is_searchable(c: char) -> bool {
    c.is_ascii_lowercase()
        || c.is_ascii_digit()
        || ('а'..='я').contains(&c)
        || c == 'ё'
        || c == '-'
        || c.is_whitespace()
}

/// First whitespace-delimited token of the normalized name, usually the surname.
pub fn leading_token(name: &str) -> String {
    normalize(name)
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Index of the first name whose leading token starts with the query.
pub fn find_slide<'a, I>(query: &str, names: I) -> Option<usize>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let needle = normalize(query);
    if needle.is_empty() {
        return None;
    }
    names
        .into_iter()
        .position(|name| name.is_some_and(|name| leading_token(name).starts_with(&needle)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_case() {
        assert_eq!(normalize("  Иванов А.Б. "), "иванов аб");
        assert_eq!(normalize("O'Neil-Smith!"), "oneil-smith");
        assert_eq!(normalize("Ёлкин 1941"), "ёлкин 1941");
    }

    #[test]
    fn leading_token_is_surname() {
        assert_eq!(leading_token("Иванов А.Б."), "иванов");
        assert_eq!(leading_token("иванов"), "иванов");
        assert_eq!(leading_token("..."), "");
    }

    #[test]
    fn prefix_matches_surname_only() {
        let names = [Some("Петров П.П."), Some("Иванов И.И."), Some("Сидоров")];
        assert_eq!(find_slide("иван", names), Some(1));
        assert_eq!(find_slide("ИВАН", names), Some(1));
        assert_eq!(find_slide("петр", names), Some(0));
        // Initials are not part of the surname token.
        assert_eq!(find_slide("и.и", [Some("Петров И.И.")]), None);
    }

    #[test]
    fn no_match_for_other_surnames() {
        assert_eq!(find_slide("иван", [Some("Петров")]), None);
    }

    #[test]
    fn empty_query_never_matches() {
        let names = [Some("Иванов")];
        assert_eq!(find_slide("", names), None);
        assert_eq!(find_slide("  .,!", names), None);
    }

    #[test]
    fn slides_without_names_are_skipped() {
        let names = [None, Some("Иванов")];
        assert_eq!(find_slide("ив", names), Some(1));
    }
}
