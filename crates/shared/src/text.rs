//! Case and accent handling shared by the shopping list and the ingredient
//! catalog.

use std::cmp::Ordering;

/// `lowercase(trim(name)) | lowercase(trim(unit))`
pub fn merge_key(name: &str, unit: &str) -> String {
    format!(
        "{}|{}",
        name.trim().to_lowercase(),
        unit.trim().to_lowercase()
    )
}

pub fn starts_with_uppercase(value: &str) -> bool {
    value.chars().next().is_some_and(char::is_uppercase)
}

pub fn starts_with_lowercase(value: &str) -> bool {
    value.chars().next().is_some_and(char::is_lowercase)
}

/// Case-insensitive ordering where accented letters sort next to their base
/// letter ("Échalote" before "Farine"), accents only breaking ties.
pub fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    let a_lower = a.to_lowercase();
    let b_lower = b.to_lowercase();

    primary_key(&a_lower)
        .cmp(&primary_key(&b_lower))
        .then_with(|| a_lower.cmp(&b_lower))
}

/// Folds the accented lowercase letters of Latin-1 plus `œ` and `æ`. Other
/// letters (`ø`, `ł`, `ş`, ...) keep their code point order.
fn primary_key(value: &str) -> String {
    let mut key = String::with_capacity(value.len());

    for c in value.chars() {
        match c {
            'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => key.push('a'),
            'ç' => key.push('c'),
            'è' | 'é' | 'ê' | 'ë' => key.push('e'),
            'ì' | 'í' | 'î' | 'ï' => key.push('i'),
            'ñ' => key.push('n'),
            'ò' | 'ó' | 'ô' | 'õ' | 'ö' => key.push('o'),
            'ù' | 'ú' | 'û' | 'ü' => key.push('u'),
            'ý' | 'ÿ' => key.push('y'),
            'æ' => key.push_str("ae"),
            'œ' => key.push_str("oe"),
            c => key.push(c),
        }
    }

    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_key() {
        assert_eq!(merge_key(" Sel ", "G"), "sel|g");
        assert_eq!(merge_key("sel", "g"), merge_key("SEL", " g"));
        assert_ne!(merge_key("Farine", "g"), merge_key("Farine", "c. à soupe"));
    }

    #[test]
    fn test_leading_case() {
        assert!(starts_with_uppercase("Tomates"));
        assert!(starts_with_uppercase("Échalote"));
        assert!(!starts_with_uppercase("tomates"));
        assert!(!starts_with_uppercase("1 pincée"));
        assert!(!starts_with_uppercase(""));

        assert!(starts_with_lowercase("g"));
        assert!(!starts_with_lowercase("G"));
        assert!(!starts_with_lowercase("½"));
    }

    #[test]
    fn test_compare_ignore_case() {
        let mut names = vec!["poivre", "Échalote", "farine", "Beurre", "œuf", "Ail"];
        names.sort_by(|a, b| compare_ignore_case(a, b));

        assert_eq!(
            names,
            vec!["Ail", "Beurre", "Échalote", "farine", "œuf", "poivre"]
        );
        assert_eq!(compare_ignore_case("Sel", "sel"), Ordering::Equal);
        assert_eq!(compare_ignore_case("pate", "pâte"), Ordering::Less);
    }

    #[test]
    fn test_unfolded_letters_keep_code_point_order() {
        assert_eq!(compare_ignore_case("Øl", "zeste"), Ordering::Greater);
        assert_eq!(compare_ignore_case("Ève", "eve"), Ordering::Greater);
        assert_eq!(compare_ignore_case("Ève", "fève"), Ordering::Less);
    }
}
