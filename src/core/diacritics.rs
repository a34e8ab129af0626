//! The fixed diacritic map and the per-token rule.
//!
//! Buryat orthography uses four letters that are often typed without their
//! diacritics: `ө`, `ү`, `һ` and `ё`. The no-diacritics data variant keeps
//! the original token and appends a folded alternate after `//`, so the
//! analyzer accepts both spellings.

/// Special letters and the plain letters they fold to.
///
/// `һ` folds to Latin `h`; the other three fold to Cyrillic letters.
pub const DIACRITICS: [(char, char); 4] = [('ө', 'о'), ('ү', 'у'), ('һ', 'h'), ('ё', 'е')];

/// Separator placed between a token and its folded alternate.
pub const VARIANT_SEPARATOR: &str = "//";

/// Returns the plain letter for a special one, or `None` for any other char.
#[inline]
pub fn fold_char(c: char) -> Option<char> {
    DIACRITICS
        .iter()
        .find_map(|&(special, plain)| (special == c).then_some(plain))
}

/// Whether the text contains at least one special letter.
#[inline]
pub fn has_diacritics(text: &str) -> bool {
    text.chars().any(|c| fold_char(c).is_some())
}

/// Replaces every special letter with its plain equivalent.
///
/// All other characters are kept as they are.
///
/// # Example
///
/// ```
/// use bua_prep::fold;
///
/// assert_eq!(fold("һара"), "hара");
/// assert_eq!(fold("нүүд"), "нууд");
/// ```
pub fn fold(text: &str) -> String {
    text.chars().map(|c| fold_char(c).unwrap_or(c)).collect()
}

/// Adds a diacriticless alternate to a single stem or inflection variant.
///
/// Tokens without special letters are returned unchanged; others become
/// `token//folded`.
///
/// # Example
///
/// ```
/// use bua_prep::add_diacriticless;
///
/// assert_eq!(add_diacriticless("аба"), "аба");
/// assert_eq!(add_diacriticless("һара"), "һара//hара");
/// ```
pub fn add_diacriticless(token: &str) -> String {
    if !has_diacritics(token) {
        return token.to_string();
    }
    let mut out = String::with_capacity(token.len() * 2 + VARIANT_SEPARATOR.len());
    out.push_str(token);
    out.push_str(VARIANT_SEPARATOR);
    out.extend(token.chars().map(|c| fold_char(c).unwrap_or(c)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_has_four_entries() {
        assert_eq!(DIACRITICS.len(), 4);
        assert_eq!(fold_char('ө'), Some('о'));
        assert_eq!(fold_char('ү'), Some('у'));
        assert_eq!(fold_char('һ'), Some('h'));
        assert_eq!(fold_char('ё'), Some('е'));
    }

    #[test]
    fn test_unmapped_chars() {
        assert_eq!(fold_char('а'), None);
        assert_eq!(fold_char('h'), None);
        assert_eq!(fold_char('Ө'), None);
        assert_eq!(fold_char('/'), None);
    }

    #[test]
    fn test_plain_token_unchanged() {
        for token in ["аба", "-нууд", "", "hара", "abc|def"] {
            assert_eq!(add_diacriticless(token), token);
        }
    }

    #[test]
    fn test_special_token_gets_alternate() {
        assert_eq!(add_diacriticless("һара"), "һара//hара");
        assert_eq!(add_diacriticless("өөрөө"), "өөрөө//оороо");
        assert_eq!(add_diacriticless("ёhо"), "ёhо//еhо");
    }

    #[test]
    fn test_fold_keeps_other_chars() {
        assert_eq!(fold("[ү].х-ө"), "[у].х-о");
        assert_eq!(fold("Ү"), "Ү");
    }

    #[test]
    fn test_fold_is_idempotent() {
        for token in ["һүүлдэ", "ёhөү", "аба", ""] {
            let once = fold(token);
            assert!(!has_diacritics(&once));
            assert_eq!(fold(&once), once);
        }
    }

    #[test]
    fn test_rule_matches_definition() {
        for token in ["һара", "-нүүд", "бөө", "ёһотой"] {
            assert_eq!(
                add_diacriticless(token),
                format!("{}{}{}", token, VARIANT_SEPARATOR, fold(token))
            );
        }
    }
}
