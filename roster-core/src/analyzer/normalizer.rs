use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use crate::analyzer::abbreviations::{
    ABBREVIATIONS, AHMEDABAD_TOKENS, CAMPUS_LETTERS, IIM_AHMEDABAD, IIM_PHRASE,
};

/// Characters dropped without leaving a word break, so `"I.I.T."` folds to
/// `"iit"` and `"King's"` to `"kings"`.
#[inline(always)]
const fn is_elided(c: char) -> bool {
    matches!(c, '.' | '\'' | '\u{2019}')
}

/// Configuration options for institution normalization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NormalizerConfig {
    /// When enabled, strips diacritical marks from Latin characters.
    /// For example, "École" becomes "ecole".
    pub strip_diacritics: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            strip_diacritics: true,
        }
    }
}

/// Canonicalizes free-text institution names.
///
/// Performs the following operations, in order:
/// - Lowercases (Unicode-aware) and optionally strips Latin diacritics
/// - Turns punctuation into word breaks and collapses whitespace
/// - Expands known abbreviations, whole words only
/// - Expands a campus letter only right after its anchor word
///   (`"management a"` → `"management ahmedabad"`)
/// - Collapses any Ahmedabad management-institute spelling to
///   [`IIM_AHMEDABAD`]
///
/// The output has no leading, trailing, or repeated spaces, and
/// `normalize(normalize(x)) == normalize(x)`.
///
/// # Examples
///
/// ```
/// use roster_core::analyzer::InstitutionNormalizer;
///
/// let normalizer = InstitutionNormalizer::default();
/// assert_eq!(normalizer.normalize("IIT-Delhi"), "indian institute of technology delhi");
/// assert_eq!(normalizer.normalize("IIM A"), "indian institute of management ahmedabad");
/// ```
#[derive(Clone, Debug)]
pub struct InstitutionNormalizer {
    config: NormalizerConfig,
    abbreviations: FxHashMap<&'static str, &'static str>,
}

impl Default for InstitutionNormalizer {
    fn default() -> Self {
        Self::new(NormalizerConfig::default())
    }
}

impl InstitutionNormalizer {
    /// Creates a new normalizer with the specified configuration.
    pub fn new(config: NormalizerConfig) -> Self {
        Self {
            config,
            abbreviations: ABBREVIATIONS.iter().copied().collect(),
        }
    }

    /// Normalizes a name into an existing String buffer.
    ///
    /// Clears the buffer before writing.
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        out.clear();

        let mut folded = String::with_capacity(input.len());
        self.fold_into(input, &mut folded);

        for token in folded.split(' ') {
            if token.is_empty() {
                continue;
            }
            if let Some(expansion) = self.abbreviations.get(token) {
                push_word(out, expansion);
                continue;
            }
            if let Some(city) = campus_city(last_word(out), token) {
                push_word(out, city);
                continue;
            }
            push_word(out, token);
        }

        if denotes_iim_ahmedabad(out) {
            out.clear();
            out.push_str(IIM_AHMEDABAD);
        }
    }

    /// Normalizes a name and returns a new String.
    #[inline]
    pub fn normalize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len() + 16);
        self.normalize_into(input, &mut out);
        out
    }

    /// Lowercases, folds, and splits on punctuation. Writes single-space
    /// separated words with no leading or trailing space.
    fn fold_into(&self, input: &str, out: &mut String) {
        let strip = self.config.strip_diacritics;
        let mut pending_space = false;

        for ch in input.chars() {
            for lowered in ch.to_lowercase() {
                let folded = if strip { fold_latin1(lowered) } else { lowered };
                if strip && folded == '\0' {
                    continue;
                }

                if folded.is_alphanumeric() {
                    if pending_space && !out.is_empty() {
                        out.push(' ');
                    }
                    pending_space = false;
                    out.push(folded);
                } else if !is_elided(folded) {
                    pending_space = true;
                }
            }
        }
    }
}

/// `true` when a normalized name is the Ahmedabad management institute.
///
/// Expects output of [`InstitutionNormalizer::normalize`].
pub fn denotes_iim_ahmedabad(normalized: &str) -> bool {
    normalized.contains(IIM_PHRASE)
        && normalized
            .split(' ')
            .any(|token| AHMEDABAD_TOKENS.contains(&token))
}

/// Normalizes with the default configuration.
pub fn normalize_institution(name: &str) -> String {
    static DEFAULT: OnceLock<InstitutionNormalizer> = OnceLock::new();
    DEFAULT
        .get_or_init(InstitutionNormalizer::default)
        .normalize(name)
}

#[inline]
fn push_word(out: &mut String, word: &str) {
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(word);
}

#[inline]
fn last_word(out: &str) -> &str {
    out.rsplit(' ').next().unwrap_or("")
}

#[inline]
fn campus_city(anchor: &str, letter: &str) -> Option<&'static str> {
    if letter.len() != 1 {
        return None;
    }
    CAMPUS_LETTERS
        .iter()
        .find(|(a, l, _)| *a == anchor && *l == letter)
        .map(|(_, _, city)| *city)
}

#[inline(always)]
fn fold_latin1(c: char) -> char {
    if ('\u{0300}'..='\u{036F}').contains(&c) {
        return '\0';
    }

    match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' | 'ā' | 'ă' | 'ą' | 'æ' => 'a',
        'ç' | 'ć' | 'č' | 'ĉ' | 'ċ' => 'c',
        'ð' | 'đ' => 'd',
        'é' | 'è' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'í' | 'ì' | 'î' | 'ï' | 'ī' | 'ĭ' | 'į' | 'ı' => 'i',
        'ł' => 'l',
        'ñ' | 'ń' | 'ň' | 'ņ' => 'n',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' | 'ō' | 'ŏ' | 'ő' | 'ø' | 'œ' => 'o',
        'ś' | 'š' | 'ş' | 'ß' => 's',
        'ú' | 'ù' | 'û' | 'ü' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ž' | 'ż' => 'z',
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn norm(input: &str) -> String {
        InstitutionNormalizer::default().normalize(input)
    }

    #[test]
    fn lowercases_and_trims() {
        assert_eq!(norm("  Stanford   University "), "stanford university");
        assert_eq!(norm("HARVARD"), "harvard");
    }

    #[test]
    fn empty_input() {
        assert_eq!(norm(""), "");
        assert_eq!(norm("   "), "");
        assert_eq!(norm(" ,;-- "), "");
    }

    #[test]
    fn punctuation_becomes_word_break() {
        assert_eq!(norm("Texas A&M"), "texas a m");
        assert_eq!(norm("Delhi-University (North Campus)"), "delhi university north campus");
    }

    #[test]
    fn dots_and_apostrophes_are_elided() {
        assert_eq!(norm("I.I.T. Bombay"), "indian institute of technology bombay");
        assert_eq!(norm("King's College"), "kings college");
        assert_eq!(norm("St. Stephen\u{2019}s"), "st stephens");
    }

    #[test]
    fn expands_whole_words() {
        assert_eq!(norm("IIT Delhi"), "indian institute of technology delhi");
        assert_eq!(norm("MIT"), "massachusetts institute of technology");
        assert_eq!(norm("BITS Pilani"), "birla institute of technology and science pilani");
    }

    #[test]
    fn does_not_expand_inside_words() {
        assert_eq!(norm("Summit College"), "summit college");
        assert_eq!(norm("IITian Network"), "iitian network");
        assert_eq!(norm("Smith Univ"), "smith university");
    }

    #[test]
    fn campus_letter_after_anchor() {
        assert_eq!(norm("IIT D"), "indian institute of technology delhi");
        assert_eq!(norm("IIM-B"), "indian institute of management bangalore");
        assert_eq!(norm("Indian Institute of Management L"), "indian institute of management lucknow");
    }

    #[test]
    fn campus_letter_elsewhere_untouched() {
        assert_eq!(norm("Plan A School"), "plan a school");
        assert_eq!(norm("Technology Z"), "technology z");
        assert_eq!(norm("A Management"), "a management");
    }

    #[test]
    fn ahmedabad_variants_collapse() {
        for input in [
            "IIM A",
            "IIM Ahmedabad",
            "IIMA",
            "Indian Institute of Management, Ahmedabad (IIMA)",
            "Indian Institute of Management Amdavad",
            "PGP, IIM Ahmedabad",
        ] {
            assert_eq!(norm(input), IIM_AHMEDABAD, "{input}");
        }
    }

    #[test]
    fn other_campuses_do_not_collapse() {
        assert_eq!(norm("IIM Calcutta"), "indian institute of management calcutta");
        assert!(!denotes_iim_ahmedabad(&norm("IIM Bangalore")));
        assert!(!denotes_iim_ahmedabad(&norm("Ahmedabad University")));
    }

    #[test]
    fn diacritics_stripped_by_default() {
        assert_eq!(norm("École Polytechnique"), "ecole polytechnique");
        assert_eq!(norm("Universität München"), "universitat munchen");
    }

    #[test]
    fn diacritics_preserved_when_disabled() {
        let n = InstitutionNormalizer::new(NormalizerConfig {
            strip_diacritics: false,
        });
        assert_eq!(n.normalize("École"), "école");
    }

    #[test]
    fn combining_marks_removed_when_stripping() {
        assert_eq!(norm("Caf\u{0301}e"), "cafe");
    }

    #[test]
    fn non_latin_passthrough() {
        assert_eq!(norm("清华大学"), "清华大学");
        assert_eq!(norm("МГУ"), "мгу");
    }

    #[test]
    fn normalize_into_clears_buffer() {
        let n = InstitutionNormalizer::default();
        let mut buf = String::from("stale");
        n.normalize_into("LSE", &mut buf);
        assert_eq!(buf, "london school of economics");
        n.normalize_into("", &mut buf);
        assert_eq!(buf, "");
    }

    #[test]
    fn free_function_matches_default() {
        assert_eq!(normalize_institution("IIT K"), norm("IIT K"));
    }

    #[test]
    fn idempotent_samples() {
        let samples = [
            "IIM A",
            "iit d b",
            "Indian Institute of Management a b",
            "I.I.T. (Bombay)",
            "technology technology b",
            "Universität, München",
        ];
        for s in samples {
            let once = norm(s);
            assert_eq!(norm(&once), once, "{s}");
        }
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(input in "[A-Za-z .,;()'&-]{0,40}") {
            let once = norm(&input);
            prop_assert_eq!(norm(&once), once);
        }

        #[test]
        fn normalize_is_idempotent_with_abbreviations(
            words in prop::collection::vec(
                prop::sample::select(vec!["iit", "IIM", "a", "b", "d", "management", "technology", "ahmedabad", "x", "mit", "of"]),
                0..8,
            )
        ) {
            let input = words.join(" ");
            let once = norm(&input);
            prop_assert_eq!(norm(&once), once);
        }

        #[test]
        fn output_has_no_stray_spaces(input in "\\PC{0,30}") {
            let out = norm(&input);
            prop_assert!(!out.starts_with(' '));
            prop_assert!(!out.ends_with(' '));
            prop_assert!(!out.contains("  "));
        }
    }
}
