use std::sync::LazyLock;

use regex::Regex;

use crate::domain::value_objects::SettingKind;

static VENDOR_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2,4}$").expect("vendor prefix pattern"));

static CAMEL_CASE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-zA-Z0-9]{1,63}$").expect("camel case pattern"));

static WORD_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z][a-z]+)").expect("word start pattern"));

static LETTER_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-zA-Z])([0-9])").expect("letter digit pattern"));

static LOWER_UPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("lower upper pattern"));

/// Centralized naming rules.
///
/// All checks are total: they answer `true`/`false` and never fail.
pub struct DomainValidator;

impl DomainValidator {
    /// 2 to 4 lowercase latin letters, nothing else.
    pub fn validate_vendor_prefix(prefix: &str) -> bool {
        VENDOR_PREFIX.is_match(prefix)
    }

    /// UpperCamelCase: one capital latin letter followed by 1 to 63 letters
    /// or digits.
    pub fn validate_camel_case_name(name: &str) -> bool {
        !name.is_empty() && CAMEL_CASE_NAME.is_match(name)
    }

    pub fn validate_settings_type(kind: &str) -> bool {
        kind.parse::<SettingKind>().is_ok()
    }

    /// Split an UpperCamelCase string into space separated words.
    ///
    /// Uppercase abbreviations and numbers are treated as separate words:
    /// `"MyModule2Extra"` becomes `"My Module 2 Extra"`.
    pub fn camel_case_to_human_readable(input: &str) -> String {
        let spaced = WORD_START.replace_all(input, " ${1}");
        let spaced = LETTER_DIGIT.replace_all(&spaced, "${1} ${2}");
        let spaced = LOWER_UPPER.replace_all(&spaced, "${1} ${2}");

        spaced.trim().to_string()
    }
}
