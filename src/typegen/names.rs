//! Name derivation for hoisted declarations

use regex::Regex;
use std::sync::LazyLock;

/// Regex for keys that can be emitted as bare identifiers
static IDENTIFIER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());

/// Convert a JSON key to PascalCase for use as a declaration name.
///
/// Words are split on `_`, `-`, whitespace and camel-hump boundaries, then
/// capitalized: `user_profile` -> `UserProfile`, `usersA` -> `UsersA`,
/// `DEFAULT_TYPE` -> `DefaultType`. Idempotent on its own output.
pub(crate) fn pascal_case(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut word_start = true;

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            word_start = true;
            continue;
        }

        // A hump starts a new word: lower-to-upper, or the last capital of an
        // acronym run followed by lowercase (APIKey -> Api + Key)
        let hump = c.is_uppercase()
            && i > 0
            && (chars[i - 1].is_lowercase()
                || (chars[i - 1].is_uppercase()
                    && chars.get(i + 1).is_some_and(|next| next.is_lowercase())));

        if word_start || hump {
            out.extend(c.to_uppercase());
        } else if c.is_uppercase() {
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
        word_start = false;
    }

    out
}

/// Check whether a JSON key can be emitted as a bare field identifier
pub(crate) fn is_valid_identifier(key: &str) -> bool {
    IDENTIFIER_REGEX.is_match(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pascal_case_snake() {
        assert_eq!(pascal_case("user_profile"), "UserProfile");
        assert_eq!(pascal_case("DEFAULT_TYPE"), "DefaultType");
        assert_eq!(pascal_case("a"), "A");
    }

    #[test]
    fn test_pascal_case_kebab_and_space() {
        assert_eq!(pascal_case("foo-bar"), "FooBar");
        assert_eq!(pascal_case("foo bar"), "FooBar");
    }

    #[test]
    fn test_pascal_case_camel_humps() {
        assert_eq!(pascal_case("usersA"), "UsersA");
        assert_eq!(pascal_case("userProfile"), "UserProfile");
        assert_eq!(pascal_case("APIKey"), "ApiKey");
        assert_eq!(pascal_case("FooBAR"), "FooBar");
    }

    #[test]
    fn test_pascal_case_idempotent() {
        for name in ["UserProfile", "UsersA", "Users2", "A"] {
            assert_eq!(pascal_case(name), name);
        }
    }

    #[test]
    fn test_pascal_case_digits() {
        assert_eq!(pascal_case("users2"), "Users2");
        assert_eq!(pascal_case("top10_items"), "Top10Items");
    }

    #[test]
    fn test_pascal_case_empty() {
        assert_eq!(pascal_case(""), "");
        assert_eq!(pascal_case("__"), "");
    }

    #[test]
    fn test_is_valid_identifier() {
        assert!(is_valid_identifier("name"));
        assert!(is_valid_identifier("_private"));
        assert!(is_valid_identifier("$ref"));
        assert!(is_valid_identifier("camelCase2"));

        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("123"));
        assert!(!is_valid_identifier("foo-bar"));
        assert!(!is_valid_identifier("foo bar"));
        assert!(!is_valid_identifier("foo.bar"));
    }
}
