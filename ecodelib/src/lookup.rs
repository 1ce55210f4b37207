use log::trace;

use crate::error::LookupError;
use crate::table::{entries, ErrorEntry, ERROR_TABLE, MAX_CODE};

/// A raw query after deciding which direction to look it up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query<'a> {
    Code(u64),
    Name(&'a str),
}

impl<'a> Query<'a> {
    /// Digits and blanks only (including the empty string) make a code,
    /// anything else is a name.
    pub fn classify(raw: &'a str) -> Query<'a> {
        if raw.chars().all(|c| c.is_ascii_digit() || is_blank(c)) {
            Query::Code(parse_code(raw))
        } else {
            Query::Name(raw)
        }
    }
}

fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

// Leading blanks are skipped and parsing stops at the first non-digit, so
// "1 2" reads as 1 and "" as 0. Overflow saturates.
fn parse_code(raw: &str) -> u64 {
    raw.trim_start_matches(is_blank)
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u64, |acc, d| {
            acc.saturating_mul(10).saturating_add(u64::from(d - b'0'))
        })
}

/// The populated entry at `code`; gaps and codes past the table are unknown.
pub fn lookup_by_code(code: u64) -> Result<&'static ErrorEntry, LookupError> {
    if code > u64::from(MAX_CODE) {
        return Err(LookupError::UnknownCode(code));
    }
    match ERROR_TABLE.get(code as usize) {
        Some(entry) if !entry.is_gap() => Ok(entry),
        _ => Err(LookupError::UnknownCode(code)),
    }
}

/// Code of the first entry, in table order, whose name contains `query`
/// ignoring ASCII case.
pub fn lookup_by_name(query: &str) -> Option<u32> {
    entries()
        .find(|e| e.name.is_some_and(|name| contains_ignore_case(name, query)))
        .map(|e| e.code)
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .any(|w| w.eq_ignore_ascii_case(needle.as_bytes()))
}

/// Classify `raw` and look it up in the matching direction.
pub fn resolve(raw: &str) -> Result<&'static ErrorEntry, LookupError> {
    let query = Query::classify(raw);
    trace!("{:?} classified as {:?}", raw, query);

    match query {
        Query::Code(code) => lookup_by_code(code),
        Query::Name(name) => match lookup_by_name(name) {
            Some(code) => lookup_by_code(u64::from(code)),
            None => Err(LookupError::UnknownName(raw.to_string())),
        },
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn classify_numeric() {
        assert_eq!(Query::classify("12"), Query::Code(12));
        assert_eq!(Query::classify("  12"), Query::Code(12));
        assert_eq!(Query::classify("\t7 "), Query::Code(7));
        assert_eq!(Query::classify("1 2"), Query::Code(1));
        assert_eq!(Query::classify(""), Query::Code(0));
        assert_eq!(Query::classify("   "), Query::Code(0));
        assert_eq!(
            Query::classify("99999999999999999999999"),
            Query::Code(u64::MAX)
        );
    }

    #[test]
    fn classify_symbolic() {
        assert_eq!(Query::classify("EFAULT"), Query::Name("EFAULT"));
        assert_eq!(Query::classify("-5"), Query::Name("-5"));
        assert_eq!(Query::classify("+5"), Query::Name("+5"));
        assert_eq!(Query::classify("12a"), Query::Name("12a"));
        assert_eq!(Query::classify("1\n"), Query::Name("1\n"));
        assert_eq!(Query::classify("١٢"), Query::Name("١٢"));
    }

    #[test]
    fn code_lookup() {
        let entry = lookup_by_code(12).unwrap();
        assert_eq!(entry.name, Some("ENOMEM"));
        assert_eq!(lookup_by_code(0).unwrap().name, Some("SUCCESS"));
        assert_eq!(
            lookup_by_code(u64::from(MAX_CODE)).unwrap().name,
            Some("ENOTRECOVERABLE")
        );
    }

    #[test]
    fn code_lookup_out_of_range() {
        assert_eq!(
            lookup_by_code(u64::from(MAX_CODE) + 1),
            Err(LookupError::UnknownCode(132))
        );
        assert_eq!(
            lookup_by_code(u64::MAX),
            Err(LookupError::UnknownCode(u64::MAX))
        );
    }

    #[test]
    fn code_lookup_gap() {
        assert_eq!(lookup_by_code(41), Err(LookupError::UnknownCode(41)));
        assert_eq!(lookup_by_code(58), Err(LookupError::UnknownCode(58)));
    }

    #[test]
    fn name_lookup_ignores_case() {
        assert_eq!(lookup_by_name("EFAULT"), Some(14));
        assert_eq!(lookup_by_name("efault"), Some(14));
        assert_eq!(lookup_by_name("eFaUlT"), Some(14));
    }

    #[test]
    fn name_lookup_is_substring() {
        assert_eq!(lookup_by_name("FAULT"), Some(14));
        assert_eq!(lookup_by_name("NOTRECOV"), Some(131));
    }

    #[test]
    fn name_lookup_first_match_wins() {
        // ETIME (62) comes before ETIMEDOUT (110)
        assert_eq!(lookup_by_name("TIME"), Some(62));
        assert_eq!(lookup_by_name("ETIMEDOUT"), Some(110));
        // SUCCESS contains an E
        assert_eq!(lookup_by_name("E"), Some(0));
        assert_eq!(lookup_by_name("succ"), Some(0));
    }

    #[test]
    fn name_lookup_not_found() {
        assert_eq!(lookup_by_name("ZZZNOTREAL"), None);
        assert_eq!(lookup_by_name("EFAULTS"), None);
    }

    #[test]
    fn resolve_both_directions() {
        assert_eq!(resolve("12").unwrap().to_string(), "12 ENOMEM Out of memory");
        assert_eq!(resolve("EFAULT").unwrap().to_string(), "14 EFAULT Bad address");
        assert_eq!(resolve("").unwrap().to_string(), "0 SUCCESS Success");
    }

    #[test]
    fn resolve_failures() {
        assert_eq!(resolve("99999"), Err(LookupError::UnknownCode(99999)));
        assert_eq!(resolve("41"), Err(LookupError::UnknownCode(41)));
        assert_eq!(
            resolve("notarealerror"),
            Err(LookupError::UnknownName("notarealerror".to_string()))
        );
        assert_eq!(
            resolve("-5"),
            Err(LookupError::UnknownName("-5".to_string()))
        );
    }

    proptest! {
        #[test]
        fn every_populated_code_resolves_to_itself(code in 0u32..=MAX_CODE) {
            let expected = &ERROR_TABLE[code as usize];
            match lookup_by_code(u64::from(code)) {
                Ok(entry) => prop_assert_eq!(entry.code, code),
                Err(e) => {
                    prop_assert!(expected.is_gap());
                    prop_assert_eq!(e, LookupError::UnknownCode(u64::from(code)));
                }
            }
        }

        #[test]
        fn codes_past_the_table_are_unknown(code in (u64::from(MAX_CODE) + 1)..) {
            prop_assert_eq!(
                resolve(&code.to_string()),
                Err(LookupError::UnknownCode(code))
            );
        }

        #[test]
        fn classify_never_panics(s in ".*") {
            let _ = Query::classify(&s);
        }

        #[test]
        fn digit_strings_parse_exactly(n in 0u64..1_000_000_000) {
            let s = n.to_string();
            prop_assert_eq!(Query::classify(&s), Query::Code(n));
        }
    }

    #[test]
    fn every_name_finds_a_containing_entry() {
        for entry in entries() {
            let name = entry.name.unwrap();
            let code = lookup_by_name(name).unwrap();
            assert!(code <= entry.code);
            let found = ERROR_TABLE[code as usize].name.unwrap();
            assert!(found.contains(name), "{} does not contain {}", found, name);
        }
    }
}
