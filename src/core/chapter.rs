//! Chapter ordering.
//!
//! Chapters are re-validated here with a stricter grammar than the citation
//! parser applies: after uppercasing, the suffix must be `A`-`Z` only.

use crate::domain::model::ChapterToken;
use crate::utils::error::{Result, RsaError};
use once_cell::sync::Lazy;
use regex::Regex;

static CHAPTER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<base>[0-9]+)(?:-(?P<suffix>[A-Z]+))?$").expect("valid chapter regex")
});

const ALPHABET_SIZE: u64 = 26;

/// Folds an uppercase suffix into its bijective base-26 value.
///
/// Returns `None` on a non `A`-`Z` character or on overflow.
fn fold_suffix(suffix: &str) -> Option<u64> {
    suffix.bytes().try_fold(0u64, |acc, letter| {
        if !letter.is_ascii_uppercase() {
            return None;
        }
        let position = u64::from(letter - b'A') + 1;
        acc.checked_mul(ALPHABET_SIZE)?.checked_add(position)
    })
}

impl ChapterToken {
    pub fn parse(chapter: &str) -> Result<Self> {
        let bad = || RsaError::BadChapterFormat {
            chapter: chapter.to_string(),
        };

        let upper = chapter.trim().to_ascii_uppercase();
        let caps = CHAPTER_RE.captures(&upper).ok_or_else(bad)?;

        let base = caps["base"].parse::<u64>().map_err(|_| bad())?;
        let suffix_ordinal = match caps.name("suffix") {
            Some(suffix) => fold_suffix(suffix.as_str()).ok_or_else(bad)?,
            None => 0,
        };

        Ok(Self {
            base,
            suffix_ordinal,
        })
    }
}

/// Inclusive range test: `start <= chapter <= end` under token order.
pub fn in_range(chapter: &str, start: &str, end: &str) -> Result<bool> {
    let token = ChapterToken::parse(chapter)?;
    let start = ChapterToken::parse(start)?;
    let end = ChapterToken::parse(end)?;
    Ok(start <= token && token <= end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(chapter: &str) -> ChapterToken {
        ChapterToken::parse(chapter).unwrap()
    }

    #[test]
    fn test_token_values() {
        assert_eq!(
            token("225-A"),
            ChapterToken {
                base: 225,
                suffix_ordinal: 1
            }
        );
        assert_eq!(token("227-f").suffix_ordinal, 6);
        assert_eq!(token("216").suffix_ordinal, 0);
        assert_eq!(token("1-z").suffix_ordinal, 26);
        assert_eq!(token("1-aa").suffix_ordinal, 27);
        assert_eq!(token("1-az").suffix_ordinal, 52);
        assert_eq!(token("1-ba").suffix_ordinal, 53);
        assert_eq!(token("007").base, 7);
    }

    #[test]
    fn test_suffix_ordering_chain() {
        let mut chain = vec!["225".to_string()];
        chain.extend((b'a'..=b'z').map(|c| format!("225-{}", c as char)));
        chain.push("225-aa".to_string());
        chain.push("226".to_string());

        for pair in chain.windows(2) {
            assert!(
                token(&pair[0]) < token(&pair[1]),
                "{} should sort before {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_ordering_is_total_and_transitive() {
        let chapters = ["1", "2-b", "10", "10-a", "99-zz", "100"];
        for a in chapters {
            assert_eq!(token(a), token(a));
            for b in chapters {
                let (ta, tb) = (token(a), token(b));
                assert!(ta <= tb || tb <= ta);
                for c in chapters {
                    let tc = token(c);
                    if ta <= tb && tb <= tc {
                        assert!(ta <= tc);
                    }
                }
            }
        }
    }

    #[test]
    fn test_in_range_bounds_are_inclusive() {
        assert!(in_range("260", "260", "265").unwrap());
        assert!(in_range("265", "260", "265").unwrap());
        assert!(in_range("261", "260", "265").unwrap());
        assert!(in_range("225-a", "216", "227-f").unwrap());
        assert!(in_range("227-f", "216", "227-F").unwrap());
        assert!(!in_range("227-g", "216", "227-f").unwrap());
        assert!(!in_range("265-b", "260", "265").unwrap());
        assert!(!in_range("259", "260", "265").unwrap());
    }

    #[test]
    fn test_in_range_degenerate() {
        for chapter in ["1", "225-a", "540-zz"] {
            assert!(in_range(chapter, chapter, chapter).unwrap());
        }
    }

    #[test]
    fn test_bad_chapter_format() {
        let chapters = [
            "", "a", "225-", "225-a1", "225-1", "-a", "225a", "225-\u{17F}", "225-\u{212A}",
        ];
        for chapter in chapters {
            match ChapterToken::parse(chapter) {
                Err(RsaError::BadChapterFormat { chapter: reported }) => {
                    assert_eq!(reported, chapter)
                }
                other => panic!("expected BadChapterFormat for {chapter:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_in_range_rejects_non_ascii_suffix() {
        assert!(matches!(
            in_range("225-\u{17F}", "225-r", "225-t"),
            Err(RsaError::BadChapterFormat { .. })
        ));
    }

    #[test]
    fn test_in_range_reports_offending_bound() {
        let err = in_range("261", "260", "oops").unwrap_err();
        assert_eq!(err.to_string(), "Bad chapter format: oops");
    }

    #[test]
    fn test_overflow_is_bad_format() {
        assert!(ChapterToken::parse("99999999999999999999999").is_err());
        let long_suffix = format!("1-{}", "Z".repeat(20));
        assert!(ChapterToken::parse(&long_suffix).is_err());
    }
}
