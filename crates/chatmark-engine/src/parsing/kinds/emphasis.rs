use std::sync::LazyLock;

use regex::Regex;

/// Which element an emphasis rule produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Strong,
    Em,
}

/// One emphasis delimiter form, e.g. `**x**` or `_x_`.
///
/// Each rule's pattern captures the inner content as group 1. Inner content
/// never contains the rule's own marker character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmphasisRule {
    StrongStar,
    StrongUnderscore,
    EmStar,
    EmUnderscore,
}

static STRONG_STAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("valid strong pattern"));
static STRONG_UNDERSCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__([^_]+)__").expect("valid strong pattern"));
static EM_STAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*\s](?:[^*]*[^*\s])?)\*").expect("valid em pattern"));
static EM_UNDERSCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_([^_\s](?:[^_]*[^_\s])?)_").expect("valid em pattern"));

impl EmphasisRule {
    /// Rules in application order: strong forms consume their doubled
    /// markers before the single-marker forms run.
    pub const ORDERED: [EmphasisRule; 4] = [
        EmphasisRule::StrongStar,
        EmphasisRule::StrongUnderscore,
        EmphasisRule::EmStar,
        EmphasisRule::EmUnderscore,
    ];

    pub fn kind(self) -> Emphasis {
        match self {
            Self::StrongStar | Self::StrongUnderscore => Emphasis::Strong,
            Self::EmStar | Self::EmUnderscore => Emphasis::Em,
        }
    }

    pub fn marker(self) -> u8 {
        match self {
            Self::StrongStar | Self::EmStar => b'*',
            Self::StrongUnderscore | Self::EmUnderscore => b'_',
        }
    }

    /// Underscore forms reject a match whose markers touch an alphanumeric
    /// character on the outside, so `snake_case_name` stays literal.
    pub fn intraword_closed(self) -> bool {
        self.marker() == b'_'
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Self::StrongStar => &STRONG_STAR,
            Self::StrongUnderscore => &STRONG_UNDERSCORE,
            Self::EmStar => &EM_STAR,
            Self::EmUnderscore => &EM_UNDERSCORE,
        }
    }

    /// Finds the first acceptable match at or after `from`.
    ///
    /// Returns `(full, inner)` byte ranges. A candidate rejected by the
    /// intraword rule is retried one byte further on, so its closing marker
    /// can still open a later match.
    pub fn find_at(self, text: &str, from: usize) -> Option<((usize, usize), (usize, usize))> {
        let re = self.pattern();
        let mut at = from;
        while at <= text.len() {
            let caps = re.captures_at(text, at)?;
            let full = caps.get(0)?;
            let inner = caps.get(1)?;
            if !self.intraword_closed() || flanks_clear(text, full.start(), full.end()) {
                return Some(((full.start(), full.end()), (inner.start(), inner.end())));
            }
            // Markers are ASCII, so start + 1 is a char boundary.
            at = full.start() + 1;
        }
        None
    }
}

fn flanks_clear(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}
