//! Defect verifier - decides whether one defect is fixed in one corpus
//!
//! Pure text matching with no I/O. Matching is case-sensitive and
//! whitespace-exact; nothing is parsed. A correct snippet that only appears
//! inside a comment still counts as a fix.

use std::sync::LazyLock;

use log::{debug, warn};
use regex::Regex;

use crate::core::models::{Category, DefectEntry, VerificationResult};

static TAG_FORM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(</?)([A-Za-z][A-Za-z0-9-]*)>?$").expect("Invalid regex pattern for tag form")
});

static BARE_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9]*$").expect("Invalid regex pattern for bare keyword")
});

static ATTRIBUTE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_:][-A-Za-z0-9_:.]*=$").expect("Invalid regex pattern for attribute")
});

static QUOTED_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^([A-Za-z_:][-A-Za-z0-9_:.]*)="([^"]*)"$"#)
        .expect("Invalid regex pattern for quoted attribute")
});

static PROPERTY_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-{0,2}[A-Za-z][-A-Za-z0-9]*$").expect("Invalid regex pattern for property")
});

/// Verification class of a defect
///
/// Derived once from the snippets; see [`classify`] for the precedence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefectKind {
    /// A fixed marker (document type declaration) must be present
    Doctype,
    /// A tag keyword was corrupted
    TagRename {
        /// Correct tag prefix, e.g. `<body`
        correct: String,
        /// Corrupted tag prefix, e.g. `<bod`
        corrupted: String,
    },
    /// An attribute name token was corrupted
    AttributeTypo {
        /// Correct token, e.g. `class=`
        correct: String,
        /// Corrupted token, e.g. `clas=`
        corrupted: String,
    },
    /// The quotes around an attribute value were removed
    MissingQuotes {
        /// Attribute name
        attribute: String,
    },
    /// A declaration lost its terminating semicolon
    MissingSemicolon,
    /// A style property name was corrupted
    PropertyTypo {
        /// Correct property name
        correct: String,
        /// Corrupted property name
        corrupted: String,
    },
    /// Corrupted snippet must be gone and the original back
    Replace,
    /// No corrupted snippet recorded; the original must be present
    PresenceOnly,
}

impl DefectKind {
    /// Short machine name of the class
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Doctype => "doctype",
            Self::TagRename { .. } => "tag_rename",
            Self::AttributeTypo { .. } => "attribute_typo",
            Self::MissingQuotes { .. } => "missing_quotes",
            Self::MissingSemicolon => "missing_semicolon",
            Self::PropertyTypo { .. } => "property_typo",
            Self::Replace => "replace",
            Self::PresenceOnly => "presence",
        }
    }
}

impl std::fmt::Display for DefectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify a defect from its snippets
///
/// Precedence (first match wins):
/// 1. Doctype: original starts with `<!DOCTYPE`
/// 2. Tag rename: both snippets are a tag form (or, for markup, a bare keyword)
/// 3. Attribute typo: both snippets are `name=` tokens
/// 4. Missing quotes: `name="value"` became `name=value`
/// 5. Missing semicolon: original minus its trailing `;` is the modified snippet
/// 6. Property typo: style `name: value` pairs differing only in the name
/// 7. Replace: any other defect with a modified snippet
/// 8. Presence only: no modified snippet
#[must_use]
pub fn classify(category: Category, original: &str, modified: &str) -> DefectKind {
    if is_doctype(original) {
        return DefectKind::Doctype;
    }

    // Everything below compares against a corrupted snippet
    if modified.is_empty() {
        return DefectKind::PresenceOnly;
    }

    if let (Some(correct), Some(corrupted)) =
        (tag_prefix(category, original), tag_prefix(category, modified))
        && correct != corrupted
    {
        return DefectKind::TagRename { correct, corrupted };
    }

    if ATTRIBUTE_TOKEN.is_match(original)
        && ATTRIBUTE_TOKEN.is_match(modified)
        && original != modified
    {
        return DefectKind::AttributeTypo {
            correct: original.to_string(),
            corrupted: modified.to_string(),
        };
    }

    if let Some(caps) = QUOTED_ATTRIBUTE.captures(original)
        && modified == format!("{}={}", &caps[1], &caps[2])
    {
        return DefectKind::MissingQuotes {
            attribute: caps[1].to_string(),
        };
    }

    if original.trim_end().strip_suffix(';').map(str::trim_end) == Some(modified.trim_end()) {
        return DefectKind::MissingSemicolon;
    }

    if category == Category::Style
        && let Some((correct, corrupted)) = property_names(original, modified)
    {
        return DefectKind::PropertyTypo { correct, corrupted };
    }

    DefectKind::Replace
}

/// Check one defect against one corpus
#[must_use]
pub fn verify(corpus: &str, defect: &DefectEntry) -> VerificationResult {
    let fixed = is_fixed(corpus, defect);
    debug!(
        "{} [{}] {}",
        defect.id(),
        defect.kind(),
        if fixed { "fixed" } else { "not fixed" }
    );
    if fixed {
        VerificationResult::fixed(defect.points())
    } else {
        VerificationResult::not_fixed()
    }
}

fn is_fixed(corpus: &str, defect: &DefectEntry) -> bool {
    let original = defect.original();
    let modified = defect.modified();

    match defect.kind() {
        DefectKind::Doctype | DefectKind::MissingSemicolon | DefectKind::PresenceOnly => {
            corpus.contains(original)
        },
        DefectKind::TagRename { correct, corrupted } => {
            count_pattern(&tag_pattern(correct), corpus) > 0
                && count_pattern(&tag_pattern(corrupted), corpus) == 0
        },
        DefectKind::AttributeTypo { correct, corrupted } => {
            corpus.matches(correct.as_str()).count() > corpus.matches(corrupted.as_str()).count()
        },
        DefectKind::MissingQuotes { attribute } => {
            let name = regex::escape(attribute);
            let quoted = count_pattern(&format!(r#"(?:^|[^-\w:.]){name}="[^"]*""#), corpus);
            let unquoted = count_pattern(&format!(r#"(?:^|[^-\w:.]){name}=[^"'\s>]"#), corpus);
            quoted > unquoted
        },
        DefectKind::PropertyTypo { correct, corrupted } => {
            count_pattern(&property_pattern(correct), corpus) > 0
                && count_pattern(&property_pattern(corrupted), corpus) == 0
        },
        DefectKind::Replace => !corpus.contains(modified) && corpus.contains(original),
    }
}

fn is_doctype(snippet: &str) -> bool {
    snippet
        .trim_start()
        .get(..9)
        .is_some_and(|head| head.eq_ignore_ascii_case("<!doctype"))
}

/// Tag prefix (`<name` or `</name`) of a snippet that is only a tag keyword
fn tag_prefix(category: Category, snippet: &str) -> Option<String> {
    if let Some(caps) = TAG_FORM.captures(snippet) {
        return Some(format!("{}{}", &caps[1], &caps[2]));
    }
    if category == Category::Markup && BARE_KEYWORD.is_match(snippet) {
        return Some(format!("<{snippet}"));
    }
    None
}

fn tag_pattern(prefix: &str) -> String {
    format!(r"{}(?:[\s/>]|$)", regex::escape(prefix))
}

fn property_pattern(name: &str) -> String {
    format!(r"(?:^|[^-\w]){}\s*:", regex::escape(name))
}

/// Property names of two `name: value` declarations that differ only in name
fn property_names(original: &str, modified: &str) -> Option<(String, String)> {
    let (correct, correct_value) = original.split_once(':')?;
    let (corrupted, corrupted_value) = modified.split_once(':')?;
    let (correct, corrupted) = (correct.trim(), corrupted.trim());

    if correct == corrupted
        || correct_value.trim() != corrupted_value.trim()
        || !PROPERTY_NAME.is_match(correct)
        || !PROPERTY_NAME.is_match(corrupted)
    {
        return None;
    }
    Some((correct.to_string(), corrupted.to_string()))
}

fn count_pattern(pattern: &str, corpus: &str) -> usize {
    match Regex::new(pattern) {
        Ok(re) => re.find_iter(corpus).count(),
        Err(e) => {
            warn!("Skipping unmatchable pattern {pattern}: {e}");
            0
        },
    }
}
