use std::fmt::{self, Display};

use serde::Serialize;

///
/// One piece of functional evidence for a variant.
///
/// `Missing` comes from an empty label in the classification table: the
/// lookup succeeded, but there was nothing to look up. It is kept in the
/// evidence list so the report shows it, and ignored by the classifiers.
///
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Evidence {
    Label(String),
    Missing,
}

impl Evidence {
    pub fn label(&self) -> Option<&str> {
        match self {
            Evidence::Label(label) => Some(label.as_str()),
            Evidence::Missing => None,
        }
    }

    /// Substring match; `Missing` never matches.
    pub fn contains(&self, pattern: &str) -> bool {
        self.label().is_some_and(|l| l.contains(pattern))
    }

    /// Exact match; `Missing` never matches.
    pub fn is(&self, label: &str) -> bool {
        self.label() == Some(label)
    }
}

impl From<&str> for Evidence {
    fn from(value: &str) -> Self {
        Evidence::Label(value.to_string())
    }
}

impl From<String> for Evidence {
    fn from(value: String) -> Self {
        Evidence::Label(value)
    }
}

impl From<Option<String>> for Evidence {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(label) => Evidence::Label(label),
            None => Evidence::Missing,
        }
    }
}

impl Display for Evidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Evidence::Label(label) => write!(f, "'{}'", label),
            Evidence::Missing => write!(f, "nan"),
        }
    }
}

///
/// Iterate over the labels of an evidence list, skipping missing entries.
///
pub fn labels(evidence: &[Evidence]) -> impl Iterator<Item = &str> {
    evidence.iter().filter_map(Evidence::label)
}

///
/// Render an evidence list the way it appears in the report:
/// `['BS3', 'PS3_moderate', nan]`.
///
pub fn format_evidence_list(evidence: &[Evidence]) -> String {
    let items: Vec<String> = evidence.iter().map(|e| e.to_string()).collect();
    format!("[{}]", items.join(", "))
}

///
/// All evidence gathered for one variant (one results-table row).
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VariantEvidence {
    pub key: String,
    pub evidence: Vec<Evidence>,
}

impl VariantEvidence {
    pub fn new(key: impl Into<String>, evidence: Vec<Evidence>) -> Self {
        Self {
            key: key.into(),
            evidence,
        }
    }

    pub fn len(&self) -> usize {
        self.evidence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.evidence.is_empty()
    }
}

impl AsRef<[Evidence]> for VariantEvidence {
    fn as_ref(&self) -> &[Evidence] {
        &self.evidence
    }
}
