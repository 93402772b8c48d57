use std::fmt::{self, Display};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;

use crate::builder::{EvidenceSet, SkipSummary};
use crate::category::{Category, CategoryCount, classify_variant, has_hypomorph};
use crate::discordance::{DiscordanceVerdict, check_discordance};
use crate::evidence::{Evidence, VariantEvidence, format_evidence_list};

///
/// Both classifications of one variant, plus the evidence they came from.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VariantCall {
    pub key: String,
    pub evidence: Vec<Evidence>,
    pub category: Category,
    pub hypomorph: bool,
    pub verdict: DiscordanceVerdict,
}

impl From<VariantEvidence> for VariantCall {
    fn from(variant: VariantEvidence) -> Self {
        let category = classify_variant(&variant.evidence);
        let hypomorph = has_hypomorph(&variant.evidence);
        let verdict = check_discordance(&variant.evidence);

        VariantCall {
            key: variant.key,
            evidence: variant.evidence,
            category,
            hypomorph,
            verdict,
        }
    }
}

impl VariantCall {
    fn counts(&self) -> CategoryCount {
        let mut counts = CategoryCount::default();
        counts.record(self.category, self.hypomorph);
        counts
    }
}

impl Display for VariantCall {
    /// One report line: `<key>:<verdict>:<evidence list>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.key,
            self.verdict,
            format_evidence_list(&self.evidence)
        )
    }
}

///
/// Classify every variant. Output order follows input order.
///
pub fn classify_all(variants: Vec<VariantEvidence>) -> Vec<VariantCall> {
    #[cfg(feature = "parallel")]
    let iter = variants.into_par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = variants.into_iter();

    iter.map(VariantCall::from).collect()
}

///
/// Sum the bucket counts of a set of calls.
///
pub fn tally_calls(calls: &[VariantCall]) -> CategoryCount {
    #[cfg(feature = "parallel")]
    let counts = calls
        .par_iter()
        .map(VariantCall::counts)
        .reduce(CategoryCount::default, CategoryCount::merge);
    #[cfg(not(feature = "parallel"))]
    let counts = calls
        .iter()
        .map(VariantCall::counts)
        .fold(CategoryCount::default(), CategoryCount::merge);

    counts
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SkippedCells {
    #[serde(flatten)]
    pub reasons: SkipSummary,
    pub total: usize,
}

///
/// Aggregate view of a classification run, written as JSON.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub variants_processed: usize,
    pub categories: CategoryCount,
    pub skipped_cells: SkippedCells,
}

#[derive(Clone, Debug, Default)]
pub struct ClassificationReport {
    pub calls: Vec<VariantCall>,
    pub summary: Summary,
}

impl From<EvidenceSet> for ClassificationReport {
    fn from(set: EvidenceSet) -> Self {
        let calls = classify_all(set.variants);
        let summary = Summary {
            variants_processed: calls.len(),
            categories: tally_calls(&calls),
            skipped_cells: SkippedCells {
                reasons: set.skipped,
                total: set.skipped.total(),
            },
        };

        ClassificationReport { calls, summary }
    }
}

impl ClassificationReport {
    ///
    /// Write one line per variant.
    ///
    pub fn write_report<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for call in &self.calls {
            writeln!(writer, "{}", call)?;
        }
        Ok(())
    }

    pub fn to_file(&self, path: &Path) -> std::io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_report(&mut writer)?;
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::count_categories;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn variant(key: &str, items: &[&str]) -> VariantEvidence {
        VariantEvidence::new(key, items.iter().map(|s| Evidence::from(*s)).collect())
    }

    #[fixture]
    fn evidence_set() -> EvidenceSet {
        EvidenceSet {
            variants: vec![
                variant("0", &["BS3", "PS3", "PS3"]),
                variant("4", &["hypomorph"]),
                variant("2", &["BS3_supporting", "hypomorph"]),
                VariantEvidence::new("7", vec![Evidence::Missing, Evidence::from("PS3_moderate")]),
            ],
            skipped: SkipSummary {
                not_numeric: 2,
                unknown_track: 0,
                unknown_code: 1,
            },
        }
    }

    #[rstest]
    fn test_report_lines(evidence_set: EvidenceSet) {
        let report = ClassificationReport::from(evidence_set);

        let mut out = Vec::new();
        report.write_report(&mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        let expected = "0:Discordant:Discordant:1:2:Indeterminate:['BS3', 'PS3', 'PS3']\n\
                        4:Hypomorph:Concordant:1:-:-:['hypomorph']\n\
                        2:Hypomorph:Discordant:1:1:Indeterminate:['BS3_supporting', 'hypomorph']\n\
                        7:Pathogenic:Concordant:1:-:-:[nan, 'PS3_moderate']\n";
        assert_eq!(out, expected);
    }

    #[rstest]
    fn test_summary(evidence_set: EvidenceSet) {
        let expected = count_categories(&evidence_set.variants);
        let report = ClassificationReport::from(evidence_set);

        assert_eq!(report.summary.variants_processed, 4);
        assert_eq!(report.summary.categories, expected.categories);
        assert_eq!(report.summary.categories.discordant, 1);
        assert_eq!(report.summary.categories.bs3_supporting, 1);
        assert_eq!(report.summary.categories.ps3_moderate, 1);
        assert_eq!(report.summary.categories.not_classified, 1);
        assert_eq!(report.summary.categories.hypomorph, 2);
        assert_eq!(report.summary.skipped_cells.total, 3);
    }

    #[rstest]
    fn test_summary_json(evidence_set: EvidenceSet) {
        let report = ClassificationReport::from(evidence_set);
        let json = serde_json::to_value(report.summary).unwrap();

        assert_eq!(json["variants_processed"], 4);
        assert_eq!(json["categories"]["hypomorph"], 2);
        assert_eq!(json["skipped_cells"]["not_numeric"], 2);
        assert_eq!(json["skipped_cells"]["total"], 3);
    }

    #[rstest]
    fn test_classify_all_keeps_order() {
        let variants: Vec<VariantEvidence> = (0..200)
            .map(|i| variant(&i.to_string(), if i % 2 == 0 { &["BS3"] } else { &["PS3"] }))
            .collect();

        let calls = classify_all(variants);
        let keys: Vec<String> = calls.iter().map(|c| c.key.clone()).collect();
        let expected: Vec<String> = (0..200).map(|i| i.to_string()).collect();
        assert_eq!(keys, expected);

        let counts = tally_calls(&calls);
        assert_eq!(counts.bs3, 100);
        assert_eq!(counts.ps3, 100);
    }

    #[rstest]
    fn test_to_file(evidence_set: EvidenceSet) {
        let report = ClassificationReport::from(evidence_set);

        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("report.txt");
        report.to_file(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.lines().count(), 4);
        assert!(written.starts_with("0:Discordant:Discordant"));
    }
}
