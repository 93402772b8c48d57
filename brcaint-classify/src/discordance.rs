//! Discordance verdicts and the evidence ratio test.

use std::fmt::{self, Display};

use serde::Serialize;

use crate::consts::{BENIGN_MARKER, HYPOMORPH_LABEL, PATHOGENIC_MARKER, RATIO_THRESHOLD};
use crate::evidence::{Evidence, labels};

/// Overall call for a variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Call {
    Benign,
    Pathogenic,
    Hypomorph,
    Discordant,
    Indeterminate,
}

impl Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Call::Benign => "Benign",
            Call::Pathogenic => "Pathogenic",
            Call::Hypomorph => "Hypomorph",
            Call::Discordant => "Discordant",
            Call::Indeterminate => "indeterminate",
        };
        write!(f, "{}", s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Concordance {
    Concordant,
    Discordant,
    Indeterminate,
}

impl Display for Concordance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Concordance::Concordant => "Concordant",
            Concordance::Discordant => "Discordant",
            Concordance::Indeterminate => "indeterminate",
        };
        write!(f, "{}", s)
    }
}

/// Which side, if any, dominates a ratio test.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum RatioCall {
    Benign,
    Pathogenic,
    Hypomorph,
    Indeterminate,
}

impl Display for RatioCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RatioCall::Benign => "Benign",
            RatioCall::Pathogenic => "Pathogenic",
            RatioCall::Hypomorph => "Hypomorph",
            RatioCall::Indeterminate => "Indeterminate",
        };
        write!(f, "{}", s)
    }
}

///
/// Outcome of [`is_valid_ratio`], rendered `{first}:{second}:{call}`.
///
/// When one side dominates, `first` is that side's count; otherwise the
/// counts keep the order they were passed in.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RatioOutcome {
    pub first: usize,
    pub second: usize,
    pub call: RatioCall,
}

impl Display for RatioOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.first, self.second, self.call)
    }
}

///
/// Test whether one evidence count outnumbers the other at least 3:1.
///
/// A zero on either side can't be tested and is indeterminate.
///
pub fn is_valid_ratio(a: usize, b: usize, class_a: RatioCall, class_b: RatioCall) -> RatioOutcome {
    if a == 0 || b == 0 {
        return RatioOutcome {
            first: a,
            second: b,
            call: RatioCall::Indeterminate,
        };
    }

    if a >= RATIO_THRESHOLD * b {
        RatioOutcome {
            first: a,
            second: b,
            call: class_a,
        }
    } else if b >= RATIO_THRESHOLD * a {
        RatioOutcome {
            first: b,
            second: a,
            call: class_b,
        }
    } else {
        RatioOutcome {
            first: a,
            second: b,
            call: RatioCall::Indeterminate,
        }
    }
}

/// The three trailing fields of a verdict.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum RatioField {
    /// Single line of evidence: `{count}:-:-`.
    Count(usize),
    Ratio(RatioOutcome),
    /// No usable evidence: `-:-:-`.
    Empty,
}

impl Display for RatioField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatioField::Count(n) => write!(f, "{}:-:-", n),
            RatioField::Ratio(outcome) => write!(f, "{}", outcome),
            RatioField::Empty => write!(f, "-:-:-"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DiscordanceVerdict {
    pub call: Call,
    pub concordance: Concordance,
    pub ratio: RatioField,
}

impl Display for DiscordanceVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.call, self.concordance, self.ratio)
    }
}

///
/// Substring counts of benign, pathogenic and hypomorph evidence.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct EvidenceCounts {
    pub benign: usize,
    pub pathogenic: usize,
    pub hypomorph: usize,
}

impl From<&[Evidence]> for EvidenceCounts {
    fn from(evidence: &[Evidence]) -> Self {
        let mut counts = EvidenceCounts::default();
        for label in labels(evidence) {
            if label.contains(BENIGN_MARKER) {
                counts.benign += 1;
            }
            if label.contains(PATHOGENIC_MARKER) {
                counts.pathogenic += 1;
            }
            if label.contains(HYPOMORPH_LABEL) {
                counts.hypomorph += 1;
            }
        }
        counts
    }
}

///
/// Compute the discordance verdict for one variant.
///
/// Benign/pathogenic presence is a substring test, hypomorph presence an
/// exact one; the counts used for the ratio are all substring counts.
/// Conflicts are checked first (benign vs pathogenic, then each against
/// hypomorph), then single lines of evidence.
///
pub fn check_discordance(evidence: &[Evidence]) -> DiscordanceVerdict {
    let counts = EvidenceCounts::from(evidence);

    let benign = labels(evidence).any(|l| l.contains(BENIGN_MARKER));
    let pathogenic = labels(evidence).any(|l| l.contains(PATHOGENIC_MARKER));
    let hypomorph = labels(evidence).any(|l| l == HYPOMORPH_LABEL);

    let (call, concordance, ratio) = if benign && pathogenic {
        (
            Call::Discordant,
            Concordance::Discordant,
            RatioField::Ratio(is_valid_ratio(
                counts.benign,
                counts.pathogenic,
                RatioCall::Benign,
                RatioCall::Pathogenic,
            )),
        )
    } else if benign && hypomorph {
        (
            Call::Hypomorph,
            Concordance::Discordant,
            RatioField::Ratio(is_valid_ratio(
                counts.benign,
                counts.hypomorph,
                RatioCall::Benign,
                RatioCall::Hypomorph,
            )),
        )
    } else if pathogenic && hypomorph {
        (
            Call::Hypomorph,
            Concordance::Discordant,
            RatioField::Ratio(is_valid_ratio(
                counts.pathogenic,
                counts.hypomorph,
                RatioCall::Pathogenic,
                RatioCall::Hypomorph,
            )),
        )
    } else if benign {
        (
            Call::Benign,
            Concordance::Concordant,
            RatioField::Count(counts.benign),
        )
    } else if pathogenic {
        (
            Call::Pathogenic,
            Concordance::Concordant,
            RatioField::Count(counts.pathogenic),
        )
    } else if hypomorph {
        (
            Call::Hypomorph,
            Concordance::Concordant,
            RatioField::Count(counts.hypomorph),
        )
    } else {
        (Call::Indeterminate, Concordance::Indeterminate, RatioField::Empty)
    };

    DiscordanceVerdict {
        call,
        concordance,
        ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn ev(items: &[&str]) -> Vec<Evidence> {
        items.iter().map(|s| Evidence::from(*s)).collect()
    }

    #[rstest]
    #[case(9, 3, "9:3:Benign")]
    #[case(3, 9, "9:3:Pathogenic")]
    #[case(2, 1, "2:1:Indeterminate")]
    #[case(1, 2, "1:2:Indeterminate")]
    #[case(4, 1, "4:1:Benign")]
    #[case(5, 5, "5:5:Indeterminate")]
    fn test_is_valid_ratio(#[case] a: usize, #[case] b: usize, #[case] expected: &str) {
        let outcome = is_valid_ratio(a, b, RatioCall::Benign, RatioCall::Pathogenic);
        assert_eq!(outcome.to_string(), expected);
    }

    #[rstest]
    fn test_zero_count_is_indeterminate() {
        for n in 0..5 {
            let left = is_valid_ratio(0, n, RatioCall::Benign, RatioCall::Pathogenic);
            let right = is_valid_ratio(n, 0, RatioCall::Benign, RatioCall::Pathogenic);
            assert_eq!(left.call, RatioCall::Indeterminate);
            assert_eq!(right.call, RatioCall::Indeterminate);
            assert_eq!(left.to_string(), format!("0:{}:Indeterminate", n));
            assert_eq!(right.to_string(), format!("{}:0:Indeterminate", n));
        }
    }

    #[rstest]
    #[case(&["BS3", "PS3", "PS3"], "Discordant:Discordant:1:2:Indeterminate")]
    #[case(&["BS3", "BS3_moderate", "BS3", "PS3_supporting"], "Discordant:Discordant:3:1:Benign")]
    #[case(&["PS3", "PS3", "PS3", "BS3"], "Discordant:Discordant:3:1:Pathogenic")]
    #[case(&["BS3", "hypomorph"], "Hypomorph:Discordant:1:1:Indeterminate")]
    #[case(&["hypomorph", "BS3_supporting", "hypomorph", "hypomorph"], "Hypomorph:Discordant:3:1:Hypomorph")]
    #[case(&["PS3_moderate", "PS3", "PS3", "hypomorph"], "Hypomorph:Discordant:3:1:Pathogenic")]
    #[case(&["BS3", "BS3_supporting"], "Benign:Concordant:2:-:-")]
    #[case(&["PS3_moderate"], "Pathogenic:Concordant:1:-:-")]
    #[case(&["hypomorph"], "Hypomorph:Concordant:1:-:-")]
    #[case(&["benign"], "indeterminate:indeterminate:-:-:-")]
    #[case(&[], "indeterminate:indeterminate:-:-:-")]
    fn test_check_discordance(#[case] items: &[&str], #[case] expected: &str) {
        assert_eq!(check_discordance(&ev(items)).to_string(), expected);
    }

    #[rstest]
    fn test_hypomorph_presence_is_exact_but_count_is_substring() {
        // a lone "hypomorph_like" label is counted but never makes the variant a hypomorph
        let evidence = ev(&["hypomorph_like"]);
        assert_eq!(EvidenceCounts::from(evidence.as_slice()).hypomorph, 1);
        assert_eq!(
            check_discordance(&evidence).to_string(),
            "indeterminate:indeterminate:-:-:-"
        );

        // ...but it does count toward the ratio once a real hypomorph is present
        let evidence = ev(&["BS3", "hypomorph", "hypomorph_like", "hypomorph_like"]);
        assert_eq!(
            check_discordance(&evidence).to_string(),
            "Hypomorph:Discordant:3:1:Hypomorph"
        );
    }

    #[rstest]
    fn test_missing_entries_never_match() {
        let evidence = vec![Evidence::Missing, Evidence::from("PS3"), Evidence::Missing];
        let verdict = check_discordance(&evidence);
        assert_eq!(verdict.call, Call::Pathogenic);
        assert_eq!(verdict.ratio, RatioField::Count(1));

        assert_eq!(
            check_discordance(&[Evidence::Missing]).to_string(),
            "indeterminate:indeterminate:-:-:-"
        );
    }

    #[rstest]
    fn test_verdict_is_deterministic() {
        let evidence = ev(&["BS3", "PS3_supporting", "hypomorph"]);
        let first = check_discordance(&evidence);
        for _ in 0..3 {
            assert_eq!(check_discordance(&evidence), first);
        }
    }
}
