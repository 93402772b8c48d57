//! Primary category of a variant from its functional evidence.
//!
//! Every variant lands in exactly one primary bucket. The `hypomorph`
//! bucket is a side counter: it counts variants with any hypomorph
//! evidence, whatever their primary bucket.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::Serialize;

use crate::consts::{BENIGN_MARKER, HYPOMORPH_LABEL, PATHOGENIC_MARKER};
use crate::evidence::{Evidence, labels};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Bs3,
    Bs3Moderate,
    Bs3Supporting,
    Ps3,
    Ps3Moderate,
    Ps3Supporting,
    Discordant,
    Hypomorph,
    NotClassified,
}

impl Category {
    /// All buckets, in report order.
    pub const ALL: [Category; 9] = [
        Category::Bs3,
        Category::Bs3Moderate,
        Category::Bs3Supporting,
        Category::Ps3,
        Category::Ps3Moderate,
        Category::Ps3Supporting,
        Category::Discordant,
        Category::Hypomorph,
        Category::NotClassified,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Bs3 => "bs3",
            Category::Bs3Moderate => "bs3_moderate",
            Category::Bs3Supporting => "bs3_supporting",
            Category::Ps3 => "ps3",
            Category::Ps3Moderate => "ps3_moderate",
            Category::Ps3Supporting => "ps3_supporting",
            Category::Discordant => "discordant",
            Category::Hypomorph => "hypomorph",
            Category::NotClassified => "not_classified",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

/// Exact labels checked when evidence is not discordant, highest priority first.
const STRENGTH_LABELS: [(&str, Category); 6] = [
    ("BS3", Category::Bs3),
    ("BS3_moderate", Category::Bs3Moderate),
    ("BS3_supporting", Category::Bs3Supporting),
    ("PS3", Category::Ps3),
    ("PS3_moderate", Category::Ps3Moderate),
    ("PS3_supporting", Category::Ps3Supporting),
];

///
/// Assign the primary category of one variant.
///
/// Benign and pathogenic evidence together make the variant discordant,
/// and no strength label is looked at. Otherwise the strongest exact label
/// wins: strong before moderate before supporting, benign before
/// pathogenic.
/// Never returns [`Category::Hypomorph`].
///
pub fn classify_variant(evidence: &[Evidence]) -> Category {
    let benign = labels(evidence).any(|l| l.contains(BENIGN_MARKER));
    let pathogenic = labels(evidence).any(|l| l.contains(PATHOGENIC_MARKER));

    if benign && pathogenic {
        return Category::Discordant;
    }

    STRENGTH_LABELS
        .iter()
        .find(|(label, _)| labels(evidence).any(|l| l == *label))
        .map(|(_, category)| *category)
        .unwrap_or(Category::NotClassified)
}

/// True if the exact `hypomorph` label is present.
pub fn has_hypomorph(evidence: &[Evidence]) -> bool {
    labels(evidence).any(|l| l == HYPOMORPH_LABEL)
}

///
/// Bucket counts for one classification pass.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub bs3: usize,
    pub bs3_moderate: usize,
    pub bs3_supporting: usize,
    pub ps3: usize,
    pub ps3_moderate: usize,
    pub ps3_supporting: usize,
    pub discordant: usize,
    pub hypomorph: usize,
    pub not_classified: usize,
}

impl CategoryCount {
    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Bs3 => self.bs3,
            Category::Bs3Moderate => self.bs3_moderate,
            Category::Bs3Supporting => self.bs3_supporting,
            Category::Ps3 => self.ps3,
            Category::Ps3Moderate => self.ps3_moderate,
            Category::Ps3Supporting => self.ps3_supporting,
            Category::Discordant => self.discordant,
            Category::Hypomorph => self.hypomorph,
            Category::NotClassified => self.not_classified,
        }
    }

    fn slot_mut(&mut self, category: Category) -> &mut usize {
        match category {
            Category::Bs3 => &mut self.bs3,
            Category::Bs3Moderate => &mut self.bs3_moderate,
            Category::Bs3Supporting => &mut self.bs3_supporting,
            Category::Ps3 => &mut self.ps3,
            Category::Ps3Moderate => &mut self.ps3_moderate,
            Category::Ps3Supporting => &mut self.ps3_supporting,
            Category::Discordant => &mut self.discordant,
            Category::Hypomorph => &mut self.hypomorph,
            Category::NotClassified => &mut self.not_classified,
        }
    }

    pub fn increment(&mut self, category: Category) {
        *self.slot_mut(category) += 1;
    }

    ///
    /// Count one variant's primary category and, separately, its
    /// hypomorph evidence.
    ///
    pub fn record(&mut self, primary: Category, hypomorph: bool) {
        self.increment(primary);
        if hypomorph {
            self.increment(Category::Hypomorph);
        }
    }

    /// Classify and count one variant; returns its primary category.
    pub fn record_evidence(&mut self, evidence: &[Evidence]) -> Category {
        let primary = classify_variant(evidence);
        self.record(primary, has_hypomorph(evidence));
        primary
    }

    /// Bucket-wise sum.
    pub fn merge(mut self, other: CategoryCount) -> CategoryCount {
        for (category, count) in other.iter() {
            *self.slot_mut(category) += count;
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    /// Sum of the primary buckets, i.e. the number of variants counted.
    pub fn primary_total(&self) -> usize {
        self.iter()
            .filter(|(c, _)| *c != Category::Hypomorph)
            .map(|(_, n)| n)
            .sum()
    }
}

///
/// Result of [`count_categories`].
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CategoryTally {
    pub variants_processed: usize,
    pub categories: CategoryCount,
}

///
/// Classify every evidence list and count the buckets.
///
pub fn count_categories<I, E>(variants: I) -> CategoryTally
where
    I: IntoIterator<Item = E>,
    E: AsRef<[Evidence]>,
{
    let mut tally = CategoryTally::default();
    for evidence in variants {
        tally.variants_processed += 1;
        tally.categories.record_evidence(evidence.as_ref());
    }
    tally
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
    #[case(&["BS3"], Category::Bs3)]
    #[case(&["BS3_supporting", "BS3_moderate"], Category::Bs3Moderate)]
    #[case(&["PS3_supporting", "PS3"], Category::Ps3)]
    #[case(&["PS3_supporting", "hypomorph"], Category::Ps3Supporting)]
    #[case(&["PS3_moderate", "PS3_supporting"], Category::Ps3Moderate)]
    #[case(&["BS3_supporting", "PS3"], Category::Discordant)]
    #[case(&["BS3", "PS3_moderate", "BS3"], Category::Discordant)]
    #[case(&["hypomorph"], Category::NotClassified)]
    #[case(&["benign"], Category::NotClassified)]
    #[case(&["BS3_strong"], Category::NotClassified)]
    #[case(&[], Category::NotClassified)]
    fn test_classify_variant(#[case] items: &[&str], #[case] expected: Category) {
        assert_eq!(classify_variant(&ev(items)), expected);
    }

    #[rstest]
    fn test_missing_entries_are_ignored() {
        let evidence = vec![Evidence::Missing, Evidence::from("BS3_moderate"), Evidence::Missing];
        assert_eq!(classify_variant(&evidence), Category::Bs3Moderate);
        assert!(!has_hypomorph(&[Evidence::Missing]));
    }

    #[rstest]
    fn test_hypomorph_is_a_side_counter() {
        let mut counts = CategoryCount::default();
        let primary = counts.record_evidence(&ev(&["BS3", "hypomorph"]));

        assert_eq!(primary, Category::Bs3);
        assert_eq!(counts.bs3, 1);
        assert_eq!(counts.hypomorph, 1);
        assert_eq!(counts.primary_total(), 1);
    }

    #[rstest]
    fn test_hypomorph_is_exact_match() {
        assert!(has_hypomorph(&ev(&["hypomorph"])));
        assert!(!has_hypomorph(&ev(&["hypomorph_partial"])));
    }

    #[rstest]
    fn test_count_categories() {
        let variants = vec![
            ev(&["BS3"]),
            ev(&["BS3", "PS3"]),
            ev(&["hypomorph"]),
            ev(&["PS3_supporting", "hypomorph"]),
            ev(&["BS3_supporting"]),
        ];

        let tally = count_categories(&variants);

        assert_eq!(tally.variants_processed, 5);
        assert_eq!(
            tally.categories,
            CategoryCount {
                bs3: 1,
                bs3_supporting: 1,
                ps3_supporting: 1,
                discordant: 1,
                hypomorph: 2,
                not_classified: 1,
                ..Default::default()
            }
        );
        // each variant lands in exactly one primary bucket
        assert_eq!(tally.categories.primary_total(), tally.variants_processed);
    }

    #[rstest]
    fn test_merge_is_bucketwise_sum() {
        let mut a = CategoryCount::default();
        a.record(Category::Ps3, true);
        let mut b = CategoryCount::default();
        b.record(Category::Ps3, false);
        b.record(Category::NotClassified, false);

        let merged = a.merge(b);
        assert_eq!(merged.ps3, 2);
        assert_eq!(merged.hypomorph, 1);
        assert_eq!(merged.not_classified, 1);
        assert_eq!(merged, b.merge(a));
    }

    #[rstest]
    fn test_category_names_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
        assert!("bs4".parse::<Category>().is_err());
        assert_eq!(
            serde_json::to_string(&Category::Bs3Moderate).unwrap(),
            "\"bs3_moderate\""
        );
    }

    #[rstest]
    fn test_classification_is_deterministic() {
        let evidence = ev(&["PS3", "BS3_moderate", "hypomorph"]);
        let first = classify_variant(&evidence);
        for _ in 0..3 {
            assert_eq!(classify_variant(&evidence), first);
        }
    }
}
