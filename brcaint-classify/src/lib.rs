//! Functional-evidence classification for BRCA1/BRCA2 assay results.
//!
//! Each variant's assay results are mapped through a classification table
//! into evidence labels (`BS3`, `PS3_moderate`, `hypomorph`, ...). From
//! those labels this crate derives two independent calls:
//!
//! - a primary category (`bs3`, `ps3_supporting`, `discordant`, ...), with
//!   hypomorph evidence counted on the side, see [`category`]
//! - a discordance verdict with a 3:1 evidence ratio test, see [`discordance`]
//!
//! # Example
//!
//! ```no_run
//! use brcaint_classify::{ClassificationReport, ClassificationTable, build_evidence};
//! use brcaint_core::models::Table;
//!
//! let classes = ClassificationTable::from_path("classes.csv".as_ref()).unwrap();
//! let results = Table::from_path("results.csv".as_ref(), 0).unwrap();
//!
//! let evidence = build_evidence(&results, &classes, None).unwrap();
//! let report = ClassificationReport::from(evidence);
//! report.to_file("discordance_report.txt".as_ref()).unwrap();
//! ```
pub mod builder;
pub mod category;
pub mod classes;
pub mod consts;
pub mod discordance;
pub mod errors;
pub mod evidence;
pub mod report;

// re-exports
pub use builder::{EvidenceSet, SkipSummary, build_evidence};
pub use category::{Category, CategoryCount, CategoryTally, classify_variant, count_categories};
pub use classes::ClassificationTable;
pub use discordance::{DiscordanceVerdict, RatioCall, RatioOutcome, check_discordance, is_valid_ratio};
pub use errors::LookupError;
pub use evidence::{Evidence, VariantEvidence};
pub use report::{ClassificationReport, Summary, VariantCall};
