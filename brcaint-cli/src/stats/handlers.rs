use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use brcaint_core::models::Table;
use brcaint_stats::{AssayStatistics, AssayTable};

use super::cli::DEFAULT_SKIP_ROWS;

pub fn run_stats(matches: &ArgMatches) -> Result<()> {
    let tables: Vec<&String> = matches
        .get_many::<String>("tables")
        .expect("At least one table is required.")
        .collect();
    let skip_rows = matches
        .get_one::<usize>("skip-rows")
        .copied()
        .unwrap_or(DEFAULT_SKIP_ROWS);
    let output_path = matches.get_one::<String>("output");

    let mut all_stats: BTreeMap<String, AssayStatistics> = BTreeMap::new();

    for table_path in tables {
        let path = Path::new(table_path);
        let table = Table::from_path(path, skip_rows)
            .with_context(|| format!("Failed to load table: {}", table_path))?;
        let stats = AssayTable::new(&table)
            .with_context(|| format!("Not a supplementary assay table: {}", table_path))?
            .summarize();

        info!(
            "{}: {} variants, {} assay results",
            table_path, stats.number_of_variants, stats.total_assays_tested
        );

        all_stats.insert(table_name(path), stats);
    }

    match output_path {
        Some(p) => {
            let file = File::create(p).with_context(|| format!("Failed to create output file: {}", p))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, &all_stats)?;
            writer.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            serde_json::to_writer_pretty(&mut handle, &all_stats)?;
            writeln!(handle)?;
        }
    }

    Ok(())
}

/// File name without its table and compression extensions.
fn table_name(path: &Path) -> String {
    let name = path
        .file_name()
        .and_then(|f| f.to_str())
        .unwrap_or_default();
    let name = name.strip_suffix(".gz").unwrap_or(name);
    Path::new(name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(name)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("data/sup_table_1.csv", "sup_table_1")]
    #[case("sup_table_2.tsv.gz", "sup_table_2")]
    #[case("brca1", "brca1")]
    fn test_table_name(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(table_name(Path::new(path)), expected);
    }

    #[rstest]
    fn test_run_stats() {
        let table = std::env::current_dir()
            .unwrap()
            .join("../tests/data/brca/sup_table_brca1.csv");
        let tempdir = tempfile::tempdir().unwrap();
        let output = tempdir.path().join("stats.json");

        let matches = crate::build_parser()
            .try_get_matches_from([
                "brcaint",
                "stats",
                table.to_str().unwrap(),
                "--output",
                output.to_str().unwrap(),
            ])
            .unwrap();
        let (_, matches) = matches.subcommand().unwrap();

        run_stats(matches).unwrap();

        let stats: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        let brca1 = &stats["sup_table_brca1"];
        assert_eq!(brca1["number_of_variants"], 6);
        assert_eq!(brca1["total_assays_tested"], 12);
        assert_eq!(brca1["documented_tested_variants"], 4);
        assert_eq!(brca1["reference_variants_tested"], 3);
        assert_eq!(brca1["documented_without_reference_tested"], 1);
        assert_eq!(brca1["test_distribution"]["2"], 2);
        assert_eq!(brca1["vus_test_distribution"]["0"], 1);
        assert_eq!(brca1["tests_per_track"]["Findlay_2018"], 5);
    }
}
