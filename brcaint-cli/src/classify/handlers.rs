use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use brcaint_classify::{ClassificationReport, ClassificationTable, Summary, build_evidence};
use brcaint_core::models::Table;

use super::cli::DEFAULT_OUT;

pub fn run_classify(matches: &ArgMatches) -> Result<()> {
    // get arguments from CLI
    let results = matches
        .get_one::<String>("results")
        .expect("A path to a results table is required.");

    let classes = matches
        .get_one::<String>("classes")
        .expect("A path to a classification table is required.");

    let key_column = matches.get_one::<String>("key-column").map(String::as_str);

    let default_out = DEFAULT_OUT.to_string();
    let output = matches.get_one::<String>("output").unwrap_or(&default_out);
    let summary_path = matches.get_one::<String>("summary");

    // load tables
    let classes = ClassificationTable::from_path(Path::new(classes))
        .with_context(|| format!("Failed to load classification table: {}", classes))?;
    let results = Table::from_path(Path::new(results), 0)
        .with_context(|| format!("Failed to load results table: {}", results))?;

    info!(
        "Loaded {} tracks from the classification table and {} variants from the results table",
        classes.n_tracks(),
        results.n_rows()
    );

    let evidence = build_evidence(&results, &classes, key_column)?;
    let report = ClassificationReport::from(evidence);

    write_report(&report, Path::new(output))?;
    info!("Wrote {} report lines to {}", report.calls.len(), output);

    write_summary(&report.summary, summary_path.map(String::as_str))?;

    Ok(())
}

fn write_report(report: &ClassificationReport, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create report file: {:?}", path))?;
    let mut writer = BufWriter::new(file);

    let bar = ProgressBar::new(report.calls.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}")?
            .progress_chars("##-"),
    );

    for call in &report.calls {
        writeln!(writer, "{}", call)?;
        bar.inc(1);
    }
    bar.finish_and_clear();

    writer.flush()?;
    Ok(())
}

fn write_summary(summary: &Summary, path: Option<&str>) -> Result<()> {
    match path {
        Some(p) => {
            let file = File::create(p).with_context(|| format!("Failed to create summary file: {}", p))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, summary)?;
            writer.flush()?;
            info!("Summary written to {}", p);
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            serde_json::to_writer_pretty(&mut handle, summary)?;
            writeln!(handle)?;
        }
    }
    Ok(())
}
