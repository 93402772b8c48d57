use clap::{Arg, Command, arg};

pub use brcaint_classify::consts::DEFAULT_OUT;

pub const CLASSIFY_CMD: &str = "classify";

pub fn create_classify_cli() -> Command {
    Command::new(CLASSIFY_CMD)
        .about("Classify variants and call evidence discordance from per-assay results.")
        .arg(
            Arg::new("results")
                .required(true)
                .help("Results table (CSV/TSV, optionally .gz): one column per assay track"),
        )
        .arg(
            Arg::new("classes")
                .required(true)
                .help("Classification table: track, label for code 2, label for code 0"),
        )
        .arg(
            Arg::new("key-column")
                .long("key-column")
                .required(false)
                .help("Column holding the variant identifier (default: row index)"),
        )
        .arg(
            arg!(--output <OUTPUT>)
                .required(false)
                .help("Report path (default: discordance_report.txt)"),
        )
        .arg(
            arg!(--summary <SUMMARY>)
                .required(false)
                .help("Summary JSON path (default: stdout)"),
        )
}
