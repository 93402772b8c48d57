use clap::{Arg, Command, arg};

pub use brcaint_stats::consts::DEFAULT_SKIP_ROWS;

pub const STATS_CMD: &str = "stats";

pub fn create_stats_cli() -> Command {
    Command::new(STATS_CMD)
        .about("Summarise how often variants were tested in supplementary assay tables.")
        .arg(
            Arg::new("tables")
                .required(true)
                .num_args(1..)
                .help("One or more supplementary tables (CSV/TSV, optionally .gz)"),
        )
        .arg(
            Arg::new("skip-rows")
                .long("skip-rows")
                .required(false)
                .value_parser(clap::value_parser!(usize))
                .default_value("1")
                .help("Lines above the header row to skip"),
        )
        .arg(
            arg!(--output <OUTPUT>)
                .required(false)
                .help("Output JSON path (default: stdout)"),
        )
}
