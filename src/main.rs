use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use lexfreq::driver::{self, DriverArgs};
use lexfreq::errors::{self, Result};
use lexfreq::output::{self, Format, OReport};
use log::info;
use std::io::Write;
use std::{fs, io, process};

/// Count lexeme frequencies in tokenizer output
#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Input file (CSV with a header row)
    infile: String,
    /// Maximum number of distinct lexemes to keep (unlimited if not given)
    #[arg(long)]
    max_lexemes: Option<usize>,
    /// Print only the most frequent lexemes
    #[arg(long)]
    limit: Option<usize>,
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Tsv)]
    format: Format,
    /// Produce compact JSON
    #[arg(long)]
    compact: bool,
    /// Report errors as a JSON file
    #[arg(long)]
    error_file: Option<String>,
    /// Verbosity
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn process(args: &Args) -> Result<()> {
    output::check_format(args.format, args.compact)?;
    if args.limit == Some(0) {
        return Err(errors::invalid_argument_ref("limit must be positive"));
    }
    info!(target: "lexfreq", "read: {}", args.infile);
    let file = fs::File::open(&args.infile).map_err(|e| errors::cannot_open(&args.infile, e))?;
    let driver_args = DriverArgs {
        max_lexemes: args.max_lexemes,
    };
    let report = driver::calc(&driver_args, io::BufReader::new(file))?;
    let shown = output::limited(&report.records, args.limit);
    let mut writer = io::BufWriter::new(io::stdout().lock());
    match args.format {
        Format::Tsv if report.records.is_empty() => {
            writeln!(writer, "{}", output::NOTHING_TO_PROCESS)?;
        }
        Format::Tsv => output::write_tsv(&mut writer, shown)?,
        Format::Json => {
            let o = OReport::new(&report, shown);
            if args.compact {
                serde_json::to_writer(&mut writer, &o)?;
            } else {
                serde_json::to_writer_pretty(&mut writer, &o)?;
            }
            writeln!(writer)?;
        }
    }
    writer.flush()?;
    if shown.len() < report.records.len() {
        info!(
            target: "lexfreq",
            "{} more lexemes not shown",
            report.records.len() - shown.len()
        );
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    pretty_env_logger::formatted_timed_builder()
        .filter_level(args.verbose.log_level_filter())
        .init();
    if let Err(e) = process(&args) {
        output::report_error(&*e, args.error_file.as_deref());
        process::exit(1);
    }
}
