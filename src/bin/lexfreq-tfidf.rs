use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use lexfreq::errors::{self, Result};
use lexfreq::output::{self, Format};
use lexfreq::tfidf::{self, TfIdf};
use log::info;
use std::io::{self, Write};
use std::path::Path;
use std::process;

/// TF-IDF of lexemes over a folder of CSV files
#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Input folder (*.csv files, each with a header row)
    indir: String,
    /// Print overall lexeme frequencies instead of TF-IDF scores
    #[arg(long)]
    global: bool,
    /// Print only this many lexemes per document (and overall)
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

fn check_args(args: &Args) -> Result<()> {
    output::check_format(args.format, args.compact)?;
    if args.global && args.format != Format::Tsv {
        return Err(errors::invalid_argument_ref(
            "--global only applies to --format tsv, JSON output has both",
        ));
    }
    if args.limit == Some(0) {
        return Err(errors::invalid_argument_ref("limit must be positive"));
    }
    Ok(())
}

fn process(args: &Args) -> Result<()> {
    check_args(args)?;
    info!(target: "lexfreq", "read: {}", args.indir);
    let result = tfidf::calc(Path::new(&args.indir))?;
    let mut writer = io::BufWriter::new(io::stdout().lock());
    match args.format {
        Format::Tsv if args.global => {
            output::write_tsv(&mut writer, output::limited(&result.global, args.limit))?
        }
        Format::Tsv => output::write_scores(&mut writer, &result.documents, args.limit)?,
        Format::Json => {
            let limited = TfIdf {
                global: output::limited(&result.global, args.limit).to_vec(),
                documents: result
                    .documents
                    .iter()
                    .map(|d| tfidf::DocumentScores {
                        name: d.name.clone(),
                        total: d.total,
                        scores: output::limited(&d.scores, args.limit).to_vec(),
                    })
                    .collect(),
            };
            if args.compact {
                serde_json::to_writer(&mut writer, &limited)?;
            } else {
                serde_json::to_writer_pretty(&mut writer, &limited)?;
            }
            writeln!(writer)?;
        }
    }
    writer.flush()?;
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
