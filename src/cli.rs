use crate::utils::{Result, SeqFormat};
use clap::{ArgAction, ArgGroup, Parser, Subcommand};
use env_logger::fmt::Color;
use log::{Level, LevelFilter};
use std::{
    io::Write,
    path::{Path, PathBuf},
};

#[derive(Parser)]
#[command(name = "gcat",
          version = env!("CARGO_PKG_VERSION"),
          about = "Annotates DNA sequences with GC-content states",
          long_about = None,
          disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[clap(short = 'v')]
    #[clap(long = "verbose")]
    #[clap(action = ArgAction::Count, help = "Specify multiple times to increase verbosity level (e.g., -vv for more verbosity)")]
    pub verbosity: u8,
}

#[derive(Subcommand)]
pub enum Command {
    #[clap(about = "Segment sequence records into GC-content states")]
    Annotate(AnnotateArgs),
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("annotate")))]
#[command(arg_required_else_help(true))]
pub struct AnnotateArgs {
    #[clap(required = true)]
    #[clap(short = 'i')]
    #[clap(long = "seq-file")]
    #[clap(help = "Input sequence file to annotate (optionally gzipped)")]
    #[clap(value_name = "SEQ_FILE")]
    #[arg(value_parser = check_file_exists)]
    pub seq_path: PathBuf,

    #[clap(short = 't')]
    #[clap(long = "input-file-type")]
    #[clap(help = "Input file format (fasta or fastq)")]
    #[clap(value_name = "FILE_TYPE")]
    #[clap(default_value = "fasta")]
    pub seq_format: SeqFormat,

    #[clap(short = 'k')]
    #[clap(long = "kmer-length")]
    #[clap(help = "Sliding window length")]
    #[clap(value_name = "KMER_LEN")]
    #[clap(default_value = "50")]
    #[arg(value_parser = length_in_range)]
    pub kmer_length: usize,

    #[clap(short = 'm')]
    #[clap(long = "min-interval-length")]
    #[clap(help = "Minimum length of an interval kept during smoothing")]
    #[clap(value_name = "MIN_LEN")]
    #[clap(default_value = "10")]
    #[arg(value_parser = length_in_range)]
    pub min_interval_length: usize,

    #[clap(long = "no-smoothing")]
    #[clap(help = "Skip the interval smoothing pass")]
    pub no_smoothing: bool,

    #[clap(short = 'a')]
    #[clap(long = "alpha")]
    #[clap(help = "Alpha for significance")]
    #[clap(value_name = "ALPHA")]
    #[clap(default_value = "0.01")]
    #[arg(value_parser = ensure_significance_level)]
    pub alpha: f64,

    #[clap(short = 'o')]
    #[clap(long = "output")]
    #[clap(help = "Output file. Default is to write to stdout")]
    #[clap(value_name = "OUTPUT")]
    #[arg(value_parser = check_output_path)]
    pub output_path: Option<PathBuf>,

    #[clap(long = "threads")]
    #[clap(help = "Number of annotation threads")]
    #[clap(value_name = "THREADS")]
    #[clap(default_value = "1")]
    #[arg(value_parser = threads_in_range)]
    pub num_threads: usize,
}

pub fn init_verbose(args: &Cli) {
    let filter_level: LevelFilter = match args.verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            let level = record.level();
            let mut style = buf.style();
            match record.level() {
                Level::Error => style.set_color(Color::Red),
                Level::Warn => style.set_color(Color::Yellow),
                Level::Info => style.set_color(Color::Green),
                Level::Debug => style.set_color(Color::Blue),
                Level::Trace => style.set_color(Color::Cyan),
            };

            writeln!(
                buf,
                "{} [{}] - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                style.value(level),
                record.args()
            )
        })
        .filter_level(filter_level)
        .init();
}

fn check_file_exists(s: &str) -> Result<PathBuf> {
    let path = Path::new(s);
    if !path.exists() {
        Err(format!("File does not exist: {}", path.display()))
    } else {
        Ok(path.to_path_buf())
    }
}

fn check_output_path(s: &str) -> Result<PathBuf> {
    let path = Path::new(s);
    if let Some(parent_dir) = path.parent() {
        if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
            return Err(format!("Path does not exist: {}", parent_dir.display()));
        }
    }
    Ok(path.to_path_buf())
}

fn threads_in_range(s: &str) -> Result<usize> {
    let thread: usize = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid thread number", s))?;
    if thread >= 1 {
        Ok(thread)
    } else {
        Err("Number of threads must be at least 1".into())
    }
}

fn length_in_range(s: &str) -> Result<usize> {
    let length: usize = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid length", s))?;
    if length >= 1 {
        Ok(length)
    } else {
        Err("Length must be at least 1".into())
    }
}

fn ensure_significance_level(s: &str) -> Result<f64> {
    let value = s
        .parse::<f64>()
        .map_err(|e| format!("Could not parse float: {}", e))?;
    if value <= 0.0 || value >= 1.0 {
        Err(format!(
            "The value must be strictly between 0.0 and 1.0, got: {}",
            value
        ))
    } else {
        Ok(value)
    }
}
