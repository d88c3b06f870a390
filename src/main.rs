use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use deferred_seq::{Change, Randomizer, RandomizerConfig, SequenceExt};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "deferred-seq", about = "Lazy sequence combinators over line-oriented files")]
struct Cli {
    /// Log combinator internals at debug level (overridden by RUST_LOG).
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Prefix every line with a running tag.
    Sequence {
        /// Input file (one item per line).
        input: PathBuf,
        /// First tag value.
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        start: i64,
    },
    /// Print lines of INPUT that do not occur in OTHER.
    Except {
        /// Input file (one item per line).
        input: PathBuf,
        /// Lines to exclude.
        other: PathBuf,
        /// Compare lines case-insensitively.
        #[arg(long)]
        ignore_case: bool,
    },
    /// Group lines into fixed-size windows.
    Chunk {
        /// Input file (one item per line).
        input: PathBuf,
        /// Lines per window.
        #[arg(long, default_value_t = 10)]
        size: usize,
        /// Separator placed between items of a window.
        #[arg(long, default_value = ",")]
        separator: String,
    },
    /// Median of integer lines.
    Median {
        /// Input file (one integer per line).
        input: PathBuf,
    },
    /// Prepend filler lines until WIDTH lines are printed.
    PadLeft {
        /// Input file (one item per line).
        input: PathBuf,
        /// Minimum number of output lines.
        #[arg(long)]
        width: usize,
        /// Filler text; `{}` is replaced by the filler index.
        #[arg(long, default_value = "")]
        filler: String,
    },
    /// Append filler lines until WIDTH lines are printed.
    PadRight {
        /// Input file (one item per line).
        input: PathBuf,
        /// Minimum number of output lines.
        #[arg(long)]
        width: usize,
        /// Filler text; `{}` is replaced by the filler index.
        #[arg(long, default_value = "")]
        filler: String,
    },
    /// Print lines in random order.
    Shuffle {
        /// Input file (one item per line).
        input: PathBuf,
        /// Seed for a reproducible order.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Classify MASTER against SLAVE as `+` create, `~` update, `-` delete.
    Reconcile {
        /// Desired state (one item per line).
        master: PathBuf,
        /// Current state (one item per line).
        slave: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Sequence { input, start } => run_sequence(input, start)?,
        Commands::Except {
            input,
            other,
            ignore_case,
        } => run_except(input, other, ignore_case)?,
        Commands::Chunk {
            input,
            size,
            separator,
        } => run_chunk(input, size, &separator)?,
        Commands::Median { input } => run_median(input)?,
        Commands::PadLeft {
            input,
            width,
            filler,
        } => run_pad(input, width, filler, PadSide::Left)?,
        Commands::PadRight {
            input,
            width,
            filler,
        } => run_pad(input, width, filler, PadSide::Right)?,
        Commands::Shuffle { input, seed } => run_shuffle(input, seed)?,
        Commands::Reconcile { master, slave } => run_reconcile(master, slave)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_sequence(input_path: PathBuf, start: i64) -> Result<()> {
    let lines = read_lines(&input_path)?;
    for tagged in (&lines).sequenced(start).iter() {
        println!("{}\t{}", tagged.tag, tagged.item);
    }
    Ok(())
}

fn run_except(input_path: PathBuf, other_path: PathBuf, ignore_case: bool) -> Result<()> {
    let lines = read_lines(&input_path)?;
    let other = read_lines(&other_path)?;
    let normalize = move |line: &str| {
        if ignore_case {
            line.to_lowercase()
        } else {
            line.to_string()
        }
    };
    let excluded: Vec<String> = other.iter().map(|line| normalize(line.as_str())).collect();

    for line in (&lines).except_with(excluded, move |line| normalize(line.as_str())).iter() {
        println!("{line}");
    }
    Ok(())
}

fn run_chunk(input_path: PathBuf, size: usize, separator: &str) -> Result<()> {
    let lines = read_lines(&input_path)?;
    let windows = (&lines)
        .buffer(size)
        .with_context(|| format!("cannot chunk {}", input_path.display()))?;
    for window in windows.iter() {
        println!("{}", deferred_seq::unsplit(window, separator));
    }
    Ok(())
}

fn run_median(input_path: PathBuf) -> Result<()> {
    let lines = read_lines(&input_path)?;
    let values = lines
        .iter()
        .enumerate()
        .map(|(line_no, line)| {
            line.trim().parse::<i64>().with_context(|| {
                format!(
                    "invalid integer '{}' on line {} of {}",
                    line,
                    line_no + 1,
                    input_path.display()
                )
            })
        })
        .collect::<Result<Vec<_>>>()?;

    println!("{}", deferred_seq::median(values, |n| n));
    Ok(())
}

#[derive(Debug, Clone, Copy)]
enum PadSide {
    Left,
    Right,
}

fn run_pad(input_path: PathBuf, width: usize, filler: String, side: PadSide) -> Result<()> {
    let lines = read_lines(&input_path)?;
    let fill = move |index: usize| filler.replace("{}", &index.to_string());
    let items = lines.iter().cloned();

    let padded: Vec<String> = match side {
        PadSide::Left => items.pad_left(width, fill).iter().collect(),
        PadSide::Right => items.pad_right(width, fill).iter().collect(),
    };
    for line in padded {
        println!("{line}");
    }
    Ok(())
}

fn run_shuffle(input_path: PathBuf, seed: Option<u64>) -> Result<()> {
    let lines = read_lines(&input_path)?;
    let config = RandomizerConfig { seed };
    let rng = Arc::new(Randomizer::from_config(&config));
    for line in (&lines).shuffled(rng).iter() {
        println!("{line}");
    }
    Ok(())
}

fn run_reconcile(master_path: PathBuf, slave_path: PathBuf) -> Result<()> {
    let master = read_lines(&master_path)?;
    let slave = read_lines(&slave_path)?;
    for change in (&master).reconcile(&slave, |m, s| m == s).iter() {
        match change {
            Change::Create(m) => println!("+{m}"),
            Change::Update(m, _) => println!("~{m}"),
            Change::Delete(s) => println!("-{s}"),
        }
    }
    Ok(())
}

fn read_lines(path: &PathBuf) -> Result<Vec<String>> {
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let reader = BufReader::new(file);
    let mut lines = Vec::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line
            .with_context(|| format!("failed to read line {} of {}", line_no + 1, path.display()))?;
        if line.trim().is_empty() {
            continue;
        }
        lines.push(line);
    }

    debug!(path = %path.display(), lines = lines.len(), "read input");
    Ok(lines)
}
