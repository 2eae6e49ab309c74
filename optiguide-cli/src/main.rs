//! # Optiguide CLI - CRISPR Guide Discovery
//!
//! A command-line interface for guide-RNA candidate discovery and off-target
//! site surveying.
//!
//! ## Usage
//!
//! ```bash
//! # Discovery mode over both strands
//! optiguide -t targets.fasta -g genome.fasta -o guides.tsv
//!
//! # CRISPR interference (reverse strand only)
//! optiguide -t targets.fasta -g genome.fasta -a i -o guides.tsv
//!
//! # CRISPR activation within 400 bp of the region start
//! optiguide -t targets.fasta -g genome.fasta -a 400a -o guides.tsv
//!
//! # Avoid BsaI sites inside guide windows, multi-file background
//! optiguide -t targets.fasta -g genome.fasta plasmid.fasta -c GGTCTC
//! ```
//!
//! ## Options
//!
//! - `-t, --target <FILE>`: Target-region sequence file (FASTA or GenBank)
//! - `-g, --genome <FILE>...`: Background files, concatenated in argument order
//! - `-p, --pam <SEQ>`: Literal PAM motif (default: GG)
//! - `-l, --guide-length <N>`: Guide window length (default: 20)
//! - `-a, --aim <MODE>`: d (discovery), i (interference), s (screening), or
//!   `<N>a` (activation with cutoff N)
//! - `-c, --cut <SITE>...`: Exclusion subsequences banned inside guide windows
//! - `-o, --output <FILE>`: TSV score report (default: stdout)
//! - `-r, --reference-out <FILE>`: Persisted background record (default: refgenome.fasta)
//! - `-q, --quiet`: Suppress progress and timing messages
//! - `--threads <N>`: Thread-pool size for per-region catalog building

use clap::{Arg, ArgAction, Command};
use optiguide_core::GuideFinder;
use optiguide_core::config::{ApplicationMode, GuideConfig};
use optiguide_core::output::write_report;
use optiguide_core::scoring::OffTargetCounter;
use optiguide_core::sequence::{load_genome_background, load_targets, write_reference_genome};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Instant;

/// Main entry point for the Optiguide CLI application.
///
/// Parses command-line arguments, loads the target regions and genome
/// background, builds the guide catalog, runs the off-target counter, and
/// writes the score report as TSV.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("optiguide")
        .version(env!("CARGO_PKG_VERSION"))
        .about("CRISPR guide-RNA candidate discovery and off-target survey")
        .arg(
            Arg::new("target")
                .short('t')
                .long("target")
                .value_name("FILE")
                .required(true)
                .help("Target-region sequence file (FASTA or GenBank)"),
        )
        .arg(
            Arg::new("genome")
                .short('g')
                .long("genome")
                .value_name("FILE")
                .num_args(1..)
                .required(true)
                .help("Genome background files, concatenated in argument order"),
        )
        .arg(
            Arg::new("pam")
                .short('p')
                .long("pam")
                .value_name("SEQ")
                .default_value("GG")
                .help("Literal PAM motif searched on the scanned strand"),
        )
        .arg(
            Arg::new("guide-length")
                .short('l')
                .long("guide-length")
                .value_name("N")
                .default_value("20")
                .help("Guide window length in nucleotides"),
        )
        .arg(
            Arg::new("aim")
                .short('a')
                .long("aim")
                .value_name("MODE")
                .default_value("d")
                .help("Application mode: d, i, s, or <N>a for activation"),
        )
        .arg(
            Arg::new("cut")
                .short('c')
                .long("cut")
                .value_name("SITE")
                .num_args(1..)
                .help("Subsequences that may not occur inside a guide window"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Score report file (default: stdout)"),
        )
        .arg(
            Arg::new("reference-out")
                .short('r')
                .long("reference-out")
                .value_name("FILE")
                .default_value("refgenome.fasta")
                .help("Where to persist the concatenated genome background"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Suppress progress and timing messages"),
        )
        .arg(
            Arg::new("threads")
                .long("threads")
                .value_name("N")
                .help("Thread-pool size for per-region catalog building"),
        )
        .get_matches();

    let mode = ApplicationMode::parse(matches.get_one::<String>("aim").unwrap())?;
    let guide_length: usize = matches
        .get_one::<String>("guide-length")
        .unwrap()
        .parse()
        .map_err(|_| "Invalid guide length")?;
    let num_threads = match matches.get_one::<String>("threads") {
        Some(value) => Some(value.parse::<usize>().map_err(|_| "Invalid thread count")?),
        None => None,
    };
    let exclusions: Vec<String> = matches
        .get_many::<String>("cut")
        .into_iter()
        .flatten()
        .map(|site| site.to_ascii_uppercase())
        .filter(|site| !site.is_empty())
        .collect();

    let config = GuideConfig {
        pam: matches.get_one::<String>("pam").unwrap().to_ascii_uppercase(),
        guide_length,
        mode,
        exclusions,
        quiet: matches.get_flag("quiet"),
        num_threads,
    };
    let quiet = config.quiet;

    let targets = load_targets(matches.get_one::<String>("target").unwrap())?;
    let genome_files: Vec<&String> = matches.get_many::<String>("genome").unwrap().collect();
    let background = load_genome_background(&genome_files)?;

    // Persist the exact background this run scores against
    write_reference_genome(matches.get_one::<String>("reference-out").unwrap(), &background)?;

    let finder = GuideFinder::with_config(config)?;
    let catalog = finder.build_catalog(&targets);

    let build_start = Instant::now();
    let engine = OffTargetCounter::build(background, finder.config.guide_length);
    if !quiet {
        eprintln!("Time model building: {:.2}", build_start.elapsed().as_secs_f64());
    }

    let run_start = Instant::now();
    let report = finder.score(&catalog, &targets, &engine)?;
    if !quiet {
        eprintln!("Time model calculation: {:.2}", run_start.elapsed().as_secs_f64());
    }

    let mut writer: Box<dyn Write> = if let Some(output_file) = matches.get_one::<String>("output")
    {
        Box::new(BufWriter::new(File::create(output_file)?))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };
    write_report(&mut writer, &report)?;

    if !quiet {
        eprintln!(
            "Guide discovery complete! Found {} candidates in {} regions.",
            catalog.values().map(|c| c.total()).sum::<usize>(),
            catalog.len()
        );
    }

    Ok(())
}
