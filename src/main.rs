//! ARM System Instruction Annotator CLI
//!
//! Command-line tool for annotating the system instructions of a JSON
//! disassembly listing.

use anyhow::{Context, Result};
use arm_sysinsn::formatter::{HumanFormatter, JsonFormatter, ReportFormatter};
use arm_sysinsn::{annotate_with_options, AnnotatorOptions, Listing};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

/// Annotate ARM and AArch64 system instructions.
///
/// Names the system registers, cache and TLB operations behind coprocessor,
/// MRS/MSR and SYS instructions, recovers the register fields written or
/// tested nearby, and summarizes where page tables, vector tables,
/// exception returns, system calls and crypto code live.
#[derive(Parser, Debug)]
#[command(name = "arm-sysinsn")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Listing to annotate (JSON)
    listing: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "human")]
    format: OutputFormat,

    /// Write the annotated listing here
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Do not set a highlight color on system instructions
    #[arg(long)]
    no_highlight: bool,

    /// Do not recover register fields from surrounding code
    #[arg(long)]
    no_fields: bool,

    /// Highlight color as RGB hex
    #[arg(long, default_value = "000000", value_parser = parse_color, env = "ARM_SYSINSN_COLOR")]
    color: u32,

    /// Maximum instructions a field walk may visit (0 = unbounded)
    #[arg(long, default_value = "256")]
    scan_limit: usize,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode (summary only)
    #[arg(short, long)]
    quiet: bool,
}

/// Output format options.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

fn parse_color(s: &str) -> Result<u32, String> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix('#'))
        .unwrap_or(s);
    u32::from_str_radix(digits, 16)
        .ok()
        .filter(|&color| color <= 0xFF_FFFF)
        .ok_or_else(|| format!("invalid RGB color: {}", s))
}

impl Args {
    fn options(&self) -> AnnotatorOptions {
        AnnotatorOptions {
            highlight_color: self.color,
            highlight: !self.no_highlight,
            track_fields: !self.no_fields,
            scan_limit: (self.scan_limit > 0).then_some(self.scan_limit),
        }
    }

    fn formatter(&self) -> Box<dyn ReportFormatter> {
        match self.format {
            OutputFormat::Human if self.quiet => Box::new(HumanFormatter::quiet()),
            OutputFormat::Human if self.verbose => Box::new(HumanFormatter::verbose()),
            OutputFormat::Human => Box::new(HumanFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = if args.verbose {
        "arm_sysinsn=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !args.quiet {
                eprintln!("Error: {:#}", e);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let mut listing = Listing::load(&args.listing)
        .with_context(|| format!("loading {}", args.listing.display()))?;
    let report = annotate_with_options(&mut listing, &args.options())
        .with_context(|| format!("annotating {}", args.listing.display()))?;

    print!("{}", args.formatter().format_report(&report, &args.listing));

    if let Some(output) = &args.output {
        listing
            .save(output)
            .with_context(|| format!("writing {}", output.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing() {
        let args = Args::try_parse_from(["arm-sysinsn", "fw.json"]).unwrap();
        assert_eq!(args.listing, PathBuf::from("fw.json"));
        assert!(!args.verbose);
        assert_eq!(args.options(), AnnotatorOptions::new());
    }

    #[test]
    fn test_format_options() {
        let args = Args::try_parse_from(["arm-sysinsn", "-f", "json", "fw.json"]).unwrap();
        assert!(matches!(args.format, OutputFormat::Json));
    }

    #[test]
    fn test_annotation_options() {
        let args = Args::try_parse_from([
            "arm-sysinsn",
            "--no-highlight",
            "--no-fields",
            "--color",
            "0x3a3a3a",
            "--scan-limit",
            "0",
            "fw.json",
        ])
        .unwrap();
        let options = args.options();
        assert!(!options.highlight);
        assert!(!options.track_fields);
        assert_eq!(options.highlight_color, 0x3A3A3A);
        assert_eq!(options.scan_limit, None);
    }

    #[test]
    fn test_color_parsing() {
        assert_eq!(parse_color("#ff0000"), Ok(0xFF0000));
        assert_eq!(parse_color("202020"), Ok(0x202020));
        assert!(parse_color("1000000").is_err());
        assert!(parse_color("black").is_err());
    }

    #[test]
    fn test_run_writes_annotated_listing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("fw.json");
        let output = dir.path().join("fw.annotated.json");
        std::fs::write(
            &input,
            r##"{ "processor": "ARM", "pointer_width": 32, "instructions": [
                { "address": 0, "mnemonic": "MRC",
                  "operands": ["0", "R0,c0,c0", "0"], "bytes": "100f10ee" } ] }"##,
        )
        .unwrap();

        let args = Args::try_parse_from([
            "arm-sysinsn",
            "-q",
            "-o",
            output.to_str().unwrap(),
            input.to_str().unwrap(),
        ])
        .unwrap();
        run(&args).unwrap();

        let annotated = Listing::load(&output).unwrap();
        assert_eq!(annotated.comment(0, 0), Some("[<] MIDR (Main ID Register)"));
    }

    #[test]
    fn test_run_reports_missing_file() {
        let args = Args::try_parse_from(["arm-sysinsn", "does-not-exist.json"]).unwrap();
        let err = run(&args).unwrap_err();
        assert!(format!("{:#}", err).contains("loading does-not-exist.json"));
    }
}
