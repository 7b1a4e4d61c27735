//! Command-line argument parsing.
//!
//! Hand-rolled rather than a derive-based parser, matching the style the
//! pack's own CLI-driving binaries use for a small, fixed flag set.

use std::path::PathBuf;

/// Logging verbosity requested on the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

pub struct CliArgs {
    pub payload_file: PathBuf,
    pub log_output: PathBuf,
    pub detail_report: PathBuf,
    pub summary_report: PathBuf,
    pub network: Option<PathBuf>,
    pub fleet: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub verbosity: Verbosity,
}

pub fn print_usage() {
    eprintln!("agvsim — AGV fleet dispatch scheduler");
    eprintln!();
    eprintln!(
        "Usage: agvsim <payload_file> <log_output> <detail_report> <summary_report> [OPTIONS]"
    );
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --network <path>   Station/edge network file (default: built-in 9-station grid)");
    eprintln!("  --fleet <path>     AGV roster CSV (default: built-in 3-AGV fleet)");
    eprintln!("  --config <path>    SimulationConfig TOML override");
    eprintln!("  -v                 Verbose logging");
    eprintln!("  -vv                Very verbose logging");
    eprintln!("  --quiet            Suppress all but warnings and errors");
    eprintln!("  --help, -h         Show this help message");
}

pub fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        std::process::exit(0);
    }

    let mut positionals = Vec::new();
    let mut network = None;
    let mut fleet = None;
    let mut config = None;
    let mut verbosity = Verbosity::Normal;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--network" => {
                i += 1;
                network = Some(PathBuf::from(next_value(args, i, "--network")?));
            }
            "--fleet" => {
                i += 1;
                fleet = Some(PathBuf::from(next_value(args, i, "--fleet")?));
            }
            "--config" => {
                i += 1;
                config = Some(PathBuf::from(next_value(args, i, "--config")?));
            }
            "-v" => verbosity = Verbosity::Verbose,
            "-vv" => verbosity = Verbosity::VeryVerbose,
            "--quiet" => verbosity = Verbosity::Quiet,
            other if other.starts_with('-') => {
                return Err(format!("unknown flag: {other}"));
            }
            other => positionals.push(other.to_string()),
        }
        i += 1;
    }

    if positionals.len() != 4 {
        return Err(format!(
            "expected 4 positional arguments (payload_file, log_output, detail_report, summary_report), got {}",
            positionals.len()
        ));
    }

    Ok(CliArgs {
        payload_file: PathBuf::from(&positionals[0]),
        log_output: PathBuf::from(&positionals[1]),
        detail_report: PathBuf::from(&positionals[2]),
        summary_report: PathBuf::from(&positionals[3]),
        network,
        fleet,
        config,
        verbosity,
    })
}

fn next_value<'a>(args: &'a [String], index: usize, flag: &str) -> Result<&'a str, String> {
    args.get(index).map(String::as_str).ok_or_else(|| format!("missing value for {flag}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &[&str]) -> Vec<String> {
        s.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_four_positionals() {
        let parsed = parse_args(&args(&["payloads.csv", "log.txt", "detail.txt", "summary.txt"])).unwrap();
        assert_eq!(parsed.payload_file, PathBuf::from("payloads.csv"));
        assert_eq!(parsed.summary_report, PathBuf::from("summary.txt"));
        assert_eq!(parsed.verbosity, Verbosity::Normal);
    }

    #[test]
    fn parses_optional_flags() {
        let parsed = parse_args(&args(&[
            "payloads.csv",
            "log.txt",
            "detail.txt",
            "summary.txt",
            "--network",
            "net.csv",
            "--fleet",
            "fleet.csv",
            "-vv",
        ]))
        .unwrap();
        assert_eq!(parsed.network, Some(PathBuf::from("net.csv")));
        assert_eq!(parsed.fleet, Some(PathBuf::from("fleet.csv")));
        assert_eq!(parsed.verbosity, Verbosity::VeryVerbose);
    }

    #[test]
    fn rejects_wrong_positional_count() {
        let err = parse_args(&args(&["only_one.csv"])).unwrap_err();
        assert!(err.contains("expected 4 positional arguments"));
    }

    #[test]
    fn rejects_unknown_flag() {
        let err = parse_args(&args(&["a", "b", "c", "d", "--bogus"])).unwrap_err();
        assert!(err.contains("unknown flag"));
    }

    #[test]
    fn rejects_missing_flag_value() {
        let err = parse_args(&args(&["a", "b", "c", "d", "--network"])).unwrap_err();
        assert!(err.contains("missing value"));
    }
}
