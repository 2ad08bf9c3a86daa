use anyhow::{Context, Result, anyhow};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use twentyfour::report::{Report, SEPARATOR};
use twentyfour::solver::constants::TARGET;
use twentyfour::{Solver, SolverConfig, parse_operands};

const PROMPT: &str = "Enter 4 numbers (or 'quit' to exit): ";

const RULES: &str = "Rules:
- Enter 4 numbers (digits 1-9)
- Format: 1 2 3 4 or 1,2,3,4 or 1234
- The program will find all unique ways to make 24.
- Supports: +, -, *, /";

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Twentyfour - Find every distinct way to make 24 from four digits
#[derive(Parser, Debug)]
#[command(name = "twentyfour")]
#[command(about = "Find every distinct way to combine four digits with + - * / into 24")]
#[command(version)]
pub struct CliArgs {
    /// Four digits from 1 to 9, e.g. `1 2 3 4`, `1,2,3,4` or `1234`.
    /// Omit to start an interactive session.
    pub numbers: Vec<String>,

    /// Value the formulas must reach
    #[arg(short, long, default_value_t = TARGET)]
    pub target: f64,

    /// Search on the current thread only
    #[arg(long)]
    pub sequential: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    /// `None` runs the interactive session
    pub operands: Option<[f64; 4]>,
    pub solver: SolverConfig,
    pub log_level: LogLevel,
}

impl CliConfig {
    /// # Errors
    ///
    /// Returns an error when positional numbers are given but do not parse.
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let operands = if args.numbers.is_empty() {
            None
        } else {
            let joined = args.numbers.join(" ");
            Some(parse_operands(&joined).with_context(|| format!("Invalid numbers '{}'", joined))?)
        };

        Ok(Self {
            operands,
            solver: SolverConfig {
                target: args.target,
                parallel: !args.sequential,
            },
            log_level: args.log_level,
        })
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    CliConfig::from_args(CliArgs::parse())
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

pub fn is_quit_command(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case("quit")
}

/// Solve one request and render its report
fn search(solver: &Solver, operands: [f64; 4]) -> String {
    let solutions = solver.solve(operands);
    if solutions.is_empty() {
        warn!("No formula over {:?} reaches {}", operands, solver.config().target);
    }
    Report::new(operands, &solutions).to_string()
}

/// Prompt for operands until the user quits or input ends
fn interactive(solver: &Solver) -> Result<()> {
    println!("WELCOME TO THE 24 GAME SOLVER");
    println!("{}", SEPARATOR);
    println!("{}", RULES);
    println!("{}", SEPARATOR);

    let mut editor =
        DefaultEditor::new().map_err(|err| anyhow!("Failed to start line editor: {}", err))?;
    loop {
        println!();
        match editor.readline(PROMPT) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if let Err(err) = editor.add_history_entry(line) {
                    warn!("Failed to record history: {}", err);
                }
                if is_quit_command(line) {
                    break;
                }

                match parse_operands(line) {
                    Ok(operands) => {
                        println!();
                        print!("{}", search(solver, operands));
                        println!();
                        println!("{}", SEPARATOR);
                    }
                    Err(err) => {
                        warn!("Rejected input '{}': {}", line, err);
                        println!("Error: {}", err);
                    }
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(anyhow!("Failed to read input: {}", err)),
        }
    }

    println!("Thank you for playing!");
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let solver = Solver::new(config.solver);

    match config.operands {
        Some(operands) => {
            info!("Searching once for {:?}", operands);
            print!("{}", search(&solver, operands));
            Ok(())
        }
        None => {
            info!("Starting interactive session");
            interactive(&solver)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_from(argv: &[&str]) -> Option<CliConfig> {
        CliArgs::try_parse_from(argv.iter().copied())
            .ok()
            .and_then(|args| CliConfig::from_args(args).ok())
    }

    #[test]
    fn test_cli_args_defaults() {
        let config = config_from(&["twentyfour", "1", "2", "3", "4"]);
        assert!(config.is_some());
        if let Some(config) = config {
            assert_eq!(config.operands, Some([1.0, 2.0, 3.0, 4.0]));
            assert_eq!(config.solver.target, 24.0);
            assert!(config.solver.parallel);
            assert!(matches!(config.log_level, LogLevel::Warn));
        }
    }

    #[test]
    fn test_cli_args_compact_and_flags() {
        let config = config_from(&[
            "twentyfour",
            "--target",
            "10",
            "--sequential",
            "-l",
            "debug",
            "1234",
        ]);
        assert!(config.is_some());
        if let Some(config) = config {
            assert_eq!(config.operands, Some([1.0, 2.0, 3.0, 4.0]));
            assert_eq!(config.solver.target, 10.0);
            assert!(!config.solver.parallel);
            assert!(matches!(config.log_level, LogLevel::Debug));
        }
    }

    #[test]
    fn test_cli_args_without_numbers_is_interactive() {
        let config = config_from(&["twentyfour"]);
        assert!(config.is_some());
        if let Some(config) = config {
            assert_eq!(config.operands, None);
        }
    }

    #[test]
    fn test_cli_args_rejects_bad_numbers() {
        let args = CliArgs::try_parse_from(["twentyfour", "1", "2", "3"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert!(CliConfig::from_args(args).is_err());
        }
    }

    #[test]
    fn test_is_quit_command() {
        assert!(is_quit_command("quit"));
        assert!(is_quit_command("  QUIT "));
        assert!(!is_quit_command("quit now"));
        assert!(!is_quit_command("1234"));
    }

    #[test]
    fn test_search_renders_report() {
        let solver = Solver::default();
        let report = search(&solver, [1.0, 1.0, 1.0, 1.0]);
        assert!(report.contains("No solutions found for these numbers."));
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
