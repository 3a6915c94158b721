//! patch-antenna: rectangular microstrip patch antenna design calculator
//!
//! One-shot calculation from command-line flags, or an interactive console
//! that keeps the input fields and the last report between commands.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

use patch_antenna::antenna::{AntennaError, Field, RawInputs, Session};
use patch_antenna::config::{self, Config};
use patch_antenna::console::Console;

/// Rectangular microstrip patch antenna design calculator.
///
/// Computes patch width and length, feedline width and an RF performance
/// estimate from the resonant frequency, substrate and match parameters.
#[derive(Parser, Debug)]
#[command(name = "patch-antenna")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, value_name = "CONFIG_FILE", global = true)]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Decrease logging verbosity (only show errors)
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Calculate one design and print the report
    Calculate(CalculateArgs),

    /// Start the interactive console
    Console,
}

/// Input fields for a one-shot calculation.
///
/// Values are taken as text and default to the configured inputs.
#[derive(ClapArgs, Debug)]
struct CalculateArgs {
    /// Resonant frequency in GHz
    #[arg(long, short = 'f', value_name = "GHZ")]
    frequency: Option<String>,

    /// Substrate dielectric constant (er)
    #[arg(long, short = 'e', value_name = "ER")]
    permittivity: Option<String>,

    /// Substrate height in mm
    #[arg(long, value_name = "MM")]
    height: Option<String>,

    /// Target feedline impedance in ohms
    #[arg(long, short = 'z', value_name = "OHM")]
    impedance: Option<String>,

    /// Reflection coefficient magnitude, between 0 and 1 exclusive
    #[arg(long, short = 'g', value_name = "GAMMA")]
    gamma: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Also write the text report to a file (default path from config)
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    export: Option<Option<PathBuf>>,
}

impl CalculateArgs {
    /// Overlays the flags given on the command line onto `inputs`.
    fn apply_to(&self, inputs: &mut RawInputs) {
        let overrides = [
            (Field::Frequency, &self.frequency),
            (Field::DielectricConstant, &self.permittivity),
            (Field::SubstrateHeight, &self.height),
            (Field::TargetImpedance, &self.impedance),
            (Field::ReflectionCoefficient, &self.gamma),
        ];
        for (field, value) in overrides {
            if let Some(value) = value {
                inputs.set(field, value.clone());
            }
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Fixed-layout text report
    Text,
    /// JSON calculation result (SI units)
    Json,
}

/// Determines the log level from CLI arguments.
#[allow(clippy::match_same_arms)] // Explicit "warn" arm for clarity
fn get_log_level(verbose: u8, quiet: bool, config_level: &str) -> Level {
    if quiet {
        return Level::ERROR;
    }

    match verbose {
        0 => match config_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::WARN, // Default to warn for unknown levels
        },
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialises the tracing subscriber for logging.
fn init_tracing(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Exit status for a failed one-shot calculation.
///
/// Rejected input values exit with 2; export and other failures exit with 1.
fn failure_status(e: &AntennaError) -> u8 {
    if e.is_invalid_input() {
        2
    } else {
        1
    }
}

/// Reports a calculation or export failure and returns the exit code.
fn fail(e: &AntennaError) -> ExitCode {
    if !e.is_invalid_input() {
        error!(error = %e, "Calculation failed");
    }
    eprintln!("{e}");
    ExitCode::from(failure_status(e))
}

/// Runs a one-shot calculation and prints the result.
fn run_calculate(cfg: Config, args: &CalculateArgs) -> ExitCode {
    let mut inputs = cfg.inputs;
    args.apply_to(&mut inputs);

    let mut session = Session::new(inputs, cfg.assumptions);
    let report_text = match session.calculate() {
        Ok(text) => text.to_string(),
        Err(e) => return fail(&e),
    };

    match args.format {
        OutputFormat::Text => print!("{report_text}"),
        OutputFormat::Json => {
            let Some(result) = session.result() else {
                return ExitCode::FAILURE;
            };
            match serde_json::to_string_pretty(result) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    error!(error = %e, "Failed to serialise calculation result");
                    return ExitCode::FAILURE;
                }
            }
        }
    }

    if let Some(path) = &args.export {
        let path = path.clone().unwrap_or(cfg.export.path);
        if let Err(e) = session.export(&path) {
            return fail(&e);
        }
        eprintln!("Exported to {}", path.display());
    }

    ExitCode::SUCCESS
}

/// Runs the interactive console until EOF, `quit` or a signal.
fn run_console(cfg: Config) -> ExitCode {
    let session = Session::new(cfg.inputs, cfg.assumptions);
    let mut console = Console::new(session, cfg.export.path);

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!(error = %e, "Failed to create Tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!("Console ready");

    match runtime.block_on(console.run()) {
        Ok(()) => {
            info!("Console closed");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Console error");
            ExitCode::FAILURE
        }
    }
}

/// Entry point for the patch-antenna calculator.
fn main() -> ExitCode {
    let args = Args::parse();

    // Load configuration
    let config_path = args.config.as_deref();
    let cfg = match config::load_config(config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            eprintln!("See config/example-config.json for the expected format");
            return ExitCode::FAILURE;
        }
    };

    // Initialise logging
    let log_level = get_log_level(args.verbose, args.quiet, &cfg.logging.level);
    init_tracing(log_level);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting patch-antenna"
    );

    match &args.command {
        Command::Calculate(calc) => run_calculate(cfg, calc),
        Command::Console => run_console(cfg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use patch_antenna::antenna::report;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn log_level_from_flags() {
        assert_eq!(get_log_level(0, true, "trace"), Level::ERROR);
        assert_eq!(get_log_level(0, false, "debug"), Level::DEBUG);
        assert_eq!(get_log_level(0, false, "bogus"), Level::WARN);
        assert_eq!(get_log_level(2, false, "error"), Level::DEBUG);
    }

    #[test]
    fn flags_override_config_inputs() {
        let args = Args::parse_from([
            "patch-antenna",
            "calculate",
            "--frequency",
            "5.8",
            "-g",
            "0.1",
        ]);
        let Command::Calculate(calc) = args.command else {
            panic!("Expected calculate");
        };

        let mut inputs = RawInputs::default();
        calc.apply_to(&mut inputs);
        assert_eq!(inputs.frequency_ghz, "5.8");
        assert_eq!(inputs.reflection_coefficient, "0.1");
        assert_eq!(inputs.dielectric_constant, "4.4");
        assert_eq!(calc.format, OutputFormat::Text);
        assert!(calc.export.is_none());
    }

    #[test]
    fn export_flag_with_and_without_path() {
        let args = Args::parse_from(["patch-antenna", "calculate", "--export"]);
        let Command::Calculate(calc) = args.command else {
            panic!("Expected calculate");
        };
        assert_eq!(calc.export, Some(None));

        let args = Args::parse_from(["patch-antenna", "calculate", "--export", "out.txt"]);
        let Command::Calculate(calc) = args.command else {
            panic!("Expected calculate");
        };
        assert_eq!(calc.export, Some(Some(PathBuf::from("out.txt"))));
    }

    #[test]
    fn invalid_input_has_its_own_exit_status() {
        let mut session = Session::default();
        session.set_field(Field::ReflectionCoefficient, "1.5");
        let err = session.calculate().unwrap_err();
        assert_eq!(failure_status(&err), 2);

        let err = session.export("antenna_output.txt").unwrap_err();
        assert!(matches!(err, AntennaError::NothingToExport));
        assert_eq!(failure_status(&err), 1);
    }

    #[test]
    fn default_export_path_matches_report_module() {
        assert_eq!(
            Config::default().export.path,
            PathBuf::from(report::DEFAULT_EXPORT_PATH)
        );
    }
}
