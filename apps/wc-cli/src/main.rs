use clap::{Parser, Subcommand};
use indexmap::IndexMap;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use wc_batch::{BatchResult, CheckKind, CheckOutcome, RunOptions, load_path, run_batch, summarize};
use wc_core::units::constants::NOMINAL_SINGLE_PHASE_V;
use wc_report::generate_calculation_report;
use wc_validate::{
    DEFAULT_ACCURACY_TOLERANCE, ReferenceMethod, ValidationResult, try_monitor_calculation_accuracy,
};

#[derive(Parser)]
#[command(name = "wc-cli")]
#[command(about = "wirecheck - BS 7671 calculator input validation", long_about = None)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    /// Print the full text report for each check
    #[arg(long, global = true, conflicts_with = "json")]
    report: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a cable sizing calculation
    #[command(allow_negative_numbers = true)]
    Cable {
        /// Design current (A)
        current: f64,
        /// Conductor size (mm²)
        cable_size: f64,
        /// pvc, xlpe, swa or lsf
        installation_type: String,
        /// Calculated voltage drop (V)
        voltage_drop: f64,
        /// Run length (m)
        length: f64,
        /// Nominal supply voltage (V)
        #[arg(long, default_value_t = NOMINAL_SINGLE_PHASE_V)]
        nominal_voltage: f64,
        /// Installation reference method, A1 through G
        #[arg(long, default_value_t = ReferenceMethod::C)]
        reference_method: ReferenceMethod,
    },
    /// Check a power factor calculation
    #[command(allow_negative_numbers = true)]
    PowerFactor {
        /// Active power (W)
        active_power: f64,
        /// Apparent power (VA)
        apparent_power: f64,
        /// Calculated power factor
        power_factor: f64,
    },
    /// Check a prospective fault current calculation
    #[command(allow_negative_numbers = true)]
    Pfc {
        /// Supply voltage (V)
        voltage: f64,
        /// Loop impedance (Ω)
        impedance: f64,
        /// Calculated PFC (A)
        pfc: f64,
        /// Protective device breaking capacity (A)
        #[arg(long)]
        breaking_capacity: Option<f64>,
    },
    /// Check a single input against its plausible range
    #[command(allow_negative_numbers = true)]
    Range {
        value: f64,
        /// current, voltage, length, powerFactor, resistance or frequency
        input_type: String,
    },
    /// Check an Ohm's law calculation
    #[command(allow_negative_numbers = true)]
    Ohms {
        /// Quantity solved for: voltage, current or resistance
        calculation_type: String,
        #[arg(long, default_value_t = 0.0)]
        voltage: f64,
        #[arg(long, default_value_t = 0.0)]
        current: f64,
        #[arg(long, default_value_t = 0.0)]
        resistance: f64,
    },
    /// Check a measured earth fault loop impedance (Type B MCB)
    #[command(allow_negative_numbers = true)]
    Zs {
        /// Device rating (A)
        rating: u32,
        /// Measured Zs (Ω)
        measured: f64,
    },
    /// Check a voltage drop against its circuit category limit
    #[command(allow_negative_numbers = true)]
    VoltageDrop {
        /// Voltage drop (V)
        voltage_drop: f64,
        /// lighting, power or motor
        category: String,
        /// Nominal supply voltage (V)
        #[arg(long, default_value_t = NOMINAL_SINGLE_PHASE_V)]
        nominal_voltage: f64,
    },
    /// Compare a computed value against a reference
    #[command(allow_negative_numbers = true)]
    Accuracy {
        expected: f64,
        actual: f64,
        /// Relative tolerance
        #[arg(long, default_value_t = DEFAULT_ACCURACY_TOLERANCE)]
        tolerance: f64,
    },
    /// Run every check in a YAML or JSON batch file
    Batch {
        /// Path to the batch file
        path: PathBuf,
    },
}

#[derive(Clone, Copy)]
enum Output {
    Text,
    Json,
    Report,
}

fn main() -> BatchResult<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output = if cli.json {
        Output::Json
    } else if cli.report {
        Output::Report
    } else {
        Output::Text
    };

    let kind = match cli.command {
        Commands::Batch { path } => return cmd_batch(&path, output),
        Commands::Accuracy {
            expected,
            actual,
            tolerance,
        } => return cmd_accuracy(expected, actual, tolerance, output),
        Commands::Cable {
            current,
            cable_size,
            installation_type,
            voltage_drop,
            length,
            nominal_voltage,
            reference_method,
        } => CheckKind::CableSizing {
            current_a: current,
            cable_size_mm2: cable_size,
            installation_type,
            voltage_drop_v: voltage_drop,
            length_m: length,
            nominal_voltage_v: Some(nominal_voltage),
            reference_method: Some(reference_method),
        },
        Commands::PowerFactor {
            active_power,
            apparent_power,
            power_factor,
        } => CheckKind::PowerFactor {
            active_power_w: active_power,
            apparent_power_va: apparent_power,
            power_factor,
        },
        Commands::Pfc {
            voltage,
            impedance,
            pfc,
            breaking_capacity,
        } => CheckKind::Pfc {
            voltage_v: voltage,
            impedance_ohm: impedance,
            pfc_a: pfc,
            breaking_capacity_a: breaking_capacity,
        },
        Commands::Range { value, input_type } => CheckKind::InputRange { value, input_type },
        Commands::Ohms {
            calculation_type,
            voltage,
            current,
            resistance,
        } => CheckKind::OhmsLaw {
            voltage_v: voltage,
            current_a: current,
            resistance_ohm: resistance,
            calculation_type,
        },
        Commands::Zs { rating, measured } => CheckKind::EarthFaultLoop {
            device_rating_a: rating,
            measured_zs_ohm: measured,
        },
        Commands::VoltageDrop {
            voltage_drop,
            category,
            nominal_voltage,
        } => CheckKind::VoltageDrop {
            voltage_drop_v: voltage_drop,
            nominal_voltage_v: nominal_voltage,
            category,
        },
    };

    cmd_single(&kind, output)
}

fn cmd_single(kind: &CheckKind, output: Output) -> BatchResult<ExitCode> {
    let result = kind.run();
    tracing::debug!(check = kind.name(), valid = result.is_valid(), "single check");
    match output {
        Output::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        Output::Report => {
            let mut results = IndexMap::new();
            results.insert("valid", result.is_valid().to_string());
            print!(
                "{}",
                generate_calculation_report(kind.name(), &kind.report_inputs(), &results, &result)
            );
        }
        Output::Text => print_result(kind.name(), &result),
    }
    Ok(exit_code(result.is_valid()))
}

fn cmd_batch(path: &Path, output: Output) -> BatchResult<ExitCode> {
    let batch = load_path(path)?;
    tracing::debug!(version = batch.version, "running batch");
    let outcomes = run_batch(
        &batch,
        RunOptions {
            with_reports: matches!(output, Output::Report),
        },
    );
    let summary = summarize(&outcomes);

    match output {
        Output::Json => println!("{}", serde_json::to_string_pretty(&outcomes)?),
        Output::Report => {
            for report in outcomes.iter().filter_map(|o| o.report.as_deref()) {
                println!("{report}");
            }
        }
        Output::Text => {
            println!("Batch: {}", path.display());
            for CheckOutcome { id, result, .. } in &outcomes {
                print_result(id, result);
            }
            println!(
                "\n{} checks: {} valid, {} invalid, {} with warnings",
                summary.total, summary.valid, summary.invalid, summary.with_warnings
            );
        }
    }

    Ok(exit_code(summary.invalid == 0))
}

fn cmd_accuracy(expected: f64, actual: f64, tolerance: f64, output: Output) -> BatchResult<ExitCode> {
    let within = match try_monitor_calculation_accuracy(expected, actual, tolerance) {
        Ok(within) => within,
        Err(e) => {
            eprintln!("Error: {e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    match output {
        Output::Json => println!(
            "{}",
            serde_json::json!({
                "expected": expected,
                "actual": actual,
                "tolerance": tolerance,
                "withinTolerance": within,
            })
        ),
        Output::Text | Output::Report => {
            if within {
                println!("✓ {actual} is within {tolerance} of {expected}");
            } else {
                println!("✗ {actual} is outside {tolerance} of {expected}");
            }
        }
    }
    Ok(exit_code(within))
}

fn print_result(label: &str, result: &ValidationResult) {
    let mark = if result.is_valid() { "✓" } else { "✗" };
    let flags = result.standards_compliance();
    println!(
        "{mark} {label} (BS 7671: {}, IET: {}, safety: {})",
        yes_no(flags.bs7671),
        yes_no(flags.iet),
        yes_no(flags.safety)
    );
    for error in result.errors() {
        println!("  error: {error}");
    }
    for warning in result.warnings() {
        println!("  warning: {warning}");
    }
}

fn yes_no(ok: bool) -> &'static str {
    if ok { "pass" } else { "fail" }
}

fn exit_code(ok: bool) -> ExitCode {
    if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
