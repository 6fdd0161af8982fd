// Building Security Simulator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/building-security-simulator
// ```
//
// Or with custom configuration:
//
// ```console
// $ ./target/release/building-security-simulator --floors 5 --ticks 10 --seed 42 --verbose
// ```

use anyhow::Context;
use building_security_simulator::events::FileEventSink;
use building_security_simulator::simulation::{
    LoggingConfig, RandomReadingSource, SimulationError, SimulationOrchestrator,
    SimulationStatistics,
};
use building_security_simulator::types::config::CliArgs;
use building_security_simulator::types::SimulationConfig;
use clap::Parser;
use std::process;
use tracing::{error, info};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        let default_config = SimulationConfig::default();
        match default_config.print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Initialize logging based on CLI flags; the guard flushes file output on exit
    let _logging_guard = match LoggingConfig::from_flags(args.verbose, args.debug).init() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(1);
        }
    };

    info!("Starting Building Security Simulator");

    // Load configuration from CLI arguments and optional config file
    let mut config = match SimulationConfig::from_cli_args(args.clone()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // A building record replaces name, floors and area before validation
    if let Err(e) = SimulationOrchestrator::load_building_record(&mut config) {
        error!(category = e.category(), "Failed to load building record: {}", e);
        process::exit(1);
    }

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        process::exit(1);
    }

    info!("Configuration loaded and validated successfully");

    // Handle dry run mode
    if args.dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - simulation will not be executed.");
        print_configuration_summary(&config);
        return;
    }

    print_startup_banner(&config);

    if let Err(e) = run_simulation(config) {
        let category =
            e.downcast_ref::<SimulationError>().map(SimulationError::category).unwrap_or("Runtime");
        error!(category, "Simulation failed: {:#}", e);
        process::exit(1);
    }

    info!("Building Security Simulator completed successfully");
}

/// Build the building, run the session and report
fn run_simulation(config: SimulationConfig) -> anyhow::Result<()> {
    let format = config
        .get_output_format()
        .map_err(anyhow::Error::msg)
        .context("Invalid output format")?;

    eprintln!("Generating building...");
    let mut orchestrator = SimulationOrchestrator::new(config.clone())
        .context("Failed to create orchestrator")?;
    eprintln!("{}", orchestrator.building());

    let mut source = RandomReadingSource::from_optional_seed(config.seed)
        .with_movement_probability(config.movement_probability);
    let mut sink = FileEventSink::new(&config.event_log, format);

    eprintln!("Running {} tick(s)...", config.ticks);
    orchestrator.run_session(&mut source, &mut sink).context("Simulation run failed")?;

    if let Some(path) = &config.save_record {
        orchestrator
            .save_record(path)
            .with_context(|| format!("Failed to save building record to '{}'", path))?;
        eprintln!("Building record written to: {}", path);
    }

    let failures = sink.write_failures();
    let statistics = orchestrator.get_statistics_mut();
    statistics.set_sink_write_failures(failures);
    print_final_statistics(statistics);

    eprintln!("Check '{}' for logs of triggered events.", sink.path().display());
    Ok(())
}

/// Print startup banner and configuration summary
fn print_startup_banner(config: &SimulationConfig) {
    eprintln!("Building Security Simulator");
    eprintln!("===========================");
    eprintln!("Per-room sensor and actuator simulation");
    eprintln!();

    print_configuration_summary(config);
}

/// Print configuration summary
fn print_configuration_summary(config: &SimulationConfig) {
    eprintln!("Configuration:");
    eprintln!("  Building: {}", config.building_name);
    eprintln!("  Floors: {}", config.floors);
    if let Some(area) = config.building_area {
        eprintln!("  Area: {} m^2", area);
    }
    eprintln!(
        "  Rooms per Floor: {} - {}",
        config.min_rooms_per_floor, config.max_rooms_per_floor
    );
    eprintln!(
        "  Room Dimensions: {} - {} m",
        config.min_room_dimension, config.max_room_dimension
    );
    match config.temperature_threshold_high {
        Some(high) => eprintln!("  Temperature Thresholds: T1={}, T2={}", config.temperature_threshold, high),
        None => eprintln!("  Temperature Threshold: T1={}", config.temperature_threshold),
    }
    eprintln!("  Light Threshold: {}", config.light_threshold);
    eprintln!("  Movement Probability: {:.1}%", config.movement_probability * 100.0);
    eprintln!("  Ticks: {}", config.ticks);
    eprintln!("  Event Log: {} ({})", config.event_log, config.output_format);
    if let Some(path) = &config.building_record {
        eprintln!("  Building Record: {}", path);
    }
    if let Some(fire) = &config.fire {
        eprintln!("  Fire: floor {}, room {}, {}", fire.floor, fire.room, fire.severity);
    }
    if let Some(seed) = config.seed {
        eprintln!("  Random Seed: {}", seed);
    }
    eprintln!();
}

/// Print final statistics
fn print_final_statistics(statistics: &SimulationStatistics) {
    eprintln!();
    eprintln!("{}", statistics.generate_summary_report());
    eprintln!("Summary: {}", statistics.compact_summary());
}
