// Bed Redirect Advisor - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/bed-redirect-advisor --roster facilities.json
// ```
//
// Or on a generated roster:
//
// ```console
// $ ./target/release/bed-redirect-advisor --demo-facilities 80 --seed 7 --summary --verbose
// ```

use anyhow::{Context, Result};
use bed_redirect_advisor::advisor::{LoggingConfig, RedirectionPlanner};
use bed_redirect_advisor::facility::{FacilityRoster, RosterGenerator};
use bed_redirect_advisor::redirection::{install_compatibility_table, CompatibilityTable};
use bed_redirect_advisor::types::{AdvisorConfig, CliArgs, OutputFormat};
use clap::Parser;
use std::process;
use tracing::{error, info};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    if args.print_config {
        match AdvisorConfig::default().print_json() {
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

    let logging_result = if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        LoggingConfig::new().with_level(tracing::Level::WARN).init()
    };

    // Held for the lifetime of the process so buffered file logs get flushed
    let _log_guard = match logging_result {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(1);
        }
    };

    info!("Starting Bed Redirect Advisor");

    let show_summary = args.summary;
    let dry_run = args.dry_run;

    let config = match AdvisorConfig::from_cli_args(args) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        process::exit(1);
    }

    info!("Configuration loaded and validated successfully");

    if dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - no plans will be produced.");
        print_configuration_summary(&config);
        return;
    }

    if let Err(e) = run(config, show_summary) {
        error!("Advisor failed: {:#}", e);
        process::exit(1);
    }

    info!("Bed Redirect Advisor completed successfully");
}

/// Load the roster and table, then print the requested plans
fn run(config: AdvisorConfig, show_summary: bool) -> Result<()> {
    let format = config
        .get_output_format()
        .map_err(anyhow::Error::msg)?;

    let table = load_compatibility_table(&config)?;
    let roster = load_roster(&config)?;
    let planner = RedirectionPlanner::new(config.clone(), roster, table);

    if let Some(facility_id) = config.facility_id {
        let plan = planner.plan_for(facility_id)?;
        match format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&plan)?),
            OutputFormat::Text => print!("{}", plan.render_text()),
        }
        return Ok(());
    }

    match format {
        OutputFormat::Json => {
            let report = planner.report();
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            if show_summary {
                println!("{}", planner.summary().render_text());
            }

            let plans = planner.plans_by_district();
            if plans.is_empty() {
                println!("No overloaded facilities.");
            }

            for (district, district_plans) in &plans {
                println!("== {} ==", district);
                for plan in district_plans {
                    print!("{}", plan.render_text());
                }
                println!();
            }
        }
    }

    Ok(())
}

/// Load a custom compatibility table if configured and make it the process-wide one
fn load_compatibility_table(config: &AdvisorConfig) -> Result<CompatibilityTable> {
    let table = match &config.compatibility_table_path {
        Some(path) => CompatibilityTable::from_file(path)
            .with_context(|| format!("Failed to load compatibility table '{}'", path))?,
        None => CompatibilityTable::builtin(),
    };

    install_compatibility_table(table.clone())?;
    Ok(table)
}

/// Read the roster from disk or generate a demo one
fn load_roster(config: &AdvisorConfig) -> Result<FacilityRoster> {
    if config.uses_demo_roster() {
        let mut generator = match config.seed {
            Some(seed) => RosterGenerator::with_seed(seed),
            None => RosterGenerator::new(),
        };
        return Ok(generator.generate_roster(config.demo_facility_count));
    }

    let path = config
        .roster_path
        .as_deref()
        .context("No roster path configured")?;

    FacilityRoster::from_file(path).with_context(|| format!("Failed to load roster '{}'", path))
}

/// Print configuration summary
fn print_configuration_summary(config: &AdvisorConfig) {
    eprintln!("Configuration:");
    match (&config.roster_path, config.demo_facility_count) {
        (Some(path), _) => eprintln!("  Roster: {}", path),
        (None, count) => eprintln!("  Roster: generated, {} facilities", count),
    }
    eprintln!(
        "  Compatibility Table: {}",
        config.compatibility_table_path.as_deref().unwrap_or("built-in")
    );
    eprintln!("  Max Distance: {:.1} km", config.max_distance_km);
    eprintln!("  Limit: {}", config.limit);
    eprintln!("  Output Format: {}", config.output_format);
    if let Some(id) = config.facility_id {
        eprintln!("  Facility: {}", id);
    }
    if let Some(district) = &config.district {
        eprintln!("  District: {}", district);
    }
    if let Some(seed) = config.seed {
        eprintln!("  Random Seed: {}", seed);
    }
    eprintln!();
}
