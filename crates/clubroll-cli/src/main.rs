use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use clubroll_cli::samples::sample_payloads;
use clubroll_config::{GeofenceConfig, RegistrationRules};
use clubroll_core::geofence::format_coordinates;
use clubroll_core::{GeofenceChecker, validate_member};
use clubroll_core::validation::validate_registration_str;
use clubroll_models::registration_number::normalize;
use dialoguer::Input;
use dotenvy::dotenv;
use serde_json::{Map, Value};

#[derive(Parser)]
#[command(name = "clubroll-cli")]
#[command(about = "Clubroll CLI - check registration data and geofence settings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize and validate a registration number
    CheckReg {
        /// Registration number (prompted for if omitted)
        raw: Option<String>,
    },
    /// Validate a registration payload stored as a JSON object
    ValidateMember {
        /// Path to the JSON file
        #[arg(short = 'f', long)]
        file: PathBuf,
    },
    /// Check coordinates against the configured geofence
    CheckLocation {
        /// Latitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
    },
    /// Print fake, valid registration payloads as JSON lines
    SamplePayloads {
        /// Number of payloads to generate
        #[arg(short = 'n', long, default_value = "5")]
        count: usize,
    },
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();
    let rules = RegistrationRules::from_env();

    match cli.command {
        Commands::CheckReg { raw } => handle_check_reg(&rules, raw),
        Commands::ValidateMember { file } => handle_validate_member(&rules, &file),
        Commands::CheckLocation { lat, lon } => handle_check_location(lat, lon),
        Commands::SamplePayloads { count } => handle_sample_payloads(&rules, count),
    }
}

fn handle_check_reg(rules: &RegistrationRules, raw: Option<String>) -> anyhow::Result<()> {
    let raw = match raw {
        Some(raw) => raw,
        None => Input::<String>::new()
            .with_prompt("Registration number")
            .interact_text()
            .context("Failed to read registration number")?,
    };
    let raw = raw.trim();

    println!("   Normalized: {}", normalize(raw));
    match validate_registration_str(raw, rules) {
        Ok(reg_number) => {
            println!("✅ Valid registration number: {}", reg_number);
            if let (Some(track), Some(year), Some(sequence)) =
                (reg_number.track(), reg_number.year(), reg_number.sequence())
            {
                println!("   Track: {}  Year: {}  Sequence: {}", track, year, sequence);
            }
            Ok(())
        }
        Err(e) => bail!("❌ {}", e),
    }
}

fn handle_validate_member(rules: &RegistrationRules, file: &Path) -> anyhow::Result<()> {
    let contents = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let payload: Map<String, Value> = serde_json::from_str(&contents)
        .with_context(|| format!("{} does not contain a JSON object", file.display()))?;

    let outcome = validate_member(&payload, rules);
    println!(
        "{}",
        serde_json::to_string_pretty(&Value::Object(outcome.normalized.clone()))?
    );

    if outcome.is_valid() {
        println!("\n✅ Payload is valid");
        return Ok(());
    }

    eprintln!("\n❌ {} invalid field(s):", outcome.errors.len());
    for (field, error) in outcome.errors.iter() {
        eprintln!("   {:<14} {:?}: {}", field, error.kind, error.message);
    }
    std::process::exit(1);
}

fn handle_check_location(lat: f64, lon: f64) -> anyhow::Result<()> {
    let config = GeofenceConfig::from_env();
    let checker = GeofenceChecker::new(&config);

    println!(
        "   Reference: {} (radius {}m)",
        format_coordinates(&checker.reference()),
        checker.radius_meters()
    );

    let verdict = checker.check(lat, lon);
    if verdict.verified {
        println!("✅ {}", verdict.message);
        Ok(())
    } else {
        bail!("❌ {}", verdict.message)
    }
}

fn handle_sample_payloads(rules: &RegistrationRules, count: usize) -> anyhow::Result<()> {
    for payload in sample_payloads(rules, count) {
        println!("{}", serde_json::to_string(&Value::Object(payload))?);
    }
    Ok(())
}
