//! `aura` — symptom risk assessment and cycle tracking from the terminal.

use std::path::PathBuf;

use aura_cli::commands::{self, AssessOptions};
use aura_cli::config::{self, AuraConfig, redact_phone};
use aura_cli::state::AppState;
use aura_core::models::locale::Locale;
use aura_core::models::profile::Role;
use clap::{Parser, Subcommand};
use eyre::Result;

#[derive(Parser)]
#[command(name = "aura")]
#[command(version)]
#[command(about = "Menstrual health risk assessment and cycle tracking", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Display language: en or hi
    #[arg(short, long, global = true)]
    lang: Option<Locale>,

    /// Data directory (defaults to config, then the platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List recognized symptoms and their weights
    Symptoms,

    /// Score a set of symptoms and classify the risk
    Assess {
        /// Symptom ids, e.g. heavy_bleeding fever
        symptoms: Vec<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Alert the ASHA worker if the result escalates
        #[arg(long)]
        alert: bool,

        /// Alert recipient phone number
        #[arg(long)]
        to: Option<String>,

        /// Save the result to the daily log
        #[arg(long)]
        log: bool,
    },

    /// Record today's entry in the cycle log
    Log {
        /// Mark today as a period day
        #[arg(long)]
        period: bool,

        /// Symptom ids experienced today
        #[arg(short, long = "symptom")]
        symptoms: Vec<String>,

        /// Free-form note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Predict the next period from the log
    Predict,

    /// Manage the user profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Community health worker tools
    Asha {
        #[command(subcommand)]
        action: AshaAction,
    },

    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Delete all stored data
    Clear {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Create or replace the profile
    Set {
        #[arg(long)]
        name: String,

        #[arg(long)]
        age: u8,

        /// woman or asha
        #[arg(long, default_value = "woman")]
        role: Role,

        #[arg(long)]
        asha_phone: Option<String>,
    },
    /// Show the saved profile
    Show,
}

#[derive(Subcommand)]
enum AshaAction {
    /// Assess a patient and add the result to today's records
    Record {
        #[arg(long)]
        village: String,

        symptoms: Vec<String>,
    },
    /// Show per-tier counts and recent records
    Summary,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the current config
    Show,
    /// Update config fields
    Set {
        #[arg(long)]
        language: Option<Locale>,

        #[arg(long)]
        asha_phone: Option<String>,

        #[arg(long)]
        data_dir: Option<PathBuf>,
    },
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run_config(action: ConfigAction, mut config: AuraConfig) -> Result<String> {
    match action {
        ConfigAction::Show => {
            let phone = config.asha_phone.as_deref().map(redact_phone);
            let data_dir = config
                .data_dir
                .as_ref()
                .map(|d| d.display().to_string())
                .unwrap_or_else(|| "(default)".to_string());
            Ok(format!(
                "path:       {}\nlanguage:   {}\nasha_phone: {}\ndata_dir:   {data_dir}",
                config::config_path()?.display(),
                config.language,
                phone.as_deref().unwrap_or("-"),
            ))
        }
        ConfigAction::Set {
            language,
            asha_phone,
            data_dir,
        } => {
            if let Some(language) = language {
                config.language = language;
            }
            if asha_phone.is_some() {
                config.asha_phone = asha_phone;
            }
            if data_dir.is_some() {
                config.data_dir = data_dir;
            }
            let path = config::save_config(&config)?;
            Ok(format!("Config saved to {}", path.display()))
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let config = config::load_config()?;
    let (lang, data_dir) = (cli.lang, cli.data_dir);
    let open = |config| AppState::open(config, lang, data_dir);

    let output = match cli.command {
        Commands::Symptoms => commands::list_symptoms(),
        Commands::Assess {
            symptoms,
            json,
            alert,
            to,
            log,
        } => commands::assess_symptoms(
            &open(config)?,
            &AssessOptions {
                symptoms,
                json,
                alert,
                to,
                log,
            },
        )?,
        Commands::Log {
            period,
            symptoms,
            note,
        } => commands::log_day(&open(config)?, period, &symptoms, note)?,
        Commands::Predict => commands::predict(&open(config)?)?,
        Commands::Profile { action } => {
            let state = open(config)?;
            match action {
                ProfileAction::Set {
                    name,
                    age,
                    role,
                    asha_phone,
                } => commands::set_profile(&state, name, age, role, asha_phone)?,
                ProfileAction::Show => commands::show_profile(&state)?,
            }
        }
        Commands::Asha { action } => {
            let state = open(config)?;
            match action {
                AshaAction::Record { village, symptoms } => {
                    commands::record_patient(&state, &village, &symptoms)?
                }
                AshaAction::Summary => commands::asha_summary(&state)?,
            }
        }
        Commands::Config { action } => run_config(action, config)?,
        Commands::Clear { yes } => {
            if !yes {
                return Err(eyre::eyre!("refusing to clear data without --yes"));
            }
            commands::clear(&open(config)?)?
        }
    };

    println!("{output}");
    Ok(())
}
