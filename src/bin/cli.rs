//! RecidiVision CLI
//!
//! Terminal client for the prediction service:
//! - Log in and out (token kept in a session file)
//! - Register an account
//! - Submit a case for prediction
//! - Check session and service status

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use recidivision::client::{ApiClient, RecidivismApi};
use recidivision::config::{generate_default_config, Config};
use recidivision::dto::Credentials;
use recidivision::form::FieldName;
use recidivision::login::LoginForm;
use recidivision::logging;
use recidivision::prediction::PredictionPanel;
use recidivision::report::PredictionResult;
use recidivision::session::{FileTokenStore, Route, RouteDecision, Session};
use recidivision::workflow::{submit_login, submit_prediction};

#[derive(Parser)]
#[command(name = "recidivision")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Recidivism-risk prediction client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL (overrides configuration)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: standard locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in and store the session token
    Login {
        #[arg(short, long)]
        username: String,
        /// Password (default: $RECIDIVISION_PASSWORD)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Create an account
    Register {
        #[arg(short, long)]
        username: String,
        /// Password (default: $RECIDIVISION_PASSWORD)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Forget the stored session token
    Logout,

    /// Show session and service status
    Status,

    /// Submit a case for prediction
    Predict {
        /// M or F
        #[arg(long)]
        gender: String,
        /// BLACK or WHITE
        #[arg(long)]
        race: String,
        /// 18-80
        #[arg(long)]
        age_at_release: String,
        /// "Less Than High School Diploma", "High School Diploma" or "At Least Some College"
        #[arg(long)]
        education_level: String,
        /// 1-10
        #[arg(long)]
        supervision_risk_score_first: String,
        /// 1-25
        #[arg(long)]
        residence_puma: String,
        /// 0-8, fractions allowed
        #[arg(long)]
        jobs_per_year: String,
        /// Print the explanation lines
        #[arg(short, long)]
        explain: bool,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default()?,
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }

    logging::init(&config.logging, "");

    let store = FileTokenStore::new(config.session.token_path());
    let mut session = Session::restore(store);
    let client = ApiClient::new(&config.api)?.with_token(session.token());

    match cli.command {
        Commands::Login { username, password } => {
            let mut form = LoginForm::new();
            form.set_username(username.clone());
            form.set_password(password_or_env(password)?);

            let route = submit_login(&client, &mut session, &mut form)
                .await
                .context("Failed to save session token")?;

            if route == Route::Login {
                eprintln!("{}", form.error().unwrap_or("Login failed"));
                std::process::exit(1);
            }

            match cli.format {
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::json!({ "authenticated": true, "username": username })
                ),
                OutputFormat::Table => println!("Logged in as {}", username),
            }
        }

        Commands::Register { username, password } => {
            let credentials = Credentials::new(username, password_or_env(password)?);

            match client.register(&credentials).await {
                Ok(response) => match cli.format {
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
                    OutputFormat::Table => println!("{}", response.message),
                },
                Err(e) => {
                    eprintln!("Registration failed: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Logout => {
            session.logout().context("Failed to remove session token")?;
            println!("Logged out");
        }

        Commands::Status => {
            let stored = session.store().load();
            let health = client.health().await;

            match cli.format {
                OutputFormat::Json => {
                    let status = serde_json::json!({
                        "authenticated": session.is_authenticated(),
                        "predict_route": session.resolve(Route::Predict.path()).target().path(),
                        "token_file": session.store().path(),
                        "saved_at": stored.as_ref().map(|s| s.saved_at),
                        "api_url": client.base_url(),
                        "api_reachable": health.is_ok(),
                    });
                    println!("{}", serde_json::to_string_pretty(&status)?);
                }
                OutputFormat::Table => {
                    println!("RecidiVision v{}", env!("CARGO_PKG_VERSION"));
                    println!();
                    println!(
                        "Session: {}",
                        if session.is_authenticated() {
                            "logged in"
                        } else {
                            "logged out"
                        }
                    );
                    if let Some(stored) = &stored {
                        println!("  Token saved: {}", stored.saved_at.format("%Y-%m-%d %H:%M:%S UTC"));
                    }
                    println!("  Token file: {}", session.store().path().display());
                    println!(
                        "  /predict routes to: {}",
                        session.resolve(Route::Predict.path()).target()
                    );
                    println!();
                    match health {
                        Ok(h) => println!(
                            "API: {} ({}, v{}, up {}s)",
                            client.base_url(),
                            h.status,
                            h.version,
                            h.uptime_seconds
                        ),
                        Err(e) => println!("API: {} unreachable ({})", client.base_url(), e),
                    }
                }
            }
        }

        Commands::Predict {
            gender,
            race,
            age_at_release,
            education_level,
            supervision_risk_score_first,
            residence_puma,
            jobs_per_year,
            explain,
        } => {
            if let RouteDecision::Redirect(Route::Login) = session.resolve(Route::Predict.path()) {
                eprintln!("Not logged in. Run `recidivision login` first.");
                std::process::exit(1);
            }

            let mut panel = PredictionPanel::new();
            for (field, value) in [
                (FieldName::Gender, gender),
                (FieldName::Race, race),
                (FieldName::AgeAtRelease, age_at_release),
                (FieldName::EducationLevel, education_level),
                (FieldName::SupervisionRiskScoreFirst, supervision_risk_score_first),
                (FieldName::ResidencePuma, residence_puma),
                (FieldName::JobsPerYear, jobs_per_year),
            ] {
                panel.edit(field, value);
            }

            if !panel.form.is_valid() {
                for (field, error) in panel.form.errors() {
                    eprintln!("--{}: {}", field.as_str().replace('_', "-"), error);
                }
                for field in panel.form.missing() {
                    eprintln!("--{}: {} is required.", field.as_str().replace('_', "-"), field.label());
                }
                std::process::exit(1);
            }

            submit_prediction(&client, &mut panel).await;

            if let Some(message) = panel.error() {
                eprintln!("{}", message);
                std::process::exit(1);
            }

            if let Some(result) = panel.result() {
                match cli.format {
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
                    OutputFormat::Table => print_result(result, explain),
                }
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn password_or_env(password: Option<String>) -> anyhow::Result<String> {
    password
        .or_else(|| std::env::var("RECIDIVISION_PASSWORD").ok())
        .context("No password given (use --password or RECIDIVISION_PASSWORD)")
}

fn print_result(result: &PredictionResult, explain: bool) {
    println!("{}", result.headline());

    if let Some(chart) = result.chart() {
        println!();
        println!("{:<16} {}", "Class", chart.title);
        println!("{}", "-".repeat(28));
        for bar in &chart.bars {
            println!("{:<16} {:.4}", bar.label, bar.value);
        }
    }

    if explain {
        println!();
        println!("Explanation:");
        for line in result.explanation_lines() {
            println!("  - {}", line);
        }
    }
}
