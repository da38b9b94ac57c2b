//! diet - daily diet tracker CLI
//!
//! ```bash
//! # Create an identity; the session token is stored for later commands
//! diet user create --name Caio --email caio@example.com
//!
//! # Record a meal
//! diet meal create --name Janta --on-diet true --date 2024-06-25
//!
//! diet metrics --pretty
//! ```

use diet_cli::cli::Cli;
use diet_cli::commands::{Commands, MealCommands, UserCommands};
use diet_cli::{CliClientResult, Client, SessionStore};
use diet_config::Config;

use std::process::ExitCode;

use clap::Parser;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Explicit flags > config file > defaults
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: using default config ({})", e);
            Config::default()
        }
    };

    let store = match Config::session_file_path() {
        Ok(path) => SessionStore::new(path),
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let session = match cli.session.clone() {
        Some(token) => Some(token),
        None => match store.load() {
            Ok(token) => token,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        },
    };

    let server_url = cli
        .server
        .clone()
        .unwrap_or_else(|| format!("http://{}", config.bind_addr()));

    let client = Client::new(
        &server_url,
        session.as_deref(),
        &config.session.cookie_name,
    );

    let result = run(&client, &store, cli.command).await;

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &Client, store: &SessionStore, command: Commands) -> CliClientResult<Value> {
    match command {
        Commands::User { action } => match action {
            UserCommands::Create {
                name,
                email,
                img_url,
            } => {
                let created = client
                    .create_user(&name, &email, img_url.as_deref())
                    .await?;
                if let Some(token) = created.session_token.as_deref() {
                    store.save(token)?;
                }
                Ok(created.user)
            }
            UserCommands::List => client.list_users().await,
        },

        Commands::Meal { action } => match action {
            MealCommands::List => client.list_meals().await,
            MealCommands::Get { id } => client.get_meal(&id).await,
            MealCommands::Create { fields } => {
                client
                    .create_meal(
                        &fields.name,
                        &fields.description,
                        fields.is_on_diet,
                        &fields.date,
                    )
                    .await
            }
            MealCommands::Update { id, fields } => {
                client
                    .update_meal(
                        &id,
                        &fields.name,
                        &fields.description,
                        fields.is_on_diet,
                        &fields.date,
                    )
                    .await
            }
            MealCommands::Delete { id } => client.delete_meal(&id).await,
        },

        Commands::Metrics => client.metrics().await,
    }
}
