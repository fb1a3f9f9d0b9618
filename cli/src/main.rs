//! Command-line host for the rental API client.
//!
//! Plays the role the browser app shells play: wires a file-backed token
//! store and a no-op navigator into the SDK and exposes its operations as
//! subcommands. Tokens persist between invocations in the token file, so
//! `rental login` followed by `rental me` behaves like a page reload with a
//! warm session.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use client::{
    ActorKind, ApiClient, AuthApi, AuthService, CarType, CarsApi, Config, FileTokenStore, NoopNavigator, Session,
    TokenStore,
};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Api(#[from] client::ApiError),
    #[error("{0} (expected sedan, suv, or truck)")]
    InvalidCarType(String),
    #[error("output encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "rental", about = "Car rental API client")]
struct Cli {
    #[arg(long, env = "RENTAL_BASE_URL", default_value = client::config::DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, env = "RENTAL_TOKEN_FILE", default_value = ".rental-tokens.json")]
    token_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and store the returned tokens.
    Login {
        username: String,
        password: String,
        #[arg(long)]
        admin: bool,
    },
    /// Create an account.
    Register {
        username: String,
        email: String,
        password: String,
    },
    /// Show the current identity from `/v1/auth/me`.
    Me {
        #[arg(long)]
        admin: bool,
    },
    /// Remote logout; local tokens are cleared regardless of the outcome.
    Logout {
        #[arg(long)]
        admin: bool,
    },
    /// Exchange the stored refresh token for a new pair.
    Refresh {
        #[arg(long)]
        admin: bool,
    },
    /// Browse the car catalog.
    Cars(CarsCommand),
}

#[derive(Args, Debug)]
struct CarsCommand {
    #[command(subcommand)]
    command: CarsSubcommand,
}

#[derive(Subcommand, Debug)]
enum CarsSubcommand {
    List,
    Get { id: i64 },
    Type { car_type: String },
    Name { name: String },
}

fn actor(admin: bool) -> ActorKind {
    if admin { ActorKind::Admin } else { ActorKind::User }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = Config::new(cli.base_url);
    let store: Arc<dyn TokenStore> = Arc::new(FileTokenStore::new(cli.token_file));
    let api = ApiClient::new(&config, Arc::clone(&store), Arc::new(NoopNavigator))?;

    match cli.command {
        Command::Login { username, password, admin } => {
            let auth = AuthService::new(api, Arc::clone(&store), actor(admin));
            let mut session = Session::new(auth, store, actor(admin));
            session.login(&username, &password).await?;
            print_json(&session.user())
        }
        Command::Register { username, email, password } => {
            let auth = AuthService::new(api, store, ActorKind::User);
            let email = auth.register(&username, &email, &password).await?;
            print_json(&serde_json::json!({ "registered": email }))
        }
        Command::Me { admin } => {
            let auth = AuthService::new(api, store, actor(admin));
            let user = auth.current_user().await?;
            print_json(&user)
        }
        Command::Logout { admin } => {
            let auth = AuthService::new(api, Arc::clone(&store), actor(admin));
            let mut session = Session::new(auth, store, actor(admin));
            session.logout().await;
            println!("logged out");
            Ok(())
        }
        Command::Refresh { admin } => {
            let auth = AuthService::new(api, store, actor(admin));
            auth.refresh().await?;
            println!("tokens refreshed");
            Ok(())
        }
        Command::Cars(cars) => {
            let cars_api = CarsApi::new(api);
            match cars.command {
                CarsSubcommand::List => print_json(&cars_api.list().await?),
                CarsSubcommand::Get { id } => print_json(&cars_api.get(id).await?),
                CarsSubcommand::Type { car_type } => {
                    let car_type: CarType = car_type.parse().map_err(CliError::InvalidCarType)?;
                    print_json(&cars_api.by_type(car_type).await?)
                }
                CarsSubcommand::Name { name } => print_json(&cars_api.by_name(&name).await?),
            }
        }
    }
}
