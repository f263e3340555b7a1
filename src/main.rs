//! twctl - Main entry point

use std::process::ExitCode;

use clap::Parser;
use log::{debug, error, info};

use twilio_rest::rest::{
    run_create_public_key_command, run_delete_public_key_command, run_delete_recording_command,
    run_dependent_phone_number_command, run_public_key_command, run_recording_command,
    run_update_public_key_command, HttpTransport,
};
use twilio_rest::{
    Cli, Command, CreateResource, CredentialResolver, DeleteResource, GetResource, TwilioClient,
    UpdateResource,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting twctl v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "Global args: profile={:?}, region={:?}, edge={:?}, batch={}",
        cli.profile, cli.region, cli.edge, cli.batch
    );

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let resolver = CredentialResolver::new(cli.profile.as_deref());
    let credentials = resolver.resolve(cli.account_sid.as_deref(), cli.auth_token.as_deref())?;
    debug!(
        "Using account {} (profile '{}')",
        credentials.username(),
        resolver.profile()
    );

    let account_sid = credentials.username().to_string();
    let mut client = TwilioClient::with_transport(HttpTransport::new(credentials), account_sid)
        .with_region(cli.region.clone())
        .with_edge(cli.edge.clone());
    if let Some(url) = &cli.base_url {
        client = client.with_base_url(url.trim_end_matches('/'));
    }

    dispatch(&client, cli).await
}

async fn dispatch(
    client: &TwilioClient<HttpTransport>,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    match &cli.command {
        Command::Get { resource } => match resource {
            GetResource::Recording(_) => run_recording_command(client, cli).await,
            GetResource::PublicKey(_) => run_public_key_command(client, cli).await,
            GetResource::DependentPhoneNumber(_) => {
                run_dependent_phone_number_command(client, cli).await
            }
        },
        Command::Create { resource } => match resource {
            CreateResource::PublicKey(_) => run_create_public_key_command(client, cli).await,
        },
        Command::Update { resource } => match resource {
            UpdateResource::PublicKey(_) => run_update_public_key_command(client, cli).await,
        },
        Command::Delete { resource } => match resource {
            DeleteResource::Recording(_) => run_delete_recording_command(client, cli).await,
            DeleteResource::PublicKey(_) => run_delete_public_key_command(client, cli).await,
        },
    }
}
