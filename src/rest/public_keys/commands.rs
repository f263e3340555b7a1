//! Public key command handlers

use std::fs;

use crate::cli::{Cli, Command, CreateResource, DeleteResource, GetResource, UpdateResource};
use crate::output::output_public_keys;
use crate::rest::helpers::{
    apply_filter, apply_paging, collect_with_progress, log_completion, report_partial,
};
use crate::rest::transport::Transport;
use crate::rest::TwilioClient;
use crate::ui::{batch_refusal, clear_spinner, confirm_action, create_spinner, finish_spinner};

use super::options::{
    CreatePublicKeyOptions, DeletePublicKeyOptions, FetchPublicKeyOptions, ReadPublicKeyOptions,
    UpdatePublicKeyOptions,
};

/// Key material from `--public-key`; `@path` reads the file at `path`
fn read_key_argument(value: &str) -> std::io::Result<String> {
    match value.strip_prefix('@') {
        Some(path) => Ok(fs::read_to_string(path)?.trim_end().to_string()),
        None => Ok(value.to_string()),
    }
}

/// Run the public key get/list command
pub async fn run_public_key_command<T: Transport>(
    client: &TwilioClient<T>,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::PublicKey(args),
    } = &cli.command
    else {
        unreachable!()
    };

    if let Some(sid) = &args.sid {
        let spinner = create_spinner(&format!("Fetching public key '{}'...", sid), cli.batch);
        let result = client.fetch_public_key(&FetchPublicKeyOptions::new(sid)).await;
        clear_spinner(spinner);
        output_public_keys(&[result?], args.output, cli.no_header);
        return Ok(());
    }

    let options = ReadPublicKeyOptions {
        page_size: args.paging.page_size,
        limit: args.paging.limit,
    };

    let spinner = create_spinner("Fetching public keys...", cli.batch);
    let set = match client.read_public_keys(&options).await {
        Ok(set) => apply_paging(set, &args.paging),
        Err(e) => {
            clear_spinner(spinner);
            return Err(e.into());
        }
    };

    let (mut keys, error) = collect_with_progress(set, &spinner).await;
    let had_errors = error.is_some();
    if let Some(e) = error {
        if keys.is_empty() {
            clear_spinner(spinner);
            return Err(e.into());
        }
        report_partial(&spinner, "public keys", &e);
    }
    finish_spinner(spinner, &format!("Found {} public keys", keys.len()));

    apply_filter(&mut keys, args.filter.as_deref());
    output_public_keys(&keys, args.output, cli.no_header);

    log_completion(had_errors);
    Ok(())
}

/// Run the public key create command
pub async fn run_create_public_key_command<T: Transport>(
    client: &TwilioClient<T>,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Create {
        resource: CreateResource::PublicKey(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let key = read_key_argument(&args.public_key)
        .map_err(|e| format!("Cannot read public key from '{}': {}", args.public_key, e))?;
    let options = CreatePublicKeyOptions {
        public_key: key,
        friendly_name: args.friendly_name.clone(),
        account_sid: args.target_account.clone(),
    };

    let spinner = create_spinner("Creating public key...", cli.batch);
    let result = client.create_public_key(&options).await;
    clear_spinner(spinner);
    output_public_keys(&[result?], args.output, cli.no_header);
    Ok(())
}

/// Run the public key update command
pub async fn run_update_public_key_command<T: Transport>(
    client: &TwilioClient<T>,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Update {
        resource: UpdateResource::PublicKey(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let mut options = UpdatePublicKeyOptions::new(&args.sid);
    options.friendly_name = args.friendly_name.clone();

    let spinner = create_spinner(&format!("Updating public key '{}'...", args.sid), cli.batch);
    let result = client.update_public_key(&options).await;
    clear_spinner(spinner);
    output_public_keys(&[result?], args.output, cli.no_header);
    Ok(())
}

/// Run the public key delete command
pub async fn run_delete_public_key_command<T: Transport>(
    client: &TwilioClient<T>,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Delete {
        resource: DeleteResource::PublicKey(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let action = format!("delete public key {}", args.sid);
    if cli.batch && !args.yes {
        return Err(batch_refusal(&action).into());
    }
    if !confirm_action(&format!("Really {}?", action), args.yes)? {
        println!("Aborted.");
        return Ok(());
    }

    if client
        .delete_public_key(&DeletePublicKeyOptions::new(&args.sid))
        .await?
    {
        println!("Deleted public key {}", args.sid);
    } else {
        eprintln!(
            "Public key {} was not confirmed deleted (server did not answer 204)",
            args.sid
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::transport::testing::ScriptedTransport;
    use clap::Parser;
    use std::io::Write;

    #[test]
    fn test_read_key_argument_literal() {
        assert_eq!(read_key_argument("KEYDATA").unwrap(), "KEYDATA");
    }

    #[test]
    fn test_read_key_argument_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "-----BEGIN PUBLIC KEY-----").unwrap();
        writeln!(file, "MIIB").unwrap();

        let arg = format!("@{}", file.path().display());
        assert_eq!(
            read_key_argument(&arg).unwrap(),
            "-----BEGIN PUBLIC KEY-----\nMIIB"
        );
    }

    #[test]
    fn test_read_key_argument_missing_file() {
        assert!(read_key_argument("@/nonexistent/key.pem").is_err());
    }

    #[tokio::test]
    async fn test_create_command_sends_key() {
        let transport = ScriptedTransport::new();
        transport.push_json(201, serde_json::json!({ "sid": "CR1", "friendly_name": "ci" }));
        let client = TwilioClient::test_client(transport, "http://mock");
        let cli = Cli::parse_from([
            "twctl",
            "--batch",
            "create",
            "pk",
            "--public-key",
            "KEY",
            "--friendly-name",
            "ci",
            "-o",
            "yaml",
        ]);

        run_create_public_key_command(&client, &cli).await.unwrap();
        let calls = client.transport().calls();
        assert_eq!(calls[0].url, "http://mock/v1/Credentials/PublicKeys");
        assert_eq!(
            calls[0].request.body().as_deref(),
            Some("PublicKey=KEY&FriendlyName=ci")
        );
    }

    #[tokio::test]
    async fn test_update_command() {
        let transport = ScriptedTransport::new();
        transport.push_json(200, serde_json::json!({ "sid": "CR1", "friendly_name": "new" }));
        let client = TwilioClient::test_client(transport, "http://mock");
        let cli = Cli::parse_from([
            "twctl",
            "--batch",
            "update",
            "pk",
            "CR1",
            "--friendly-name",
            "new",
        ]);

        run_update_public_key_command(&client, &cli).await.unwrap();
        let calls = client.transport().calls();
        assert_eq!(calls[0].url, "http://mock/v1/Credentials/PublicKeys/CR1");
        assert_eq!(calls[0].request.body().as_deref(), Some("FriendlyName=new"));
    }

    #[tokio::test]
    async fn test_delete_not_deleted_is_ok() {
        let transport = ScriptedTransport::new();
        transport.push(200, "");
        let client = TwilioClient::test_client(transport, "http://mock");
        let cli = Cli::parse_from(["twctl", "delete", "pk", "CR1", "--yes"]);

        run_delete_public_key_command(&client, &cli).await.unwrap();
        assert_eq!(client.transport().call_count(), 1);
    }
}
