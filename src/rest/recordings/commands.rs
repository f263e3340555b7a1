//! Recording command handlers

use log::debug;

use crate::cli::{Cli, Command, DeleteResource, GetResource, RecordingArgs};
use crate::output::output_recordings;
use crate::rest::helpers::{
    apply_filter, apply_paging, collect_with_progress, log_completion, report_partial,
};
use crate::rest::transport::Transport;
use crate::rest::TwilioClient;
use crate::ui::{batch_refusal, clear_spinner, confirm_action, create_spinner, finish_spinner};

use super::options::{DeleteRecordingOptions, FetchRecordingOptions, ReadRecordingOptions};

/// Build list options from command line arguments
fn read_options(args: &RecordingArgs) -> ReadRecordingOptions {
    ReadRecordingOptions {
        path_account_sid: args.account.clone(),
        date_created_before: args.date_created_before,
        date_created: args.date_created,
        date_created_after: args.date_created_after,
        call_sid: args.call_sid.clone(),
        page_size: args.paging.page_size,
        limit: args.paging.limit,
    }
}

/// Run the recording get/list command
pub async fn run_recording_command<T: Transport>(
    client: &TwilioClient<T>,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::Recording(args),
    } = &cli.command
    else {
        unreachable!()
    };

    if let Some(sid) = &args.sid {
        let spinner = create_spinner(&format!("Fetching recording '{}'...", sid), cli.batch);
        let mut options = FetchRecordingOptions::new(sid);
        options.path_account_sid = args.account.clone();

        let result = client.fetch_recording(&options).await;
        clear_spinner(spinner);
        let recording = result?;
        output_recordings(&[recording], args.output, cli.no_header);
        return Ok(());
    }

    let options = read_options(args);
    debug!("Listing recordings with {:?}", options);

    let spinner = create_spinner("Fetching recordings...", cli.batch);
    let set = match client.read_recordings(&options).await {
        Ok(set) => apply_paging(set, &args.paging),
        Err(e) => {
            clear_spinner(spinner);
            return Err(e.into());
        }
    };

    let (mut recordings, error) = collect_with_progress(set, &spinner).await;
    let had_errors = error.is_some();
    if let Some(e) = error {
        if recordings.is_empty() {
            clear_spinner(spinner);
            return Err(e.into());
        }
        report_partial(&spinner, "recordings", &e);
    }
    finish_spinner(spinner, &format!("Found {} recordings", recordings.len()));

    apply_filter(&mut recordings, args.filter.as_deref());
    output_recordings(&recordings, args.output, cli.no_header);

    log_completion(had_errors);
    Ok(())
}

/// Run the recording delete command
pub async fn run_delete_recording_command<T: Transport>(
    client: &TwilioClient<T>,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Delete {
        resource: DeleteResource::Recording(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let action = format!("delete recording {}", args.sid);
    if cli.batch && !args.yes {
        return Err(batch_refusal(&action).into());
    }
    if !confirm_action(&format!("Really {}?", action), args.yes)? {
        println!("Aborted.");
        return Ok(());
    }

    let mut options = DeleteRecordingOptions::new(&args.sid);
    options.path_account_sid = args.account.clone();

    if client.delete_recording(&options).await? {
        println!("Deleted recording {}", args.sid);
    } else {
        eprintln!(
            "Recording {} was not confirmed deleted (server did not answer 204)",
            args.sid
        );
    }
    Ok(())
}
