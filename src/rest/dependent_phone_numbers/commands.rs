//! Dependent phone number command handlers

use crate::cli::{Cli, Command, GetResource};
use crate::output::output_dependent_phone_numbers;
use crate::rest::helpers::{
    apply_filter, apply_paging, collect_with_progress, log_completion, report_partial,
};
use crate::rest::transport::Transport;
use crate::rest::TwilioClient;
use crate::ui::{clear_spinner, create_spinner, finish_spinner};

use super::options::ReadDependentPhoneNumberOptions;

/// Run the dependent phone number list command
pub async fn run_dependent_phone_number_command<T: Transport>(
    client: &TwilioClient<T>,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::DependentPhoneNumber(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let options = ReadDependentPhoneNumberOptions {
        path_account_sid: args.account.clone(),
        path_address_sid: args.address.clone(),
        page_size: args.paging.page_size,
        limit: args.paging.limit,
    };

    let spinner = create_spinner(
        &format!("Fetching phone numbers depending on address '{}'...", args.address),
        cli.batch,
    );
    let set = match client.read_dependent_phone_numbers(&options).await {
        Ok(set) => apply_paging(set, &args.paging),
        Err(e) => {
            clear_spinner(spinner);
            return Err(e.into());
        }
    };

    let (mut numbers, error) = collect_with_progress(set, &spinner).await;
    let had_errors = error.is_some();
    if let Some(e) = error {
        if numbers.is_empty() {
            clear_spinner(spinner);
            return Err(e.into());
        }
        report_partial(&spinner, "dependent phone numbers", &e);
    }
    finish_spinner(
        spinner,
        &format!("Found {} dependent phone numbers", numbers.len()),
    );

    apply_filter(&mut numbers, args.filter.as_deref());
    output_dependent_phone_numbers(&numbers, args.output, cli.no_header);

    log_completion(had_errors);
    Ok(())
}
