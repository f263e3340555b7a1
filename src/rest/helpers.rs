//! Helpers shared by the list command handlers

use indicatif::ProgressBar;
use log::debug;

use crate::cli::PagingArgs;
use crate::error::TwilioError;
use crate::rest::resource_set::ResourceSet;
use crate::rest::traits::Resource;
use crate::rest::transport::Transport;
use crate::ui::update_spinner;

/// Drain a resource set, updating the spinner every page
///
/// Returns the records gathered before the first error, plus that error.
/// An error mid-way ends the sequence but keeps earlier records.
pub async fn collect_with_progress<R: Resource, T: Transport>(
    mut set: ResourceSet<'_, R, T>,
    spinner: &Option<ProgressBar>,
) -> (Vec<R>, Option<TwilioError>) {
    let mut records = Vec::new();
    let mut pages = set.pages_fetched();

    while let Some(item) = set.next().await {
        match item {
            Ok(record) => records.push(record),
            Err(e) => {
                debug!("Stopped listing {} after {} records: {}", R::NAME, records.len(), e);
                return (records, Some(e));
            }
        }
        if set.pages_fetched() != pages {
            pages = set.pages_fetched();
            update_spinner(
                spinner,
                format!(
                    "Fetching {}s... {} so far (page {})",
                    R::NAME,
                    records.len(),
                    pages
                ),
            );
        }
    }

    debug!("Listed {} {}s over {} page(s)", records.len(), R::NAME, pages);
    (records, None)
}

/// Keep only records matching `filter` (substring on SID and name fields)
pub fn apply_filter<R: Resource>(records: &mut Vec<R>, filter: Option<&str>) {
    if let Some(filter) = filter {
        records.retain(|r| r.matches_filter(filter));
    }
}

/// Apply `--first-page-only` to a freshly read set
pub fn apply_paging<'c, R, T>(set: ResourceSet<'c, R, T>, paging: &PagingArgs) -> ResourceSet<'c, R, T> {
    if paging.first_page_only {
        set.auto_paging(false)
    } else {
        set
    }
}

/// Report an error that cut a listing short, respecting an active spinner
pub fn report_partial(spinner: &Option<ProgressBar>, noun: &str, error: &TwilioError) {
    let msg = format!("Error fetching {}:\n  {}\n", noun, error);
    if let Some(s) = spinner {
        s.suspend(|| eprintln!("{}", msg));
    } else {
        eprintln!("{}", msg);
    }
}

/// Log completion status to info log
pub fn log_completion(had_errors: bool) {
    if had_errors {
        log::info!("Completed with some errors");
    } else {
        log::info!("Completed successfully");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::client::TwilioClient;
    use crate::rest::options::PageOptions;
    use crate::rest::request::{Domain, HttpMethod, Request};
    use crate::rest::transport::testing::ScriptedTransport;
    use serde::Deserialize;

    #[derive(Deserialize, Debug)]
    struct Item {
        sid: String,
        name: Option<String>,
    }

    impl Resource for Item {
        const NAME: &'static str = "item";
        const RECORDS_KEY: &'static str = "items";
        const DOMAIN: Domain = Domain::Api;

        fn sid(&self) -> &str {
            &self.sid
        }

        fn display_name(&self) -> &str {
            self.name.as_deref().unwrap_or(&self.sid)
        }
    }

    fn two_pages() -> ScriptedTransport {
        let transport = ScriptedTransport::new();
        transport
            .push_json(
                200,
                serde_json::json!({
                    "items": [{ "sid": "IT1", "name": "alpha" }, { "sid": "IT2", "name": "beta" }],
                    "next_page_uri": "/Items?Page=1"
                }),
            )
            .push_json(
                200,
                serde_json::json!({
                    "items": [{ "sid": "IT3", "name": "alphabet" }],
                    "next_page_uri": null
                }),
            );
        transport
    }

    fn list_request() -> Request {
        Request::new(HttpMethod::Get, Domain::Api, "/Items")
    }

    #[tokio::test]
    async fn test_collect_with_progress_all_pages() {
        let client = TwilioClient::test_client(two_pages(), "http://mock");
        let set = client
            .read::<Item>(list_request(), PageOptions::default())
            .await
            .unwrap();

        let (mut records, error) = collect_with_progress(set, &None).await;
        assert!(error.is_none());
        assert_eq!(records.len(), 3);

        apply_filter(&mut records, Some("alpha"));
        let sids: Vec<_> = records.iter().map(|r| r.sid.as_str()).collect();
        assert_eq!(sids, vec!["IT1", "IT3"]);
    }

    #[tokio::test]
    async fn test_first_page_only() {
        let client = TwilioClient::test_client(two_pages(), "http://mock");
        let set = client
            .read::<Item>(list_request(), PageOptions::default())
            .await
            .unwrap();
        let paging = PagingArgs {
            first_page_only: true,
            ..PagingArgs::default()
        };

        let (records, error) = collect_with_progress(apply_paging(set, &paging), &None).await;
        assert!(error.is_none());
        assert_eq!(records.len(), 2);
        assert_eq!(client.transport().call_count(), 1);
    }

    #[tokio::test]
    async fn test_partial_results_on_error() {
        let transport = ScriptedTransport::new();
        transport
            .push_json(
                200,
                serde_json::json!({ "items": [{ "sid": "IT1" }], "next_page_uri": "/Items?Page=1" }),
            )
            .push_json(500, serde_json::json!({ "code": 20500, "message": "boom", "status": 500 }));
        let client = TwilioClient::test_client(transport, "http://mock");
        let set = client
            .read::<Item>(list_request(), PageOptions::default())
            .await
            .unwrap();

        let (records, error) = collect_with_progress(set, &None).await;
        assert_eq!(records.len(), 1);
        assert_eq!(error.unwrap().code(), Some(20500));
    }

    #[test]
    fn test_apply_filter_none_keeps_all() {
        let mut records = vec![Item {
            sid: "IT1".to_string(),
            name: None,
        }];
        apply_filter(&mut records, None);
        assert_eq!(records.len(), 1);
    }
}
