//! Recording API operations

use log::debug;

use crate::error::Result;
use crate::rest::client::TwilioClient;
use crate::rest::options::{Options, ReadOptions};
use crate::rest::path::{account_sid_or, render};
use crate::rest::request::{HttpMethod, Request};
use crate::rest::resource_set::{BlockingResourceSet, ResourceSet};
use crate::rest::traits::Resource;
use crate::rest::transport::{BlockingTransport, Transport};

use super::models::Recording;
use super::options::{DeleteRecordingOptions, FetchRecordingOptions, ReadRecordingOptions};

const LIST_PATH: &str = "/2010-04-01/Accounts/{AccountSid}/Recordings.json";
const INSTANCE_PATH: &str = "/2010-04-01/Accounts/{AccountSid}/Recordings/{Sid}.json";

fn instance_request(
    method: HttpMethod,
    account_sid: Option<&str>,
    sid: &str,
    ambient_account: &str,
) -> Result<Request> {
    let account = account_sid_or(account_sid, ambient_account);
    let path = render(INSTANCE_PATH, &[("AccountSid", account), ("Sid", sid)])?;
    Ok(Request::new(method, Recording::DOMAIN, path))
}

/// GET request for one recording
pub fn fetch_request(options: &FetchRecordingOptions, ambient_account: &str) -> Result<Request> {
    let request = instance_request(
        HttpMethod::Get,
        options.path_account_sid.as_deref(),
        &options.path_sid,
        ambient_account,
    )?;
    Ok(request.with_query_params(options.params()))
}

/// DELETE request for one recording
pub fn delete_request(options: &DeleteRecordingOptions, ambient_account: &str) -> Result<Request> {
    instance_request(
        HttpMethod::Delete,
        options.path_account_sid.as_deref(),
        &options.path_sid,
        ambient_account,
    )
}

/// Initial list request; filters and `PageSize` go in the query string
pub fn read_request(options: &ReadRecordingOptions, ambient_account: &str) -> Result<Request> {
    let account = account_sid_or(options.path_account_sid.as_deref(), ambient_account);
    let path = render(LIST_PATH, &[("AccountSid", account)])?;
    Ok(Request::new(HttpMethod::Get, Recording::DOMAIN, path).with_query_params(options.params()))
}

impl<T: Transport> TwilioClient<T> {
    pub async fn fetch_recording(&self, options: &FetchRecordingOptions) -> Result<Recording> {
        debug!("Fetching recording {}", options.path_sid);
        let request = fetch_request(options, self.account_sid())?;
        self.fetch(&request).await
    }

    /// Delete a recording; `true` when the server confirmed with 204
    pub async fn delete_recording(&self, options: &DeleteRecordingOptions) -> Result<bool> {
        debug!("Deleting recording {}", options.path_sid);
        let request = delete_request(options, self.account_sid())?;
        self.delete(&request).await
    }

    pub async fn read_recordings(
        &self,
        options: &ReadRecordingOptions,
    ) -> Result<ResourceSet<'_, Recording, T>> {
        let request = read_request(options, self.account_sid())?;
        self.read(request, options.page_options()).await
    }
}

impl<T: BlockingTransport> TwilioClient<T> {
    pub fn fetch_recording_blocking(&self, options: &FetchRecordingOptions) -> Result<Recording> {
        let request = fetch_request(options, self.account_sid())?;
        self.fetch_blocking(&request)
    }

    pub fn delete_recording_blocking(&self, options: &DeleteRecordingOptions) -> Result<bool> {
        let request = delete_request(options, self.account_sid())?;
        self.delete_blocking(&request)
    }

    pub fn read_recordings_blocking(
        &self,
        options: &ReadRecordingOptions,
    ) -> Result<BlockingResourceSet<'_, Recording, T>> {
        let request = read_request(options, self.account_sid())?;
        self.read_blocking(request, options.page_options())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::resource_set::PaginatorState;
    use crate::rest::serialize::parse_date_time;
    use crate::rest::transport::testing::ScriptedTransport;
    use crate::rest::transport::{Credentials, HttpTransport};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn recording_json(sid: &str) -> serde_json::Value {
        serde_json::json!({
            "sid": sid,
            "account_sid": "ACtest",
            "call_sid": "CA123",
            "status": "completed",
            "duration": "12",
            "date_created": "Mon, 15 Jan 2024 10:00:00 +0000"
        })
    }

    fn page_json(sids: &[&str], next: Option<String>) -> serde_json::Value {
        let records: Vec<_> = sids.iter().map(|s| recording_json(s)).collect();
        serde_json::json!({
            "recordings": records,
            "page": 0,
            "page_size": sids.len(),
            "next_page_uri": null,
            "meta": {
                "page_size": sids.len(),
                "next_page_url": next,
                "previous_page_url": null
            }
        })
    }

    #[test]
    fn test_explicit_account_overrides_ambient() {
        let options = FetchRecordingOptions::new("RE1").with_account_sid("ACother");
        let request = fetch_request(&options, "ACambient").unwrap();
        assert_eq!(
            request.path(),
            Some("/2010-04-01/Accounts/ACother/Recordings/RE1.json")
        );
        assert_eq!(request.method, HttpMethod::Get);
    }

    #[test]
    fn test_ambient_account_used_when_unset() {
        let request = read_request(&ReadRecordingOptions::new(), "ACambient").unwrap();
        assert_eq!(
            request.path(),
            Some("/2010-04-01/Accounts/ACambient/Recordings.json")
        );
        assert!(request.query_params.is_empty());
    }

    #[test]
    fn test_delete_request() {
        let request = delete_request(&DeleteRecordingOptions::new("RE9"), "AC1").unwrap();
        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(
            request.path(),
            Some("/2010-04-01/Accounts/AC1/Recordings/RE9.json")
        );
        assert!(request.body().is_none());
    }

    #[test]
    fn test_read_request_exact_date_only() {
        let options = ReadRecordingOptions::new()
            .with_date_created(parse_date_time("2024-01-15").unwrap())
            .with_date_created_after(parse_date_time("2024-01-01").unwrap())
            .with_page_size(20);
        let request = read_request(&options, "AC1").unwrap();
        assert_eq!(
            request.url("https://api.twilio.com"),
            "https://api.twilio.com/2010-04-01/Accounts/AC1/Recordings.json?DateCreated=2024-01-15T00%3A00%3A00&PageSize=20"
        );
    }

    #[tokio::test]
    async fn test_read_recordings_first_page() {
        let mock_server = MockServer::start().await;
        let sids: Vec<String> = (0..50).map(|i| format!("RE{:032}", i)).collect();
        let sid_refs: Vec<&str> = sids.iter().map(String::as_str).collect();
        let next = format!(
            "{}/2010-04-01/Accounts/ACtest/Recordings.json?PageSize=50&Page=1&PageToken=PA50",
            mock_server.uri()
        );

        Mock::given(method("GET"))
            .and(path("/2010-04-01/Accounts/ACtest/Recordings.json"))
            .and(query_param("PageSize", "50"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_json(&sid_refs, Some(next))))
            .mount(&mock_server)
            .await;

        let client = TwilioClient::test_client(
            HttpTransport::new(Credentials::new("ACtest", "token")),
            &mock_server.uri(),
        );
        let set = client
            .read_recordings(&ReadRecordingOptions::new().with_page_size(50))
            .await
            .unwrap();

        assert_eq!(set.state(), PaginatorState::HasPage);
        assert_eq!(set.buffered().count(), 50);
        assert!(set.has_next_page());
    }

    #[tokio::test]
    async fn test_fetch_recording_not_found() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/2010-04-01/Accounts/ACtest/Recordings/REmissing.json"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "code": 20404,
                "message": "not found",
                "more_info": "https://www.twilio.com/docs/errors/20404",
                "status": 404
            })))
            .mount(&mock_server)
            .await;

        let client = TwilioClient::test_client(
            HttpTransport::new(Credentials::new("ACtest", "token")),
            &mock_server.uri(),
        );
        let err = client
            .fetch_recording(&FetchRecordingOptions::new("REmissing"))
            .await
            .unwrap_err();

        assert_eq!(err.code(), Some(20404));
        assert_eq!(err.status(), Some(404));
        assert!(err.to_string().contains("not found"));
    }

    #[tokio::test]
    async fn test_delete_recording_no_content() {
        let transport = ScriptedTransport::new();
        transport.push(204, "");
        let client = TwilioClient::test_client(transport, "http://mock");

        assert!(client
            .delete_recording(&DeleteRecordingOptions::new("RE1"))
            .await
            .unwrap());
        let calls = client.transport().calls();
        assert_eq!(calls[0].request.method, HttpMethod::Delete);
        assert_eq!(
            calls[0].url,
            "http://mock/2010-04-01/Accounts/ACtest/Recordings/RE1.json"
        );
    }

    #[test]
    fn test_read_recordings_blocking_follows_cursor() {
        let transport = ScriptedTransport::new();
        transport
            .push_json(
                200,
                page_json(&["RE1", "RE2"], Some("http://mock/next?PageToken=PA2".to_string())),
            )
            .push_json(200, page_json(&["RE3"], None));
        let client = TwilioClient::test_client(transport, "http://mock");

        let sids: Vec<String> = client
            .read_recordings_blocking(&ReadRecordingOptions::new().with_call_sid("CA123"))
            .unwrap()
            .map(|r| r.unwrap().sid)
            .collect();

        assert_eq!(sids, vec!["RE1", "RE2", "RE3"]);
        let calls = client.transport().calls();
        assert_eq!(
            calls[0].url,
            "http://mock/2010-04-01/Accounts/ACtest/Recordings.json?CallSid=CA123"
        );
        assert_eq!(calls[1].url, "http://mock/next?PageToken=PA2");
    }

    #[test]
    fn test_fetch_recording_blocking() {
        let transport = ScriptedTransport::new();
        transport.push_json(200, recording_json("RE7"));
        let client = TwilioClient::test_client(transport, "http://mock");

        let recording = client
            .fetch_recording_blocking(&FetchRecordingOptions::new("RE7"))
            .unwrap();
        assert_eq!(recording.sid, "RE7");
        assert_eq!(recording.duration_secs(), Some(12));
    }
}
