//! Dependent phone number API operations

use crate::error::Result;
use crate::rest::client::TwilioClient;
use crate::rest::options::{Options, ReadOptions};
use crate::rest::path::{account_sid_or, render};
use crate::rest::request::{HttpMethod, Request};
use crate::rest::resource_set::{BlockingResourceSet, ResourceSet};
use crate::rest::traits::Resource;
use crate::rest::transport::{BlockingTransport, Transport};

use super::models::DependentPhoneNumber;
use super::options::ReadDependentPhoneNumberOptions;

const LIST_PATH: &str =
    "/2010-04-01/Accounts/{AccountSid}/Addresses/{AddressSid}/DependentPhoneNumbers.json";

pub fn read_request(
    options: &ReadDependentPhoneNumberOptions,
    ambient_account: &str,
) -> Result<Request> {
    let account = account_sid_or(options.path_account_sid.as_deref(), ambient_account);
    let path = render(
        LIST_PATH,
        &[
            ("AccountSid", account),
            ("AddressSid", &options.path_address_sid),
        ],
    )?;
    Ok(Request::new(HttpMethod::Get, DependentPhoneNumber::DOMAIN, path)
        .with_query_params(options.params()))
}

impl<T: Transport> TwilioClient<T> {
    pub async fn read_dependent_phone_numbers(
        &self,
        options: &ReadDependentPhoneNumberOptions,
    ) -> Result<ResourceSet<'_, DependentPhoneNumber, T>> {
        let request = read_request(options, self.account_sid())?;
        self.read(request, options.page_options()).await
    }
}

impl<T: BlockingTransport> TwilioClient<T> {
    pub fn read_dependent_phone_numbers_blocking(
        &self,
        options: &ReadDependentPhoneNumberOptions,
    ) -> Result<BlockingResourceSet<'_, DependentPhoneNumber, T>> {
        let request = read_request(options, self.account_sid())?;
        self.read_blocking(request, options.page_options())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::resource_set::PaginatorState;
    use crate::rest::transport::testing::ScriptedTransport;

    fn number_json(sid: &str) -> serde_json::Value {
        serde_json::json!({ "sid": sid, "phone_number": "+15017122661" })
    }

    #[test]
    fn test_read_request_paths() {
        let options = ReadDependentPhoneNumberOptions::new("AD1").with_page_size(5);
        let request = read_request(&options, "ACambient").unwrap();
        assert_eq!(
            request.url("https://api.twilio.com"),
            "https://api.twilio.com/2010-04-01/Accounts/ACambient/Addresses/AD1/DependentPhoneNumbers.json?PageSize=5"
        );

        let request = read_request(&options.clone().with_account_sid("ACsub"), "ACambient").unwrap();
        assert_eq!(
            request.path(),
            Some("/2010-04-01/Accounts/ACsub/Addresses/AD1/DependentPhoneNumbers.json")
        );
    }

    #[tokio::test]
    async fn test_read_follows_relative_next_page_uri() {
        let transport = ScriptedTransport::new();
        transport
            .push_json(
                200,
                serde_json::json!({
                    "dependent_phone_numbers": [number_json("PN1")],
                    "page": 0,
                    "page_size": 1,
                    "next_page_uri": "/2010-04-01/Accounts/ACtest/Addresses/AD1/DependentPhoneNumbers.json?PageSize=1&Page=1&PageToken=PAPN1"
                }),
            )
            .push_json(
                200,
                serde_json::json!({
                    "dependent_phone_numbers": [number_json("PN2")],
                    "page": 1,
                    "page_size": 1,
                    "next_page_uri": null
                }),
            );
        let client = TwilioClient::test_client(transport, "http://mock");

        let mut set = client
            .read_dependent_phone_numbers(
                &ReadDependentPhoneNumberOptions::new("AD1").with_page_size(1),
            )
            .await
            .unwrap();

        assert_eq!(set.next().await.unwrap().unwrap().sid, "PN1");
        assert_eq!(set.next().await.unwrap().unwrap().sid, "PN2");
        assert!(set.next().await.is_none());
        assert_eq!(set.state(), PaginatorState::Exhausted);

        let calls = client.transport().calls();
        assert_eq!(
            calls[1].url,
            "http://mock/2010-04-01/Accounts/ACtest/Addresses/AD1/DependentPhoneNumbers.json?PageSize=1&Page=1&PageToken=PAPN1"
        );
    }

    #[test]
    fn test_read_blocking_empty_page() {
        let transport = ScriptedTransport::new();
        transport.push_json(
            200,
            serde_json::json!({ "dependent_phone_numbers": [], "next_page_uri": null }),
        );
        let client = TwilioClient::test_client(transport, "http://mock");

        let mut set = client
            .read_dependent_phone_numbers_blocking(&ReadDependentPhoneNumberOptions::new("AD1"))
            .unwrap();
        assert!(set.next().is_none());
        assert_eq!(set.state(), PaginatorState::Exhausted);
    }
}
