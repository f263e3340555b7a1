//! Public key API operations

use log::debug;

use crate::error::Result;
use crate::rest::client::TwilioClient;
use crate::rest::options::{Options, ReadOptions};
use crate::rest::path::render;
use crate::rest::request::{HttpMethod, Request};
use crate::rest::resource_set::{BlockingResourceSet, ResourceSet};
use crate::rest::traits::Resource;
use crate::rest::transport::{BlockingTransport, Transport};

use super::models::PublicKey;
use super::options::{
    CreatePublicKeyOptions, DeletePublicKeyOptions, FetchPublicKeyOptions, ReadPublicKeyOptions,
    UpdatePublicKeyOptions,
};

const LIST_PATH: &str = "/v1/Credentials/PublicKeys";
const INSTANCE_PATH: &str = "/v1/Credentials/PublicKeys/{Sid}";

fn instance_path(sid: &str) -> Result<String> {
    render(INSTANCE_PATH, &[("Sid", sid)])
}

pub fn read_request(options: &ReadPublicKeyOptions) -> Request {
    Request::new(HttpMethod::Get, PublicKey::DOMAIN, LIST_PATH).with_query_params(options.params())
}

/// POST request; parameters are form-encoded in the body
pub fn create_request(options: &CreatePublicKeyOptions) -> Request {
    Request::new(HttpMethod::Post, PublicKey::DOMAIN, LIST_PATH).with_post_params(options.params())
}

pub fn fetch_request(options: &FetchPublicKeyOptions) -> Result<Request> {
    let path = instance_path(&options.path_sid)?;
    Ok(Request::new(HttpMethod::Get, PublicKey::DOMAIN, path).with_query_params(options.params()))
}

pub fn update_request(options: &UpdatePublicKeyOptions) -> Result<Request> {
    let path = instance_path(&options.path_sid)?;
    Ok(Request::new(HttpMethod::Post, PublicKey::DOMAIN, path).with_post_params(options.params()))
}

pub fn delete_request(options: &DeletePublicKeyOptions) -> Result<Request> {
    let path = instance_path(&options.path_sid)?;
    Ok(Request::new(HttpMethod::Delete, PublicKey::DOMAIN, path))
}

impl<T: Transport> TwilioClient<T> {
    pub async fn read_public_keys(
        &self,
        options: &ReadPublicKeyOptions,
    ) -> Result<ResourceSet<'_, PublicKey, T>> {
        self.read(read_request(options), options.page_options()).await
    }

    pub async fn create_public_key(&self, options: &CreatePublicKeyOptions) -> Result<PublicKey> {
        debug!("Creating public key {:?}", options.friendly_name);
        self.create(&create_request(options)).await
    }

    pub async fn fetch_public_key(&self, options: &FetchPublicKeyOptions) -> Result<PublicKey> {
        debug!("Fetching public key {}", options.path_sid);
        self.fetch(&fetch_request(options)?).await
    }

    pub async fn update_public_key(&self, options: &UpdatePublicKeyOptions) -> Result<PublicKey> {
        debug!("Updating public key {}", options.path_sid);
        self.update(&update_request(options)?).await
    }

    pub async fn delete_public_key(&self, options: &DeletePublicKeyOptions) -> Result<bool> {
        debug!("Deleting public key {}", options.path_sid);
        self.delete(&delete_request(options)?).await
    }
}

impl<T: BlockingTransport> TwilioClient<T> {
    pub fn read_public_keys_blocking(
        &self,
        options: &ReadPublicKeyOptions,
    ) -> Result<BlockingResourceSet<'_, PublicKey, T>> {
        self.read_blocking(read_request(options), options.page_options())
    }

    pub fn create_public_key_blocking(&self, options: &CreatePublicKeyOptions) -> Result<PublicKey> {
        self.create_blocking(&create_request(options))
    }

    pub fn fetch_public_key_blocking(&self, options: &FetchPublicKeyOptions) -> Result<PublicKey> {
        self.fetch_blocking(&fetch_request(options)?)
    }

    pub fn update_public_key_blocking(&self, options: &UpdatePublicKeyOptions) -> Result<PublicKey> {
        self.update_blocking(&update_request(options)?)
    }

    pub fn delete_public_key_blocking(&self, options: &DeletePublicKeyOptions) -> Result<bool> {
        self.delete_blocking(&delete_request(options)?)
    }
}
