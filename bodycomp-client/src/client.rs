use std::sync::Arc;

use async_trait::async_trait;
use bodycomp_model::measurement::{ActivityLevel, Sex};
use serde::{Deserialize, Serialize};

use crate::session::SessionStore;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no session token available")]
    MissingToken,
    #[error("server unreachable")]
    CommunicationError,
    #[error("internal server error")]
    InternalServerError,
    #[error("invalid request")]
    RequestError,
    #[error("incorrect server response")]
    ResponseError,
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImcRequest {
    pub weight: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImcResponse {
    pub imc: f64,
    pub classification: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BmrRequest {
    pub weight: f64,
    pub height: f64,
    pub age: u32,
    pub sex: Sex,
    pub activity_level: ActivityLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmrResponse {
    pub bmr: f64,
}

#[mockall::automock]
#[async_trait]
pub trait Client: Send + Sync {
    async fn fetch_imc(&self, request: ImcRequest) -> Result<ImcResponse>;
    async fn fetch_bmr(&self, request: BmrRequest) -> Result<BmrResponse>;
}

pub struct ClientImpl {
    base_url: String,
    session: Arc<dyn SessionStore>,
    client: reqwest::Client,
}

impl ClientImpl {
    fn new(base_url: String, session: Arc<dyn SessionStore>) -> Self {
        Self {
            base_url,
            session,
            client: reqwest::Client::new(),
        }
    }

    fn token(&self) -> Result<String> {
        self.session.bearer_token().ok_or(Error::MissingToken)
    }
}

/// `base_url` is the API base without a trailing slash.
pub fn create(base_url: String, session: Arc<dyn SessionStore>) -> impl Client {
    ClientImpl::new(base_url, session)
}

#[async_trait]
impl Client for ClientImpl {
    async fn fetch_imc(&self, request: ImcRequest) -> Result<ImcResponse> {
        let token = self.token()?;
        self.client
            .post(format!("{}/calculations/imc", self.base_url))
            .bearer_auth(token)
            .json(&request)
            .send()
            .await
            .map_err(|_| Error::CommunicationError)
            .and_then(|resp| {
                if resp.status().is_client_error() {
                    Err(Error::RequestError)
                } else if resp.status().is_server_error() {
                    Err(Error::InternalServerError)
                } else {
                    Ok(resp)
                }
            })?
            .json()
            .await
            .map_err(|_| Error::ResponseError)
    }

    async fn fetch_bmr(&self, request: BmrRequest) -> Result<BmrResponse> {
        let token = self.token()?;
        self.client
            .post(format!("{}/calculations/bmr", self.base_url))
            .bearer_auth(token)
            .json(&request)
            .send()
            .await
            .map_err(|_| Error::CommunicationError)
            .and_then(|resp| {
                if resp.status().is_client_error() {
                    Err(Error::RequestError)
                } else if resp.status().is_server_error() {
                    Err(Error::InternalServerError)
                } else {
                    Ok(resp)
                }
            })?
            .json()
            .await
            .map_err(|_| Error::ResponseError)
    }
}
