mod client;
mod session;

pub use client::{
    create, BmrRequest, BmrResponse, Client, ClientImpl, Error, ImcRequest, ImcResponse,
    MockClient,
};
pub use session::{MockSessionStore, SessionState, SessionStore};
