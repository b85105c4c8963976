use super::{Created, UserStore};
use crate::error::{DeskError, Result};
use crate::model::{User, UserData};
use serde::Deserialize;

/// Resource path under the base URL.
const RESOURCE: &str = "users";

/// A REST-backed store.
///
/// Success and failure are judged by HTTP status alone; a 2xx on update or
/// delete is taken at face value even though mock backends only simulate
/// the mutation. The client is built without a timeout, so a hung call
/// blocks the panel until the connection dies.
pub struct RemoteStore {
    base: String,
    client: reqwest::blocking::Client,
}

/// Create responses only need to carry the id; mock backends may omit even
/// that.
#[derive(Debug, Deserialize)]
struct CreateReply {
    #[serde(default)]
    id: Option<u64>,
}

impl RemoteStore {
    pub fn new(base: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("userdesk/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }

        Ok(Self { base, client })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn resource_url(&self) -> String {
        format!("{}/{}", self.base, RESOURCE)
    }

    fn record_url(&self, id: u64) -> String {
        format!("{}/{}/{}", self.base, RESOURCE, id)
    }

    fn check_status(resp: &reqwest::blocking::Response) -> Result<()> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(DeskError::Status(status.as_u16()))
        }
    }
}

impl UserStore for RemoteStore {
    fn create(&mut self, data: &UserData) -> Result<Created> {
        let resp = self.client.post(self.resource_url()).json(data).send()?;
        Self::check_status(&resp)?;
        let reply: CreateReply = resp.json()?;
        Ok(Created { id: reply.id })
    }

    fn read(&self, id: u64) -> Result<Option<User>> {
        let resp = self.client.get(self.record_url(id)).send()?;
        Self::check_status(&resp)?;
        Ok(Some(resp.json()?))
    }

    fn update(&mut self, id: u64, data: &UserData) -> Result<Option<User>> {
        let resp = self.client.put(self.record_url(id)).json(data).send()?;
        Self::check_status(&resp)?;
        // The response body is the new authoritative record.
        Ok(Some(resp.json()?))
    }

    fn delete(&mut self, id: u64) -> Result<bool> {
        let resp = self.client.delete(self.record_url(id)).send()?;
        Self::check_status(&resp)?;
        Ok(true)
    }

    fn list(&self) -> Result<Vec<User>> {
        Err(DeskError::Store(
            "the remote backend does not support listing".to_string(),
        ))
    }

    fn supports_listing(&self) -> bool {
        false
    }
}
