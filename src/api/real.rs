//! Production API client over a blocking HTTP transport

use crate::api::types::{
    Connection, Item, ItemUpdate, Location, LocationCreate, LocationUpdate, LoginRequest,
    LoginResponse, Tag, TagCreate,
};
use crate::api::InventoryApi;
use crate::error::HomeboxError;
use anyhow::{Context as _, Result};
use reqwest::blocking::{Client, Response};
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

/// Authenticated client for the inventory service
///
/// Construction performs the login call; every later request carries the
/// token returned by the server. The client holds no other state, so a
/// single instance is built per command invocation and passed down
/// explicitly.
#[derive(Debug)]
pub struct HomeboxClient {
    client: Client,
    base_url: String,
    token: String,
}

impl HomeboxClient {
    /// Log in against the remote service and return an authenticated client
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The base URL is not an http(s) URL (`HomeboxError::Configuration`)
    /// - The HTTP client cannot be built
    /// - The login request fails or is rejected (`HomeboxError::Auth`)
    /// - The login response cannot be decoded (`HomeboxError::Decode`)
    pub fn login(conn: &Connection) -> Result<Self> {
        let base_url = conn.base_url.trim_end_matches('/').to_owned();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(HomeboxError::configuration(format!(
                "invalid base URL '{}': expected an http:// or https:// URL",
                conn.base_url
            ))
            .into());
        }

        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;

        debug!("Logging in to {} as {}", base_url, conn.username);

        let res = client
            .post(format!("{base_url}/users/login"))
            .json(&LoginRequest {
                username: conn.username.clone(),
                password: conn.password.clone(),
            })
            .send()
            .with_context(|| format!("Failed to reach {base_url}"))?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().unwrap_or_default();
            return Err(HomeboxError::auth(format!(
                "login rejected for '{}' ({status}): {body}",
                conn.username
            ))
            .into());
        }

        let body: LoginResponse = res
            .json()
            .map_err(|e| HomeboxError::decode(format!("login response: {e}")))?;

        Ok(Self {
            client,
            base_url,
            token: body.token,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Map a non-success response to `HomeboxError::Api`
    fn check(res: Response) -> Result<Response> {
        let status = res.status();
        if status.is_success() {
            return Ok(res);
        }
        let body = res.text().unwrap_or_default();
        Err(HomeboxError::api(status.as_u16(), body).into())
    }

    fn decode<T: DeserializeOwned>(res: Response, what: &str) -> Result<T> {
        res.json()
            .map_err(|e| HomeboxError::decode(format!("{what}: {e}")).into())
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!("GET {}", path);
        let res = self
            .client
            .get(self.url(path))
            .header(AUTHORIZATION, self.token.as_str())
            .send()
            .with_context(|| format!("GET {path} failed"))?;
        Self::decode(Self::check(res)?, path)
    }

    fn post_json<T: DeserializeOwned>(&self, path: &str, body: &impl Serialize) -> Result<T> {
        debug!("POST {}", path);
        let res = self
            .client
            .post(self.url(path))
            .header(AUTHORIZATION, self.token.as_str())
            .json(body)
            .send()
            .with_context(|| format!("POST {path} failed"))?;
        Self::decode(Self::check(res)?, path)
    }

    fn put_json<T: DeserializeOwned>(&self, path: &str, body: &impl Serialize) -> Result<T> {
        debug!("PUT {}", path);
        let res = self
            .client
            .put(self.url(path))
            .header(AUTHORIZATION, self.token.as_str())
            .json(body)
            .send()
            .with_context(|| format!("PUT {path} failed"))?;
        Self::decode(Self::check(res)?, path)
    }
}

impl InventoryApi for HomeboxClient {
    fn locations(&self) -> Result<Vec<Location>> {
        self.get_json("/locations")
    }

    fn create_location(&self, req: &LocationCreate) -> Result<Location> {
        self.post_json("/locations", req)
    }

    fn update_location(&self, id: &str, req: &LocationUpdate) -> Result<Location> {
        self.put_json(&format!("/locations/{id}"), req)
    }

    fn tags(&self) -> Result<Vec<Tag>> {
        self.get_json("/tags")
    }

    fn create_tag(&self, req: &TagCreate) -> Result<Tag> {
        self.post_json("/tags", req)
    }

    fn items(&self) -> Result<Vec<Item>> {
        self.get_json("/items")
    }

    fn update_item(&self, id: &str, req: &ItemUpdate) -> Result<Item> {
        self.put_json(&format!("/items/{id}"), req)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_rejects_non_http_base_url() {
        let conn = Connection {
            base_url: "localhost:3100/api/v1".to_owned(),
            username: "user@example.com".to_owned(),
            password: "secret".to_owned(),
        };
        let err = HomeboxClient::login(&conn).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<HomeboxError>(),
            Some(HomeboxError::Configuration { .. })
        ));
    }
}
