use colored::Colorize;
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{Result, UserdumpError};
use crate::types::User;

pub struct UserClient {
    http: Client,
    base_url: Url,
    monitor: bool,
}

impl UserClient {
    pub fn new(base_url: &str, monitor: bool) -> Result<Self> {
        let mut base_url = Url::parse(base_url)?;

        // Url::join replaces the last path segment unless the base path
        // ends with a slash.
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        Ok(Self {
            http: Client::new(),
            base_url,
            monitor,
        })
    }

    /// Fetch the remote user collection, preserving response order.
    pub async fn get_users(&self) -> Result<Vec<User>> {
        self.get("users").await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.base_url.join(path)?;

        if self.monitor {
            eprintln!("{}", format!("GET {url}").bright_black());
        }

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if self.monitor {
            eprintln!("{}", format!("HTTP {status}").bright_black());
            eprintln!("{}", body.bright_black());
        }

        if !status.is_success() {
            return Err(UserdumpError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
