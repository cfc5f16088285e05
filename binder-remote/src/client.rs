use std::collections::BTreeSet;

use binder_catalog::{CardId, CollectionStore, Plan, PlanStore, StoreError};
use reqwest::StatusCode;
use reqwest::blocking::{Client, Request, RequestBuilder};
use serde::{Deserialize, Serialize};

use crate::credentials::Credentials;
use crate::error::RemoteError;

const COLLECTION_TABLE: &str = "collections";
const PLANS_TABLE: &str = "plans";

#[derive(Debug, Deserialize)]
struct OwnedRow {
    card_id: String,
}

#[derive(Debug, Serialize)]
struct OwnedInsert<'a> {
    user_id: &'a str,
    card_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct PlanRow {
    plan: Plan,
}

#[derive(Debug, Serialize)]
struct PlanUpsert<'a> {
    user_id: &'a str,
    plan: Plan,
}

/// Blocking client for a PostgREST-style table API.
///
/// Ownership lives in `collections(user_id, card_id)` with a primary key on
/// both columns; plans in `plans(user_id, plan)`.
pub struct RemoteStore {
    http: Client,
    creds: Credentials,
}

impl RemoteStore {
    pub fn new(creds: Credentials) -> Result<Self, RemoteError> {
        let http = Client::builder().timeout(creds.timeout).build()?;
        Ok(Self { http, creds })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.creds.base_url)
    }

    fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.creds.api_key)
            .bearer_auth(&self.creds.api_key)
    }

    pub(crate) fn list_owned_request(&self, user: &str) -> Result<Request, RemoteError> {
        let builder = self
            .http
            .get(self.table_url(COLLECTION_TABLE))
            .query(&[("user_id", format!("eq.{user}")), ("select", "card_id".to_string())]);
        Ok(self.authed(builder).build()?)
    }

    pub(crate) fn upsert_owned_request(
        &self,
        user: &str,
        card: &CardId,
    ) -> Result<Request, RemoteError> {
        let builder = self
            .http
            .post(self.table_url(COLLECTION_TABLE))
            .header("Prefer", "resolution=merge-duplicates")
            .json(&OwnedInsert {
                user_id: user,
                card_id: card.as_str(),
            });
        Ok(self.authed(builder).build()?)
    }

    pub(crate) fn delete_owned_request(
        &self,
        user: &str,
        card: &CardId,
    ) -> Result<Request, RemoteError> {
        let builder = self
            .http
            .delete(self.table_url(COLLECTION_TABLE))
            .query(&[
                ("user_id", format!("eq.{user}")),
                ("card_id", format!("eq.{card}")),
            ]);
        Ok(self.authed(builder).build()?)
    }

    pub(crate) fn get_plan_request(&self, user: &str) -> Result<Request, RemoteError> {
        let builder = self
            .http
            .get(self.table_url(PLANS_TABLE))
            .query(&[("user_id", format!("eq.{user}")), ("select", "plan".to_string())]);
        Ok(self.authed(builder).build()?)
    }

    /// `ignore_existing` creates the record only if missing; otherwise the
    /// stored plan is overwritten.
    pub(crate) fn upsert_plan_request(
        &self,
        user: &str,
        plan: Plan,
        ignore_existing: bool,
    ) -> Result<Request, RemoteError> {
        let resolution = if ignore_existing {
            "resolution=ignore-duplicates"
        } else {
            "resolution=merge-duplicates"
        };
        let builder = self
            .http
            .post(self.table_url(PLANS_TABLE))
            .header("Prefer", resolution)
            .json(&PlanUpsert { user_id: user, plan });
        Ok(self.authed(builder).build()?)
    }

    /// The client timeout covers the body read as well as the send.
    fn map_send_err(&self, e: reqwest::Error) -> RemoteError {
        if e.is_timeout() {
            RemoteError::Timeout(self.creds.timeout.as_secs())
        } else {
            RemoteError::Http(e)
        }
    }

    /// Send a request and return the response body, mapping HTTP failures.
    fn execute(&self, request: Request) -> Result<String, RemoteError> {
        let method = request.method().clone();
        let url = request.url().path().to_string();
        log::debug!("{method} {url}");

        let resp = self
            .http
            .execute(request)
            .map_err(|e| self.map_send_err(e))?;

        let status = resp.status();
        let text = resp.text().map_err(|e| self.map_send_err(e))?;

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(RemoteError::InvalidCredentials(
                "Remote store rejected the api key".to_string(),
            ));
        }
        if status.is_client_error() {
            return Err(RemoteError::Rejected {
                status: status.as_u16(),
                message: truncate(&text),
            });
        }
        if !status.is_success() {
            return Err(RemoteError::ServerError {
                status: status.as_u16(),
                message: truncate(&text),
            });
        }

        Ok(text)
    }

    pub fn fetch_owned(&self, user: &str) -> Result<BTreeSet<CardId>, RemoteError> {
        let body = self.execute(self.list_owned_request(user)?)?;
        let rows: Vec<OwnedRow> = serde_json::from_str(&body)?;
        Ok(rows.into_iter().map(|r| CardId::from(r.card_id)).collect())
    }

    pub fn fetch_plan(&self, user: &str) -> Result<Option<Plan>, RemoteError> {
        let body = self.execute(self.get_plan_request(user)?)?;
        let rows: Vec<PlanRow> = serde_json::from_str(&body)?;
        Ok(rows.into_iter().next().map(|r| r.plan))
    }
}

fn truncate(text: &str) -> String {
    text.chars().take(200).collect()
}

impl CollectionStore for RemoteStore {
    fn load(&self, user: &str) -> Result<BTreeSet<CardId>, StoreError> {
        Ok(self.fetch_owned(user)?)
    }

    fn add(&self, user: &str, card: &CardId) -> Result<(), StoreError> {
        self.execute(self.upsert_owned_request(user, card)?)?;
        Ok(())
    }

    fn remove(&self, user: &str, card: &CardId) -> Result<(), StoreError> {
        self.execute(self.delete_owned_request(user, card)?)?;
        Ok(())
    }
}

impl PlanStore for RemoteStore {
    fn plan(&self, user: &str) -> Result<Plan, StoreError> {
        if let Some(plan) = self.fetch_plan(user)? {
            return Ok(plan);
        }
        self.execute(self.upsert_plan_request(user, Plan::Basic, true)?)?;
        log::debug!("Created basic plan record for '{user}'");
        Ok(Plan::Basic)
    }

    fn set_plan(&self, user: &str, plan: Plan) -> Result<(), StoreError> {
        self.execute(self.upsert_plan_request(user, plan, false)?)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/client_tests.rs"]
mod tests;
