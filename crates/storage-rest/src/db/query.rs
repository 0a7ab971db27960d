//! Query builder over the store's REST dialect.
//!
//! Builders only collect parameters; nothing is sent until one of the
//! `fetch_*` methods is awaited.

use log::debug;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::DataClient;
use crate::errors::IntoCore;
use fundboard_core::errors::Result;

/// Sort direction for [`TableQuery::order`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Ascending,
    Descending,
}

impl Order {
    fn as_str(self) -> &'static str {
        match self {
            Order::Ascending => "asc",
            Order::Descending => "desc",
        }
    }
}

/// A read (or, after [`TableQuery::insert`], a write) against one table.
#[derive(Debug, Clone)]
pub struct TableQuery<'a> {
    client: &'a DataClient,
    table: String,
    columns: String,
    filters: Vec<(String, String)>,
    order: Option<(String, Order)>,
}

impl<'a> TableQuery<'a> {
    pub(super) fn new(client: &'a DataClient, table: &str) -> Self {
        Self {
            client,
            table: table.to_string(),
            columns: "*".to_string(),
            filters: Vec::new(),
            order: None,
        }
    }

    /// Column projection, including embedded relations such as `*,project:projects(*)`.
    pub fn select(mut self, columns: &str) -> Self {
        self.columns = columns.to_string();
        self
    }

    /// Keeps only rows where `column` equals `value`.
    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.filters.push((column.to_string(), format!("eq.{}", value)));
        self
    }

    pub fn order(mut self, column: &str, order: Order) -> Self {
        self.order = Some((column.to_string(), order));
        self
    }

    /// Query string parameters in the order they are sent.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.filters.len() + 2);
        pairs.push(("select".to_string(), self.columns.clone()));
        pairs.extend(self.filters.iter().cloned());
        if let Some((column, order)) = &self.order {
            pairs.push(("order".to_string(), format!("{}.{}", column, order.as_str())));
        }
        pairs
    }

    /// Turns the query into an insert of a single row.
    ///
    /// The current projection (`*` by default) decides which columns of the
    /// inserted row are returned.
    pub fn insert<B: Serialize>(self, row: &B) -> Result<InsertQuery<'a>> {
        let body = serde_json::to_value(row).into_core()?;
        Ok(InsertQuery { query: self, body })
    }

    /// Runs the query and returns every matching row.
    pub async fn fetch_all<T: DeserializeOwned>(self) -> Result<Vec<T>> {
        let pairs = self.query_pairs();
        debug!("[DataClient] GET {} {:?}", self.table, pairs);
        let request = self
            .client
            .request(Method::GET, &self.table, false)
            .query(&pairs);
        self.client.send(request).await
    }

    /// Runs the query and returns exactly one row.
    ///
    /// The store answers with an error when zero or several rows match.
    pub async fn fetch_one<T: DeserializeOwned>(self) -> Result<T> {
        let pairs = self.query_pairs();
        debug!("[DataClient] GET single {} {:?}", self.table, pairs);
        let request = self
            .client
            .request(Method::GET, &self.table, true)
            .query(&pairs);
        self.client.send(request).await
    }
}

/// Insert of one row, returning the stored representation.
#[derive(Debug, Clone)]
pub struct InsertQuery<'a> {
    query: TableQuery<'a>,
    body: Value,
}

impl<'a> InsertQuery<'a> {
    /// Payload that will be sent.
    pub fn body(&self) -> &Value {
        &self.body
    }

    /// Sends the insert and returns the inserted row.
    pub async fn fetch_one<T: DeserializeOwned>(self) -> Result<T> {
        let select = [("select", self.query.columns.as_str())];
        debug!("[DataClient] POST {}", self.query.table);
        let request = self
            .query
            .client
            .request(Method::POST, &self.query.table, true)
            .header("Prefer", "return=representation")
            .query(&select)
            .json(&self.body);
        self.query.client.send(request).await
    }
}
