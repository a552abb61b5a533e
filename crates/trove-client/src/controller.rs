// SPDX-License-Identifier: Apache-2.0

use crate::api::{ApiClient, ClientError};
use std::sync::{Mutex, PoisonError};
use tokio_util::sync::CancellationToken;
use trove_model::{Item, ItemPage};

/// Everything a list view needs to render, evolved only through
/// [`ListState::apply`].
#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    pub items: Vec<Item>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
    pub query: String,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page: 1,
            limit: 20,
            total_pages: 0,
            query: String::new(),
            loading: false,
            error: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Action {
    FetchStart,
    FetchSuccess(ItemPage),
    FetchError(String),
    SetQuery(String),
    SetPage(u32),
}

impl ListState {
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::FetchStart => {
                self.loading = true;
                self.error = None;
            }
            Action::FetchSuccess(page) => {
                self.items = page.data;
                self.total = page.total;
                self.page = page.page;
                self.limit = page.limit;
                self.total_pages = page.total_pages;
                self.loading = false;
                self.error = None;
            }
            Action::FetchError(message) => {
                self.loading = false;
                self.error = Some(message);
            }
            // A new search always starts from the first page.
            Action::SetQuery(query) => {
                self.query = query;
                self.page = 1;
            }
            Action::SetPage(page) => {
                self.page = page.max(1);
            }
        }
    }
}

struct Inner {
    state: ListState,
    current: Option<CancellationToken>,
}

/// Drives the item list: each fetch cancels the previous in-flight one, and
/// only the newest fetch is allowed to land in the state.
pub struct ListController {
    client: ApiClient,
    inner: Mutex<Inner>,
}

impl ListController {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            inner: Mutex::new(Inner {
                state: ListState::default(),
                current: None,
            }),
        }
    }

    #[must_use]
    pub fn state(&self) -> ListState {
        self.lock().state.clone()
    }

    pub fn set_query(&self, query: impl Into<String>) {
        self.lock().state.apply(Action::SetQuery(query.into()));
    }

    pub fn set_page(&self, page: u32) {
        self.lock().state.apply(Action::SetPage(page));
    }

    /// Fetches the page described by the current state. A fetch that has been
    /// superseded by a newer one drops its result silently.
    pub async fn fetch_items(&self) {
        let (token, page, limit, query) = {
            let mut inner = self.lock();
            if let Some(previous) = inner.current.take() {
                previous.cancel();
            }
            let token = CancellationToken::new();
            inner.current = Some(token.clone());
            inner.state.apply(Action::FetchStart);
            (
                token,
                inner.state.page,
                inner.state.limit,
                inner.state.query.clone(),
            )
        };

        let result = self
            .client
            .get_items(page, limit, &query, Some(token.clone()))
            .await;

        let mut inner = self.lock();
        if token.is_cancelled() {
            return;
        }
        inner.current = None;
        match result {
            Ok(page) => inner.state.apply(Action::FetchSuccess(page)),
            Err(ClientError::Aborted) => {}
            Err(e) => inner.state.apply(Action::FetchError(e.to_string())),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
