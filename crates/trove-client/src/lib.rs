// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

mod api;
mod controller;
mod debounce;
mod token;

pub use api::{ApiClient, ClientError, RequestOptions};
pub use controller::{Action, ListController, ListState};
pub use debounce::Debouncer;
pub use token::{FileTokenStore, MemoryTokenStore, TokenStore, AUTH_TOKEN_KEY};
