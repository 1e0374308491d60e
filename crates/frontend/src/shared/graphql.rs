//! GraphQL transport and the mutation executor used by forms.

use contracts::shared::graphql::{GraphQlRequest, GraphQlResponse, InputVariables};
use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::sync::Arc;

use super::api_utils::graphql_url;
use super::error::UiError;
use crate::system::auth::storage;

/// Send one operation and unwrap the `{ data, errors }` envelope
pub async fn execute<V, O>(document: &str, variables: V) -> Result<O, UiError>
where
    V: Serialize,
    O: DeserializeOwned,
{
    let body = GraphQlRequest {
        query: document,
        variables,
    };

    let mut builder = Request::post(&graphql_url()).header("Accept", "application/json");
    if let Some(token) = storage::get_token() {
        builder = builder.header("X-CSRF-TOKEN", &token);
    }

    let response = builder
        .json(&body)
        .map_err(|e| UiError::Network(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| UiError::Network(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(UiError::Network(format!("HTTP {}", response.status())));
    }

    let envelope = response
        .json::<GraphQlResponse<O>>()
        .await
        .map_err(|e| UiError::Network(format!("Failed to parse response: {}", e)))?;

    envelope.into_result().map_err(UiError::GraphQl)
}

/// Where a mutation is in its lifecycle
#[derive(Debug, Clone, PartialEq)]
pub enum MutationStatus<O> {
    Idle,
    InFlight,
    Succeeded(O),
    Failed(UiError),
}

impl<O> MutationStatus<O> {
    /// `loading` wins, then data, then error.
    pub fn from_parts(loading: bool, data: Option<O>, error: Option<UiError>) -> Self {
        if loading {
            MutationStatus::InFlight
        } else if let Some(data) = data {
            MutationStatus::Succeeded(data)
        } else if let Some(error) = error {
            MutationStatus::Failed(error)
        } else {
            MutationStatus::Idle
        }
    }
}

type Completed<O> = Arc<dyn Fn(&O) + Send + Sync>;
type Failed = Arc<dyn Fn(&UiError) + Send + Sync>;

/// A remote write with reactive `loading` / `data` / `error` state.
///
/// Only one request is in flight at a time; `mutate` while loading is a no-op.
pub struct Mutation<I, O>
where
    O: Send + Sync + 'static,
{
    document: &'static str,
    pub loading: RwSignal<bool>,
    pub data: RwSignal<Option<O>>,
    pub error: RwSignal<Option<UiError>>,
    on_completed: Option<Completed<O>>,
    on_error: Option<Failed>,
    _input: PhantomData<fn(I)>,
}

impl<I, O> Clone for Mutation<I, O>
where
    O: Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            document: self.document,
            loading: self.loading,
            data: self.data,
            error: self.error,
            on_completed: self.on_completed.clone(),
            on_error: self.on_error.clone(),
            _input: PhantomData,
        }
    }
}

impl<I, O> Mutation<I, O>
where
    I: Serialize + 'static,
    O: DeserializeOwned + Clone + Send + Sync + 'static,
{
    pub fn new(document: &'static str) -> Self {
        Self {
            document,
            loading: RwSignal::new(false),
            data: RwSignal::new(None),
            error: RwSignal::new(None),
            on_completed: None,
            on_error: None,
            _input: PhantomData,
        }
    }

    pub fn on_completed(mut self, f: impl Fn(&O) + Send + Sync + 'static) -> Self {
        self.on_completed = Some(Arc::new(f));
        self
    }

    pub fn on_error(mut self, f: impl Fn(&UiError) + Send + Sync + 'static) -> Self {
        self.on_error = Some(Arc::new(f));
        self
    }

    pub fn status(&self) -> Signal<MutationStatus<O>> {
        let (loading, data, error) = (self.loading, self.data, self.error);
        Signal::derive(move || MutationStatus::from_parts(loading.get(), data.get(), error.get()))
    }

    pub fn mutate(&self, input: I) {
        if self.loading.get_untracked() {
            log::warn!("mutation already in flight, ignoring");
            return;
        }

        self.loading.set(true);
        self.error.set(None);

        let this = self.clone();
        spawn_local(async move {
            let result = execute::<_, O>(this.document, InputVariables { input }).await;
            this.finish(result);
        });
    }

    fn finish(&self, result: Result<O, UiError>) {
        match result {
            Ok(data) => {
                if self.data.try_set(Some(data.clone())).is_some() {
                    log::warn!("mutation completed after its view was disposed");
                    return;
                }
                self.loading.try_set(false);
                log::info!("mutation completed");
                if let Some(cb) = &self.on_completed {
                    cb(&data);
                }
            }
            Err(e) => {
                log::error!("mutation failed: {}", e);
                if self.error.try_set(Some(e.clone())).is_some() {
                    return;
                }
                self.loading.try_set(false);
                if let Some(cb) = &self.on_error {
                    cb(&e);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_precedence() {
        let err = Some(UiError::Network("down".into()));
        assert_eq!(
            MutationStatus::from_parts(true, Some(1), err.clone()),
            MutationStatus::InFlight
        );
        assert_eq!(
            MutationStatus::from_parts(false, Some(1), err.clone()),
            MutationStatus::Succeeded(1)
        );
        assert_eq!(
            MutationStatus::<i32>::from_parts(false, None, err.clone()),
            MutationStatus::Failed(UiError::Network("down".into()))
        );
        assert_eq!(
            MutationStatus::<i32>::from_parts(false, None, None),
            MutationStatus::Idle
        );
    }
}
