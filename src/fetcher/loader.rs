//! Per-target fetch-state machine.
//!
//! A [`Loader`] tracks one request target at a time and publishes the state
//! of the latest request against it: retargeting immediately flips the state
//! to `Loading`, aborts the previous in-flight task, and spawns a new fetch.
//! A superseded request that resolves late is discarded by generation check,
//! so the observable state always reflects the most recently issued target.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use reqwest::Client;
use serde::de::DeserializeOwned;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::error::{AppError, ErrorKind};
use crate::fetcher::fetch;

/// What went wrong with a request, carried in the settled state. Holds the
/// taxonomy kind and a human-readable message so consumers can branch or
/// render without touching the full error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadError {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&AppError> for LoadError {
    fn from(e: &AppError) -> Self {
        LoadError {
            kind: e.kind(),
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// The state of the latest request against a loader's target.
///
/// `Loading` carries no data and no error; once a request finishes, exactly
/// one of `Ready`/`Failed` holds.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    /// No target set yet; no request has been issued.
    Idle,
    /// A request for the current target is in flight.
    Loading,
    /// The latest request succeeded.
    Ready(T),
    /// The latest request failed.
    Failed(LoadError),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// A state that is no longer waiting on the network.
    pub fn is_settled(&self) -> bool {
        matches!(self, LoadState::Ready(_) | LoadState::Failed(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&LoadError> {
        match self {
            LoadState::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// Owns one request target and fans its state out to any number of
/// subscribers. Dropping the loader aborts the in-flight request.
pub struct Loader<T> {
    client: Client,
    tx: Arc<watch::Sender<LoadState<T>>>,
    generation: Arc<AtomicU64>,
    target: Option<String>,
    task: Option<JoinHandle<()>>,
}

impl<T> Loader<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    /// Creates an idle loader. No request is issued until a target is set.
    pub fn new(client: Client) -> Self {
        let (tx, _) = watch::channel(LoadState::Idle);
        Self {
            client,
            tx: Arc::new(tx),
            generation: Arc::new(AtomicU64::new(0)),
            target: None,
            task: None,
        }
    }

    /// Points the loader at a new target.
    ///
    /// `None` or a blank string means "do not fetch yet" and resets to
    /// `Idle`. A URL identical to the current target is a no-op: the state
    /// already reflects it and no duplicate request is issued. Any previous
    /// in-flight request is aborted and its eventual resolution discarded.
    pub fn set_target(&mut self, target: Option<String>) {
        let target = target.filter(|t| !t.trim().is_empty());
        if self.target == target {
            return;
        }
        self.target = target.clone();

        // Invalidate any outstanding resolution before touching the state
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(task) = self.task.take() {
            task.abort();
        }

        let Some(url) = target else {
            self.tx.send_replace(LoadState::Idle);
            return;
        };

        debug!("Loader targeting {url}");
        self.tx.send_replace(LoadState::Loading);

        let client = self.client.clone();
        let tx = Arc::clone(&self.tx);
        let counter = Arc::clone(&self.generation);
        self.task = Some(tokio::spawn(async move {
            let result = fetch::<T>(&client, &url).await;

            // A newer target was issued while this request was in flight;
            // its resolution wins, ours is dropped.
            if counter.load(Ordering::SeqCst) != generation {
                debug!("Discarding superseded response for {url}");
                return;
            }

            let next = match result {
                Ok(data) => LoadState::Ready(data),
                Err(e) => LoadState::Failed(LoadError::from(&e)),
            };
            tx.send_replace(next);
        }));
    }

    /// The current target, if any.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// A snapshot of the current state.
    pub fn state(&self) -> LoadState<T> {
        self.tx.borrow().clone()
    }

    /// Subscribes to state changes. Every subscriber sees each transition.
    pub fn subscribe(&self) -> watch::Receiver<LoadState<T>> {
        self.tx.subscribe()
    }

    /// Waits until the current request settles (or returns immediately when
    /// idle or already settled).
    pub async fn settled(&self) -> LoadState<T> {
        let mut rx = self.subscribe();
        loop {
            {
                let state = rx.borrow_and_update();
                if !state.is_loading() {
                    return state.clone();
                }
            }
            if rx.changed().await.is_err() {
                return LoadState::Idle;
            }
        }
    }
}

impl<T> Drop for Loader<T> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_predicates() {
        let loading: LoadState<i32> = LoadState::Loading;
        assert!(loading.is_loading());
        assert!(!loading.is_settled());
        assert!(loading.data().is_none());
        assert!(loading.error().is_none());

        let ready = LoadState::Ready(7);
        assert!(ready.is_settled());
        assert_eq!(ready.data(), Some(&7));

        let failed: LoadState<i32> = LoadState::Failed(LoadError {
            kind: ErrorKind::HttpStatus,
            message: "API request not found (404): x".to_string(),
        });
        assert!(failed.is_settled());
        assert_eq!(failed.error().unwrap().kind, ErrorKind::HttpStatus);
    }

    #[test]
    fn test_load_error_from_app_error() {
        let err = AppError::network_timeout("https://api.nardi.ge");
        let load_err = LoadError::from(&err);
        assert_eq!(load_err.kind, ErrorKind::Network);
        assert!(load_err.message.contains("api.nardi.ge"));
    }

    #[tokio::test]
    async fn test_loader_starts_idle_and_none_is_noop() {
        let client = Client::new();
        let mut loader: Loader<serde_json::Value> = Loader::new(client);
        assert_eq!(loader.state(), LoadState::Idle);
        assert!(loader.target().is_none());

        // "Do not fetch yet": still idle, no task spawned
        loader.set_target(None);
        assert_eq!(loader.state(), LoadState::Idle);
        assert_eq!(loader.settled().await, LoadState::Idle);
    }

    #[tokio::test]
    async fn test_loader_blank_target_stays_idle() {
        let client = Client::new();
        let mut loader: Loader<serde_json::Value> = Loader::new(client);

        // An empty or whitespace-only URL is "do not fetch yet", not a request
        loader.set_target(Some(String::new()));
        assert_eq!(loader.state(), LoadState::Idle);
        assert!(loader.target().is_none());

        loader.set_target(Some("   ".to_string()));
        assert_eq!(loader.settled().await, LoadState::Idle);
    }
}
