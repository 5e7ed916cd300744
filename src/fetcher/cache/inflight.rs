//! In-flight request coalescing.
//!
//! At most one GET per URL is on the wire at a time. The first caller holds
//! the per-URL permit while it fetches and fills the response cache; later
//! callers for the same URL wait on the permit, then find the cached body
//! instead of issuing their own request.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

static IN_FLIGHT: LazyLock<Mutex<HashMap<String, Arc<AsyncMutex<()>>>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Held for the duration of one request against a URL. Dropping it releases
/// the next waiter, if any.
pub struct RequestGuard {
    url: String,
    _permit: OwnedMutexGuard<()>,
}

impl Drop for RequestGuard {
    fn drop(&mut self) {
        // Best-effort registry cleanup: drop the entry once nobody else holds it.
        let mut map = IN_FLIGHT.lock().expect("in-flight registry poisoned");
        if let Some(lock) = map.get(&self.url)
            && Arc::strong_count(lock) <= 2
        {
            map.remove(&self.url);
        }
    }
}

/// Waits until this caller is the only in-flight request for `url`.
pub async fn begin_request(url: &str) -> RequestGuard {
    let lock = {
        let mut map = IN_FLIGHT.lock().expect("in-flight registry poisoned");
        map.entry(url.to_string())
            .or_insert_with(|| Arc::new(AsyncMutex::new(())))
            .clone()
    };
    let permit = lock.lock_owned().await;
    RequestGuard {
        url: url.to_string(),
        _permit: permit,
    }
}

/// Number of URLs currently registered, for monitoring and tests.
pub fn in_flight_count() -> usize {
    IN_FLIGHT.lock().expect("in-flight registry poisoned").len()
}
