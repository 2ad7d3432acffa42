// ── Fallback chains ──
//
// Name and address resolution both read "try this source, else that
// one, else a default". A chain is a list of lazy lookups; only the
// lookups before the first hit are ever polled.

use futures_util::FutureExt;
use futures_util::future::BoxFuture;

/// One fallible, not-yet-started lookup.
pub type Lookup<'a, T> = BoxFuture<'a, Option<T>>;

/// Evaluate lookups left to right, returning the first `Some`.
pub async fn first_success<'a, T>(lookups: impl IntoIterator<Item = Lookup<'a, T>>) -> Option<T> {
    for lookup in lookups {
        if let Some(value) = lookup.await {
            return Some(value);
        }
    }
    None
}

/// A lookup whose answer is already known.
pub fn known<'a, T: Send + 'a>(value: Option<T>) -> Lookup<'a, T> {
    std::future::ready(value).boxed()
}
