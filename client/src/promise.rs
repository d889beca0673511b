//! Single-assignment promise backed by a oneshot channel.
//!
//! [`promise`] returns a connected pair: the [`Completer`] is handed to
//! whoever produces the outcome, the [`Promise`] to whoever consumes it.
//! The first settlement wins. Later attempts never reach the consumer and are
//! reported according to the pair's [`DoubleSettlement`] policy.

use std::future::Future;
use std::marker::PhantomData;
use std::mem;
use std::pin::Pin;
use std::sync::{Mutex, PoisonError};
use std::task::{Context, Poll};

use tokio::sync::oneshot;

use crate::sdk::AsyncHandler;
use kinesis_promise_types::DoubleSettlement;

type Outcome<T, E> = Result<T, E>;

/// Create an unsettled promise and the completer that settles it.
///
/// `operation` names the call in log events.
#[must_use]
pub fn promise<T, E>(
    operation: &'static str,
    policy: DoubleSettlement,
) -> (Completer<T, E>, Promise<T, E>) {
    let (tx, rx) = oneshot::channel();
    let completer = Completer {
        operation,
        policy,
        tx: Mutex::new(Some(tx)),
    };
    let promise = Promise {
        state: State::Waiting(rx),
    };
    (completer, promise)
}

/// Write half of a promise.
///
/// Settlement takes `&self` so a completer can be shared with code that may
/// call it more than once from any thread; only the first call is applied.
pub struct Completer<T, E> {
    operation: &'static str,
    policy: DoubleSettlement,
    tx: Mutex<Option<oneshot::Sender<Outcome<T, E>>>>,
}

impl<T, E> Completer<T, E> {
    /// Returns `true` if this call settled the promise.
    pub fn fulfill(&self, value: T) -> bool {
        self.settle(Ok(value))
    }

    /// Returns `true` if this call settled the promise.
    pub fn reject(&self, error: E) -> bool {
        self.settle(Err(error))
    }

    pub fn settle(&self, outcome: Outcome<T, E>) -> bool {
        let sender = self
            .tx
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        let Some(tx) = sender else {
            self.report_double_settlement(outcome.is_ok());
            return false;
        };

        let fulfilled = outcome.is_ok();
        // A closed receiver means the caller dropped the promise; the outcome
        // has nowhere to go and is discarded.
        if tx.send(outcome).is_err() {
            tracing::trace!(
                operation = self.operation,
                fulfilled,
                "promise dropped before settlement"
            );
        } else {
            tracing::trace!(operation = self.operation, fulfilled, "promise settled");
        }
        true
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.tx
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }

    #[must_use]
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    fn report_double_settlement(&self, fulfilled: bool) {
        match self.policy {
            DoubleSettlement::Ignore => {
                tracing::trace!(
                    operation = self.operation,
                    fulfilled,
                    "ignoring settlement of an already-settled promise"
                );
            }
            DoubleSettlement::Warn => {
                tracing::warn!(
                    operation = self.operation,
                    fulfilled,
                    "completion handler invoked after its promise settled; attempt dropped"
                );
            }
            DoubleSettlement::Panic => {
                panic!(
                    "completion handler for `{}` invoked after its promise settled",
                    self.operation
                );
            }
        }
    }
}

impl<T, E> Drop for Completer<T, E> {
    fn drop(&mut self) {
        let unsettled = self
            .tx
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some();
        if unsettled {
            tracing::warn!(
                operation = self.operation,
                "completion handler dropped without settling; promise will never settle"
            );
        }
    }
}

impl<T, E> std::fmt::Debug for Completer<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Completer")
            .field("operation", &self.operation)
            .field("policy", &self.policy)
            .field("settled", &self.is_settled())
            .finish()
    }
}

enum State<T, E> {
    Ready(Outcome<T, E>),
    Waiting(oneshot::Receiver<Outcome<T, E>>),
    /// The outcome was handed out, or the completer went away unsettled.
    /// Either way nothing will ever arrive.
    Exhausted,
}

/// Read half of a promise; resolves to the outcome the completer supplied.
///
/// If the completer is dropped without settling, the promise stays pending
/// forever. There is no timeout and no cancellation: dropping the promise
/// does not stop the operation that would have settled it.
#[must_use = "a promise does nothing unless awaited or polled"]
pub struct Promise<T, E> {
    state: State<T, E>,
}

// No structural pinning: `T` and `E` are only ever moved out by value.
impl<T, E> Unpin for Promise<T, E> {}

impl<T, E> Promise<T, E> {
    pub fn fulfilled(value: T) -> Self {
        Self {
            state: State::Ready(Ok(value)),
        }
    }

    pub fn rejected(error: E) -> Self {
        Self {
            state: State::Ready(Err(error)),
        }
    }

    /// Take the outcome if the promise has already settled, without waiting.
    ///
    /// Returns `None` while unsettled, and forever after the outcome has been
    /// taken or the completer was dropped unsettled.
    pub fn try_take(&mut self) -> Option<Outcome<T, E>> {
        match mem::replace(&mut self.state, State::Exhausted) {
            State::Ready(outcome) => Some(outcome),
            State::Waiting(mut rx) => match rx.try_recv() {
                Ok(outcome) => Some(outcome),
                Err(oneshot::error::TryRecvError::Empty) => {
                    self.state = State::Waiting(rx);
                    None
                }
                Err(oneshot::error::TryRecvError::Closed) => None,
            },
            State::Exhausted => None,
        }
    }

    /// Block the current thread until the promise settles.
    ///
    /// For callers outside an async runtime. Returns `None` only when the
    /// promise can never settle (the completer was dropped unsettled, or the
    /// outcome was already taken).
    ///
    /// # Panics
    ///
    /// Panics if called from within an asynchronous execution context.
    pub fn blocking_wait(self) -> Option<Outcome<T, E>> {
        match self.state {
            State::Ready(outcome) => Some(outcome),
            State::Waiting(rx) => rx.blocking_recv().ok(),
            State::Exhausted => None,
        }
    }
}

impl<T, E> Future for Promise<T, E> {
    type Output = Outcome<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        match mem::replace(&mut this.state, State::Exhausted) {
            State::Ready(outcome) => Poll::Ready(outcome),
            State::Waiting(mut rx) => match Pin::new(&mut rx).poll(cx) {
                Poll::Ready(Ok(outcome)) => Poll::Ready(outcome),
                // Completer dropped unsettled: stays pending forever.
                Poll::Ready(Err(_)) => Poll::Pending,
                Poll::Pending => {
                    this.state = State::Waiting(rx);
                    Poll::Pending
                }
            },
            State::Exhausted => Poll::Pending,
        }
    }
}

impl<T, E> std::fmt::Debug for Promise<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match self.state {
            State::Ready(_) => "ready",
            State::Waiting(_) => "waiting",
            State::Exhausted => "exhausted",
        };
        f.debug_struct("Promise").field("state", &state).finish()
    }
}

/// [`AsyncHandler`] that settles a promise.
///
/// `on_success` discards the echoed request and fulfills with the response;
/// `on_error` rejects with the failure exactly as given.
pub struct PromiseHandler<Req, T, E> {
    completer: Completer<T, E>,
    _request: PhantomData<fn(Req)>,
}

impl<Req, T, E> PromiseHandler<Req, T, E> {
    #[must_use]
    pub fn new(completer: Completer<T, E>) -> Self {
        Self {
            completer,
            _request: PhantomData,
        }
    }

    #[must_use]
    pub fn completer(&self) -> &Completer<T, E> {
        &self.completer
    }
}

impl<Req, T, E> AsyncHandler<Req, T, E> for PromiseHandler<Req, T, E>
where
    T: Send,
    E: Send,
{
    fn on_success(&self, _request: Req, response: T) {
        self.completer.fulfill(response);
    }

    fn on_error(&self, error: E) {
        self.completer.reject(error);
    }
}
