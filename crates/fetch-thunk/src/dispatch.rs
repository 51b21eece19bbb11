//! Dispatch targets for fetch actions
//!
//! The thunk never reaches for a global store. Whoever runs it passes the
//! dispatch target explicitly: a plain closure, a channel-backed
//! [`Dispatcher`], or either one wrapped in [`Logged`].

use std::fmt::Debug;
use tokio::sync::mpsc;

/// Something that accepts actions
///
/// Implemented for every `Fn(A)` closure, so a callback can be passed
/// wherever a dispatch target is expected.
pub trait Dispatch<A> {
    fn dispatch(&self, action: A);
}

impl<A, F> Dispatch<A> for F
where
    F: Fn(A),
{
    fn dispatch(&self, action: A) {
        self(action)
    }
}

/// Dispatcher that forwards actions into a channel
///
/// Actions are queued and processed by whoever owns the receiver,
/// typically the store's event loop.
pub struct Dispatcher<A> {
    tx: mpsc::UnboundedSender<A>,
}

impl<A> Dispatcher<A> {
    /// Create a new dispatcher
    pub fn new(tx: mpsc::UnboundedSender<A>) -> Self {
        Self { tx }
    }

    /// Create a dispatcher together with the receiving end of its channel
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<A>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    /// Whether the receiving end has been dropped
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

// Manual impl: deriving would require `A: Clone`
impl<A> Clone for Dispatcher<A> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<A> Dispatch<A> for Dispatcher<A> {
    fn dispatch(&self, action: A) {
        if self.tx.send(action).is_err() {
            log::error!("Failed to dispatch action: receiver dropped");
        }
    }
}

/// Dispatch decorator that logs every action before forwarding it
#[derive(Clone)]
pub struct Logged<D> {
    inner: D,
}

impl<D> Logged<D> {
    pub fn new(inner: D) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> D {
        self.inner
    }
}

impl<A, D> Dispatch<A> for Logged<D>
where
    A: Debug,
    D: Dispatch<A>,
{
    fn dispatch(&self, action: A) {
        log::debug!("Action: {:?}", action);
        self.inner.dispatch(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_closure_dispatch() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = {
            let seen = Arc::clone(&seen);
            move |action: u32| seen.lock().unwrap().push(action)
        };

        sink.dispatch(1);
        sink.dispatch(2);

        assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_dispatcher() {
        let (dispatcher, mut rx) = Dispatcher::channel();

        dispatcher.dispatch("hello");

        assert_eq!(rx.try_recv().unwrap(), "hello");
    }

    #[test]
    fn test_dispatcher_with_dropped_receiver() {
        let (dispatcher, rx) = Dispatcher::<u32>::channel();
        drop(rx);

        assert!(dispatcher.is_closed());
        // Must not panic
        dispatcher.dispatch(42);
    }

    #[test]
    fn test_logged_forwards() {
        let (dispatcher, mut rx) = Dispatcher::channel();
        let logged = Logged::new(dispatcher);

        logged.dispatch(String::from("orders"));

        assert_eq!(rx.try_recv().unwrap(), "orders");
    }
}
