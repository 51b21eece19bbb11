//! Fetch thunk
//!
//! Wraps a pending async operation so that running it dispatches:
//!
//! 1. `Request` right away (skipped when silent)
//! 2. exactly one of `Success` / `Failure` once the operation settles
//!
//! The thunk only observes the operation. It never retries, times out or
//! cancels it, and a rejection is turned into a `Failure` action instead
//! of being returned to the caller.
//!
//! [`FetchThunk::spawn`] is the normal way to invoke a thunk: the outcome
//! is dispatched even if the returned handle is dropped.
//! [`FetchThunk::run`] is the lazy building block underneath and stops
//! observing the operation when its future is dropped.

use crate::action::{ActionFactory, FetchActions, FetchPhase, Payload};
use crate::dispatch::Dispatch;
use crate::entity::EntityName;
use crate::error::{FetchError, OPERATION_REQUIRED};
use crate::options::FetchOptions;
use chrono::Utc;
use std::future::{Future, IntoFuture};
use tokio::task::JoinHandle;

/// Build a thunk that loads `name` from `operation`
///
/// Fails with [`FetchError::InvalidArgument`] when `name` is empty.
/// Nothing is dispatched until the returned thunk is spawned.
///
/// # Example
///
/// ```rust
/// use fetch_thunk::{load_entity, FetchAction, FetchPhase};
/// use std::sync::{Arc, Mutex};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), fetch_thunk::FetchError> {
/// let log = Arc::new(Mutex::new(Vec::new()));
/// let sink = {
///     let log = Arc::clone(&log);
///     move |action: FetchAction<Vec<u32>, String>| log.lock().unwrap().push(action.phase())
/// };
///
/// let thunk = load_entity("orders", async { Ok::<_, String>(vec![1]) }, false)?;
/// let handle = thunk.spawn(sink);
/// assert_eq!(handle.await.unwrap(), FetchPhase::Success);
/// assert_eq!(*log.lock().unwrap(), vec![FetchPhase::Request, FetchPhase::Success]);
/// # Ok(())
/// # }
/// ```
pub fn load_entity<Op>(
    name: &str,
    operation: Op,
    silent: bool,
) -> Result<FetchThunk<Op::IntoFuture>, FetchError>
where
    Op: IntoFuture,
{
    FetchThunk::builder()
        .entity(name)
        .operation(operation)
        .silent(silent)
        .build()
}

/// A deferred fetch, ready to be run against a dispatch target
#[must_use = "a fetch thunk does nothing until it is run"]
pub struct FetchThunk<F, Fac = FetchActions> {
    entity: EntityName,
    operation: F,
    options: FetchOptions,
    factory: Fac,
}

impl<F> FetchThunk<F, FetchActions> {
    pub fn builder() -> FetchThunkBuilder<F> {
        FetchThunkBuilder::new()
    }
}

impl<F, Fac> FetchThunk<F, Fac> {
    pub fn entity(&self) -> &EntityName {
        &self.entity
    }

    pub fn is_silent(&self) -> bool {
        self.options.silent
    }
}

impl<F, T, E, Fac> FetchThunk<F, Fac>
where
    F: Future<Output = Result<T, E>>,
    Fac: ActionFactory<T, E>,
{
    /// Run the thunk lazily
    ///
    /// `Request` is dispatched before this method returns, so observers can
    /// mark the entity as loading without waiting for the first poll. The
    /// returned future awaits the operation, dispatches the outcome and
    /// resolves to the phase that was dispatched.
    ///
    /// Dropping the returned future before it completes cancels the
    /// observation: no `Success` or `Failure` is dispatched after `Request`.
    /// Use [`FetchThunk::spawn`] unless the caller drives the future to
    /// completion itself.
    pub fn run<D>(self, dispatch: D) -> impl Future<Output = FetchPhase>
    where
        D: Dispatch<Fac::Action>,
    {
        let Self {
            entity,
            operation,
            options,
            factory,
        } = self;

        if options.silent {
            log::trace!("Fetching {} silently", entity);
        } else {
            log::debug!("Fetching {}", entity);
            dispatch.dispatch(factory.make(&entity, Payload::Request));
        }

        async move {
            let payload = match operation.await {
                Ok(data) => Payload::Success {
                    data,
                    timestamp: Utc::now(),
                },
                Err(error) => Payload::Failure {
                    error,
                    timestamp: Utc::now(),
                },
            };
            let phase = payload.phase();

            match phase {
                FetchPhase::Failure => log::warn!("Fetching {} failed", entity),
                _ => log::debug!("Fetched {}", entity),
            }
            dispatch.dispatch(factory.make(&entity, payload));

            phase
        }
    }

    /// Run the thunk in a detached task on the current tokio runtime
    ///
    /// `Request` is dispatched before this method returns. The operation is
    /// then driven to settlement in the background, so exactly one
    /// `Success` or `Failure` follows even if the handle is dropped. Await
    /// the handle to chain on the outcome. Must be called from within a
    /// runtime context.
    pub fn spawn<D>(self, dispatch: D) -> JoinHandle<FetchPhase>
    where
        F: Send + 'static,
        T: Send + 'static,
        E: Send + 'static,
        Fac: Send + 'static,
        D: Dispatch<Fac::Action> + Send + 'static,
    {
        tokio::spawn(self.run(dispatch))
    }
}

/// Builder for [`FetchThunk`]
///
/// `build` validates the entity name first and the operation second.
#[must_use]
pub struct FetchThunkBuilder<F, Fac = FetchActions> {
    entity: Option<String>,
    operation: Option<F>,
    options: FetchOptions,
    factory: Fac,
}

impl<F> FetchThunkBuilder<F, FetchActions> {
    pub fn new() -> Self {
        Self {
            entity: None,
            operation: None,
            options: FetchOptions::default(),
            factory: FetchActions,
        }
    }
}

impl<F> Default for FetchThunkBuilder<F, FetchActions> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F, Fac> FetchThunkBuilder<F, Fac> {
    pub fn entity(mut self, name: impl Into<String>) -> Self {
        self.entity = Some(name.into());
        self
    }

    /// Set the pending operation to observe
    pub fn operation<Op>(mut self, operation: Op) -> Self
    where
        Op: IntoFuture<IntoFuture = F>,
    {
        self.operation = Some(operation.into_future());
        self
    }

    pub fn silent(mut self, silent: bool) -> Self {
        self.options.silent = silent;
        self
    }

    pub fn options(mut self, options: FetchOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the factory used to build the dispatched actions
    pub fn factory<G>(self, factory: G) -> FetchThunkBuilder<F, G> {
        FetchThunkBuilder {
            entity: self.entity,
            operation: self.operation,
            options: self.options,
            factory,
        }
    }

    pub fn build(self) -> Result<FetchThunk<F, Fac>, FetchError> {
        let entity = EntityName::new(self.entity.unwrap_or_default())?;
        let operation = self
            .operation
            .ok_or(FetchError::InvalidArgument(OPERATION_REQUIRED))?;

        Ok(FetchThunk {
            entity,
            operation,
            options: self.options,
            factory: self.factory,
        })
    }
}
