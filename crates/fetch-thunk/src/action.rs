//! Fetch lifecycle actions
//!
//! A fetch produces at most three actions for one entity:
//!
//! ```text
//! Request(entity) ──► Success(entity, data, timestamp)
//!                 └─► Failure(entity, error, timestamp)
//! ```
//!
//! The thunk never builds actions itself. It hands an [`EntityName`] and a
//! [`Payload`] to an [`ActionFactory`], so applications can map fetch
//! results straight into their own root action enum.

use crate::entity::EntityName;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wall-clock time at which an operation settled
pub type Timestamp = DateTime<Utc>;

/// The phase of a fetch an action describes
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FetchPhase {
    /// The fetch has started, observers may show a loading indicator
    Request,
    /// The operation fulfilled
    Success,
    /// The operation rejected
    Failure,
}

/// Payload handed to an [`ActionFactory`]
#[derive(Debug, Clone, PartialEq)]
pub enum Payload<T, E> {
    Request,
    Success { data: T, timestamp: Timestamp },
    Failure { error: E, timestamp: Timestamp },
}

impl<T, E> Payload<T, E> {
    pub fn phase(&self) -> FetchPhase {
        match self {
            Payload::Request => FetchPhase::Request,
            Payload::Success { .. } => FetchPhase::Success,
            Payload::Failure { .. } => FetchPhase::Failure,
        }
    }
}

/// Default action type produced by [`FetchActions`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FetchAction<T, E> {
    /// Fetching started for `entity`
    Request { entity: EntityName },
    /// `entity` was loaded
    Success {
        entity: EntityName,
        data: T,
        timestamp: Timestamp,
    },
    /// Loading `entity` failed
    Failure {
        entity: EntityName,
        error: E,
        timestamp: Timestamp,
    },
}

impl<T, E> FetchAction<T, E> {
    pub fn entity(&self) -> &EntityName {
        match self {
            FetchAction::Request { entity }
            | FetchAction::Success { entity, .. }
            | FetchAction::Failure { entity, .. } => entity,
        }
    }

    pub fn phase(&self) -> FetchPhase {
        match self {
            FetchAction::Request { .. } => FetchPhase::Request,
            FetchAction::Success { .. } => FetchPhase::Success,
            FetchAction::Failure { .. } => FetchPhase::Failure,
        }
    }

    /// Settlement time, `None` for `Request`
    pub fn timestamp(&self) -> Option<Timestamp> {
        match self {
            FetchAction::Request { .. } => None,
            FetchAction::Success { timestamp, .. } | FetchAction::Failure { timestamp, .. } => {
                Some(*timestamp)
            }
        }
    }
}

/// Builds the action dispatched for each phase of a fetch
///
/// # Example
///
/// ```rust
/// use fetch_thunk::{from_fn, ActionFactory, EntityName, Payload};
///
/// #[derive(Debug, PartialEq)]
/// enum AppAction {
///     Loading(String),
///     Loaded(String, Vec<u32>),
///     LoadError(String, String),
/// }
///
/// let factory = from_fn(|entity: &EntityName, payload: Payload<Vec<u32>, String>| match payload {
///     Payload::Request => AppAction::Loading(entity.to_string()),
///     Payload::Success { data, .. } => AppAction::Loaded(entity.to_string(), data),
///     Payload::Failure { error, .. } => AppAction::LoadError(entity.to_string(), error),
/// });
///
/// let orders = EntityName::new("orders").unwrap();
/// assert_eq!(
///     factory.make(&orders, Payload::Request),
///     AppAction::Loading("orders".into())
/// );
/// ```
pub trait ActionFactory<T, E> {
    type Action;

    fn make(&self, entity: &EntityName, payload: Payload<T, E>) -> Self::Action;
}

/// Factory producing [`FetchAction`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchActions;

impl<T, E> ActionFactory<T, E> for FetchActions {
    type Action = FetchAction<T, E>;

    fn make(&self, entity: &EntityName, payload: Payload<T, E>) -> Self::Action {
        let entity = entity.clone();
        match payload {
            Payload::Request => FetchAction::Request { entity },
            Payload::Success { data, timestamp } => FetchAction::Success {
                entity,
                data,
                timestamp,
            },
            Payload::Failure { error, timestamp } => FetchAction::Failure {
                entity,
                error,
                timestamp,
            },
        }
    }
}

/// Factory backed by a closure, see [`from_fn`]
#[derive(Clone, Copy)]
pub struct FromFn<F>(F);

/// Turn a closure into an [`ActionFactory`]
pub fn from_fn<F>(f: F) -> FromFn<F> {
    FromFn(f)
}

impl<T, E, A, F> ActionFactory<T, E> for FromFn<F>
where
    F: Fn(&EntityName, Payload<T, E>) -> A,
{
    type Action = A;

    fn make(&self, entity: &EntityName, payload: Payload<T, E>) -> Self::Action {
        (self.0)(entity, payload)
    }
}
