//! Async fetch thunks for Redux-style stores
//!
//! A thunk wraps a pending async operation and, when run against a
//! dispatch target, emits the lifecycle actions of one fetch:
//!
//! ```text
//! run(dispatch)
//!   │
//!   ├─► Request(entity)                      (unless silent)
//!   │
//!   └─► operation.await
//!         ├─ Ok(data)   ─► Success(entity, data, timestamp)
//!         └─ Err(error) ─► Failure(entity, error, timestamp)
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use fetch_thunk::{load_entity, Dispatcher, FetchAction, Logged};
//!
//! # async fn fetch_orders() -> Result<Vec<u64>, String> { Ok(vec![]) }
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let (dispatcher, mut rx) = Dispatcher::<FetchAction<Vec<u64>, String>>::channel();
//!
//! load_entity("orders", fetch_orders(), false)?.spawn(Logged::new(dispatcher));
//!
//! while let Some(action) = rx.recv().await {
//!     println!("{} {}", action.entity(), action.phase());
//! }
//! # Ok(())
//! # }
//! ```

pub mod action;
pub mod dispatch;
pub mod entity;
pub mod error;
pub mod options;
pub mod thunk;

pub use action::{
    ActionFactory, FetchAction, FetchActions, FetchPhase, FromFn, Payload, Timestamp, from_fn,
};
pub use dispatch::{Dispatch, Dispatcher, Logged};
pub use entity::EntityName;
pub use error::FetchError;
pub use options::FetchOptions;
pub use thunk::{FetchThunk, FetchThunkBuilder, load_entity};
