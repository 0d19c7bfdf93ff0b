//! backlog - a story backlog with greedy sprint planning
//!
//! Stories carry an id, a point estimate and a priority. A [`Backlog`]
//! stores them through any [`Datastore`] and picks sprints with
//! [`select_sprint`](core::select_sprint).
//!
//! ```
//! use backlog::{Backlog, Story};
//! use backlog::storage::MemoryDatastore;
//!
//! let backlog = Backlog::new(MemoryDatastore::new());
//! backlog.add(&Story::new("1", 3, 1)).unwrap();
//! backlog.add(&Story::new("2", 13, 1)).unwrap();
//!
//! let sprint = backlog.sprint(13).unwrap();
//! assert_eq!(sprint, vec![Story::new("2", 13, 1)]);
//! ```

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod backlog;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod output;
pub mod storage;

pub use crate::backlog::Backlog;
pub use crate::core::{Datastore, SprintPlan, Story};
pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::BacklogError;
