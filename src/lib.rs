//! # Summenbaum
//!
//! Summenbaum computes the total byte size and file count of a directory
//! tree with a bounded number of concurrent workers and cooperative
//! cancellation.
//!
//! ## Architecture
//!
//! The crate is built around one component, the traversal engine in
//! [`sizer`]. Everything else is a thin layer around it:
//! - **Tokio**: async runtime; each branch visit is a spawned task
//! - **Semaphore**: worker budget bounding concurrently active visits
//! - **CancellationToken**: single cooperative cancel signal for the whole
//!   traversal
//!
//! ## Core Components
//!
//! - [`config`]: layered configuration (embedded defaults, TOML file, env)
//! - [`error`]: filesystem adapter error types
//! - [`fs`]: [`TreeNode`](node::TreeNode) adapter over real filesystem entries
//! - [`node`]: the tree-node collaborator contract the engine consumes
//! - [`sizer`]: the concurrent traversal engine
//!
//! ## Behavior
//!
//! - Bounded concurrency: never more than `max_workers` visits active at
//!   once, the root visit included
//! - First-error-wins: exactly one collaborator error is surfaced; an error
//!   discards everything accumulated so far
//! - Cancellation is not an error; a cancelled run returns what was merged
//!   before the signal was observed

pub mod config;
pub mod error;
pub mod fs;
pub mod node;
pub mod sizer;

#[cfg(test)]
mod tests;
