//! Scaffold - synthesize and publish project repositories.
//!
//! Scaffold accepts a code snippet and/or a natural-language description,
//! optionally executes the snippet against a remote execution service, and
//! synthesizes a complete project repository (frontend entry, backend entry,
//! dependency manifest, README) which it publishes to a hosting service.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to the pipeline)
//! - [`pipeline`] - Orchestrates Resolve -> Request -> Materialize -> Reconcile -> Publish
//! - [`core`] - Domain types, naming policy, configuration, manifest handling
//! - [`model`] - Abstraction for generative-text services (OpenAI-compatible v1)
//! - [`exec`] - Abstraction for remote code-execution services (Piston-compatible v1)
//! - [`forge`] - Abstraction for remote hosting services (GitHub v1)
//! - [`git`] - Single interface for all Git operations
//!
//! # Correctness Invariants
//!
//! Scaffold maintains the following invariants:
//!
//! 1. Repository names are validated at construction; invalid names cannot
//!    flow downstream
//! 2. Manifests are validated in full before the first byte is written
//! 3. Each pipeline invocation owns an isolated staging directory
//! 4. Every stage fails fast; errors carry the failing stage for diagnosis

pub mod cli;
pub mod core;
pub mod exec;
pub mod forge;
pub mod git;
pub mod model;
pub mod pipeline;
