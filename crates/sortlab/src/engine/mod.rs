//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer validates preconditions, dispatches an [`Algorithm`] choice
//! to its layer-2 implementation, and consumes finished step sequences.
//!
//! # Architecture
//!
//! ```text
//! High-level API
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```
//!
//! [`Algorithm`]: executor::Algorithm

/// Step sequence consumption.
pub mod consumer;

/// Algorithm selection and dispatch.
pub mod executor;

/// Precondition validation.
pub mod validator;
