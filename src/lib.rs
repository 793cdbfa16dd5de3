//! # Manifest Diff
//!
//! Normalization-aware diffing of Kubernetes-style resource manifests.
//!
//! This library compares a baseline manifest against one or more others and
//! reports the leaf paths whose values differ, after normalizing structural
//! variations that carry no meaning: named arrays (env vars, volumes, volume
//! mounts) become name-keyed maps, the required-env annotation becomes a
//! token set, and bare pods, pod templates, and controller kinds can be
//! re-rooted onto a shared path frame before diffing.
//!
//! ## Modules
//!
//! - [`value`] - In-memory representation of YAML/JSON documents
//! - [`flatten`] - Flattening of nested documents into leaf-path mappings
//! - [`normalize`] - Structural normalization ahead of flattening
//! - [`template`] - Pod template location and path-frame alignment
//! - [`diff`] - Leaf-path comparison and orchestration
//! - [`loader`] - Document loading from disk

pub mod diff;
pub mod error;
pub mod flatten;
pub mod loader;
pub mod normalize;
pub mod template;
pub mod value;

pub use diff::{compare, different_keys, symmetric_difference, CompareOptions, DiffReport};
pub use error::Error;
pub use flatten::{flatten, FlatMap};
pub use normalize::{normalize_document, NamedArrayMode};
pub use template::{align_pod_frame, locate_template, Kind};
pub use value::Value;
