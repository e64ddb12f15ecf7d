//! Kubeconfig document model and context scoping for kubeslice
//!
//! This crate provides typed kubeconfig structures, a YAML codec that
//! flattens file-backed credentials into inline base64 data, and the
//! scoping operation that reduces a merged kubeconfig to a single
//! context with its cluster and user.

pub mod codec;
pub mod error;
pub mod model;
pub mod scope;

pub use error::{Error, Result};
pub use model::{Cluster, ClusterInfo, Config, Context, ContextInfo, Credential, User, UserInfo};
pub use scope::scope;
