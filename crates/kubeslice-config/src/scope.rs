//! Context scoping
//!
//! Reduces a merged kubeconfig to a single context and the cluster and
//! user it references.

use tracing::debug;

use crate::error::{Error, Result};
use crate::model::Config;

/// Scope a kubeconfig to one named context.
///
/// Resolves the context, then its cluster and user references against
/// the full collections, and builds a new document whose three
/// collections hold exactly the resolved entries and whose
/// `current-context` is `context_name`. The input is never modified, so
/// a failed lookup leaves no partial state behind.
///
/// Lookups scan in collection order and take the first match; duplicate
/// names later in a collection are ignored.
pub fn scope(config: &Config, context_name: &str) -> Result<Config> {
    let context = config
        .find_context(context_name)
        .ok_or_else(|| Error::ContextNotFound {
            name: context_name.to_string(),
        })?;

    let cluster =
        config
            .find_cluster(&context.context.cluster)
            .ok_or_else(|| Error::ClusterNotFound {
                name: context.context.cluster.clone(),
            })?;

    let user = config
        .find_user(&context.context.user)
        .ok_or_else(|| Error::UserNotFound {
            name: context.context.user.clone(),
        })?;

    debug!(
        context = context_name,
        cluster = %cluster.name,
        user = %user.name,
        "resolved context references"
    );

    Ok(Config {
        api_version: config.api_version.clone(),
        kind: config.kind.clone(),
        clusters: vec![cluster.clone()],
        contexts: vec![context.clone()],
        current_context: context_name.to_string(),
        users: vec![user.clone()],
        preferences: config.preferences.clone(),
    })
}
