//! Typed kubeconfig document model
//!
//! Mirrors the conventional kubeconfig schema: three named collections
//! (clusters, contexts, users) plus the active context selection and an
//! opaque preferences block. Contexts join the other two collections by
//! name.

use std::fs;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Credential material in one of its two serialized representations.
///
/// Kubeconfig files carry credentials either inline (a `*-data` key
/// holding base64) or as a path to a file on disk (the sibling key
/// without the `-data` suffix). Modeling this as an enum rules out the
/// "both populated" ambiguity; when an input document carries both keys
/// the inline data wins and the path is discarded at decode time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    /// Raw bytes decoded from an inline base64 payload.
    Inline(Vec<u8>),
    /// Path to a file holding the material, read only at encode time.
    File(PathBuf),
}

impl Credential {
    /// Resolve the credential to its raw bytes.
    ///
    /// Inline data is returned as-is. A file-backed credential is read
    /// in full here, so encoding a document flattens external files
    /// into self-contained inline data.
    pub fn resolve(&self) -> Result<Vec<u8>> {
        match self {
            Credential::Inline(bytes) => Ok(bytes.clone()),
            Credential::File(path) => fs::read(path).map_err(|source| Error::FileRead {
                path: path.clone(),
                source,
            }),
        }
    }
}

/// Cluster endpoint and trust material
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClusterInfo {
    pub server: Option<String>,
    pub certificate_authority: Option<Credential>,
}

/// Named cluster entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    pub name: String,
    pub cluster: ClusterInfo,
}

/// Context payload: references into the cluster and user collections
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContextInfo {
    pub cluster: String,
    pub user: String,
}

/// Named context entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    pub name: String,
    pub context: ContextInfo,
}

/// Client credential pair for one user
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserInfo {
    pub client_certificate: Option<Credential>,
    pub client_key: Option<Credential>,
}

/// Named user entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub user: UserInfo,
}

/// A full kubeconfig document.
///
/// `preferences` is treated as an opaque block and passed through
/// unchanged by every operation in this crate.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub api_version: String,
    pub kind: String,
    pub clusters: Vec<Cluster>,
    pub contexts: Vec<Context>,
    pub current_context: String,
    pub users: Vec<User>,
    pub preferences: Option<serde_yaml::Value>,
}

impl Config {
    /// Find a cluster by name.
    ///
    /// Linear scan, first match wins. Uniqueness of names is not
    /// enforced; a duplicate later in the collection is ignored, which
    /// matches how merged kubeconfig files behave in practice.
    pub fn find_cluster(&self, name: &str) -> Option<&Cluster> {
        self.clusters.iter().find(|c| c.name == name)
    }

    /// Find a context by name. First match wins, as for clusters.
    pub fn find_context(&self, name: &str) -> Option<&Context> {
        self.contexts.iter().find(|c| c.name == name)
    }

    /// Find a user by name. First match wins, as for clusters.
    pub fn find_user(&self, name: &str) -> Option<&User> {
        self.users.iter().find(|u| u.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample_config() -> Config {
        Config {
            api_version: "v1".to_string(),
            kind: "Config".to_string(),
            clusters: vec![
                Cluster {
                    name: "alpha".to_string(),
                    cluster: ClusterInfo {
                        server: Some("https://alpha:6443".to_string()),
                        certificate_authority: None,
                    },
                },
                Cluster {
                    name: "beta".to_string(),
                    cluster: ClusterInfo {
                        server: Some("https://beta:6443".to_string()),
                        certificate_authority: None,
                    },
                },
            ],
            contexts: vec![Context {
                name: "dev".to_string(),
                context: ContextInfo {
                    cluster: "beta".to_string(),
                    user: "dev-user".to_string(),
                },
            }],
            current_context: "dev".to_string(),
            users: vec![User {
                name: "dev-user".to_string(),
                user: UserInfo::default(),
            }],
            preferences: None,
        }
    }

    #[test]
    fn find_cluster_by_name() {
        let config = sample_config();
        assert_eq!(config.find_cluster("beta").unwrap().name, "beta");
        assert!(config.find_cluster("gamma").is_none());
    }

    #[test]
    fn find_context_by_name() {
        let config = sample_config();
        assert_eq!(config.find_context("dev").unwrap().context.cluster, "beta");
        assert!(config.find_context("prod").is_none());
    }

    #[test]
    fn find_user_by_name() {
        let config = sample_config();
        assert_eq!(config.find_user("dev-user").unwrap().name, "dev-user");
        assert!(config.find_user("nobody").is_none());
    }

    #[test]
    fn duplicate_names_first_match_wins() {
        let mut config = sample_config();
        config.clusters.push(Cluster {
            name: "beta".to_string(),
            cluster: ClusterInfo {
                server: Some("https://shadow:6443".to_string()),
                certificate_authority: None,
            },
        });
        let found = config.find_cluster("beta").unwrap();
        assert_eq!(found.cluster.server.as_deref(), Some("https://beta:6443"));
    }

    #[test]
    fn resolve_inline_returns_bytes() {
        let cred = Credential::Inline(vec![1, 2, 3]);
        assert_eq!(cred.resolve().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn resolve_file_reads_exact_bytes() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0x01, 0x02]).unwrap();
        let cred = Credential::File(file.path().to_path_buf());
        assert_eq!(cred.resolve().unwrap(), vec![0x01, 0x02]);
    }

    #[test]
    fn resolve_missing_file_names_path() {
        let cred = Credential::File(PathBuf::from("/nonexistent/ca.pem"));
        match cred.resolve() {
            Err(crate::Error::FileRead { path, .. }) => {
                assert_eq!(path, PathBuf::from("/nonexistent/ca.pem"));
            }
            other => panic!("expected FileRead error, got {other:?}"),
        }
    }
}
