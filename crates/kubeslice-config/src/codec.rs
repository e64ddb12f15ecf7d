//! YAML codec for kubeconfig documents
//!
//! Decoding maps the on-disk schema into the typed model, turning inline
//! base64 payloads into raw bytes. Encoding applies the data-or-file
//! normalization rule: every credential is emitted in inline base64 form,
//! reading file-backed credentials from disk so the output document is
//! fully self-contained. Empty fields and empty collections are omitted
//! from output, and top-level keys are emitted in the conventional
//! kubeconfig order.

use std::path::PathBuf;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{
    Cluster, ClusterInfo, Config, Context, ContextInfo, Credential, User, UserInfo,
};

/// Decode a kubeconfig document from raw bytes.
pub fn from_slice(bytes: &[u8]) -> Result<Config> {
    let wire: ConfigWire =
        serde_yaml::from_slice(bytes).map_err(|e| Error::decode(e.to_string()))?;
    wire.into_config()
}

/// Decode a kubeconfig document from a string.
pub fn from_str(source: &str) -> Result<Config> {
    from_slice(source.as_bytes())
}

/// Encode a kubeconfig document to YAML.
///
/// Not pure with respect to the filesystem: file-backed credentials are
/// read here and flattened to inline base64.
pub fn to_string(config: &Config) -> Result<String> {
    let wire = ConfigWire::from_config(config)?;
    serde_yaml::to_string(&wire).map_err(|e| Error::encode(e.to_string()))
}

// Field declaration order governs the emitted key order.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigWire {
    #[serde(rename = "apiVersion", default, skip_serializing_if = "String::is_empty")]
    api_version: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    kind: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    clusters: Vec<ClusterWire>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    contexts: Vec<ContextWire>,
    #[serde(
        rename = "current-context",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    current_context: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    users: Vec<UserWire>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    preferences: Option<serde_yaml::Value>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ClusterWire {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    name: String,
    #[serde(default)]
    cluster: ClusterInfoWire,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ClusterInfoWire {
    #[serde(
        rename = "certificate-authority-data",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    certificate_authority_data: Option<String>,
    #[serde(
        rename = "certificate-authority",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    certificate_authority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    server: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ContextWire {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    name: String,
    #[serde(default)]
    context: ContextInfoWire,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ContextInfoWire {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    cluster: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    user: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct UserWire {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    name: String,
    #[serde(default)]
    user: UserInfoWire,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct UserInfoWire {
    #[serde(
        rename = "client-certificate-data",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    client_certificate_data: Option<String>,
    #[serde(
        rename = "client-key-data",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    client_key_data: Option<String>,
    #[serde(
        rename = "client-certificate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    client_certificate: Option<String>,
    #[serde(rename = "client-key", default, skip_serializing_if = "Option::is_none")]
    client_key: Option<String>,
}

/// Decode one credential field from its wire pair.
///
/// Inline data takes precedence over the sibling path key; a field where
/// both are empty is absent in the model.
fn credential_from_wire(
    data: Option<String>,
    path: Option<String>,
    field: &'static str,
) -> Result<Option<Credential>> {
    if let Some(data) = data.filter(|d| !d.is_empty()) {
        let bytes = BASE64_STANDARD
            .decode(data.as_bytes())
            .map_err(|e| Error::decode(format!("invalid base64 in {field}: {e}")))?;
        return Ok(Some(Credential::Inline(bytes)));
    }
    Ok(path
        .filter(|p| !p.is_empty())
        .map(|p| Credential::File(PathBuf::from(p))))
}

/// Normalize one credential to its inline wire form, reading file-backed
/// material from disk.
fn credential_to_wire(credential: Option<&Credential>) -> Result<Option<String>> {
    match credential {
        Some(credential) => Ok(Some(BASE64_STANDARD.encode(credential.resolve()?))),
        None => Ok(None),
    }
}

impl ConfigWire {
    fn into_config(self) -> Result<Config> {
        let clusters = self
            .clusters
            .into_iter()
            .map(|c| {
                Ok(Cluster {
                    name: c.name,
                    cluster: ClusterInfo {
                        server: c.cluster.server,
                        certificate_authority: credential_from_wire(
                            c.cluster.certificate_authority_data,
                            c.cluster.certificate_authority,
                            "certificate-authority-data",
                        )?,
                    },
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let contexts = self
            .contexts
            .into_iter()
            .map(|c| Context {
                name: c.name,
                context: ContextInfo {
                    cluster: c.context.cluster,
                    user: c.context.user,
                },
            })
            .collect();

        let users = self
            .users
            .into_iter()
            .map(|u| {
                Ok(User {
                    name: u.name,
                    user: UserInfo {
                        client_certificate: credential_from_wire(
                            u.user.client_certificate_data,
                            u.user.client_certificate,
                            "client-certificate-data",
                        )?,
                        client_key: credential_from_wire(
                            u.user.client_key_data,
                            u.user.client_key,
                            "client-key-data",
                        )?,
                    },
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Config {
            api_version: self.api_version,
            kind: self.kind,
            clusters,
            contexts,
            current_context: self.current_context,
            users,
            preferences: self.preferences,
        })
    }

    fn from_config(config: &Config) -> Result<Self> {
        let clusters = config
            .clusters
            .iter()
            .map(|c| {
                Ok(ClusterWire {
                    name: c.name.clone(),
                    cluster: ClusterInfoWire {
                        certificate_authority_data: credential_to_wire(
                            c.cluster.certificate_authority.as_ref(),
                        )?,
                        certificate_authority: None,
                        server: c.cluster.server.clone(),
                    },
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let contexts = config
            .contexts
            .iter()
            .map(|c| ContextWire {
                name: c.name.clone(),
                context: ContextInfoWire {
                    cluster: c.context.cluster.clone(),
                    user: c.context.user.clone(),
                },
            })
            .collect();

        let users = config
            .users
            .iter()
            .map(|u| {
                Ok(UserWire {
                    name: u.name.clone(),
                    user: UserInfoWire {
                        client_certificate_data: credential_to_wire(
                            u.user.client_certificate.as_ref(),
                        )?,
                        client_key_data: credential_to_wire(u.user.client_key.as_ref())?,
                        client_certificate: None,
                        client_key: None,
                    },
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ConfigWire {
            api_version: config.api_version.clone(),
            kind: config.kind.clone(),
            clusters,
            contexts,
            current_context: config.current_context.clone(),
            users,
            preferences: config.preferences.clone(),
        })
    }
}
