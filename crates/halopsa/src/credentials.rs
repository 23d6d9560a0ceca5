//! The `haloPsaApi` credential record.
//!
//! The host stores and decrypts credentials; the node only reads the record
//! once per run. Secret values stay wrapped in [`SecretString`] so they are
//! redacted from `Debug` output and logs.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use nodes::NodeError;

/// Name under which the host registers this credential type.
pub const CREDENTIAL_TYPE: &str = "haloPsaApi";

pub const HEADER_TENANT: &str = "X-Tenant";
pub const HEADER_CLIENT_ID: &str = "X-HaloPSA-ClientId";
pub const HEADER_CLIENT_SECRET: &str = "X-HaloPSA-ClientSecret";

/// Serialize `SecretString` as a plain string.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Connection details for one Halo PSA instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HaloPsaCredentials {
    /// Instance URL, e.g. `https://acme.halopsa.com/api`.
    pub base_url: String,
    /// Part of the credential schema; no request header carries it.
    #[serde(with = "secret_string")]
    pub api_key: SecretString,
    pub client_id: String,
    #[serde(with = "secret_string")]
    pub client_secret: SecretString,
    /// Optional tenant; `X-Tenant` is only sent when this is non-empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant: Option<String>,
}

impl HaloPsaCredentials {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        let api_key: String = api_key.into();
        let client_secret: String = client_secret.into();
        Self {
            base_url: base_url.into(),
            api_key: SecretString::new(api_key.into()),
            client_id: client_id.into(),
            client_secret: SecretString::new(client_secret.into()),
            tenant: None,
        }
    }

    pub fn with_tenant(mut self, tenant: impl Into<String>) -> Self {
        self.tenant = Some(tenant.into());
        self
    }

    /// Parse the record the host supplied.
    ///
    /// # Errors
    /// [`NodeError::Configuration`] if a required field is missing or the
    /// base URL is blank.
    pub fn from_value(value: &Value) -> Result<Self, NodeError> {
        let creds: Self = serde_json::from_value(value.clone()).map_err(|e| {
            NodeError::Configuration(format!("malformed '{CREDENTIAL_TYPE}' credentials: {e}"))
        })?;

        if creds.base_url.trim().is_empty() {
            return Err(NodeError::Configuration(format!(
                "'{CREDENTIAL_TYPE}' credentials have an empty baseUrl"
            )));
        }
        Ok(creds)
    }

    /// The credential record as the host stores it.
    ///
    /// # Errors
    /// [`NodeError::Configuration`] if the record cannot be serialised.
    pub fn to_value(&self) -> Result<Value, NodeError> {
        serde_json::to_value(self).map_err(|e| {
            NodeError::Configuration(format!("cannot encode '{CREDENTIAL_TYPE}' credentials: {e}"))
        })
    }

    /// Base URL without a trailing slash, ready for `{base}{endpoint}`.
    pub fn base_url(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }

    /// The tenant, if one is configured and non-blank.
    pub fn tenant(&self) -> Option<&str> {
        self.tenant
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    /// Identification headers sent with every request.
    pub fn identity_headers(&self) -> Vec<(String, String)> {
        let mut headers = Vec::with_capacity(3);
        if let Some(tenant) = self.tenant() {
            headers.push((HEADER_TENANT.to_owned(), tenant.to_owned()));
        }
        headers.push((HEADER_CLIENT_ID.to_owned(), self.client_id.clone()));
        headers.push((
            HEADER_CLIENT_SECRET.to_owned(),
            self.client_secret.expose_secret().to_owned(),
        ));
        headers
    }
}
