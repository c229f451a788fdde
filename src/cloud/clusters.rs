//! Clusters of the caller's account

use super::client::CloudClient;
use super::decode::{null_as_default, unwrap_items, ListItem};
use super::error::{ApiError, Result};
use serde::{Deserialize, Serialize};

/// Path listing the clusters of an account
pub fn clusters_path(account_id: i64) -> String {
    format!("/account/{}/cluster", account_id)
}

/// One datacenter of a cluster
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataCenter {
    #[serde(rename = "ID", deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(rename = "ClusterID", deserialize_with = "null_as_default")]
    pub cluster_id: i64,
    #[serde(rename = "CloudProviderID", deserialize_with = "null_as_default")]
    pub cloud_provider_id: i64,
    #[serde(rename = "CloudProviderRegionID", deserialize_with = "null_as_default")]
    pub cloud_provider_region_id: i64,
    #[serde(rename = "ReplicationFactor", deserialize_with = "null_as_default")]
    pub replication_factor: i64,
    #[serde(rename = "IPv4CIDR", deserialize_with = "null_as_default")]
    pub ipv4_cidr: String,
    #[serde(rename = "AccountCloudProviderCredentialID", deserialize_with = "null_as_default")]
    pub account_cloud_provider_credential_id: i64,
    #[serde(rename = "Status", deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(rename = "Name", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "ManagementNetwork", deserialize_with = "null_as_default")]
    pub management_network: String,
    #[serde(rename = "InstanceTypeID", deserialize_with = "null_as_default")]
    pub instance_type_id: i64,
    #[serde(rename = "ClientConnection", deserialize_with = "null_as_default")]
    pub client_connection: Vec<String>,
}

/// Free tier details of a trial cluster
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FreeTier {
    #[serde(rename = "ExpirationDate", deserialize_with = "null_as_default")]
    pub expiration_date: String,
    #[serde(rename = "ExpirationSeconds", deserialize_with = "null_as_default")]
    pub expiration_seconds: i64,
    #[serde(rename = "CreationTime", deserialize_with = "null_as_default")]
    pub creation_time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cluster {
    #[serde(rename = "ID", deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(rename = "Name", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "ClusterNameOnConfigFile", deserialize_with = "null_as_default")]
    pub cluster_name_on_config_file: String,
    #[serde(rename = "Status", deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(rename = "CloudProviderID", deserialize_with = "null_as_default")]
    pub cloud_provider_id: i64,
    #[serde(rename = "ReplicationFactor", deserialize_with = "null_as_default")]
    pub replication_factor: i64,
    #[serde(rename = "BroadcastType", deserialize_with = "null_as_default")]
    pub broadcast_type: String,
    #[serde(rename = "ScyllaVersionID", deserialize_with = "null_as_default")]
    pub scylla_version_id: i64,
    #[serde(rename = "ScyllaVersion", deserialize_with = "null_as_default")]
    pub scylla_version: String,
    #[serde(rename = "DC", deserialize_with = "null_as_default")]
    pub dc: Vec<DataCenter>,
    #[serde(rename = "GrafanaURL", deserialize_with = "null_as_default")]
    pub grafana_url: String,
    #[serde(rename = "GrafanaRootURL", deserialize_with = "null_as_default")]
    pub grafana_root_url: String,
    #[serde(rename = "BackofficeGrafanaURL", deserialize_with = "null_as_default")]
    pub backoffice_grafana_url: String,
    #[serde(rename = "BackofficePrometheusURL", deserialize_with = "null_as_default")]
    pub backoffice_prometheus_url: String,
    #[serde(rename = "BackofficeAlertManagerURL", deserialize_with = "null_as_default")]
    pub backoffice_alert_manager_url: String,
    #[serde(rename = "FreeTier", deserialize_with = "null_as_default")]
    pub free_tier: FreeTier,
    #[serde(rename = "EncryptionMode", deserialize_with = "null_as_default")]
    pub encryption_mode: String,
    #[serde(rename = "UserAPIInterface", deserialize_with = "null_as_default")]
    pub user_api_interface: String,
    #[serde(rename = "PricingModel", deserialize_with = "null_as_default")]
    pub pricing_model: i64,
    #[serde(rename = "MaxAllowedCidrRange", deserialize_with = "null_as_default")]
    pub max_allowed_cidr_range: i64,
    #[serde(rename = "CreatedAt", deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(rename = "DNS", deserialize_with = "null_as_default")]
    pub dns: bool,
    #[serde(rename = "PromProxyEnabled", deserialize_with = "null_as_default")]
    pub prom_proxy_enabled: bool,
}

impl CloudClient {
    /// List the clusters of the caller's account
    ///
    /// Fails with [`ApiError::Item`] if any entry of the response carries an
    /// error; no clusters are returned in that case.
    pub async fn list_clusters(&self) -> Result<Vec<Cluster>> {
        let path = clusters_path(self.account_id());
        let items: Vec<ListItem<Cluster>> = self.http().get(&path).await?;

        unwrap_items(items).map_err(|failure| ApiError::Item {
            url: self.http().url(&path),
            index: failure.index,
            payload: failure.payload,
        })
    }
}
