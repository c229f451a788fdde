//! Cloud providers and their regions

use super::client::CloudClient;
use super::decode::null_as_default;
use super::error::Result;
use serde::{Deserialize, Serialize};

/// Path listing every supported cloud provider
pub const PROVIDERS_PATH: &str = "/deployment/provider";

/// Path listing the regions of one provider
pub fn regions_path(provider_id: i64) -> String {
    format!("{}/{}/region", PROVIDERS_PATH, provider_id)
}

/// A cloud provider clusters can be deployed on (AWS, GCP, ...)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudProvider {
    #[serde(rename = "ID", deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(rename = "Name", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "RootAccountID", deserialize_with = "null_as_default")]
    pub root_account_id: String,
}

/// A region offered by a cloud provider
///
/// Cost fields are decimal strings as sent by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudProviderRegion {
    #[serde(rename = "ID", deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(rename = "CloudProviderID", deserialize_with = "null_as_default")]
    pub cloud_provider_id: i64,
    #[serde(rename = "Name", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "FullName", deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(rename = "ExternalID", deserialize_with = "null_as_default")]
    pub external_id: String,
    #[serde(rename = "MultiRegionExternalID", deserialize_with = "null_as_default")]
    pub multi_region_external_id: String,
    #[serde(rename = "DCName", deserialize_with = "null_as_default")]
    pub dc_name: String,
    #[serde(rename = "BackupStorageGBCost", deserialize_with = "null_as_default")]
    pub backup_storage_gb_cost: String,
    #[serde(rename = "TrafficSameRegionInGBCost", deserialize_with = "null_as_default")]
    pub traffic_same_region_in_gb_cost: String,
    #[serde(rename = "TrafficSameRegionOutGBCost", deserialize_with = "null_as_default")]
    pub traffic_same_region_out_gb_cost: String,
    #[serde(rename = "TrafficCrossRegionOutGBCost", deserialize_with = "null_as_default")]
    pub traffic_cross_region_out_gb_cost: String,
    #[serde(rename = "TrafficInternetOutGBCost", deserialize_with = "null_as_default")]
    pub traffic_internet_out_gb_cost: String,
    #[serde(rename = "Continent", deserialize_with = "null_as_default")]
    pub continent: String,
}

impl CloudClient {
    /// List all cloud providers
    pub async fn list_cloud_providers(&self) -> Result<Vec<CloudProvider>> {
        self.http().get(PROVIDERS_PATH).await
    }

    /// List the regions of one cloud provider
    pub async fn list_cloud_provider_regions(
        &self,
        provider_id: i64,
    ) -> Result<Vec<CloudProviderRegion>> {
        self.http().get(&regions_path(provider_id)).await
    }
}
