use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// One order line, flattened from an upstream package item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Product code
    pub sku: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub reference: String,
    pub quantity: i64,
}

/// Upstream order body. Only `packages` is consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct Order {
    #[serde(default)]
    pub uuid: Option<Uuid>,
    pub packages: Vec<PackageRef>,
}

impl Order {
    /// Package identifiers in the order upstream listed them.
    pub fn package_ids(&self) -> Vec<Uuid> {
        self.packages.iter().map(|package| package.uuid).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PackageRef {
    pub uuid: Uuid,
}

/// Upstream package item record.
///
/// `product.code` and `quantity` are required; a record without them fails
/// to decode.
#[derive(Debug, Clone, Deserialize)]
pub struct PackageItemRecord {
    pub product: ProductRecord,
    pub quantity: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductRecord {
    pub code: String,
    // Option so that an explicit `null` also falls back to "".
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub reference: Option<String>,
}

impl From<PackageItemRecord> for Item {
    fn from(record: PackageItemRecord) -> Self {
        let ProductRecord {
            code,
            description,
            image_url,
            reference,
        } = record.product;

        Self {
            sku: code,
            description: description.unwrap_or_default(),
            image_url: image_url.unwrap_or_default(),
            reference: reference.unwrap_or_default(),
            quantity: record.quantity,
        }
    }
}
