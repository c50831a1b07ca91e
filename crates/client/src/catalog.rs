//! Service-catalog endpoint resolution.
//!
//! Scans the catalog returned with a token for the object-store service and
//! picks out the URLs of the configured region. Pure data transformation;
//! no HTTP here.

use crate::models::CatalogEntry;

/// Catalog service name for Swift object storage.
const OBJECT_STORE_NAME: &str = "swift";
/// Catalog service type for Swift object storage.
const OBJECT_STORE_TYPE: &str = "object-store";

const INTERFACE_PUBLIC: &str = "public";
const INTERFACE_INTERNAL: &str = "internal";

/// Object-store URLs resolved for one region.
///
/// Either URL may be absent when the catalog carries no endpoint of that
/// interface for the region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedEndpoints {
    pub public_url: Option<String>,
    pub internal_url: Option<String>,
}

/// Resolve the `swift`/`object-store` endpoints for `preferred_region`.
///
/// Every matching catalog entry feeds the same search. Region comparison is
/// exact and case-sensitive. When several endpoints in the region share an
/// interface, the last one in catalog order wins.
pub fn resolve_object_store(
    catalog: &[CatalogEntry],
    preferred_region: &str,
) -> ResolvedEndpoints {
    let mut resolved = ResolvedEndpoints::default();
    for entry in catalog {
        if entry.name != OBJECT_STORE_NAME || entry.service_type != OBJECT_STORE_TYPE {
            continue;
        }
        for endpoint in &entry.endpoints {
            if endpoint.region.as_deref() != Some(preferred_region) {
                continue;
            }
            match endpoint.interface.as_deref() {
                Some(INTERFACE_PUBLIC) => resolved.public_url = Some(endpoint.url.clone()),
                Some(INTERFACE_INTERNAL) => resolved.internal_url = Some(endpoint.url.clone()),
                _ => {}
            }
        }
    }
    resolved
}
