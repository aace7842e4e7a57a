//! Partner catalog lookup

use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{CatalogError, Result};

/// Bundled partner dataset, embedded at compile time
const BUNDLED_PARTNERS: &str = include_str!("data/partners.json");

static BUNDLED_CATALOG: LazyLock<Arc<PartnerCatalog>> = LazyLock::new(|| {
    let catalog =
        PartnerCatalog::from_json(BUNDLED_PARTNERS).expect("bundled partner catalog is valid");
    Arc::new(catalog)
});

/// A partner and the integration scopes it depends on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerRecord {
    /// Partner display name
    pub name: String,
    /// Integration scopes the partner uses
    #[serde(default)]
    pub scopes: Vec<String>,
}

/// On-disk catalog shape: `{"partners": [{"name", "scopes"}]}`
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    partners: Vec<PartnerRecord>,
}

/// Read-only catalog mapping partners to the scopes they consume.
///
/// Immutable after load; lookups never mutate.
#[derive(Debug, Clone, Default)]
pub struct PartnerCatalog {
    partners: Vec<PartnerRecord>,
}

impl PartnerCatalog {
    /// Build a catalog from records
    pub fn new(partners: Vec<PartnerRecord>) -> Self {
        Self { partners }
    }

    /// Parse a catalog from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Ok(Self::new(file.partners))
    }

    /// Load a catalog from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CatalogError::NotFound(path.to_path_buf()));
        }
        info!(path = %path.display(), "loading partner catalog");
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Process-wide bundled catalog, parsed once on first use
    pub fn bundled() -> Arc<PartnerCatalog> {
        Arc::clone(&BUNDLED_CATALOG)
    }

    /// Partners in catalog order
    pub fn partners(&self) -> &[PartnerRecord] {
        &self.partners
    }

    /// Number of partners in the catalog
    pub fn len(&self) -> usize {
        self.partners.len()
    }

    /// Whether the catalog holds no partners
    pub fn is_empty(&self) -> bool {
        self.partners.is_empty()
    }

    /// Names of partners whose scopes intersect `scopes`, in catalog order.
    ///
    /// Both sides are trimmed and lowercased before comparison; blank
    /// entries never match. An empty query returns an empty result without
    /// scanning the catalog.
    pub fn impacted_partners_for_scopes(&self, scopes: &[String]) -> Vec<String> {
        if scopes.is_empty() {
            return Vec::new();
        }

        let query: HashSet<String> = scopes
            .iter()
            .map(|scope| normalize_scope(scope))
            .filter(|scope| !scope.is_empty())
            .collect();

        let impacted: Vec<String> = self
            .partners
            .iter()
            .filter(|partner| {
                partner
                    .scopes
                    .iter()
                    .map(|scope| normalize_scope(scope))
                    .any(|scope| !scope.is_empty() && query.contains(&scope))
            })
            .map(|partner| partner.name.clone())
            .collect();

        debug!(
            query = query.len(),
            impacted = impacted.len(),
            "resolved impacted partners"
        );
        impacted
    }
}

fn normalize_scope(scope: &str) -> String {
    scope.trim().to_lowercase()
}
