//! `SearchReport`: per-leg counters with a canonical JSON digest.
//!
//! Canonical form: sorted object keys, compact separators, integers only.
//! `serde_json::Value` objects are `BTreeMap`-backed (the `preserve_order`
//! feature is not enabled anywhere in the workspace), so `to_vec` already
//! emits sorted keys.

use sha2::{Digest, Sha256};

use crate::contract::Cost;
use crate::objective::ObjectiveKind;

/// Digest algorithm tag used in `"algorithm:hex"` strings.
pub const DIGEST_ALGORITHM: &str = "sha256";

/// What one successful search call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub objective: ObjectiveKind,
    /// Nodes popped and expanded (the terminal pop is not counted).
    pub total_expansions: u64,
    /// Transitions returned by the problem across all expansions.
    pub total_candidates_generated: u64,
    /// Candidates dropped because their state was explored or queued.
    pub total_duplicates_suppressed: u64,
    /// Candidates dropped by the `max_depth` cutoff.
    pub total_depth_skipped: u64,
    /// Nodes in the search tree, root included.
    pub nodes_created: u64,
    pub frontier_high_water: u64,
    pub path_len: u64,
    pub path_cost: Cost,
}

impl SearchReport {
    /// Convert to a `serde_json::Value` for canonical serialization.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "frontier_high_water": self.frontier_high_water,
            "nodes_created": self.nodes_created,
            "objective": self.objective.as_str(),
            "path_cost": self.path_cost,
            "path_len": self.path_len,
            "total_candidates_generated": self.total_candidates_generated,
            "total_depth_skipped": self.total_depth_skipped,
            "total_duplicates_suppressed": self.total_duplicates_suppressed,
            "total_expansions": self.total_expansions,
        })
    }

    /// Canonical JSON bytes of the report.
    #[must_use]
    pub fn to_canonical_json_bytes(&self) -> Vec<u8> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// `sha256:<hex>` of the canonical bytes.
    #[must_use]
    pub fn digest(&self) -> String {
        content_digest(&self.to_canonical_json_bytes())
    }
}

/// Compact JSON bytes with sorted keys.
#[must_use]
pub fn canonical_json_bytes(value: &serde_json::Value) -> Vec<u8> {
    // Serialising a `Value` cannot fail: keys are strings and there is no
    // custom `Serialize` impl that could error.
    serde_json::to_vec(value).unwrap_or_default()
}

/// `sha256:<hex>` digest of `bytes`.
#[must_use]
pub fn content_digest(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("{DIGEST_ALGORITHM}:{}", hex::encode(digest))
}
