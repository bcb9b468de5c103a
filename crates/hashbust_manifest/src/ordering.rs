//! Processing order for manifest entries.

use crate::manifest::{Manifest, ManifestEntry};

/// Returns the manifest entries sorted by key in descending lexicographic order.
///
/// Replacing in this order lets a key that extends a shorter key (for example
/// `/a/app.vendor.js` next to `/a/app.js`) be rewritten before the shorter one
/// gets a chance to match inside it. Ties are broken purely by string order,
/// never by length.
pub fn resolve_order(manifest: &Manifest) -> Vec<ManifestEntry> {
    let mut entries: Vec<ManifestEntry> = manifest
        .iter()
        .map(|(original, hashed)| ManifestEntry::new(original, hashed))
        .collect();
    entries.sort_by(|a, b| a.original.cmp(&b.original));
    entries.reverse();
    entries
}
