//! GPU catalog: the working set of admitted records.
//!
//! The built-in table is annotated once at startup (brand from its group,
//! mobile flag from `classify_mobile` unless the row pins a form factor).
//! External catalogs are merged after it; names stay unique.

pub mod loader;
pub mod mobile;
pub mod table;

pub use loader::{
    admit_record, load_catalog_file, parse_catalog_json, validate_record, CatalogEntry,
    ExternalCatalog,
};
pub use mobile::classify_mobile;
pub use table::{TableEntry, DATA_UPDATED};

use crate::error::CatalogError;
use crate::models::{Brand, FormFactor, GpuRecord, Scores};
use std::collections::HashSet;
use std::path::Path;

/// Build a record from a catalog row, deriving the mobile flag.
pub fn annotate(brand: Brand, name: &str, scores: Scores, form_factor: Option<FormFactor>) -> GpuRecord {
    let mobile = match form_factor {
        Some(kind) => kind == FormFactor::Mobile,
        None => classify_mobile(name),
    };
    GpuRecord::new(name, brand, mobile, scores)
}

/// Rows of the built-in table for one brand.
pub fn builtin_entries(brand: Brand) -> &'static [TableEntry] {
    match brand {
        Brand::Nvidia => table::NVIDIA,
        Brand::Amd => table::AMD,
        Brand::Intel => table::INTEL,
    }
}

/// Outcome of merging an external catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    pub added: usize,
    pub duplicates: Vec<String>,
    pub rejected: usize,
}

/// Ordered, name-unique set of GPU records.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<GpuRecord>,
    names: HashSet<String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog holding the compiled-in table, brand groups in order.
    pub fn builtin() -> Self {
        let mut catalog = Catalog::new();
        for brand in Brand::ALL {
            for entry in builtin_entries(brand) {
                let record = annotate(brand, entry.name, entry.scores, entry.form_factor);
                if !catalog.insert(record) {
                    log::warn!("[Catalog] Duplicate built-in entry ignored: {}", entry.name);
                }
            }
        }
        log::info!("[Catalog] Built-in catalog loaded: {} records", catalog.len());
        catalog
    }

    /// Insert a record unless its name is already present.
    pub fn insert(&mut self, record: GpuRecord) -> bool {
        if !self.names.insert(record.name.clone()) {
            return false;
        }
        self.records.push(record);
        true
    }

    /// Append the admitted rows of an external catalog.
    pub fn merge(&mut self, external: ExternalCatalog) -> MergeReport {
        let mut report = MergeReport {
            rejected: external.rejected.len(),
            ..MergeReport::default()
        };

        for (brand, entry) in external.entries {
            let record = annotate(brand, &entry.name, entry.scores, entry.form_factor);
            if self.insert(record) {
                report.added += 1;
            } else {
                log::warn!("[Catalog] Duplicate record skipped: {}", entry.name);
                report.duplicates.push(entry.name);
            }
        }

        log::info!(
            "[Catalog] Merged external catalog: {} added, {} duplicates, {} rejected",
            report.added,
            report.duplicates.len(),
            report.rejected
        );
        report
    }

    /// Built-in catalog plus an optional external file.
    ///
    /// The built-in table is always available. A missing or malformed
    /// external file is logged and handed back so the caller can surface it.
    pub fn load(extra: Option<&Path>) -> (Self, Option<CatalogError>) {
        let mut catalog = Catalog::builtin();
        let Some(path) = extra else {
            return (catalog, None);
        };

        match load_catalog_file(path) {
            Ok(external) => {
                catalog.merge(external);
                (catalog, None)
            }
            Err(e) => {
                log::warn!("[Catalog] Ignoring external catalog {}: {}", path.display(), e);
                (catalog, Some(e))
            }
        }
    }

    pub fn records(&self) -> &[GpuRecord] {
        &self.records
    }

    pub fn get(&self, name: &str) -> Option<&GpuRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
