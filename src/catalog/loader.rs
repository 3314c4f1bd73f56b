//! External catalog loader and record admission checks.

use crate::error::{CatalogError, ValidationError};
use crate::models::{Brand, FormFactor, ScoreType, Scores};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// A validated catalog row from an external source.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub name: String,
    pub scores: Scores,
    /// Pinned form factor from the row's `type` field
    pub form_factor: Option<FormFactor>,
}

/// Result of parsing an external catalog: admitted rows plus the rejects.
#[derive(Debug, Default)]
pub struct ExternalCatalog {
    pub entries: Vec<(Brand, CatalogEntry)>,
    /// (row label, reason) for every row or section that was skipped
    pub rejected: Vec<(String, ValidationError)>,
}

/// Structural admission check for an externally supplied record.
///
/// The record must be an object with a non-empty string `name` and every
/// score field present as a non-negative whole number (`10984` and `10984.0`
/// are both accepted). An optional `type` must be `desktop` or `mobile`.
pub fn validate_record(record: &Value) -> Result<(), ValidationError> {
    admit_record(record).map(|_| ())
}

fn parse_score(field: &str, value: &Value) -> Result<u32, ValidationError> {
    let number = match value {
        Value::Number(n) => n,
        _ => return Err(ValidationError::NonNumericScore(field.to_string())),
    };

    if let Some(v) = number.as_u64() {
        return u32::try_from(v).map_err(|_| ValidationError::ScoreOutOfRange(field.to_string()));
    }

    match number.as_f64() {
        Some(v) if v < 0.0 => Err(ValidationError::NegativeScore(field.to_string())),
        Some(v) if !v.is_finite() || v.fract() != 0.0 => {
            Err(ValidationError::NonIntegerScore(field.to_string()))
        }
        Some(v) if v > f64::from(u32::MAX) => {
            Err(ValidationError::ScoreOutOfRange(field.to_string()))
        }
        Some(v) => Ok(v as u32),
        None => Err(ValidationError::NonNumericScore(field.to_string())),
    }
}

/// Validate one raw row and convert it into a `CatalogEntry`.
pub fn admit_record(record: &Value) -> Result<CatalogEntry, ValidationError> {
    let obj = record.as_object().ok_or(ValidationError::NotAnObject)?;

    let name = match obj.get("name") {
        Some(Value::String(name)) if name.is_empty() => return Err(ValidationError::EmptyName),
        Some(Value::String(name)) => name.clone(),
        _ => return Err(ValidationError::MissingName),
    };

    let mut values = [0u32; 4];
    for (slot, score_type) in values.iter_mut().zip(ScoreType::ALL) {
        let field = score_type.id();
        let value = obj
            .get(field)
            .ok_or_else(|| ValidationError::MissingScore(field.to_string()))?;
        *slot = parse_score(field, value)?;
    }
    let [time_spy, time_spy_extreme, port_royal, steel_nomad] = values;

    let form_factor = match obj.get("type") {
        Some(kind) => Some(
            kind.as_str()
                .ok_or_else(|| ValidationError::UnknownFormFactor(kind.to_string()))?
                .parse::<FormFactor>()?,
        ),
        None => None,
    };

    Ok(CatalogEntry {
        name,
        scores: Scores::new(time_spy, time_spy_extreme, port_royal, steel_nomad),
        form_factor,
    })
}

/// Parse a brand-grouped catalog document.
///
/// Rows failing admission and sections under an unknown brand are logged and
/// collected in `rejected`; only a malformed document shape is an error.
pub fn parse_catalog_json(content: &str) -> Result<ExternalCatalog, CatalogError> {
    let root: Value = serde_json::from_str(content)?;
    let sections: &Map<String, Value> = root.as_object().ok_or(CatalogError::InvalidLayout)?;

    let mut catalog = ExternalCatalog::default();

    for (brand_key, rows) in sections {
        let brand = match brand_key.parse::<Brand>() {
            Ok(brand) => brand,
            Err(e) => {
                log::warn!("[Catalog] Skipping section '{}': {}", brand_key, e);
                catalog.rejected.push((brand_key.clone(), e));
                continue;
            }
        };

        let rows = rows
            .as_array()
            .ok_or_else(|| CatalogError::InvalidBrandSection(brand_key.clone()))?;

        for (idx, row) in rows.iter().enumerate() {
            match admit_record(row) {
                Ok(entry) => catalog.entries.push((brand, entry)),
                Err(e) => {
                    let label = row
                        .get("name")
                        .and_then(Value::as_str)
                        .map(str::to_string)
                        .unwrap_or_else(|| format!("{}[{}]", brand_key, idx));
                    log::warn!("[Catalog] Rejected record {}: {}", label, e);
                    catalog.rejected.push((label, e));
                }
            }
        }
    }

    log::debug!(
        "[Catalog] Parsed external catalog: {} admitted, {} rejected",
        catalog.entries.len(),
        catalog.rejected.len()
    );
    Ok(catalog)
}

/// Load an external catalog from a `.json` file.
pub fn load_catalog_file(path: &Path) -> Result<ExternalCatalog, CatalogError> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CatalogError::FileNotFound(path.display().to_string())
        } else {
            CatalogError::IoError(e)
        }
    })?;

    parse_catalog_json(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_row() -> Value {
        json!({"name": "RX 7600", "timeSpy": 10984, "timeSpyEx": 5228, "portRoyal": 5651, "steelNomad": 2290})
    }

    #[test]
    fn test_valid_record_passes() {
        assert_eq!(validate_record(&valid_row()), Ok(()));
    }

    #[test]
    fn test_zero_scores_are_valid() {
        let row = json!({"name": "GT 1030", "timeSpy": 0, "timeSpyEx": 0, "portRoyal": 0, "steelNomad": 0});
        assert!(validate_record(&row).is_ok());
    }

    #[test]
    fn test_missing_name_rejected() {
        let mut row = valid_row();
        row.as_object_mut().unwrap().remove("name");
        assert_eq!(validate_record(&row), Err(ValidationError::MissingName));

        row["name"] = json!(42);
        assert_eq!(validate_record(&row), Err(ValidationError::MissingName));

        row["name"] = json!("");
        assert_eq!(validate_record(&row), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_bad_scores_rejected() {
        let mut row = valid_row();
        row.as_object_mut().unwrap().remove("portRoyal");
        assert_eq!(
            validate_record(&row),
            Err(ValidationError::MissingScore("portRoyal".to_string()))
        );

        row["portRoyal"] = json!("5651");
        assert_eq!(
            validate_record(&row),
            Err(ValidationError::NonNumericScore("portRoyal".to_string()))
        );

        row["portRoyal"] = json!(-1);
        assert_eq!(
            validate_record(&row),
            Err(ValidationError::NegativeScore("portRoyal".to_string()))
        );

        row["portRoyal"] = json!(12.5);
        assert_eq!(
            validate_record(&row),
            Err(ValidationError::NonIntegerScore("portRoyal".to_string()))
        );

        row["portRoyal"] = json!(5_000_000_000u64);
        assert_eq!(
            validate_record(&row),
            Err(ValidationError::ScoreOutOfRange("portRoyal".to_string()))
        );
    }

    #[test]
    fn test_whole_float_scores_admitted() {
        let mut row = valid_row();
        row["timeSpy"] = json!(10984.0);
        row["portRoyal"] = json!(1e3);
        assert_eq!(validate_record(&row), Ok(()));

        let entry = admit_record(&row).unwrap();
        assert_eq!(entry.scores.time_spy, 10984);
        assert_eq!(entry.scores.port_royal, 1000);

        let catalog = parse_catalog_json(
            r#"{"amd": [{"name": "RX 7600", "timeSpy": 10984.0, "timeSpyEx": 5228, "portRoyal": 5651, "steelNomad": 2290}]}"#,
        )
        .unwrap();
        assert!(catalog.rejected.is_empty());
        assert_eq!(catalog.entries[0].1.scores.time_spy, 10984);
    }

    #[test]
    fn test_non_object_rejected() {
        assert_eq!(validate_record(&json!(null)), Err(ValidationError::NotAnObject));
        assert_eq!(validate_record(&json!([1, 2])), Err(ValidationError::NotAnObject));
    }

    #[test]
    fn test_form_factor_override_parsed() {
        let mut row = valid_row();
        row["type"] = json!("mobile");
        let entry = admit_record(&row).unwrap();
        assert_eq!(entry.form_factor, Some(FormFactor::Mobile));
        assert_eq!(entry.scores.time_spy, 10984);

        row["type"] = json!("tablet");
        assert_eq!(
            admit_record(&row),
            Err(ValidationError::UnknownFormFactor("tablet".to_string()))
        );
    }

    #[test]
    fn test_parse_catalog_collects_rejects() {
        let doc = r#"{
            "amd": [
                {"name": "RX 7600", "timeSpy": 10984, "timeSpyEx": 5228, "portRoyal": 5651, "steelNomad": 2290},
                {"name": "RX broken", "timeSpy": 1}
            ],
            "matrox": []
        }"#;
        let parsed = parse_catalog_json(doc).unwrap();
        assert_eq!(parsed.entries.len(), 1);
        assert_eq!(parsed.entries[0].0, Brand::Amd);
        assert_eq!(parsed.rejected.len(), 2);
    }

    #[test]
    fn test_parse_catalog_rejects_bad_layout() {
        assert!(matches!(parse_catalog_json("[]"), Err(CatalogError::InvalidLayout)));
        assert!(matches!(
            parse_catalog_json(r#"{"intel": {}}"#),
            Err(CatalogError::InvalidBrandSection(_))
        ));
        assert!(matches!(parse_catalog_json("{"), Err(CatalogError::InvalidJson(_))));
    }
}
