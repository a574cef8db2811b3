use std::path::Path;

use alloydb::{AlloyFamily, Parser};
use alloydb_data::{AlloyRecord, ElementShareRecord, VersionRecord};
use anyhow::{Context, Result, bail};
use tracing::warn;

pub fn parse_version(path: &Path) -> Result<Vec<VersionRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let mut records = Vec::new();
    for line in content.lines() {
        if line.starts_with('#') || line.trim().len() < 3 {
            continue;
        }
        let parts: Vec<&str> = line.splitn(3, "//").collect();
        if parts.len() == 3 {
            records.push(VersionRecord {
                tag: parts[0].trim().to_string(),
                date: parts[1].trim().to_string(),
                notes: parts[2].trim().to_string(),
            });
        }
    }
    Ok(records)
}

/// Parse `alloys.txt`: one alloy per line as `family | name | composition`,
/// where the composition column uses the same free-text form users submit.
pub fn parse_alloys(path: &Path) -> Result<Vec<AlloyRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let parser = Parser::new();
    let mut records = Vec::new();

    for (lineno, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.starts_with('#') || line.is_empty() {
            continue;
        }
        let parts: Vec<&str> = line.splitn(3, '|').map(str::trim).collect();
        let &[family, name, composition] = parts.as_slice() else {
            bail!("{}:{}: expected 'family | name | composition'", path.display(), lineno + 1);
        };

        let family: AlloyFamily = family
            .parse()
            .with_context(|| format!("{}:{}", path.display(), lineno + 1))?;
        let parsed = parser.parse(composition);
        if parsed.is_empty() {
            bail!("{}:{}: no composition for '{name}'", path.display(), lineno + 1);
        }
        let expected = composition.split_whitespace().count() / 2;
        if parsed.len() != expected {
            warn!(name, parsed = parsed.len(), expected, "some composition pairs were skipped");
        }

        records.push(AlloyRecord {
            name: name.to_string(),
            family: family.key().to_string(),
            composition: parsed
                .iter()
                .map(|(element, percent)| ElementShareRecord {
                    symbol: element.symbol().to_string(),
                    percent,
                })
                .collect(),
        });
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloydb::Catalog;

    fn sources() -> std::path::PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .parent()
            .unwrap()
            .join("data_sources")
    }

    #[test]
    fn test_alloys_txt_matches_builtin_catalog() {
        let records = parse_alloys(&sources().join("alloys.txt")).unwrap();
        let loaded = Catalog::from_record(alloydb_data::CatalogRecord {
            version: Vec::new(),
            alloys: records,
        })
        .unwrap();
        assert_eq!(loaded.alloys(), Catalog::builtin().alloys());
    }

    #[test]
    fn test_version_dat() {
        let version = parse_version(&sources().join("Version.dat")).unwrap();
        assert_eq!(version.len(), 1);
        assert_eq!(version[0].tag, "1.0");
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(parse_alloys(&sources().join("missing.txt")).is_err());
    }
}
