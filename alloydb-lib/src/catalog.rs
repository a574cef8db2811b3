use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog_db::ALLOYS;
use crate::composition::Composition;
use crate::error::{AlloyDbError, Result};

/// Grouping of reference alloys, used when listing the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlloyFamily {
    Copper,
    Brass,
    Bronze,
    CopperNickel,
    Aluminum,
    Titanium,
    Steel,
    StainlessSteel,
    Precious,
}

pub const FAMILIES: &[AlloyFamily] = &[
    AlloyFamily::Copper,
    AlloyFamily::Brass,
    AlloyFamily::Bronze,
    AlloyFamily::CopperNickel,
    AlloyFamily::Aluminum,
    AlloyFamily::Titanium,
    AlloyFamily::Steel,
    AlloyFamily::StainlessSteel,
    AlloyFamily::Precious,
];

impl AlloyFamily {
    /// Lowercase key used in packed catalogs and `alloys.txt`.
    pub fn key(self) -> &'static str {
        match self {
            Self::Copper => "copper",
            Self::Brass => "brass",
            Self::Bronze => "bronze",
            Self::CopperNickel => "copper-nickel",
            Self::Aluminum => "aluminum",
            Self::Titanium => "titanium",
            Self::Steel => "steel",
            Self::StainlessSteel => "stainless-steel",
            Self::Precious => "precious",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Copper => "Copper",
            Self::Brass => "Brasses",
            Self::Bronze => "Bronzes",
            Self::CopperNickel => "Copper-nickel alloys",
            Self::Aluminum => "Aluminum alloys",
            Self::Titanium => "Titanium alloys",
            Self::Steel => "Steels",
            Self::StainlessSteel => "Stainless steels",
            Self::Precious => "Precious metal alloys",
        }
    }
}

impl fmt::Display for AlloyFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for AlloyFamily {
    type Err = AlloyDbError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_lowercase();
        FAMILIES
            .iter()
            .copied()
            .find(|f| f.key() == lower)
            .ok_or_else(|| AlloyDbError::UnknownFamily(s.to_string()))
    }
}

/// A named reference alloy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceAlloy {
    name: String,
    family: AlloyFamily,
    composition: Composition,
}

impl ReferenceAlloy {
    pub fn new(name: impl Into<String>, family: AlloyFamily, composition: Composition) -> Self {
        ReferenceAlloy {
            name: name.into(),
            family,
            composition,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn family(&self) -> AlloyFamily {
        self.family
    }

    pub fn composition(&self) -> &Composition {
        &self.composition
    }
}

/// Ordered, non-empty, read-only set of reference alloys.
#[derive(Debug, Clone)]
pub struct Catalog {
    alloys: Vec<ReferenceAlloy>,
}

impl Catalog {
    /// Build a catalog from caller-supplied alloys.
    ///
    /// Fails if the list is empty, an alloy has no elements, or a
    /// percentage is negative or not finite.
    pub fn new(alloys: Vec<ReferenceAlloy>) -> Result<Self> {
        if alloys.is_empty() {
            return Err(AlloyDbError::EmptyCatalog);
        }
        for alloy in &alloys {
            validate(alloy)?;
        }
        Ok(Catalog { alloys })
    }

    /// The embedded reference table.
    pub fn builtin() -> Self {
        let alloys = ALLOYS
            .iter()
            .map(|&(name, family, shares)| {
                ReferenceAlloy::new(name, family, shares.iter().copied().collect())
            })
            .collect();
        Catalog { alloys }
    }

    /// Load a catalog packed by `alloydb-generate` (postcard, zstd compressed).
    #[cfg(feature = "packed")]
    pub fn from_compressed(bytes: &[u8]) -> Result<Self> {
        let mut decoder = ruzstd::decoding::StreamingDecoder::new(bytes)
            .map_err(|e| AlloyDbError::DataError(format!("zstd: {e:?}")))?;
        let mut decompressed = Vec::new();
        std::io::Read::read_to_end(&mut decoder, &mut decompressed)
            .map_err(|e| AlloyDbError::DataError(format!("zstd: {e}")))?;

        let record: alloydb_data::CatalogRecord = postcard::from_bytes(&decompressed)
            .map_err(|e| AlloyDbError::DataError(format!("postcard: {e}")))?;
        Self::from_record(record)
    }

    /// Convert a deserialized catalog record, validating every entry.
    pub fn from_record(record: alloydb_data::CatalogRecord) -> Result<Self> {
        let mut alloys = Vec::with_capacity(record.alloys.len());
        for a in record.alloys {
            let family: AlloyFamily = a.family.parse()?;
            let mut composition = Composition::new();
            for share in &a.composition {
                composition.insert(share.symbol.parse()?, share.percent);
            }
            alloys.push(ReferenceAlloy::new(a.name, family, composition));
        }
        if let Some(v) = record.version.last() {
            debug!(tag = %v.tag, date = %v.date, alloys = alloys.len(), "loaded packed catalog");
        }
        Self::new(alloys)
    }

    /// Convert to the packed record layout.
    pub fn to_record(&self) -> alloydb_data::CatalogRecord {
        alloydb_data::CatalogRecord {
            version: Vec::new(),
            alloys: self
                .alloys
                .iter()
                .map(|a| alloydb_data::AlloyRecord {
                    name: a.name.clone(),
                    family: a.family.key().to_string(),
                    composition: a
                        .composition
                        .iter()
                        .map(|(e, p)| alloydb_data::ElementShareRecord {
                            symbol: e.symbol().to_string(),
                            percent: p,
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    pub fn alloys(&self) -> &[ReferenceAlloy] {
        &self.alloys
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReferenceAlloy> {
        self.alloys.iter()
    }

    pub fn len(&self) -> usize {
        self.alloys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alloys.is_empty()
    }

    /// Find an alloy by name (case-insensitive).
    pub fn find(&self, name: &str) -> Option<&ReferenceAlloy> {
        let lower = name.trim().to_lowercase();
        self.alloys.iter().find(|a| a.name.to_lowercase() == lower)
    }

    pub fn by_family(&self, family: AlloyFamily) -> impl Iterator<Item = &ReferenceAlloy> {
        self.alloys.iter().filter(move |a| a.family == family)
    }

    /// Alloy names grouped by family, in family order, skipping empty groups.
    pub fn families(&self) -> Vec<(AlloyFamily, Vec<&str>)> {
        FAMILIES
            .iter()
            .filter_map(|&family| {
                let names: Vec<&str> = self.by_family(family).map(|a| a.name()).collect();
                (!names.is_empty()).then_some((family, names))
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ReferenceAlloy;
    type IntoIter = std::slice::Iter<'a, ReferenceAlloy>;

    fn into_iter(self) -> Self::IntoIter {
        self.alloys.iter()
    }
}

fn validate(alloy: &ReferenceAlloy) -> Result<()> {
    if alloy.composition.is_empty() {
        return Err(AlloyDbError::EmptyComposition(alloy.name.clone()));
    }
    for (element, percent) in alloy.composition.iter() {
        if !percent.is_finite() || percent < 0.0 {
            return Err(AlloyDbError::InvalidPercent {
                alloy: alloy.name.clone(),
                element: element.symbol().to_string(),
                percent,
            });
        }
    }
    Ok(())
}
