#![cfg(feature = "packed")]

use alloydb::alloydb_data::{AlloyRecord, CatalogRecord, ElementShareRecord, VersionRecord};
use alloydb::{AlloyDb, AlloyDbError, AlloyFamily, Catalog, Element};

fn pack(record: &CatalogRecord) -> Vec<u8> {
    let serialized = postcard::to_allocvec(record).unwrap();
    zstd::encode_all(&serialized[..], 3).unwrap()
}

fn alloy(name: &str, family: &str, shares: &[(&str, f64)]) -> AlloyRecord {
    AlloyRecord {
        name: name.to_string(),
        family: family.to_string(),
        composition: shares
            .iter()
            .map(|&(symbol, percent)| ElementShareRecord {
                symbol: symbol.to_string(),
                percent,
            })
            .collect(),
    }
}

fn record(alloys: Vec<AlloyRecord>) -> CatalogRecord {
    CatalogRecord {
        version: vec![VersionRecord {
            tag: "test".to_string(),
            date: "2026-10-19".to_string(),
            notes: "unit test catalog".to_string(),
        }],
        alloys,
    }
}

#[test]
fn test_load_packed_catalog() {
    let bytes = pack(&record(vec![
        alloy("Латунь Л63", "brass", &[("Cu", 62.0), ("Zn", 38.0)]),
        alloy("Сталь 45", "steel", &[("Fe", 98.2), ("C", 0.45)]),
    ]));
    let catalog = Catalog::from_compressed(&bytes).unwrap();
    assert_eq!(catalog.len(), 2);
    let l63 = catalog.find("Латунь Л63").unwrap();
    assert_eq!(l63.family(), AlloyFamily::Brass);
    assert_eq!(l63.composition().get(Element::Zn), Some(38.0));

    let db = AlloyDb::with_catalog(catalog);
    let id = db.identify("Fe 98 C 0.5");
    assert_eq!(id.matches[0].name(), "Сталь 45");
}

#[test]
fn test_builtin_survives_packing() {
    let builtin = Catalog::builtin();
    let bytes = pack(&builtin.to_record());
    let loaded = Catalog::from_compressed(&bytes).unwrap();
    assert_eq!(loaded.alloys(), builtin.alloys());
}

#[test]
fn test_packed_empty_catalog() {
    let bytes = pack(&record(Vec::new()));
    assert!(matches!(
        Catalog::from_compressed(&bytes),
        Err(AlloyDbError::EmptyCatalog)
    ));
}

#[test]
fn test_packed_unknown_element() {
    let bytes = pack(&record(vec![alloy("Stellite", "steel", &[("Co", 60.0)])]));
    assert!(matches!(
        Catalog::from_compressed(&bytes),
        Err(AlloyDbError::UnknownElement(sym)) if sym == "Co"
    ));
}

#[test]
fn test_packed_unknown_family() {
    let bytes = pack(&record(vec![alloy("ПЭТ", "plastic", &[("C", 60.0)])]));
    assert!(matches!(
        Catalog::from_compressed(&bytes),
        Err(AlloyDbError::UnknownFamily(_))
    ));
}

#[test]
fn test_packed_invalid_percent() {
    let bytes = pack(&record(vec![alloy("bad", "brass", &[("Cu", f64::NAN)])]));
    assert!(matches!(
        Catalog::from_compressed(&bytes),
        Err(AlloyDbError::InvalidPercent { .. })
    ));
}

#[test]
fn test_garbage_bytes() {
    let err = Catalog::from_compressed(b"definitely not zstd").unwrap_err();
    assert!(matches!(err, AlloyDbError::DataError(_)));
    assert!(err.to_string().starts_with("data error:"));
}
