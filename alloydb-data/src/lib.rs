#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// A packed reference-alloy catalog, as written by `alloydb-generate`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub version: Vec<VersionRecord>,
    pub alloys: Vec<AlloyRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VersionRecord {
    pub tag: String,
    pub date: String,
    pub notes: String,
}

/// One named reference alloy. `family` is the lowercase family key
/// (e.g. "brass", "stainless-steel").
#[derive(Debug, Serialize, Deserialize)]
pub struct AlloyRecord {
    pub name: String,
    pub family: String,
    pub composition: Vec<ElementShareRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ElementShareRecord {
    pub symbol: String,
    pub percent: f64,
}
