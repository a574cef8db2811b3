//! WASM bindings for alloydb.
//!
//! Build with:
//! ```sh
//! wasm-pack build -p alloydb-wasm
//! ```

pub mod command;

use std::sync::OnceLock;

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;

use alloydb::{
    AlloyDb, Analysis, Composition, Identification, Match, MatchOptions, find_matches,
};

use crate::command::Command;

static DB: OnceLock<AlloyDb> = OnceLock::new();

/// Match settings for user-facing results: only references sharing the
/// query's base metal are offered.
pub fn match_options() -> MatchOptions {
    MatchOptions {
        same_base_only: true,
        ..MatchOptions::default()
    }
}

/// Engine over the builtin catalog, built on first use and then only read.
pub fn db() -> &'static AlloyDb {
    DB.get_or_init(|| AlloyDb::new().options(match_options()))
}

fn set(obj: &Object, key: &str, value: impl Into<JsValue>) -> Result<(), JsError> {
    Reflect::set(obj, &JsValue::from_str(key), &value.into())
        .map(|_| ())
        .map_err(|_| JsError::new(&format!("failed to set property '{key}'")))
}

fn str_array<'a>(items: impl IntoIterator<Item = &'a str>) -> Array {
    items.into_iter().map(JsValue::from_str).collect()
}

// ── Conversions ──

fn composition_to_js(composition: &Composition) -> Result<Object, JsError> {
    let obj = Object::new();
    for (element, percent) in composition.iter() {
        set(&obj, element.symbol(), percent)?;
    }
    Ok(obj)
}

fn analysis_to_js(analysis: &Analysis) -> Result<Object, JsError> {
    let obj = Object::new();
    match analysis.dominant {
        Some(d) => {
            let dominant = Object::new();
            set(&dominant, "element", d.element.symbol())?;
            set(&dominant, "percent", d.percent)?;
            set(&obj, "dominant", dominant)?;
        }
        None => set(&obj, "dominant", JsValue::NULL)?,
    }
    set(&obj, "description", analysis.description.as_str())?;
    match analysis.summary {
        Some(s) => set(&obj, "summary", s)?,
        None => set(&obj, "summary", JsValue::NULL)?,
    }
    set(&obj, "applications", str_array(analysis.applications.iter().copied()))?;

    let recommendations: Array = analysis
        .recommendations
        .iter()
        .map(|r| JsValue::from_str(&r.to_string()))
        .collect();
    set(&obj, "recommendations", recommendations)?;

    let elements = Array::new();
    for note in &analysis.elements {
        let row = Object::new();
        set(&row, "element", note.element.symbol())?;
        set(&row, "percent", note.percent)?;
        set(&row, "name", note.name)?;
        set(&row, "role", note.role)?;
        elements.push(&row);
    }
    set(&obj, "elements", elements)?;
    Ok(obj)
}

fn matches_to_js(matches: &[Match<'_>]) -> Result<Array, JsError> {
    let out = Array::new();
    for m in matches {
        let row = Object::new();
        set(&row, "name", m.name())?;
        set(&row, "family", m.alloy.family().key())?;
        set(&row, "score", m.score)?;
        set(&row, "composition", composition_to_js(m.composition())?)?;
        out.push(&row);
    }
    Ok(out)
}

fn identification_to_js(id: &Identification<'_>) -> Result<Object, JsError> {
    let obj = Object::new();
    set(&obj, "found", !id.is_empty())?;
    set(&obj, "composition", composition_to_js(&id.composition)?)?;
    set(&obj, "analysis", analysis_to_js(&id.analysis)?)?;
    set(&obj, "matches", matches_to_js(&id.matches)?)?;
    Ok(obj)
}

// ── Engine ──

/// Returns `{symbol: percent}` for the pairs found in `text`.
#[wasm_bindgen]
pub fn parse_composition(text: &str) -> Result<JsValue, JsError> {
    Ok(composition_to_js(&db().parse(text))?.into())
}

#[wasm_bindgen]
pub fn analyze(text: &str) -> Result<JsValue, JsError> {
    let db = db();
    Ok(analysis_to_js(&db.analyze(&db.parse(text)))?.into())
}

/// Ranked reference alloys for the composition in `text`.
///
/// `threshold` defaults to 0.3 and `top_k` to 3. Only references with the
/// same base metal as the query are returned.
#[wasm_bindgen]
pub fn match_alloys(
    text: &str,
    threshold: Option<f64>,
    top_k: Option<u32>,
) -> Result<JsValue, JsError> {
    let db = db();
    let defaults = db.match_options();
    let options = MatchOptions {
        threshold: threshold.unwrap_or(defaults.threshold),
        top_k: top_k.map_or(defaults.top_k, |k| k as usize),
        ..*defaults
    };
    let composition = db.parse(text);
    Ok(matches_to_js(&find_matches(&composition, db.catalog(), &options))?.into())
}

#[wasm_bindgen]
pub fn identify(text: &str) -> Result<JsValue, JsError> {
    Ok(identification_to_js(&db().identify(text))?.into())
}

/// Catalog grouped by family: `[{family, label, alloys: [names]}]`.
#[wasm_bindgen]
pub fn catalog_families() -> Result<JsValue, JsError> {
    let db = db();
    let out = Array::new();
    for (family, names) in db.catalog().families() {
        let row = Object::new();
        set(&row, "family", family.key())?;
        set(&row, "label", family.label())?;
        set(&row, "alloys", str_array(names))?;
        out.push(&row);
    }
    Ok(out.into())
}

// ── Message routing ──

/// Route an incoming chat message: menu commands come back as
/// `{kind: "command", command}`, anything else as
/// `{kind: "analysis", ...identify(text)}`.
#[wasm_bindgen]
pub fn handle_message(text: &str) -> Result<JsValue, JsError> {
    if let Some(command) = Command::from_message(text) {
        let obj = Object::new();
        set(&obj, "kind", "command")?;
        set(&obj, "command", command.name())?;
        return Ok(obj.into());
    }
    let obj = identification_to_js(&db().identify(text))?;
    set(&obj, "kind", "analysis")?;
    Ok(obj.into())
}

/// Menu button labels in display order.
#[wasm_bindgen]
pub fn menu_labels() -> JsValue {
    str_array(command::COMMANDS.iter().map(|c| c.label())).into()
}
