//! Daily content operations for the WASM API
//!
//! Items are accepted as arbitrary JSON values so the home page can rotate
//! verses, devotionals or anything else it curates.

use serde_json::Value;
use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, js_error, serialize};
use crate::calendar::{self, ContentCalendar};
use crate::models::verse::Verse;

/// Select the item for an ISO date (`YYYY-MM-DD`)
#[wasm_bindgen(js_name = selectForDate)]
pub fn select_for_date(iso_date: &str, items: JsValue) -> Result<JsValue, JsValue> {
    let date = calendar::parse_date(iso_date).map_err(|e| js_error("selectForDate failed", e))?;
    let items: Vec<Value> = deserialize(items, "selectForDate expects an array")?;

    let item = calendar::select_for_date(date, &items)
        .map_err(|e| js_error("selectForDate failed", e))?;
    serialize(item, "Failed to serialize selected item")
}

/// Select the item for the browser's current local date
#[wasm_bindgen(js_name = selectForToday)]
pub fn select_for_today(items: JsValue) -> Result<JsValue, JsValue> {
    let items: Vec<Value> = deserialize(items, "selectForToday expects an array")?;

    let item = calendar::select_for_today(&items).map_err(|e| js_error("selectForToday failed", e))?;
    serialize(item, "Failed to serialize selected item")
}

/// Built-in verse of the day
///
/// # Parameters
/// - `iso_date`: optional `YYYY-MM-DD`; defaults to today
///
/// # Returns
/// `{ reference, text }`
#[wasm_bindgen(js_name = verseOfTheDay)]
pub fn verse_of_the_day(iso_date: Option<String>) -> Result<JsValue, JsValue> {
    let verses = ContentCalendar::<Verse>::builtin_verses()
        .map_err(|e| js_error("Built-in verses unavailable", e))?;

    let verse = match iso_date {
        Some(s) => {
            let date = calendar::parse_date(&s).map_err(|e| js_error("verseOfTheDay failed", e))?;
            verses.for_date(date)
        }
        None => verses.for_today(),
    };

    serialize(verse, "Failed to serialize verse")
}
