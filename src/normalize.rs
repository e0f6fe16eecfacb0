use crate::constants::{
    RAW_COLOR, RAW_MANUFACTURER, RAW_NAME, RAW_NUMBER, RAW_SERIES, RAW_UPC, RAW_YEAR,
};
use crate::error::{json_type_name, ImportError, Result};
use crate::types::{NormalizedRecord, RawRecord};
use serde_json::{Map, Value};
use unicode_titlecase::to_titlecase;

/// Maps one raw catalog record onto the lookup shape.
///
/// Missing keys become empty strings, and a missing `year` falls back to
/// `fetch_year`. A string field that is present with any other JSON type
/// (including `null`) is an error.
pub fn normalize_record(raw: &Map<String, Value>, fetch_year: i32) -> Result<NormalizedRecord> {
    Ok(NormalizedRecord {
        model_name: strip(text_field(raw, RAW_NAME)?).to_uppercase(),
        brand: title_case(strip(text_field(raw, RAW_MANUFACTURER)?)),
        base_color: title_case(strip(text_field(raw, RAW_COLOR)?)),
        year: raw
            .get(RAW_YEAR)
            .cloned()
            .unwrap_or_else(|| Value::from(fetch_year)),
        series: title_case(strip(text_field(raw, RAW_SERIES)?)),
        collection_number: strip(text_field(raw, RAW_NUMBER)?).to_string(),
        upc: strip(text_field(raw, RAW_UPC)?).to_string(),
    })
}

/// Same as [`normalize_record`] for an untyped array element.
pub fn normalize_raw(raw: &RawRecord, fetch_year: i32, index: usize) -> Result<NormalizedRecord> {
    let object = raw.as_object().ok_or(ImportError::NotAnObject {
        year: fetch_year,
        index,
    })?;
    normalize_record(object, fetch_year)
}

/// Records without a model name are incomplete and never reach the lookup file.
pub fn is_complete(record: &NormalizedRecord) -> bool {
    !record.model_name.is_empty()
}

fn text_field<'a>(raw: &'a Map<String, Value>, field: &'static str) -> Result<&'a str> {
    match raw.get(field) {
        None => Ok(""),
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(other) => Err(ImportError::FieldType {
            field,
            found: json_type_name(other),
        }),
    }
}

/// Trims Unicode whitespace and the ASCII information separators
/// (U+001C..=U+001F) from both ends.
pub fn strip(input: &str) -> &str {
    input.trim_matches(|c: char| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
}

/// Titlecases the first cased character of every word and lowercases the rest.
/// Any character without case (whitespace, digits, punctuation) ends a word.
///
/// Lowercasing goes through `str::to_lowercase` on the whole input so a
/// capital sigma at the end of a word becomes `ς`.
pub fn title_case(input: &str) -> String {
    let lowered = input.to_lowercase();
    let mut lowered = lowered.chars();
    let mut out = String::with_capacity(input.len());
    let mut in_word = false;

    for c in input.chars() {
        // Every char lowercases to a fixed number of chars; only the sigma's
        // choice between σ and ς depends on its neighbours.
        let lower: String = lowered.by_ref().take(c.to_lowercase().count()).collect();
        let cased = is_cased(c);
        if cased && !in_word {
            out.extend(to_titlecase(c).into_iter().filter(|&t| t != '\0'));
        } else if cased {
            out.push_str(&lower);
        } else {
            out.push(c);
        }
        in_word = cased;
    }
    out
}

// Uppercase, lowercase and titlecase letters (Lt has no std predicate but
// always has a distinct lowercase mapping).
fn is_cased(c: char) -> bool {
    c.is_uppercase() || c.is_lowercase() || !c.to_lowercase().eq(std::iter::once(c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_normalize_mustang_example() {
        let raw = obj(json!({"name": " mustang ", "manufacturer": "ford", "color": "red"}));
        let record = normalize_record(&raw, 2015).unwrap();

        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "model_name": "MUSTANG",
                "brand": "Ford",
                "base_color": "Red",
                "year": 2015,
                "series": "",
                "collection_number": "",
                "upc": ""
            })
        );
    }

    #[test]
    fn test_all_fields_trimmed_and_cased() {
        let raw = obj(json!({
            "name": "  '67 camaro\t",
            "manufacturer": "  CHEVROLET ",
            "color": "metalflake BLUE",
            "year": 2012,
            "series": " hw  city ",
            "number": " 123/250 ",
            "upc": " 0027084 "
        }));
        let record = normalize_record(&raw, 2010).unwrap();

        assert_eq!(record.model_name, "'67 CAMARO");
        assert_eq!(record.brand, "Chevrolet");
        assert_eq!(record.base_color, "Metalflake Blue");
        assert_eq!(record.year, json!(2012));
        assert_eq!(record.series, "Hw  City");
        assert_eq!(record.collection_number, "123/250");
        assert_eq!(record.upc, "0027084");
    }

    #[test]
    fn test_raw_year_passes_through_unchanged() {
        let raw = obj(json!({"name": "bone shaker", "year": "2016"}));
        let record = normalize_record(&raw, 2011).unwrap();
        assert_eq!(record.year, json!("2016"));

        let raw = obj(json!({"name": "bone shaker", "year": null}));
        let record = normalize_record(&raw, 2011).unwrap();
        assert_eq!(record.year, Value::Null);
    }

    #[test]
    fn test_non_string_field_is_an_error() {
        let raw = obj(json!({"name": "twin mill", "number": 42}));
        let err = normalize_record(&raw, 2014).unwrap_err();
        assert!(matches!(err, ImportError::FieldType { field: "number", .. }));

        let raw = obj(json!({"name": null}));
        assert!(normalize_record(&raw, 2014).is_err());
    }

    #[test]
    fn test_non_object_element_is_an_error() {
        let err = normalize_raw(&json!("twin mill"), 2014, 3).unwrap_err();
        assert!(matches!(err, ImportError::NotAnObject { year: 2014, index: 3 }));
    }

    #[test]
    fn test_incomplete_records() {
        let blank = normalize_record(&obj(json!({"name": "   ", "manufacturer": "ford"})), 2015).unwrap();
        assert!(!is_complete(&blank));

        let missing = normalize_record(&obj(json!({"manufacturer": "ford"})), 2015).unwrap();
        assert!(!is_complete(&missing));

        let named = normalize_record(&obj(json!({"name": "x"})), 2015).unwrap();
        assert!(is_complete(&named));
    }

    #[test]
    fn test_title_case_word_boundaries() {
        assert_eq!(title_case("hot wheels"), "Hot Wheels");
        assert_eq!(title_case("o'brien"), "O'Brien");
        assert_eq!(title_case("2fast 2furious"), "2Fast 2Furious");
        assert_eq!(title_case("HW-SCREEN time"), "Hw-Screen Time");
        assert_eq!(title_case("ÉCLAIR rouge"), "Éclair Rouge");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_title_case_special_mappings() {
        assert_eq!(title_case("ßeta ﬁat ǆemal ΟΔΟΣ"), "Sseta Fiat ǅemal Οδος");
        assert_eq!(title_case("ǅEMAL"), "ǅemal");
        assert_eq!(title_case("xǅ"), "Xǆ");
        assert_eq!(title_case("ΣΟΦΟΣ ΣΑΣ"), "Σοφος Σας");
        assert_eq!(title_case("ΟΔΟΣΑ"), "Οδοσα");
    }

    #[test]
    fn test_strip_removes_information_separators() {
        assert_eq!(strip("\u{1f}abc\u{1c}"), "abc");
        assert_eq!(strip(" \t\u{a0}abc\u{3000}\n"), "abc");
        assert_eq!(strip("a\u{1d}b"), "a\u{1d}b");

        let raw = obj(json!({"name": "\u{1f}abc\u{1f}", "color": "\u{1e} red "}));
        let record = normalize_record(&raw, 2015).unwrap();
        assert_eq!(record.model_name, "ABC");
        assert_eq!(record.base_color, "Red");
    }
}
