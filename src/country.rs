//! Country statistics data model
//!
//! Mirrors the JSON shape of the `/v2/countries` endpoint. Counters can be
//! absent or null in the upstream payload, so they deserialize as options
//! and read as zero.

use serde::Deserialize;

/// Per-country geolocation and flag metadata (the API's `countryInfo`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CountryInfo {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub long: Option<f64>,
    /// URL of the country's flag image.
    #[serde(default)]
    pub flag: Option<String>,
    /// ISO 3166-1 alpha-2 code, used to derive a flag glyph for the terminal.
    #[serde(default)]
    pub iso2: Option<String>,
}

/// One row of the country statistics table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CountryRecord {
    pub country: String,
    #[serde(default)]
    pub cases: Option<u64>,
    #[serde(default)]
    pub active: Option<u64>,
    #[serde(default)]
    pub recovered: Option<u64>,
    #[serde(default)]
    pub deaths: Option<u64>,
    #[serde(rename = "countryInfo", default)]
    pub country_info: CountryInfo,
}

impl CountryRecord {
    pub fn cases(&self) -> u64 {
        self.cases.unwrap_or(0)
    }

    pub fn active(&self) -> u64 {
        self.active.unwrap_or(0)
    }

    pub fn recovered(&self) -> u64 {
        self.recovered.unwrap_or(0)
    }

    pub fn deaths(&self) -> u64 {
        self.deaths.unwrap_or(0)
    }

    /// Returns `(lat, long)` when both coordinates are present and finite.
    /// Records failing this check are skipped by the map renderer.
    pub fn coords(&self) -> Option<(f64, f64)> {
        match (self.country_info.lat, self.country_info.long) {
            (Some(lat), Some(long)) if lat.is_finite() && long.is_finite() => Some((lat, long)),
            _ => None,
        }
    }

    /// Regional-indicator flag glyph derived from the ISO alpha-2 code.
    /// The terminal stand-in for the flag image URL the API provides.
    pub fn flag_emoji(&self) -> Option<String> {
        let iso2 = self.country_info.iso2.as_deref()?;
        if iso2.len() != 2 || !iso2.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        iso2.to_uppercase()
            .chars()
            .map(|c| char::from_u32(0x1F1E6 + (c as u32 - 'A' as u32)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(lat: Option<f64>, long: Option<f64>) -> CountryRecord {
        CountryRecord {
            country: "Testland".to_string(),
            country_info: CountryInfo {
                lat,
                long,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn deserializes_full_record() {
        let json = r#"{
            "country": "France",
            "cases": 100, "active": 20, "recovered": 70, "deaths": 10,
            "countryInfo": {"lat": 46.0, "long": 2.0, "flag": "https://x/fr.png", "iso2": "FR"}
        }"#;
        let rec: CountryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.country, "France");
        assert_eq!(rec.cases(), 100);
        assert_eq!(rec.recovered(), 70);
        assert_eq!(rec.coords(), Some((46.0, 2.0)));
    }

    #[test]
    fn null_and_missing_counters_read_as_zero() {
        let json = r#"{"country": "Atlantis", "cases": null, "countryInfo": {}}"#;
        let rec: CountryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.cases(), 0);
        assert_eq!(rec.deaths(), 0);
    }

    #[test]
    fn missing_coordinates_yield_none() {
        assert_eq!(record(None, Some(2.0)).coords(), None);
        assert_eq!(record(Some(46.0), None).coords(), None);
        assert_eq!(record(None, None).coords(), None);
        assert_eq!(record(Some(f64::NAN), Some(2.0)).coords(), None);
    }

    #[test]
    fn missing_country_info_deserializes() {
        let json = r#"{"country": "Nowhere"}"#;
        let rec: CountryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.coords(), None);
        assert_eq!(rec.flag_emoji(), None);
    }

    #[test]
    fn flag_emoji_from_iso2() {
        let mut rec = record(None, None);
        rec.country_info.iso2 = Some("US".to_string());
        assert_eq!(rec.flag_emoji().unwrap(), "\u{1F1FA}\u{1F1F8}");

        rec.country_info.iso2 = Some("X".to_string());
        assert_eq!(rec.flag_emoji(), None);
    }
}
