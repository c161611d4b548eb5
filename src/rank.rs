//! Ranking of the country table
//!
//! The dashboard ranks the fetched table twice: by confirmed cases for the
//! map and bar chart, and by recovered cases for the pie chart.

use crate::country::CountryRecord;
use clap::ValueEnum;
use std::cmp::Reverse;
use std::fmt::{Display, Formatter};

/// Numeric column a ranked view sorts by.
#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum SortKey {
    Cases,
    Active,
    Recovered,
    Deaths,
}

impl SortKey {
    pub fn value(&self, record: &CountryRecord) -> u64 {
        match self {
            SortKey::Cases => record.cases(),
            SortKey::Active => record.active(),
            SortKey::Recovered => record.recovered(),
            SortKey::Deaths => record.deaths(),
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Cases => write!(f, "confirmed cases"),
            SortKey::Active => write!(f, "active cases"),
            SortKey::Recovered => write!(f, "recovered"),
            SortKey::Deaths => write!(f, "deaths"),
        }
    }
}

/// Returns the top `n` records by `key`, descending. The sort is stable, so
/// records with equal values keep their fetch order.
pub fn top_n(records: &[CountryRecord], key: SortKey, n: usize) -> Vec<CountryRecord> {
    let mut ranked = records.to_vec();
    ranked.sort_by_key(|r| Reverse(key.value(r)));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, cases: u64, recovered: u64) -> CountryRecord {
        CountryRecord {
            country: name.to_string(),
            cases: Some(cases),
            recovered: Some(recovered),
            ..Default::default()
        }
    }

    fn sample() -> Vec<CountryRecord> {
        (0..15)
            .map(|i| record(&format!("c{i}"), (15 - i) * 10, i * 7))
            .collect()
    }

    #[test]
    fn returns_at_most_n_rows() {
        let ranked = top_n(&sample(), SortKey::Cases, 10);
        assert_eq!(ranked.len(), 10);

        let short = vec![record("a", 1, 1), record("b", 2, 2)];
        assert_eq!(top_n(&short, SortKey::Cases, 10).len(), 2);
    }

    #[test]
    fn sorted_descending_by_key() {
        let ranked = top_n(&sample(), SortKey::Recovered, 10);
        for pair in ranked.windows(2) {
            assert!(pair[0].recovered() >= pair[1].recovered());
        }
        assert_eq!(ranked[0].country, "c14");
    }

    #[test]
    fn ranking_is_deterministic() {
        let records = sample();
        let first = top_n(&records, SortKey::Cases, 10);
        let second = top_n(&records, SortKey::Cases, 10);
        assert_eq!(first, second);
    }

    #[test]
    fn ties_keep_fetch_order() {
        let records = vec![
            record("first", 100, 0),
            record("second", 100, 0),
            record("third", 100, 0),
        ];
        let ranked = top_n(&records, SortKey::Cases, 3);
        let names: Vec<&str> = ranked.iter().map(|r| r.country.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn missing_counters_rank_last() {
        let records = vec![
            CountryRecord {
                country: "nodata".to_string(),
                ..Default::default()
            },
            record("hasdata", 5, 0),
        ];
        let ranked = top_n(&records, SortKey::Cases, 2);
        assert_eq!(ranked[0].country, "hasdata");
    }
}
