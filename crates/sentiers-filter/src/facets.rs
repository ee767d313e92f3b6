use sentiers_core::TrailRecord;
use std::collections::BTreeSet;

/// Distinct location facet values, sorted ascending
///
/// These are the legal values of the location criterion. Ordering is ordinal
/// (by code point), not locale-aware.
pub fn derive_locations(records: &[TrailRecord]) -> BTreeSet<String> {
    records.iter().map(|record| record.location().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_and_sorted() {
        let records = vec![
            TrailRecord::new("A", "a", "Walking", 1, "Nice: Port"),
            TrailRecord::new("B", "b", "Walking", 1, "Antibes: Remparts"),
            TrailRecord::new("C", "c", "Walking", 1, "Nice : Cimiez"),
            TrailRecord::new("D", "d", "Walking", 1, "  Èze: Village"),
        ];

        let locations: Vec<String> = derive_locations(&records).into_iter().collect();
        assert_eq!(locations, vec!["Antibes", "Nice", "Èze"]);
    }

    #[test]
    fn test_case_is_preserved() {
        let records = vec![
            TrailRecord::new("A", "a", "Walking", 1, "nice: Port"),
            TrailRecord::new("B", "b", "Walking", 1, "Nice: Port"),
        ];
        assert_eq!(derive_locations(&records).len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(derive_locations(&[]).is_empty());
    }
}
