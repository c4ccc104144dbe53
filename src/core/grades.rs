use crate::core::Record;

/// Records whose `grade` is numeric and at least `min_grade`. Inclusive.
pub fn filter_by_min_grade(records: &[Record], min_grade: f64) -> Vec<Record> {
    let kept: Vec<Record> = records
        .iter()
        .filter(|record| record.grade().is_some_and(|grade| grade >= min_grade))
        .cloned()
        .collect();

    tracing::debug!(
        "Kept {} of {} records with grade >= {}",
        kept.len(),
        records.len(),
        min_grade
    );

    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records() -> Vec<Record> {
        serde_json::from_value(json!([
            {"name": "Alice", "grade": 85},
            {"name": "Bob", "grade": 72},
            {"name": "Charlie", "grade": 91},
            {"name": "Dave", "grade": "95"},
            {"name": "Erin"},
            {"name": "Frank", "grade": 80.0}
        ]))
        .unwrap()
    }

    #[test]
    fn test_filter_keeps_at_or_above_threshold() {
        let kept = filter_by_min_grade(&records(), 80.0);
        let names: Vec<_> = kept
            .iter()
            .map(|r| r.get("name").and_then(|v| v.as_str()).unwrap())
            .collect();
        assert_eq!(names, vec!["Alice", "Charlie", "Frank"]);
    }

    #[test]
    fn test_filter_drops_non_numeric_and_missing_grades() {
        let kept = filter_by_min_grade(&records(), 0.0);
        assert_eq!(kept.len(), 4);
        assert!(kept.iter().all(|r| r.grade().is_some()));
    }

    #[test]
    fn test_filter_counts_boolean_grades_as_numbers() {
        let records: Vec<Record> = serde_json::from_value(json!([
            {"name": "Pass", "grade": true},
            {"name": "Fail", "grade": false}
        ]))
        .unwrap();

        let kept = filter_by_min_grade(&records, 1.0);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].get("grade"), Some(&json!(true)));
        assert_eq!(filter_by_min_grade(&records, 0.0).len(), 2);
    }

    #[test]
    fn test_filter_empty_input() {
        assert!(filter_by_min_grade(&[], 50.0).is_empty());
    }

    #[test]
    fn test_filter_keeps_records_untouched() {
        let kept = filter_by_min_grade(&records(), 90.0);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].data, *json!({"name": "Charlie", "grade": 91}).as_object().unwrap());
    }
}
