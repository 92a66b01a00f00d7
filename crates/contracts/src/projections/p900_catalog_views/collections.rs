use crate::domain::a001_rug::RugRecord;
use crate::shared::list_utils::{filter_by_search_term, SortState, SortValue, Sortable};
use std::collections::HashMap;

/// Сводка по коллекции для главного списка
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionSummary {
    pub collection_name: String,
    /// Vendor of the first member encountered
    pub vendor: String,
    pub count: usize,
    pub members: Vec<RugRecord>,
}

impl CollectionSummary {
    /// Vendors of members that disagree with `vendor`, first-seen order.
    /// Diagnostic only: grouping keeps the first vendor regardless.
    pub fn vendor_conflicts(&self) -> Vec<&str> {
        let mut conflicts: Vec<&str> = Vec::new();
        for member in &self.members {
            let vendor = member.vendor.as_str();
            if vendor != self.vendor && !conflicts.contains(&vendor) {
                conflicts.push(vendor);
            }
        }
        conflicts
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionSortKey {
    CollectionName,
    Vendor,
    Count,
}

impl Sortable for CollectionSummary {
    type Key = CollectionSortKey;

    fn sort_value(&self, key: CollectionSortKey) -> SortValue<'_> {
        match key {
            CollectionSortKey::CollectionName => SortValue::Text(&self.collection_name),
            CollectionSortKey::Vendor => SortValue::Text(&self.vendor),
            CollectionSortKey::Count => SortValue::Number(self.count as f64),
        }
    }
}

/// Группирует записи по точному имени коллекции.
/// Groups come out in order of first occurrence.
pub fn group_by_collection(records: &[RugRecord]) -> Vec<CollectionSummary> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<CollectionSummary> = Vec::new();

    for record in records {
        let name = record.collection_name.as_str();
        let idx = *positions.entry(name).or_insert_with(|| {
            groups.push(CollectionSummary {
                collection_name: name.to_string(),
                vendor: record.vendor.clone(),
                count: 0,
                members: Vec::new(),
            });
            groups.len() - 1
        });
        let group = &mut groups[idx];
        group.count += 1;
        group.members.push(record.clone());
    }

    groups
}

/// Параметры главного списка коллекций
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionListQuery {
    /// Matched against the collection name
    pub search_term: String,
    pub sort: SortState<CollectionSortKey>,
}

impl CollectionListQuery {
    pub fn apply(&self, groups: &[CollectionSummary]) -> Vec<CollectionSummary> {
        let filtered = filter_by_search_term(groups, &self.search_term, |g| g.collection_name.as_str());
        self.sort.apply(&filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::SortDirection;

    fn rec(collection: &str, vendor: &str) -> RugRecord {
        RugRecord {
            collection_name: collection.to_string(),
            vendor: vendor.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_group_by_collection_counts_and_order() {
        let records = vec![rec("A", "X"), rec("A", "X"), rec("B", "Y")];
        let groups = group_by_collection(&records);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].collection_name, "A");
        assert_eq!(groups[0].count, 2);
        assert_eq!(groups[0].vendor, "X");
        assert_eq!(groups[1].collection_name, "B");
        assert_eq!(groups[1].count, 1);
        assert_eq!(groups[1].members.len(), 1);
    }

    #[test]
    fn test_grouping_is_case_sensitive() {
        let records = vec![rec("Aurora", "X"), rec("aurora", "X")];
        assert_eq!(group_by_collection(&records).len(), 2);
    }

    #[test]
    fn test_first_vendor_wins_and_conflicts_are_reported() {
        let records = vec![rec("A", "X"), rec("A", "Z"), rec("A", "Z"), rec("A", "X")];
        let groups = group_by_collection(&records);
        assert_eq!(groups[0].vendor, "X");
        assert_eq!(groups[0].vendor_conflicts(), vec!["Z"]);
    }

    #[test]
    fn test_query_filters_then_sorts() {
        let records = vec![
            rec("Aurora", "X"),
            rec("Boreal", "Y"),
            rec("Cosmo", "Y"),
            rec("Cosmo", "Y"),
            rec("Borealis", "Z"),
        ];
        let groups = group_by_collection(&records);

        let query = CollectionListQuery {
            search_term: "BOR".to_string(),
            sort: SortState::default(),
        };
        let names: Vec<_> = query.apply(&groups).into_iter().map(|g| g.collection_name).collect();
        assert_eq!(names, vec!["Boreal", "Borealis"]);

        let query = CollectionListQuery {
            search_term: String::new(),
            sort: SortState::by(CollectionSortKey::Count).toggle(CollectionSortKey::Count),
        };
        assert_eq!(query.sort.direction, SortDirection::Desc);
        let sorted = query.apply(&groups);
        assert_eq!(sorted[0].collection_name, "Cosmo");
        // ties keep first-seen order
        assert_eq!(sorted[1].collection_name, "Aurora");
        assert_eq!(sorted[2].collection_name, "Boreal");
        // the source list is untouched
        assert_eq!(groups[0].collection_name, "Aurora");
        assert_eq!(groups[2].collection_name, "Cosmo");
    }
}
