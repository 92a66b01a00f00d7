use crate::domain::a001_rug::{CanonicalField, RugRecord};
use crate::shared::list_utils::{filter_by_search_term, sort_by, SortDirection, SortState, SortValue, Sortable};
use std::collections::HashMap;

/// Режим разбивки коллекции
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupMode {
    ByDesign,
    ByColor,
}

impl GroupMode {
    pub fn field(self) -> CanonicalField {
        match self {
            GroupMode::ByDesign => CanonicalField::DesignId,
            GroupMode::ByColor => CanonicalField::PrimaryColor,
        }
    }
}

/// Сводка по дизайну или цвету внутри коллекции
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeSummary {
    /// Design ID or primary color, depending on the mode
    pub key: String,
    pub count: usize,
    /// Distinct non-empty sizes, first-seen order
    pub sizes: Vec<String>,
}

impl AttributeSummary {
    pub fn size_count(&self) -> usize {
        self.sizes.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeSortKey {
    Key,
    Count,
    SizeCount,
}

impl Sortable for AttributeSummary {
    type Key = AttributeSortKey;

    fn sort_value(&self, key: AttributeSortKey) -> SortValue<'_> {
        match key {
            AttributeSortKey::Key => SortValue::Text(&self.key),
            AttributeSortKey::Count => SortValue::Number(self.count as f64),
            AttributeSortKey::SizeCount => SortValue::Number(self.size_count() as f64),
        }
    }
}

/// Группирует записи по Design ID или по основному цвету
pub fn group_by_design_or_color(records: &[RugRecord], mode: GroupMode) -> Vec<AttributeSummary> {
    let field = mode.field();
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<AttributeSummary> = Vec::new();

    for record in records {
        let key = record.text(field).unwrap_or_default();
        let idx = *positions.entry(key).or_insert_with(|| {
            groups.push(AttributeSummary {
                key: key.to_string(),
                count: 0,
                sizes: Vec::new(),
            });
            groups.len() - 1
        });
        let group = &mut groups[idx];
        group.count += 1;
        if !record.size.is_empty() && !group.sizes.contains(&record.size) {
            group.sizes.push(record.size.clone());
        }
    }

    groups
}

/// Цвет по умолчанию: больше всего размеров, при равенстве первый встреченный
pub fn default_color(summaries: &[AttributeSummary]) -> Option<&AttributeSummary> {
    let mut best: Option<&AttributeSummary> = None;
    for summary in summaries {
        match best {
            Some(current) if summary.size_count() <= current.size_count() => {}
            _ => best = Some(summary),
        }
    }
    best
}

/// Цвета для выбора: больше размеров выше, при равенстве порядок появления.
/// The first entry is always the `default_color`.
pub fn colors_by_size_count(colors: &[AttributeSummary]) -> Vec<AttributeSummary> {
    sort_by(colors, AttributeSortKey::SizeCount, SortDirection::Desc)
}

/// Параметры списка дизайнов/цветов
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DesignListQuery {
    /// Matched against the group key
    pub search_term: String,
    pub sort: SortState<AttributeSortKey>,
}

impl DesignListQuery {
    pub fn apply(&self, summaries: &[AttributeSummary]) -> Vec<AttributeSummary> {
        let filtered = filter_by_search_term(summaries, &self.search_term, |s| s.key.as_str());
        self.sort.apply(&filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(design: &str, color: &str, size: &str) -> RugRecord {
        RugRecord {
            design_id: design.to_string(),
            primary_color: color.to_string(),
            size: size.to_string(),
            ..Default::default()
        }
    }

    fn sample() -> Vec<RugRecord> {
        vec![
            rec("AB123", "Red", "5x8"),
            rec("AB123", "Red", "5x8"),
            rec("xAB9", "Blue", "5x8"),
            rec("xAB9", "Blue", "8x10"),
            rec("CD1", "Green", ""),
        ]
    }

    #[test]
    fn test_group_by_color_tracks_distinct_sizes() {
        let colors = group_by_design_or_color(&sample(), GroupMode::ByColor);
        let keys: Vec<_> = colors.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["Red", "Blue", "Green"]);
        assert_eq!(colors[0].count, 2);
        assert_eq!(colors[0].sizes, vec!["5x8".to_string()]);
        assert_eq!(colors[1].size_count(), 2);
        assert_eq!(colors[2].size_count(), 0);
    }

    #[test]
    fn test_group_by_design() {
        let designs = group_by_design_or_color(&sample(), GroupMode::ByDesign);
        assert_eq!(designs.len(), 3);
        assert_eq!(designs[1].key, "xAB9");
        assert_eq!(designs[1].count, 2);
    }

    #[test]
    fn test_default_color_prefers_most_sizes() {
        let colors = group_by_design_or_color(&sample(), GroupMode::ByColor);
        assert_eq!(default_color(&colors).map(|c| c.key.as_str()), Some("Blue"));
    }

    #[test]
    fn test_default_color_tie_takes_first() {
        let records = vec![rec("A", "Red", "5x8"), rec("B", "Blue", "8x10")];
        let colors = group_by_design_or_color(&records, GroupMode::ByColor);
        assert_eq!(default_color(&colors).map(|c| c.key.as_str()), Some("Red"));
        assert!(default_color(&[]).is_none());
    }

    #[test]
    fn test_colors_by_size_count() {
        let records = vec![
            rec("A", "Red", "5x8"),
            rec("B", "Blue", "5x8"),
            rec("B", "Blue", "8x10"),
            rec("C", "Tan", "5x8"),
            rec("C", "Tan", "8x10"),
            rec("C", "Tan", "9x12"),
            rec("D", "Gray", "5x8"),
        ];
        let colors = group_by_design_or_color(&records, GroupMode::ByColor);
        let ordered = colors_by_size_count(&colors);

        let keys: Vec<_> = ordered.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["Tan", "Blue", "Red", "Gray"]);
        assert_eq!(ordered.first(), default_color(&colors));
        // исходный порядок не меняется
        assert_eq!(colors[0].key, "Red");
    }

    #[test]
    fn test_design_query_search() {
        let designs = group_by_design_or_color(&sample(), GroupMode::ByDesign);
        let query = DesignListQuery {
            search_term: "AB".to_string(),
            ..Default::default()
        };
        let keys: Vec<_> = query.apply(&designs).into_iter().map(|d| d.key).collect();
        assert_eq!(keys, vec!["AB123".to_string(), "xAB9".to_string()]);

        let none = DesignListQuery {
            search_term: "zzz".to_string(),
            ..Default::default()
        };
        assert!(none.apply(&designs).is_empty());

        assert_eq!(DesignListQuery::default().apply(&designs), designs);
    }

    #[test]
    fn test_sorting_summaries_keeps_default_selection_input() {
        let colors = group_by_design_or_color(&sample(), GroupMode::ByColor);
        let query = DesignListQuery {
            search_term: String::new(),
            sort: SortState::by(AttributeSortKey::Key),
        };
        let sorted = query.apply(&colors);
        assert_eq!(sorted[0].key, "Blue");
        assert_eq!(colors[0].key, "Red");
    }
}
