use contracts::domain::a001_rug::NO_VALUE;
use contracts::shared::money::format_price;

/// Текст ячейки или `N/A` для пустого значения
pub fn text_or_na(value: &str) -> String {
    if value.trim().is_empty() {
        NO_VALUE.to_string()
    } else {
        value.to_string()
    }
}

/// Цена в виде `$x.xx`; нулевая цена считается отсутствующей
pub fn price_or_na(price: f64) -> String {
    if price > 0.0 {
        format_price(price)
    } else {
        NO_VALUE.to_string()
    }
}

/// Названия коллекций, брендов и цветов без значения показываются как `Unknown`
pub fn name_or_unknown(value: &str) -> String {
    if value.trim().is_empty() {
        "Unknown".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_or_na() {
        assert_eq!(text_or_na("5x8"), "5x8");
        assert_eq!(text_or_na("  "), "N/A");
    }

    #[test]
    fn test_price_or_na() {
        assert_eq!(price_or_na(499.5), "$499.50");
        assert_eq!(price_or_na(0.0), "N/A");
    }

    #[test]
    fn test_name_or_unknown() {
        assert_eq!(name_or_unknown(""), "Unknown");
        assert_eq!(name_or_unknown("Ivory"), "Ivory");
    }
}
