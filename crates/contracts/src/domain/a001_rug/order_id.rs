use super::aggregate::{CanonicalField, RugRecord};

/// Display form of a missing Order ID
pub const NO_VALUE: &str = "N/A";

/// Порядок полей, из которых берется Order ID.
///
/// Preferred fields hold the store's own identifier; fallback fields hold the
/// vendor's. The first non-blank value wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderIdRule {
    pub preferred: &'static [CanonicalField],
    pub fallback: &'static [CanonicalField],
}

impl OrderIdRule {
    /// CSV documents: `product_id`, then `VPN`
    pub const PRODUCT_ID_THEN_VPN: OrderIdRule = OrderIdRule {
        preferred: &[CanonicalField::ProductId],
        fallback: &[CanonicalField::Vpn],
    };

    /// Excel documents: `HM SKU`, then `Design ID`
    pub const SKU_THEN_DESIGN: OrderIdRule = OrderIdRule {
        preferred: &[CanonicalField::SkuOverride],
        fallback: &[CanonicalField::DesignId],
    };

    /// Documents of unknown origin. Each variant leaves the other variant's
    /// fields empty, so this reduces to the variant's own rule.
    pub const ANY_SCHEMA: OrderIdRule = OrderIdRule {
        preferred: &[CanonicalField::ProductId, CanonicalField::SkuOverride],
        fallback: &[CanonicalField::Vpn, CanonicalField::DesignId],
    };

    pub fn resolve(&self, record: &RugRecord) -> ResolvedOrderId {
        self.preferred
            .iter()
            .chain(self.fallback.iter())
            .find_map(|&field| {
                record
                    .text(field)
                    .map(str::trim)
                    .filter(|value| !value.is_empty())
                    .map(|value| ResolvedOrderId {
                        value: value.to_string(),
                        is_present: true,
                        source: Some(field),
                    })
            })
            .unwrap_or_else(ResolvedOrderId::missing)
    }

    /// Primary identity field, used for the fill-rate diagnostic
    pub fn identity_field(&self) -> Option<CanonicalField> {
        self.preferred.first().copied()
    }
}

/// Результат разрешения Order ID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOrderId {
    /// Empty when `is_present` is false
    pub value: String,
    pub is_present: bool,
    pub source: Option<CanonicalField>,
}

impl ResolvedOrderId {
    pub fn missing() -> Self {
        Self {
            value: String::new(),
            is_present: false,
            source: None,
        }
    }

    /// Value to render or copy; the sentinel for a missing ID
    pub fn display_value(&self) -> &str {
        if self.is_present {
            &self.value
        } else {
            NO_VALUE
        }
    }

    pub fn is_fallback(&self, rule: &OrderIdRule) -> bool {
        self.source
            .map(|field| rule.fallback.contains(&field))
            .unwrap_or(false)
    }
}

/// Order ID of a record loaded from `data.json`, whatever schema wrote it
pub fn resolve_order_id(record: &RugRecord) -> ResolvedOrderId {
    OrderIdRule::ANY_SCHEMA.resolve(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(product_id: &str, vpn: &str) -> RugRecord {
        RugRecord {
            product_id: product_id.to_string(),
            vpn: vpn.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_prefers_product_id_over_vpn() {
        let resolved = resolve_order_id(&record("HM-100", "VND-5X8"));
        assert!(resolved.is_present);
        assert_eq!(resolved.value, "HM-100");
        assert_eq!(resolved.source, Some(CanonicalField::ProductId));
    }

    #[test]
    fn test_falls_back_to_vpn() {
        let resolved = resolve_order_id(&record("", "VND-5X8"));
        assert_eq!(resolved.value, "VND-5X8");
        assert!(resolved.is_fallback(&OrderIdRule::ANY_SCHEMA));

        let blank = resolve_order_id(&record("   ", "VND-8X10"));
        assert_eq!(blank.value, "VND-8X10");
    }

    #[test]
    fn test_missing_when_both_empty() {
        let resolved = OrderIdRule::PRODUCT_ID_THEN_VPN.resolve(&record("", ""));
        assert!(!resolved.is_present);
        assert_eq!(resolved.value, "");
        assert_eq!(resolved.display_value(), NO_VALUE);
    }

    #[test]
    fn test_spreadsheet_rule_uses_sku_then_design() {
        let mut rec = RugRecord {
            design_id: "CSM-2".to_string(),
            ..Default::default()
        };
        assert_eq!(OrderIdRule::SKU_THEN_DESIGN.resolve(&rec).value, "CSM-2");

        rec.sku_override = "HM-778".to_string();
        assert_eq!(OrderIdRule::SKU_THEN_DESIGN.resolve(&rec).value, "HM-778");
        assert_eq!(resolve_order_id(&rec).value, "HM-778");
    }

    #[test]
    fn test_any_schema_ignores_design_when_vpn_present() {
        let rec = RugRecord {
            design_id: "AUR-01".to_string(),
            vpn: "AUR01-5X8".to_string(),
            ..Default::default()
        };
        assert_eq!(resolve_order_id(&rec).value, "AUR01-5X8");
    }
}
