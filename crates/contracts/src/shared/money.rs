/// Приводит денежное значение из таблицы к числу.
///
/// Strips `$` and thousands separators, then reads the longest leading
/// number. Trailing text after the number is ignored. Empty input, input
/// without a leading number, non-finite and negative values all become `0`.
///
/// # Примеры
/// ```
/// use contracts::shared::money::coerce_retail;
/// assert_eq!(coerce_retail("$1,234.50"), 1234.50);
/// assert_eq!(coerce_retail("12.99 USD"), 12.99);
/// assert_eq!(coerce_retail("abc"), 0.0);
/// ```
pub fn coerce_retail(raw: &str) -> f64 {
    let cleaned: String = raw.chars().filter(|c| !matches!(c, '$' | ',')).collect();
    leading_number(cleaned.trim())
        .and_then(|prefix| prefix.parse::<f64>().ok())
        .map(sanitize_price)
        .unwrap_or(0.0)
}

/// Самый длинный префикс вида `[+-]digits[.digits][e[+-]digits]`
fn leading_number(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_end = digits_from(end);
    let mut has_digits = int_end > end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        if frac_end > end + 1 || has_digits {
            has_digits |= frac_end > end + 1;
            end = frac_end;
        }
    }
    if !has_digits {
        return None;
    }

    // экспонента учитывается только вместе с цифрами
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    Some(&s[..end])
}

/// Keeps a price finite and non-negative
pub fn sanitize_price(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Форматирует цену для отображения: `$1234.50`.
///
/// Display only: the value is rounded to cents, so coercing the result
/// back gives the original price only when it had at most two decimals.
pub fn format_price(value: f64) -> String {
    format!("${:.2}", sanitize_price(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_retail() {
        assert_eq!(coerce_retail("$1,234.50"), 1234.50);
        assert_eq!(coerce_retail(""), 0.0);
        assert_eq!(coerce_retail("abc"), 0.0);
        assert_eq!(coerce_retail("999"), 999.0);
        assert_eq!(coerce_retail("  $89.99 "), 89.99);
        assert_eq!(coerce_retail("-5"), 0.0);
        assert_eq!(coerce_retail("inf"), 0.0);
        assert_eq!(coerce_retail("NaN"), 0.0);
    }

    #[test]
    fn test_coerce_retail_keeps_leading_number() {
        assert_eq!(coerce_retail("12.99 USD"), 12.99);
        assert_eq!(coerce_retail("$1,299.00*"), 1299.0);
        assert_eq!(coerce_retail("45 (MAP)"), 45.0);
        assert_eq!(coerce_retail(".5off"), 0.5);
        assert_eq!(coerce_retail("7."), 7.0);
        assert_eq!(coerce_retail("1e3 each"), 1000.0);
        assert_eq!(coerce_retail("12e"), 12.0);
        assert_eq!(coerce_retail("-3 credit"), 0.0);
        assert_eq!(coerce_retail("USD 12.99"), 0.0);
        assert_eq!(coerce_retail("."), 0.0);
        assert_eq!(coerce_retail("1e999"), 0.0);
    }

    #[test]
    fn test_coerce_is_idempotent() {
        for raw in ["$1,234.50", "", "abc", "999", "12.345", "$0.99", "1,000,000"] {
            let once = coerce_retail(raw);
            assert_eq!(coerce_retail(&once.to_string()), once, "raw = {raw:?}");
        }
        for raw in ["12.99 USD", "$1,299.00*"] {
            let once = coerce_retail(raw);
            assert_eq!(coerce_retail(&once.to_string()), once, "raw = {raw:?}");
        }
    }

    #[test]
    fn test_sanitize_price() {
        assert_eq!(sanitize_price(999.0), 999.0);
        assert_eq!(sanitize_price(f64::NAN), 0.0);
        assert_eq!(sanitize_price(-1.0), 0.0);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(1234.5), "$1234.50");
        assert_eq!(format_price(0.0), "$0.00");
        // округление до центов
        assert_eq!(coerce_retail(&format_price(coerce_retail("12.346"))), 12.35);
    }
}
