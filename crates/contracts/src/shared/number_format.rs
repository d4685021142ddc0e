//! Утилиты форматирования чисел: разделитель тысяч запятая, валюта боливиано (Bs.)

pub const CURRENCY_PREFIX: &str = "Bs.";

/// Inserts `,` every three digits of an integer string, keeping a leading sign
fn group_thousands(integer_part: &str) -> String {
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    format!("{}{}", sign, result)
}

/// Число с фиксированным количеством знаков и разделителем тысяч
///
/// ```
/// use contracts::shared::number_format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    match formatted.split_once('.') {
        Some((int_part, frac)) => format!("{}.{}", group_thousands(int_part), frac),
        None => group_thousands(&formatted),
    }
}

/// Integer with thousands separators
pub fn format_int(value: i64) -> String {
    group_thousands(&value.to_string())
}

/// Grouped number with up to three fraction digits, trailing zeros trimmed
pub fn format_locale(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 9.0e15 {
        return format_int(value as i64);
    }
    let formatted = format_number_with_decimals(value, 3);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Денежное значение: `Bs. 1,234.50`
pub fn format_money(value: f64) -> String {
    format!("{} {}", CURRENCY_PREFIX, format_number_with_decimals(value, 2))
}

/// Signed percentage change with one decimal: `+12.5%`, `-3.0%`
pub fn format_change(value: f64) -> String {
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{}{:.1}%", sign, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.5), "Bs. 1,234.50");
        assert_eq!(format_money(1234567.891), "Bs. 1,234,567.89");
        assert_eq!(format_money(0.0), "Bs. 0.00");
        assert_eq!(format_money(-1234.56), "Bs. -1,234.56");
    }

    #[test]
    fn test_format_int() {
        assert_eq!(format_int(1234567), "1,234,567");
        assert_eq!(format_int(999), "999");
        assert_eq!(format_int(-1000), "-1,000");
    }

    #[test]
    fn test_format_locale() {
        assert_eq!(format_locale(1500.0), "1,500");
        assert_eq!(format_locale(1234.5), "1,234.5");
        assert_eq!(format_locale(0.1239), "0.124");
    }

    #[test]
    fn test_format_change() {
        assert_eq!(format_change(12.34), "+12.3%");
        assert_eq!(format_change(0.0), "+0.0%");
        assert_eq!(format_change(-3.0), "-3.0%");
    }
}
