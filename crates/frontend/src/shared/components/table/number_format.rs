//! Утилиты форматирования чисел для таблиц и отчётов
//!
//! Thousands are separated with a space, the decimal separator is a dot.

/// Вставляет пробел каждые 3 цифры целой части
fn group_thousands(integer_part: &str) -> String {
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    format!("{}{}", sign, grouped)
}

/// Форматирует число с разделителем тысяч и указанным количеством знаков после точки
///
/// ```
/// use frontend::shared::components::table::number_format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1 234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = format!("{:.*}", decimals.min(6) as usize, value);
    match formatted.split_once('.') {
        Some((int, frac)) => format!("{}.{}", group_thousands(int), frac),
        None => group_thousands(&formatted),
    }
}

/// Денежное значение: 2 знака после точки
///
/// ```
/// use frontend::shared::components::table::number_format::format_money;
/// assert_eq!(format_money(1234567.891), "1 234 567.89");
/// ```
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Целое число с разделителем тысяч
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Stock quantity, e.g. `12 500`
pub fn format_quantity(value: i64) -> String {
    group_thousands(&value.to_string())
}

/// Movement with an explicit sign: `+120`, `-35`, `0`
pub fn format_signed_quantity(value: i64) -> String {
    if value > 0 {
        format!("+{}", format_quantity(value))
    } else {
        format_quantity(value)
    }
}

/// Share in 0..=1 as a percentage with one decimal
pub fn format_percent(ratio: f64) -> String {
    format!("{}%", format_number_with_decimals(ratio * 100.0, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "1 234.56");
        assert_eq!(format_money(1234567.89), "1 234 567.89");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(-1234.56), "-1 234.56");
        assert_eq!(format_money(-123.0), "-123.00");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1 235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1 234.6");
        assert_eq!(format_number_with_decimals(1234.567, 3), "1 234.567");
        assert_eq!(format_number_with_decimals(999.0, 0), "999");
    }

    #[test]
    fn test_format_quantities() {
        assert_eq!(format_number_int(1234567.0), "1 234 567");
        assert_eq!(format_quantity(-100000), "-100 000");
        assert_eq!(format_signed_quantity(1200), "+1 200");
        assert_eq!(format_signed_quantity(-35), "-35");
        assert_eq!(format_signed_quantity(0), "0");
        assert_eq!(format_percent(0.8126), "81.3%");
    }
}
