//! Number formatting for table cells and exports

/// Inserts `,` between groups of three digits of the integer part
fn group_thousands(integer_part: &str) -> String {
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{}{}", sign, grouped)
}

/// `1234.567` with 2 decimals gives `"1,234.57"`
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    match formatted.split_once('.') {
        Some((integer, fraction)) => format!("{}.{}", group_thousands(integer), fraction),
        None => group_thousands(&formatted),
    }
}

/// Currency amount, e.g. `$1,234.50`
pub fn format_money(value: f64) -> String {
    let amount = format_number_with_decimals(value.abs(), 2);
    if value < 0.0 {
        format!("-${}", amount)
    } else {
        format!("${}", amount)
    }
}

pub fn format_int(value: impl Into<i64>) -> String {
    group_thousands(&value.into().to_string())
}
