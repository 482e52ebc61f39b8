// Amounts are stored as raw text; anything that does not parse as an
// integer is shown unchanged.
pub fn format_rupiah(raw: &str) -> String {
    match raw.parse::<i64>() {
        Ok(value) => format!("Rp. {}", group_thousands(value)),
        Err(_) => raw.to_string(),
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut reversed = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, c) in digits.chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            reversed.push('.');
        }
        reversed.push(c);
    }
    if value < 0 {
        reversed.push('-');
    }

    reversed.chars().rev().collect()
}
