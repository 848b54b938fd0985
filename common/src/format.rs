// price formatting for the es-AR locale
//
// matches what Intl.NumberFormat("es-AR", { style: "currency", currency: "ARS",
// maximumFractionDigits: 0 }) produces: "$", a no-break space, the amount rounded
// half away from zero, and "." as the thousands separator

const CURRENCY_SYMBOL: &str = "$";
const THOUSANDS_SEPARATOR: char = '.';
const NBSP: char = '\u{a0}';

pub fn format_price(price: f64) -> String {
    if !price.is_finite() {
        return format!("{CURRENCY_SYMBOL}{NBSP}{price}");
    }

    let rounded = price.round();
    let sign = if rounded.is_sign_negative() { "-" } else { "" };

    format!(
        "{sign}{CURRENCY_SYMBOL}{NBSP}{}",
        group_thousands(&format!("{:.0}", rounded.abs()))
    )
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(THOUSANDS_SEPARATOR);
        }
        out.push(c);
    }

    out
}
