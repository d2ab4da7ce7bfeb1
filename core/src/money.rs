// core/src/money.rs

//! Price formatting for the storefront (Argentine peso, no decimals).

/// Formats a whole-peso amount the way `es-AR` currency formatting does:
/// `$` prefix, space, dot-grouped thousands, no decimal places.
///
/// Prices in this domain are non-negative; negative amounts still format
/// sensibly (`es-AR` puts the minus ahead of the symbol).
///
/// ```
/// use carniceria_core::money::format_price;
/// assert_eq!(format_price(12500), "$ 12.500");
/// assert_eq!(format_price(0), "$ 0");
/// assert_eq!(format_price(-800), "-$ 800");
/// ```
pub fn format_price(value: i64) -> String {
  let negative = value < 0;
  let digits = value.unsigned_abs().to_string();

  let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
  for (i, ch) in digits.chars().enumerate() {
    if i > 0 && (digits.len() - i) % 3 == 0 {
      grouped.push('.');
    }
    grouped.push(ch);
  }

  if negative {
    format!("-$ {grouped}")
  } else {
    format!("$ {grouped}")
  }
}
