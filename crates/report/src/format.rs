//! Number formatting for console output.

/// Integer with thousands separators: 1234567 -> "1,234,567"
pub fn thousands(value: u64) -> String {
  let digits = value.to_string();
  let mut out = String::with_capacity(digits.len() + digits.len() / 3);
  for (i, ch) in digits.chars().enumerate() {
    if i > 0 && (digits.len() - i) % 3 == 0 {
      out.push(',');
    }
    out.push(ch);
  }
  out
}

/// Float rounded to a whole number, with thousands separators
pub fn thousands_f64(value: f64) -> String {
  if !value.is_finite() || value < 0.0 {
    return format!("{:.0}", value);
  }
  thousands(value.round() as u64)
}

/// Percentage with one decimal: "37.5%"
pub fn percent(value: f64) -> String {
  format!("{:.1}%", value)
}

/// Share of `part` in `whole` as a percentage (0 when `whole` is 0)
pub fn share(part: usize, whole: usize) -> f64 {
  if whole == 0 {
    0.0
  } else {
    part as f64 / whole as f64 * 100.0
  }
}

/// Cut a title to `max` characters, appending "..." when shortened
pub fn truncate_title(title: &str, max: usize) -> String {
  if title.chars().count() <= max {
    title.to_string()
  } else {
    let cut: String = title.chars().take(max).collect();
    format!("{}...", cut)
  }
}
