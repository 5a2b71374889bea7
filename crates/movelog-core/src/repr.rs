//! `Display` helpers shared by the record types.

use std::fmt;

/// Renders an optional string as `'value'` or `None`.
pub(crate) struct Quoted<'a>(pub Option<&'a str>);

impl fmt::Display for Quoted<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.0 {
      Some(s) => write!(f, "'{s}'"),
      None => f.write_str("None"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::Quoted;

  #[test]
  fn quotes_present_values() {
    assert_eq!(Quoted(Some("admin")).to_string(), "'admin'");
  }

  #[test]
  fn absent_values_render_as_none() {
    assert_eq!(Quoted(None).to_string(), "None");
  }
}
