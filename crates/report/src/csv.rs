//! Minimal RFC 4180 tables.
//!
//! Fields containing a comma, quote, CR or LF are quoted with inner quotes
//! doubled. Files may start with a UTF-8 BOM; the reader strips it.

use rank_core::{Error, Result};
use std::borrow::Cow;
use std::path::Path;
use tracing::debug;

const BOM: char = '\u{feff}';

/// Quote a field if it needs it
pub fn escape_field(field: &str) -> Cow<'_, str> {
  if field.contains([',', '"', '\r', '\n']) {
    Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
  } else {
    Cow::Borrowed(field)
  }
}

/// Header row plus data rows, all as text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
  pub headers: Vec<String>,
  pub rows: Vec<Vec<String>>,
}

impl CsvTable {
  pub fn new<I, S>(headers: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      headers: headers.into_iter().map(Into::into).collect(),
      rows: Vec::new(),
    }
  }

  pub fn push_row(&mut self, row: Vec<String>) {
    debug_assert_eq!(row.len(), self.headers.len(), "row width must match header");
    self.rows.push(row);
  }

  /// Position of a header
  pub fn column(&self, name: &str) -> Option<usize> {
    self.headers.iter().position(|h| h == name)
  }

  pub fn to_csv_string(&self, bom: bool) -> String {
    let mut out = String::new();
    if bom {
      out.push(BOM);
    }
    for row in std::iter::once(&self.headers).chain(self.rows.iter()) {
      let line: Vec<Cow<'_, str>> = row.iter().map(|f| escape_field(f)).collect();
      out.push_str(&line.join(","));
      out.push('\n');
    }
    out
  }

  /// Write to `path`, creating parent directories
  pub fn write(&self, path: &Path, bom: bool) -> Result<()> {
    if let Some(parent) = path.parent()
      && !parent.as_os_str().is_empty()
    {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, self.to_csv_string(bom))?;
    debug!(path = %path.display(), rows = self.rows.len(), "Wrote CSV");
    Ok(())
  }

  pub fn read(path: &Path) -> Result<Self> {
    let text = std::fs::read_to_string(path)?;
    Self::parse(&text)
  }

  /// Parse CSV text; the first record is the header
  pub fn parse(text: &str) -> Result<Self> {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    let mut records = parse_records(text)?;
    if records.is_empty() {
      return Err(Error::Csv {
        line: 1,
        reason: "missing header row".to_string(),
      });
    }

    let headers = records.remove(0);
    for (i, row) in records.iter().enumerate() {
      if row.len() != headers.len() {
        return Err(Error::Csv {
          line: i + 2,
          reason: format!("expected {} fields, found {}", headers.len(), row.len()),
        });
      }
    }

    Ok(Self { headers, rows: records })
  }
}

fn parse_records(text: &str) -> Result<Vec<Vec<String>>> {
  let mut records = Vec::new();
  let mut record: Vec<String> = Vec::new();
  let mut field = String::new();
  let mut in_quotes = false;
  let mut line = 1usize;
  let mut chars = text.chars().peekable();

  while let Some(ch) = chars.next() {
    if in_quotes {
      match ch {
        '"' if chars.peek() == Some(&'"') => {
          chars.next();
          field.push('"');
        }
        '"' => in_quotes = false,
        '\n' => {
          line += 1;
          field.push(ch);
        }
        _ => field.push(ch),
      }
      continue;
    }

    match ch {
      '"' if field.is_empty() => in_quotes = true,
      '"' => {
        return Err(Error::Csv {
          line,
          reason: "unexpected quote inside unquoted field".to_string(),
        });
      }
      ',' => record.push(std::mem::take(&mut field)),
      '\r' if chars.peek() == Some(&'\n') => {}
      '\n' | '\r' => {
        // Blank lines are skipped
        if !record.is_empty() || !field.is_empty() {
          record.push(std::mem::take(&mut field));
          records.push(std::mem::take(&mut record));
        }
        line += 1;
      }
      _ => field.push(ch),
    }
  }

  if in_quotes {
    return Err(Error::Csv {
      line,
      reason: "unterminated quoted field".to_string(),
    });
  }

  // Last record without trailing newline
  if !field.is_empty() || !record.is_empty() {
    record.push(field);
    records.push(record);
  }

  Ok(records)
}
