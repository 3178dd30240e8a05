//! Write the constructed root system to disk.

use anyhow::{Context, Result};
use kmroots_core::root::Root;
use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Output encodings for the root listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// One comma-separated line per root: the vector components, then the
    /// multiplicity. The format the original tooling consumed.
    #[default]
    Txt,
    /// A JSON array of `{vector, multiplicity}` records; the multiplicity
    /// is a decimal string since it overflows JSON numbers.
    Json,
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "txt" => Ok(Self::Txt),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown export format {other:?} (expected txt or json)")),
        }
    }
}

/// One root row in the JSON listing.
#[derive(Serialize)]
struct RootRecord<'a> {
    vector: &'a [i64],
    multiplicity: String,
}

/// Render roots (already in height/lex order) as comma-separated rows.
pub fn to_txt(roots: &[&Root]) -> String {
    let mut out = String::new();
    for root in roots {
        for component in root.vector().components() {
            let _ = write!(out, "{component},");
        }
        let _ = writeln!(out, "{}", root.multiplicity());
    }
    out
}

/// Render roots as a pretty-printed JSON array.
pub fn to_json(roots: &[&Root]) -> Result<String> {
    let records: Vec<RootRecord<'_>> = roots
        .iter()
        .map(|root| RootRecord {
            vector: root.vector().components(),
            multiplicity: root.multiplicity().to_string(),
        })
        .collect();
    serde_json::to_string_pretty(&records).context("failed to serialize root listing to JSON")
}

/// Write the listing to `path`, overwriting any existing file.
pub fn write(path: &Path, roots: &[&Root], format: ExportFormat) -> Result<()> {
    let contents = match format {
        ExportFormat::Txt => to_txt(roots),
        ExportFormat::Json => to_json(roots)?,
    };
    fs::write(path, contents)
        .with_context(|| format!("failed to write root listing to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kmroots_core::fraction::Fraction;
    use kmroots_core::vector::RootVector;
    use num_bigint::BigUint;

    fn root(components: [i64; 3], multiplicity: u32) -> Root {
        Root::new(
            RootVector::from(components),
            2,
            BigUint::from(multiplicity),
            Fraction::from_integer(i64::from(multiplicity)),
        )
    }

    #[test]
    fn test_txt_rows() {
        let a = root([1, 0, 0], 1);
        let b = root([2, 2, 1], 2);
        let txt = to_txt(&[&a, &b]);
        assert_eq!(txt, "1,0,0,1\n2,2,1,2\n");
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("txt".parse::<ExportFormat>().unwrap(), ExportFormat::Txt);
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!("csv".parse::<ExportFormat>().is_err());
    }
}
