use crate::schema::Schema;
use anyhow::{Context, Result, anyhow};
use flate2::read::GzDecoder;
use std::{fs::File, io::Read, path::Path};

/// Load replacement seed rows for a dashboard from `.csv`, `.csv.gz` or
/// `.json`. Columns are matched to the schema by name (case-insensitive)
/// and returned in schema order; a missing column is an error. Nothing is
/// ever written back to the file.
pub fn load_rows(path: &Path, schema: &Schema) -> Result<Vec<Vec<String>>> {
    let data = read_maybe_gz(path)?;
    if is_json(path) {
        parse_json(&data, schema)
    } else {
        parse_csv(&data, schema)
    }
    .with_context(|| format!("while reading {}", path.display()))
}

/// Format dispatch looks at the extension under a trailing `.gz`, so
/// `foo.json.gz` would not silently go down the CSV path.
fn is_json(path: &Path) -> bool {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("")
        .to_lowercase();
    name.strip_suffix(".gz").unwrap_or(&name).ends_with(".json")
}

fn read_maybe_gz(path: &Path) -> Result<String> {
    let mut data = String::new();
    let f = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    if path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("gz"))
    {
        GzDecoder::new(f).read_to_string(&mut data)?;
    } else {
        let mut f = f;
        f.read_to_string(&mut data)?;
    }
    Ok(data)
}

fn parse_csv(data: &str, schema: &Schema) -> Result<Vec<Vec<String>>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(data.as_bytes());
    let headers = rdr
        .headers()?
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>();

    // Map each schema field to its CSV column up front.
    let mut mapping = Vec::with_capacity(schema.len());
    for field in schema.fields() {
        let idx = headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(&field.name))
            .ok_or_else(|| anyhow!("column '{}' not found in CSV header", field.name))?;
        mapping.push(idx);
    }

    let mut rows = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        rows.push(
            mapping
                .iter()
                .map(|&i| rec.get(i).unwrap_or("").to_string())
                .collect(),
        );
    }
    Ok(rows)
}

fn parse_json(data: &str, schema: &Schema) -> Result<Vec<Vec<String>>> {
    let objects: Vec<serde_json::Map<String, serde_json::Value>> =
        serde_json::from_str(data).context("expected a JSON array of objects")?;

    let mut rows = Vec::with_capacity(objects.len());
    for (n, obj) in objects.iter().enumerate() {
        let mut row = Vec::with_capacity(schema.len());
        for field in schema.fields() {
            let value = obj
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(&field.name))
                .map(|(_, v)| v)
                .ok_or_else(|| anyhow!("key '{}' missing in object {}", field.name, n))?;
            row.push(match value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            });
        }
        rows.push(row);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldKind, FieldSpec, Schema};

    fn schema() -> Schema {
        Schema::new(vec![
            FieldSpec::new("Vendor", FieldKind::Text, true),
            FieldSpec::new("Amount", FieldKind::Currency, false),
        ])
    }

    #[test]
    fn csv_columns_are_reordered_to_schema_order() {
        let data = "Amount,Vendor\nRp 250.000,CV Karya Abadi\nRp 1.000.000,PT Sumber Makmur\n";
        let rows = parse_csv(data, &schema()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["CV Karya Abadi", "Rp 250.000"]);
    }

    #[test]
    fn csv_missing_column_is_an_error() {
        let data = "Vendor\nCV Karya Abadi\n";
        let err = parse_csv(data, &schema()).unwrap_err();
        assert!(err.to_string().contains("Amount"));
    }

    #[test]
    fn json_objects_match_keys_case_insensitively() {
        let data = r#"[{"vendor": "UD Tani Jaya", "AMOUNT": "Rp 3.750.000"}]"#;
        let rows = parse_json(data, &schema()).unwrap();
        assert_eq!(rows, vec![vec!["UD Tani Jaya", "Rp 3.750.000"]]);
    }

    #[test]
    fn format_dispatch_sees_through_a_gz_suffix() {
        assert!(is_json(Path::new("rows.json")));
        assert!(is_json(Path::new("rows.JSON.gz")));
        assert!(!is_json(Path::new("rows.csv")));
        assert!(!is_json(Path::new("rows.csv.gz")));
    }

    #[test]
    fn json_numbers_are_stringified() {
        let data = r#"[{"Vendor": "X", "Amount": 250000}]"#;
        let rows = parse_json(data, &schema()).unwrap();
        assert_eq!(rows[0][1], "250000");
    }
}
