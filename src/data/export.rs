use std::path::Path;

use anyhow::{Context, Result};

use super::model::{DescriptiveObservation, NumericObservation};

/// Write observations as `key,value,kind` CSV rows.
///
/// Numeric rows come first, in series order, followed by descriptive rows.
pub fn write_observations_csv(
    path: &Path,
    numeric: &[NumericObservation],
    descriptive: &[DescriptiveObservation],
) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV file")?;
    writer
        .write_record(["key", "value", "kind"])
        .context("writing CSV header")?;

    for obs in numeric {
        let value = obs.value.to_string();
        writer
            .write_record([obs.key.as_str(), value.as_str(), "numeric"])
            .with_context(|| format!("writing row for '{}'", obs.key))?;
    }
    for obs in descriptive {
        writer
            .write_record([obs.key.as_str(), obs.value.as_str(), "descriptive"])
            .with_context(|| format!("writing row for '{}'", obs.key))?;
    }

    writer.flush().context("flushing CSV file")?;
    log::info!(
        "Exported {} observation(s) to {}",
        numeric.len() + descriptive.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_numeric_then_descriptive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("obs.csv");

        let numeric = vec![NumericObservation::new("Revenue", 1234.5)];
        let descriptive = vec![DescriptiveObservation {
            key: "Notes".to_string(),
            value: "strong, steady quarter".to_string(),
        }];
        write_observations_csv(&path, &numeric, &descriptive).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<Vec<String>> = reader
            .records()
            .map(|r| r.unwrap().iter().map(str::to_string).collect())
            .collect();
        assert_eq!(
            rows,
            vec![
                vec!["Revenue", "1234.5", "numeric"],
                vec!["Notes", "strong, steady quarter", "descriptive"],
            ]
        );
    }
}
