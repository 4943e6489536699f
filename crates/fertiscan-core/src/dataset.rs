//! CSV dataset loading for the trainer.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;
use smartcore::linalg::basic::matrix::DenseMatrix;
use tracing::debug;

use crate::error::{FertiscanError, Result};
use crate::sample::NUM_FEATURES;

/// Name of the label column in the training CSV.
pub const LABEL_COLUMN: &str = "Output";

/// A labeled tabular dataset: twelve numeric feature columns plus the
/// `Output` class label, read in file order.
#[derive(Debug, Clone)]
pub struct SoilDataset {
    feature_names: Vec<String>,
    features: Vec<[f64; NUM_FEATURES]>,
    labels: Vec<u32>,
}

impl SoilDataset {
    /// Loads a dataset from a CSV file with a header row.
    ///
    /// The column named [`LABEL_COLUMN`] holds the integer class label; the
    /// remaining columns are parsed as numeric features in file order. Any
    /// malformed cell fails the whole load.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        let headers = reader.headers()?.clone();
        let label_idx = headers
            .iter()
            .position(|h| h == LABEL_COLUMN)
            .ok_or_else(|| FertiscanError::MissingColumn {
                column: LABEL_COLUMN.to_string(),
            })?;

        let feature_names: Vec<String> = headers
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != label_idx)
            .map(|(_, h)| h.to_string())
            .collect();

        if feature_names.len() != NUM_FEATURES {
            return Err(FertiscanError::FeatureCount {
                expected: NUM_FEATURES,
                found: feature_names.len(),
            });
        }

        let mut features = Vec::new();
        let mut labels = Vec::new();

        for (row_idx, record) in reader.records().enumerate() {
            let record = record?;
            // Header is row 0 in the file.
            let row_no = row_idx + 1;

            let mut row = [0.0f64; NUM_FEATURES];
            let mut col = 0;
            for (i, cell) in record.iter().enumerate() {
                if i == label_idx {
                    let label =
                        cell.parse::<u32>()
                            .map_err(|_| FertiscanError::InvalidValue {
                                row: row_no,
                                column: LABEL_COLUMN.to_string(),
                                value: cell.to_string(),
                            })?;
                    labels.push(label);
                } else {
                    row[col] = cell
                        .parse::<f64>()
                        .map_err(|_| FertiscanError::InvalidValue {
                            row: row_no,
                            column: feature_names[col].clone(),
                            value: cell.to_string(),
                        })?;
                    col += 1;
                }
            }
            features.push(row);
        }

        if features.is_empty() {
            return Err(FertiscanError::EmptyDataset);
        }

        debug!(
            rows = features.len(),
            columns = feature_names.len() + 1,
            "dataset loaded"
        );

        Ok(Self {
            feature_names,
            features,
            labels,
        })
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Feature column names, in file order.
    #[must_use]
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Class labels, one per sample.
    #[must_use]
    pub fn labels(&self) -> &[u32] {
        &self.labels
    }

    /// Sample counts per class label.
    #[must_use]
    pub fn class_counts(&self) -> BTreeMap<u32, usize> {
        let mut counts = BTreeMap::new();
        for &label in &self.labels {
            *counts.entry(label).or_insert(0) += 1;
        }
        counts
    }

    /// Feature matrix in the layout the classifier consumes.
    pub fn to_matrix(&self) -> Result<DenseMatrix<f64>> {
        let rows: Vec<Vec<f64>> = self.features.iter().map(|r| r.to_vec()).collect();
        DenseMatrix::from_2d_vec(&rows).map_err(|e| FertiscanError::Training(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "N,P,K,pH,EC,OC,S,Zn,Fe,Cu,Mn,B,Output";

    fn write_csv(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("fertiscan-dataset-{name}.csv"));
        let mut file = File::create(&path).unwrap();
        writeln!(file, "{contents}").unwrap();
        path
    }

    #[test]
    fn loads_well_formed_csv() {
        let path = write_csv(
            "ok",
            &format!(
                "{HEADER}\n138,8.6,560,7.4,0.5,0.7,5.9,0.2,0.2,0.6,0.2,0.8,0\n\
                 210,15.1,480,6.1,0.8,1.2,12.3,0.7,4.1,0.9,1.4,0.4,2"
            ),
        );

        let dataset = SoilDataset::from_csv(&path).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.labels(), &[0, 2]);
        assert_eq!(dataset.feature_names().len(), NUM_FEATURES);
        assert_eq!(dataset.feature_names()[0], "N");
    }

    #[test]
    fn label_column_position_does_not_matter() {
        let path = write_csv(
            "label-first",
            "Output,N,P,K,pH,EC,OC,S,Zn,Fe,Cu,Mn,B\n1,10,2,3,6.5,0.4,0.8,5,0.3,2,0.4,1,0.2",
        );

        let dataset = SoilDataset::from_csv(&path).unwrap();
        assert_eq!(dataset.labels(), &[1]);
        assert_eq!(dataset.feature_names()[0], "N");
    }

    #[test]
    fn missing_output_column_is_an_error() {
        let path = write_csv(
            "no-output",
            "N,P,K,pH,EC,OC,S,Zn,Fe,Cu,Mn,B\n1,2,3,4,5,6,7,8,9,10,11,12",
        );

        let err = SoilDataset::from_csv(&path).unwrap_err();
        assert!(matches!(err, FertiscanError::MissingColumn { .. }));
    }

    #[test]
    fn wrong_feature_count_is_an_error() {
        let path = write_csv("narrow", "N,P,K,Output\n1,2,3,0");
        let err = SoilDataset::from_csv(&path).unwrap_err();
        assert!(matches!(
            err,
            FertiscanError::FeatureCount {
                expected: NUM_FEATURES,
                found: 3
            }
        ));
    }

    #[test]
    fn malformed_cell_is_an_error() {
        let path = write_csv(
            "bad-cell",
            &format!("{HEADER}\n138,8.6,abc,7.4,0.5,0.7,5.9,0.2,0.2,0.6,0.2,0.8,0"),
        );

        let err = SoilDataset::from_csv(&path).unwrap_err();
        match err {
            FertiscanError::InvalidValue { row, column, value } => {
                assert_eq!(row, 1);
                assert_eq!(column, "K");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn header_only_file_is_empty() {
        let path = write_csv("empty", HEADER);
        let err = SoilDataset::from_csv(&path).unwrap_err();
        assert!(matches!(err, FertiscanError::EmptyDataset));
    }

    #[test]
    fn class_counts_cover_all_labels() {
        let path = write_csv(
            "counts",
            &format!(
                "{HEADER}\n1,2,3,4,5,6,7,8,9,10,11,12,0\n1,2,3,4,5,6,7,8,9,10,11,12,0\n\
                 1,2,3,4,5,6,7,8,9,10,11,12,1"
            ),
        );

        let dataset = SoilDataset::from_csv(&path).unwrap();
        let counts = dataset.class_counts();
        assert_eq!(counts.get(&0), Some(&2));
        assert_eq!(counts.get(&1), Some(&1));
        assert_eq!(counts.get(&2), None);
    }
}
