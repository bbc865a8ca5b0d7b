use std::path::{Path, PathBuf};

use crate::error::Result;

/// Outcome of probing every photo source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeReport {
    /// Photos whose headers decoded
    pub ready: usize,
    /// Indices of photos that are missing or unreadable
    pub missing: Vec<usize>,
}

impl ProbeReport {
    pub fn total(&self) -> usize {
        self.ready + self.missing.len()
    }
}

/// Read an image's dimensions without decoding the pixels
pub fn probe_photo(path: &Path) -> Result<(u32, u32)> {
    Ok(image::image_dimensions(path)?)
}

/// Probe every path, logging each failure
pub fn probe_all(paths: &[PathBuf]) -> ProbeReport {
    let mut report = ProbeReport::default();

    for (index, path) in paths.iter().enumerate() {
        match probe_photo(path) {
            Ok((width, height)) => {
                tracing::debug!(path = %path.display(), width, height, "photo ready");
                report.ready += 1;
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "photo unavailable");
                report.missing.push(index);
            }
        }
    }

    report
}

/// Probe on a blocking worker so the UI thread never touches the disk
pub async fn probe_async(paths: Vec<PathBuf>) -> ProbeReport {
    match tokio::task::spawn_blocking(move || probe_all(&paths)).await {
        Ok(report) => {
            tracing::info!(ready = report.ready, total = report.total(), "asset probe complete");
            report
        }
        Err(err) => {
            tracing::error!(%err, "asset probe worker failed");
            ProbeReport::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_probe_reads_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("1.png");
        image::RgbImage::new(4, 3).save(&path).unwrap();

        assert_eq!(probe_photo(&path).unwrap(), (4, 3));
    }

    #[test]
    fn test_missing_photo_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = probe_photo(&dir.path().join("nope.jpg"));

        assert!(matches!(result, Err(Error::Image(_))));
    }

    #[test]
    fn test_probe_all_reports_missing_indices() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join("2.png");
        image::RgbImage::new(2, 2).save(&present).unwrap();

        let paths = vec![dir.path().join("1.jpg"), present, dir.path().join("3.jpg")];
        let report = probe_all(&paths);

        assert_eq!(report.ready, 1);
        assert_eq!(report.missing, vec![0, 2]);
        assert_eq!(report.total(), 3);
    }
}
