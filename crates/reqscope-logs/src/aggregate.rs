use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::classifier::LineClassifier;
use crate::stats::RequestStats;

/// Error raised when an input file cannot be read
///
/// Any read failure is fatal to the whole run; no partial statistics are
/// returned.
#[derive(Debug, thiserror::Error)]
pub enum AggregateError {
    #[error("failed to open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Aggregate request events from the given log files
///
/// Files are consumed strictly in the given order, each streamed line by
/// line and fully read before the next begins. The final counts do not
/// depend on that order.
pub fn aggregate_files<P: AsRef<Path>>(
    classifier: &LineClassifier,
    files: &[P],
) -> Result<RequestStats, AggregateError> {
    let mut stats = RequestStats::new();
    for file in files {
        aggregate_file(classifier, file.as_ref(), &mut stats)?;
    }
    Ok(stats)
}

/// Consume one log file into the statistics
fn aggregate_file(
    classifier: &LineClassifier,
    path: &Path,
    stats: &mut RequestStats,
) -> Result<(), AggregateError> {
    let file = File::open(path).map_err(|source| AggregateError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut lines = 0u64;
    let mut events = 0u64;

    for line in BufReader::new(file).lines() {
        let line = line.map_err(|source| AggregateError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        lines += 1;

        if let Some(event) = classifier.classify(&line) {
            stats.record(strip_query(&event.path), event.level);
            events += 1;
        }
    }

    debug!(
        "{}: {} lines read, {} request events",
        path.display(),
        lines,
        events
    );

    Ok(())
}

/// Truncate a request path at the first `?`, dropping the query string
fn strip_query(path: &str) -> &str {
    path.split('?').next().unwrap_or(path)
}
