use crate::config::Configuration;
use crate::payload::{Payload, PayloadError};
use crate::report::Report;
use crate::scan::{collect_targets, ScanError, SuffixFilter, Target};
use std::fs::OpenOptions;
use std::io::{self, Write};
use tracing::{debug, trace};

/// Sizes observed for one padded file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PadRecord {
    pub index: usize,
    pub name: String,
    pub size_before: u64,
    pub size_after: u64,
    pub appends: u64,
}

#[derive(Debug)]
pub struct PadOutcome {
    pub records: Vec<PadRecord>,
}

#[derive(Debug, thiserror::Error)]
pub enum PadError {
    #[error(transparent)]
    Payload(#[from] PayloadError),
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error("Failed to pad {path}: {source}")]
    Target {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write report: {0}")]
    Report(#[source] io::Error),
}

#[derive(Default)]
pub struct PadService;

impl PadService {
    /// Pad every matching file in the configured directory, writing a row to
    /// `report` as each one is processed. The first error aborts the run.
    pub fn execute<W: Write>(
        &self,
        config: &Configuration,
        report: &mut Report<W>,
    ) -> Result<PadOutcome, PadError> {
        debug!(?config, "starting run");
        // Loaded before the directory is looked at so an empty source never
        // touches a target.
        let payload = Payload::load(&config.source)?;
        let filter = SuffixFilter::new(&config.suffix)?;

        report.header().map_err(PadError::Report)?;
        let targets = collect_targets(&config.dir, &filter, &config.source)?;
        debug!(count = targets.len(), "selected targets");

        let mut records = Vec::with_capacity(targets.len());
        for (offset, target) in targets.iter().enumerate() {
            let record = pad_target(offset + 1, target, &payload, config.threshold, report)?;
            records.push(record);
        }
        Ok(PadOutcome { records })
    }
}

fn pad_target<W: Write>(
    index: usize,
    target: &Target,
    payload: &Payload,
    threshold: u64,
    report: &mut Report<W>,
) -> Result<PadRecord, PadError> {
    let target_error = |source| PadError::Target {
        path: target.path.display().to_string(),
        source,
    };

    let mut file = OpenOptions::new()
        .append(true)
        .open(&target.path)
        .map_err(target_error)?;
    let size_before = file.metadata().map_err(target_error)?.len();

    report
        .begin_row(index, &target.name, size_before)
        .map_err(PadError::Report)?;
    let (size_after, appends) =
        append_until(&mut file, payload, size_before, threshold).map_err(target_error)?;
    report.end_row(size_after).map_err(PadError::Report)?;

    debug!(file = %target.name, size_before, size_after, appends, "padded");
    Ok(PadRecord {
        index,
        name: target.name.clone(),
        size_before,
        size_after,
        appends,
    })
}

/// Append `payload` to `sink` until the tracked size reaches `threshold`.
///
/// `size` is the sink's current length. It is advanced arithmetically, so the
/// result may overshoot `threshold` by up to `payload.size() - 1` bytes.
/// Returns the final size and the number of copies written.
pub fn append_until<S: Write>(
    sink: &mut S,
    payload: &Payload,
    mut size: u64,
    threshold: u64,
) -> io::Result<(u64, u64)> {
    let mut appends = 0;
    while size < threshold {
        sink.write_all(payload.as_bytes())?;
        size += payload.size();
        appends += 1;
        trace!(size, "appended payload");
    }
    sink.flush()?;
    Ok((size, appends))
}
