use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use gazesmooth_common::{FilterError, FilterParams, TimestampUnit};
use gazesmooth_filter::OneEuroFilter;
use serde::{Deserialize, Serialize};

/// One raw input line.
#[derive(Debug, Deserialize)]
struct Sample {
    t: f64,
    value: f64,
}

/// One output line. `t` is echoed in the caller's unit.
#[derive(Debug, Serialize)]
struct FilteredSample {
    t: f64,
    raw: f64,
    filtered: f64,
}

pub fn run(input: Option<PathBuf>, unit: TimestampUnit, params: FilterParams) -> Result<()> {
    let mut filter = OneEuroFilter::from_params(&params)?;
    tracing::info!(
        frequency = params.frequency,
        min_cutoff = params.min_cutoff,
        beta = params.beta,
        dcutoff = params.derivative_cutoff,
        %unit,
        "Filtering samples"
    );

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    let count = match input {
        Some(path) => {
            let file =
                File::open(&path).with_context(|| format!("Failed to open {:?}", path))?;
            filter_stream(BufReader::new(file), &mut writer, &mut filter, unit)?
        }
        None => filter_stream(io::stdin().lock(), &mut writer, &mut filter, unit)?,
    };
    writer.flush()?;

    tracing::info!("Filtered {} samples", count);
    Ok(())
}

/// Filter every sample line from `reader` into `writer`, returning the
/// number of samples processed. Blank lines and `#` comments are skipped.
fn filter_stream<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    filter: &mut OneEuroFilter,
    unit: TimestampUnit,
) -> Result<usize> {
    let mut count = 0;
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let sample: Sample = serde_json::from_str(trimmed)
            .map_err(|e| FilterError::input(index + 1, e.to_string()))?;
        if !sample.t.is_finite() || !sample.value.is_finite() {
            return Err(FilterError::input(index + 1, "non-finite timestamp or value").into());
        }

        let filtered = filter.filter_value(sample.value, unit.to_secs_f64(sample.t));
        let out = FilteredSample {
            t: sample.t,
            raw: sample.value,
            filtered,
        };
        serde_json::to_writer(&mut *writer, &out)?;
        writer.write_all(b"\n")?;
        count += 1;
    }
    Ok(count)
}
