//! Trace exporter: stream swarm snapshots as JSON lines.
//!
//! One line per tick, each a serialized `SwarmSnapshot`. Presentation layers
//! can replay the file without linking against the runtime.

use resonance_core::error::Result;
use resonance_core::types::SwarmSnapshot;
use std::io::Write;

/// Writes one JSON object per recorded snapshot.
pub struct TraceRecorder<W: Write> {
    writer: W,
    records: usize,
}

impl<W: Write> TraceRecorder<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, records: 0 }
    }

    /// Append a snapshot as a single line.
    pub fn record(&mut self, snapshot: &SwarmSnapshot) -> Result<()> {
        serde_json::to_writer(&mut self.writer, snapshot)?;
        self.writer.write_all(b"\n")?;
        self.records += 1;
        Ok(())
    }

    /// Number of snapshots written so far.
    pub fn records(&self) -> usize {
        self.records
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

/// Render snapshots as a JSON-lines string.
pub fn to_json_lines(snapshots: &[SwarmSnapshot]) -> Result<String> {
    let mut recorder = TraceRecorder::new(Vec::new());
    for snapshot in snapshots {
        recorder.record(snapshot)?;
    }
    let bytes = recorder.finish()?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
