//! Output formatting and logging utilities

use crate::scf_impl::SelfConsistentSolution;
use color_eyre::eyre::Result;
use std::fmt;
use std::fs::File;
use std::io::Write;
use std::time::SystemTime as StdSystemTime;
use tracing::info;
use tracing_subscriber::{
    fmt::format::Writer, fmt::layer, fmt::time::FormatTime, layer::SubscriberExt,
    util::SubscriberInitExt, Registry,
};

/// Custom time formatter that shows only seconds
struct SecondPrecisionTimer;

impl FormatTime for SecondPrecisionTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        let now = StdSystemTime::now();
        let duration = now
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default();

        let total_seconds = duration.as_secs();
        let hours = (total_seconds / 3600) % 24;
        let minutes = (total_seconds / 60) % 60;
        let seconds = total_seconds % 60;

        write!(w, "{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}

/// Setup output logging to file or stdout
pub fn setup_output(output_path: Option<&String>) {
    match output_path {
        Some(path) => match File::create(path) {
            Ok(log) => {
                let file_layer = layer()
                    .with_writer(log)
                    .with_timer(SecondPrecisionTimer)
                    .with_ansi(false);
                Registry::default().with(file_layer).init();
                info!("Output will be written to: {}", path);
            }
            Err(err) => eprintln!("Could not create output file {}: {}", path, err),
        },
        None => {
            let stdout_layer = layer()
                .with_writer(std::io::stdout)
                .with_timer(SecondPrecisionTimer)
                .with_ansi(true);
            Registry::default().with(stdout_layer).init();
            info!("Output will be printed to stdout");
        }
    }
}

/// Serialize the converged solution as pretty JSON
pub fn write_solution<W: Write>(writer: &mut W, solution: &SelfConsistentSolution) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, solution)?;
    writeln!(writer)?;
    Ok(())
}
