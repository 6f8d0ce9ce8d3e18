use ::log::LevelFilter;
use env_logger::Builder;
use std::io::Write;

/// Builds the process-wide logger with a fixed level. All diagnostics go to
/// stderr; stdout is reserved for the cover report.
pub fn build_logger_for_level(level: LevelFilter) {
    try_build_logger(level);
}

/// Builds the process-wide logger where each `-v` occurrence raises the level
/// by one step above `base`.
pub fn build_logger_for_verbosity(base: LevelFilter, verbosity: usize) {
    let levels = [
        LevelFilter::Off,
        LevelFilter::Error,
        LevelFilter::Warn,
        LevelFilter::Info,
        LevelFilter::Debug,
        LevelFilter::Trace,
    ];

    let base_idx = levels.iter().position(|&l| l == base).unwrap_or(0);
    let level = levels[(base_idx + verbosity).min(levels.len() - 1)];
    try_build_logger(level);
}

fn try_build_logger(level: LevelFilter) {
    let _ = Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(buf, "[{:<5}] {}", record.level(), record.args())
        })
        .target(env_logger::Target::Stderr)
        .try_init();
}
