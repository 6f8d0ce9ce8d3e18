use std::sync::atomic::{AtomicBool, Ordering};

static RECEIVED_CTRL_C: AtomicBool = AtomicBool::new(false);

/// Installs the ctrl-c handler. Call once at startup; later calls are no-ops.
pub fn initialize() {
    let _ = ctrlc::set_handler(|| {
        RECEIVED_CTRL_C.store(true, Ordering::SeqCst);
    });
}

/// True once the process received ctrl-c (or SIGTERM). The driver loop polls
/// this between rounds to shut down without waiting for further input.
pub fn received_ctrl_c() -> bool {
    RECEIVED_CTRL_C.load(Ordering::SeqCst)
}
