pub mod legend;
pub mod timeline;
pub mod tooltip;
pub mod viewport;

pub use timeline::Timeline;

/// Routes `tracing` output to the browser console. Call once from the
/// host app's entry point.
#[cfg(feature = "console-log")]
pub fn init_console_tracing() {
    use tracing_subscriber::prelude::*;
    use tracing_web::MakeWebConsoleWriter;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false) // Only partially supported across browsers
        .without_time() // std::time is not available in browsers
        .with_writer(MakeWebConsoleWriter::new());

    tracing_subscriber::registry().with(fmt_layer).init();
}
