//! OpenTelemetry tracing exported to a local file.
//!
//! ```text
//! tracing spans → tracing-opentelemetry → SDK provider → OtlpFileExporter → rotating JSON file
//! ```
//!
//! The file holds one OTLP/JSON `resourceSpans` document per line, rotated
//! at 10 MB with three backups. The host bridge keeps stdout for actions, so
//! nothing is logged to the terminal.
//!
//! # Modules
//!
//! - `init`: filter resolution and subscriber installation
//! - `tracer`: the file span exporter and its provider
//! - `span_formatter`: OTLP/JSON encoding
//! - `file_writer`: size-rotated line writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;
