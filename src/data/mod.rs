//! Dashboard data widgets.
//!
//! The controller never performs network I/O. On mount it asks the host to
//! fetch a few endpoints; the host answers with a response event carrying
//! the raw body or a transport error. Rendering never waits on these.
//!
//! # Modules
//!
//! - `messages`: [`DataRequest`] and [`DataOutcome`], the request/response protocol
//! - `envelope`: `{success, data}` body parsing
//! - `capabilities`: optional [`SampleDataProvider`] and [`ChartRenderer`] strategies,
//!   bundled as [`Capabilities`]

pub mod capabilities;
pub mod envelope;
pub mod messages;

pub use capabilities::{AttendanceChart, Capabilities, ChartRenderer, ChartSpec, SampleDataProvider, StaticSamples};
pub use envelope::parse_envelope;
pub use messages::{DataOutcome, DataRequest, DataSource, WidgetContent};
