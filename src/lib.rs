//! Convert GPX tracks and geotagged JPEGs into the flat location lists
//! consumed by GeoGuessr-style map makers.
//!
//! Both pipelines share the same shape: a [`Parser`] turns its input into
//! points, [`build_records`] pairs every point with the configured
//! [`RecordDefaults`], and [`io::write_records`] prints the result as JSON.

pub mod config;
pub mod dms;
pub mod error;
pub mod io;
pub mod parsers;
pub mod record;

pub use config::{DefaultsArgs, RecordDefaults};
pub use error::{Error, Result};
pub use parsers::{GpsLookup, Parser, exif::ExifParser, gpx::GpxParser};
pub use record::{OutputRecord, build_records};
