pub mod exif;
pub mod gpx;

use geo::Point;
use std::path::Path;

use crate::error::Result;

pub use self::exif::GpsLookup;

// extract Vec<Point> from a source file or directory
pub trait Parser {
    fn parse(&self, path: &Path) -> Result<Vec<Point>>;

    fn name(&self) -> &'static str;
}
