use super::Parser;
use geo::Point;
use gpx::Gpx;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

use crate::error::{Error, Result};

/// Reads every track point of a single GPX file.
pub struct GpxParser;

impl Parser for GpxParser {
    fn parse(&self, path: &Path) -> Result<Vec<Point>> {
        info!("Reading GPX track {}", path.display());

        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        let reader = BufReader::new(file);
        let gpx: Gpx = gpx::read(reader).map_err(|source| Error::Gpx {
            path: path.to_path_buf(),
            source,
        })?;

        let points = track_points(&gpx);
        info!(
            "Extracted {} points from {} tracks",
            points.len(),
            gpx.tracks.len()
        );
        Ok(points)
    }

    fn name(&self) -> &'static str {
        "GPX Parser"
    }
}

/// Track points in document order. Waypoints and routes are not part of a track.
pub fn track_points(gpx: &Gpx) -> Vec<Point> {
    let mut points = Vec::new();

    for track in &gpx.tracks {
        for segment in &track.segments {
            for track_point in &segment.points {
                points.push(track_point.point());
            }
        }
    }

    points
}
