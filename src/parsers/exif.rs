use super::Parser;
use exif::{Exif, In, Tag};
use geo::Point;
use indicatif::ProgressIterator;
use std::fs::{self, File};
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::dms::{dms_to_decimal, hemisphere_reference, rational_triple};
use crate::error::{Error, Result};

/// Outcome of looking for a GPS position in one image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GpsLookup {
    Found(Point),
    NotFound,
}

/**
 * Reads GPS positions out of the `.jpg` files directly inside a directory.
 * Images without a complete set of GPS tags are skipped.
 */
pub struct ExifParser;

impl Parser for ExifParser {
    fn parse(&self, dir: &Path) -> Result<Vec<Point>> {
        info!("Searching for .jpg files in {}...", dir.display());

        let jpg_files = find_jpg_files(dir)?;
        info!("Found {} .jpg files", jpg_files.len());

        let mut points = Vec::new();
        for path in jpg_files.iter().progress() {
            match read_gps(path)? {
                GpsLookup::Found(point) => points.push(point),
                GpsLookup::NotFound => debug!("No GPS position in {}", path.display()),
            }
        }

        info!(
            "Extracted {} points from {} images",
            points.len(),
            jpg_files.len()
        );
        Ok(points)
    }

    fn name(&self) -> &'static str {
        "EXIF Parser"
    }
}

/// Direct children of `dir` named `*.jpg`, sorted by file name.
///
/// The match is case sensitive and skips dot-files, like a shell glob would.
pub fn find_jpg_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let metadata = fs::metadata(dir).map_err(|e| Error::io(dir, e))?;
    if !metadata.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }

    let mut jpg_files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if is_jpg(&entry) {
            jpg_files.push(entry.into_path());
        }
    }

    Ok(jpg_files)
}

fn is_jpg(entry: &DirEntry) -> bool {
    let file_name = entry.file_name().as_encoded_bytes();

    file_name.first() != Some(&b'.') && file_name.ends_with(b".jpg") && entry.path().is_file()
}

/// Open one image and look up its GPS position.
///
/// Failing to open or read the file is fatal. An EXIF block that cannot be
/// decoded only skips this image.
pub fn read_gps(path: &Path) -> Result<GpsLookup> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let mut reader = BufReader::new(file);

    match exif::Reader::new().read_from_container(&mut reader) {
        Ok(exif) => Ok(gps_from_exif(&exif)),
        Err(exif::Error::NotFound(_)) => Ok(GpsLookup::NotFound),
        Err(exif::Error::Io(e)) if e.kind() != ErrorKind::UnexpectedEof => {
            Err(Error::io(path, e))
        }
        Err(e) => {
            warn!("Skipping {}: unreadable EXIF data: {}", path.display(), e);
            Ok(GpsLookup::NotFound)
        }
    }
}

/// All four GPS tags must be present and well formed, otherwise `NotFound`.
pub fn gps_from_exif(exif: &Exif) -> GpsLookup {
    let field = |tag| exif.get_field(tag, In::PRIMARY).map(|f| &f.value);

    let latitude = field(Tag::GPSLatitude).and_then(rational_triple);
    let latitude_ref = field(Tag::GPSLatitudeRef).and_then(hemisphere_reference);
    let longitude = field(Tag::GPSLongitude).and_then(rational_triple);
    let longitude_ref = field(Tag::GPSLongitudeRef).and_then(hemisphere_reference);

    match (latitude, latitude_ref, longitude, longitude_ref) {
        (Some(lat), Some(lat_ref), Some(lng), Some(lng_ref)) => {
            let lat = dms_to_decimal(&lat, &lat_ref);
            let lng = dms_to_decimal(&lng, &lng_ref);
            GpsLookup::Found(Point::new(lng, lat))
        }
        _ => GpsLookup::NotFound,
    }
}
