#![allow(dead_code)]

use exif::experimental::Writer;
use exif::{Field, In, Rational, Tag, Value};
use std::fs;
use std::io::Cursor;
use std::path::Path;

pub const ROME_GPX: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="geoguesser-points tests">
  <trk>
    <name>Colosseum loop</name>
    <trkseg>
      <trkpt lat="41.889" lon="12.4922"></trkpt>
      <trkpt lat="41.8902" lon="12.4923"></trkpt>
    </trkseg>
    <trkseg>
      <trkpt lat="41.8915" lon="12.4901"></trkpt>
    </trkseg>
  </trk>
  <trk>
    <trkseg>
      <trkpt lat="-33.8568" lon="151.2153"></trkpt>
    </trkseg>
  </trk>
</gpx>
"#;

pub const EMPTY_GPX: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="geoguesser-points tests">
</gpx>
"#;

pub struct Dms {
    pub degrees: (u32, u32),
    pub minutes: (u32, u32),
    pub seconds: (u32, u32),
    pub reference: &'static str,
}

impl Dms {
    fn value(&self) -> Value {
        Value::Rational(
            [self.degrees, self.minutes, self.seconds]
                .into_iter()
                .map(|(num, denom)| Rational { num, denom })
                .collect(),
        )
    }

    fn reference(&self) -> Value {
        Value::Ascii(vec![self.reference.as_bytes().to_vec()])
    }
}

/// 41°53'24.84" N
pub fn rome_lat() -> Dms {
    Dms {
        degrees: (41, 1),
        minutes: (53, 1),
        seconds: (2484, 100),
        reference: "N",
    }
}

/// 12°29'31.92" E
pub fn rome_lng() -> Dms {
    Dms {
        degrees: (12, 1),
        minutes: (29, 1),
        seconds: (3192, 100),
        reference: "E",
    }
}

/// 33°51'24.48" S
pub fn sydney_lat() -> Dms {
    Dms {
        degrees: (33, 1),
        minutes: (51, 1),
        seconds: (2448, 100),
        reference: "S",
    }
}

/// 151°12'55.08" E
pub fn sydney_lng() -> Dms {
    Dms {
        degrees: (151, 1),
        minutes: (12, 1),
        seconds: (5508, 100),
        reference: "E",
    }
}

fn field(tag: Tag, value: Value) -> Field {
    Field {
        tag,
        ifd_num: In::PRIMARY,
        value,
    }
}

/// Write a minimal JPEG whose APP1 segment carries the given GPS tags.
pub fn write_jpeg(path: &Path, lat: Option<Dms>, lng: Option<Dms>) {
    write_jpeg_omitting(path, lat, lng, None);
}

/// Like [`write_jpeg`], but leaves out the `omit` tag if it would be written.
pub fn write_jpeg_omitting(path: &Path, lat: Option<Dms>, lng: Option<Dms>, omit: Option<Tag>) {
    let mut fields = vec![field(
        Tag::ImageDescription,
        Value::Ascii(vec![b"geoguesser-points test image".to_vec()]),
    )];
    if let Some(lat) = lat {
        fields.push(field(Tag::GPSLatitude, lat.value()));
        fields.push(field(Tag::GPSLatitudeRef, lat.reference()));
    }
    if let Some(lng) = lng {
        fields.push(field(Tag::GPSLongitude, lng.value()));
        fields.push(field(Tag::GPSLongitudeRef, lng.reference()));
    }
    fields.retain(|f| Some(f.tag) != omit);

    let mut writer = Writer::new();
    for field in &fields {
        writer.push_field(field);
    }
    let mut tiff = Cursor::new(Vec::new());
    writer.write(&mut tiff, false).expect("write exif");
    let tiff = tiff.into_inner();

    let segment_len = u16::try_from(2 + 6 + tiff.len()).expect("exif fits in one segment");
    let mut jpeg = vec![0xFF, 0xD8, 0xFF, 0xE1];
    jpeg.extend_from_slice(&segment_len.to_be_bytes());
    jpeg.extend_from_slice(b"Exif\0\0");
    jpeg.extend_from_slice(&tiff);
    jpeg.extend_from_slice(&[0xFF, 0xD9]);

    fs::write(path, jpeg).expect("write jpeg");
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {expected}, got {actual}"
    );
}
