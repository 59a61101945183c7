use clap::Args;

pub const DEFAULT_HEADING: i32 = 0;
pub const DEFAULT_PITCH: i32 = 0;
pub const DEFAULT_ZOOM: i32 = 1;

/// Fixed viewing parameters stamped onto every emitted record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDefaults {
    pub heading: i32,
    pub pitch: i32,
    pub zoom: i32,
    pub pano_id: Option<String>,
    pub country_code: Option<String>,
    pub state_code: Option<String>,
}

impl Default for RecordDefaults {
    fn default() -> Self {
        RecordDefaults {
            heading: DEFAULT_HEADING,
            pitch: DEFAULT_PITCH,
            zoom: DEFAULT_ZOOM,
            pano_id: None,
            country_code: None,
            state_code: None,
        }
    }
}

/// Command line overrides for [`RecordDefaults`], shared by both binaries.
#[derive(Args, Debug, Clone)]
pub struct DefaultsArgs {
    /// Camera heading in degrees
    #[arg(long, default_value_t = DEFAULT_HEADING, allow_negative_numbers = true)]
    pub heading: i32,

    /// Camera pitch in degrees
    #[arg(long, default_value_t = DEFAULT_PITCH, allow_negative_numbers = true)]
    pub pitch: i32,

    /// Zoom level
    #[arg(long, default_value_t = DEFAULT_ZOOM)]
    pub zoom: i32,

    /// Panorama id written into every record
    #[arg(long, value_name = "ID")]
    pub pano_id: Option<String>,

    /// Country code written into every record
    #[arg(long, value_name = "CODE")]
    pub country_code: Option<String>,

    /// State code written into every record
    #[arg(long, value_name = "CODE")]
    pub state_code: Option<String>,
}

impl DefaultsArgs {
    pub fn into_defaults(self) -> RecordDefaults {
        RecordDefaults {
            heading: self.heading,
            pitch: self.pitch,
            zoom: self.zoom,
            pano_id: self.pano_id,
            country_code: self.country_code,
            state_code: self.state_code,
        }
    }
}
