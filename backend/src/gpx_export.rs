use chrono::{DateTime, Utc};
use geo_types::Point;
use gpx::{Gpx, GpxVersion, Metadata, Track, TrackSegment, Waypoint};
use time::OffsetDateTime;

use crate::error::GpxExportError;
use crate::models::{Trail, TrailCoordinate};

pub const GPX_CREATOR: &str = "Siyuan Trail API";
pub const GPX_CONTENT_TYPE: &str = "application/gpx+xml";

/// Render a trail and its ordered waypoints as a GPX 1.1 document.
///
/// Text and attribute values go through the XML writer, so markup characters
/// in names and descriptions come out escaped.
pub fn encode_trail_as_gpx(
    trail: &Trail,
    coordinates: &[TrailCoordinate],
    generated_at: DateTime<Utc>,
) -> Result<String, GpxExportError> {
    let mut gpx = Gpx {
        version: GpxVersion::Gpx11,
        creator: Some(GPX_CREATOR.into()),
        metadata: Some(Metadata {
            name: Some(trail.name.clone()),
            description: trail.description.clone(),
            time: Some(to_gpx_time(generated_at)?),
            ..Default::default()
        }),
        ..Default::default()
    };
    let mut track = Track {
        name: Some(trail.name.clone()),
        ..Default::default()
    };

    let mut segment = TrackSegment::new();
    segment.points.extend(coordinates.iter().map(to_waypoint));
    track.segments.push(segment);
    gpx.tracks.push(track);

    let mut buffer = Vec::new();
    gpx::write(&gpx, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn to_waypoint(coord: &TrailCoordinate) -> Waypoint {
    let mut waypoint = Waypoint::new(Point::new(coord.longitude, coord.latitude));
    waypoint.name = Some(coord.name.clone());
    waypoint.description = coord.published_description().map(str::to_owned);
    waypoint
}

fn to_gpx_time(at: DateTime<Utc>) -> Result<gpx::Time, GpxExportError> {
    let time = OffsetDateTime::from_unix_timestamp(at.timestamp())?
        .replace_nanosecond(at.timestamp_subsec_nanos())?;
    Ok(time.into())
}
