use std::io::Read;

use gpx::errors::GpxError;
use shared::Coordinate;

/// Every track point of a GPX document, in document order across all
/// tracks and segments.
pub fn read_track_points<R: Read>(reader: R) -> Result<Vec<Coordinate>, GpxError> {
    let gpx = gpx::read(reader)?;

    let points = gpx
        .tracks
        .iter()
        .flat_map(|track| &track.segments)
        .flat_map(|segment| &segment.points)
        .map(|waypoint| {
            let point = waypoint.point();
            Coordinate {
                lat: point.y(),
                lon: point.x(),
            }
        })
        .collect();

    Ok(points)
}
