use crate::Error;

/// Rectangular area of interest in GDA94 decimal degrees.
///
/// BioNet's OData surface exposes sighting coordinates as plain
/// `Latitude_GDA94`/`Longitude_GDA94` columns, so the spatial test is an
/// envelope comparison on those fields rather than a true geometry
/// intersection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AreaOfInterest {
    min_lon: f64,
    min_lat: f64,
    max_lon: f64,
    max_lat: f64,
}

impl AreaOfInterest {
    /// Creates an area from an explicit bounding box.
    pub fn bounds(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Result<Self, Error> {
        for lon in [min_lon, max_lon] {
            if !(-180.0..=180.0).contains(&lon) {
                return Err(Error::InvalidQuery(format!(
                    "longitude {} is outside [-180, 180]",
                    lon
                )));
            }
        }
        for lat in [min_lat, max_lat] {
            if !(-90.0..=90.0).contains(&lat) {
                return Err(Error::InvalidQuery(format!(
                    "latitude {} is outside [-90, 90]",
                    lat
                )));
            }
        }
        if min_lon > max_lon || min_lat > max_lat {
            return Err(Error::InvalidQuery(
                "bounding box minimum exceeds maximum".to_string(),
            ));
        }
        Ok(Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        })
    }

    /// Creates an area from the extent of a polygon ring given as
    /// `(longitude, latitude)` vertices.
    pub fn from_vertices(vertices: &[(f64, f64)]) -> Result<Self, Error> {
        let (first, rest) = vertices
            .split_first()
            .ok_or_else(|| Error::InvalidQuery("area of interest has no vertices".to_string()))?;
        let mut min_lon = first.0;
        let mut max_lon = first.0;
        let mut min_lat = first.1;
        let mut max_lat = first.1;
        for &(lon, lat) in rest {
            min_lon = min_lon.min(lon);
            max_lon = max_lon.max(lon);
            min_lat = min_lat.min(lat);
            max_lat = max_lat.max(lat);
        }
        Self::bounds(min_lon, min_lat, max_lon, max_lat)
    }

    /// Renders the OData filter fragment for this extent.
    pub(crate) fn filter_clause(&self) -> String {
        format!(
            "Longitude_GDA94 ge {} and Longitude_GDA94 le {} and Latitude_GDA94 ge {} and Latitude_GDA94 le {}",
            self.min_lon, self.max_lon, self.min_lat, self.max_lat
        )
    }
}
