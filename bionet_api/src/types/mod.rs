mod envelope;
pub use self::envelope::ODataResponse;

mod geometry;
pub use self::geometry::AreaOfInterest;

mod sighting;
pub use self::sighting::{FaunaGroup, SightingRecord};
