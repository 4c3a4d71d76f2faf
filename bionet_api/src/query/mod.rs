mod common;
pub use self::common::{Query, QueryCommon};

mod sighting;
pub use self::sighting::SightingQuery;
