pub mod ping;
pub mod sightings;
