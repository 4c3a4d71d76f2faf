use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Taxonomic bucket used to filter sightings by the `Class` field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FaunaGroup {
    /// No class filter; every fauna record matches.
    #[default]
    AllFauna,
    Mammals,
    Birds,
    Reptiles,
    Amphibians,
}

impl FaunaGroup {
    /// The OData filter clause for this group, or `None` for [`FaunaGroup::AllFauna`].
    pub fn class_filter(&self) -> Option<&'static str> {
        match self {
            FaunaGroup::AllFauna => None,
            FaunaGroup::Mammals => Some("Class eq 'Mammalia'"),
            FaunaGroup::Birds => Some("Class eq 'Aves'"),
            FaunaGroup::Reptiles => Some("Class eq 'Reptilia'"),
            FaunaGroup::Amphibians => Some("Class eq 'Amphibia'"),
        }
    }
}

impl std::fmt::Display for FaunaGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                FaunaGroup::AllFauna => "All Fauna",
                FaunaGroup::Mammals => "Mammals",
                FaunaGroup::Birds => "Birds",
                FaunaGroup::Reptiles => "Reptiles",
                FaunaGroup::Amphibians => "Amphibians",
            }
        )
    }
}

impl FromStr for FaunaGroup {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "all fauna" => Ok(FaunaGroup::AllFauna),
            "mammals" => Ok(FaunaGroup::Mammals),
            "birds" => Ok(FaunaGroup::Birds),
            "reptiles" => Ok(FaunaGroup::Reptiles),
            "amphibians" => Ok(FaunaGroup::Amphibians),
            _ => Err(()),
        }
    }
}

/// One fauna sighting record from `SpeciesSightings_CoreData`.
///
/// Decoding is strict: a record missing `ScientificName`, `CommonName`, or
/// `Class` fails the whole response rather than defaulting silently.
/// Conservation statuses and coordinates are genuinely nullable upstream.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SightingRecord {
    #[serde(rename = "ScientificName")]
    pub scientific_name: String,

    #[serde(rename = "CommonName")]
    pub common_name: String,

    #[serde(rename = "Class")]
    pub taxonomic_class: String,

    /// Listing under the NSW Biodiversity Conservation Act, if any.
    #[serde(rename = "BCActStatus")]
    pub bc_act_status: Option<String>,

    /// Listing under the federal EPBC Act, if any.
    #[serde(rename = "EPBCActStatus")]
    pub epbc_act_status: Option<String>,

    #[serde(rename = "DateFirst")]
    pub date_first: Option<NaiveDateTime>,

    #[serde(rename = "DateLast")]
    pub date_last: Option<NaiveDateTime>,

    #[serde(rename = "Latitude_GDA94")]
    pub latitude: Option<f64>,

    #[serde(rename = "Longitude_GDA94")]
    pub longitude: Option<f64>,
}

impl SightingRecord {
    /// Whether the species carries a conservation listing under either act.
    pub fn is_listed(&self) -> bool {
        let has = |s: &Option<String>| s.as_deref().is_some_and(|v| !v.is_empty());
        has(&self.bc_act_status) || has(&self.epbc_act_status)
    }
}
