use url::Url;

use crate::types::{AreaOfInterest, FaunaGroup};

use super::common::{Query, QueryCommon};

/// Fixed projection sent with every sighting query. Downstream consumers only
/// need the taxonomy, conservation statuses, sighting dates, and coordinates.
const SELECT_FIELDS: &str = "ScientificName,CommonName,Class,BCActStatus,\
EPBCActStatus,DateFirst,DateLast,Latitude_GDA94,Longitude_GDA94";

/// Matches records listed under either the BC Act or the EPBC Act. BioNet
/// stores "not listed" as both null and empty string, so both are excluded.
const LISTED_FILTER: &str = "(BCActStatus ne null and BCActStatus ne '' \
or EPBCActStatus ne null and EPBCActStatus ne '')";

/// Query builder for fauna sighting records.
#[derive(Default)]
pub struct SightingQuery {
    pub common: QueryCommon,
    pub group: FaunaGroup,
    pub area: Option<AreaOfInterest>,
    pub listed_only: bool,
}

impl Query for SightingQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut clauses: Vec<String> = Vec::new();
        if let Some(class_filter) = self.group.class_filter() {
            clauses.push(class_filter.to_string());
        }
        if let Some(area) = &self.area {
            clauses.push(area.filter_clause());
        }
        if self.listed_only {
            clauses.push(LISTED_FILTER.to_string());
        }

        let mut url = url.clone();
        if !clauses.is_empty() {
            url.query_pairs_mut()
                .append_pair("$filter", &clauses.join(" and "));
        }
        url.query_pairs_mut().append_pair("$select", SELECT_FIELDS);
        self.common.add_to_url(&url)
    }
}

impl SightingQuery {
    /// Restricts results to one taxonomic group.
    pub fn with_group(mut self, group: FaunaGroup) -> Self {
        self.group = group;
        self
    }

    /// Restricts results to sightings within the given area of interest.
    pub fn with_area(mut self, area: AreaOfInterest) -> Self {
        self.area = Some(area);
        self
    }

    /// Restricts results to species with a BC Act or EPBC Act listing.
    pub fn with_listed_only(mut self) -> Self {
        self.listed_only = true;
        self
    }
}
