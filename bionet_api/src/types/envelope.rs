use serde::{Deserialize, Serialize};

/// OData response envelope. BioNet serves OData v3, where the payload always
/// sits under a `value` array; a body without `value` is a decode error, not
/// an empty result.
#[derive(Serialize, Deserialize)]
pub struct ODataResponse<T> {
    #[serde(rename = "odata.metadata", alias = "@odata.context")]
    pub metadata: Option<String>,

    pub value: Vec<T>,
}
