//! Shared query infrastructure: the [`Query`] trait and [`QueryCommon`] fields.

use url::Url;

/// Trait implemented by all query builders. Provides URL serialization and
/// shared builder methods for the record limit and offset.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Sets the maximum number of records to fetch (OData `$top`).
    fn with_max_records(mut self, max_records: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common().max_records = max_records;
        self
    }

    /// Skips the first `skip` records (OData `$skip`). The client never pages
    /// automatically; this is the knob for manual paging.
    fn with_skip(mut self, skip: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common().skip = Some(skip);
        self
    }
}

/// Fields shared by all query types: the record limit and optional offset.
#[derive(Clone, Copy)]
pub struct QueryCommon {
    /// Maximum records to fetch (`$top`). Must be positive. Defaults to 100.
    pub max_records: i64,
    /// Records to skip (`$skip`). `None` starts from the first record.
    pub skip: Option<i64>,
}

impl Default for QueryCommon {
    fn default() -> QueryCommon {
        QueryCommon {
            max_records: 100,
            skip: None,
        }
    }
}

impl QueryCommon {
    /// Appends the common limit and offset parameters to the URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("$top", &self.max_records.to_string());
        if let Some(skip) = self.skip {
            url.query_pairs_mut()
                .append_pair("$skip", &skip.to_string());
        };
        url
    }
}
