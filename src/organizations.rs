//! Endpoints covering fundraising organizations.

use std::sync::Arc;

use serde_json::Value;

use crate::{client::Core, request::Params, Error};

/// Retrieves information pertaining to fundraising organizations.
pub struct Organizations {
    core: Arc<Core>,
}

impl Organizations {
    pub(crate) fn new(core: Arc<Core>) -> Self {
        Self { core }
    }

    /// Searches organizations by name (`getOrgs`).
    pub async fn get(&self, org_name: &str) -> Result<Value, Error> {
        self.core
            .call("getOrgs", Params::new().push("org", org_name), &["organization"])
            .await
    }

    /// Fetches an organization's summary totals (`orgSummary`).
    pub async fn summary(&self, org_id: &str) -> Result<Value, Error> {
        self.core
            .call(
                "orgSummary",
                Params::new().push("id", org_id),
                &["organization", "@attributes"],
            )
            .await
    }
}
