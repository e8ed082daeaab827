//! Endpoints covering Congressional committee fundraising.

use std::sync::Arc;

use serde_json::Value;

use crate::{client::Core, request::Params, Error};

/// Retrieves fundraising information pertaining to Congressional
/// committees.
pub struct Committees {
    core: Arc<Core>,
}

impl Committees {
    pub(crate) fn new(core: Arc<Core>) -> Self {
        Self { core }
    }

    /// Fetches committee members' fundraising from one industry
    /// (`congCmteIndus`), returning the per-member rows.
    pub async fn cmte_by_ind(
        &self,
        cmte: &str,
        industry: &str,
        congress: Option<&str>,
    ) -> Result<Value, Error> {
        let params = Params::new()
            .push("cmte", cmte)
            .push("indus", industry)
            .push_opt("congno", congress);
        self.core
            .call("congCmteIndus", params, &["committee", "member"])
            .await
    }
}
