//! Endpoint covering independent expenditure transactions.

use std::sync::Arc;

use serde_json::Value;

use crate::{client::Core, request::Params, Error};

/// Retrieves independent expenditure transactions.
pub struct IndependentExpenditures {
    core: Arc<Core>,
}

impl IndependentExpenditures {
    pub(crate) fn new(core: Arc<Core>) -> Self {
        Self { core }
    }

    /// Fetches the most recent independent expenditures
    /// (`independentExpend`). Takes no parameters.
    pub async fn get(&self) -> Result<Value, Error> {
        self.core
            .call("independentExpend", Params::new(), &["indexp"])
            .await
    }
}
