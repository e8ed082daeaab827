//! Endpoints covering Congressional legislators and their finances.

use std::sync::Arc;

use serde_json::Value;

use crate::{client::Core, request::Params, Error};

/// Retrieves information pertaining to current Congressional legislators.
pub struct Candidates {
    core: Arc<Core>,
}

impl Candidates {
    pub(crate) fn new(core: Arc<Core>) -> Self {
        Self { core }
    }

    /// Fetches the legislator list for `id` (`getLegislators`).
    ///
    /// `id` may be a candidate's specific CID, a two-letter state code,
    /// or a four-character district code.
    pub async fn get(&self, id: &str) -> Result<Value, Error> {
        self.core
            .call("getLegislators", Params::new().push("id", id), &["legislator"])
            .await
    }

    /// Fetches a member's personal financial disclosure (`memPFDprofile`).
    pub async fn pfd(&self, cid: &str, year: Option<&str>) -> Result<Value, Error> {
        let params = Params::new().push("cid", cid).push_opt("year", year);
        self.core
            .call("memPFDprofile", params, &["member_profile"])
            .await
    }

    /// Fetches a candidate's fundraising summary (`candSummary`).
    pub async fn summary(&self, cid: &str, cycle: Option<&str>) -> Result<Value, Error> {
        let params = Params::new().push("cid", cid).push_opt("cycle", cycle);
        self.core
            .call("candSummary", params, &["summary", "@attributes"])
            .await
    }

    /// Fetches a candidate's top contributors (`candContrib`).
    pub async fn contrib(&self, cid: &str, cycle: Option<&str>) -> Result<Value, Error> {
        let params = Params::new().push("cid", cid).push_opt("cycle", cycle);
        self.core
            .call("candContrib", params, &["contributors", "contributor"])
            .await
    }

    /// Fetches a candidate's top contributing industries (`candIndustry`).
    pub async fn industries(&self, cid: &str, cycle: Option<&str>) -> Result<Value, Error> {
        let params = Params::new().push("cid", cid).push_opt("cycle", cycle);
        self.core
            .call("candIndustry", params, &["industries", "industry"])
            .await
    }

    /// Fetches a candidate's totals from one industry (`candIndByInd`).
    pub async fn contrib_by_ind(
        &self,
        cid: &str,
        industry: &str,
        cycle: Option<&str>,
    ) -> Result<Value, Error> {
        let params = Params::new()
            .push("cid", cid)
            .push("ind", industry)
            .push_opt("cycle", cycle);
        self.core
            .call("candIndByInd", params, &["candIndus", "@attributes"])
            .await
    }

    /// Fetches a candidate's top contributing sectors (`candSector`).
    pub async fn sector(&self, cid: &str, cycle: Option<&str>) -> Result<Value, Error> {
        let params = Params::new().push("cid", cid).push_opt("cycle", cycle);
        self.core
            .call("candSector", params, &["sectors", "sector"])
            .await
    }
}
