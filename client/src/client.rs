//! High-level groupald API client — one method per remote operation.

use crate::doc;
use crate::error::GroupaldError;
use crate::request::RequestExecutor;
use crate::types::{Attrs, Mod, Mright};

use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;

/// Client for one groupald service.
///
/// Holds the service base URL and the trusted bearer credential, both fixed
/// for the lifetime of the client. Every method performs exactly one
/// blocking HTTP round trip and either returns the typed result or a
/// [`GroupaldError`]; nothing is cached or retried.
pub struct GroupaldClient {
    executor: RequestExecutor,
}

impl GroupaldClient {
    /// Create a client for the service at `base_url`, authenticating every
    /// request with `trusted_auth_bearer`.
    pub fn new(base_url: &str, trusted_auth_bearer: &str) -> Self {
        Self {
            executor: RequestExecutor::new(base_url, trusted_auth_bearer, None),
        }
    }

    /// Same as [`GroupaldClient::new`] with a per-request timeout.
    pub fn with_timeout(base_url: &str, trusted_auth_bearer: &str, timeout: Duration) -> Self {
        Self {
            executor: RequestExecutor::new(base_url, trusted_auth_bearer, Some(timeout)),
        }
    }

    /// Whether an sgroup with this id exists.
    ///
    /// The service must answer with a JSON boolean; anything else is a
    /// contract violation.
    pub fn exists(&self, id: &str) -> Result<bool, GroupaldError> {
        let doc = self.executor.get("/api/exists", &[("id", id)])?;
        doc::as_bool(&doc)
    }

    /// Full document describing an sgroup: its attributes plus
    /// kind-specific details (children for stems, direct members for
    /// groups).
    pub fn get(&self, id: &str) -> Result<Value, GroupaldError> {
        self.executor.get("/api/get", &[("id", id)])
    }

    /// The sgroup's own attributes, from the document's `attrs` field.
    ///
    /// An entity without an `attrs` field yields an empty map.
    pub fn get_attrs(&self, id: &str) -> Result<Attrs, GroupaldError> {
        let doc = self.get(id)?;
        doc::as_string_map(doc::pluck(&doc, &["attrs"]))
    }

    /// Direct members of a group, from `group.direct_members`.
    ///
    /// Entities without that path (stems, subjects) yield an empty map.
    pub fn direct_members(&self, id: &str) -> Result<BTreeMap<String, String>, GroupaldError> {
        let doc = self.get(id)?;
        doc::as_string_map(doc::pluck(&doc, &["group", "direct_members"]))
    }

    /// Rights attached directly to an sgroup, as a raw document.
    pub fn direct_rights(&self, id: &str) -> Result<Value, GroupaldError> {
        self.executor.get("/api/direct_rights", &[("id", id)])
    }

    /// Ids of the sgroups where `subject_dn` directly has `mright`,
    /// in the order the service returns them.
    pub fn search_raw_sgroups_using_a_subject(
        &self,
        subject_dn: &str,
        mright: Mright,
    ) -> Result<Vec<String>, GroupaldError> {
        let doc = self.executor.get(
            "/api/raw/search_sgroups_using_a_subject",
            &[("subject_dn", subject_dn), ("mright", mright.as_str())],
        )?;
        doc::as_string_list(Some(&doc))
    }

    /// Full document describing one subject.
    pub fn get_subject(&self, subject_id: &str) -> Result<Value, GroupaldError> {
        self.executor.get("/api/get_subject", &[("subject_id", subject_id)])
    }

    /// Delete an sgroup.
    pub fn delete(&self, id: &str) -> Result<(), GroupaldError> {
        self.executor.post("/api/delete", &[("id", id)], &[])?;
        Ok(())
    }

    /// Create an sgroup with the given attributes.
    pub fn create(&self, id: &str, attrs: &Attrs) -> Result<(), GroupaldError> {
        let body = attrs_params(attrs);
        self.executor.post("/api/create", &[("id", id)], &body)?;
        Ok(())
    }

    /// Replace attributes of an existing sgroup.
    pub fn modify_attrs(&self, id: &str, attrs: &Attrs) -> Result<(), GroupaldError> {
        let body = attrs_params(attrs);
        self.executor.post("/api/modify_attrs", &[("id", id)], &body)?;
        Ok(())
    }

    /// Apply `mod_` to the `mright` relation between the sgroup and the
    /// subject identified by `subject_dn`.
    pub fn modify_member_or_right(
        &self,
        id: &str,
        mright: Mright,
        mod_: Mod,
        subject_dn: &str,
    ) -> Result<(), GroupaldError> {
        let body = [
            ("mright", mright.as_str()),
            ("mod", mod_.as_str()),
            ("dn", subject_dn),
        ];
        self.executor
            .post("/api/modify_member_or_right", &[("id", id)], &body)?;
        Ok(())
    }
}

/// Attribute map as ordered form parameters.
fn attrs_params(attrs: &Attrs) -> Vec<(&str, &str)> {
    attrs
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect()
}
