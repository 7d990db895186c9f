//! Organization models

use serde::{Deserialize, Serialize};

use super::RemoteId;

/// Organization resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    /// Organization ID
    pub id: RemoteId,

    /// Organization name (the lookup key)
    pub name: String,
}

/// Request body for `POST /organizations`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewOrganization {
    pub name: String,
}
