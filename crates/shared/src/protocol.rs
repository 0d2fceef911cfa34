use serde::{Deserialize, Serialize};

use crate::{
    domain::{Member, MemberId},
    error::FetchError,
};

/// One element of the member list JSON array. Extra fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberRecord {
    pub id: MemberId,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl From<MemberRecord> for Member {
    fn from(value: MemberRecord) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
            role: value.role,
        }
    }
}

/// Decodes the body of the member list endpoint: a JSON array of records.
pub fn decode_member_list(body: &[u8]) -> Result<Vec<Member>, FetchError> {
    let records: Vec<MemberRecord> = serde_json::from_slice(body)?;

    if let Some(position) = records
        .iter()
        .position(|record| record.id.as_str().trim().is_empty())
    {
        return Err(FetchError::invalid_payload(format!(
            "member record at index {position} has an empty id"
        )));
    }

    tracing::debug!(count = records.len(), "decoded member list");
    Ok(records.into_iter().map(Member::from).collect())
}
