use serde::Serialize;

use crate::api::v1::extractors::UserPrincipal;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    pub company_id: Option<i64>,
    pub authorities: Vec<String>,
}

impl From<Option<UserPrincipal>> for MeResponse {
    fn from(principal: Option<UserPrincipal>) -> Self {
        match principal {
            Some(p) => Self {
                authenticated: true,
                subject: Some(p.subject),
                user_id: Some(p.user_id),
                company_id: p.company_id,
                // BTreeSet iteration is already sorted
                authorities: p.authorities.into_iter().collect(),
            },
            None => Self {
                authenticated: false,
                subject: None,
                user_id: None,
                company_id: None,
                authorities: Vec::new(),
            },
        }
    }
}
