//! Auth output model.

use async_graphql::SimpleObject;

use paygate_types::TokenPair;

/// Token pair returned by login, register and refresh mutations.
#[derive(Debug, Clone, SimpleObject)]
pub struct TokenPayload {
    pub access_token: String,
    pub refresh_token: String,
}

impl From<&TokenPair> for TokenPayload {
    fn from(pair: &TokenPair) -> Self {
        Self {
            access_token: pair.access_token.clone(),
            refresh_token: pair.refresh_token.clone(),
        }
    }
}
