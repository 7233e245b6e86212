use std::collections::HashMap;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::error::WebError;

/// Identity of the caller, inserted into request extensions by [`require_auth`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: String,
}

pub async fn require_auth(
    State(api_keys): State<ApiKeys>,
    mut request: Request,
    next: Next,
) -> Result<Response, WebError> {
    let user = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .and_then(|token| api_keys.user_for(token.trim()));

    let Some(user) = user else {
        tracing::warn!("Invalid API key attempt");
        return Err(WebError::Unauthorized);
    };

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Bearer tokens and the user each one authenticates.
#[derive(Debug, Clone, Default)]
pub struct ApiKeys {
    keys: HashMap<String, String>,
}

impl ApiKeys {
    /// Parses `token:user_id` pairs separated by commas. A bare token is its
    /// own user id.
    pub fn from_comma_separated(keys_str: &str) -> Self {
        let keys = keys_str
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|entry| match entry.split_once(':') {
                Some((token, user_id)) => (token.trim().to_string(), user_id.trim().to_string()),
                None => (entry.to_string(), entry.to_string()),
            })
            .filter(|(token, user_id)| !token.is_empty() && !user_id.is_empty())
            .collect();

        Self { keys }
    }

    pub fn user_for(&self, token: &str) -> Option<CurrentUser> {
        self.keys.get(token).map(|user_id| CurrentUser {
            user_id: user_id.clone(),
        })
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pairs_and_bare_tokens() {
        let keys = ApiKeys::from_comma_separated(" abc:alice , xyz , ,:nobody, bad: ");

        assert_eq!(keys.len(), 2);
        assert_eq!(keys.user_for("abc").map(|u| u.user_id), Some("alice".to_string()));
        assert_eq!(keys.user_for("xyz").map(|u| u.user_id), Some("xyz".to_string()));
        assert_eq!(keys.user_for("alice"), None);
    }

    #[test]
    fn test_empty_config() {
        assert!(ApiKeys::from_comma_separated("").is_empty());
    }
}
