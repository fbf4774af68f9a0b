use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Names accepted by `GET /views/{name}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ViewListRes {
    pub views: Vec<String>,
}

/// Outcome of loading one view.
///
/// `state` is `ready`, `empty` or `error`. `data` is only set when ready; `message` and
/// `retryable` are only set on error.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ViewRes {
    pub view: String,
    pub state: String,
    #[schema(value_type = Option<Object>)]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retryable: Option<bool>,
}

impl ViewRes {
    pub fn ready(view: impl Into<String>, data: Value) -> Self {
        Self {
            view: view.into(),
            state: "ready".into(),
            data: Some(data),
            message: None,
            retryable: None,
        }
    }

    pub fn empty(view: impl Into<String>) -> Self {
        Self {
            view: view.into(),
            state: "empty".into(),
            data: None,
            message: None,
            retryable: None,
        }
    }

    pub fn error(view: impl Into<String>, message: impl Into<String>, retryable: bool) -> Self {
        Self {
            view: view.into(),
            state: "error".into(),
            data: None,
            message: Some(message.into()),
            retryable: Some(retryable),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NavEntry {
    pub label: String,
    pub target: String,
}

/// Site navigation with the booking link resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NavigationRes {
    pub items: Vec<NavEntry>,
}
