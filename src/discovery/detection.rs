use crate::http::GraphQLResponse;
use serde_json::{json, Value};

pub const DETECTION_QUERY: &str = "query{__typename}";

pub fn detection_body() -> Value {
    json!({ "query": DETECTION_QUERY })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Confirmed,
    NotGraphQL,
    RequestFailed,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Confirmed => write!(f, "confirmed"),
            Outcome::NotGraphQL => write!(f, "not graphql"),
            Outcome::RequestFailed => write!(f, "request failed"),
        }
    }
}

/// Confirmed only for a 200 whose JSON body has a `data` object carrying
/// `__typename`. Everything else that produced a response is `NotGraphQL`.
pub fn classify(response: &GraphQLResponse) -> Outcome {
    if response.status != 200 {
        return Outcome::NotGraphQL;
    }

    let has_typename = response
        .get_data()
        .and_then(Value::as_object)
        .is_some_and(|data| data.contains_key("__typename"));

    if has_typename {
        Outcome::Confirmed
    } else {
        Outcome::NotGraphQL
    }
}
