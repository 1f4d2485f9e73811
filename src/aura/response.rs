use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};

#[derive(Deserialize)]
struct AuraResponse {
    actions: Vec<ActionResponse>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ActionResponse {
    state: Box<str>,
    #[serde(default)]
    return_value: Option<OuterReturnValue>,
    #[serde(default)]
    error: Vec<Value>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OuterReturnValue {
    return_value: Option<InnerReturnValue>,
}

#[derive(Deserialize)]
struct InnerReturnValue {
    body: Option<Value>,
}

/// Parses an aura response and returns the decoded body of its first action.
///
/// The body is a JSON document encoded as a string inside the response so it
/// is parsed a second time.
pub fn unwrap_body(bytes: &[u8]) -> Result<Value> {
    let response: AuraResponse =
        serde_json::from_slice(bytes).map_err(|err| Error::parse("aura response", err))?;

    if let Some(failed) = response.actions.iter().find(|action| &*action.state != "SUCCESS") {
        return Err(Error::Rpc {
            message: failed.error_message(),
        });
    }

    let body = response
        .actions
        .into_iter()
        .next()
        .ok_or_else(|| Error::missing("actions[0]"))?
        .return_value
        .and_then(|outer| outer.return_value)
        .and_then(|inner| inner.body)
        .ok_or_else(|| Error::missing("returnValue.returnValue.body"))?;

    let Value::String(body) = body else {
        return Err(Error::missing("returnValue.returnValue.body"));
    };

    serde_json::from_str(&body).map_err(|err| Error::parse("aura response body", err))
}

impl ActionResponse {
    fn error_message(&self) -> Box<str> {
        match self.error.first() {
            Some(err) => match err.get("message").and_then(Value::as_str) {
                Some(msg) => msg.into(),
                None => err.to_string().into_boxed_str(),
            },
            None if &*self.state == "ERROR" => "unknown error".into(),
            None => format!("action finished with state `{}`", self.state).into_boxed_str(),
        }
    }
}
