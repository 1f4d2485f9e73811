use serde::Serialize;
use serde_json::Value;

use crate::{
    config::Config,
    error::{Error, Result},
};

const TOKEN: &str = "undefined";

/// Request payload for the aura endpoint.
///
/// `message` and `aura.context` are sent as JSON strings inside an
/// urlencoded form.
pub struct AuraPayload<'c> {
    descriptor: &'c str,
    message: Message<'c>,
    context: AuraContext<'c>,
    page_uri: Option<String>,
}

#[derive(Serialize)]
struct Message<'c> {
    actions: Vec<Action<'c>>,
}

#[derive(Serialize)]
struct Action<'c> {
    descriptor: &'c str,
    params: ActionParams,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ActionParams {
    namespace: &'static str,
    classname: Box<str>,
    method: Box<str>,
    params: Value,
    cacheable: bool,
    is_continuation: bool,
}

#[derive(Serialize)]
struct AuraContext<'c> {
    fwuid: &'c str,
    app: &'c str,
}

#[derive(Serialize)]
struct Form<'p> {
    message: String,
    #[serde(rename = "aura.context")]
    context: String,
    #[serde(rename = "aura.pageURI", skip_serializing_if = "Option::is_none")]
    page_uri: Option<&'p str>,
    #[serde(rename = "aura.token")]
    token: &'static str,
}

impl<'c> AuraPayload<'c> {
    pub fn new(config: &'c Config) -> Self {
        Self {
            descriptor: &config.action_descriptor,
            message: Message {
                actions: Vec::new(),
            },
            context: AuraContext {
                fwuid: &config.fwuid,
                app: &config.app,
            },
            page_uri: None,
        }
    }

    /// Sets the path of the page that issues the request e.g. `/id/username`
    pub fn page_uri(mut self, page_uri: Option<String>) -> Self {
        self.page_uri = page_uri;

        self
    }

    /// Adds an action that invokes `method` of the apex class `classname`.
    ///
    /// `params` must serialize into a JSON object.
    pub fn add_action<P>(
        &mut self,
        classname: &str,
        method: &str,
        params: &P,
    ) -> Result<&mut Self>
    where
        P: Serialize + ?Sized,
    {
        let params =
            serde_json::to_value(params).map_err(|err| Error::Envelope(Box::new(err)))?;

        if !params.is_object() {
            let msg = format!("params of `{classname}.{method}` must be an object");

            return Err(Error::Envelope(msg.into()));
        }

        self.message.actions.push(Action {
            descriptor: self.descriptor,
            params: ActionParams {
                namespace: "",
                classname: classname.into(),
                method: method.into(),
                params,
                cacheable: false,
                is_continuation: false,
            },
        });

        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.message.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.message.actions.is_empty()
    }

    /// Serializes the payload into an urlencoded form body
    pub fn to_form(&self) -> Result<String> {
        let envelope = |err: serde_json::Error| Error::Envelope(Box::new(err));

        let form = Form {
            message: serde_json::to_string(&self.message).map_err(envelope)?,
            context: serde_json::to_string(&self.context).map_err(envelope)?,
            page_uri: self.page_uri.as_deref(),
            token: TOKEN,
        };

        serde_urlencoded::to_string(&form).map_err(|err| Error::Envelope(Box::new(err)))
    }
}

/// Params of actions that only need the user.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserParams<'a> {
    pub user_id: &'a str,
}

/// Params of a single page of awards.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeParams<'a> {
    pub user_id: &'a str,
    pub skip: usize,
    pub per_page: usize,
    pub filter: &'a str,
}
