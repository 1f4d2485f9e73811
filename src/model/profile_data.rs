use serde::Serialize;
use serde_json::{Map, Value};

/// Data embedded in a profile page.
///
/// Only the name fields are accessed directly, everything else is available
/// as plain JSON.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ProfileData(Map<String, Value>);

impl ProfileData {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn profile_user(&self) -> Option<&Map<String, Value>> {
        self.0.get("profileUser")?.as_object()
    }

    pub fn first_name(&self) -> Option<&str> {
        self.profile_user()?.get("FirstName")?.as_str()
    }

    pub fn last_name(&self) -> Option<&str> {
        self.profile_user()?.get("LastName")?.as_str()
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for ProfileData {
    #[inline]
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
