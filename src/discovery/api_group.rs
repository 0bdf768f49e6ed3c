use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiGroupVersion {
    #[serde(rename = "groupVersion", default)]
    pub group_version: String,
    pub version: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiGroup {
    pub name: String,
    #[serde(default)]
    pub versions: Vec<ApiGroupVersion>,
    #[serde(rename = "preferredVersion")]
    pub preferred_version: Option<ApiGroupVersion>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiGroupList {
    #[serde(default)]
    pub groups: Vec<ApiGroup>,
}

// core group, served under `/api`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiVersions {
    #[serde(default)]
    pub versions: Vec<String>,
}

impl ApiGroup {
    pub fn selected_versions(&self, preferred_only: bool) -> Vec<&ApiGroupVersion> {
        match (&self.preferred_version, preferred_only) {
            (Some(preferred), true) => vec![preferred],
            _ => self.versions.iter().collect(),
        }
    }
}
