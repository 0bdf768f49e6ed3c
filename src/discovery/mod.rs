mod api_group;
mod error;

pub use api_group::{ApiGroup, ApiGroupList, ApiGroupVersion, ApiVersions};
pub use error::DocumentError;

use crate::sort::GroupVersion;
use serde::{Deserialize, Serialize};
use std::{fs, io, path::Path};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Document {
    #[serde(rename = "APIGroupList")]
    ApiGroupList(ApiGroupList),
    #[serde(rename = "APIGroup")]
    ApiGroup(ApiGroup),
    #[serde(rename = "APIVersions")]
    ApiVersions(ApiVersions),
}

impl Document {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Document, DocumentError> {
        let path = path.as_ref();
        let file = fs::File::open(path).map_err(|err| DocumentError::FileOpen {
            path: path.into(),
            err,
        })?;
        let reader = io::BufReader::new(file);
        let is_json = path.extension().map_or(false, |ext| ext == "json");
        let document = if is_json {
            serde_json::from_reader(reader).map_err(|err| DocumentError::FileDeserializeJson {
                path: path.into(),
                err,
            })?
        } else {
            serde_yaml::from_reader(reader).map_err(|err| DocumentError::FileDeserializeYaml {
                path: path.into(),
                err,
            })?
        };
        tracing::trace!(path = %path.display(), "read discovery document");
        Ok(document)
    }

    pub fn from_reader<R: io::Read>(reader: R) -> Result<Document, DocumentError> {
        Ok(serde_yaml::from_reader(reader)?)
    }

    pub fn group_versions(&self, preferred_only: bool) -> Vec<GroupVersion> {
        match self {
            Document::ApiGroupList(list) => list
                .groups
                .iter()
                .flat_map(|group| group_versions_of(group, preferred_only))
                .collect(),
            Document::ApiGroup(group) => group_versions_of(group, preferred_only).collect(),
            Document::ApiVersions(api_versions) => api_versions
                .versions
                .iter()
                .map(|version| GroupVersion::core(version.as_str()))
                .collect(),
        }
    }
}

fn group_versions_of(group: &ApiGroup, preferred_only: bool) -> impl Iterator<Item = GroupVersion> + '_ {
    group.selected_versions(preferred_only).into_iter().map(move |version| {
        let gv = GroupVersion::new(group.name.as_str(), version.version.as_str());
        if !declared_matches(&gv, &version.group_version) {
            tracing::warn!(
                declared = %version.group_version,
                expected = %gv,
                "groupVersion does not match group name and version"
            );
        }
        gv
    })
}

// `groupVersion` is optional in hand-written documents
fn declared_matches(gv: &GroupVersion, declared: &str) -> bool {
    declared.is_empty() || declared.parse::<GroupVersion>().map_or(false, |parsed| parsed == *gv)
}
