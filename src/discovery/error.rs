use std::{io, path::PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Could not open file \"{}\": {:?}", path.display(), err)]
    FileOpen { path: PathBuf, err: io::Error },
    #[error("Could not deserialize json \"{}\": {:?}", path.display(), err)]
    FileDeserializeJson { path: PathBuf, err: serde_json::Error },
    #[error("Could not deserialize yaml \"{}\": {:?}", path.display(), err)]
    FileDeserializeYaml { path: PathBuf, err: serde_yaml::Error },
    #[error("Could not deserialize discovery document: {:?}", _0)]
    Deserialize(#[from] serde_yaml::Error),
}
