use std::{io, path::PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not open file \"{}\": {:?}", path.display(), err)]
    FileOpen { path: PathBuf, err: io::Error },
    #[error("Could not read file \"{}\": {:?}", path.display(), err)]
    FileRead { path: PathBuf, err: io::Error },
    #[error("Could not deserialize yaml \"{}\": {:?}", path.display(), err)]
    FileDeserialize { path: PathBuf, err: serde_yaml::Error },
}
