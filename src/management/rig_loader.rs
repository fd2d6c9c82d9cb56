use std::collections::HashMap;
use std::sync::Mutex;
use std::fs::File;
use ron::de::{from_reader, SpannedError};
use lazy_static::lazy_static;
use crate::core::rig::DragonRig;
use crate::core::rig_error::RigError;

lazy_static! {
    static ref RIG_CACHE: Mutex<HashMap<String, DragonRig>> = Mutex::new(HashMap::new());
}

// Load a rig definition from assets, validating eagerly so a bad index or
// clamp range can never surface mid-frame. Parsed rigs are cached per name.
pub fn import_rig(rig_name: &str) -> Result<DragonRig, RigError> {
    let mut cache = RIG_CACHE.lock().unwrap();

    if let Some(cached_rig) = cache.get(rig_name) {
        return Ok(cached_rig.clone());
    }

    let file_path = format!("assets/rigs/{}.ron", rig_name);
    let file = File::open(&file_path)
        .map_err(|e| RigError::ImportFailed(format!("Failed to open '{}': {}", file_path, e)))?;
    let deserialized: Result<DragonRig, SpannedError> = from_reader(file);

    match deserialized {
        Ok(rig) => {
            rig.validate()?;
            cache.insert(rig_name.to_string(), rig.clone());
            Ok(rig)
        }
        Err(e) => Err(RigError::ImportFailed(format!(
            "Failed to parse rig '{}': {}",
            rig_name, e
        ))),
    }
}
