use crate::constants::STORAGE_KEY;
use crate::core::Snapshot;
use web_sys::Storage;

fn storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read the saved session. Missing, unreadable or malformed data yields
/// `None` and the page starts empty.
pub fn load() -> Option<Snapshot> {
    let json = storage()?.get_item(STORAGE_KEY).ok().flatten()?;
    match Snapshot::from_json(&json) {
        Ok(s) => Some(s),
        Err(e) => {
            log::warn!("[storage] ignoring saved state: {}", e);
            None
        }
    }
}

pub fn save(snapshot: &Snapshot) {
    let Some(s) = storage() else { return };
    match snapshot.to_json() {
        Ok(json) => {
            if let Err(e) = s.set_item(STORAGE_KEY, &json) {
                log::warn!("[storage] save failed: {:?}", e);
            }
        }
        Err(e) => log::warn!("[storage] encode failed: {}", e),
    }
}
