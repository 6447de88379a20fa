use uuid::Uuid;

use crate::domain::AppError;
use crate::ports::PreferenceStore;

/// Per-installation identifier sent with tracking pings, created on first use.
pub fn application_id(preferences: &dyn PreferenceStore) -> Result<String, AppError> {
    if let Some(id) = preferences.application_id()? {
        return Ok(id);
    }
    let id = Uuid::new_v4().to_string();
    preferences.set_application_id(&id)?;
    Ok(id)
}
