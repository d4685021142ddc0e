use contracts::shared::config::{StoreSettings, STORE_SETTINGS_KEY};
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn read_raw() -> Option<String> {
    get_local_storage()?.get_item(STORE_SETTINGS_KEY).ok()?
}

/// Stored settings merged over the defaults
pub fn load_store_settings(user_email: Option<&str>) -> StoreSettings {
    StoreSettings::from_stored(read_raw().as_deref(), user_email)
}

pub fn save_store_settings(settings: &StoreSettings) -> Result<(), String> {
    let storage = get_local_storage().ok_or("localStorage no disponible")?;
    storage
        .set_item(STORE_SETTINGS_KEY, &settings.to_json())
        .map_err(|e| format!("No se pudo guardar la configuración: {:?}", e))
}
