use super::traits::MapError;

/// Run one renderer operation; failures are logged at warn and swallowed.
///
/// Map styling and camera state are cosmetic: a failed call is skipped and the
/// next data or pointer event re-attempts it.
pub fn guarded<T, F>(operation: &str, f: F) -> Option<T>
where
    F: FnOnce() -> Result<T, MapError>,
{
    match f() {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("⚠️ [MAP] {} skipped: {}", operation, e);
            None
        }
    }
}
