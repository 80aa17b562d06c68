/// Env-backed configuration loading.
///
/// A service config struct derives `serde::Deserialize` (field names map
/// to upper-case env vars) and calls `Config::from_env()` once at startup.
///
/// # Panics
///
/// Panics, naming the config type, when a required env var is missing or
/// a value fails to parse.
pub trait Config: Sized + serde::de::DeserializeOwned {
    fn from_env() -> Self {
        match envy::from_env() {
            Ok(config) => config,
            Err(e) => panic!(
                "failed to load {} from environment: {e}",
                std::any::type_name::<Self>()
            ),
        }
    }
}
