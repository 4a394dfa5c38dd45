use thiserror::Error;

/// Basic Result alias with [`enum@Error`]
pub type Result<T = (), E = Error> = std::result::Result<T, E>;

/// Error type used across the controller
///
/// None of these reach the page scripts: exported entry points log them and return.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0} not found")]
    MissingElement(&'static str),
    #[error("page config is already initialized")]
    AlreadyConfigured,
    #[error(transparent)]
    Config(#[from] toml::de::Error),
    #[error("{0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for Error {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        match value.as_string() {
            Some(message) => Error::Js(message),
            None => Error::Js(format!("{value:?}")),
        }
    }
}

/// Shorthand to create formatted [`Error::Js`] values like `e!("{x:?}")`
#[macro_export]
macro_rules! e {
    ($($tokens:tt),+) => {
        $crate::Error::Js(format!($($tokens),+))
    };
}
