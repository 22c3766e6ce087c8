#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// JSON body for both `/login` and `/register`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Response envelope. `message` is the only field the client reads, and the
/// backend only promises it on failure responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}
