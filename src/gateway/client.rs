use base64::prelude::*;
use ureq::Agent;
use url::Url;

use crate::config;
use crate::edit::EditBuffer;
use crate::logger::LogExt;

use super::{Error, ErrorKind, Gateway, VideoEntity};

#[derive(Clone)]
pub enum Credentials {
  Basic(String, String),
  Bearer(String),
}

impl Credentials {
  pub fn from_config(api: &config::Api) -> Option<Self> {
    if let Some(token) = &api.token {
      return Some(Self::Bearer(token.trim().to_owned()));
    }

    match (&api.username, &api.password) {
      (Some(username), Some(password)) => {
        Some(Self::Basic(username.clone(), password.trim().to_owned()))
      }
      _ => None,
    }
  }
}

impl core::fmt::Debug for Credentials {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str("<hidden>")
  }
}

/// HTTP implementation of [`Gateway`] against the video backend.
#[derive(Debug, Clone)]
pub struct Client {
  credentials: Option<Credentials>,
  agent: Agent,
  base_url: Url,
}

impl Client {
  pub fn new(credentials: Option<Credentials>, base_url: Url) -> Self {
    Self {
      credentials,
      agent: Agent::new(),
      base_url,
    }
  }

  pub fn from_config(api: &config::Api) -> Self {
    Self::new(Credentials::from_config(api), api.url.clone())
  }

  fn get_auth_header(&self) -> Option<String> {
    match self.credentials.as_ref()? {
      Credentials::Basic(username, password) => Some(format!(
        "Basic {}",
        BASE64_STANDARD.encode(format!("{username}:{password}"))
      )),
      Credentials::Bearer(token) => Some(format!("Bearer {token}")),
    }
  }

  /// `{base}/videos/{segments..}`, every segment percent-encoded.
  fn video_url(&self, segments: &[&str]) -> Result<Url, Error> {
    let mut url = self.base_url.clone();

    url
      .path_segments_mut()
      .map_err(|()| Error::new(ErrorKind::Parsing, format!("{} cannot be a base url", self.base_url)))?
      .pop_if_empty()
      .push("videos")
      .extend(segments);

    Ok(url)
  }

  fn request(&self, method: &str, url: &Url) -> ureq::Request {
    let request = self.agent
      .request(method, url.as_str())
      .set("Accept", "application/json");

    match self.get_auth_header() {
      Some(auth) => request.set("Authorization", &auth),
      None => request,
    }
  }
}

impl Gateway for Client {
  fn fetch_by_id(&self, video_id: &str) -> Result<VideoEntity, Error> {
    let url = self.video_url(&[video_id])?;
    log::debug!(video_id; "GET {url}");

    let fetch = || -> Result<VideoEntity, Error> {
      Ok(self.request("GET", &url).call()?.into_json()?)
    };

    fetch().log_warn("Failed to fetch video")
  }

  fn update(&self, user_id: &str, video_id: &str, fields: &EditBuffer) -> Result<String, Error> {
    let url = self.video_url(&[user_id, video_id])?;
    log::debug!(video_id; "PUT {url}");

    let update = || -> Result<String, Error> {
      let body = self.request("PUT", &url)
        .set("Content-Type", "application/json")
        .send_json(fields)?
        .into_string()?;

      Ok(message_from_body(&body).unwrap_or_else(|| "Video updated".to_owned()))
    };

    update().log_warn("Failed to update video")
  }

  fn remove(&self, user_id: &str, video_id: &str) -> Result<String, Error> {
    let url = self.video_url(&[user_id, video_id])?;
    log::debug!(video_id; "DELETE {url}");

    let remove = || -> Result<String, Error> {
      let body = self.request("DELETE", &url).call()?.into_string()?;

      Ok(message_from_body(&body).unwrap_or_else(|| "Video deleted".to_owned()))
    };

    remove().log_warn("Failed to delete video")
  }
}

/// The human readable part of a response body: a JSON string, the `message`
/// or `error` member of a JSON object, or the plain text itself.
fn message_from_body(body: &str) -> Option<String> {
  let body = body.trim();
  if body.is_empty() {
    return None;
  }

  match serde_json::from_str::<serde_json::Value>(body) {
    Ok(serde_json::Value::String(message)) => Some(message),
    Ok(serde_json::Value::Object(map)) => map
      .get("message")
      .or_else(|| map.get("error"))
      .and_then(serde_json::Value::as_str)
      .map(str::to_owned),
    Ok(_) | Err(_) => Some(body.to_owned()),
  }
}

impl From<ureq::Error> for Error {
  fn from(e: ureq::Error) -> Self {
    match e {
      ureq::Error::Status(status, response) => {
        let status_text = response.status_text().to_owned();
        let body = response.into_string().unwrap_or_default();

        Self::new(
          ErrorKind::from_status(status),
          message_from_body(&body).unwrap_or(status_text),
        )
      }
      ureq::Error::Transport(transport) => Self::new(ErrorKind::Network, transport.to_string()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn client(base: &str) -> Client {
    Client::new(None, Url::parse(base).unwrap())
  }

  #[test]
  fn video_urls_are_built_below_the_base_path() {
    let with_slash = client("http://localhost:8080/api/");
    let without_slash = client("http://localhost:8080/api");

    assert_eq!(
      with_slash.video_url(&["v1"]).unwrap().as_str(),
      "http://localhost:8080/api/videos/v1"
    );
    assert_eq!(
      without_slash.video_url(&["u1", "v1"]).unwrap().as_str(),
      "http://localhost:8080/api/videos/u1/v1"
    );
  }

  #[test]
  fn video_ids_are_percent_encoded() {
    let url = client("http://localhost/").video_url(&["a/b"]).unwrap();

    assert_eq!(url.as_str(), "http://localhost/videos/a%2Fb");
  }

  #[test]
  fn auth_header_follows_credentials() {
    let mut client = client("http://localhost/");
    assert_eq!(client.get_auth_header(), None);

    client.credentials = Some(Credentials::Bearer("secret".to_owned()));
    assert_eq!(client.get_auth_header().as_deref(), Some("Bearer secret"));

    client.credentials = Some(Credentials::Basic("user".to_owned(), "pass".to_owned()));
    assert_eq!(client.get_auth_header().as_deref(), Some("Basic dXNlcjpwYXNz"));
  }

  #[test]
  fn credentials_are_hidden_from_debug() {
    let credentials = Credentials::Bearer("secret".to_owned());

    assert_eq!(format!("{credentials:?}"), "<hidden>");
  }

  #[test]
  fn status_errors_carry_kind_and_server_message() {
    let response = ureq::Response::new(403, "Forbidden", r#"{"message":"Forbidden"}"#).unwrap();

    let error = Error::from(ureq::Error::Status(403, response));

    assert_eq!(error, Error::new(ErrorKind::Forbidden, "Forbidden"));
  }

  #[test]
  fn status_errors_without_body_use_the_status_text() {
    let response = ureq::Response::new(404, "Not Found", "").unwrap();

    let error = Error::from(ureq::Error::Status(404, response));

    assert_eq!(error, Error::new(ErrorKind::NotFound, "Not Found"));
  }

  #[test]
  fn validation_errors_use_the_error_member() {
    let response = ureq::Response::new(422, "Unprocessable Entity", r#"{"error":"Title is required"}"#).unwrap();

    let error = Error::from(ureq::Error::Status(422, response));

    assert_eq!(error, Error::new(ErrorKind::Validation, "Title is required"));
  }

  #[test]
  fn messages_are_extracted_from_bodies() {
    assert_eq!(message_from_body(r#""Video updated""#).as_deref(), Some("Video updated"));
    assert_eq!(message_from_body(r#"{"message": "Forbidden"}"#).as_deref(), Some("Forbidden"));
    assert_eq!(message_from_body(r#"{"error": "Bad title"}"#).as_deref(), Some("Bad title"));
    assert_eq!(message_from_body("Deleted successfully").as_deref(), Some("Deleted successfully"));
    assert_eq!(message_from_body(r#"{"ok": true}"#), None);
    assert_eq!(message_from_body("  "), None);
  }
}
