use crate::errors::EntityExtensionError;
use app_config::secret_string::Secret;
use app_config::AppConfig;
use url::Url;

/// Client for the hosted object store's REST interface.
///
/// Built once at startup and injected into whatever needs to write blobs, so
/// tests can point it at a fake endpoint instead of patching process state.
#[derive(Debug, Clone)]
pub struct EmojiStorageClient {
  storage_url: String,
  service_key: Secret,
  bucket: String,
  reqwest_client: reqwest::Client,
}

impl EmojiStorageClient {
  pub fn new(storage_url: String, service_key: Secret, bucket: String) -> Self {
    Self {
      storage_url,
      service_key,
      bucket,
      reqwest_client: reqwest::Client::new(),
    }
  }

  /// Builds the client from the loaded app config.
  ///
  /// # Errors
  /// - The storage URL or service key was not configured.
  pub fn from_app_config() -> Result<Self, EntityExtensionError> {
    let (Some(storage_url), Some(service_key)) =
      (AppConfig::storage_url(), AppConfig::storage_service_key())
    else {
      return Err(EntityExtensionError::MissingStorageConfiguration);
    };

    Ok(Self::new(
      storage_url.to_owned(),
      service_key.clone(),
      AppConfig::storage_bucket().to_owned(),
    ))
  }

  /// Uploads the image bytes under the given file name and returns the
  /// permanent public URL of the blob.
  pub async fn upload(
    &self,
    file_name: &str,
    image_bytes: Vec<u8>,
  ) -> Result<String, EntityExtensionError> {
    let upload_url = Url::parse(&self.storage_url)?
      .join(&format!("storage/v1/object/{}/{}", self.bucket, file_name))?;

    let response = self
      .reqwest_client
      .post(upload_url)
      .header(
        "Authorization",
        format!(
          "Bearer {}",
          Secret::read_secret_string(self.service_key.read_value())
        ),
      )
      .header("Content-Type", "image/png")
      .body(image_bytes)
      .send()
      .await?;

    if !response.status().is_success() {
      return Err(EntityExtensionError::UploadFailed {
        file_name: file_name.to_owned(),
        code: response.status().as_u16(),
      });
    }

    Ok(self.public_url(file_name))
  }

  pub fn public_url(&self, file_name: &str) -> String {
    format!(
      "{}/storage/v1/object/public/{}/{}",
      self.storage_url.trim_end_matches('/'),
      self.bucket,
      file_name
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn public_url_is_derived_from_the_bucket_and_file_name() {
    let storage_client = EmojiStorageClient::new(
      "https://abcdefg.supabase.co/".to_string(),
      Secret::from("service-key"),
      "emojis".to_string(),
    );

    assert_eq!(
      storage_client.public_url("cat.png"),
      "https://abcdefg.supabase.co/storage/v1/object/public/emojis/cat.png"
    );
  }
}
