#[derive(Debug, thiserror::Error)]
pub enum EntityExtensionError {
  #[error("{}", .0)]
  ReqwestError(#[from] reqwest::Error),

  #[error("{}", .0)]
  SeaOrmDbError(#[from] sea_orm::error::DbErr),

  #[error("{}", .0)]
  UrlParseError(#[from] url::ParseError),

  #[error("Failed to query {} at {}. Data: {}", value_name, location, value)]
  FailedToQuery {
    value_name: &'static str,
    location: &'static str,
    value: String,
  },

  #[error("Attempted to build a storage client without a storage URL and service key configured.")]
  MissingStorageConfiguration,

  #[error("Failed to download the generated image from {}. Code: {}", source_url, code)]
  ImageDownloadFailed { source_url: String, code: u16 },

  #[error("Failed to upload {} to object storage. Code: {}", file_name, code)]
  UploadFailed { file_name: String, code: u16 },

  #[error(
    "Uploaded {} but failed to insert its record. The blob is orphaned in storage.",
    file_name
  )]
  RecordInsertAfterUpload {
    file_name: String,
    #[source]
    source: sea_orm::error::DbErr,
  },
}
