use crate::generation::completion;
use crate::generation::errors::GenerationClientError;
use crate::generation::prediction::Prediction;
use app_config::secret_string::Secret;
use app_config::AppConfig;
use std::time::Duration;

/// Every submitted prompt is restyled with this token so the model produces
/// emoji-shaped output.
pub const PROMPT_STYLE_PREFIX: &str = "A TOK emoji of ";

/// Client for the remote text-to-image prediction API.
///
/// Constructed once at startup and injected wherever generations are run. The
/// API URL is a field so tests can aim the client elsewhere.
#[derive(Debug, Clone)]
pub struct GenerationClient {
  api_token: Secret,
  model_version: String,
  api_url: String,
  reqwest_client: reqwest::Client,
}

impl GenerationClient {
  pub fn new(api_token: Secret, model_version: String, api_url: String) -> Self {
    Self {
      api_token,
      model_version,
      api_url,
      reqwest_client: reqwest::Client::new(),
    }
  }

  /// Builds the client from the loaded app config.
  ///
  /// # Errors
  /// - No generation API token was configured.
  pub fn from_app_config() -> Result<Self, GenerationClientError> {
    let Some(api_token) = AppConfig::replicate_api_token() else {
      return Err(GenerationClientError::MissingApiToken);
    };

    Ok(Self::new(
      api_token.clone(),
      AppConfig::generation_model_version().to_owned(),
      AppConfig::generation_api_url().to_owned(),
    ))
  }

  /// Submits a new prediction for the given prompt and returns it in its
  /// initial state.
  pub async fn submit(&self, prompt: &str) -> Result<Prediction, GenerationClientError> {
    let styled_prompt = format!("{PROMPT_STYLE_PREFIX}{prompt}");
    let request_body = serde_json::json!({
      "version": self.model_version,
      "input": { "prompt": styled_prompt },
    });

    let response = self
      .reqwest_client
      .post(self.predictions_url(None))
      .header("Authorization", self.authorization_header())
      .json(&request_body)
      .send()
      .await?;

    if !response.status().is_success() {
      return Err(GenerationClientError::FailedResponse {
        location: "submit prediction",
        code: response.status().as_u16(),
      });
    }

    response.json::<Prediction>().await.map_err(Into::into)
  }

  /// Fetches the current state of a prediction.
  pub async fn poll(&self, prediction_id: &str) -> Result<Prediction, GenerationClientError> {
    let response = self
      .reqwest_client
      .get(self.predictions_url(Some(prediction_id)))
      .header("Authorization", self.authorization_header())
      .send()
      .await?;

    if !response.status().is_success() {
      return Err(GenerationClientError::FailedResponse {
        location: "poll prediction",
        code: response.status().as_u16(),
      });
    }

    response.json::<Prediction>().await.map_err(Into::into)
  }

  /// Polls the prediction at a fixed cadence until it reaches a terminal
  /// state, giving up after `max_attempts` polls.
  ///
  /// # Errors
  /// - The prediction was still running after the final poll.
  /// - A poll failed.
  pub async fn await_completion(
    &self,
    prediction_id: &str,
    max_attempts: usize,
    poll_interval: Duration,
  ) -> Result<Prediction, GenerationClientError> {
    let finished_prediction =
      completion::poll_until_terminal(|| self.poll(prediction_id), max_attempts, poll_interval)
        .await?;

    let Some(finished_prediction) = finished_prediction else {
      return Err(GenerationClientError::PredictionTimedOut {
        prediction_id: prediction_id.to_owned(),
        attempts: max_attempts,
      });
    };

    Ok(finished_prediction)
  }

  fn predictions_url(&self, prediction_id: Option<&str>) -> String {
    let base_url = self.api_url.trim_end_matches('/');

    match prediction_id {
      Some(prediction_id) => format!("{base_url}/v1/predictions/{prediction_id}"),
      None => format!("{base_url}/v1/predictions"),
    }
  }

  fn authorization_header(&self) -> String {
    format!(
      "Token {}",
      Secret::read_secret_string(self.api_token.read_value())
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn test_client() -> GenerationClient {
    GenerationClient::new(
      Secret::from("r8_test"),
      "test-version".to_string(),
      "https://api.replicate.test/".to_string(),
    )
  }

  #[test]
  fn prediction_urls_are_built_from_the_configured_base() {
    let generation_client = test_client();

    assert_eq!(
      generation_client.predictions_url(None),
      "https://api.replicate.test/v1/predictions"
    );
    assert_eq!(
      generation_client.predictions_url(Some("j1")),
      "https://api.replicate.test/v1/predictions/j1"
    );
  }

  #[test]
  fn submitted_prompts_carry_the_style_prefix() {
    let styled_prompt = format!("{PROMPT_STYLE_PREFIX}{}", "a happy cat");

    assert_eq!(styled_prompt, "A TOK emoji of a happy cat");
  }
}
