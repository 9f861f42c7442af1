/// Mirrors the prediction resource returned by the generation provider.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Prediction {
  pub id: String,
  pub status: PredictionStatus,

  /// Image URLs, in the order the provider produced them.
  #[serde(default)]
  pub output: Option<Vec<String>>,

  /// Provider-supplied failure detail, present on failed predictions.
  #[serde(default)]
  pub error: Option<String>,
}

impl Prediction {
  pub fn first_output_url(&self) -> Option<&str> {
    self.output.as_ref()?.first().map(String::as_str)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictionStatus {
  Starting,
  Processing,
  Succeeded,
  Failed,
  Canceled,
}

impl PredictionStatus {
  pub fn is_terminal(self) -> bool {
    matches!(
      self,
      PredictionStatus::Succeeded | PredictionStatus::Failed | PredictionStatus::Canceled
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn prediction_parses_the_provider_response_body() {
    let response_body = r#"{
      "id": "j1",
      "status": "succeeded",
      "output": ["https://img/1.png", "https://img/2.png"],
      "metrics": {"predict_time": 3.2}
    }"#;

    let prediction: Prediction = serde_json::from_str(response_body).unwrap();

    assert_eq!(prediction.id, "j1");
    assert_eq!(prediction.status, PredictionStatus::Succeeded);
    assert_eq!(prediction.first_output_url(), Some("https://img/1.png"));
    assert_eq!(prediction.error, None);
  }

  #[test]
  fn prediction_without_output_has_no_first_url() {
    let response_body = r#"{"id": "j1", "status": "processing"}"#;

    let prediction: Prediction = serde_json::from_str(response_body).unwrap();

    assert_eq!(prediction.first_output_url(), None);
  }

  #[test]
  fn only_finished_statuses_are_terminal() {
    assert!(!PredictionStatus::Starting.is_terminal());
    assert!(!PredictionStatus::Processing.is_terminal());
    assert!(PredictionStatus::Succeeded.is_terminal());
    assert!(PredictionStatus::Failed.is_terminal());
    assert!(PredictionStatus::Canceled.is_terminal());
  }
}
