use crate::generation::errors::GenerationClientError;
use crate::generation::prediction::Prediction;
use std::future::Future;
use std::time::Duration;

/// Drives a prediction to completion by polling at a fixed cadence.
///
/// Performs exactly `max_attempts` polls before giving up, suspending the
/// calling task between attempts. Returns `None` when the attempts are
/// exhausted without reaching a terminal state.
///
/// The provider has no push notification for finished predictions, so bounded
/// polling is the completion mechanism. Callers dropping the returned future
/// cancels the in-flight poll along with the wait.
pub async fn poll_until_terminal<F, Fut>(
  mut poll: F,
  max_attempts: usize,
  poll_interval: Duration,
) -> Result<Option<Prediction>, GenerationClientError>
where
  F: FnMut() -> Fut,
  Fut: Future<Output = Result<Prediction, GenerationClientError>>,
{
  for attempt in 1..=max_attempts {
    let prediction = poll().await?;

    if prediction.status.is_terminal() {
      return Ok(Some(prediction));
    }

    tracing::debug!(
      "Prediction {} is still {:?}. {} attempts left.",
      prediction.id,
      prediction.status,
      max_attempts - attempt
    );

    if attempt != max_attempts {
      tokio::time::sleep(poll_interval).await;
    }
  }

  Ok(None)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::generation::prediction::PredictionStatus;
  use std::sync::atomic::{AtomicUsize, Ordering};

  fn prediction_with_status(status: PredictionStatus) -> Prediction {
    Prediction {
      id: "j1".to_string(),
      status,
      output: None,
      error: None,
    }
  }

  #[tokio::test]
  async fn a_never_terminal_prediction_is_polled_exactly_max_attempts_times() {
    let poll_count = AtomicUsize::new(0);

    let poll_result = poll_until_terminal(
      || {
        poll_count.fetch_add(1, Ordering::SeqCst);

        async { Ok(prediction_with_status(PredictionStatus::Processing)) }
      },
      5,
      Duration::ZERO,
    )
    .await
    .unwrap();

    assert_eq!(poll_result, None);
    assert_eq!(poll_count.load(Ordering::SeqCst), 5);
  }

  #[tokio::test]
  async fn polling_stops_at_the_first_terminal_state() {
    let poll_count = AtomicUsize::new(0);

    let poll_result = poll_until_terminal(
      || {
        let current_attempt = poll_count.fetch_add(1, Ordering::SeqCst) + 1;

        async move {
          if current_attempt < 3 {
            Ok(prediction_with_status(PredictionStatus::Processing))
          } else {
            Ok(prediction_with_status(PredictionStatus::Succeeded))
          }
        }
      },
      30,
      Duration::ZERO,
    )
    .await
    .unwrap();

    assert_eq!(
      poll_result,
      Some(prediction_with_status(PredictionStatus::Succeeded))
    );
    assert_eq!(poll_count.load(Ordering::SeqCst), 3);
  }

  #[tokio::test]
  async fn a_failed_poll_surfaces_immediately() {
    let poll_result = poll_until_terminal(
      || async {
        Err::<Prediction, _>(GenerationClientError::FailedResponse {
          location: "poll prediction",
          code: 500,
        })
      },
      30,
      Duration::ZERO,
    )
    .await;

    assert!(matches!(
      poll_result,
      Err(GenerationClientError::FailedResponse { code: 500, .. })
    ));
  }
}
