//! Concurrent image requests.
//!
//! Every prompt gets its own request, all started at once and each bounded by
//! a deadline. The join waits for all of them to settle, so a slow failure
//! never hides a later success (or the other way round). The
//! [`FanOutPolicy`] then decides what a failure means for the whole run.

use futures::future::join_all;
use montage_core::ImageResult;
use montage_error::{ImageError, ImageErrorKind, ImageFailure, MontageError, MontageErrorKind, MontageResult};
use montage_interface::ImageGenerator;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{error, instrument, warn};

/// How a fan-out treats failed image requests.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FanOutPolicy {
    /// Any failure fails the whole fan-out; completed images are discarded
    #[default]
    AllOrNothing,
    /// Failures become per-index markers next to the successful images
    Partial,
}

/// Outcome of a single request after it settled.
enum Settled {
    Generated(Value),
    Failed {
        failure: ImageFailure,
        timed_out: bool,
    },
}

/// Issue one image request per prompt and collect results in prompt order.
///
/// # Errors
///
/// Under [`FanOutPolicy::AllOrNothing`], returns an
/// [`ImageErrorKind::FanOut`] listing every failed index if any request
/// failed or timed out. [`FanOutPolicy::Partial`] never fails.
#[instrument(skip(images, prompts), fields(model = images.model_name(), prompts = prompts.len()))]
pub async fn fan_out<I>(
    images: &I,
    prompts: &[String],
    deadline: Duration,
    policy: FanOutPolicy,
) -> MontageResult<Vec<ImageResult>>
where
    I: ImageGenerator + ?Sized,
{
    let requests = prompts
        .iter()
        .enumerate()
        .map(|(index, prompt)| settle(images, index, prompt, deadline));

    let settled = join_all(requests).await;
    let total = settled.len();

    let failures: Vec<ImageFailure> = settled
        .iter()
        .filter_map(|outcome| match outcome {
            Settled::Failed { failure, .. } => Some(failure.clone()),
            Settled::Generated(_) => None,
        })
        .collect();

    if failures.is_empty() {
        return Ok(settled
            .into_iter()
            .filter_map(|outcome| match outcome {
                Settled::Generated(output) => Some(ImageResult::Generated(output)),
                Settled::Failed { .. } => None,
            })
            .collect());
    }

    match policy {
        FanOutPolicy::AllOrNothing => {
            error!(
                failed = failures.len(),
                total,
                "Image fan-out failed, discarding completed results"
            );
            Err(ImageError::new(ImageErrorKind::FanOut { failures, total }).into())
        }
        FanOutPolicy::Partial => {
            warn!(
                failed = failures.len(),
                total,
                "Image fan-out partially failed, returning markers for failed indices"
            );
            Ok(settled
                .into_iter()
                .map(|outcome| match outcome {
                    Settled::Generated(output) => ImageResult::Generated(output),
                    Settled::Failed { failure, timed_out } => ImageResult::Failed {
                        index: failure.index,
                        error: if timed_out {
                            "image request timed out".to_string()
                        } else {
                            "image request failed".to_string()
                        },
                    },
                })
                .collect())
        }
    }
}

/// Run one request to completion or deadline.
async fn settle<I>(images: &I, index: usize, prompt: &str, deadline: Duration) -> Settled
where
    I: ImageGenerator + ?Sized,
{
    match tokio::time::timeout(deadline, images.generate_image(prompt)).await {
        Ok(Ok(output)) => Settled::Generated(output),
        Ok(Err(e)) => {
            error!(index, error = %e, "Image request failed");
            Settled::Failed {
                failure: ImageFailure {
                    index,
                    reason: failure_reason(&e),
                },
                timed_out: false,
            }
        }
        Err(_) => {
            let kind = ImageErrorKind::Timeout(deadline);
            error!(index, deadline_ms = deadline.as_millis() as u64, "Image request timed out");
            Settled::Failed {
                failure: ImageFailure {
                    index,
                    reason: kind.to_string(),
                },
                timed_out: true,
            }
        }
    }
}

/// Condition text without the location suffix of the error wrappers.
fn failure_reason(err: &MontageError) -> String {
    match err.kind() {
        MontageErrorKind::Image(e) => e.kind.to_string(),
        MontageErrorKind::Config(e) => e.message.clone(),
        MontageErrorKind::Http(e) => e.message.clone(),
        other => other.to_string(),
    }
}
