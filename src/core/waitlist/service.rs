//! Submission service seam
//!
//! The site has no backend yet, so the default service waits for a fixed
//! latency and accepts everything. Tests and a future real endpoint plug in
//! through [`SubmissionService`].

use std::time::Duration;

use super::forms::WaitlistForm;
use super::validation::ValidationErrors;

/// Artificial round-trip time of the simulated service
pub const SIMULATED_LATENCY: Duration = Duration::from_millis(2000);

/// Acknowledgement returned by a service that accepted a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubmissionAccepted;

/// Capability to deliver a validated waitlist submission
///
/// Futures are not required to be `Send`: the browser runs them on the
/// single-threaded event loop.
#[allow(async_fn_in_trait)]
pub trait SubmissionService<F: WaitlistForm> {
    async fn submit(&self, submission: &F) -> Result<SubmissionAccepted, ValidationErrors>;
}

/// Stand-in for the unbuilt backend: sleeps, then succeeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedSubmission {
    latency: Duration,
}

impl SimulatedSubmission {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for SimulatedSubmission {
    fn default() -> Self {
        Self::new(SIMULATED_LATENCY)
    }
}

impl<F: WaitlistForm> SubmissionService<F> for SimulatedSubmission {
    async fn submit(&self, _submission: &F) -> Result<SubmissionAccepted, ValidationErrors> {
        pause(self.latency).await;
        Ok(SubmissionAccepted)
    }
}

/// Non-blocking wait on whichever event loop the build targets
pub async fn pause(duration: Duration) {
    #[cfg(feature = "hydrate")]
    {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::future::TimeoutFuture::new(millis).await;
    }
    #[cfg(all(feature = "ssr", not(feature = "hydrate")))]
    {
        tokio::time::sleep(duration).await;
    }
    #[cfg(not(any(feature = "ssr", feature = "hydrate")))]
    {
        let _ = duration;
    }
}
