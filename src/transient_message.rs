use super::*;

/// A status-line override that restores the previous message once it
/// expires, provided the override is still the message on screen.
pub(crate) struct TransientMessage {
  current: String,
  expires_at: Instant,
  previous: String,
}

impl TransientMessage {
  pub(crate) fn current(&self) -> &str {
    &self.current
  }

  pub(crate) fn into_previous(self) -> String {
    self.previous
  }

  pub(crate) fn is_expired(&self, now: Instant) -> bool {
    now >= self.expires_at
  }

  pub(crate) fn new(
    current: String,
    previous: String,
    expires_at: Instant,
  ) -> Self {
    Self {
      current,
      expires_at,
      previous,
    }
  }
}
