//! Password strength indicator.
//!
//! The score counts how many character classes (lowercase, uppercase,
//! digit, special) appear in the password. It drives a four-segment bar
//! and is independent of whether the password passes validation.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::CharClass;

/// Delay before a keystroke is scored, so fast typing only scores the last value.
#[cfg(feature = "async")]
pub const SCORE_DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Strength score {0} is out of range (0-4)")]
pub struct ScoreOutOfRange(pub u8);

/// Number of character classes present, in `0..=4`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StrengthScore(u8);

impl StrengthScore {
    pub const MAX: u8 = 4;

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn tier(self) -> StrengthTier {
        StrengthTier::from(self)
    }

    /// Width of the indicator bar, in percent.
    pub fn fill_percent(self) -> u8 {
        self.0 * 25
    }
}

impl TryFrom<u8> for StrengthScore {
    type Error = ScoreOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > Self::MAX {
            return Err(ScoreOutOfRange(value));
        }
        Ok(StrengthScore(value))
    }
}

/// Display tier of the strength bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthTier {
    Neutral,
    Weak,
    Medium,
    Strong,
}

impl StrengthTier {
    /// Bar color as a hex token.
    pub fn color(self) -> &'static str {
        match self {
            StrengthTier::Neutral => "#ccc",
            StrengthTier::Weak => "#FF4C4C",
            StrengthTier::Medium => "#FFC400",
            StrengthTier::Strong => "#4CAF50",
        }
    }
}

impl From<StrengthScore> for StrengthTier {
    fn from(score: StrengthScore) -> Self {
        match score.value() {
            1 => StrengthTier::Weak,
            2 => StrengthTier::Medium,
            3 | 4 => StrengthTier::Strong,
            _ => StrengthTier::Neutral,
        }
    }
}

/// Scores a plain password string.
pub fn score(password: &str) -> StrengthScore {
    let count = CharClass::ALL
        .iter()
        .filter(|class| class.occurs_in(password))
        .count();
    // At most four classes.
    StrengthScore(count as u8)
}

pub fn score_secret(password: &SecretString) -> StrengthScore {
    score(password.expose_secret())
}

/// Scores the password after [`SCORE_DEBOUNCE`] and sends the result via channel.
///
/// Nothing is sent if `token` is cancelled before the delay elapses, which is
/// how a newer keystroke supersedes this one.
#[cfg(feature = "async")]
pub async fn score_password_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthScore>,
) {
    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("Strength scoring cancelled");
            return;
        }
        _ = tokio::time::sleep(SCORE_DEBOUNCE) => {}
    }

    let result = score_secret(password);

    if let Err(e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send strength score: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}
