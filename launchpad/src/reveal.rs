//! Post-countdown reveal: full-screen steps and the cue plan that drives them.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::time::Duration;

use crate::config::LaunchConfig;

/// Which full-screen reveal message is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealStep {
    #[default]
    Idle,
    Step1,
    Step2,
    Step3,
}

impl RevealStep {
    /// Headline shown for this step, `None` while idle.
    #[must_use]
    pub fn headline(self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Step1 => Some("🚀 ВРЕМЯ ПРИШЛО!"),
            Self::Step2 => Some("🧠 НЕЙРОСЕТЬ ПРОСЫПАЕТСЯ..."),
            Self::Step3 => Some("🤖 AI ЧАТ-БОТ 2027 ГОТОВ!"),
        }
    }
}

/// One thing the reveal chain does when a cue fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealAction {
    /// Replace whatever step is showing with this one.
    Show(RevealStep),
    /// Clear the reveal and unlock the chat widget.
    UnlockChat,
}

/// An action at a fixed offset from the ready moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cue {
    pub at: Duration,
    pub action: RevealAction,
}

/// The full reveal chain, in firing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealPlan {
    cues: Vec<Cue>,
}

impl RevealPlan {
    /// Build the step1 → step2 → step3 → unlock chain from configured offsets.
    #[must_use]
    pub fn from_config(config: &LaunchConfig) -> Self {
        Self {
            cues: vec![
                Cue { at: config.step1_at, action: RevealAction::Show(RevealStep::Step1) },
                Cue { at: config.step2_at, action: RevealAction::Show(RevealStep::Step2) },
                Cue { at: config.step3_at, action: RevealAction::Show(RevealStep::Step3) },
                Cue { at: config.unlock_at, action: RevealAction::UnlockChat },
            ],
        }
    }

    #[must_use]
    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    /// Offset of the final cue.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.cues.iter().map(|c| c.at).max().unwrap_or_default()
    }
}

impl Default for RevealPlan {
    fn default() -> Self {
        Self::from_config(&LaunchConfig::default())
    }
}
