//! Pure playback-channel state.
//!
//! Both logical channels (voice preview, main synthesis) share one owning
//! slot. A channel can only become active by taking the slot, which makes
//! the at-most-one-active-source invariant structural instead of a matter
//! of call discipline.

use serde::Serialize;
use voice_studio_domain::VoiceId;

/// Phase of the channel currently holding the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelPhase {
    /// Synthesis call in flight.
    Requesting,
    /// Audio handle active and audible.
    Playing,
}

/// Observable status of one playback channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChannelStatus {
    Idle,
    Requesting,
    Playing,
}

impl From<ChannelPhase> for ChannelStatus {
    fn from(phase: ChannelPhase) -> Self {
        match phase {
            ChannelPhase::Requesting => ChannelStatus::Requesting,
            ChannelPhase::Playing => ChannelStatus::Playing,
        }
    }
}

/// The single owning playback slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveSlot {
    Idle,
    Preview { voice: VoiceId, phase: ChannelPhase },
    Main { phase: ChannelPhase },
}

impl ActiveSlot {
    pub fn is_idle(&self) -> bool {
        matches!(self, ActiveSlot::Idle)
    }

    /// Status of the preview channel for one specific voice. Previews of
    /// other voices read as idle.
    pub fn preview_status(&self, voice: VoiceId) -> ChannelStatus {
        match self {
            ActiveSlot::Preview { voice: v, phase } if *v == voice => (*phase).into(),
            _ => ChannelStatus::Idle,
        }
    }

    /// The voice the preview channel is currently associated with, if any.
    pub fn preview_voice(&self) -> Option<VoiceId> {
        match self {
            ActiveSlot::Preview { voice, .. } => Some(*voice),
            _ => None,
        }
    }

    pub fn main_status(&self) -> ChannelStatus {
        match self {
            ActiveSlot::Main { phase } => (*phase).into(),
            _ => ChannelStatus::Idle,
        }
    }

    /// Whether a preview request for `voice` toggles playback off instead
    /// of starting a new request. Only a *playing* preview of the same
    /// voice toggles; a requesting one is preempted and restarted.
    pub fn preview_toggles_off(&self, voice: VoiceId) -> bool {
        matches!(
            self,
            ActiveSlot::Preview { voice: v, phase: ChannelPhase::Playing } if *v == voice
        )
    }
}
