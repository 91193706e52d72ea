use surgisense_core::models::recovery::RecoveryProfile;

use crate::views::chat::ChatPanel;
use crate::views::discharge::DischargePanel;
use crate::views::scanner::ScannerPanel;
use crate::views::voice::VoicePanel;
use crate::views::wound::WoundPanel;

/// Everything one dashboard session shows.
///
/// Panels are independent: an upload in one never waits on or touches
/// another panel's state.
#[derive(Debug, Default)]
pub struct DashboardState {
    pub recovery: Option<RecoveryProfile>,
    pub scanner: ScannerPanel,
    pub discharge: DischargePanel,
    pub wound: WoundPanel,
    pub voice: VoicePanel,
    pub chat: ChatPanel,
}

impl DashboardState {
    pub fn new(recovery: Option<RecoveryProfile>) -> Self {
        Self {
            recovery,
            ..Self::default()
        }
    }
}
