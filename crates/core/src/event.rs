use crate::reading::Sample;

/// Messages that drive the display-session state.
///
/// Sources:
/// - Periodic timer        → `Tick`
/// - Refresh button        → `RefreshRequested`
/// - Sampler completion    → `SampleReceived`
/// - Config watcher task   → `ConfigReloaded`
#[derive(Debug, Clone)]
pub enum Message {
    /// Poll-interval timer fired; issue a fetch.
    Tick,
    /// User asked for an immediate fetch.
    RefreshRequested,
    /// A fetch finished (successfully or not).
    SampleReceived(Sample),
    /// Config file changed on disk; triggers a live reload.
    ConfigReloaded,
}
