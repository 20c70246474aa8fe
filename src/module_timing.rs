use embassy_time::Duration;
use embedded_hal_async::delay::DelayNs;

/// Time for an RF switch or modem functional mode change to take effect
/// before the next step of a sequence.
pub const fn settle_time() -> Duration {
    Duration::from_millis(500)
}

/// Interval between AT socket reads while awaiting network registration
pub const fn registration_poll_interval() -> Duration {
    Duration::from_secs(1)
}

pub(crate) async fn wait<D: DelayNs>(delay: &mut D, duration: Duration) {
    delay
        .delay_ms(u32::try_from(duration.as_millis()).unwrap_or(u32::MAX))
        .await;
}
