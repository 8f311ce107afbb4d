use crate::auth::TokenConfig;

/// Whole-system configuration, assembled by the caller and passed into
/// [`ClinicSystem::new`](super::ClinicSystem::new). Nothing here is read
/// from process-wide state.
#[derive(Debug, Clone)]
pub struct ClinicConfig {
    pub token: TokenConfig,
    /// Bcrypt cost factor. Tests use a low cost; production the default 12.
    pub bcrypt_cost: u32,
    /// Mailbox size for every actor channel.
    pub channel_buffer: usize,
}
