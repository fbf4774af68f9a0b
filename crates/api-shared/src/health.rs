use crate::HealthRes;

/// Health check shared by the REST router and the CLI.
#[derive(Clone, Copy, Debug, Default)]
pub struct HealthService;

impl HealthService {
    /// Report that the content service is up.
    ///
    /// Does not contact the CMS; an unreachable CMS shows up as `error` view states instead.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "Studio content service is alive".into(),
        }
    }
}
