// Renderer seam - turns a computed dashboard view into bytes for a client
use crate::domain::dashboard::DashboardView;

pub trait DashboardRenderer: Send + Sync {
    fn content_type(&self) -> &'static str;

    fn render(&self, view: &DashboardView) -> anyhow::Result<Vec<u8>>;
}
