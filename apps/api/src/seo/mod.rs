// SEO analysis: pure metric computation plus the advisory side-table merge.

pub mod analysis;
pub mod handlers;
