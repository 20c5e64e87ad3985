pub mod growth;

pub use growth::{
    milestones, project_growth, Milestone, PortfolioProjection, DEFAULT_HORIZON_YEARS,
    MAX_HORIZON_YEARS,
};
