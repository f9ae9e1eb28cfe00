pub mod athlete_rankings;
pub mod coach_rankings;
pub mod games_dataset;
pub mod medal_points;
pub mod pipeline;
pub mod records;
pub mod results_export;
