// Application layer - state container, use cases and seams to the outside
pub mod clock;
pub mod dashboard_service;
pub mod dashboard_state;
pub mod dataset_repository;
pub mod loading;
pub mod renderer;
pub mod streaming_service;
