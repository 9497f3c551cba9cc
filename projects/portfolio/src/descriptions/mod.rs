pub mod loader;
pub mod loading;
pub mod matcher;
pub mod source;

pub use loader::load_repository_descriptions;
pub use loading::{set_loading_states, LOADING_PLACEHOLDER};
pub use matcher::{normalize_description, set_repository_descriptions, MatchReport};
pub use source::{ListRepositoriesError, RepositorySource};
