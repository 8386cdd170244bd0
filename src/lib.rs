pub mod application;
pub mod connector;
pub mod domain;

pub use application::{GenerateResponseUseCase, GenerationClient, InteractionStore};

pub use connector::{
    api_router, Container, ContainerConfig, InMemoryInteractionStore, JsonFileStore, OllamaClient,
};

pub use domain::{DomainError, GenerateRequest, GenerateResponse, LogDocument, LogEntry};
