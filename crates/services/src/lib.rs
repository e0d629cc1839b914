#![forbid(unsafe_code)]

pub mod app_services;
pub mod auth_service;
pub mod board_service;
pub mod catalog_service;
pub mod error;
pub mod theme_service;

pub use academy_core::Clock;

pub use app_services::AppServices;
pub use auth_service::AuthService;
pub use board_service::BoardService;
pub use catalog_service::{CatalogService, CourseCard};
pub use error::{
    AppServicesError, AuthServiceError, BoardServiceError, CatalogServiceError, ThemeServiceError,
};
pub use theme_service::ThemeService;
