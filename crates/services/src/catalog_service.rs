use academy_core::model::{Course, Progress};
use academy_core::{Catalog, CourseFilter};
use storage::{Persistence, StoreKey};

use crate::error::CatalogServiceError;

/// A catalog entry joined with its completion flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseCard {
    pub course: Course,
    pub completed: bool,
}

/// Course listing and the persisted progress map.
#[derive(Clone)]
pub struct CatalogService {
    catalog: &'static Catalog,
    store: Persistence,
}

impl CatalogService {
    #[must_use]
    pub fn new(catalog: &'static Catalog, store: Persistence) -> Self {
        Self { catalog, store }
    }

    #[must_use]
    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    pub async fn progress(&self) -> Progress {
        self.store.get(StoreKey::Progress, Progress::new()).await
    }

    /// Filtered cards in catalog order, each with its stored completion flag.
    pub async fn list(&self, filter: &CourseFilter) -> Vec<CourseCard> {
        let progress = self.progress().await;
        self.catalog
            .filter(filter)
            .into_iter()
            .map(|course| CourseCard {
                completed: progress.is_completed(course.id()),
                course: course.clone(),
            })
            .collect()
    }

    /// Record a checkbox toggle and persist it immediately.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::UnknownCourse` for ids not in the catalog,
    /// or `CatalogServiceError::Storage` if the stored map cannot be read or
    /// written.
    pub async fn set_completed(
        &self,
        course_id: &str,
        completed: bool,
    ) -> Result<Progress, CatalogServiceError> {
        if self.catalog.get(course_id).is_none() {
            return Err(CatalogServiceError::UnknownCourse(course_id.to_owned()));
        }
        let progress = self
            .store
            .update(StoreKey::Progress, Progress::new(), |progress: &mut Progress| {
                progress.set_completed(course_id, completed);
                Ok::<_, CatalogServiceError>(progress.clone())
            })
            .await?;
        tracing::debug!(course_id, completed, "progress updated");
        Ok(progress)
    }

    /// Completed courses and catalog size.
    pub async fn completion(&self) -> (usize, usize) {
        let progress = self.progress().await;
        (self.catalog.completed_count(&progress), self.catalog.len())
    }

    #[must_use]
    pub fn sample_code(&self, course_id: &str) -> Option<&'static str> {
        self.catalog.get(course_id).map(Course::sample_code)
    }
}
