//! The built-in course catalog and its search/filter predicate.

use std::sync::LazyLock;

use crate::model::{Course, CourseError, Level, LevelFilter, Progress};

struct CourseSeed {
    id: &'static str,
    name: &'static str,
    level: Level,
    description: &'static str,
    sample_code: &'static str,
}

const SEEDS: [CourseSeed; 9] = [
    CourseSeed {
        id: "html",
        name: "HTML",
        level: Level::Beginner,
        description: "Markup language that gives a web page its structure.",
        sample_code: "<!DOCTYPE html>\n<html>\n  <head><title>Hello</title></head>\n  <body>Hello World</body>\n</html>",
    },
    CourseSeed {
        id: "css",
        name: "CSS",
        level: Level::Beginner,
        description: "Style sheet language that controls how HTML elements look.",
        sample_code: "h1 { font-family: Arial; color: teal; }",
    },
    CourseSeed {
        id: "js",
        name: "JavaScript",
        level: Level::Beginner,
        description: "Programming language for interactivity on the web.",
        sample_code: "console.log('Hello World');",
    },
    CourseSeed {
        id: "python",
        name: "Python",
        level: Level::Beginner,
        description: "General-purpose language that is easy to read.",
        sample_code: "print(\"Hello World\")",
    },
    CourseSeed {
        id: "php",
        name: "PHP",
        level: Level::Intermediate,
        description: "Language for server-side web development.",
        sample_code: "<?php echo \"Hello World\"; ?>",
    },
    CourseSeed {
        id: "java",
        name: "Java",
        level: Level::Intermediate,
        description: "Portable object-oriented language that runs on the JVM.",
        sample_code: "public class Main { public static void main(String[] args){ System.out.println(\"Hello World\"); } }",
    },
    CourseSeed {
        id: "cpp",
        name: "C++",
        level: Level::Intermediate,
        description: "Mid-level language built for high performance.",
        sample_code: "#include <iostream>\nint main(){ std::cout << \"Hello World\"; }",
    },
    CourseSeed {
        id: "csharp",
        name: "C#",
        level: Level::Intermediate,
        description: "Modern language for the .NET platform.",
        sample_code: "using System; class P { static void Main(){ Console.WriteLine(\"Hello World\"); } }",
    },
    CourseSeed {
        id: "go",
        name: "Go",
        level: Level::Intermediate,
        description: "Fast language with built-in concurrency.",
        sample_code: "package main\nimport \"fmt\"\nfunc main(){ fmt.Println(\"Hello World\") }",
    },
];

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::from_seeds(&SEEDS).expect("built-in catalog entries are valid")
});

/// Search box and level selector state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseFilter {
    query: String,
    level: LevelFilter,
}

impl CourseFilter {
    /// The query is trimmed and lower-cased once here.
    #[must_use]
    pub fn new(query: &str, level: LevelFilter) -> Self {
        Self {
            query: query.trim().to_lowercase(),
            level,
        }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn level(&self) -> LevelFilter {
        self.level
    }

    #[must_use]
    pub fn matches(&self, course: &Course) -> bool {
        course.matches_query(&self.query) && self.level.accepts(course.level())
    }
}

/// Ordered, immutable list of courses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    /// The catalog shipped with the site.
    ///
    /// # Panics
    ///
    /// Panics on first use if a built-in entry fails validation.
    #[must_use]
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    fn from_seeds(seeds: &[CourseSeed]) -> Result<Self, CourseError> {
        let courses = seeds
            .iter()
            .map(|s| Course::new(s.id, s.name, s.level, s.description, s.sample_code))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { courses })
    }

    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id() == id)
    }

    /// Matching courses, in catalog order.
    #[must_use]
    pub fn filter(&self, filter: &CourseFilter) -> Vec<&Course> {
        self.courses.iter().filter(|c| filter.matches(c)).collect()
    }

    #[must_use]
    pub fn completed_count(&self, progress: &Progress) -> usize {
        progress.completed_among(self.courses.iter().map(Course::id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(courses: &[&Course]) -> Vec<String> {
        courses.iter().map(|c| c.id().to_owned()).collect()
    }

    #[test]
    fn builtin_catalog_is_valid() {
        assert_eq!(Catalog::builtin().len(), 9);
    }

    #[test]
    fn java_query_matches_java_and_javascript() {
        let filter = CourseFilter::new("java", LevelFilter::All);
        let found = Catalog::builtin().filter(&filter);
        assert_eq!(ids(&found), ["js", "java"]);
    }

    #[test]
    fn query_is_case_insensitive_and_trimmed() {
        let filter = CourseFilter::new("  PyThOn ", LevelFilter::All);
        assert_eq!(ids(&Catalog::builtin().filter(&filter)), ["python"]);
    }

    #[test]
    fn intermediate_filter_keeps_catalog_order() {
        let filter = CourseFilter::new("", "menengah".parse().unwrap());
        let found = Catalog::builtin().filter(&filter);
        assert_eq!(ids(&found), ["php", "java", "cpp", "csharp", "go"]);
    }

    #[test]
    fn query_and_level_combine() {
        let filter = CourseFilter::new("java", LevelFilter::Only(Level::Beginner));
        assert_eq!(ids(&Catalog::builtin().filter(&filter)), ["js"]);
    }

    #[test]
    fn description_matches() {
        let filter = CourseFilter::new("concurrency", LevelFilter::All);
        assert_eq!(ids(&Catalog::builtin().filter(&filter)), ["go"]);
    }

    #[test]
    fn empty_filter_returns_everything() {
        let found = Catalog::builtin().filter(&CourseFilter::default());
        assert_eq!(found.len(), Catalog::builtin().len());
    }

    #[test]
    fn counts_completed_courses_in_catalog() {
        let mut progress = Progress::new();
        progress.set_completed("go", true);
        progress.set_completed("rust", true);
        assert_eq!(Catalog::builtin().completed_count(&progress), 1);
    }
}
