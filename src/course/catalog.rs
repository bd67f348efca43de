use super::data;
use super::types::{Lesson, Module, PathFilter};

/// In-memory course catalog. The data set is fixed at startup; all lookups
/// borrow from it.
pub struct CourseCatalog {
    modules: Vec<Module>,
}

impl CourseCatalog {
    pub fn new() -> Self {
        Self {
            modules: data::course_modules(),
        }
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn filter_by_difficulty(&self, filter: PathFilter) -> Vec<&Module> {
        self.modules
            .iter()
            .filter(|module| filter.matches(module.difficulty))
            .collect()
    }

    pub fn find_lesson(&self, lesson_id: &str) -> Option<(&Module, &Lesson)> {
        self.modules.iter().find_map(|module| {
            module
                .lessons
                .iter()
                .find(|lesson| lesson.id == lesson_id)
                .map(|lesson| (module, lesson))
        })
    }

    /// Previous and next lesson in reading order, crossing module boundaries.
    /// Unknown ids, the first lesson and the last lesson get `None` on the
    /// missing side.
    pub fn neighbors(&self, lesson_id: &str) -> (Option<&Lesson>, Option<&Lesson>) {
        let ordered: Vec<&Lesson> = self
            .modules
            .iter()
            .flat_map(|module| module.lessons.iter())
            .collect();

        match ordered.iter().position(|lesson| lesson.id == lesson_id) {
            Some(index) => {
                let prev = if index > 0 {
                    Some(ordered[index - 1])
                } else {
                    None
                };
                let next = ordered.get(index + 1).copied();
                (prev, next)
            }
            None => (None, None),
        }
    }
}

impl Default for CourseCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn catalog_holds_four_modules_and_eleven_lessons() {
        let catalog = CourseCatalog::new();
        assert_eq!(catalog.modules().len(), 4);

        let lesson_count: usize = catalog
            .modules()
            .iter()
            .map(|module| module.lessons.len())
            .sum();
        assert_eq!(lesson_count, 11);

        let ids: HashSet<&str> = catalog
            .modules()
            .iter()
            .flat_map(|module| module.lessons.iter())
            .map(|lesson| lesson.id.as_str())
            .collect();
        assert_eq!(ids.len(), 11);
    }

    #[test]
    fn finds_lesson_with_its_module() {
        let catalog = CourseCatalog::new();
        let (module, lesson) = catalog.find_lesson("lesson3-2").unwrap();
        assert_eq!(module.id, "module3");
        assert_eq!(lesson.title, "Markov Chain Monte Carlo (MCMC)");
        assert!(lesson.has_exercise);

        assert!(catalog.find_lesson("lesson9-9").is_none());
    }

    #[test]
    fn neighbors_within_a_module() {
        let catalog = CourseCatalog::new();
        let (prev, next) = catalog.neighbors("lesson1-2");
        assert_eq!(prev.unwrap().id, "lesson1-1");
        assert_eq!(next.unwrap().id, "lesson1-3");
    }

    #[test]
    fn neighbors_cross_module_boundaries() {
        let catalog = CourseCatalog::new();

        let (_, next) = catalog.neighbors("lesson1-3");
        assert_eq!(next.unwrap().id, "lesson2-1");

        let (prev, _) = catalog.neighbors("lesson2-1");
        assert_eq!(prev.unwrap().id, "lesson1-3");
    }

    #[test]
    fn neighbors_at_course_edges() {
        let catalog = CourseCatalog::new();

        let (prev, next) = catalog.neighbors("lesson1-1");
        assert!(prev.is_none());
        assert_eq!(next.unwrap().id, "lesson1-2");

        let (prev, next) = catalog.neighbors("lesson4-2");
        assert_eq!(prev.unwrap().id, "lesson4-1");
        assert!(next.is_none());

        let (prev, next) = catalog.neighbors("nope");
        assert!(prev.is_none());
        assert!(next.is_none());
    }

    #[test]
    fn difficulty_filter_partitions_modules() {
        let catalog = CourseCatalog::new();

        let easy: Vec<&str> = catalog
            .filter_by_difficulty(PathFilter::Easy)
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(easy, vec!["module1"]);

        let medium: Vec<&str> = catalog
            .filter_by_difficulty(PathFilter::Medium)
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(medium, vec!["module2", "module4"]);

        let hard: Vec<&str> = catalog
            .filter_by_difficulty(PathFilter::Hard)
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(hard, vec!["module3"]);

        assert_eq!(catalog.filter_by_difficulty(PathFilter::All).len(), 4);
    }
}
