//! Repository: the contributor roster plus the project backlog.

use serde::{Deserialize, Serialize};

use super::{Contributor, Day, Project};

/// Contributors and outstanding projects at a point in the run.
///
/// The scheduler keeps two of these: an untouched snapshot of the parsed
/// input, used to rebuild assignments by name, and a live copy whose
/// contributor states and backlog change day by day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    /// Full roster, in input order.
    pub contributors: Vec<Contributor>,
    /// Outstanding projects, in input order.
    pub projects: Vec<Project>,
}

impl Repository {
    /// Creates a repository.
    pub fn new(contributors: Vec<Contributor>, projects: Vec<Project>) -> Self {
        Self {
            contributors,
            projects,
        }
    }

    /// Finds a contributor by name.
    pub fn contributor(&self, name: &str) -> Option<&Contributor> {
        self.contributors.iter().find(|c| c.name == name)
    }

    /// Finds a contributor by name, mutably.
    pub fn contributor_mut(&mut self, name: &str) -> Option<&mut Contributor> {
        self.contributors.iter_mut().find(|c| c.name == name)
    }

    /// Finds a project by name.
    pub fn project(&self, name: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.name == name)
    }

    /// Removes a project from the backlog, returning it if present.
    pub fn remove_project(&mut self, name: &str) -> Option<Project> {
        let index = self.projects.iter().position(|p| p.name == name)?;
        Some(self.projects.remove(index))
    }

    /// Releases every contributor whose project ends on or before `day`.
    ///
    /// Returns how many contributors were woken.
    pub fn wake_contributors(&mut self, day: Day) -> usize {
        self.contributors
            .iter_mut()
            .map(|c| c.wake(day))
            .filter(|&woken| woken)
            .count()
    }

    /// Whether the backlog is empty.
    pub fn is_backlog_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Repository {
        Repository::new(
            vec![
                Contributor::new("Anna").with_skill("C++", 2),
                Contributor::new("Bob").with_skill("HTML", 5),
            ],
            vec![
                Project::new("Logging", 5, 10.0, 5).with_requirement("C++", 3),
                Project::new("WebServer", 7, 10.0, 7).with_requirement("HTML", 3),
            ],
        )
    }

    #[test]
    fn test_lookup() {
        let repo = sample();
        assert_eq!(repo.contributor("Bob").map(|c| c.name.as_str()), Some("Bob"));
        assert!(repo.contributor("Zed").is_none());
        assert_eq!(repo.project("Logging").map(|p| p.duration), Some(5));
        assert!(repo.project("Missing").is_none());
    }

    #[test]
    fn test_remove_project() {
        let mut repo = sample();
        let removed = repo.remove_project("Logging").unwrap();
        assert_eq!(removed.name, "Logging");
        assert!(repo.project("Logging").is_none());
        assert!(repo.remove_project("Logging").is_none());
        assert_eq!(repo.projects.len(), 1);
    }

    #[test]
    fn test_wake_contributors() {
        let mut repo = sample();
        repo.contributor_mut("Anna").unwrap().assign_until(3);
        assert!(!repo.contributor("Anna").unwrap().is_available());

        assert_eq!(repo.wake_contributors(2), 0);
        assert_eq!(repo.wake_contributors(3), 1);
        assert!(repo.contributors.iter().all(|c| c.is_available()));
    }
}
