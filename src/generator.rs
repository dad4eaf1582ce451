//! Seeded random instance generator.
//!
//! Produces repositories shaped like real inputs (a shared skill
//! vocabulary, a few skills per contributor, a few roles per project) for
//! stress runs and property tests. The same seed always yields the same
//! repository.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::models::{Contributor, Project, Repository};

/// Builder for random staffing instances.
///
/// # Example
/// ```
/// use u_staffing::generator::InstanceGenerator;
///
/// let repo = InstanceGenerator::new(7).with_contributors(5).with_projects(8).generate();
/// assert_eq!(repo.contributors.len(), 5);
/// assert_eq!(repo.projects.len(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct InstanceGenerator {
    seed: u64,
    contributors: usize,
    projects: usize,
    skills: usize,
    max_skills_per_contributor: usize,
    max_roles_per_project: usize,
    max_level: u32,
    max_duration: u32,
    max_score: u32,
    max_best_before: u32,
}

impl InstanceGenerator {
    /// Creates a generator with small defaults.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            contributors: 6,
            projects: 10,
            skills: 4,
            max_skills_per_contributor: 3,
            max_roles_per_project: 3,
            max_level: 5,
            max_duration: 6,
            max_score: 50,
            max_best_before: 30,
        }
    }

    /// Sets the roster size.
    pub fn with_contributors(mut self, count: usize) -> Self {
        self.contributors = count;
        self
    }

    /// Sets the backlog size.
    pub fn with_projects(mut self, count: usize) -> Self {
        self.projects = count;
        self
    }

    /// Sets the size of the skill vocabulary (at least 1).
    pub fn with_skills(mut self, count: usize) -> Self {
        self.skills = count.max(1);
        self
    }

    /// Sets the maximum roles per project (at least 1).
    pub fn with_max_roles(mut self, count: usize) -> Self {
        self.max_roles_per_project = count.max(1);
        self
    }

    /// Sets the maximum project duration in days (at least 1).
    pub fn with_max_duration(mut self, days: u32) -> Self {
        self.max_duration = days.max(1);
        self
    }

    /// Generates a repository that passes validation.
    ///
    /// Requirement skills within one project are distinct.
    pub fn generate(&self) -> Repository {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let vocabulary: Vec<String> = (0..self.skills).map(|i| format!("S{i}")).collect();

        let mut contributors = Vec::with_capacity(self.contributors);
        for i in 0..self.contributors {
            let count = rng.random_range(1..=self.max_skills_per_contributor.clamp(1, self.skills));
            let skills: Vec<&String> = vocabulary.choose_multiple(&mut rng, count).collect();
            let mut contributor = Contributor::new(format!("C{i}"));
            for skill in skills {
                let level = rng.random_range(0..=self.max_level);
                contributor = contributor.with_skill(skill.as_str(), level);
            }
            contributors.push(contributor);
        }

        let mut projects = Vec::with_capacity(self.projects);
        for i in 0..self.projects {
            let duration = rng.random_range(1..=self.max_duration);
            let score = f64::from(rng.random_range(1..=self.max_score));
            let best_before = rng.random_range(0..=self.max_best_before);
            let roles = rng.random_range(1..=self.max_roles_per_project.min(self.skills));
            let skills: Vec<&String> = vocabulary.choose_multiple(&mut rng, roles).collect();
            let mut project = Project::new(format!("P{i}"), duration, score, best_before);
            for skill in skills {
                let level = rng.random_range(1..=self.max_level);
                project = project.with_requirement(skill.as_str(), level);
            }
            projects.push(project);
        }

        Repository::new(contributors, projects)
    }
}
