// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

//! Actions, jobs and the job registry

use crate::worker_pool::WorkerId;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Unit of work pulled from the shared queue.
///
/// The name selects the job in the [JobRegistry], the data is handed to that job unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action<D> {
    pub name: String,
    pub data: D,
}

impl<D> Action<D> {
    /// Create a new action
    pub fn new(name: impl Into<String>, data: D) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

/// Job function, called with the id of the executing worker and the action's data
pub type JobFunc<D> = Arc<dyn Fn(WorkerId, D) + Send + Sync>;

/// Mapping from action names to job functions.
///
/// The registry is filled before the pool is built. The pool takes ownership and shares it
/// read-only between all workers.
pub struct JobRegistry<D> {
    jobs: HashMap<String, JobFunc<D>>,
}

impl<D> JobRegistry<D> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            jobs: HashMap::new(),
        }
    }

    /// Register a job under the given action name
    pub fn register<F>(&mut self, name: impl Into<String>, job: F) -> &mut Self
    where
        F: Fn(WorkerId, D) + Send + Sync + 'static,
    {
        self.insert(name.into(), Arc::new(job))
    }

    /// Register an already shared job function under the given action name
    pub fn insert(&mut self, name: String, job: JobFunc<D>) -> &mut Self {
        // make sure, there is no job with the same name
        assert!(
            !self.jobs.contains_key(&name),
            "Job {name:?} already exists in the registry"
        );
        self.jobs.insert(name, job);
        self
    }

    /// Look up the job registered for an action name
    pub fn get(&self, name: &str) -> Option<&JobFunc<D>> {
        self.jobs.get(name)
    }

    /// Check if a job is registered for the given action name
    pub fn contains(&self, name: &str) -> bool {
        self.jobs.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Iterate over all registered action names
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.jobs.keys().map(String::as_str)
    }
}

impl<D> Default for JobRegistry<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> Clone for JobRegistry<D> {
    fn clone(&self) -> Self {
        Self {
            jobs: self.jobs.clone(),
        }
    }
}

impl<D> FromIterator<(String, JobFunc<D>)> for JobRegistry<D> {
    fn from_iter<I: IntoIterator<Item = (String, JobFunc<D>)>>(iter: I) -> Self {
        let mut registry = Self::new();
        for (name, job) in iter {
            registry.insert(name, job);
        }
        registry
    }
}

impl<D> fmt::Debug for JobRegistry<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("JobRegistry").field("jobs", &names).finish()
    }
}

#[cfg(test)]
mod test {
    use super::{Action, JobFunc, JobRegistry};
    use crate::worker_pool::WorkerId;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn register_and_call() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut jobs = JobRegistry::new();
        {
            let calls = calls.clone();
            jobs.register("add", move |_, n: usize| {
                calls.fetch_add(n, Ordering::SeqCst);
            });
        }

        assert!(jobs.contains("add"));
        assert!(!jobs.contains("sub"));
        assert_eq!(jobs.len(), 1);

        let job = jobs.get("add").expect("job registered");
        job(WorkerId::from(1), 3);
        job(WorkerId::from(2), 4);
        assert_eq!(calls.load(Ordering::SeqCst), 7);
        assert!(jobs.get("sub").is_none());
    }

    #[test]
    #[should_panic(expected = "already exists")]
    fn duplicate_name() {
        let mut jobs = JobRegistry::<()>::new();
        jobs.register("dumb", |_, _| {});
        jobs.register("dumb", |_, _| {});
    }

    #[test]
    fn from_iter_and_debug() {
        let noop: JobFunc<()> = Arc::new(|_: WorkerId, _: ()| {});
        let jobs: JobRegistry<()> = [("b".to_string(), noop.clone()), ("a".to_string(), noop)]
            .into_iter()
            .collect();

        assert_eq!(jobs.len(), 2);
        assert_eq!(format!("{jobs:?}"), r#"JobRegistry { jobs: ["a", "b"] }"#);
        assert!(JobRegistry::<()>::default().is_empty());
    }

    #[test]
    fn action_new() {
        let action = Action::new("dumb", 0u8);
        assert_eq!(action.name, "dumb");
        assert_eq!(action.data, 0);
    }
}
