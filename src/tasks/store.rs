use crate::tasks::task::Task;

/// In-memory task collection with monotonically increasing ids.
///
/// The store owns an ordered list of [`Task`] records and a private id
/// counter. Ids strictly increase over the lifetime of the store and are
/// never reused, even after the corresponding task is deleted. Each
/// `TaskStore::new()` call produces an independent empty store, so tests
/// and callers can hold as many stores as they need.
///
/// The store performs no validation; see
/// [`TaskValidator`](crate::tasks::validator::TaskValidator) for the
/// caller-invoked checks. Lookup misses are `None`, never errors.
///
/// # Examples
///
/// ```rust
/// use tasklist::tasks::store::TaskStore;
///
/// let mut store = TaskStore::new();
/// let task = store.create("backup", "low");
/// assert_eq!(task.id, 1);
///
/// store.update(task.id, "backup", "high");
/// let removed = store.remove(task.id);
/// assert_eq!(removed.map(|t| t.priority), Some("high".to_string()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    counter: u64,
}

impl TaskStore {
    /// Creates an empty store. The first issued id is 1.
    pub fn new() -> Self {
        TaskStore {
            tasks: Vec::new(),
            counter: 0,
        }
    }

    /// All tasks in insertion order.
    ///
    /// The returned slice borrows the live collection; it cannot be
    /// mutated, so store invariants hold regardless of what callers do
    /// with it.
    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks currently held.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the task with the given id, or `None` if there is none.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tasklist::tasks::store::TaskStore;
    ///
    /// let mut store = TaskStore::new();
    /// let task = store.create("backup", "low");
    /// assert_eq!(store.get(task.id), Some(&task));
    /// assert_eq!(store.get(999), None);
    /// ```
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Returns the position of the task with the given id, or `None` if
    /// there is none.
    ///
    /// `index_of` and [`get`](Self::get) always agree: when `index_of`
    /// returns `Some(i)`, `all()[i]` is the task `get` returns.
    pub fn index_of(&self, id: u64) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    /// Creates a task with the next id, appends it, and returns a copy.
    ///
    /// Always succeeds. No validation happens here; run the candidate
    /// through [`TaskValidator`](crate::tasks::validator::TaskValidator)
    /// first if the name/priority constraints matter to you.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn create(&mut self, name: impl Into<String>, priority: impl Into<String>) -> Task {
        self.counter += 1;
        let task = Task::new(self.counter, name, priority);
        #[cfg(feature = "tracing")]
        tracing::debug!(id = task.id, "task created");
        self.tasks.push(task.clone());
        task
    }

    /// Updates the name and priority of the task with the given id in
    /// place and returns a copy of the updated task.
    ///
    /// Returns `None` without side effects when the id is absent. The id
    /// itself never changes.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(id = id)))]
    pub fn update(
        &mut self,
        id: u64,
        name: impl Into<String>,
        priority: impl Into<String>,
    ) -> Option<Task> {
        let task = self.tasks.iter_mut().find(|task| task.id == id)?;
        task.name = name.into();
        task.priority = priority.into();
        #[cfg(feature = "tracing")]
        tracing::debug!(id, "task updated");
        Some(task.clone())
    }

    /// Removes the task with the given id and returns it, shifting later
    /// entries up. Returns `None` when the id is absent. The removed id is
    /// never issued again.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn remove(&mut self, id: u64) -> Option<Task> {
        let index = self.index_of(id)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(id, index, "task removed");
        Some(self.tasks.remove(index))
    }
}
