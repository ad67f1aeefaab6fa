mod store;
mod task;
