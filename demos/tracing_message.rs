//! Example: Print tracing messages emitted by store and validator
use serde_json::json;
use tasklist::tasks::{store::TaskStore, validator::TaskValidator};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let mut store = TaskStore::new();
    let task = store.create("groceries", "normal");
    store.update(task.id, "errands", "high");
    store.remove(task.id);

    // A rejected candidate logs the violated constraint at debug level
    let draft = json!({ "name": "x", "priority": "urgent" });
    let checked = TaskValidator::validate_task(&draft);
    println!("error: {:?}", checked.error);
}
