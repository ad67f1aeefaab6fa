//! Basic example: Create, update, and delete tasks in a store
use tasklist::tasks::store::TaskStore;

fn main() {
    let mut store = TaskStore::new();

    let groceries = store.create("groceries", "normal");
    let backup = store.create("backup", "low");
    println!("Created: {:?}", groceries);
    println!("Created: {:?}", backup);

    store.update(backup.id, "backup", "high");
    match store.get(backup.id) {
        Some(task) => println!("After update: {:?}", task),
        None => println!("Task {} not found", backup.id),
    }

    store.remove(groceries.id);
    println!("Remaining tasks: {:?}", store.all());
}
