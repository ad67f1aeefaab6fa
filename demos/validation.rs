//! Example: Task candidate validation
use serde_json::json;
use tasklist::tasks::validator::TaskValidator;

fn main() {
    let drafts = [
        json!({ "name": "groceries", "priority": "normal" }),
        json!({ "name": "x", "priority": "normal" }), // Invalid: name too short
        json!({ "name": "groceries", "priority": "urgent" }), // Invalid: unknown priority
        json!({ "id": 1 }),                           // Invalid: id without name/priority
    ];

    for draft in &drafts {
        match TaskValidator::validate_task(draft).error {
            None => println!("valid:   {draft}"),
            Some(error) => println!("invalid: {draft} ({error})"),
        }
    }
}
