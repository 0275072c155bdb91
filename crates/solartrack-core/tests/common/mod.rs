use solartrack_core::{Customer, Task, TaskStatus};

/// Customer with every optional requirement declined and a cash payment.
pub fn cash_customer(name: &str) -> Customer {
    Customer {
        payment_mode: Some("Cash".to_string()),
        special_finance_required: Some("No".to_string()),
        cot_required: Some("Not Required".to_string()),
        name_correction_required: Some("Not Required".to_string()),
        load_enhancement_required: Some("Not Required".to_string()),
        ..Customer::new(name)
    }
}

/// Adds one task per `(work_type, status)` pair.
pub fn with_tasks(mut customer: Customer, tasks: &[(&str, TaskStatus)]) -> Customer {
    customer
        .tasks
        .extend(tasks.iter().map(|(work_type, status)| Task::new(*work_type, *status)));
    customer
}
