use super::{derive_status, ProgressEngine};
use crate::{
    error::ProgressError,
    models::{Customer, EffectiveStatus, Task, TaskStatus},
    pipeline::{standard::*, ConditionalRule, Pipeline, PipelineBuilder},
};

const REGISTRATION_STEPS: [&str; 6] = [
    "complete_registration",
    "cot_request",
    "name_correction_request",
    "load_request",
    "finance_registration",
    "submit_finance_to_bank",
];

fn cash_customer() -> Customer {
    Customer {
        payment_mode: Some("Cash".to_string()),
        special_finance_required: Some("No".to_string()),
        cot_required: Some("Not Required".to_string()),
        name_correction_required: Some("Not Required".to_string()),
        load_enhancement_required: Some("Not Required".to_string()),
        ..Customer::new("Cash Customer")
    }
}

fn finance_customer() -> Customer {
    Customer {
        payment_mode: Some("Finance".to_string()),
        ..cash_customer()
    }
}

fn with_tasks(mut customer: Customer, tasks: &[(&str, TaskStatus)]) -> Customer {
    customer.tasks = tasks
        .iter()
        .map(|(work_type, status)| Task::new(*work_type, *status))
        .collect();
    customer
}

#[test]
fn test_finance_customer_requires_finance_registration() {
    let pipeline = Pipeline::standard().unwrap();
    let engine = ProgressEngine::new(&pipeline);
    let customer = finance_customer();

    assert_eq!(
        engine
            .effective_status(&customer, "finance_registration")
            .unwrap(),
        EffectiveStatus::NotStarted
    );
    assert_eq!(
        engine
            .effective_status(&customer, "collect_remaining_amount")
            .unwrap(),
        EffectiveStatus::NotApplicable
    );
}

#[test]
fn test_cash_customer_skips_finance_steps() {
    let pipeline = Pipeline::standard().unwrap();
    let engine = ProgressEngine::new(&pipeline);
    let customer = cash_customer();

    assert_eq!(
        engine
            .effective_status(&customer, "finance_registration")
            .unwrap(),
        EffectiveStatus::NotApplicable
    );
    assert_eq!(
        engine
            .effective_status(&customer, "submit_finance_to_bank")
            .unwrap(),
        EffectiveStatus::NotApplicable
    );
    assert_eq!(
        engine
            .effective_status(&customer, "collect_remaining_amount")
            .unwrap(),
        EffectiveStatus::NotStarted
    );
}

#[test]
fn test_special_finance_overrides_cash_payment() {
    let pipeline = Pipeline::standard().unwrap();
    let engine = ProgressEngine::new(&pipeline);
    let customer = Customer {
        special_finance_required: Some("Yes".to_string()),
        ..cash_customer()
    };

    assert_eq!(
        engine
            .effective_status(&customer, "finance_registration")
            .unwrap(),
        EffectiveStatus::NotStarted
    );
    assert_eq!(
        engine
            .effective_status(&customer, "collect_remaining_amount")
            .unwrap(),
        EffectiveStatus::NotApplicable
    );
}

#[test]
fn test_task_status_overrides_rule() {
    let pipeline = Pipeline::standard().unwrap();
    let engine = ProgressEngine::new(&pipeline);

    let required = Customer {
        cot_required: Some("Required".to_string()),
        ..with_tasks(cash_customer(), &[("cot_request", TaskStatus::Completed)])
    };
    assert_eq!(
        engine.effective_status(&required, "cot_request").unwrap(),
        EffectiveStatus::Completed
    );

    // Eligibility changed after the task was created
    let not_required = with_tasks(
        cash_customer(),
        &[
            ("cot_request", TaskStatus::Pending),
            ("finance_registration", TaskStatus::InProgress),
        ],
    );
    assert_eq!(
        engine
            .effective_status(&not_required, "cot_request")
            .unwrap(),
        EffectiveStatus::Pending
    );
    assert_eq!(
        engine
            .effective_status(&not_required, "finance_registration")
            .unwrap(),
        EffectiveStatus::InProgress
    );
}

#[test]
fn test_task_existence_never_yields_not_applicable() {
    let pipeline = Pipeline::standard().unwrap();
    let engine = ProgressEngine::new(&pipeline);

    for step in pipeline.steps() {
        for status in [
            TaskStatus::Pending,
            TaskStatus::InProgress,
            TaskStatus::Completed,
        ] {
            let customer = with_tasks(Customer::new("Anyone"), &[(step.key.as_str(), status)]);
            let effective = engine.effective_status(&customer, &step.key).unwrap();
            assert_eq!(effective, EffectiveStatus::from(status), "{}", step.key);
        }
    }
}

#[test]
fn test_unknown_step_is_signalled() {
    let pipeline = Pipeline::standard().unwrap();
    let engine = ProgressEngine::new(&pipeline);
    let customer = with_tasks(cash_customer(), &[("paint_roof", TaskStatus::Completed)]);

    let err = engine.effective_status(&customer, "paint_roof").unwrap_err();
    assert!(matches!(err, ProgressError::UnknownStep { ref key } if key == "paint_roof"));

    let snapshot = engine.snapshot(&customer);
    assert!(matches!(
        snapshot.status("paint_roof"),
        Err(ProgressError::UnknownStep { .. })
    ));
    assert!(matches!(
        snapshot.task("paint_roof"),
        Err(ProgressError::UnknownStep { .. })
    ));
}

#[test]
fn test_tasks_outside_pipeline_are_not_counted() {
    let pipeline = Pipeline::standard().unwrap();
    let engine = ProgressEngine::new(&pipeline);

    let plain = cash_customer();
    let noisy = with_tasks(cash_customer(), &[("paint_roof", TaskStatus::Completed)]);
    assert_eq!(engine.overall_progress(&plain), 0);
    assert_eq!(engine.overall_progress(&noisy), 0);
}

#[test]
fn test_overall_progress_excludes_not_applicable() {
    let pipeline = Pipeline::standard().unwrap();
    let engine = ProgressEngine::new(&pipeline);

    // Cash customer, no optional requirements: 25 - 5 conditional = 20
    // applicable steps (collect_remaining_amount applies).
    let customer = with_tasks(
        cash_customer(),
        &[
            ("site_survey", TaskStatus::Completed),
            ("feasibility_check", TaskStatus::Completed),
            ("quotation_approval", TaskStatus::Completed),
            ("complete_registration", TaskStatus::Completed),
            ("collect_advance_payment", TaskStatus::Completed),
            ("material_procurement", TaskStatus::InProgress),
        ],
    );
    let snapshot = engine.snapshot(&customer);

    let applicable = snapshot.steps().filter(|v| v.status.is_applicable()).count();
    assert_eq!(applicable, 20);
    // 5 / 20
    assert_eq!(snapshot.overall_progress(), 25);
    assert_eq!(engine.overall_progress(&customer), 25);
}

#[test]
fn test_overall_progress_is_100_only_when_everything_applicable_is_done() {
    let pipeline = Pipeline::standard().unwrap();
    let engine = ProgressEngine::new(&pipeline);
    let customer = cash_customer();

    let applicable: Vec<String> = engine
        .snapshot(&customer)
        .steps()
        .filter(|v| v.status.is_applicable())
        .map(|v| v.step.key.clone())
        .collect();

    let mut done = customer.clone();
    done.tasks = applicable
        .iter()
        .map(|key| Task::new(key.as_str(), TaskStatus::Completed))
        .collect();
    assert_eq!(engine.overall_progress(&done), 100);

    let mut almost = done.clone();
    almost.tasks[0].status = TaskStatus::InProgress;
    let progress = engine.overall_progress(&almost);
    assert!(progress < 100, "{progress}");
    assert_eq!(progress, 95);
}

#[test]
fn test_overall_progress_zero_when_nothing_applicable() {
    let pipeline = PipelineBuilder::new()
        .phase("optional", "Optional")
        .conditional_step("cot_request", "COT", "optional", ConditionalRule::CotRequired)
        .conditional_step("load_request", "Load", "optional", ConditionalRule::LoadEnhancementRequired)
        .build()
        .unwrap();
    let engine = ProgressEngine::new(&pipeline);
    let customer = cash_customer();

    assert_eq!(engine.overall_progress(&customer), 0);

    let progress = engine.phase_progress(&customer, "optional").unwrap();
    assert_eq!(progress.applicable_count, 0);
    assert_eq!(progress.completed_count, 0);
    assert!(!progress.all_done);
    assert_eq!(progress.percent, 0);
    assert!(engine.initial_collapse_set(&customer).is_empty());
}

#[test]
fn test_registration_phase_end_to_end() {
    let pipeline = Pipeline::standard().unwrap();
    let engine = ProgressEngine::new(&pipeline);
    let customer = with_tasks(
        cash_customer(),
        &[("complete_registration", TaskStatus::Completed)],
    );

    let phase = pipeline.phase(REGISTRATION_COMPLIANCE).unwrap();
    assert_eq!(phase.step_keys, REGISTRATION_STEPS);

    let progress = engine
        .phase_progress(&customer, REGISTRATION_COMPLIANCE)
        .unwrap();
    assert_eq!(progress.applicable_count, 1);
    assert_eq!(progress.completed_count, 1);
    assert!(progress.all_done);
    assert!(!progress.has_in_progress);
    assert_eq!(progress.percent, 100);

    let collapsed = engine.initial_collapse_set(&customer);
    assert!(collapsed.contains(REGISTRATION_COMPLIANCE));
    assert_eq!(collapsed.len(), 1);
}

#[test]
fn test_phase_progress_flags_in_progress() {
    let pipeline = Pipeline::standard().unwrap();
    let engine = ProgressEngine::new(&pipeline);
    let customer = with_tasks(
        cash_customer(),
        &[
            ("structure_installation", TaskStatus::Completed),
            ("panel_installation", TaskStatus::InProgress),
        ],
    );

    let progress = engine.phase_progress(&customer, INSTALLATION).unwrap();
    assert_eq!(progress.completed_count, 1);
    assert_eq!(progress.applicable_count, 5);
    assert!(progress.has_in_progress);
    assert!(!progress.all_done);
    assert_eq!(progress.percent, 20);

    let survey = engine.phase_progress(&customer, SITE_ASSESSMENT).unwrap();
    assert!(!survey.has_in_progress);
}

#[test]
fn test_unknown_phase_is_signalled() {
    let pipeline = Pipeline::standard().unwrap();
    let engine = ProgressEngine::new(&pipeline);

    let err = engine
        .phase_progress(&cash_customer(), "marketing")
        .unwrap_err();
    assert!(matches!(err, ProgressError::UnknownPhase { ref id } if id == "marketing"));
}

#[test]
fn test_queries_are_idempotent() {
    let pipeline = Pipeline::standard().unwrap();
    let engine = ProgressEngine::new(&pipeline);
    let customer = with_tasks(
        finance_customer(),
        &[
            ("site_survey", TaskStatus::Completed),
            ("finance_registration", TaskStatus::InProgress),
        ],
    );

    for phase in pipeline.phases() {
        assert_eq!(
            engine.phase_progress(&customer, &phase.id).unwrap(),
            engine.phase_progress(&customer, &phase.id).unwrap()
        );
    }
    for step in pipeline.steps() {
        assert_eq!(
            engine.effective_status(&customer, &step.key).unwrap(),
            engine.effective_status(&customer, &step.key).unwrap()
        );
    }
    assert_eq!(
        engine.overall_progress(&customer),
        engine.overall_progress(&customer)
    );
    assert_eq!(
        engine.initial_collapse_set(&customer),
        engine.initial_collapse_set(&customer)
    );
}

#[test]
fn test_reevaluation_reflects_changed_tasks() {
    let pipeline = Pipeline::standard().unwrap();
    let engine = ProgressEngine::new(&pipeline);
    let mut customer = cash_customer();

    assert!(engine.initial_collapse_set(&customer).is_empty());

    customer.tasks.push(Task::new("complete_registration", TaskStatus::Completed));
    assert!(engine
        .initial_collapse_set(&customer)
        .contains(REGISTRATION_COMPLIANCE));

    customer.tasks.push(Task::new("load_request", TaskStatus::Pending));
    assert!(!engine
        .initial_collapse_set(&customer)
        .contains(REGISTRATION_COMPLIANCE));
}

#[test]
fn test_snapshot_matches_single_step_queries() {
    let pipeline = Pipeline::standard().unwrap();
    let engine = ProgressEngine::new(&pipeline);
    let customer = with_tasks(
        finance_customer(),
        &[
            ("site_survey", TaskStatus::Completed),
            ("submit_finance_to_bank", TaskStatus::Pending),
        ],
    );
    let snapshot = engine.snapshot(&customer);

    let keys: Vec<&str> = snapshot.steps().map(|v| v.step.key.as_str()).collect();
    let canonical: Vec<&str> = pipeline.steps().iter().map(|s| s.key.as_str()).collect();
    assert_eq!(keys, canonical);

    for view in snapshot.steps() {
        assert_eq!(
            view.status,
            engine.effective_status(&customer, &view.step.key).unwrap()
        );
        assert_eq!(view.task.is_some(), snapshot.task(&view.step.key).unwrap().is_some());
    }

    let phase = pipeline.phase(REGISTRATION_COMPLIANCE).unwrap();
    let statuses: Vec<EffectiveStatus> = snapshot.phase_steps(phase).map(|v| v.status).collect();
    assert_eq!(
        statuses,
        vec![
            EffectiveStatus::NotStarted,
            EffectiveStatus::NotApplicable,
            EffectiveStatus::NotApplicable,
            EffectiveStatus::NotApplicable,
            EffectiveStatus::NotStarted,
            EffectiveStatus::Pending,
        ]
    );
    assert_eq!(snapshot.phases_progress().len(), 6);
}

#[test]
fn test_derive_status_table() {
    let pipeline = Pipeline::standard().unwrap();
    let cot = pipeline.step("cot_request").unwrap();
    let survey = pipeline.step("site_survey").unwrap();
    let customer = cash_customer();
    let task = Task::new("cot_request", TaskStatus::InProgress);

    assert_eq!(
        derive_status(survey, None, &customer),
        EffectiveStatus::NotStarted
    );
    assert_eq!(
        derive_status(cot, None, &customer),
        EffectiveStatus::NotApplicable
    );
    assert_eq!(
        derive_status(cot, Some(&task), &customer),
        EffectiveStatus::InProgress
    );
}
