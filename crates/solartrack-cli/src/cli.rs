//! Command handlers.
//!
//! Each handler loads the requested document, evaluates the engine and hands
//! the resulting markdown to the [`TerminalRenderer`].

use std::fmt::Write as _;

use anyhow::{Context, Result};
use log::info;
use solartrack_core::{
    display::LocalDateTime, CollapseState, CustomerDocument, CustomerSummaries, CustomerSummary,
    Pipeline, ProgressEngine, ProgressView, StepFilter,
};

use crate::{
    args::{ShowArgs, StatusArgs, SummaryArgs},
    input::{load_customers, select},
    renderer::TerminalRenderer,
};

pub struct Cli {
    pipeline: Pipeline,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(pipeline: Pipeline, renderer: TerminalRenderer) -> Self {
        Self { pipeline, renderer }
    }

    pub fn show(&self, args: ShowArgs) -> Result<()> {
        let customers = load_customers(&args.file)?;
        let selected = select(&customers, args.customer.as_deref())?;
        let engine = ProgressEngine::new(&self.pipeline);
        let filter = StepFilter::from(args.filter);

        info!("Showing {} customers with filter '{filter}'", selected.len());

        let mut output = String::new();
        for (position, customer) in selected.into_iter().enumerate() {
            let snapshot = engine.snapshot(customer);
            let collapse = if args.expand_all {
                CollapseState::default()
            } else {
                CollapseState::initial(&snapshot)
            };

            if position > 0 {
                output.push('\n');
            }
            write!(
                output,
                "{}",
                ProgressView::new(&snapshot, &collapse).with_filter(filter)
            )?;
        }

        self.renderer.render(&output)
    }

    pub fn status(&self, args: StatusArgs) -> Result<()> {
        let customers = load_customers(&args.file)?;
        let selected = select(&customers, args.customer.as_deref())?;
        let engine = ProgressEngine::new(&self.pipeline);
        let step = self.pipeline.step(&args.step)?;

        let mut output = format!("# {}\n\n", step.label);
        for customer in selected {
            let snapshot = engine.snapshot(customer);
            let status = snapshot.status(&step.key)?;
            write!(output, "- **{}**: {}", customer.name, status.with_icon())?;

            if let Some(task) = snapshot.task(&step.key)? {
                if let Some(name) = &task.assigned_to_name {
                    write!(output, " (assigned to {name})")?;
                }
                if let Some(created_at) = &task.created_at {
                    write!(output, " _created {}_", LocalDateTime(created_at))?;
                }
            }
            output.push('\n');
        }

        self.renderer.render(&output)
    }

    pub fn summary(&self, args: SummaryArgs) -> Result<()> {
        let customers = load_customers(&args.file)?;
        let engine = ProgressEngine::new(&self.pipeline);

        let summaries: Vec<CustomerSummary> = customers
            .iter()
            .map(|customer| CustomerSummary::from(&engine.snapshot(customer)))
            .collect();

        self.renderer
            .render(&CustomerSummaries(summaries).to_string())
    }

    pub fn pipeline(&self) -> Result<()> {
        self.renderer.render(&self.pipeline.to_string())
    }

    pub fn schema(&self) -> Result<()> {
        let schema = schemars::schema_for!(CustomerDocument);
        let json = serde_json::to_string_pretty(&schema).context("Failed to serialize schema")?;
        println!("{json}");
        Ok(())
    }
}
