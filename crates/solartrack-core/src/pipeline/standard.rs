//! The fixed 25-step provisioning pipeline used by the operations team.

use super::{ConditionalRule, Pipeline, PipelineBuilder};
use crate::error::Result;

pub const SITE_ASSESSMENT: &str = "site_assessment";
pub const REGISTRATION_COMPLIANCE: &str = "registration_compliance";
pub const PAYMENT_PROCUREMENT: &str = "payment_procurement";
pub const INSTALLATION: &str = "installation";
pub const NET_METERING: &str = "net_metering";
pub const SUBSIDY_CLOSURE: &str = "subsidy_closure";

impl Pipeline {
    /// Builds the standard provisioning pipeline.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Configuration` only if the table below is
    /// edited into an inconsistent state.
    pub fn standard() -> Result<Pipeline> {
        use ConditionalRule::*;

        PipelineBuilder::new()
            .phase(SITE_ASSESSMENT, "Site Assessment")
            .phase(REGISTRATION_COMPLIANCE, "Registration & Compliance")
            .phase(PAYMENT_PROCUREMENT, "Payment & Procurement")
            .phase(INSTALLATION, "Installation")
            .phase(NET_METERING, "Net Metering & Commissioning")
            .phase(SUBSIDY_CLOSURE, "Subsidy & Closure")
            // Site Assessment
            .step("site_survey", "Site Survey", SITE_ASSESSMENT)
            .step("feasibility_check", "Feasibility Check", SITE_ASSESSMENT)
            .step("quotation_approval", "Quotation Approval", SITE_ASSESSMENT)
            // Registration & Compliance
            .step(
                "complete_registration",
                "Complete Registration",
                REGISTRATION_COMPLIANCE,
            )
            .conditional_step(
                "cot_request",
                "Change of Tenancy Request",
                REGISTRATION_COMPLIANCE,
                CotRequired,
            )
            .conditional_step(
                "name_correction_request",
                "Name Correction Request",
                REGISTRATION_COMPLIANCE,
                NameCorrectionRequired,
            )
            .conditional_step(
                "load_request",
                "Load Enhancement Request",
                REGISTRATION_COMPLIANCE,
                LoadEnhancementRequired,
            )
            .conditional_step(
                "finance_registration",
                "Finance Registration",
                REGISTRATION_COMPLIANCE,
                FinanceRequired,
            )
            .conditional_step(
                "submit_finance_to_bank",
                "Submit Finance to Bank",
                REGISTRATION_COMPLIANCE,
                FinanceRequired,
            )
            // Payment & Procurement
            .step(
                "collect_advance_payment",
                "Collect Advance Payment",
                PAYMENT_PROCUREMENT,
            )
            .step("material_procurement", "Material Procurement", PAYMENT_PROCUREMENT)
            .step("material_dispatch", "Material Dispatch", PAYMENT_PROCUREMENT)
            // Installation
            .step("structure_installation", "Structure Installation", INSTALLATION)
            .step("panel_installation", "Panel Installation", INSTALLATION)
            .step("inverter_installation", "Inverter Installation", INSTALLATION)
            .step("wiring_and_earthing", "Wiring & Earthing", INSTALLATION)
            .step("installation_inspection", "Installation Inspection", INSTALLATION)
            // Net Metering & Commissioning
            .step("net_meter_application", "Net Meter Application", NET_METERING)
            .step("meter_testing", "Meter Testing", NET_METERING)
            .step("net_meter_installation", "Net Meter Installation", NET_METERING)
            .step("commissioning_report", "Commissioning Report", NET_METERING)
            // Subsidy & Closure
            .step("subsidy_application", "Subsidy Application", SUBSIDY_CLOSURE)
            .step("subsidy_disbursement", "Subsidy Disbursement", SUBSIDY_CLOSURE)
            .conditional_step(
                "collect_remaining_amount",
                "Collect Remaining Amount",
                SUBSIDY_CLOSURE,
                SelfFunded,
            )
            .step("project_handover", "Project Handover", SUBSIDY_CLOSURE)
            .build()
    }
}
