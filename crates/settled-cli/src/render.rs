//! Text rendering of a residence report.

use settled_core::records::DATE_FORMAT;
use settled_core::{Presence, ResidenceReport};

/// Default preamble for the text report. Passed into [`render_report`]
/// rather than read from inside it, so callers can substitute their own.
pub const DISCLAIMER: &str = "Disclaimer: This tool provides an estimation based on the provided dates. Always consult with official sources or legal experts regarding immigration rules.";

/// Render the full check report: the disclaimer, one line per period, then
/// the verdict branch with its closing figures.
pub fn render_report(report: &ResidenceReport, disclaimer: &str) -> String {
    let mut out = String::new();
    out.push_str(disclaimer);
    out.push_str("\n\n");

    for period in &report.periods {
        let side = match period.presence {
            Presence::Inside => "inside",
            Presence::Outside => "outside",
        };
        out.push_str(&format!(
            "From {} to {}: {} days {} the UK.\n",
            period.from.format(DATE_FORMAT),
            period.to.format(DATE_FORMAT),
            period.days,
            side
        ));
    }

    out.push('\n');
    let application = report.earliest_application.format(DATE_FORMAT);
    if report.assessment.rule_maintained {
        out.push_str("You have maintained continuous residence.\n");
        // The budget line is omitted when no gap overlapped the window and
        // no figure was computed.
        if let Some(days) = report.assessment.days_remaining_in_window {
            out.push_str(&format!(
                "You can still be outside the UK for {} more days within the current 12-month period without breaking the continuous residence rule.\n",
                days
            ));
        }
        out.push_str(&format!(
            "You can apply for settled status on or after {}.\n",
            application
        ));
    } else {
        out.push_str("You have broken the continuous residence rule.\n");
        for brk in &report.assessment.breaks {
            out.push_str(&format!(
                "You were outside the UK for {} days, from {} to {}.\n",
                brk.days_outside,
                brk.left.format(DATE_FORMAT),
                brk.returned.format(DATE_FORMAT)
            ));
        }
        out.push_str(&format!(
            "However, you can apply for settled status on or after {} if you maintain continuous residence until then.\n",
            application
        ));
    }

    out
}
