//! Output formatting utilities

use crate::application::StatsReport;

/// Format a stats report for display
pub fn format_stats_report(report: &StatsReport) -> String {
    match report {
        StatsReport::Buckets { title, rows } => {
            if rows.is_empty() {
                return format!("{}\n\nNo completed tasks found", title);
            }

            let mut output = format!("{}\n\n", title);
            for (bucket, count) in rows {
                output.push_str(&format!("{}  {}\n", bucket, count));
            }
            output
        }
        StatsReport::Note { title, counts } => {
            format!(
                "{}\n\ndone         {}\nopen         {}\nin progress  {}\ntotal        {}\n",
                title,
                counts.done,
                counts.open,
                counts.in_progress,
                counts.total()
            )
        }
    }
}
