//! Terminal renderer: aligned columns with the sort column highlighted.

use colored::Colorize;

use crate::models::{SortKey, UserTable};
use crate::output::TableRenderer;

/// Terminal output renderer with colored, aligned columns.
pub struct TerminalRenderer;

impl TableRenderer for TerminalRenderer {
    fn render(&self, table: &UserTable) -> String {
        let mut widths = SortKey::ALL.map(|key| key.label().len());
        for user in &table.users {
            widths[0] = widths[0].max(user.id.to_string().len());
            widths[1] = widths[1].max(user.name.chars().count());
            widths[2] = widths[2].max(user.email.chars().count());
        }

        let mut output = String::new();

        // Pad before styling so ANSI codes don't skew the alignment.
        let header: Vec<String> = SortKey::ALL
            .iter()
            .zip(widths)
            .map(|(&key, width)| {
                let cell = format!("{:<width$}", key.label());
                if key == table.sort_order {
                    format!("{}", cell.cyan().bold().underline())
                } else {
                    format!("{}", cell.bold())
                }
            })
            .collect();
        output.push_str(&format!(" {}\n", header.join("  ").trim_end()));

        for user in &table.users {
            let line = format!(
                "{:>w0$}  {:<w1$}  {}",
                user.id,
                user.name,
                user.email,
                w0 = widths[0],
                w1 = widths[1],
            );
            output.push_str(&format!(" {line}\n"));
        }

        output.push_str(&format!("{}\n", "───────────────────────────────────".dimmed()));
        let noun = if table.len() == 1 { "user" } else { "users" };
        output.push_str(&format!(
            " {} {noun}, sorted by {}\n",
            table.len().to_string().bold(),
            table.sort_order.as_str().cyan(),
        ));

        output
    }
}
