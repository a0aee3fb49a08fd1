//! Month navigation commands

use clap::Subcommand;

use super::{handle_overview_command, parse_month_arg, Session};
use crate::error::BudgetsResult;
use crate::services::MonthNavigation;

/// Month subcommands
#[derive(Subcommand)]
pub enum MonthCommands {
    /// Show the overview of a month
    Show {
        /// Month (YYYY-MM, defaults to the current month)
        month: Option<String>,
    },
    /// Show the month before the given one
    Prev {
        /// Month to step back from (YYYY-MM, defaults to the current month)
        month: Option<String>,
    },
    /// Show the month after the given one
    Next {
        /// Month to step forward from (YYYY-MM, defaults to the current month)
        month: Option<String>,
    },
}

/// Handle a month command
pub fn handle_month_command(session: &mut Session, cmd: MonthCommands) -> BudgetsResult<()> {
    let month = match cmd {
        MonthCommands::Show { month } => {
            let month = parse_month_arg(month.as_deref())?;
            MonthNavigation::new(&mut session.storage).change_month_in_view(month)?
        }
        MonthCommands::Prev { month } => {
            let month = parse_month_arg(month.as_deref())?;
            let mut nav = MonthNavigation::new(&mut session.storage);
            nav.change_month_in_view(month)?;
            nav.go_back()?
        }
        MonthCommands::Next { month } => {
            let month = parse_month_arg(month.as_deref())?;
            let mut nav = MonthNavigation::new(&mut session.storage);
            nav.change_month_in_view(month)?;
            nav.go_forward()?
        }
    };

    handle_overview_command(session, Some(&month.to_string()))
}
