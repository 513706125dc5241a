use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::aggregate;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::header;
use crate::utils::date::parse_date;
use crate::utils::formatting::hours_cell;
use chrono::Utc;

use super::{open_store, user_id};

pub fn handle(cli: &Cli, cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary {
        from,
        to,
        breakdown,
    } = cmd
    {
        let range = match (from, to) {
            (Some(f), Some(t)) => {
                let f = parse_date(f).ok_or_else(|| AppError::InvalidDate(f.clone()))?;
                let t = parse_date(t).ok_or_else(|| AppError::InvalidDate(t.clone()))?;
                Some((f, t))
            }
            (None, None) => None,
            _ => {
                return Err(AppError::Validation(
                    "--from and --to must be given together".to_string(),
                ))
            }
        };

        let store = open_store(cli, cfg)?;
        let user = user_id(cli, cfg);
        let summary = aggregate::summarize_range(store.list(), &user, Utc::now(), range);

        header("Summary");
        println!("Sessions:   {}", summary.total_sessions);
        println!("Today:      {} h", hours_cell(summary.today));
        println!("This week:  {} h", hours_cell(summary.week));
        println!("This month: {} h", hours_cell(summary.month));
        println!("Total:      {} h", hours_cell(summary.total_hours));
        println!(
            "Average:    {} h/session",
            hours_cell(summary.average_session_length)
        );

        if *breakdown {
            header("Daily");
            for (day, hours) in &summary.daily_breakdown {
                println!("{day}  {}", hours_cell(*hours));
            }
            header("Weekly (week of)");
            for (week, hours) in &summary.weekly_breakdown {
                println!("{week}  {}", hours_cell(*hours));
            }
            header("Monthly");
            for (month, hours) in &summary.monthly_breakdown {
                println!("{month}  {}", hours_cell(*hours));
            }
        }
    }
    Ok(())
}
