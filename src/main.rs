use std::io::Write as _;

use chrono::NaiveDate;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use hrms_lite::api::ApiClient;
use hrms_lite::app::{App, Page};
use hrms_lite::config::Config;
use hrms_lite::models::AttendanceStatus;
use hrms_lite::state::Notice;
use hrms_lite::ui;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    info!("record service at {}", config.base_url);

    let mut app = App::new(ApiClient::new(config.base_url));
    app.goto(Page::Dashboard).await;
    print!("{}", ui::render_app(&app));
    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt()?;
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        match input {
            "quit" | "exit" => break,
            "help" => print_help(),
            "" => {}
            _ => {
                if let Some(notice) = dispatch(&mut app, input).await {
                    print!("{}", ui::render_notice(&notice));
                }
                print!("{}", ui::render_app(&app));
            }
        }
        prompt()?;
    }

    Ok(())
}

async fn dispatch(app: &mut App, input: &str) -> Option<Notice> {
    if let Some(page) = Page::parse(input) {
        app.goto(page).await;
        return None;
    }

    match input {
        "retry" | "refresh" => {
            app.refresh_current().await;
            return None;
        }
        "confirm" => return app.roster.confirm_delete().await,
        "cancel" => {
            app.roster.cancel_delete();
            return None;
        }
        "clear-filters" => {
            app.ledger.clear_filters().await;
            return None;
        }
        "close" => {
            app.ledger.close_drilldown();
            return None;
        }
        _ => {}
    }

    let (command, rest) = input.split_once(' ').unwrap_or((input, ""));
    match command {
        "add" => add_employee(app, rest).await,
        "delete" => {
            let id = rest.trim();
            let Some(employee) = app.roster.find(id).cloned() else {
                return Some(Notice::Error(format!("no employee with id {id}")));
            };
            app.roster.request_delete(employee);
            None
        }
        "mark" => mark_attendance(app, rest).await,
        "filter" => set_filter(app, rest).await,
        "view" => app.ledger.open_drilldown(rest.trim()).await,
        _ => Some(Notice::Error(format!("unknown command '{command}', try 'help'"))),
    }
}

async fn add_employee(app: &mut App, rest: &str) -> Option<Notice> {
    let fields: Vec<&str> = rest.split(',').map(str::trim).collect();
    if fields.len() != 4 {
        return Some(Notice::Error(
            "usage: add <id>, <full name>, <email>, <department>".to_string(),
        ));
    }
    app.roster.open_form();
    app.roster.form.employee_id = fields[0].to_string();
    app.roster.form.full_name = fields[1].to_string();
    app.roster.form.email = fields[2].to_string();
    app.roster.form.department = fields[3].to_string();
    // Required-field presence is checked here at the boundary, not by the
    // controller.
    if !app.roster.form.is_complete() {
        return Some(Notice::Error("all fields are required".to_string()));
    }
    app.roster.submit_new().await
}

async fn mark_attendance(app: &mut App, rest: &str) -> Option<Notice> {
    let mut parts = rest.split_whitespace();
    let (Some(id), Some(date), Some(status)) = (parts.next(), parts.next(), parts.next()) else {
        return Some(Notice::Error(
            "usage: mark <employee id> <YYYY-MM-DD> <present|absent>".to_string(),
        ));
    };
    if !app.ledger.can_mark() {
        return Some(Notice::Error(
            "add employees before marking attendance".to_string(),
        ));
    }
    let Ok(date) = date.parse::<NaiveDate>() else {
        return Some(Notice::Error(format!("invalid date '{date}'")));
    };
    let Some(status) = AttendanceStatus::parse(status) else {
        return Some(Notice::Error(format!("invalid status '{status}'")));
    };
    app.ledger.open_form();
    app.ledger.form.employee_id = id.to_string();
    app.ledger.form.set_date(date);
    app.ledger.form.status = status;
    app.ledger.submit_mark().await
}

async fn set_filter(app: &mut App, rest: &str) -> Option<Notice> {
    let (dimension, value) = rest.split_once(' ').unwrap_or((rest, ""));
    let value = value.trim();
    match dimension {
        "employee" => {
            let filter = (!value.is_empty() && value != "all").then(|| value.to_string());
            app.ledger.set_employee_filter(filter);
            None
        }
        "from" | "to" => {
            let date = if value.is_empty() || value == "-" {
                None
            } else {
                match value.parse::<NaiveDate>() {
                    Ok(date) => Some(date),
                    Err(_) => return Some(Notice::Error(format!("invalid date '{value}'"))),
                }
            };
            if dimension == "from" {
                app.ledger.set_from_date(date).await;
            } else {
                app.ledger.set_to_date(date).await;
            }
            None
        }
        _ => Some(Notice::Error(
            "usage: filter employee <id|all> | filter from <date|-> | filter to <date|->"
                .to_string(),
        )),
    }
}

fn prompt() -> std::io::Result<()> {
    print!("> ");
    std::io::stdout().flush()
}

fn print_help() {
    println!(
        "commands:\n\
         \x20 dashboard | employees | attendance   switch page\n\
         \x20 retry | refresh                      re-run the current page's fetch\n\
         \x20 add <id>, <name>, <email>, <dept>    create an employee\n\
         \x20 delete <id>  then confirm | cancel   delete an employee\n\
         \x20 mark <id> <YYYY-MM-DD> <present|absent>\n\
         \x20 filter employee <id|all> | filter from <date|-> | filter to <date|->\n\
         \x20 clear-filters\n\
         \x20 view <id> | close                    per-employee drill-down\n\
         \x20 help | quit"
    );
}
