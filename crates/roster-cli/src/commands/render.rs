use super::Output;
use anyhow::Result;
use colored::Colorize;
use roster_application::SessionListState;
use roster_core::session::SessionSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Page,
    Recent,
}

pub fn print(state: &SessionListState, view: View, output: Output) -> Result<()> {
    if output.json {
        println!("{}", serde_json::to_string_pretty(state)?);
        return Ok(());
    }

    match view {
        View::Page => print_page(state),
        View::Recent => print_recent(state),
    }
    Ok(())
}

fn print_page(state: &SessionListState) {
    let Some(paged) = &state.paged_result else {
        println!("{}", "No page loaded".dimmed());
        return;
    };

    println!(
        "{}",
        format!("Page {} ({} sessions total)", paged.current_page, state.total_session_count)
            .bold()
    );
    if paged.sessions.is_empty() {
        println!("{}", "  (empty)".dimmed());
    }
    for session in &paged.sessions {
        println!("{}", session_line(session));
    }

    let mut hints = Vec::new();
    if paged.has_previous_page {
        hints.push(format!("--page {}", paged.current_page - 1));
    }
    if paged.has_next_page {
        hints.push(format!("--page {}", paged.current_page + 1));
    }
    if !hints.is_empty() {
        println!("{}", hints.join("  ").dimmed());
    }
}

fn print_recent(state: &SessionListState) {
    println!(
        "{}",
        format!(
            "Recent sessions ({} of {})",
            state.recent_sessions.len(),
            state.total_session_count
        )
        .bold()
    );
    for session in &state.recent_sessions {
        println!("{}", session_line(session));
    }
}

fn session_line(session: &SessionSummary) -> String {
    let star = if session.is_starred {
        "★".yellow().to_string()
    } else {
        " ".to_string()
    };
    format!(
        "{} {}  {}  {}",
        star,
        session.id.dimmed(),
        session.title,
        session.updated_at.format("%Y-%m-%d %H:%M").to_string().dimmed()
    )
}
