use super::render::{self, View};
use super::{AppContext, Output};
use anyhow::{Result, bail};
use roster_application::SessionListController;

/// Waits for every dispatched operation, cascades included, then prints the
/// state. A surfaced error message fails the command.
async fn finish(controller: &SessionListController, view: View, output: Output) -> Result<()> {
    controller.scope().wait_idle().await;
    let state = controller.state();

    render::print(&state, view, output)?;

    if let Some(message) = state.error_message {
        bail!(message);
    }
    Ok(())
}

async fn settled_controller(context: &AppContext) -> Result<SessionListController> {
    let controller = context.controller()?;
    controller.scope().wait_idle().await;
    Ok(controller)
}

pub async fn list(context: &AppContext, page: u32, output: Output) -> Result<()> {
    let controller = settled_controller(context).await?;
    if page > 1 {
        controller.load_sessions(page);
    }
    finish(&controller, View::Page, output).await
}

pub async fn recent(context: &AppContext, output: Output) -> Result<()> {
    let controller = settled_controller(context).await?;
    finish(&controller, View::Recent, output).await
}

pub async fn create(context: &AppContext, title: String, output: Output) -> Result<()> {
    let session = context.store.create_session(title).await?;
    tracing::info!("Created session {}", session.id);
    if !output.json {
        println!("{}", session.id);
    }
    let controller = settled_controller(context).await?;
    finish(&controller, View::Page, output).await
}

pub async fn delete(context: &AppContext, id: String, output: Output) -> Result<()> {
    let controller = settled_controller(context).await?;
    controller.delete_session(id);
    finish(&controller, View::Page, output).await
}

pub async fn star(context: &AppContext, id: String, starred: bool, output: Output) -> Result<()> {
    let controller = settled_controller(context).await?;
    controller.update_session_starred(id, starred);
    finish(&controller, View::Page, output).await
}

pub async fn rename(context: &AppContext, id: String, title: String, output: Output) -> Result<()> {
    let controller = settled_controller(context).await?;
    controller.rename_session(id, title);
    finish(&controller, View::Page, output).await
}
