use futures::future::join_all;

use crate::app::{AppContext, FavError, Result};
use crate::domain::{FavoriteStatus, ToggleOutcome};

fn marker(is_favorite: bool) -> &'static str {
    if is_favorite {
        "★"
    } else {
        "☆"
    }
}

pub async fn check_items(ctx: &AppContext, resource: &str, items: &[String]) -> Result<()> {
    if ctx.session.is_none() {
        println!("Not signed in; nothing is favorited");
    }

    let toggles = items
        .iter()
        .map(|item| ctx.toggle_for(resource, item))
        .collect::<Result<Vec<_>>>()?;

    let statuses: Vec<FavoriteStatus> = join_all(toggles.iter().map(|toggle| async move {
        toggle.mount().await;
        toggle.status()
    }))
    .await;

    for status in statuses {
        let confirmed = if ctx.session.is_some() && status.checked_at.is_none() {
            " (unconfirmed)"
        } else {
            ""
        };
        println!("{} {}{}", marker(status.is_favorite), status.item_id, confirmed);
    }

    Ok(())
}

pub async fn toggle_item(ctx: &AppContext, resource: &str, item: &str) -> Result<()> {
    let toggle = ctx.toggle_for(resource, item)?;
    toggle.mount().await;

    match toggle.toggle().await {
        ToggleOutcome::Changed { is_favorite } => {
            let action = if is_favorite { "Added" } else { "Removed" };
            println!("{} {} {} favorites", marker(is_favorite), action, item);
        }
        ToggleOutcome::Failed => {
            println!("{} {}", marker(toggle.is_favorite()), item);
            return Err(FavError::Other(format!(
                "Could not update favorite for {}",
                item
            )));
        }
        ToggleOutcome::LoginRequired => {}
        ToggleOutcome::Ignored => {
            println!("A change for {} is already in progress", item);
        }
    }

    Ok(())
}

pub fn list_resources(ctx: &AppContext) -> Result<()> {
    if ctx.config.resources.is_empty() {
        println!("No resource families configured");
        return Ok(());
    }

    for family in ctx.config.resources.values() {
        println!(
            "{}\n  prefix: {}  body key: {}",
            family.name, family.prefix, family.body_key
        );
    }

    Ok(())
}
