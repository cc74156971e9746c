//! Text rendering for session state and turn results.

use escape_rules::{Action, PickUpResult, Session, SessionEnd, Turn, REQUIRED_ITEMS};

use crate::lore::Lore;

const SEPARATOR: &str = "---------------------------";

/// Status block shown at the top of every turn.
pub fn status_lines(session: &Session<'_>, lore: &Lore) -> Vec<String> {
    let room = session.room();
    let mut lines = vec![SEPARATOR.to_string(), format!("Location: {}", room.id)];

    if let Some(story) = lore.story(&room.id) {
        lines.push(story.to_string());
    }

    let inventory = session.inventory();
    let gear = if inventory.is_empty() {
        lore.empty_inventory.clone()
    } else {
        inventory
            .iter()
            .map(|item| item.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };
    lines.push(format!(
        "Gear Collected ({}/{}): {}",
        inventory.len(),
        REQUIRED_ITEMS,
        gear
    ));

    if let Some(item) = session.uncollected_item() {
        lines.push(format!("Diagnostic HUD: {} detected nearby.", item));
    }

    let routes: Vec<String> = room
        .exits()
        .map(|(direction, destination)| format!("{} → {}", direction, destination))
        .collect();
    if !routes.is_empty() {
        lines.push(format!("Routes: {}", routes.join(", ")));
    }

    lines
}

/// Numbered menu, starting at 1.
pub fn menu_lines(actions: &[Action]) -> Vec<String> {
    actions
        .iter()
        .enumerate()
        .map(|(i, action)| format!("{}. {}", i + 1, action.label))
        .collect()
}

/// Result text for one turn, without the end-of-session narration.
pub fn turn_message(turn: &Turn, lore: &Lore) -> String {
    match turn {
        Turn::PickedUp(result) => {
            let mut message = result.to_string();
            if let PickUpResult::Collected { item, complete, .. } = result {
                if let Some(note) = lore.note(item) {
                    message.push(' ');
                    message.push_str(note);
                }
                if *complete && !lore.ready_hint.is_empty() {
                    message.push(' ');
                    message.push_str(&lore.ready_hint);
                }
            }
            message
        }
        Turn::Exited if !lore.farewell.is_empty() => lore.farewell.clone(),
        other => other.to_string(),
    }
}

/// Narration for the end of a session.
pub fn ending_lines(ending: SessionEnd, lore: &Lore) -> Vec<String> {
    let mut lines = match ending {
        SessionEnd::Encounter(outcome) => lore.encounter(outcome).to_vec(),
        SessionEnd::Quit => Vec::new(),
    };
    if !lore.closing.is_empty() {
        lines.push(String::new());
        lines.push(lore.closing.clone());
    }
    lines
}
