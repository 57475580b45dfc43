//! Navigation and dashboard card commands.

use anyhow::{Result, bail};
use nubo_core::dashboard::{MetricCard, default_cards, reorder};
use nubo_core::navigation::{NavItem, Navigation};

pub fn show(path: Option<&str>) -> Result<()> {
    let nav = Navigation::default_menu();

    let Some(path) = path else {
        for item in &nav.pages {
            print_item(item, 0);
        }
        println!();
        for item in &nav.bottom_menu {
            print_item(item, 0);
        }
        return Ok(());
    };

    let trail = nav.breadcrumbs(path);
    if trail.is_empty() {
        bail!("No menu entry for {}", path);
    }
    let names: Vec<_> = trail.iter().map(|item| item.name.as_str()).collect();
    println!("{}", names.join(" / "));
    Ok(())
}

fn print_item(item: &NavItem, depth: usize) {
    println!("{}{}  {}", "  ".repeat(depth), item.name, item.path);
    for child in &item.children {
        print_item(child, depth + 1);
    }
}

pub fn cards(active: Option<&str>, over: Option<&str>) -> Result<()> {
    let mut cards = default_cards();

    if let (Some(active), Some(over)) = (active, over) {
        if !reorder(&mut cards, active, over) {
            tracing::warn!(active = %active, over = %over, "Card order unchanged");
        }
    }

    for card in &cards {
        print_card(card);
    }
    Ok(())
}

fn print_card(card: &MetricCard) {
    println!("{:<8} {:<36} {:>8} {:>6}", card.id, card.title, card.value, card.change);
}
