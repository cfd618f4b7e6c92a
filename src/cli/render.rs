use campus_lostfound::item::{Category, Item};
use campus_lostfound::search::Listing;
use chrono::{DateTime, Utc};

/// `Mar 1, 2024`
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub fn render_card(item: &Item) -> String {
    let contact = match &item.contact_phone {
        Some(phone) => format!("{}, {phone}", item.contact_email),
        None => item.contact_email.clone(),
    };
    let mut lines = vec![
        format!("[{}] {}  ({})", item.kind.badge(), item.title, item.category),
        format!("  {}", item.description),
        format!("  Location: {}", item.location),
        format!("  Posted:   {}", format_date(&item.date_posted)),
        format!("  Contact:  {contact}"),
    ];
    if item.image.is_some() {
        lines.push("  Photo attached".to_string());
    }
    lines.push(format!("  id: {}", item.id));
    lines.join("\n") + "\n"
}

pub fn render_listing(listing: &Listing<'_>) -> String {
    if listing.is_empty() {
        return format!(
            "{}\n\n{}\n{}\n",
            listing.summary(),
            listing.empty_heading(),
            listing.empty_hint()
        );
    }
    let cards: Vec<String> = listing.items.iter().map(|item| render_card(item)).collect();
    format!("{}\n\n{}", listing.summary(), cards.join("\n"))
}

pub fn render_categories() -> String {
    Category::ALL.iter().map(|c| format!("{c}\n")).collect()
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
