use crate::controller::{FetchStatus, ListingView, PageLink, PaginationControls};
use crate::listings::{FilterCriteria, FilterField, PAGE_SIZE};
use crate::models::Property;
use std::fmt::Write;

/// One listing card, numbered from `index`
pub fn render_card(index: usize, property: &Property) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}. {} ({}) [{}]",
        index,
        property.title,
        property.display_price(),
        property.status
    );
    let mut specs = format!("{} bd, {} ba", property.bedrooms, property.bathrooms);
    if let Some(size) = property.area_size {
        let _ = write!(specs, ", {} sqft", size);
    }
    let _ = writeln!(out, "   {}", specs);
    let location = property.display_location();
    if !location.is_empty() {
        let _ = writeln!(out, "   {}", location);
    }
    let _ = writeln!(out, "   Image: {}", property.display_image());
    let _ = writeln!(out, "   ID: {}", property.id);
    out
}

/// `« prev | 1 … 4 [5] 6 … 10 | next »`, with disabled controls in parentheses
pub fn render_pagination(controls: &PaginationControls) -> String {
    let links = controls
        .links
        .iter()
        .map(|link| match link {
            PageLink::Page(n) if *n == controls.current => format!("[{}]", n),
            PageLink::Page(n) => n.to_string(),
            PageLink::Ellipsis => "…".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ");
    let previous = if controls.previous.is_some() { "« prev" } else { "(« prev)" };
    let next = if controls.next.is_some() { "next »" } else { "(next »)" };
    format!("{} | {} | {}", previous, links, next)
}

/// Active search and filters, or `None` when everything is blank
pub fn render_criteria(criteria: &FilterCriteria) -> Option<String> {
    let mut parts = Vec::new();
    if !criteria.search_text.trim().is_empty() {
        parts.push(format!("search=\"{}\"", criteria.search_text.trim()));
    }
    for field in FilterField::ALL {
        let value = criteria.get(field).trim();
        if !value.is_empty() {
            parts.push(format!("{}={}", field, value));
        }
    }
    (!parts.is_empty()).then(|| parts.join(" "))
}

pub fn render_view(view: &ListingView) -> String {
    let mut out = String::new();

    if let Some(criteria) = render_criteria(&view.criteria) {
        let _ = writeln!(out, "Filters: {}", criteria);
    }

    match view.status {
        FetchStatus::Idle => {
            let _ = writeln!(out, "No listings loaded yet.");
        }
        FetchStatus::Loading => {
            let _ = writeln!(out, "Loading properties...");
        }
        FetchStatus::FormatError | FetchStatus::NetworkError => {
            let _ = writeln!(out, "{}", view.error.unwrap_or("Something went wrong."));
        }
        FetchStatus::Success if view.is_empty_result() => {
            let _ = writeln!(out, "No properties found.");
        }
        FetchStatus::Success => {
            let offset = (view.current_page.max(1) - 1) as usize * PAGE_SIZE as usize;
            for (i, property) in view.items.iter().enumerate() {
                out.push_str(&render_card(offset + i + 1, property));
            }
        }
    }

    if let Some(controls) = &view.pagination {
        let _ = writeln!(out, "{}", render_pagination(controls));
    }
    out
}
