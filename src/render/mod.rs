//! HTML rendering
//!
//! All markup goes through maud, so every interpolated category name and
//! selector is escaped for its text or attribute context.

mod page;

use maud::{html, Markup};

use crate::catalog::Catalog;
use crate::menu::{self, MenuEntry, Selector};

pub use page::page;

/// Menu fragment: one `<li>` per entry, `class="active"` on the current one
pub fn menu<'a>(entries: impl IntoIterator<Item = MenuEntry<'a>>) -> Markup {
    html! {
        @for entry in entries {
            li class=[entry.active.then_some("active")] {
                a href=(entry.href) { (entry.name) }
            }
        }
    }
}

/// Convenience: catalog + selector straight to the fragment
pub fn menu_for(catalog: &Catalog, selector: &Selector) -> Markup {
    menu(menu::entries(catalog, selector))
}
