// Page shell - document head and navbar chrome around the menu fragment

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::config::SiteConfig;

/// Embedded style rules shipped with every page
const STYLE: &str = r#"
body { padding-top: 4.5rem; }
.navbar-brand img { height: 40px; width: auto; }
.navbar-nav li.active a { font-weight: 600; text-decoration: underline; }
.nav-account, .nav-cart { margin-left: 1rem; white-space: nowrap; }
"#;

/// Full header page with the menu fragment embedded in the navbar
pub fn page(site: &SiteConfig, menu: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (site.title) }
                @for href in &site.stylesheets {
                    link rel="stylesheet" href=(href);
                }
                @for src in &site.scripts {
                    script src=(src) defer {}
                }
                style { (PreEscaped(STYLE)) }
            }
            body {
                nav class="navbar navbar-expand-lg navbar-light bg-light fixed-top" {
                    div class="container" {
                        a class="navbar-brand" href=(site.brand_href) {
                            img src=(site.logo) alt=(site.title);
                        }
                        button
                            class="navbar-toggler"
                            type="button"
                            data-bs-toggle="collapse"
                            data-bs-target="#mainNav"
                            aria-controls="mainNav"
                            aria-expanded="false"
                            aria-label="Toggle navigation"
                        {
                            span class="navbar-toggler-icon" {}
                        }
                        div class="collapse navbar-collapse" id="mainNav" {
                            ul class="navbar-nav me-auto" {
                                (menu)
                            }
                            a class="nav-account" href=(site.account_href) { "Account" }
                            a class="nav-cart" href=(site.cart_href) { "Cart" }
                        }
                    }
                }
            }
        }
    }
}
