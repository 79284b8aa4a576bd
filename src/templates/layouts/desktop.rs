use crate::auth::SessionUser;
use crate::config::SiteConfig;
use maud::{html, Markup, PreEscaped, DOCTYPE};

/// Everything the page shell needs besides the content.
#[derive(Debug, Clone, Copy)]
pub struct Chrome<'a> {
    pub user: Option<&'a SessionUser>,
    pub site: &'a SiteConfig,
}

const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/about", "About"),
    ("/contact", "Contact"),
    ("/listings", "Listings"),
    ("/connect-agent", "Connect with an Agent"),
    ("/dashboard", "Dashboard"),
];

pub fn desktop_layout(title: &str, chrome: &Chrome, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content="Find your dream home and connect with expert agents on Estately.";
                title { (title) " | Estately" }
                link rel="stylesheet" href="/static/main.css";
                @if !chrome.site.chat_webhook_url.is_empty() {
                    link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/@n8n/chat/dist/style.css";
                }
            }
            body {
                header class="site-header" {
                    a href="/" class="logo" { "Estately" }
                    nav {
                        ul {
                            @for (href, label) in NAV_LINKS {
                                li { a href=(href) { (label) } }
                            }
                        }
                    }
                    div class="session" {
                        @if let Some(user) = chrome.user {
                            span class="user" { (user.name) }
                            form method="post" action="/logout" class="inline" {
                                button type="submit" class="link" { "Log out" }
                            }
                        } @else {
                            a href="/login" { "Login" }
                            a href="/signup" class="btn" { "Sign Up" }
                        }
                    }
                }

                main { (content) }

                (footer())

                @if !chrome.site.telegram_url.is_empty() {
                    a href=(chrome.site.telegram_url)
                        class="telegram-button"
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="Telegram"
                    { "Telegram" }
                }

                @if !chrome.site.chat_webhook_url.is_empty() {
                    (chat_widget(&chrome.site.chat_webhook_url))
                }
            }
        }
    }
}

fn footer() -> Markup {
    html! {
        footer class="site-footer" {
            div {
                strong { "Estately" }
                p { "Modern solutions for modern real estate. We help you find your dream home with ease." }
            }
            div {
                h3 { "Quick Links" }
                ul {
                    li { a href="/about" { "About Us" } }
                    li { a href="/contact" { "Contact" } }
                    li { a href="/dashboard" { "Dashboard" } }
                    li { a href="/connect-agent" { "Find an Agent" } }
                }
            }
            div {
                h3 { "Contact Us" }
                ul {
                    li { "123 Main Street" }
                    li { "Anytown, USA 12345" }
                    li { a href="mailto:info@estately.com" { "info@estately.com" } }
                }
            }
        }
    }
}

/// Embedded chat bubble backed by a workflow webhook.
fn chat_widget(webhook_url: &str) -> Markup {
    // JSON string literal, with "</" broken up so it cannot close the script tag.
    let url = serde_json::to_string(webhook_url)
        .unwrap_or_else(|_| "\"\"".into())
        .replace("</", "<\\/");
    let js = format!(
        "import {{ createChat }} from 'https://cdn.jsdelivr.net/npm/@n8n/chat/dist/chat.bundle.es.js';\n\
         createChat({{ webhookUrl: {url} }});"
    );
    html! {
        script id="chat-widget" type="module" { (PreEscaped(js)) }
    }
}
