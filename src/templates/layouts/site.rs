use maud::{html, Markup, PreEscaped, DOCTYPE};

/// Shared page chrome: head, header with nav, footer. Styles are inlined so
/// the demo serves no static assets.
pub fn site_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · Ayra Homes" }
                style { (PreEscaped(STYLES)) }
            }
            body {
                header class="site-header" {
                    a href="/" class="brand" {
                        svg
                            xmlns="http://www.w3.org/2000/svg"
                            width="24"
                            height="24"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="#524ed2"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                        {
                            path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                            path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                            path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                            path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                        }
                        span { "Ayra Homes" }
                    }
                    nav {
                        ul {
                            li { a href="/" { "Home" } }
                            li { a href="/search" { "Browse" } }
                            li { a href="/chat" { "Chat with Ayra" } }
                        }
                    }
                }
                main { (content) }
                footer class="site-footer" {
                    p { "Ayra Homes demo. Listings and market figures are illustrative." }
                }
            }
        }
    }
}

const STYLES: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #1f2430; }
main { max-width: 860px; margin: 0 auto; padding: 1.5rem 1rem 3rem; }
.site-header { display: flex; align-items: center; justify-content: space-between;
  padding: 0.75rem 1.5rem; box-shadow: 0 1px 4px rgba(0,0,0,0.08); }
.brand { display: flex; align-items: center; gap: 0.5rem; font-weight: 600;
  color: inherit; text-decoration: none; }
nav ul { display: flex; gap: 1.25rem; list-style: none; margin: 0; padding: 0; }
nav a { color: inherit; text-decoration: none; }
nav a:hover { color: #524ed2; }
.hero { text-align: center; margin: 2.5rem 0; }
.hero p.hint { color: #667; }
.search-form { display: flex; gap: 0.5rem; margin: 1rem auto; max-width: 560px; }
.search-form input { flex: 1; padding: 0.7rem 1rem; border: 1px solid #ccd;
  border-radius: 999px; font-size: 1rem; }
.search-form button { padding: 0.7rem 1.4rem; border: none; border-radius: 999px;
  background: #524ed2; color: #fff; cursor: pointer; }
.prompts { display: flex; flex-wrap: wrap; gap: 0.5rem; justify-content: center; }
.prompts a { border: 1px solid #ccd; border-radius: 999px; padding: 0.35rem 0.9rem;
  font-size: 0.85rem; color: inherit; text-decoration: none; }
.prompts a:hover { border-color: #524ed2; }
.property-card { display: flex; gap: 1rem; border: 1px solid #e3e5ee;
  border-radius: 12px; overflow: hidden; margin: 1rem 0; }
.property-card img { width: 180px; height: 140px; object-fit: cover; }
.property-body { padding: 0.75rem 1rem 0.75rem 0; flex: 1; }
.property-body h3 { margin: 0 0 0.2rem; font-size: 1.05rem; }
.property-body .price { font-weight: 700; color: #524ed2; }
.property-body .location, .property-body .specs { margin: 0.15rem 0; color: #556;
  font-size: 0.9rem; }
.tags { display: flex; flex-wrap: wrap; gap: 0.35rem; margin-top: 0.4rem; }
.tags span { background: #f1f2f8; border-radius: 6px; padding: 0.15rem 0.5rem;
  font-size: 0.75rem; }
.chat-log { display: flex; flex-direction: column; gap: 0.6rem; margin: 1.5rem 0; }
.bubble { max-width: 80%; padding: 0.55rem 0.9rem; border-radius: 16px;
  font-size: 0.95rem; }
.bubble.user { align-self: flex-end; background: #3b82f6; color: #fff;
  border-top-right-radius: 4px; }
.bubble.assistant { align-self: flex-start; background: #f1f2f8;
  border-top-left-radius: 4px; }
.market-trends { border: 1px solid #e3e5ee; border-radius: 12px; padding: 0.75rem 1rem;
  margin: 1rem 0; }
.market-trends table { width: 100%; border-collapse: collapse; font-size: 0.85rem; }
.market-trends th, .market-trends td { text-align: left; padding: 0.25rem 0.4rem; }
.market-trends .growth { color: #16a34a; font-size: 0.85rem; }
.trends-header { display: flex; justify-content: space-between; align-items: center; }
.results-header p { color: #667; margin-top: 0.2rem; }
.site-footer { text-align: center; color: #99a; font-size: 0.85rem; padding: 1rem; }
"#;
