//! Sitemap rendering for the public recipe pages.

use crate::db::{recipe_repo, DocumentStore};
use crate::error::Result;

/// Upper bound on recipes listed in one sitemap
pub const SITEMAP_LIMIT: i64 = 500;

const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Read up to [`SITEMAP_LIMIT`] slugs and render the sitemap document
pub async fn build_sitemap(store: &dyn DocumentStore, base_url: &str) -> Result<String> {
    let slugs = recipe_repo::list_recipe_slugs(store, SITEMAP_LIMIT).await?;
    Ok(render_sitemap(base_url, &slugs))
}

/// One `<url>` entry per slug pointing at `{base}/recipe/{slug}`.
pub fn render_sitemap(base_url: &str, slugs: &[String]) -> String {
    let base = escape_xml(base_url);

    let mut lines = Vec::with_capacity(slugs.len() + 3);
    lines.push(r#"<?xml version="1.0" encoding="UTF-8"?>"#.to_string());
    lines.push(format!(r#"<urlset xmlns="{SITEMAP_NAMESPACE}">"#));
    for slug in slugs {
        lines.push(format!(
            "  <url><loc>{base}/recipe/{}</loc></url>",
            escape_xml(slug)
        ));
    }
    lines.push("</urlset>".to_string());

    lines.join("\n")
}

fn escape_xml(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}
