use crate::core::controller::SearchView;
use crate::core::pagination::{PageItem, PageWindow};
use crate::core::view::{experience_label, posted_label, skill_tags};
use crate::domain::model::Job;
use chrono::{DateTime, Utc};
use std::fmt::Write;

pub fn render_view(view: &SearchView, now: DateTime<Utc>) -> String {
    let mut out = String::new();

    if let Some(notification) = &view.state.notification {
        let _ = writeln!(out, "❌ {}: {}", notification.title, notification.description);
        out.push('\n');
    }

    let (exp_min, exp_max) = view.query.experience_range();
    let sources: Vec<&str> = view.query.sources().iter().map(|s| s.label()).collect();
    let _ = writeln!(out, "{}", view.results_summary());
    let _ = writeln!(out, "{}", view.page_summary());
    let _ = writeln!(
        out,
        "Experience: {} - {} | Sources: {}",
        experience_label(exp_min),
        experience_label(exp_max),
        if sources.is_empty() {
            "All".to_string()
        } else {
            sources.join(", ")
        }
    );
    out.push('\n');

    if view.state.is_loading {
        out.push_str("Loading...\n");
        return out;
    }

    let gated = view.gated();
    if gated.visible.is_empty() {
        out.push_str("No jobs found\n");
        out.push_str("Try adjusting your search filters or try a different search term.\n");
        return out;
    }

    for job in gated.visible {
        out.push_str(&render_job(job, now));
        out.push('\n');
    }

    if let Some(message) = gated.upsell_message() {
        let _ = writeln!(out, "⭐ Upgrade to see more jobs");
        let _ = writeln!(out, "   {}", message);
        out.push('\n');
    }

    let pagination = render_pagination(&view.window());
    if !pagination.is_empty() {
        let _ = writeln!(out, "{}", pagination);
    }

    out
}

pub fn render_job(job: &Job, now: DateTime<Utc>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "■ {}", job.job_title);
    let _ = writeln!(
        out,
        "  {} • {} • {}",
        job.company_name, job.location, job.experience_range
    );

    let (skills, overflow) = skill_tags(job);
    if !skills.is_empty() {
        let mut tags: Vec<String> = skills.iter().map(|s| format!("[{}]", s)).collect();
        if let Some(more) = overflow {
            tags.push(format!("[+{}]", more));
        }
        let _ = writeln!(out, "  {}", tags.join(" "));
    }

    let _ = writeln!(out, "  Posted {}", posted_label(job, now));
    if !job.job_url.is_empty() {
        let _ = writeln!(out, "  {}", job.job_url);
    }
    out
}

/// 例如 `« Previous  1 … 8 9 [10] 11 12 … 20  Next »`；只有一頁時回傳空字串
pub fn render_pagination(window: &PageWindow) -> String {
    window
        .items()
        .into_iter()
        .map(|item| match item {
            PageItem::Previous { enabled: true } => "« Previous".to_string(),
            PageItem::Previous { enabled: false } => "(« Previous)".to_string(),
            PageItem::Page {
                number,
                current: true,
            } => format!("[{}]", number),
            PageItem::Page { number, .. } => number.to_string(),
            PageItem::Ellipsis => "…".to_string(),
            PageItem::Next { enabled: true } => "Next »".to_string(),
            PageItem::Next { enabled: false } => "(Next »)".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
