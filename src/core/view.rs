use crate::core::query::{QueryModel, EXPERIENCE_MAX};
use crate::domain::model::Job;
use chrono::{DateTime, Utc};

/// 職缺卡片上最多列出的技能數
pub const MAX_SKILL_TAGS: usize = 5;

/// 前幾個技能，加上超出部分的數量 (`+N`)
pub fn skill_tags(job: &Job) -> (&[String], Option<usize>) {
    let shown = job.skills.len().min(MAX_SKILL_TAGS);
    let overflow = job.skills.len() - shown;
    (&job.skills[..shown], (overflow > 0).then_some(overflow))
}

/// 以 `now` 為基準的相對刊登時間，無法解析時原樣回傳
pub fn posted_label(job: &Job, now: DateTime<Utc>) -> String {
    let Some(posted) = job.posted_at() else {
        return job.date_posted.clone();
    };

    let days = (now - posted).num_days();
    match days {
        d if d <= 0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        d if d < 7 => format!("{} days ago", d),
        d if d < 30 => {
            let weeks = d / 7;
            format!("{} {} ago", weeks, if weeks == 1 { "week" } else { "weeks" })
        }
        d => {
            let months = d / 30;
            format!("{} {} ago", months, if months == 1 { "month" } else { "months" })
        }
    }
}

pub fn experience_label(years: u8) -> String {
    if years >= EXPERIENCE_MAX {
        format!("{}+ years", EXPERIENCE_MAX)
    } else {
        format!("{} years", years)
    }
}

/// 例如 `42 jobs found for "rust" in Berlin`
pub fn results_summary(total: u64, query: &QueryModel) -> String {
    let mut line = format!("{} jobs found", total);
    if let Some(designation) = query.designation() {
        line.push_str(&format!(" for \"{}\"", designation));
    }
    if let Some(location) = query.location() {
        line.push_str(&format!(" in {}", location));
    }
    line
}

pub fn page_summary(current_page: u32, total_pages: u32) -> String {
    format!("Showing page {} of {}", current_page, total_pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn job_with(skills: &[&str], date_posted: &str) -> Job {
        Job {
            job_id: "1".to_string(),
            job_title: "Platform Engineer".to_string(),
            company_name: "Initech".to_string(),
            company_logo_url: String::new(),
            location: "Austin".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            experience_range: "3-5 years".to_string(),
            date_posted: date_posted.to_string(),
            job_url: String::new(),
            description: String::new(),
        }
    }

    #[test]
    fn test_skill_tags_overflow() {
        let job = job_with(&["rust", "go", "sql", "k8s", "aws", "gcp", "linux"], "");
        let (shown, overflow) = skill_tags(&job);
        assert_eq!(shown.len(), 5);
        assert_eq!(shown[4], "aws");
        assert_eq!(overflow, Some(2));
        // the job itself is untouched
        assert_eq!(job.skills.len(), 7);

        let few = job_with(&["rust"], "");
        assert_eq!(skill_tags(&few), (&few.skills[..], None));
    }

    #[test]
    fn test_posted_label() {
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();

        assert_eq!(posted_label(&job_with(&[], "2026-10-16"), now), "Today");
        assert_eq!(posted_label(&job_with(&[], "2026-10-15"), now), "Yesterday");
        assert_eq!(posted_label(&job_with(&[], "2026-10-12"), now), "4 days ago");
        assert_eq!(posted_label(&job_with(&[], "2026-10-08"), now), "1 week ago");
        assert_eq!(posted_label(&job_with(&[], "2026-09-25"), now), "3 weeks ago");
        assert_eq!(posted_label(&job_with(&[], "2026-09-10"), now), "1 month ago");
        assert_eq!(posted_label(&job_with(&[], "2026-05-01"), now), "5 months ago");
        assert_eq!(posted_label(&job_with(&[], "soon"), now), "soon");
    }

    #[test]
    fn test_summaries() {
        let mut query = QueryModel::new();
        assert_eq!(results_summary(0, &query), "0 jobs found");

        query.set_designation("rust");
        query.set_location("Berlin");
        assert_eq!(results_summary(42, &query), "42 jobs found for \"rust\" in Berlin");
        assert_eq!(page_summary(2, 5), "Showing page 2 of 5");
    }

    #[test]
    fn test_experience_label() {
        assert_eq!(experience_label(3), "3 years");
        assert_eq!(experience_label(15), "15+ years");
    }
}
