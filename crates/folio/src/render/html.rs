//! Presentational components.
//!
//! Each function maps one content record to a markup fragment. They are
//! pure: no state, no failure path. A missing optional field simply omits
//! its element.

use folio_core::LinkKind;
use folio_models::{
    Achievement, EducationEntry, ExperienceEntry, Icon, InfoItem, ProjectEntry, SkillGroup,
    SocialLink, NAV_ITEMS,
};

/// Attributes that open an external destination in a new browsing context
/// with no reference back to this page.
pub const EXTERNAL_LINK_ATTRS: &str = r#"target="_blank" rel="noopener noreferrer""#;

/// Escape text for element content and double-quoted attributes.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn icon(icon: Icon) -> String {
    format!(
        r#"<span class="icon icon-{id}" data-icon="{id}" aria-hidden="true"></span>"#,
        id = icon.as_str()
    )
}

/// Round icon link to an outbound profile or contact target.
pub fn social_link(link: &SocialLink) -> String {
    format!(
        r#"<a href="{href}" {attrs} class="social-link" aria-label="{label}">{icon}</a>"#,
        href = html_escape(&link.href),
        attrs = EXTERNAL_LINK_ATTRS,
        label = html_escape(&link.label),
        icon = icon(link.icon),
    )
}

/// Icon followed by a line of text.
pub fn info_item(item: &InfoItem) -> String {
    format!(
        r#"<div class="info-item"><span class="info-icon">{icon}</span><span>{text}</span></div>"#,
        icon = icon(item.icon),
        text = html_escape(&item.text),
    )
}

/// Timeline entry for one education milestone.
pub fn education_item(entry: &EducationEntry) -> String {
    let grade = entry
        .grade
        .as_deref()
        .map(|g| format!(r#"<span class="badge badge-outline">{}</span>"#, html_escape(g)))
        .unwrap_or_default();

    format!(
        concat!(
            r#"<div class="education-item">"#,
            r#"<span class="education-label">{label}</span>"#,
            r#"<h4>{degree}</h4>"#,
            r#"<p class="muted">{institution}</p>"#,
            "{grade}",
            "</div>"
        ),
        label = html_escape(&entry.label),
        degree = html_escape(&entry.degree),
        institution = html_escape(&entry.institution),
        grade = grade,
    )
}

/// Card with a titled list of skill badges.
pub fn skill_card(group: &SkillGroup) -> String {
    let badges: String = group
        .skills
        .iter()
        .map(|s| format!(r#"<span class="badge">{}</span>"#, html_escape(s)))
        .collect();

    format!(
        concat!(
            r#"<div class="card skill-card" data-reveal-once>"#,
            r#"<div class="card-icon">{icon}</div>"#,
            r#"<h3>{title}</h3>"#,
            r#"<div class="badges">{badges}</div>"#,
            "</div>"
        ),
        icon = icon(group.icon),
        title = html_escape(&group.title),
        badges = badges,
    )
}

/// Timeline card for one position.
pub fn experience_card(entry: &ExperienceEntry) -> String {
    let bullets: String = entry
        .responsibilities
        .iter()
        .map(|b| format!("<li>{}</li>", html_escape(b)))
        .collect();

    format!(
        concat!(
            r#"<div class="card experience-card" data-reveal-once>"#,
            r#"<div class="card-header"><h3>{role}</h3><span class="badge badge-status">{status}</span></div>"#,
            r#"<p class="organization">{organization}</p>"#,
            r#"<p class="muted small">{duration}</p>"#,
            r#"<ul class="bullets">{bullets}</ul>"#,
            "</div>"
        ),
        role = html_escape(&entry.role),
        status = html_escape(&entry.status),
        organization = html_escape(&entry.organization),
        duration = html_escape(&entry.duration),
        bullets = bullets,
    )
}

/// Card for one featured project.
///
/// A placeholder link renders as an anchor without `href`, which browsers
/// neither follow nor scroll to.
pub fn project_card(project: &ProjectEntry) -> String {
    let link = match LinkKind::classify(&project.link) {
        LinkKind::Placeholder => format!(
            r#"<a class="project-link" aria-disabled="true" aria-label="{title} (no link)">{icon}</a>"#,
            title = html_escape(&project.title),
            icon = icon(Icon::ExternalLink),
        ),
        _ => format!(
            r#"<a href="{href}" {attrs} class="project-link" aria-label="{title}">{icon}</a>"#,
            href = html_escape(&project.link),
            attrs = EXTERNAL_LINK_ATTRS,
            title = html_escape(&project.title),
            icon = icon(Icon::ExternalLink),
        ),
    };

    let features: String = project
        .features
        .iter()
        .map(|f| format!(r#"<li><span class="dot"></span>{}</li>"#, html_escape(f)))
        .collect();
    let tags: String = project
        .tags
        .iter()
        .map(|t| format!(r#"<span class="badge badge-outline">{}</span>"#, html_escape(t)))
        .collect();

    format!(
        concat!(
            r#"<div class="card project-card">"#,
            r#"<div class="card-header"><h3>{title}</h3>{link}</div>"#,
            r#"<p class="muted">{description}</p>"#,
            r#"<ul class="features">{features}</ul>"#,
            r#"<div class="badges">{tags}</div>"#,
            "</div>"
        ),
        title = html_escape(&project.title),
        link = link,
        description = html_escape(&project.description),
        features = features,
        tags = tags,
    )
}

pub fn achievement_tile(achievement: &Achievement) -> String {
    format!(
        r#"<div class="achievement"><span class="emoji">{emoji}</span>{text}</div>"#,
        emoji = html_escape(&achievement.emoji),
        text = html_escape(&achievement.text),
    )
}

/// Fixed navigation bar with desktop items, mobile toggle and mobile menu.
pub fn nav_bar(logo: &str) -> String {
    let items: String = NAV_ITEMS
        .iter()
        .map(|item| {
            format!(
                r#"<button type="button" class="nav-item" data-section="{id}">{label}</button>"#,
                id = item.target(),
                label = item.label,
            )
        })
        .collect();

    format!(
        concat!(
            r#"<nav id="nav" class="nav">"#,
            r#"<div class="container nav-inner">"#,
            r#"<span class="logo" data-scroll-top>{logo}</span>"#,
            r#"<div class="nav-desktop">{items}</div>"#,
            r#"<button type="button" class="nav-toggle" aria-label="Toggle menu" aria-expanded="false">&#9776;</button>"#,
            "</div>",
            r#"<div class="nav-mobile" hidden>{items}</div>"#,
            "</nav>"
        ),
        logo = html_escape(logo),
        items = items,
    )
}
