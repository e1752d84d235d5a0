//! Command handlers for CLI subcommands.

use std::path::Path;

use chrono::Datelike;
use folio_core::{FolioConfig, LinkKind};
use folio_models::Profile;
use tracing::{info, warn};

use crate::cli::{Commands, OutputFormat};
use crate::load_profile;
use crate::render::{compose_page, export_page, PageOptions};

/// Result type for command operations.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Execute a CLI command.
pub fn execute(command: Commands, content: Option<&Path>) -> Result<()> {
    let config = FolioConfig::from_env()?;
    let profile = load_profile(content, config.content_path.as_deref())?;

    match command {
        Commands::Export { out, background } => cmd_export(&profile, &config, &out, background),
        Commands::Content { format } => cmd_content(&profile, format),
        Commands::Links => cmd_links(&profile),
        Commands::Check => cmd_check(&profile),
        Commands::View { .. } => {
            // The viewer is handled separately in main
            Ok(())
        }
    }
}

fn cmd_export(
    profile: &Profile,
    config: &FolioConfig,
    out: &Path,
    background: String,
) -> Result<()> {
    profile.validate()?;

    let options = PageOptions {
        background_image: background,
        year: chrono::Local::now().year(),
        settings: config.controller_settings(),
    };
    let html = compose_page(profile, &options);

    info!(
        path = %out.display(),
        bytes = html.len(),
        year = options.year,
        "Exporting page"
    );
    export_page(out, &html)?;

    println!("Wrote {}", out.display());
    Ok(())
}

fn cmd_content(profile: &Profile, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(profile)?);
        }
        OutputFormat::Brief => {
            println!("{} ({})", profile.name, profile.hero.role);
            println!("  Skill groups: {}", profile.skills.len());
            for group in &profile.skills {
                println!("    {:<16} {}", group.title, group.skills.join(", "));
            }
            println!("  Experience:   {}", profile.experience.len());
            for entry in &profile.experience {
                println!("    {} @ {} [{}]", entry.role, entry.organization, entry.status);
            }
            println!("  Projects:     {}", profile.projects.len());
            for project in &profile.projects {
                println!("    {}", project.title);
            }
            println!("  Social links: {}", profile.social_links().len());
        }
    }
    Ok(())
}

/// Every outbound target on the page with its label, in page order.
pub fn link_inventory(profile: &Profile) -> Vec<(String, String)> {
    let mut links: Vec<(String, String)> = profile
        .social_links()
        .into_iter()
        .map(|l| (l.label.clone(), l.href.clone()))
        .collect();
    links.extend(
        profile
            .projects
            .iter()
            .map(|p| (p.title.clone(), p.link.clone())),
    );
    links.push(("Phone".to_string(), profile.contact.phone_uri.clone()));
    links.push((
        "Contact email".to_string(),
        format!("mailto:{}", profile.contact.email),
    ));
    links
}

fn kind_label(kind: &LinkKind) -> String {
    match kind {
        LinkKind::Web => "web (new tab)".to_string(),
        LinkKind::Mail => "mail handler".to_string(),
        LinkKind::Tel => "phone handler".to_string(),
        LinkKind::Placeholder => "placeholder".to_string(),
        LinkKind::Unsupported(scheme) => format!("unsupported ({})", scheme),
    }
}

fn cmd_links(profile: &Profile) -> Result<()> {
    let links = link_inventory(profile);
    let width = links.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

    for (label, href) in &links {
        let kind = LinkKind::classify(href);
        println!("{:<width$}  {:<15} {}", label, kind_label(&kind), href, width = width);
    }
    Ok(())
}

fn cmd_check(profile: &Profile) -> Result<()> {
    profile.validate()?;

    let placeholders = link_inventory(profile)
        .into_iter()
        .filter(|(_, href)| LinkKind::classify(href) == LinkKind::Placeholder)
        .count();
    if placeholders > 0 {
        warn!(count = placeholders, "Profile has placeholder links");
    }

    println!("ok: {} is valid", profile.name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_inventory_order() {
        let profile = Profile::builtin();
        let links = link_inventory(&profile);

        assert_eq!(links[0].0, "GitHub");
        // Footer repeats hero links, so only one of each
        assert_eq!(links.iter().filter(|(l, _)| l == "GitHub").count(), 1);
        assert_eq!(links.last().unwrap().1, "mailto:mansigangani126@gamil.com");
    }

    #[test]
    fn test_link_inventory_kinds() {
        let profile = Profile::builtin();
        let kinds: Vec<LinkKind> = link_inventory(&profile)
            .iter()
            .map(|(_, href)| LinkKind::classify(href))
            .collect();

        assert!(kinds.contains(&LinkKind::Tel));
        assert!(kinds.contains(&LinkKind::Mail));
        assert!(kinds.contains(&LinkKind::Placeholder));
        assert!(!kinds.iter().any(|k| matches!(k, LinkKind::Unsupported(_))));
    }

    #[test]
    fn test_kind_label() {
        assert_eq!(kind_label(&LinkKind::Web), "web (new tab)");
        assert_eq!(
            kind_label(&LinkKind::Unsupported("ftp".to_string())),
            "unsupported (ftp)"
        );
    }
}
