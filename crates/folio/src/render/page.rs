//! Page composer.
//!
//! Assembles the content and components into one continuously scrollable
//! document under a fixed navigation bar. The inline script carries the
//! same interaction rules as [`folio_core::InteractionController`].

use folio_core::ControllerSettings;
use folio_models::{Profile, SectionId};

use super::html::{
    achievement_tile, education_item, experience_card, html_escape, info_item, nav_bar,
    project_card, skill_card, social_link,
};

/// Default hero background image, relative to the exported page.
pub const DEFAULT_BACKGROUND: &str = "assets/hero-background.png";

/// Rendering options for [`compose_page`].
#[derive(Debug, Clone)]
pub struct PageOptions {
    /// Image referenced by the hero background.
    pub background_image: String,
    /// Year shown in the footer.
    pub year: i32,
    pub settings: ControllerSettings,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            background_image: DEFAULT_BACKGROUND.to_string(),
            year: 2025,
            settings: ControllerSettings::default(),
        }
    }
}

const STYLE: &str = r#"
:root { --bg: #0b1120; --card: #111a2e; --fg: #e2e8f0; --muted: #94a3b8; --primary: #22d3ee; }
* { box-sizing: border-box; }
html { scroll-behavior: smooth; }
body { margin: 0; background: var(--bg); color: var(--fg); font-family: system-ui, sans-serif; }
.container { max-width: 1100px; margin: 0 auto; padding: 0 1.5rem; }
.nav { position: fixed; top: 0; left: 0; right: 0; z-index: 50; padding: 1.5rem 0; transition: all .3s; }
.nav.condensed { background: rgba(11,17,32,.8); backdrop-filter: blur(12px); border-bottom: 1px solid rgba(255,255,255,.05); padding: 1rem 0; }
.nav-inner { display: flex; align-items: center; justify-content: space-between; }
.logo { font-size: 2rem; cursor: pointer; }
.nav-desktop { display: flex; gap: 2rem; }
.nav-item { background: none; border: 0; color: var(--muted); cursor: pointer; font-size: .9rem; }
.nav-item:hover, .logo:hover { color: var(--primary); }
.nav-toggle { display: none; background: none; border: 0; color: var(--fg); font-size: 1.5rem; }
.nav-mobile { display: flex; flex-direction: column; gap: 1rem; background: var(--card); padding: 1.5rem; }
.nav-mobile[hidden] { display: none; }
@media (max-width: 768px) { .nav-desktop { display: none; } .nav-toggle { display: block; } }
section { padding: 6rem 0; }
#hero { min-height: 100vh; display: flex; align-items: center; text-align: center; position: relative; overflow: hidden; }
.hero-bg { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; opacity: .3; }
.hero-content { position: relative; z-index: 1; width: 100%; }
.typed { color: var(--primary); }
.cursor { animation: pulse 1s infinite; color: var(--primary); }
@keyframes pulse { 50% { opacity: 0; } }
.badge { display: inline-block; padding: .2rem .6rem; margin: .2rem; border-radius: 999px; background: rgba(255,255,255,.06); font-size: .8rem; }
.badge-outline { background: none; border: 1px solid rgba(255,255,255,.1); }
.card { background: var(--card); border: 1px solid rgba(255,255,255,.05); border-radius: 1rem; padding: 1.5rem; }
.grid { display: grid; gap: 2rem; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); }
.card-header { display: flex; justify-content: space-between; align-items: start; }
.muted { color: var(--muted); }
.small { font-size: .85rem; }
.social-links { display: flex; justify-content: center; gap: 1.5rem; }
.social-link { display: inline-flex; padding: .75rem; border-radius: 999px; background: rgba(255,255,255,.06); color: var(--fg); }
.icon::before { content: attr(data-icon); font-size: .75rem; }
.button { display: inline-block; padding: .8rem 2rem; border-radius: .5rem; border: 1px solid rgba(255,255,255,.1); background: none; color: var(--fg); cursor: pointer; }
.button.primary { background: var(--primary); color: var(--bg); border: 0; }
.achievements { display: grid; gap: 1.5rem; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); text-align: center; }
.achievement .emoji { display: block; font-size: 1.5rem; margin-bottom: .5rem; }
footer { padding: 2rem 0; text-align: center; color: var(--muted); border-top: 1px solid rgba(255,255,255,.05); }
[data-reveal-once] { opacity: 0; transform: translateY(20px); transition: opacity .6s, transform .6s; }
[data-reveal-once].revealed { opacity: 1; transform: none; }
"#;

/// Client-side controller. Placeholders are substituted in [`compose_page`].
const SCRIPT: &str = r#"
(function () {
  var THRESHOLD = __THRESHOLD__;
  var INTERVAL_MS = __INTERVAL_MS__;
  var TARGET = __TARGET__;

  var nav = document.getElementById('nav');
  var menu = nav.querySelector('.nav-mobile');
  var toggle = nav.querySelector('.nav-toggle');
  var typed = document.getElementById('typed');

  function setMenuOpen(open) {
    menu.hidden = !open;
    toggle.setAttribute('aria-expanded', String(open));
  }

  function onScroll() {
    nav.classList.toggle('condensed', window.scrollY > THRESHOLD);
  }

  var chars = Array.from(TARGET);
  var revealed = 0;
  var timer = null;

  function typeNext() {
    if (revealed < chars.length) {
      revealed += 1;
      typed.textContent = chars.slice(0, revealed).join('');
    }
    if (revealed === chars.length) {
      clearInterval(timer);
      timer = null;
    }
  }

  var observer = null;

  function observeReveals() {
    var pending = document.querySelectorAll('[data-reveal-once]:not(.revealed)');
    if (!('IntersectionObserver' in window)) {
      pending.forEach(function (el) { el.classList.add('revealed'); });
      return;
    }
    observer = new IntersectionObserver(function (entries, self) {
      entries.forEach(function (entry) {
        if (entry.isIntersecting) {
          entry.target.classList.add('revealed');
          self.unobserve(entry.target);
        }
      });
    });
    pending.forEach(function (el) { observer.observe(el); });
  }

  var mounted = false;

  // Also runs when the page comes back from the back/forward cache.
  function mount() {
    if (mounted) { return; }
    mounted = true;
    window.addEventListener('scroll', onScroll);
    if (revealed < chars.length) { timer = setInterval(typeNext, INTERVAL_MS); }
    observeReveals();
  }

  function unmount() {
    if (!mounted) { return; }
    mounted = false;
    window.removeEventListener('scroll', onScroll);
    if (timer !== null) { clearInterval(timer); timer = null; }
    if (observer !== null) { observer.disconnect(); observer = null; }
  }

  function navigateTo(id) {
    var element = document.getElementById(id);
    if (!element) { return; }
    element.scrollIntoView({ behavior: 'smooth' });
    setMenuOpen(false);
  }

  document.querySelectorAll('[data-section]').forEach(function (el) {
    el.addEventListener('click', function () { navigateTo(el.getAttribute('data-section')); });
  });
  nav.querySelector('[data-scroll-top]').addEventListener('click', function () {
    window.scrollTo({ top: 0, behavior: 'smooth' });
  });
  toggle.addEventListener('click', function () { setMenuOpen(menu.hidden); });

  mount();
  window.addEventListener('pagehide', unmount);
  window.addEventListener('pageshow', function (event) {
    if (event.persisted) { mount(); }
  });
})();
"#;

/// Encode a string as a JavaScript literal that is safe inside `<script>`.
fn js_string(s: &str) -> String {
    serde_json::to_string(s)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace("</", "<\\/")
}

fn script(profile: &Profile, settings: &ControllerSettings) -> String {
    SCRIPT
        .replace("__THRESHOLD__", &settings.scroll_threshold.to_string())
        .replace("__INTERVAL_MS__", &settings.reveal_interval.as_millis().to_string())
        .replace("__TARGET__", &js_string(&profile.name))
}

fn section(id: SectionId, class: &str, body: String) -> String {
    format!(
        r#"<section id="{id}" class="{class}"><div class="container">{body}</div></section>"#,
        id = id.as_str(),
        class = class,
        body = body,
    )
}

fn hero(profile: &Profile, options: &PageOptions) -> String {
    let links: String = profile.hero_links.iter().map(social_link).collect();
    let hero = &profile.hero;

    format!(
        concat!(
            r#"<section id="{id}">"#,
            r#"<img class="hero-bg" src="{bg}" alt="Background">"#,
            r#"<div class="container hero-content">"#,
            r#"<span class="badge badge-outline">{badge}</span>"#,
            r#"<h1>{greeting}<span id="typed" class="typed" aria-label="{name}"></span><span class="cursor">|</span></h1>"#,
            r#"<p class="muted">A passionate <strong>{role}</strong> {tagline}</p>"#,
            r#"<p><button type="button" class="button primary" data-section="{projects}">View Projects</button> "#,
            r#"<button type="button" class="button" data-section="{contact}">Contact Me</button></p>"#,
            r#"<div class="social-links">{links}</div>"#,
            "</div></section>"
        ),
        id = SectionId::Hero.as_str(),
        bg = html_escape(&options.background_image),
        badge = html_escape(&hero.badge),
        greeting = html_escape(&hero.greeting),
        name = html_escape(&profile.name),
        role = html_escape(&hero.role),
        tagline = html_escape(&hero.tagline),
        projects = SectionId::Projects.as_str(),
        contact = SectionId::Contact.as_str(),
        links = links,
    )
}

fn about(profile: &Profile) -> String {
    let bio: String = profile
        .bio
        .iter()
        .map(|p| format!(r#"<p class="muted">{}</p>"#, html_escape(p)))
        .collect();
    let info: String = profile.info.iter().map(info_item).collect();
    let education: String = profile.education.iter().map(education_item).collect();

    section(
        SectionId::About,
        "alt",
        format!(
            concat!(
                r#"<div class="grid">"#,
                r#"<div data-reveal-once><h2>About Me</h2>{bio}<div class="info">{info}</div></div>"#,
                r#"<div class="card" data-reveal-once><h3>Education</h3>{education}</div>"#,
                "</div>"
            ),
            bio = bio,
            info = info,
            education = education,
        ),
    )
}

fn skills(profile: &Profile) -> String {
    let cards: String = profile.skills.iter().map(skill_card).collect();
    section(
        SectionId::Skills,
        "",
        format!(
            r#"<h2>Technical Skills</h2><p class="muted">{intro}</p><div class="grid">{cards}</div>"#,
            intro = html_escape(&profile.skills_intro),
            cards = cards,
        ),
    )
}

fn experience(profile: &Profile) -> String {
    let cards: String = profile.experience.iter().map(experience_card).collect();
    section(
        SectionId::Experience,
        "alt",
        format!(r#"<h2>Professional Experience</h2><div class="timeline">{}</div>"#, cards),
    )
}

fn projects(profile: &Profile) -> String {
    let cards: String = profile.projects.iter().map(project_card).collect();
    let achievements: String = profile.achievements.iter().map(achievement_tile).collect();
    section(
        SectionId::Projects,
        "",
        format!(
            concat!(
                r#"<h2>Featured Projects</h2><div class="grid">{cards}</div>"#,
                r#"<div class="card"><h3>Achievements</h3><div class="achievements">{achievements}</div></div>"#
            ),
            cards = cards,
            achievements = achievements,
        ),
    )
}

fn contact(profile: &Profile) -> String {
    let c = &profile.contact;
    section(
        SectionId::Contact,
        "",
        format!(
            concat!(
                r#"<div class="grid">"#,
                r#"<div><div data-reveal-once><p class="muted small">CALL ME DIRECTLY</p>"#,
                r#"<a class="contact-line" href="{phone_uri}">{phone}</a></div>"#,
                r#"<div data-reveal-once><p class="muted small">DROP ME AN EMAIL</p>"#,
                r#"<a class="contact-line" href="mailto:{email}">{email}</a></div></div>"#,
                r#"<div class="card" data-reveal-once><h3>{headline}</h3><p class="muted">{pitch}</p>"#,
                r#"<button type="button" class="button primary">{action}</button></div>"#,
                "</div>"
            ),
            phone_uri = html_escape(&c.phone_uri),
            phone = html_escape(&c.phone_display),
            email = html_escape(&c.email),
            headline = html_escape(&c.headline),
            pitch = html_escape(&c.pitch),
            action = html_escape(&c.action_label),
        ),
    )
}

fn footer(profile: &Profile, year: i32) -> String {
    let links: String = profile.footer_links.iter().map(social_link).collect();
    format!(
        r#"<footer><div class="container"><p>&copy; {year} {name}. All rights reserved.</p><div class="social-links">{links}</div></div></footer>"#,
        year = year,
        name = html_escape(&profile.name),
        links = links,
    )
}

/// Compose the full HTML document.
pub fn compose_page(profile: &Profile, options: &PageOptions) -> String {
    let body = [
        nav_bar(&profile.short_name),
        hero(profile, options),
        about(profile),
        skills(profile),
        experience(profile),
        projects(profile),
        contact(profile),
        footer(profile, options.year),
    ]
    .concat();

    format!(
        concat!(
            "<!DOCTYPE html>\n",
            r#"<html lang="en"><head><meta charset="utf-8">"#,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
            "<title>{title}</title><style>{style}</style></head>\n",
            r#"<body><a id="{top}"></a>{body}<script>{script}</script></body></html>"#,
            "\n"
        ),
        title = html_escape(&profile.name),
        style = STYLE,
        top = SectionId::Top.as_str(),
        body = body,
        script = script(profile, &options.settings),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn page() -> String {
        compose_page(&Profile::builtin(), &PageOptions::default())
    }

    #[test]
    fn test_section_anchors_present() {
        let html = page();
        for id in ["top", "hero", "about", "skills", "experience", "projects", "contact"] {
            assert!(html.contains(&format!(r#"id="{}""#, id)), "missing anchor {}", id);
        }
    }

    #[test]
    fn test_sections_in_document_order() {
        let html = page();
        let positions: Vec<usize> = ["hero", "about", "skills", "experience", "projects", "contact"]
            .iter()
            .map(|id| html.find(&format!(r#"<section id="{}""#, id)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_script_carries_settings() {
        let options = PageOptions {
            settings: ControllerSettings {
                scroll_threshold: 80,
                reveal_interval: Duration::from_millis(90),
            },
            ..PageOptions::default()
        };
        let html = compose_page(&Profile::builtin(), &options);
        assert!(html.contains("var THRESHOLD = 80;"));
        assert!(html.contains("var INTERVAL_MS = 90;"));
        assert!(html.contains(r#"var TARGET = "Mansi Gangani";"#));
    }

    #[test]
    fn test_script_target_cannot_close_script_tag() {
        let mut profile = Profile::builtin();
        profile.name = "</script><b>".to_string();
        let html = compose_page(&profile, &PageOptions::default());
        assert_eq!(html.matches("</script>").count(), 1);
    }

    #[test]
    fn test_script_remounts_after_back_forward_cache() {
        let html = page();
        assert!(html.contains("window.addEventListener('pagehide', unmount);"));
        assert!(html.contains("if (event.persisted) { mount(); }"));
        // Torn down and re-registered in the same place
        assert_eq!(html.matches("addEventListener('scroll', onScroll)").count(), 1);
        assert_eq!(html.matches("removeEventListener('scroll', onScroll)").count(), 1);
    }

    #[test]
    fn test_script_resumes_typing_and_reveals_only_pending() {
        let html = page();
        assert!(html.contains(
            "if (revealed < chars.length) { timer = setInterval(typeNext, INTERVAL_MS); }"
        ));
        assert!(html.contains("[data-reveal-once]:not(.revealed)"));
    }

    #[test]
    fn test_contact_handoff_links_have_no_target() {
        let html = page();
        let anchor = html.find(r#"href="tel:+917403518888""#).unwrap();
        let end = anchor + html[anchor..].find('>').unwrap();
        assert!(!html[anchor..end].contains("target="));
    }

    #[test]
    fn test_footer_uses_year_and_name() {
        let options = PageOptions {
            year: 2031,
            ..PageOptions::default()
        };
        let html = compose_page(&Profile::builtin(), &options);
        assert!(html.contains("&copy; 2031 Mansi Gangani. All rights reserved."));
    }

    #[test]
    fn test_background_image_referenced() {
        let html = page();
        assert!(html.contains(&format!(r#"src="{}""#, DEFAULT_BACKGROUND)));
    }
}
