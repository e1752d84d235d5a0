//! The built-in profile shipped with the binary.

use crate::profile::{
    Achievement, ContactCard, EducationEntry, ExperienceEntry, Hero, Icon, InfoItem, Profile,
    ProjectEntry, SkillGroup, SocialLink,
};

const GITHUB_URL: &str = "https://github.com/Mansi-126";
const LINKEDIN_URL: &str = "https://www.linkedin.com/in/mansi-gangani-394334293/?utm_source=share&utm_campaign=share_via&utm_content=profile&utm_medium=android_app";
const TWITTER_URL: &str = "https://x.com/Mansi_126?t=gWQb5OJa3N6f43P31EfWag&s=09";
const EMAIL: &str = "mansigangani126@gamil.com";
const PHONE_DISPLAY: &str = "+91 74035 18888";
const PHONE_URI: &str = "tel:+917403518888";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn profile_links() -> Vec<SocialLink> {
    vec![
        SocialLink::new(GITHUB_URL, Icon::Github, "GitHub"),
        SocialLink::new(LINKEDIN_URL, Icon::Linkedin, "LinkedIn"),
        SocialLink::new(TWITTER_URL, Icon::Twitter, "Twitter"),
    ]
}

impl Profile {
    /// The hardcoded page content.
    pub fn builtin() -> Self {
        let mut hero_links = profile_links();
        hero_links.push(SocialLink::new(format!("mailto:{}", EMAIL), Icon::Mail, "Email"));

        Self {
            name: "Mansi Gangani".to_string(),
            short_name: "Mansi".to_string(),
            hero: Hero {
                badge: "Available for Hire".to_string(),
                greeting: "Hi, I'm ".to_string(),
                role: "Full Stack Developer".to_string(),
                tagline: "building efficient and scalable web applications with modern technologies.".to_string(),
            },
            bio: strings(&[
                "I am an aspiring Full Stack Web Developer with a strong passion for building efficient and user-friendly web applications. Experienced with both front-end and back-end development using modern frameworks and tools.",
                "Quick to adapt, eager to take on challenges, and committed to continuous improvement through real-world project experience and problem-solving. Currently pursuing my Bachelor of Engineering in Information Technology.",
            ]),
            info: vec![
                InfoItem {
                    icon: Icon::MapPin,
                    text: "Bhavnagar, Gujarat".to_string(),
                },
                InfoItem {
                    icon: Icon::Mail,
                    text: EMAIL.to_string(),
                },
                InfoItem {
                    icon: Icon::Phone,
                    text: PHONE_DISPLAY.to_string(),
                },
                InfoItem {
                    icon: Icon::Globe,
                    text: "Open to Remote".to_string(),
                },
            ],
            education: vec![
                EducationEntry {
                    label: "Pursuing".to_string(),
                    degree: "B.E. Information Technology".to_string(),
                    institution: "Shantilal Shah Engineering College (GTU)".to_string(),
                    grade: Some("CGPA: 8.35".to_string()),
                },
                EducationEntry {
                    label: "2022".to_string(),
                    degree: "Class 12th (GSEB)".to_string(),
                    institution: "Shree Swaminarayan Gurukul, Sardarnagar".to_string(),
                    grade: None,
                },
                EducationEntry {
                    label: "2020".to_string(),
                    degree: "Class 10th (SSC)".to_string(),
                    institution: "Shree Swaminarayan Gurukul, Sardarnagar".to_string(),
                    grade: None,
                },
            ],
            skills_intro: "My technical toolkit includes a wide range of languages, frameworks, \
                           and tools for full-stack development."
                .to_string(),
            skills: vec![
                SkillGroup {
                    title: "Frontend".to_string(),
                    icon: Icon::Code,
                    skills: strings(&[
                        "HTML5",
                        "CSS3",
                        "JavaScript",
                        "React.js",
                        "Tailwind CSS",
                        "Redux",
                    ]),
                },
                SkillGroup {
                    title: "Backend".to_string(),
                    icon: Icon::Server,
                    skills: strings(&["Node.js", "Express.js", "RESTful APIs"]),
                },
                SkillGroup {
                    title: "Database".to_string(),
                    icon: Icon::Database,
                    skills: strings(&["MongoDB", "Mongoose"]),
                },
                SkillGroup {
                    title: "Tools & Others".to_string(),
                    icon: Icon::Terminal,
                    skills: strings(&[
                        "Git & GitHub",
                        "VS Code",
                        "Postman",
                        "Cursor",
                        "Problem Solving",
                    ]),
                },
            ],
            experience: vec![ExperienceEntry {
                role: "Backend Developer Intern".to_string(),
                organization: "99partners Pvt Limited".to_string(),
                duration: "5 Months".to_string(),
                status: "Ongoing".to_string(),
                responsibilities: strings(&[
                    "Spearheaded backend development for two live production projects using Node.js/Express.js.",
                    "Designed and implemented robust RESTful APIs with seamless MongoDB integration.",
                    "Led research and integration of ONDC (Open Network for Digital Commerce) API for decentralized e-commerce capabilities.",
                ]),
            }],
            projects: vec![
                ProjectEntry {
                    title: "InProfile".to_string(),
                    description: "A modern portfolio builder web application allowing users to effortlessly create and manage professional portfolios.".to_string(),
                    link: "https://inprofile.co".to_string(),
                    tags: strings(&["React.js", "Node.js", "Express", "MongoDB", "CSS"]),
                    features: strings(&[
                        "Customizable sections (About, Projects, Skills)",
                        "Real-time previews & mobile-responsive templates",
                        "User authentication & unique portfolio URLs",
                    ]),
                },
                ProjectEntry {
                    title: "Placement Portal".to_string(),
                    description: "A job portal platform enabling students to store academic details and companies to manage job openings.".to_string(),
                    link: "#".to_string(),
                    tags: strings(&["React.js", "Node.js", "Express", "MongoDB"]),
                    features: strings(&[
                        "Company registration & job posting features",
                        "Role-based system (Student, Company, Admin)",
                        "Secure authentication & separate dashboards",
                    ]),
                },
            ],
            achievements: vec![
                Achievement {
                    emoji: "🏆".to_string(),
                    text: "1st Place in District Level Hackathon (Bhavnagar)".to_string(),
                },
                Achievement {
                    emoji: "💻".to_string(),
                    text: "Participant in Milople Hackathon".to_string(),
                },
                Achievement {
                    emoji: "🚀".to_string(),
                    text: "Built Full Stack Projects with Real-world Tech".to_string(),
                },
            ],
            contact: ContactCard {
                phone_display: PHONE_DISPLAY.to_string(),
                phone_uri: PHONE_URI.to_string(),
                email: EMAIL.to_string(),
                headline: "Let's build something amazing".to_string(),
                pitch: "Have a project in mind? Let's collaborate to bring your ideas to life with modern web technologies.".to_string(),
                action_label: "Contact us".to_string(),
            },
            hero_links,
            footer_links: profile_links(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_name_is_thirteen_chars() {
        let profile = Profile::builtin();
        assert_eq!(profile.name, "Mansi Gangani");
        assert_eq!(profile.name.chars().count(), 13);
    }

    #[test]
    fn test_builtin_placeholder_project() {
        let profile = Profile::builtin();
        assert_eq!(profile.projects[1].link, "#");
    }

    #[test]
    fn test_builtin_education_order_as_authored() {
        let labels: Vec<String> = Profile::builtin()
            .education
            .into_iter()
            .map(|e| e.label)
            .collect();
        assert_eq!(labels, ["Pursuing", "2022", "2020"]);
    }
}
