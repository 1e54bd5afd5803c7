use chrono::{DateTime, Datelike};

pub const OWNER: &str = "Manuga Dewhan";
pub const INITIALS: &str = "MD";
pub const ROLE: &str = "Software Engineering Undergraduate & Full-Stack Developer";
pub const SUMMARY: &str = "I build web and mobile products end to end, from database schema to the last hover state. \
Currently studying at the Faculty of Technology, University of Colombo, and always looking for teams that care about craft.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// devicon class name
    pub icon: &'static str,
    pub color: &'static str,
}

pub const SKILLS: &[Skill] = &[
    Skill {
        name: "HTML5",
        icon: "devicon-html5-plain",
        color: "#E34F26",
    },
    Skill {
        name: "CSS3",
        icon: "devicon-css3-plain",
        color: "#1572B6",
    },
    Skill {
        name: "JavaScript",
        icon: "devicon-javascript-plain",
        color: "#F7DF1E",
    },
    Skill {
        name: "React",
        icon: "devicon-react-original",
        color: "#61DAFB",
    },
    Skill {
        name: "Node.js",
        icon: "devicon-nodejs-plain",
        color: "#339933",
    },
    Skill {
        name: "Express.js",
        icon: "devicon-express-original",
        color: "#888888",
    },
    Skill {
        name: "MySQL",
        icon: "devicon-mysql-plain",
        color: "#4479A1",
    },
    Skill {
        name: "MongoDB",
        icon: "devicon-mongodb-plain",
        color: "#4DB33D",
    },
    Skill {
        name: "Git",
        icon: "devicon-git-plain",
        color: "#F1502F",
    },
    Skill {
        name: "GitHub",
        icon: "devicon-github-original",
        color: "#ffffff",
    },
    Skill {
        name: "Bootstrap",
        icon: "devicon-bootstrap-plain",
        color: "#7952B3",
    },
    Skill {
        name: "Python",
        icon: "devicon-python-plain",
        color: "#3776AB",
    },
    Skill {
        name: "C",
        icon: "devicon-c-plain",
        color: "#A8B9CC",
    },
    Skill {
        name: "Android Studio",
        icon: "devicon-androidstudio-plain",
        color: "#3DDC84",
    },
    Skill {
        name: "Adobe Illustrator",
        icon: "devicon-illustrator-plain",
        color: "#FF9A00",
    },
    Skill {
        name: "TailwindCSS",
        icon: "devicon-tailwindcss-original",
        color: "#38BDF8",
    },
    Skill {
        name: "Figma",
        icon: "devicon-figma-plain",
        color: "#A259FF",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Certification {
    pub title: &'static str,
    pub issuer: &'static str,
    pub issued: &'static str,
    pub credential_id: Option<&'static str>,
    pub badge: &'static str,
    pub link: &'static str,
}

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        title: "Building GenAI Apps Learning Badge Path",
        issuer: "MongoDB",
        issued: "Issued Aug 2025",
        credential_id: Some("MDBjf6rb97i7g"),
        badge: "/images/certs/mongodb.png",
        link: "https://www.credly.com/badges/1a37b529-2720-44fe-a818-b847f2514315",
    },
    Certification {
        title: "Python Essentials 1",
        issuer: "Cisco Networking Academy",
        issued: "Issued Sep 2025",
        credential_id: None,
        badge: "/images/certs/python.png",
        link: "https://www.credly.com/badges/5de04f84-cdbb-483a-905e-e422a3d14d40/public_url",
    },
    Certification {
        title: "Oracle Cloud Infrastructure 2025 Certified Foundations Associate",
        issuer: "Oracle",
        issued: "Issued Jul 2025 · Expires Jul 2027",
        credential_id: None,
        badge: "/images/certs/oracle.png",
        link: "https://catalog-education.oracle.com/ords/certview/sharebadge?id=218F5E441C02A20EAC5851CB25F622A28CEF886B9516C1E16DA94DE04C0AEC3F",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub institution: &'static str,
    pub qualification: &'static str,
    pub period: &'static str,
    pub details: &'static str,
}

pub const EDUCATION: &[Education] = &[
    Education {
        institution: "Faculty of Technology, University of Colombo",
        qualification: "Bachelor of Information and Communication Technology (Hons)",
        period: "2022 - Present",
        details: "Software engineering, database systems, mobile application development and human-computer interaction.",
    },
    Education {
        institution: "Secondary School",
        qualification: "G.C.E. Advanced Level - Technology Stream",
        period: "2018 - 2020",
        details: "Engineering technology, science for technology and information and communication technology.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactInfo {
    pub label: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
    pub accent: &'static str,
}

pub const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo {
        label: "Email",
        value: "manuga.dewhan@gmail.com",
        href: Some("mailto:manuga.dewhan@gmail.com"),
        accent: "from-sky-400 to-cyan-400",
    },
    ContactInfo {
        label: "Phone",
        value: "+94 76 855 1950",
        href: Some("tel:+94768551950"),
        accent: "from-emerald-400 to-teal-400",
    },
    ContactInfo {
        label: "Location",
        value: "Colombo, Sri Lanka",
        href: None,
        accent: "from-violet-400 to-purple-400",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        icon: "devicon-github-plain",
        href: "https://github.com/ManugaK",
    },
    SocialLink {
        label: "LinkedIn",
        icon: "devicon-linkedin-plain",
        href: "https://www.linkedin.com/in/manuga-dewhan",
    },
];

/// Year the site was built, for the footer.
pub fn build_year() -> Option<i32> {
    year_of(env!("BUILD_TIME"))
}

fn year_of(timestamp: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|t| t.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_time_is_stamped() {
        assert!(build_year().is_some_and(|y| y >= 2025));
    }

    #[test]
    fn year_of_rejects_garbage() {
        assert_eq!(year_of("2025-03-01T10:00:00+00:00"), Some(2025));
        assert_eq!(year_of("yesterday"), None);
    }

    #[test]
    fn skill_names_unique() {
        let mut names = SKILLS.iter().map(|s| s.name).collect::<Vec<_>>();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SKILLS.len());
    }

    #[test]
    fn contact_links_are_absolute() {
        assert!(CONTACT_INFO
            .iter()
            .filter_map(|c| c.href)
            .all(|h| h.starts_with("mailto:") || h.starts_with("tel:")));
        assert!(SOCIAL_LINKS.iter().all(|s| s.href.starts_with("https://")));
        assert!(CERTIFICATIONS.iter().all(|c| c.link.starts_with("https://")));
    }
}
