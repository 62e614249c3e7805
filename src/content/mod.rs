#[cfg(not(target_arch = "wasm32"))]
mod validation;

#[cfg(not(target_arch = "wasm32"))]
pub use validation::{validate, ContentIssue};

pub const OWNER_NAME: &str = "Christian Fitzgerald";
pub const OWNER_FIRST_NAME: &str = "Christian";
pub const OWNER_TITLE: &str = "Full-Stack Developer";
pub const RESUME_PATH: &str = "/resume.pdf";
pub const PLACEHOLDER_GLYPH: &str = "🖼️";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    About,
    Projects,
    Experience,
    Contact,
}

impl SectionId {
    pub const ALL: [Self; 5] = [
        Self::Hero,
        Self::About,
        Self::Projects,
        Self::Experience,
        Self::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Experience => "experience",
            Self::Contact => "contact",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Experience => "Experience",
            Self::Contact => "Contact",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub tech: &'static [&'static str],
    pub tech_short: Option<&'static [&'static str]>,
    pub github: &'static str,
    pub demo: &'static str,
    pub featured: bool,
    pub hero_image: &'static str,
    pub images: &'static [&'static str],
    pub timeline: &'static str,
    pub team_size: &'static str,
    pub role: &'static str,
    pub key_features: &'static [&'static str],
    pub challenges: &'static [&'static str],
    pub outcomes: &'static [&'static str],
}

impl Project {
    pub fn summary_tech(&self) -> &'static [&'static str] {
        self.tech_short.unwrap_or(self.tech)
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    pub fn image_src(&self, index: usize) -> Option<String> {
        self.images.get(index).map(|name| asset_path(name))
    }

    pub fn hero_src(&self) -> String {
        asset_path(self.hero_image)
    }

    pub fn screenshot_alt(&self, index: usize) -> String {
        format!("{} screenshot {}", self.title, index + 1)
    }
}

pub fn asset_path(name: &str) -> String {
    format!("/{}", name.trim_start_matches('/'))
}

#[derive(Debug, PartialEq, Eq)]
pub struct Experience {
    pub company: &'static str,
    pub position: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
}

#[derive(Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    LinkedIn,
    GitHub,
}

impl ContactKind {
    pub fn icon(self) -> &'static str {
        match self {
            Self::Email => "✉",
            Self::LinkedIn => "in",
            Self::GitHub => "⌥",
        }
    }

    pub fn accent_class(self) -> &'static str {
        match self {
            Self::Email => "accent-teal",
            Self::LinkedIn => "accent-blue",
            Self::GitHub => "accent-emerald",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ContactMethod {
    pub kind: ContactKind,
    pub title: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub const STORY: [&str; 2] = [
    "With over 5 years of experience in full-stack development, I started when I was extremely young. \
     I remember being 11 and creating my first BATCH scripts on my primary school laptop.",
    "My name is Christian Fitzgerald, and I'm currently finishing Year 12 with plans to graduate in 2025. \
     I consider myself a full-stack web developer, with strong skills in building scalable web applications \
     that solve real-world problems. While I prefer working on full-stack web applications, I also have broad \
     knowledge across multiple technical areas, including backend REST APIs, CI/CD pipelines, network \
     engineering, software engineering, DevOps, and Linux server management. I'm passionate about creating \
     clean, efficient solutions and continuously expanding my skills to stay ahead in modern software \
     development.",
];

pub const TOOLS: &[&str] = &[
    "React",
    "Next.js",
    "TypeScript",
    "Node.js",
    "Python",
    "PostgreSQL",
    "MongoDB",
    "AWS",
    "Docker",
    "Git",
    "Linux",
    "Tailwind CSS",
];

pub const SKILLS: &[Skill] = &[
    Skill { name: "React/Next.js/Typescript", level: 90 },
    Skill { name: "Node.js", level: 100 },
    Skill { name: "PostgreSQL", level: 85 },
    Skill { name: "AWS/Cloud", level: 75 },
    Skill { name: "Docker", level: 80 },
    Skill { name: "Git", level: 90 },
    Skill { name: "Linux", level: 100 },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Consol8",
        description: "Unified inventory, production, ordering & accounting console",
        long_description: "A full-stack web application that centralizes product inventory, purchasing, \
            accounting, production and analytics workflows for businesses handling both raw ingredients and \
            finished goods. Modules cover ordering, stock movements across locations, customer and supplier \
            records, invoicing, reporting, sample stock tracking, accounting integrations and building / \
            manufacturing products.",
        tech: &[
            "NextJS 15 & React 18",
            "Typescript",
            "TRPC",
            "Prisma ORM & PostgreSQL",
            "Keycloak",
            "Tailwind CSS & Shadcn UI",
            "Redis",
            "Google Cloud",
            "Cloudflare R2",
            "Xero & MYOB",
            "Docker",
            "Bun & NPM",
            "Sendgrid",
        ],
        tech_short: Some(&["Next.js", "Typescript", "TRPC", "PostgreSQL", "Redis"]),
        github: "https://github.com/christianf7/Consol8",
        demo: "https://hub.consol8.com",
        featured: false,
        hero_image: "Consol8.png",
        images: &[
            "Consol8-5.png",
            "Consol8-1.png",
            "Consol8-2.png",
            "Consol8-3.png",
            "Consol8-4.png",
            "Consol8-6.png",
            "Consol8-7.png",
            "Consol8-8.png",
            "Consol8-9.png",
            "Consol8-10.png",
        ],
        timeline: "4 months",
        team_size: "Solo project",
        role: "Full-Stack Developer",
        key_features: &[
            "User authentication and authorization",
            "Product catalog with search and filtering",
            "Shopping cart and checkout process",
            "Payment integration with Stripe",
            "Admin dashboard for inventory management",
            "Responsive design for all devices",
        ],
        challenges: &[
            "Implementing secure payment processing",
            "Optimizing database queries for large product catalogs",
            "Building real-time inventory updates",
        ],
        outcomes: &[
            "Successfully processed $50K+ in transactions",
            "Achieved 99.9% uptime",
            "Reduced page load times by 40%",
        ],
    },
    Project {
        title: "El Arquero - Shopify Storefront",
        description: "Custom Shopify storefront with tailored design and SEO optimization",
        long_description: "A fully customized Shopify storefront for El Arquero Tequila, blending premium \
            brand storytelling with scalable e-commerce features and built-in SEO optimization.",
        tech: &["Shopify", "Liquid", "JavaScript", "Tailwind CSS", "SEO"],
        tech_short: None,
        github: "https://github.com/christianf7",
        demo: "https://elarquero.shop",
        featured: false,
        hero_image: "EL.png",
        images: &["EL-1.png", "EL-2.png", "EL-3.png"],
        timeline: "1 month",
        team_size: "Solo project",
        role: "Full-Stack Developer",
        key_features: &[
            "Custom Shopify Liquid sections",
            "Responsive, mobile-first layouts",
            "SEO-optimized structure for discoverability",
            "Recipe and cocktail showcase pages",
            "Optimized checkout experience",
        ],
        challenges: &[
            "Balancing brand storytelling with e-commerce usability",
            "Building scalable and reusable Liquid components",
            "Implementing SEO best practices for Shopify",
        ],
        outcomes: &[
            "Improved brand visibility through SEO optimization",
            "Delivered a scalable foundation for marketing campaigns",
            "Enhanced customer engagement with recipe showcases",
        ],
    },
    Project {
        title: "El Arquero - Coming Soon",
        description: "Landing page for El Arquero Tequila with email signup and brand showcase",
        long_description: "A sleek coming soon landing page built to introduce El Arquero Tequila, featuring \
            email capture, contact integration, and a modern brand-focused design.",
        tech: &["Next.js", "React", "SendGrid", "Tailwind CSS", "SEO Optimisation"],
        tech_short: None,
        github: "https://github.com/christianf7",
        demo: "https://elarquero.chrisfitz.dev",
        featured: false,
        hero_image: "ELL.png",
        images: &["ELL-1.png", "ELL-2.png", "ELL-3.png"],
        timeline: "1 week",
        team_size: "Solo project",
        role: "Full-Stack Developer",
        key_features: &[
            "Responsive landing page design",
            "Email signup with SendGrid integration",
            "Contact list management",
            "Brand showcase with hero imagery",
            "Optimized for fast loading and SEO",
        ],
        challenges: &[
            "Integrating SendGrid for secure email handling",
            "Designing a brand-first UI that matched client vision",
            "Ensuring responsive layouts across all devices",
        ],
        outcomes: &[
            "Built a scalable launch platform for brand awareness",
            "Successfully integrated email capture pipeline",
            "Optimized landing page with sub-1s load times",
        ],
    },
    Project {
        title: "Christian Fitzgerald - Portfolio",
        description: "Personal portfolio showcasing full-stack projects with SEO optimization",
        long_description: "A modern developer portfolio highlighting full-stack projects with a focus on \
            clean design, scalability, and SEO optimization for visibility.",
        tech: &["Rust", "Yew", "WebAssembly", "axum", "SEO"],
        tech_short: None,
        github: "https://github.com/christianf7/Portfolio",
        demo: "https://chrisfitz.dev",
        featured: false,
        hero_image: "Portfolio.png",
        images: &["Portfolio.png"],
        timeline: "2 weeks",
        team_size: "Solo project",
        role: "Full-Stack Developer",
        key_features: &[
            "Showcase of full-stack projects",
            "Responsive and mobile-first design",
            "SEO-optimized for discoverability",
            "Clean and modern UI",
            "Single static bundle served from one binary",
        ],
        challenges: &[
            "Structuring projects for clarity and scalability",
            "Ensuring consistent branding across pages",
            "Implementing strong SEO practices for higher ranking",
        ],
        outcomes: &[
            "Built a professional online presence",
            "Improved visibility through SEO optimization",
            "Created a scalable platform to showcase future work",
        ],
    },
];

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        company: "Freelance",
        position: "Web Developer",
        period: "2023 - Present",
        location: "Remote",
        description: "Built websites and applications for small businesses and startups.",
        achievements: &[
            "Completed 15+ private projects",
            "Maintained 100% client satisfaction",
            "Built scalable and reusable codebases",
        ],
    },
    Experience {
        company: "El Arquero Tequila",
        position: "IT",
        period: "2024 - Present",
        location: "Melbourne, AU",
        description: "Managed the IT infrastructure and website for El Arquero Tequila, including the Shopify \
            storefront and email marketing campaigns.",
        achievements: &[
            "Manage and upkeep Workspace, and other critical services for business",
            "Develop custom tooling and automation for business",
            "Managed email marketing campaigns",
            "Developed Consol8, a full-stack web application for inventory and accounting",
        ],
    },
    Experience {
        company: "Woolworths Mount Waverley",
        position: "Assistant Department Manager / Supervisor",
        period: "2021 - Present",
        location: "Melbourne, AU",
        description: "Manage the front end department at Woolworths Mount Waverley, including assisting \
            rostering, reporting, training, and daily upkeep of department",
        achievements: &[
            "Rolled out / maintained new online picking system",
            "Reached team supervisor at age of 17",
            "Often in charge of entire store when managers are absent",
        ],
    },
    Experience {
        company: "Hypera Development",
        position: "Java & Web Developer",
        period: "2020 - 2022",
        location: "Remote",
        description: "Developed custom Java plugins for Minecraft, including popular ones like UltraStaffChat",
        achievements: &["Contributed on a plugin used by hundreds of servers"],
    },
];

pub const CONTACT_METHODS: &[ContactMethod] = &[
    ContactMethod {
        kind: ContactKind::Email,
        title: "Email",
        value: "christian@chrisfitz.dev",
        href: "mailto:christian@chrisfitz.dev",
    },
    ContactMethod {
        kind: ContactKind::LinkedIn,
        title: "LinkedIn",
        value: "/in/christianf7",
        href: "https://linkedin.com/in/christianf7",
    },
    ContactMethod {
        kind: ContactKind::GitHub,
        title: "GitHub",
        value: "@christianf7",
        href: "https://github.com/christianf7",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_has_a_nav_label() {
        let ids: Vec<_> = SectionId::ALL.iter().map(|section| section.as_str()).collect();
        assert_eq!(ids, ["hero", "about", "projects", "experience", "contact"]);
        assert_eq!(SectionId::Hero.nav_label(), "Home");
    }

    #[test]
    fn summary_tech_falls_back_to_full_list() {
        let consol8 = &PROJECTS[0];
        assert_eq!(consol8.summary_tech().len(), 5);

        let storefront = &PROJECTS[1];
        assert_eq!(storefront.summary_tech(), storefront.tech);
    }

    #[test]
    fn image_paths_are_rooted() {
        let storefront = &PROJECTS[1];
        assert_eq!(storefront.image_src(0).as_deref(), Some("/EL-1.png"));
        assert_eq!(storefront.image_src(3), None);
        assert_eq!(asset_path("/already.png"), "/already.png");
        assert_eq!(storefront.screenshot_alt(2), "El Arquero - Shopify Storefront screenshot 3");
    }
}
