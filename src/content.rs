//! Static page content.
//!
//! All copy shown by the page sections lives here as module-scope literals.
//! Nothing in this module is ever mutated; renderers borrow it read-only.

/// Profile identity and external references.
#[derive(Debug, Clone, Copy)]
pub struct Profile {
    /// Full display name
    pub name: &'static str,
    /// Role tag shown above the headline
    pub role: &'static str,
    /// One-line tagline
    pub tagline: &'static str,
    /// Highlighted location inside the tagline
    pub location: &'static str,
    /// Contact email (rendered as a mailto: link)
    pub email: &'static str,
    /// Externally hosted profile photograph (opaque collaborator, not fetched)
    pub photo_url: &'static str,
    /// Static path to the downloadable resume
    pub resume_path: &'static str,
    /// Footer copyright line
    pub copyright: &'static str,
}

/// The profile presented by the page.
pub const PROFILE: Profile = Profile {
    name: "Nezar Saab",
    role: "Frontend Architect",
    tagline: "Engineering highly interactive digital experiences in",
    location: "Dubai",
    email: "nwa200079@gmail.com",
    photo_url: "https://i.ibb.co/yn24JrmR/headshot.png",
    resume_path: "/my-resume.pdf",
    copyright: "(c) 2025 Nezar Saab.",
};

/// External profile links shown in the hero.
pub const SOCIALS: [&str; 2] = ["GitHub", "LinkedIn"];

/// A service offering rendered as a themed card.
#[derive(Debug, Clone, Copy)]
pub struct Service {
    /// Card title
    pub title: &'static str,
    /// Card body copy
    pub desc: &'static str,
    /// Tag chips along the card bottom
    pub tags: &'static [&'static str],
}

/// The services grid ("I Engineer Value.").
pub const SERVICES: [Service; 5] = [
    Service {
        title: "Landing Pages",
        desc: "High-conversion single-page sites designed to capture leads. \
               Optimized for speed, SEO, and persuasive storytelling.",
        tags: &["Framer Motion", "Conversion", "SEO"],
    },
    Service {
        title: "Custom Web Apps",
        desc: "Complex SaaS platforms and dashboards. I build the logic, state \
               management, and API integrations for heavy-duty tools.",
        tags: &["React.js", "Next.js", "SaaS"],
    },
    Service {
        title: "Corporate Identity",
        desc: "Large-scale multi-page websites for established companies. CMS \
               integration (Sanity/Strapi) for easy content updates.",
        tags: &["CMS", "Brand Consistency", "Scale"],
    },
    Service {
        title: "Portfolio Websites",
        desc: "Personal branding sites (like this one) for executives and \
               creatives. Interactive, memorable, and unique.",
        tags: &["Personal Brand", "Interactive", "3D"],
    },
    Service {
        title: "E-Commerce / Commercial",
        desc: "Shopify Headless or Custom Next.js stores. Focused on user \
               experience, cart logic, and payment gateway security.",
        tags: &["Stripe", "Shopify", "UI/UX"],
    },
];

/// A stack entry in the skills grid.
#[derive(Debug, Clone, Copy)]
pub struct Stack {
    /// Technology name
    pub title: &'static str,
    /// Short qualifier
    pub sub: &'static str,
}

/// The stack cards in the "Built for Scale" grid.
pub const STACKS: [Stack; 4] = [
    Stack {
        title: "Next.js 14",
        sub: "App Router",
    },
    Stack {
        title: "React Core",
        sub: "Performance",
    },
    Stack {
        title: "TypeScript",
        sub: "Strict Typing",
    },
    Stack {
        title: "State Mgmt",
        sub: "Redux / Zustand",
    },
];

/// Lead card copy for the skills grid.
pub const SKILLS_LEAD_TITLE: &str = "Frontend Lead";
/// Lead card body for the skills grid.
pub const SKILLS_LEAD_BODY: &str = "Delivering high-stakes projects at Ava Five. \
                                    Specializing in complex architecture.";
/// Lead card tag chips.
pub const SKILLS_LEAD_TAGS: [&str; 3] = ["React", "Dubai", "Fintech"];

/// A position in the experience timeline.
#[derive(Debug, Clone, Copy)]
pub struct Job {
    /// Company name
    pub company: &'static str,
    /// Role title
    pub role: &'static str,
    /// Employment period
    pub period: &'static str,
    /// Location and arrangement
    pub location: &'static str,
    /// Achievement bullet points
    pub bullets: &'static [&'static str],
    /// Skill chips
    pub skills: &'static [&'static str],
}

/// The experience timeline, most recent first.
pub const JOBS: [Job; 2] = [
    Job {
        company: "khales.ae",
        role: "Software Engineer (Next.js & React)",
        period: "Feb 2025 - Present",
        location: "Dubai, UAE - On-site",
        bullets: &[
            "Architecting a large-scale, multilingual project management \
             platform (Arabic/English) using Next.js 14 and SSR for maximum \
             SEO performance.",
            "Managing complex global state and real-time data synchronization \
             using Context API and TypeScript to ensure 99.9% data accuracy.",
            "Establishing the component library architecture with Tailwind \
             CSS, reducing development time for new features by ~40%.",
        ],
        skills: &["Next.js 14", "TypeScript", "Performance Architecture", "SSR/SSG"],
    },
    Job {
        company: "Avafive",
        role: "Frontend Developer",
        period: "Apr 2024 - Dec 2024",
        location: "Dubai, UAE - Hybrid",
        bullets: &[
            "Delivered interactive Fintech dashboards translating complex \
             financial data into intuitive React UI components.",
            "Optimized application core vitals by implementing lazy loading \
             and code-splitting, resulting in sub-second load times.",
            "Collaborated directly with backend teams to integrate secure \
             RESTful APIs and managed scaleable Redux state logic.",
        ],
        skills: &["React.js", "Redux Toolkit", "Fintech UX", "API Integration"],
    },
];
