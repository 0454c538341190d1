//! Static page content
//!
//! Everything the pages display lives here as constants so the web crate
//! stays pure layout.

/// Company name shown in the header
pub const BRAND: &str = "Acts9 IT Services";

pub const FOOTER_LINES: [&str; 2] = [
    "Acts9 IT Services — Managed IT & Web Development from the Philippines, proudly serving businesses worldwide.",
    "Office: Manila (Remote-capable)",
];

/// Landing hero
pub struct Hero {
    pub headline: &'static str,
    pub tagline: &'static str,
    pub intro: &'static str,
    pub primary_cta: &'static str,
    pub secondary_cta: &'static str,
}

pub const HERO: Hero = Hero {
    headline: "Managed IT Services & Web Development",
    tagline: "Reliable, Scalable IT & Web Solutions for Global Businesses",
    intro: "Your trusted partner in managed IT services — from desktop support to cloud and custom web development — powered by a professional and dedicated team at Acts9 IT Services, based in the Philippines.",
    primary_cta: "Get a Free IT Health Check",
    secondary_cta: "Book a Consultation",
};

/// A card on the Services page
pub struct ServiceOffering {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub const SERVICES_HEADING: &str = "Our Services";

pub static SERVICES: [ServiceOffering; 4] = [
    ServiceOffering {
        title: "Helpdesk & Desktop Support",
        items: &[
            "Proactive monitoring",
            "Troubleshooting (Windows/macOS)",
            "Application & patch management",
            "Hardware & software asset tracking",
        ],
    },
    ServiceOffering {
        title: "Server Support & Management",
        items: &[
            "Windows & Linux server management",
            "Active Directory & domain support",
            "Backup & disaster recovery",
            "24/7 uptime monitoring",
        ],
    },
    ServiceOffering {
        title: "Cloud Support – AWS & Azure Experts",
        items: &[
            "Cloud instance deployment & scaling",
            "Azure AD / Identity management",
            "AWS EC2, S3, RDS, and backup services",
            "Migrations, licensing, and billing optimization",
        ],
    },
    ServiceOffering {
        title: "Website Development & Support",
        items: &[
            "WordPress, Shopify, and custom builds",
            "Ongoing maintenance & content updates",
            "SEO-friendly & mobile optimized",
            "Web hosting and security (SSL, backups)",
        ],
    },
];

/// A tier on the Plans page
pub struct PlanTier {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub items: &'static [&'static str],
    /// Rendered with the inverted card style
    pub highlight: bool,
}

pub const PLANS_HEADING: &str = "Service Plans";

pub static PLANS: [PlanTier; 3] = [
    PlanTier {
        title: "Startup Support",
        subtitle: "Best for small businesses",
        items: &[
            "Helpdesk (business hours)",
            "Server maintenance",
            "Basic web support",
        ],
        highlight: false,
    },
    PlanTier {
        title: "Business Pro",
        subtitle: "Most Popular",
        items: &[
            "24/7 helpdesk",
            "Full server & cloud management",
            "Website management (up to 2 sites)",
        ],
        highlight: true,
    },
    PlanTier {
        title: "Enterprise Care",
        subtitle: "For growing teams",
        items: &[
            "Dedicated remote IT staff",
            "AWS/Azure provisioning",
            "Priority response SLA",
            "Custom web dev projects",
        ],
        highlight: false,
    },
];

impl PlanTier {
    pub const fn card_class(&self) -> &'static str {
        if self.highlight {
            "bg-blue-900 text-white"
        } else {
            "bg-white text-gray-800"
        }
    }
}

pub struct AboutBlurb {
    pub title: &'static str,
    pub text: &'static str,
}

pub const ABOUT_HEADING: &str = "Why Choose Acts9 IT Services?";

pub static ABOUT: [AboutBlurb; 3] = [
    AboutBlurb {
        title: "Skilled Filipino IT Talent",
        text: "Our team of certified IT professionals is based in the Philippines, delivering world-class services at competitive rates — without compromising quality or response times.",
    },
    AboutBlurb {
        title: "Global Mindset, Local Expertise",
        text: "We understand the needs of modern businesses around the world and tailor our solutions to your timezone, compliance requirements, and industry standards.",
    },
    AboutBlurb {
        title: "24/7 Support – With Real Humans",
        text: "Our support never sleeps. Whether it’s an urgent desktop issue, a downed website, or a cloud performance check — we’re on it.",
    },
];

/// Copy and direct details on the Contact page
pub struct ContactDetails {
    pub heading: &'static str,
    pub intro: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
}

pub const CONTACT: ContactDetails = ContactDetails {
    heading: "Let’s Talk",
    intro: "Ready to transform your IT operations and digital presence?",
    email: "support@acts9it.com",
    phone: "+63 917000000",
};

impl ContactDetails {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}
