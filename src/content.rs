//! Static copy and baselines.
//!
//! Everything here is immutable `'static` data handed to sections and
//! renderers; nothing mutates it at runtime.

use serde::Serialize;

/// Vendor name shown in headers.
pub const BRAND: &str = "Ragentech";

/// Site key of the contact form's CAPTCHA widget. Static configuration only.
pub const CAPTCHA_SITE_KEY: &str = "6LdkVGorAAAAAOOh4KCYyzkHRQQxsMtmQ0Z2_RGt";

/// Rotating hero headlines.
pub const TAGLINES: &[&str] = &[
    "AI-Powered IoT Management",
    "Predictive Analytics Engine",
    "Smart Device Control",
    "Real-time Monitoring",
];

pub const HERO_BLURB: &str = "Advanced AI-integrated IoT management platform for real-time \
telemetry monitoring, predictive analytics, and smart device control for enterprise clients.";

/// Hero counters: (label, value).
pub const HERO_STATS: &[(&str, &str)] = &[
    ("Devices Managed", "10K+"),
    ("Uptime", "99.9%"),
    ("Cost Reduction", "40%"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Baseline for a failure prediction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionSeed {
    pub equipment: &'static str,
    pub prediction: &'static str,
    pub confidence: f64,
    pub timeframe: &'static str,
    pub severity: Severity,
    pub recommendation: &'static str,
    pub cost_impact: &'static str,
}

/// Predictions shown on the landing page engine section.
pub const ENGINE_PREDICTIONS: &[PredictionSeed] = &[
    PredictionSeed {
        equipment: "Motor Unit #A-102",
        prediction: "Bearing Failure",
        confidence: 87.0,
        timeframe: "3 days",
        severity: Severity::High,
        recommendation: "Replace bearing assembly",
        cost_impact: "$12,500",
    },
    PredictionSeed {
        equipment: "Zone B Sensors",
        prediction: "Temperature Spike",
        confidence: 92.0,
        timeframe: "1 week",
        severity: Severity::Medium,
        recommendation: "Calibrate temperature sensors",
        cost_impact: "$3,200",
    },
    PredictionSeed {
        equipment: "System C Valves",
        prediction: "Pressure Drop",
        confidence: 78.0,
        timeframe: "2 weeks",
        severity: Severity::Low,
        recommendation: "Inspect pressure valves",
        cost_impact: "$1,800",
    },
];

/// Predictions shown on the dashboard's predictive panel.
pub const PANEL_PREDICTIONS: &[PredictionSeed] = &[
    PredictionSeed {
        equipment: "Motor Unit A-102",
        prediction: "Bearing Failure",
        confidence: 87.0,
        timeframe: "3 days",
        severity: Severity::High,
        recommendation: "Schedule immediate bearing replacement",
        cost_impact: "$12,500",
    },
    PredictionSeed {
        equipment: "Temperature Controller B-205",
        prediction: "Calibration Drift",
        confidence: 92.0,
        timeframe: "1 week",
        severity: Severity::Medium,
        recommendation: "Perform sensor calibration",
        cost_impact: "$3,200",
    },
    PredictionSeed {
        equipment: "Pressure Valve C-301",
        prediction: "Seal Degradation",
        confidence: 78.0,
        timeframe: "2 weeks",
        severity: Severity::Low,
        recommendation: "Monitor closely, plan maintenance",
        cost_impact: "$1,800",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaintenanceTask {
    pub task: &'static str,
    pub priority: &'static str,
    pub estimated_time: &'static str,
    pub cost_savings: &'static str,
}

pub const MAINTENANCE_QUEUE: &[MaintenanceTask] = &[
    MaintenanceTask {
        task: "Replace bearing assembly in Motor Unit #A-102",
        priority: "Critical",
        estimated_time: "4 hours",
        cost_savings: "$12,500",
    },
    MaintenanceTask {
        task: "Calibrate temperature sensors in Zone B",
        priority: "Medium",
        estimated_time: "2 hours",
        cost_savings: "$3,200",
    },
    MaintenanceTask {
        task: "Inspect pressure valves in System C",
        priority: "Low",
        estimated_time: "1 hour",
        cost_savings: "$1,800",
    },
];

/// Connectivity state of a managed device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceState {
    Online,
    Warning,
    Offline,
}

impl DeviceState {
    pub fn label(&self) -> &'static str {
        match self {
            DeviceState::Online => "online",
            DeviceState::Warning => "warning",
            DeviceState::Offline => "offline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceSeed {
    pub name: &'static str,
    pub location: &'static str,
    pub state: DeviceState,
    pub health: f64,
    pub last_update: &'static str,
}

pub const DEVICES: &[DeviceSeed] = &[
    DeviceSeed {
        name: "Temperature Sensor #A-101",
        location: "Building A - Floor 1",
        state: DeviceState::Online,
        health: 98.0,
        last_update: "2 min ago",
    },
    DeviceSeed {
        name: "Pressure Monitor #B-205",
        location: "Building B - Floor 2",
        state: DeviceState::Warning,
        health: 87.0,
        last_update: "1 min ago",
    },
    DeviceSeed {
        name: "Voltage Regulator #C-302",
        location: "Building C - Floor 3",
        state: DeviceState::Online,
        health: 95.0,
        last_update: "30 sec ago",
    },
    DeviceSeed {
        name: "Flow Meter #A-150",
        location: "Building A - Basement",
        state: DeviceState::Offline,
        health: 0.0,
        last_update: "15 min ago",
    },
    DeviceSeed {
        name: "Humidity Control #B-101",
        location: "Building B - Floor 1",
        state: DeviceState::Online,
        health: 92.0,
        last_update: "1 min ago",
    },
    DeviceSeed {
        name: "Power Monitor #C-401",
        location: "Building C - Floor 4",
        state: DeviceState::Online,
        health: 99.0,
        last_update: "45 sec ago",
    },
];

/// Region filter options; `all` disables filtering.
pub const REGIONS: &[&str] = &["all", "Building A", "Building B", "Building C"];

/// Category filter options; `all` disables filtering.
pub const CATEGORIES: &[&str] = &["all", "Temperature", "Pressure", "Voltage", "Flow", "Humidity", "Power"];

/// (title, description) pairs for the architecture stack, bottom to top.
pub const ARCHITECTURE_LAYERS: &[(&str, &str)] = &[
    ("IoT Devices", "Smart sensors and controllers"),
    ("Secure Gateway", "Encrypted data transmission"),
    ("Cloud Platform", "Scalable infrastructure"),
    ("AI Engine", "Machine learning algorithms"),
    ("Data Lake", "Historical data storage"),
    ("Real-time Analytics", "Live insights and alerts"),
];

/// Pipeline steps under the architecture diagram.
pub const ARCHITECTURE_FLOW: &[(&str, &str)] = &[
    ("Data Collection", "IoT sensors collect real-time telemetry from equipment and the environment."),
    ("Secure Transmission", "Data is encrypted and sent through secure gateways to the cloud."),
    ("AI Processing", "Machine learning analyzes patterns and generates predictive insights."),
    ("Actionable Insights", "Alerts and recommendations reach the dashboard and mobile devices."),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UseCase {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
}

pub const USE_CASES: &[UseCase] = &[
    UseCase {
        title: "Smart Buildings",
        subtitle: "Intelligent facility management",
        description: "AI-powered HVAC control, occupancy monitoring and predictive maintenance for energy-efficient commercial spaces.",
    },
    UseCase {
        title: "Smart Factories",
        subtitle: "Industry 4.0 manufacturing",
        description: "Real-time production monitoring, quality control automation and predictive equipment maintenance.",
    },
    UseCase {
        title: "Agri-IoT",
        subtitle: "Precision agriculture solutions",
        description: "Smart irrigation, soil monitoring, weather prediction and automated control of farming equipment.",
    },
    UseCase {
        title: "Energy Management",
        subtitle: "Smart grid optimization",
        description: "Intelligent grid management, renewable integration and demand response automation.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Whitepaper,
    CaseStudy,
    Video,
    Guide,
}

impl ResourceKind {
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Whitepaper => "Whitepaper",
            ResourceKind::CaseStudy => "Case Study",
            ResourceKind::Video => "Video",
            ResourceKind::Guide => "Guide",
        }
    }
}

/// Downloadable item in the resource hub.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resource {
    pub kind: ResourceKind,
    pub category: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub author: &'static str,
    pub read_time: &'static str,
    pub downloads: &'static str,
}

pub const RESOURCES: &[Resource] = &[
    Resource {
        kind: ResourceKind::Whitepaper,
        category: "Industry Report",
        title: "The Future of Industrial IoT: AI-Driven Predictive Maintenance",
        description: "How AI-powered predictive maintenance cuts operating costs by up to 40% and prevents 90% of unexpected equipment failures.",
        author: "Dr. Sarah Chen, IoT Research Director",
        read_time: "12 min read",
        downloads: "2.3K",
    },
    Resource {
        kind: ResourceKind::CaseStudy,
        category: "Case Study",
        title: "Smart Factory Transformation: 300% ROI in 18 Months",
        description: "A Fortune 500 manufacturer rolled the platform out across 15 production facilities.",
        author: "Manufacturing Excellence Team",
        read_time: "8 min read",
        downloads: "1.8K",
    },
    Resource {
        kind: ResourceKind::Video,
        category: "Product Demo",
        title: "AI Predictive Analytics Demo: Live Equipment Monitoring",
        description: "Models analyze live sensor data, detect anomalies and predict failures before they occur.",
        author: "Technical Team",
        read_time: "15 min video",
        downloads: "5.2K",
    },
    Resource {
        kind: ResourceKind::Guide,
        category: "Implementation Guide",
        title: "IoT Implementation Guide: From Pilot to Production",
        description: "Rolling out IoT at enterprise scale: practices, pitfalls and success metrics.",
        author: "Implementation Specialists",
        read_time: "20 min read",
        downloads: "3.1K",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlogPost {
    pub category: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub published: &'static str,
}

/// Blog previews under the resource hub.
pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        category: "AI & Machine Learning",
        title: "How Machine Learning Transforms Equipment Maintenance",
        summary: "Models that predict failures before they occur and keep assets performing.",
        published: "2 days ago",
    },
    BlogPost {
        category: "Security",
        title: "5 IoT Security Best Practices for Industrial Networks",
        summary: "Device authentication, encryption, continuous monitoring and threat detection for plant networks.",
        published: "1 week ago",
    },
    BlogPost {
        category: "Technology",
        title: "Edge Computing in IoT: Reducing Latency and Costs",
        summary: "Processing data where it is generated for faster real-time analytics.",
        published: "2 weeks ago",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Price {
    Monthly(u32),
    Custom,
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Price::Monthly(p) => write!(f, "${}/month", p),
            Price::Custom => f.write_str("Custom"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plan {
    pub name: &'static str,
    pub price: Price,
    pub description: &'static str,
    pub popular: bool,
    pub features: &'static [&'static str],
}

pub const PLANS: &[Plan] = &[
    Plan {
        name: "Basic",
        price: Price::Monthly(299),
        description: "Perfect for small to medium businesses getting started with IoT",
        popular: false,
        features: &[
            "Up to 100 IoT devices",
            "Real-time monitoring dashboard",
            "Basic AI analytics",
            "Email alerts",
            "24/7 support",
            "Mobile app access",
            "Data retention (30 days)",
            "API access",
        ],
    },
    Plan {
        name: "Pro",
        price: Price::Monthly(899),
        description: "Advanced features for growing enterprises with complex requirements",
        popular: true,
        features: &[
            "Up to 1,000 IoT devices",
            "Advanced AI predictive analytics",
            "Custom dashboard builder",
            "Real-time alerts & notifications",
            "Priority support",
            "White-label mobile app",
            "Data retention (1 year)",
            "Advanced API & webhooks",
            "Custom integrations",
            "Dedicated account manager",
        ],
    },
    Plan {
        name: "Enterprise",
        price: Price::Custom,
        description: "Tailored solutions for large-scale industrial operations",
        popular: false,
        features: &[
            "Unlimited IoT devices",
            "Custom AI model training",
            "Multi-tenant architecture",
            "Advanced security & compliance",
            "Dedicated infrastructure",
            "Unlimited data retention",
            "On-premise deployment",
            "SLA guarantees",
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub position: &'static str,
    pub company: &'static str,
    pub rating: u8,
    pub quote: &'static str,
    pub improvement: &'static str,
    pub timeframe: &'static str,
    pub devices: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Chen",
        position: "Chief Technology Officer",
        company: "TechFlow Manufacturing",
        rating: 5,
        quote: "The platform transformed our manufacturing operations. Maintenance costs dropped by 40% and unexpected equipment failures all but disappeared.",
        improvement: "40% cost reduction",
        timeframe: "6 months",
        devices: "500+ devices",
    },
    Testimonial {
        name: "Michael Rodriguez",
        position: "Operations Director",
        company: "GreenSpace Buildings",
        rating: 5,
        quote: "Energy efficiency improved by 35% across all our properties, and tenants noticed the better climate control and lighting.",
        improvement: "35% energy savings",
        timeframe: "3 months",
        devices: "1,200+ devices",
    },
    Testimonial {
        name: "Dr. Emily Watson",
        position: "Research & Development Lead",
        company: "AgroTech Solutions",
        rating: 5,
        quote: "Crop yields increased by 25% while water usage fell by 30%. The insights changed how we farm.",
        improvement: "25% yield increase",
        timeframe: "2 seasons",
        devices: "800+ sensors",
    },
    Testimonial {
        name: "James Thompson",
        position: "Plant Manager",
        company: "PowerGrid Industries",
        rating: 5,
        quote: "System uptime improved to 99.8%, and we prevented three major equipment failures that could have cost millions.",
        improvement: "99.8% uptime",
        timeframe: "12 months",
        devices: "2,000+ devices",
    },
];

/// (title, details, sub-details) for the contact section.
pub const CONTACT_INFO: &[(&str, &str, &str)] = &[
    ("Email Us", "hello@ragentech.com", "support@ragentech.com"),
    ("Call Us", "0768439520", "Mon-Fri 9AM-6PM"),
    ("Visit Us", "No. 32 Hillcrest Avenue", "Mount Lavinia, Sri Lanka"),
];

/// Footer quick links: (label, target).
pub const QUICK_LINKS: &[(&str, &str)] = &[
    ("Privacy Policy", "/privacy"),
    ("Terms & Conditions", "/terms"),
    ("Contact", "#contact"),
];

/// Footer social links: (network, url).
pub const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("Facebook", "https://web.facebook.com/profile.php?id=61577215753500"),
    ("X", "https://x.com/ragentech"),
    ("YouTube", "https://www.youtube.com/@RagentechSystemsPvtLtd"),
    ("LinkedIn", "https://www.linkedin.com/company/ragentech-systems-pvt-ltd/"),
];

pub const FOOTER_ADDRESS: &str = "No. 32, Hillcrest Avenue, Mount Lavinia, Colombo 10370.";

pub const COPYRIGHT: &str = "© 2025 Ragentech. All rights reserved.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Warning,
    Info,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: &'static str,
    pub time: &'static str,
    pub device: &'static str,
}

pub const RECENT_ALERTS: &[Alert] = &[
    Alert {
        kind: AlertKind::Warning,
        message: "Temperature sensor #A-102 reading above normal range",
        time: "2 minutes ago",
        device: "Building A - Floor 2",
    },
    Alert {
        kind: AlertKind::Info,
        message: "Predictive maintenance scheduled for Motor Unit #B-205",
        time: "15 minutes ago",
        device: "Building B - Floor 2",
    },
    Alert {
        kind: AlertKind::Success,
        message: "Energy optimization completed - 12% efficiency gain",
        time: "1 hour ago",
        device: "System Wide",
    },
];

/// Time range choices on the telemetry panel: (value, label).
pub const TIME_RANGES: &[(&str, &str)] = &[
    ("1h", "1 Hour"),
    ("6h", "6 Hours"),
    ("24h", "24 Hours"),
    ("7d", "7 Days"),
];

/// (term, definition) pairs for the terms page.
pub const DEFINITIONS: &[(&str, &str)] = &[
    ("Affiliate", "an entity that controls, is controlled by or is under common control with a party."),
    ("Country", "Sri Lanka."),
    ("Company", "Ragentech Systems Pvt Ltd, No. 32 Hillcrest Avenue, Mount Lavinia, Colombo 10370, Sri Lanka."),
    ("Device", "any device that can access the Service such as a computer, a cellphone or a digital tablet."),
    ("Service", "the Website."),
    ("Website", "Ragentech, accessible from https://ragentech.com/"),
    ("You", "the individual or legal entity accessing or using the Service."),
];

/// Terms and conditions: (title, paragraphs).
pub const TERMS: &[(&str, &[&str])] = &[
    (
        "Acknowledgment",
        &[
            "These Terms and Conditions govern the use of this Service and the agreement between You and the Company.",
            "Your access to and use of the Service is conditioned on Your acceptance of and compliance with these Terms.",
            "You represent that you are over the age of 18.",
        ],
    ),
    (
        "Links to Other Websites",
        &[
            "Our Service may contain links to third-party web sites or services that are not owned or controlled by the Company.",
            "The Company assumes no responsibility for the content, privacy policies, or practices of any third party web sites or services.",
        ],
    ),
    (
        "Termination",
        &["We may terminate or suspend Your access immediately, without prior notice or liability, for any reason whatsoever."],
    ),
    (
        "Limitation of Liability",
        &["The entire liability of the Company shall be limited to the amount actually paid by You through the Service or 100 USD."],
    ),
    (
        "\"AS IS\" and \"AS AVAILABLE\" Disclaimer",
        &["The Service is provided \"AS IS\" and \"AS AVAILABLE\" with all faults and defects, without warranty of any kind."],
    ),
    (
        "Governing Law",
        &["The laws of the Country, excluding its conflicts of law rules, govern these Terms and Your use of the Service."],
    ),
    (
        "Disputes Resolution",
        &["If You have any concern or dispute about the Service, You agree to first try to resolve it informally by contacting the Company."],
    ),
    (
        "Severability and Waiver",
        &["If any provision of these Terms is held unenforceable, the remaining provisions continue in full force and effect."],
    ),
    (
        "Changes to These Terms and Conditions",
        &["We reserve the right to modify or replace these Terms at any time, with at least 30 days notice for material changes."],
    ),
    (
        "Contact Us",
        &["If you have any questions about these Terms and Conditions, you can contact us by email: hello@ragentech.com"],
    ),
];
