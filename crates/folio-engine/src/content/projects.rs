use serde::{Deserialize, Serialize};

/// One project shown in the portfolio grid. Immutable content: the modal
/// renderer reads it, nothing writes it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectRecord {
    pub title: String,
    /// Short card description.
    pub description: String,
    /// Long-form text shown inside the modal.
    pub full_description: String,
    pub technologies: Vec<String>,
    pub features: Vec<String>,
    /// Hero image URL.
    pub image: String,
    pub live_url: String,
    pub github_url: String,
}

/// The ordered project list, loaded from a JSON file at startup.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProjectCatalog {
    pub projects: Vec<ProjectRecord>,
}

impl ProjectCatalog {
    /// Parse a catalog from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn get(&self, index: usize) -> Option<&ProjectRecord> {
        self.projects.get(index)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// The catalog shipped with the page.
    pub fn builtin() -> Self {
        Self::from_json(BUILTIN_PROJECTS).expect("builtin catalog parses")
    }
}

/// The modal's rendered view of one project: the record's fields, copied
/// verbatim, in the shape the overlay template consumes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectView {
    pub title: String,
    pub full_description: String,
    pub technologies: Vec<String>,
    pub features: Vec<String>,
    pub image: String,
    pub live_url: String,
    pub github_url: String,
}

impl From<&ProjectRecord> for ProjectView {
    fn from(record: &ProjectRecord) -> Self {
        Self {
            title: record.title.clone(),
            full_description: record.full_description.clone(),
            technologies: record.technologies.clone(),
            features: record.features.clone(),
            image: record.image.clone(),
            live_url: record.live_url.clone(),
            github_url: record.github_url.clone(),
        }
    }
}

const BUILTIN_PROJECTS: &str = r##"{
  "projects": [
    {
      "title": "AI-Powered Analytics Platform",
      "description": "Enterprise-grade analytics platform leveraging machine learning for predictive insights and automated decision-making.",
      "full_description": "This comprehensive analytics platform combines the power of artificial intelligence with intuitive data visualization to help businesses make data-driven decisions. The system processes millions of data points in real-time, providing actionable insights through advanced machine learning algorithms.",
      "technologies": ["React", "Python", "TensorFlow", "PostgreSQL", "AWS"],
      "features": [
        "Real-time data processing",
        "Predictive analytics using ML models",
        "Customizable dashboards",
        "Automated reporting",
        "API integrations"
      ],
      "image": "https://images.unsplash.com/photo-1551650975-87deedd944c3?w=1200&q=80",
      "live_url": "#",
      "github_url": "#"
    },
    {
      "title": "Internal Developer Platform",
      "description": "Built a scalable Internal Developer Platform to manage microservices, deployments, feature flags, and observability in one place.",
      "full_description": "A comprehensive Internal Developer Platform designed to streamline developer operations and provide visibility across environments. The platform features a responsive React dashboard, a modular backend architecture, and secure RBAC-based authentication. It centralizes microservices management, deployment workflows, feature flags, and observability tools to enhance developer productivity and operational efficiency.",
      "technologies": ["React", "Node.js", "RBAC", "Microservices", "Docker"],
      "features": [
        "Microservices management dashboard",
        "Automated deployment workflows",
        "Feature flag management",
        "Observability and monitoring tools",
        "RBAC-based secure authentication",
        "Environment visibility and control"
      ],
      "image": "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=1200&q=80",
      "live_url": "https://frontend-eight-lilac-25.vercel.app",
      "github_url": "#"
    },
    {
      "title": "DeFi Trading Platform",
      "description": "Decentralized finance platform enabling secure crypto trading with smart contract integration and real-time market data.",
      "full_description": "A cutting-edge decentralized finance platform that enables users to trade cryptocurrencies securely using blockchain technology. Features smart contract integration for trustless transactions.",
      "technologies": ["React", "Solidity", "Web3.js", "Ethereum", "IPFS"],
      "features": [
        "Wallet integration",
        "Smart contract trading",
        "Real-time market data",
        "Liquidity pools",
        "Token swapping"
      ],
      "image": "https://images.unsplash.com/photo-1633356122544-f134324a6cee?w=1200&q=80",
      "live_url": "#",
      "github_url": "#"
    },
    {
      "title": "Component Design System",
      "description": "Comprehensive design system with 100+ components, full documentation, and accessibility compliance.",
      "full_description": "A professional design system built for enterprise applications, featuring a comprehensive component library with full documentation, accessibility compliance, and customization options.",
      "technologies": ["React", "TypeScript", "Storybook", "Figma", "CSS-in-JS"],
      "features": [
        "100+ reusable components",
        "Full accessibility compliance",
        "Comprehensive documentation",
        "Theme customization",
        "Figma design files"
      ],
      "image": "https://images.unsplash.com/photo-1581092918056-0c4c3acd3789?w=1200&q=80",
      "live_url": "#",
      "github_url": "#"
    }
  ]
}"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_parses() {
        let catalog = ProjectCatalog::builtin();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.get(0).unwrap().technologies.len(), 5);
    }

    #[test]
    fn out_of_range_is_none() {
        let catalog = ProjectCatalog::builtin();
        assert!(catalog.get(99).is_none());
    }

    #[test]
    fn view_copies_record_fields() {
        let catalog = ProjectCatalog::builtin();
        let record = catalog.get(1).unwrap();
        let view = ProjectView::from(record);
        assert_eq!(view.title, record.title);
        assert_eq!(view.full_description, record.full_description);
        assert_eq!(view.technologies, record.technologies);
        assert_eq!(view.features.len(), 6);
        assert_eq!(view.live_url, "https://frontend-eight-lilac-25.vercel.app");
    }

    #[test]
    fn parse_custom_catalog() {
        let json = r#"{
            "projects": [{
                "title": "T", "description": "d", "full_description": "fd",
                "technologies": ["a"], "features": ["f"],
                "image": "i", "live_url": "l", "github_url": "g"
            }]
        }"#;
        let catalog = ProjectCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(0).unwrap().title, "T");
    }
}
