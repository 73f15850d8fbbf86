use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ResourceError {
    #[error("resource title cannot be empty")]
    EmptyTitle,

    #[error("invalid resource url {raw:?}")]
    InvalidUrl { raw: String },
}

/// Tabs of the Resources section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceTab {
    #[default]
    Art,
    Literature,
    Tools,
}

impl ResourceTab {
    pub const ALL: [ResourceTab; 3] = [
        ResourceTab::Art,
        ResourceTab::Literature,
        ResourceTab::Tools,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ResourceTab::Art => "Art Resources",
            ResourceTab::Literature => "Literature",
            ResourceTab::Tools => "Tools",
        }
    }
}

/// External site a student can open. Only http(s) targets are accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLink {
    title: String,
    url: Url,
}

impl ResourceLink {
    /// # Errors
    ///
    /// Returns `ResourceError::EmptyTitle` for a blank title and
    /// `ResourceError::InvalidUrl` if `url` does not parse or is not http(s).
    pub fn new(title: impl Into<String>, url: impl AsRef<str>) -> Result<Self, ResourceError> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(ResourceError::EmptyTitle);
        }
        let raw = url.as_ref().trim();
        let url = Url::parse(raw).map_err(|_| ResourceError::InvalidUrl {
            raw: raw.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ResourceError::InvalidUrl {
                raw: raw.to_string(),
            });
        }
        Ok(Self { title, url })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }
}

/// A card on the Resources section: a heading, an optional blurb and links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceGroup {
    pub tab: ResourceTab,
    pub title: String,
    pub blurb: Option<String>,
    pub links: Vec<ResourceLink>,
}

impl ResourceGroup {
    fn new(tab: ResourceTab, title: &str, blurb: Option<&str>, links: Vec<ResourceLink>) -> Self {
        Self {
            tab,
            title: title.to_string(),
            blurb: blurb.map(str::to_string),
            links,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLibrary {
    groups: Vec<ResourceGroup>,
}

impl ResourceLibrary {
    /// The quest's reading and tool list.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError` if one of the built-in links fails validation.
    pub fn reference() -> Result<Self, ResourceError> {
        let groups = vec![
            ResourceGroup::new(
                ResourceTab::Art,
                "Virtual Museums",
                None,
                vec![
                    ResourceLink::new("The British Museum", "https://www.britishmuseum.org/")?,
                    ResourceLink::new("The Metropolitan Museum", "https://www.metmuseum.org/")?,
                    ResourceLink::new(
                        "Google Arts & Culture",
                        "https://artsandculture.google.com/",
                    )?,
                ],
            ),
            ResourceGroup::new(
                ResourceTab::Art,
                "Art Movements Guide",
                Some("Learn about Impressionism, Renaissance, Modern Art, and more"),
                Vec::new(),
            ),
            ResourceGroup::new(
                ResourceTab::Literature,
                "Classic Literature",
                None,
                vec![
                    ResourceLink::new("Project Gutenberg", "https://www.gutenberg.org/")?,
                    ResourceLink::new(
                        "Folger Shakespeare Library",
                        "https://shakespeare.folger.edu/",
                    )?,
                    ResourceLink::new("Poetry Foundation", "https://www.poetryfoundation.org/")?,
                ],
            ),
            ResourceGroup::new(
                ResourceTab::Literature,
                "Literary Terms",
                Some("Dictionary of metaphors, similes, and other literary devices"),
                Vec::new(),
            ),
            ResourceGroup::new(
                ResourceTab::Tools,
                "Dictionary",
                Some("Cambridge English Dictionary for definitions"),
                vec![ResourceLink::new(
                    "Open Dictionary",
                    "https://dictionary.cambridge.org/",
                )?],
            ),
            ResourceGroup::new(
                ResourceTab::Tools,
                "Notebook",
                Some("Keep notes and vocabulary lists"),
                Vec::new(),
            ),
            ResourceGroup::new(
                ResourceTab::Tools,
                "Help Center",
                Some("Get help with tasks and technical issues"),
                Vec::new(),
            ),
        ];
        Ok(Self { groups })
    }

    pub fn groups_for(&self, tab: ResourceTab) -> impl Iterator<Item = &ResourceGroup> {
        self.groups.iter().filter(move |group| group.tab == tab)
    }
}
