use quest_core::model::{ResourceLibrary, ResourceTab};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceLinkVm {
    pub title: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceGroupVm {
    pub title: String,
    pub blurb: Option<String>,
    pub links: Vec<ResourceLinkVm>,
}

#[must_use]
pub fn map_resource_groups(library: &ResourceLibrary, tab: ResourceTab) -> Vec<ResourceGroupVm> {
    library
        .groups_for(tab)
        .map(|group| ResourceGroupVm {
            title: group.title.clone(),
            blurb: group.blurb.clone(),
            links: group
                .links
                .iter()
                .map(|link| ResourceLinkVm {
                    title: link.title().to_string(),
                    href: link.url().to_string(),
                })
                .collect(),
        })
        .collect()
}
