use quest_core::model::Section;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItemVm {
    pub section: Section,
    pub label: &'static str,
    pub active: bool,
}

#[must_use]
pub fn map_nav_items(current: Section) -> Vec<NavItemVm> {
    Section::ALL
        .into_iter()
        .map(|section| NavItemVm {
            section,
            label: section.label(),
            active: section == current,
        })
        .collect()
}
