use oedipus_core::model::SectionId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLinkVm {
    pub id: SectionId,
    pub label: &'static str,
    pub active: bool,
}

impl NavLinkVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.active {
            "nav-link nav-link--active"
        } else {
            "nav-link"
        }
    }
}

/// One link per page section, in page order, with `active` highlighted.
#[must_use]
pub fn map_nav_links(active: SectionId) -> Vec<NavLinkVm> {
    SectionId::ALL
        .into_iter()
        .map(|id| NavLinkVm {
            id,
            label: id.nav_label(),
            active: id == active,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_link_is_active() {
        let links = map_nav_links(SectionId::Themes);
        assert_eq!(links.len(), SectionId::ALL.len());
        let active: Vec<_> = links.iter().filter(|link| link.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].label, "Themes");
        assert_eq!(active[0].class(), "nav-link nav-link--active");
    }

    #[test]
    fn links_follow_page_order() {
        let labels: Vec<_> = map_nav_links(SectionId::Hero)
            .into_iter()
            .map(|link| link.label)
            .collect();
        assert_eq!(labels.first(), Some(&"Home"));
        assert_eq!(labels.last(), Some(&"Modern Relevance"));
    }
}
