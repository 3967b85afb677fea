use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_CUSTOM;

/// One call-to-action tile of the home menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeTile {
    pub id: &'static str,
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const HOME_TILES: [HomeTile; 8] = [
    HomeTile { id: "cta-classe", label: "Classes", href: "/classes", icon: "classes" },
    HomeTile { id: "cta-hours", label: "Créneaux horaires", href: "/timeslots", icon: "timeslots" },
    HomeTile { id: "cta-teachers", label: "Enseignants", href: "/teachers", icon: "teachers" },
    HomeTile { id: "cta-disciplines", label: "Matières", href: "/disciplines", icon: "disciplines" },
    HomeTile { id: "cta-options", label: "Options", href: "/options", icon: "settings" },
    HomeTile { id: "cta-planning", label: "Emplois du temps", href: "/plannings", icon: "plannings" },
    HomeTile { id: "cta-room", label: "Salles", href: "/rooms", icon: "rooms" },
    HomeTile { id: "cta-slots", label: "Slots", href: "/slots", icon: "slots" },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageFrame page_id="sys_home--custom" category=PAGE_CAT_CUSTOM>
            <div class="home">
                {HOME_TILES.iter().map(|tile| view! {
                    <a class="home-cta" href=tile.href>
                        <div class="cta" id=tile.id>
                            {icon(tile.icon)}
                            <span class="cta__label">{tile.label}</span>
                        </div>
                    </a>
                }).collect_view()}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::resource::Resource;

    #[test]
    fn test_every_section_has_a_tile() {
        for resource in Resource::ALL {
            assert!(
                HOME_TILES.iter().any(|t| t.href == resource.route() && t.label == resource.title()),
                "no tile for {resource:?}"
            );
        }
        assert!(HOME_TILES.iter().any(|t| t.href == "/options"));
    }
}
