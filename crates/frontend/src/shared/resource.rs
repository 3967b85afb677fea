/// REST resources managed by the admin screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Classes,
    Teachers,
    Rooms,
    Disciplines,
    TimeSlots,
    Slots,
    Plannings,
}

impl Resource {
    pub const ALL: [Resource; 7] = [
        Resource::Classes,
        Resource::TimeSlots,
        Resource::Teachers,
        Resource::Disciplines,
        Resource::Plannings,
        Resource::Rooms,
        Resource::Slots,
    ];

    /// Front-end route of the list page; form and details routes hang below it.
    pub fn route(&self) -> &'static str {
        match self {
            Resource::Classes => "/classes",
            Resource::Teachers => "/teachers",
            Resource::Rooms => "/rooms",
            Resource::Disciplines => "/disciplines",
            Resource::TimeSlots => "/timeslots",
            Resource::Slots => "/slots",
            Resource::Plannings => "/plannings",
        }
    }

    /// Prefix for DOM ids, e.g. `table-classes`, `create-classe`.
    pub fn key(&self) -> &'static str {
        match self {
            Resource::Classes => "classe",
            Resource::Teachers => "teacher",
            Resource::Rooms => "room",
            Resource::Disciplines => "matiere",
            Resource::TimeSlots => "timeslot",
            Resource::Slots => "slot",
            Resource::Plannings => "planning",
        }
    }

    /// Domain directory, used as the entity part of page ids.
    pub fn domain(&self) -> &'static str {
        match self {
            Resource::Classes => "a001_classe",
            Resource::Teachers => "a002_teacher",
            Resource::Rooms => "a003_room",
            Resource::Disciplines => "a004_discipline",
            Resource::TimeSlots => "a005_time_slot",
            Resource::Slots => "a007_slot",
            Resource::Plannings => "a008_planning",
        }
    }

    /// `{domain}--{category}`
    pub fn page_id(&self, category: &str) -> String {
        format!("{}--{}", self.domain(), category)
    }

    /// Section title (breadcrumb, home tile, list header).
    pub fn title(&self) -> &'static str {
        match self {
            Resource::Classes => "Classes",
            Resource::Teachers => "Enseignants",
            Resource::Rooms => "Salles",
            Resource::Disciplines => "Matières",
            Resource::TimeSlots => "Créneaux horaires",
            Resource::Slots => "Slots",
            Resource::Plannings => "Emplois du temps",
        }
    }

    /// Singular with article, as used in sentences: "la classe", "l'enseignant".
    pub fn singular(&self) -> &'static str {
        match self {
            Resource::Classes => "la classe",
            Resource::Teachers => "l'enseignant",
            Resource::Rooms => "la salle",
            Resource::Disciplines => "la matière",
            Resource::TimeSlots => "le créneau horaire",
            Resource::Slots => "le slot",
            Resource::Plannings => "l'emploi du temps",
        }
    }

    pub fn create_label(&self) -> &'static str {
        match self {
            Resource::Classes => "Créer une classe",
            Resource::Teachers => "Créer un enseignant",
            Resource::Rooms => "Créer une salle",
            Resource::Disciplines => "Créer une matière",
            Resource::TimeSlots => "Créer un créneau horaire",
            Resource::Slots => "Créer un slot",
            Resource::Plannings => "Créer un emploi du temps",
        }
    }

    pub fn new_route(&self) -> String {
        format!("{}/new", self.route())
    }

    /// Base of edit links; the table appends `/{id}`.
    pub fn edit_base(&self) -> String {
        format!("{}/edit", self.route())
    }

    /// Base of details links; the table appends `/{id}`.
    pub fn details_base(&self) -> String {
        format!("{}/details", self.route())
    }

    /// Id of the submit button on the form page.
    pub fn save_id(&self) -> &'static str {
        match self {
            Resource::Classes => "save-classe",
            Resource::Teachers => "save-enseignant",
            Resource::Rooms => "save-salle",
            Resource::Disciplines => "save-matiere",
            Resource::TimeSlots => "save-timeslot",
            Resource::Slots => "save-slot",
            Resource::Plannings => "save-planning",
        }
    }

    pub fn delete_confirmation(&self, id: &str) -> String {
        format!("Confirmez-vous la suppression de {} n°{} ?", self.singular(), id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes() {
        assert_eq!(Resource::Classes.new_route(), "/classes/new");
        assert_eq!(Resource::Slots.edit_base(), "/slots/edit");
        assert_eq!(Resource::Plannings.details_base(), "/plannings/details");
    }

    #[test]
    fn test_page_id() {
        assert_eq!(Resource::TimeSlots.page_id("list"), "a005_time_slot--list");
    }

    #[test]
    fn test_delete_confirmation() {
        assert_eq!(
            Resource::Classes.delete_confirmation("12"),
            "Confirmez-vous la suppression de la classe n°12 ?"
        );
    }
}
