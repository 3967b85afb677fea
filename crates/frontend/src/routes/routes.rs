use leptos::prelude::*;
use leptos_router::components::{Outlet, ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::domain::a001_classe::ui::{details::ClasseDetails, form::ClasseForm, list::ClasseList};
use crate::domain::a002_teacher::ui::{
    details::TeacherDetails, form::TeacherForm, list::TeacherList,
};
use crate::domain::a003_room::ui::{details::RoomDetails, form::RoomForm, list::RoomList};
use crate::domain::a004_discipline::ui::{
    details::DisciplineDetails, form::DisciplineForm, list::DisciplineList,
};
use crate::domain::a005_time_slot::ui::{
    details::TimeSlotDetails, form::TimeSlotForm, list::TimeSlotList,
};
use crate::domain::a007_slot::ui::{details::SlotDetails, form::SlotForm, list::SlotList};
use crate::domain::a008_planning::ui::{
    details::PlanningDetails, form::PlanningForm, list::PlanningList,
};
use crate::layout::header::Header;
use crate::shared::components::breadcrumb::{Breadcrumb, Crumb};
use crate::system::options::OptionsPage;
use crate::system::pages::home::HomePage;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <main id="sys_not_found--custom" class="page page--custom" data-page-category="custom">
            <Breadcrumb elements=vec![Crumb::current("Page introuvable")] />
        </main>
    }
}

/// Every resource gets `/{r}`, `/{r}/new`, `/{r}/edit/:id` and `/{r}/details/:id`.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Header />
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/options") view=OptionsPage />
                <ParentRoute path=path!("/classes") view=Outlet>
                    <Route path=path!("") view=ClasseList />
                    <Route path=path!("new") view=ClasseForm />
                    <Route path=path!("edit/:id") view=ClasseForm />
                    <Route path=path!("details/:id") view=ClasseDetails />
                </ParentRoute>
                <ParentRoute path=path!("/teachers") view=Outlet>
                    <Route path=path!("") view=TeacherList />
                    <Route path=path!("new") view=TeacherForm />
                    <Route path=path!("edit/:id") view=TeacherForm />
                    <Route path=path!("details/:id") view=TeacherDetails />
                </ParentRoute>
                <ParentRoute path=path!("/rooms") view=Outlet>
                    <Route path=path!("") view=RoomList />
                    <Route path=path!("new") view=RoomForm />
                    <Route path=path!("edit/:id") view=RoomForm />
                    <Route path=path!("details/:id") view=RoomDetails />
                </ParentRoute>
                <ParentRoute path=path!("/disciplines") view=Outlet>
                    <Route path=path!("") view=DisciplineList />
                    <Route path=path!("new") view=DisciplineForm />
                    <Route path=path!("edit/:id") view=DisciplineForm />
                    <Route path=path!("details/:id") view=DisciplineDetails />
                </ParentRoute>
                <ParentRoute path=path!("/timeslots") view=Outlet>
                    <Route path=path!("") view=TimeSlotList />
                    <Route path=path!("new") view=TimeSlotForm />
                    <Route path=path!("edit/:id") view=TimeSlotForm />
                    <Route path=path!("details/:id") view=TimeSlotDetails />
                </ParentRoute>
                <ParentRoute path=path!("/slots") view=Outlet>
                    <Route path=path!("") view=SlotList />
                    <Route path=path!("new") view=SlotForm />
                    <Route path=path!("edit/:id") view=SlotForm />
                    <Route path=path!("details/:id") view=SlotDetails />
                </ParentRoute>
                <ParentRoute path=path!("/plannings") view=Outlet>
                    <Route path=path!("") view=PlanningList />
                    <Route path=path!("new") view=PlanningForm />
                    <Route path=path!("edit/:id") view=PlanningForm />
                    <Route path=path!("details/:id") view=PlanningDetails />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
