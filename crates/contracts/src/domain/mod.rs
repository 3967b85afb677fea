pub mod a001_classe;
pub mod a002_teacher;
pub mod a003_room;
pub mod a004_discipline;
pub mod a005_time_slot;
pub mod a006_day;
pub mod a007_slot;
pub mod a008_planning;
pub mod common;
