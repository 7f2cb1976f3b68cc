pub mod area;
pub mod level;
pub mod section;

pub use area::{Accion, AreaQuestions};
pub use level::{Level, LevelOption};
pub use section::{AccionSection, SectionType};
