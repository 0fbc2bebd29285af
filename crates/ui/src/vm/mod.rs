mod catalog_vm;
mod nav_vm;
mod poll_vm;
mod quiz_vm;

pub use catalog_vm::{CatalogEntryVm, CatalogVm, map_catalog};
pub use nav_vm::{NavLinkVm, map_nav_links};
pub use poll_vm::{PollOptionVm, PollVm, map_poll};
pub use quiz_vm::{QuizOptionState, QuizOptionVm, QuizVm, map_quiz};
