pub mod note;
pub mod task;
pub mod user;

pub use note::{Note, NoteInput};
pub use task::{ToDoTask, ToDoTaskInput};
pub use user::{User, UserRecord};
