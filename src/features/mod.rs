pub mod catpics;
